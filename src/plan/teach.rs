//! The verse orchestrator.
//!
//! Composes a whole verse into one top-level succession: assembled
//! Sanskrit lines with the citation as a prologue, then one aligned
//! decomposition block per translation pair, in strict (line, node) source
//! order. Within a block the three tracks — Devanagari above, IAST at the
//! anchor, English below — start simultaneously on the player's clock.

use kurbo::Point;

use crate::eval::states::{RenderedState, node_markup, text_states};
use crate::foundation::error::SlokaResult;
use crate::model::node::Language;
use crate::model::sloka::Sloka;
use crate::plan::decompose::decompose;
use crate::plan::steps::{PlanBuilder, Step, TeachOptions, TeachingPlan};

/// Build the complete teaching plan for `sloka`.
///
/// The pairing invariant is re-checked before any step is emitted, so a
/// malformed verse never yields a partial plan.
pub fn teach(sloka: &Sloka, options: &TeachOptions) -> SlokaResult<TeachingPlan> {
    sloka.validate()?;

    let mut plan = PlanBuilder::new();
    let mut steps = Vec::new();
    let mut prologue = Vec::new();

    // Prologue: the assembled lines, stacked downward from the origin.
    for (i, line) in sloka.sanskrit().iter().enumerate() {
        let mut markup = String::new();
        let mut labels = Vec::with_capacity(line.len());
        for node in line {
            markup.push_str(&node_markup(node, Language::Sanskrit)?);
            labels.push(node.label().to_string());
        }
        let anchor = Point::new(0.0, -(i as f64) * options.line_gap);
        let id = plan.add_item(markup, labels, anchor, options.scale);
        steps.push(Step::Write {
            item: id,
            duration_secs: options.line_write_secs,
        });
        prologue.push(id);
    }

    let citation = sloka.citation();
    let citation_anchor = Point::new(0.0, -(sloka.sanskrit().len() as f64) * options.line_gap);
    let citation_id = plan.add_item(
        node_markup(citation.node(), citation.language())?,
        vec![citation.node().label().to_string()],
        citation_anchor,
        options.scale,
    );
    prologue.push(citation_id);

    steps.push(Step::Succession {
        steps: vec![
            Step::Wait {
                duration_secs: options.citation_pause_secs,
            },
            Step::Write {
                item: citation_id,
                duration_secs: options.citation_write_secs,
            },
            Step::Wait {
                duration_secs: options.citation_hold_secs,
            },
            Step::FadeOut {
                items: prologue,
                duration_secs: options.prologue_fade_secs,
            },
        ],
    });

    // One aligned triad per translation pair, lines outer, nodes inner.
    for (i, (sa_line, en_line)) in sloka.sanskrit().iter().zip(sloka.english()).enumerate() {
        for (j, (sa_node, en_node)) in sa_line.iter().zip(en_line).enumerate() {
            let sa = text_states(sa_node, Language::Sanskrit)?;
            let ia = text_states(sa_node, Language::Translit)?;
            let en = text_states(en_node, Language::English)?;

            // The three tracks must keep step parity or the aligned block
            // drifts: a shallower sequence repeats its final state until the
            // deepest one finishes unfolding.
            let depth = sa.len().max(ia.len()).max(en.len());
            let sa = clamp_states(sa, depth);
            let ia = clamp_states(ia, depth);
            let en = clamp_states(en, depth);

            tracing::debug!(
                line = i + 1,
                node = j + 1,
                text = sa_node.text(),
                states = depth,
                "planning triad"
            );

            let sa_ids = plan.add_states(&sa, Point::new(0.0, options.triad_gap), options.scale);
            let ia_ids = plan.add_states(&ia, Point::ORIGIN, options.scale);
            let en_ids = plan.add_states(&en, Point::new(0.0, -options.triad_gap), options.scale);

            steps.push(Step::Aligned {
                tracks: vec![
                    decompose(&plan, &sa_ids, &options.timings)?,
                    decompose(&plan, &ia_ids, &options.timings)?,
                    decompose(&plan, &en_ids, &options.timings)?,
                ],
            });
        }
    }

    Ok(plan.finish(Step::Succession { steps }))
}

fn clamp_states(mut states: Vec<RenderedState>, depth: usize) -> Vec<RenderedState> {
    if let Some(last) = states.last().cloned() {
        states.resize(depth, last);
    }
    states
}

#[cfg(test)]
#[path = "../../tests/unit/plan/teach.rs"]
mod tests;
