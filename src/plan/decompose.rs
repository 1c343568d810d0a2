//! Transition planning for one state sequence.
//!
//! Converts an ordered, pre-rendered state sequence into the schedule the
//! player executes: reveal the first state, morph between consecutive
//! states by label match, then settle and fade out. Consecutive duplicate
//! states are deliberately kept — they become no-visual-change holds, and
//! collapsing them would desynchronize the parallel tracks of a triad,
//! which rely on state-count parity for alignment.

use std::collections::BTreeSet;

use crate::foundation::error::{SlokaError, SlokaResult};
use crate::plan::steps::{
    DecomposeTimings, ItemId, MismatchAction, MismatchedLabel, PlanBuilder, Step,
};

/// Plan the matched-diff morph between two declared items.
fn morph_step(
    plan: &PlanBuilder,
    from: ItemId,
    to: ItemId,
    duration_secs: f64,
) -> SlokaResult<Step> {
    let before: BTreeSet<&str> = plan.item(from)?.labels.iter().map(String::as_str).collect();
    let after: BTreeSet<&str> = plan.item(to)?.labels.iter().map(String::as_str).collect();

    // Matched labels keep the after state's reading order; duplicates from
    // label collisions are not reconciled here (positional fallback is the
    // player's job).
    let mut matched = Vec::new();
    let mut seen = BTreeSet::new();
    for label in &plan.item(to)?.labels {
        if before.contains(label.as_str()) && seen.insert(label.as_str()) {
            matched.push(label.clone());
        }
    }

    let mut mismatched = Vec::new();
    for label in before.difference(&after) {
        mismatched.push(MismatchedLabel {
            label: (*label).to_string(),
            action: MismatchAction::ShrinkAndVanish,
        });
    }
    for label in after.difference(&before) {
        mismatched.push(MismatchedLabel {
            label: (*label).to_string(),
            action: MismatchAction::GrowAndAppear,
        });
    }

    Ok(Step::MorphDiff {
        from,
        to,
        duration_secs,
        matched,
        mismatched,
    })
}

/// Build the full decomposition schedule for one track's state items.
///
/// The sequence must be non-empty. A single-state sequence still yields a
/// valid plan: write-in, settle, fade-out, with no morph steps.
pub fn decompose(
    plan: &PlanBuilder,
    states: &[ItemId],
    timings: &DecomposeTimings,
) -> SlokaResult<Step> {
    let (&first, rest) = states
        .split_first()
        .ok_or_else(|| SlokaError::construction("cannot decompose an empty state sequence"))?;
    let &last = states.last().unwrap_or(&first);

    let mut steps = vec![Step::Write {
        item: first,
        duration_secs: timings.write_secs,
    }];

    let mut prev = first;
    for &next in rest {
        steps.push(morph_step(plan, prev, next, timings.morph_secs)?);
        steps.push(Step::Wait {
            duration_secs: timings.hold_secs,
        });
        prev = next;
    }

    steps.push(Step::Wait {
        duration_secs: timings.settle_secs,
    });
    steps.push(Step::FadeOut {
        items: vec![last],
        duration_secs: timings.fade_secs,
    });

    Ok(Step::Succession { steps })
}

#[cfg(test)]
#[path = "../../tests/unit/plan/decompose.rs"]
mod tests;
