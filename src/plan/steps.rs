//! The teaching-plan IR.
//!
//! A [`TeachingPlan`] is a pure data structure: a table of drawable text
//! items plus a nested schedule of steps over them. It is the hand-off
//! format to the playback collaborator, which advances a shared virtual
//! clock; nothing here renders or times anything itself. Plans serialize to
//! JSON via serde.
//!
//! Position convention: anchors are scene coordinates with y pointing up.

use kurbo::Point;

use crate::eval::states::RenderedState;
use crate::foundation::error::{SlokaError, SlokaResult};

/// Identifier for a text item declared in [`TeachingPlan::items`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ItemId(pub u32);

/// A concrete drawable one-line text object with an anchor position.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextItem {
    /// Full markup string for the line.
    pub markup: String,
    /// Label anchors present in the markup, in reading order.
    pub labels: Vec<String>,
    /// Anchor position in scene coordinates.
    pub anchor: Point,
    /// Uniform scale applied by the player.
    pub scale: f64,
}

/// Resolved treatment of one unmatched element during a morph, decided by
/// set-membership of its label in the before/after state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MismatchAction {
    /// Present only in the before state: shrink to center and vanish.
    ShrinkAndVanish,
    /// Present only in the after state: grow from center and appear.
    GrowAndAppear,
}

/// One unmatched label with its resolved action.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MismatchedLabel {
    /// The label anchor.
    pub label: String,
    /// What the player does with it.
    pub action: MismatchAction,
}

/// One scheduling primitive of a teaching plan.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    /// Write-in (reveal) an item.
    Write {
        /// Target item.
        item: ItemId,
        /// Fixed write-in duration.
        duration_secs: f64,
    },
    /// Matched-diff transform between two items: elements matched by label
    /// morph continuously, the rest follow their [`MismatchAction`].
    MorphDiff {
        /// Before state.
        from: ItemId,
        /// After state.
        to: ItemId,
        /// Fixed morph duration.
        duration_secs: f64,
        /// Labels present in both states, in the after state's order.
        matched: Vec<String>,
        /// Labels present in exactly one state.
        mismatched: Vec<MismatchedLabel>,
    },
    /// Hold the current picture.
    Wait {
        /// Pause duration.
        duration_secs: f64,
    },
    /// Fade out a group of items together.
    FadeOut {
        /// Items faded as one group.
        items: Vec<ItemId>,
        /// Fixed fade duration.
        duration_secs: f64,
    },
    /// Child steps run one after another.
    Succession {
        /// Ordered child steps.
        steps: Vec<Step>,
    },
    /// Child steps start simultaneously on the shared clock.
    Aligned {
        /// Concurrent tracks.
        tracks: Vec<Step>,
    },
}

/// Fixed per-call durations for one decomposition run. No timing is ever
/// derived from tree size; callers wanting different pacing pass different
/// constants.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DecomposeTimings {
    /// Write-in duration for the first state.
    pub write_secs: f64,
    /// Duration of each matched-diff morph.
    pub morph_secs: f64,
    /// Pause after each morph.
    pub hold_secs: f64,
    /// Closing pause before the fade-out.
    pub settle_secs: f64,
    /// Fade-out duration for the final state.
    pub fade_secs: f64,
}

impl Default for DecomposeTimings {
    fn default() -> Self {
        Self {
            write_secs: 1.0,
            morph_secs: 0.5,
            hold_secs: 0.2,
            settle_secs: 1.2,
            fade_secs: 0.5,
        }
    }
}

/// Fixed pacing and layout constants for a whole verse run.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TeachOptions {
    /// Uniform scale for every text item.
    pub scale: f64,
    /// Write-in duration per assembled Sanskrit line.
    pub line_write_secs: f64,
    /// Vertical distance between stacked lines.
    pub line_gap: f64,
    /// Pause before the citation appears.
    pub citation_pause_secs: f64,
    /// Citation write-in duration.
    pub citation_write_secs: f64,
    /// Hold after the citation before the prologue fades.
    pub citation_hold_secs: f64,
    /// Fade duration for the assembled lines + citation group.
    pub prologue_fade_secs: f64,
    /// Vertical offset of the Sanskrit/English tracks from the
    /// transliteration anchor.
    pub triad_gap: f64,
    /// Per-track decomposition pacing.
    pub timings: DecomposeTimings,
}

impl Default for TeachOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            line_write_secs: 6.0,
            line_gap: 1.2,
            citation_pause_secs: 2.0,
            citation_write_secs: 0.5,
            citation_hold_secs: 0.5,
            prologue_fade_secs: 1.0,
            triad_gap: 2.0,
            timings: DecomposeTimings::default(),
        }
    }
}

/// A complete verse teaching plan: the item table plus the root schedule.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TeachingPlan {
    /// All text items referenced by the schedule.
    pub items: Vec<TextItem>,
    /// Top-level schedule (a succession).
    pub root: Step,
}

impl TeachingPlan {
    /// Look up an item, failing on a dangling id.
    pub fn item(&self, id: ItemId) -> SlokaResult<&TextItem> {
        self.items.get(id.0 as usize).ok_or_else(|| {
            SlokaError::construction(format!("plan references missing item {}", id.0))
        })
    }
}

/// Accumulates text items while the orchestrator and transition planner
/// assemble the schedule.
#[derive(Debug, Default)]
pub struct PlanBuilder {
    items: Vec<TextItem>,
}

impl PlanBuilder {
    /// Start an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare one drawable item, returning its id.
    pub fn add_item(
        &mut self,
        markup: String,
        labels: Vec<String>,
        anchor: Point,
        scale: f64,
    ) -> ItemId {
        let id = ItemId(self.items.len() as u32);
        self.items.push(TextItem {
            markup,
            labels,
            anchor,
            scale,
        });
        id
    }

    /// Declare one item per rendered state, all sharing `anchor` and `scale`.
    pub fn add_states(
        &mut self,
        states: &[RenderedState],
        anchor: Point,
        scale: f64,
    ) -> Vec<ItemId> {
        states
            .iter()
            .map(|s| self.add_item(s.markup.clone(), s.labels.clone(), anchor, scale))
            .collect()
    }

    /// Look up a declared item.
    pub fn item(&self, id: ItemId) -> SlokaResult<&TextItem> {
        self.items.get(id.0 as usize).ok_or_else(|| {
            SlokaError::construction(format!("unknown plan item {}", id.0))
        })
    }

    /// Close the builder with a root schedule.
    pub fn finish(self, root: Step) -> TeachingPlan {
        TeachingPlan {
            items: self.items,
            root,
        }
    }
}
