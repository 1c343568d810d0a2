//! Sloka turns a verse description into an animated teaching plan.
//!
//! A verse file describes a Sanskrit sloka as trees of nested phrases and
//! words (with per-word color roles, glosses and pacing), paired line by
//! line with an English rendering. The crate compiles that description into
//! a declarative animation plan: color-coded, morphologically labelled text
//! in three parallel scripts (Devanagari, IAST transliteration, English),
//! revealed by progressive decomposition with matched-diff morphs between
//! states.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: verse source -> [`Sloka`] (citation + paired node trees)
//! 2. **Derive**: per node and language, the ordered decomposition states
//!    ([`text_states`])
//! 3. **Plan**: state sequences -> transition schedules ([`decompose`]),
//!    composed per verse by [`teach`] into a [`TeachingPlan`]
//! 4. **Play** (external): a player executes the plan's write-in / morph /
//!    fade primitives against its own clock
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: parsing, derivation and planning are pure and stable
//!   for a given input; all durations are fixed per-call constants.
//! - **Fail fast**: malformed source, invalid construction and shape
//!   mismatches abort before any plan step is emitted.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod eval;
mod foundation;
mod markup;
mod model;
mod parse;
mod plan;
mod translit;

pub use eval::states::{RenderedState, node_markup, state_strings, text_states};
pub use foundation::error::{SlokaError, SlokaResult};
pub use markup::typst::{FontVariant, wrap};
pub use model::node::{Language, Node, NodeSpec};
pub use model::palette::Color;
pub use model::sloka::{Citation, Sloka};
pub use parse::parser::parse;
pub use plan::decompose::decompose;
pub use plan::steps::{
    DecomposeTimings, ItemId, MismatchAction, MismatchedLabel, PlanBuilder, Step, TeachOptions,
    TeachingPlan, TextItem,
};
pub use plan::teach::teach;
pub use translit::scheme::{Scheme, transliterate};
