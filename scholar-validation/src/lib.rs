//! # scholar-validation
//!
//! Deterministic quality gates for the Scholar QA pipeline.
//!
//! ## Checks
//! 1. **HITL gate**: rule-based evidence sufficiency, runs before any
//!    generation cost is spent.
//! 2. **Schema**: candidate answers must have non-empty text and
//!    well-formed citations; one bounded resynthesis on failure.
//! 3. **Citation grounding**: every claimed source must appear among
//!    retrieved evidence with overlapping pages.
//! 4. **Hallucination screen**: heuristic pattern checks over the
//!    answer text.
//!
//! Grounding and hallucination findings are confidence penalties,
//! never retry triggers; poor grounding is an evidentiary property a
//! retry is unlikely to fix.

pub mod checks;
pub mod engine;
pub mod gate;

pub use engine::{Assessment, ValidationEngine};
