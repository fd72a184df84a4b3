//! # scholar-workflow
//!
//! Per-request orchestration of the Scholar QA pipeline:
//! classify → retrieve → gate → synthesize → validate, settling every
//! request as either a validated answer or a human-review handoff.

pub mod orchestrator;

pub use orchestrator::Orchestrator;
