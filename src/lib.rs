//! Vitalog - personal health tracking core
//!
//! The engine behind a health tracker's badges screen: aggregate weight,
//! habit, workout, and meal logs into a stats snapshot, evaluate a fixed
//! achievement catalog against it, and diff the result against the
//! acknowledged baseline so each unlock is announced exactly once.
//!
//! Sync, rendering, and notifications live outside this crate; it takes
//! record slices in and hands plain values back.

pub mod stats;

pub use stats::*;
