//! Deterministic eligibility screening for the Presidential Employment Stimulus Initiative
//! (PESI) farmer-support programme.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
