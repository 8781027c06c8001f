//! Input/output helpers for computed plans.

pub mod export;
