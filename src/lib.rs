//! Merit-order production-plan calculator.
//!
//! Given a target load, a fleet of power plants and current fuel prices,
//! computes how much each plant should produce. The engine is a documented
//! greedy heuristic: cheapest plants fill first, and a plant whose minimum
//! output would overshoot the load can throttle already-committed plants
//! down to make room.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
pub mod io;
/// Production-allocation engine: envelopes, merit order, compensation.
pub mod plan;
