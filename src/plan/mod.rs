//! Production-allocation engine: envelope enrichment, merit-order fill,
//! and over-production compensation.

pub mod allocator;
pub mod calculator;
pub mod envelope;
pub mod types;

pub use calculator::{DispatchReport, PlanError, PlantAssignment, compute_plan, validate};
pub use envelope::OperatingEnvelope;
pub use types::{Fuels, Payload, PlantProduction, PlantType, PowerPlant};
