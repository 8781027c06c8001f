//! Orchestration of one production-plan calculation.
//!
//! Validates the payload, enriches every plant into an operating envelope,
//! runs the merit-order allocator, and shapes the outcome into a
//! [`DispatchReport`]. Pure and deterministic: identical inputs produce
//! identical reports, and concurrent calls share no state.

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::plan::allocator::{self, by_cost_ascending};
use crate::plan::envelope::{OperatingEnvelope, round_to_tenth};
use crate::plan::types::{Payload, PlantProduction, PlantType};

/// One field-level violation found while validating a payload.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Dotted field path (e.g., `"powerplants[2].efficiency"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Why a production plan could not be computed.
#[derive(Debug, Error)]
pub enum PlanError {
    /// The payload failed validation; every violation is listed.
    #[error("invalid payload: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    InvalidPayload(Vec<ValidationError>),
}

/// One plant's slot in the computed plan.
#[derive(Debug, Clone)]
pub struct PlantAssignment {
    /// Plant name, echoed from the request.
    pub name: String,
    /// Generation technology.
    pub plant_type: PlantType,
    /// Cost of producing 1 MWh (€).
    pub cost_eur_per_mwh: f64,
    /// Effective minimum output (MW).
    pub min_mw: f64,
    /// Effective maximum output (MW).
    pub max_mw: f64,
    /// Committed production before wire rounding (MW).
    pub mw: f64,
}

impl From<&PlantAssignment> for PlantProduction {
    fn from(a: &PlantAssignment) -> Self {
        Self {
            name: a.name.clone(),
            p: round_to_tenth(a.mw),
        }
    }
}

/// Full result of one allocation, richer than the wire response.
#[derive(Debug, Clone)]
pub struct DispatchReport {
    /// Load the caller asked for (MW).
    pub requested_mw: f64,
    /// Sum of commitments before rounding (MW).
    pub achieved_mw: f64,
    /// Over-production left when compensation ran out of headroom (MW).
    pub overshoot_mw: f64,
    /// Assignments in ascending-cost order, one per input plant.
    pub assignments: Vec<PlantAssignment>,
}

impl DispatchReport {
    /// Achieved minus requested load. Negative when capacity ran short,
    /// positive when compensation could not shed the full overshoot.
    pub fn delta_mw(&self) -> f64 {
        self.achieved_mw - self.requested_mw
    }

    /// Wire rows, one per input plant, `p` rounded to 0.1 MW.
    pub fn to_productions(&self) -> Vec<PlantProduction> {
        self.assignments.iter().map(PlantProduction::from).collect()
    }
}

/// Validates a payload before any arithmetic runs.
///
/// Collects every violation rather than stopping at the first, so a caller
/// can fix a payload in one round trip. An infeasible load is deliberately
/// not a violation.
pub fn validate(payload: &Payload) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if payload.load < 0.0 {
        errors.push(ValidationError {
            field: "load".into(),
            message: "must be >= 0".into(),
        });
    }
    if payload.fuels.wind_pct < 0.0 {
        errors.push(ValidationError {
            field: "fuels.wind(%)".into(),
            message: "must be >= 0".into(),
        });
    }

    for (i, plant) in payload.powerplants.iter().enumerate() {
        if plant.plant_type != PlantType::Windturbine && plant.efficiency <= 0.0 {
            errors.push(ValidationError {
                field: format!("powerplants[{i}].efficiency"),
                message: "must be > 0 for thermal plants".into(),
            });
        }
        if plant.pmin < 0.0 {
            errors.push(ValidationError {
                field: format!("powerplants[{i}].pmin"),
                message: "must be >= 0".into(),
            });
        }
        if plant.pmax < plant.pmin {
            errors.push(ValidationError {
                field: format!("powerplants[{i}].pmax"),
                message: "must be >= pmin".into(),
            });
        }
    }

    errors
}

/// Computes the production plan for one request.
///
/// # Errors
///
/// Returns [`PlanError::InvalidPayload`] when the payload fails validation.
/// An infeasible load is not an error: the report's `achieved_mw` simply
/// falls short of `requested_mw`.
pub fn compute_plan(payload: &Payload) -> Result<DispatchReport, PlanError> {
    let errors = validate(payload);
    if !errors.is_empty() {
        return Err(PlanError::InvalidPayload(errors));
    }

    // Enrich, then stable-sort into merit order; cost ties keep the
    // caller's plant order.
    let mut merit: Vec<(usize, OperatingEnvelope)> = payload
        .powerplants
        .iter()
        .map(|p| OperatingEnvelope::from_plant(p, &payload.fuels))
        .enumerate()
        .collect();
    merit.sort_by(|a, b| by_cost_ascending(&a.1, &b.1));

    let envelopes: Vec<OperatingEnvelope> = merit.iter().map(|(_, e)| e.clone()).collect();
    let outcome = allocator::allocate(&envelopes, payload.load);

    let assignments: Vec<PlantAssignment> = merit
        .iter()
        .zip(&outcome.committed_mw)
        .map(|((idx, env), &mw)| {
            let plant = &payload.powerplants[*idx];
            PlantAssignment {
                name: plant.name.clone(),
                plant_type: plant.plant_type,
                cost_eur_per_mwh: env.cost_eur_per_mwh,
                min_mw: env.min_mw,
                max_mw: env.max_mw,
                mw,
            }
        })
        .collect();

    let achieved_mw: f64 = outcome.committed_mw.iter().sum();
    debug!(
        requested_mw = payload.load,
        achieved_mw,
        overshoot_mw = outcome.overshoot_mw,
        "allocation pass complete"
    );

    Ok(DispatchReport {
        requested_mw: payload.load,
        achieved_mw,
        overshoot_mw: outcome.overshoot_mw,
        assignments,
    })
}
