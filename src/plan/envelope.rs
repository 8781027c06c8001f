//! Operating envelopes: what a plant can actually produce right now, and at
//! what cost.

use crate::plan::types::{Fuels, PlantType, PowerPlant};

/// Rounds to one decimal (0.1 MW), the resolution of the wire format.
pub(crate) fn round_to_tenth(mw: f64) -> f64 {
    (mw * 10.0).round() / 10.0
}

/// Cost-ranked operating range derived from one plant and the current fuel
/// and wind conditions.
///
/// Computed once per call and never mutated afterwards; committed
/// production lives in the allocator's own vector, so revisiting plants
/// during compensation cannot alias the envelope data.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatingEnvelope {
    /// Minimum output when the plant runs at all (MW).
    pub min_mw: f64,
    /// Maximum output under current conditions (MW).
    pub max_mw: f64,
    /// Cost of producing 1 MWh (€).
    pub cost_eur_per_mwh: f64,
}

impl OperatingEnvelope {
    /// Derives the envelope for one plant.
    ///
    /// Wind turbines are all-or-nothing at their weather-limited capacity:
    /// both bounds equal `pmax × wind% / 100`, rounded to 0.1 MW, at zero
    /// cost. Thermal plants keep their nameplate bounds and cost
    /// `fuel price / efficiency`.
    pub fn from_plant(plant: &PowerPlant, fuels: &Fuels) -> Self {
        match plant.plant_type {
            PlantType::Windturbine => {
                let capped = round_to_tenth(plant.pmax * fuels.wind_pct / 100.0);
                Self {
                    min_mw: capped,
                    max_mw: capped,
                    cost_eur_per_mwh: 0.0,
                }
            }
            PlantType::Gasfired => Self {
                min_mw: plant.pmin,
                max_mw: plant.pmax,
                cost_eur_per_mwh: fuels.gas_eur_per_mwh / plant.efficiency,
            },
            PlantType::Turbojet => Self {
                min_mw: plant.pmin,
                max_mw: plant.pmax,
                cost_eur_per_mwh: fuels.kerosine_eur_per_mwh / plant.efficiency,
            },
        }
    }

    /// Downward flexibility once the plant is fully committed (MW).
    pub fn headroom_mw(&self) -> f64 {
        self.max_mw - self.min_mw
    }
}
