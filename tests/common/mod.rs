//! Shared test fixtures for integration tests.
//!
//! Each integration binary compiles its own copy, so not every fixture is
//! used everywhere.
#![allow(dead_code)]

use gridplan::plan::{Fuels, Payload, PlantType, PowerPlant};

/// Default fuel prices (gas 13.4, kerosine 50.8, CO₂ 20, wind 60%).
pub fn default_fuels() -> Fuels {
    Fuels {
        gas_eur_per_mwh: 13.4,
        kerosine_eur_per_mwh: 50.8,
        co2_eur_per_ton: 20.0,
        wind_pct: 60.0,
    }
}

/// Gas-fired plant with the given efficiency and nameplate range.
pub fn gas_plant(name: &str, efficiency: f64, pmin: f64, pmax: f64) -> PowerPlant {
    PowerPlant {
        name: name.to_string(),
        plant_type: PlantType::Gasfired,
        efficiency,
        pmin,
        pmax,
    }
}

/// Kerosine turbojet with the given efficiency and nameplate range.
pub fn turbojet(name: &str, efficiency: f64, pmin: f64, pmax: f64) -> PowerPlant {
    PowerPlant {
        name: name.to_string(),
        plant_type: PlantType::Turbojet,
        efficiency,
        pmin,
        pmax,
    }
}

/// Wind turbine with the given nameplate capacity.
pub fn wind_turbine(name: &str, pmax: f64) -> PowerPlant {
    PowerPlant {
        name: name.to_string(),
        plant_type: PlantType::Windturbine,
        efficiency: 1.0,
        pmin: 0.0,
        pmax,
    }
}

/// Payload with default fuels.
pub fn payload(load: f64, powerplants: Vec<PowerPlant>) -> Payload {
    Payload {
        load,
        fuels: default_fuels(),
        powerplants,
    }
}

/// The full challenge example: six plants, load 910 MW, 60% wind.
pub const EXAMPLE_PAYLOAD: &str = r#"{
  "load": 910,
  "fuels":
  {
    "gas(euro/MWh)": 13.4,
    "kerosine(euro/MWh)": 50.8,
    "co2(euro/ton)": 20,
    "wind(%)": 60
  },
  "powerplants": [
    {
      "name": "gasfiredbig1",
      "type": "gasfired",
      "efficiency": 0.53,
      "pmin": 100,
      "pmax": 460
    },
    {
      "name": "gasfiredbig2",
      "type": "gasfired",
      "efficiency": 0.53,
      "pmin": 100,
      "pmax": 460
    },
    {
      "name": "gasfiredsomewhatsmaller",
      "type": "gasfired",
      "efficiency": 0.37,
      "pmin": 40,
      "pmax": 210
    },
    {
      "name": "tj1",
      "type": "turbojet",
      "efficiency": 0.3,
      "pmin": 0,
      "pmax": 16
    },
    {
      "name": "windpark1",
      "type": "windturbine",
      "efficiency": 1,
      "pmin": 0,
      "pmax": 150
    },
    {
      "name": "windpark2",
      "type": "windturbine",
      "efficiency": 1,
      "pmin": 0,
      "pmax": 36
    }
  ]
}"#;
