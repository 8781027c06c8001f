//! Wire model for production-plan requests and responses.
//!
//! Field names follow the public JSON contract, including the fuel price
//! keys that carry their units (`gas(euro/MWh)` and friends).

use serde::{Deserialize, Serialize};

/// Generation technology of a power plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlantType {
    /// Gas-fired plant; cost driven by the gas price and plant efficiency.
    Gasfired,
    /// Kerosine-fired turbojet; cost driven by the kerosine price.
    Turbojet,
    /// Wind turbine; free to run, output limited by wind availability.
    Windturbine,
}

impl PlantType {
    /// Wire tag used in JSON payloads and CSV export.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gasfired => "gasfired",
            Self::Turbojet => "turbojet",
            Self::Windturbine => "windturbine",
        }
    }
}

/// One power plant as described by the caller. Immutable for the call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerPlant {
    /// Display name; not guaranteed unique within a payload.
    pub name: String,
    /// Generation technology.
    #[serde(rename = "type")]
    pub plant_type: PlantType,
    /// Thermal efficiency as a fraction (unused for wind turbines).
    pub efficiency: f64,
    /// Nameplate minimum output (MW).
    pub pmin: f64,
    /// Nameplate maximum output (MW).
    pub pmax: f64,
}

/// Fuel prices and wind conditions for one request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fuels {
    /// Gas price (€/MWh of fuel energy).
    #[serde(rename = "gas(euro/MWh)")]
    pub gas_eur_per_mwh: f64,
    /// Kerosine price (€/MWh of fuel energy).
    #[serde(rename = "kerosine(euro/MWh)")]
    pub kerosine_eur_per_mwh: f64,
    /// CO₂ price (€/ton). Carried in the contract but does not enter the
    /// merit order.
    #[serde(rename = "co2(euro/ton)")]
    pub co2_eur_per_ton: f64,
    /// Wind availability as a percentage of nameplate capacity.
    #[serde(rename = "wind(%)")]
    pub wind_pct: f64,
}

/// Complete production-plan request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payload {
    /// Target load to cover (MW).
    pub load: f64,
    /// Fuel prices and wind conditions.
    pub fuels: Fuels,
    /// The fleet, in the caller's order.
    pub powerplants: Vec<PowerPlant>,
}

/// One line of the response: how much a plant should produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantProduction {
    /// Plant name, echoed from the request.
    pub name: String,
    /// Assigned production (MW), rounded to one decimal.
    pub p: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_parses_contract_field_names() {
        let data = r#"{
            "load": 480,
            "fuels": {
                "gas(euro/MWh)": 13.4,
                "kerosine(euro/MWh)": 50.8,
                "co2(euro/ton)": 20,
                "wind(%)": 60
            },
            "powerplants": [
                {"name": "gasfiredbig1", "type": "gasfired", "efficiency": 0.53, "pmin": 100, "pmax": 460},
                {"name": "tj1", "type": "turbojet", "efficiency": 0.3, "pmin": 0, "pmax": 16},
                {"name": "windpark1", "type": "windturbine", "efficiency": 1, "pmin": 0, "pmax": 150}
            ]
        }"#;

        let payload: Payload = serde_json::from_str(data).unwrap();
        assert_eq!(payload.load, 480.0);
        assert_eq!(payload.fuels.gas_eur_per_mwh, 13.4);
        assert_eq!(payload.fuels.kerosine_eur_per_mwh, 50.8);
        assert_eq!(payload.fuels.co2_eur_per_ton, 20.0);
        assert_eq!(payload.fuels.wind_pct, 60.0);
        assert_eq!(payload.powerplants.len(), 3);
        assert_eq!(payload.powerplants[0].plant_type, PlantType::Gasfired);
        assert_eq!(payload.powerplants[1].plant_type, PlantType::Turbojet);
        assert_eq!(payload.powerplants[2].plant_type, PlantType::Windturbine);
    }

    #[test]
    fn unknown_plant_type_is_rejected() {
        let data = r#"{"name": "x", "type": "nuclear", "efficiency": 0.5, "pmin": 0, "pmax": 10}"#;
        let result: Result<PowerPlant, _> = serde_json::from_str(data);
        assert!(result.is_err());
    }

    #[test]
    fn production_serializes_name_and_p() {
        let row = PlantProduction {
            name: "windpark1".to_string(),
            p: 90.0,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["name"], "windpark1");
        assert_eq!(json["p"], 90.0);
    }

    #[test]
    fn payload_round_trips_for_notification_text() {
        let payload = Payload {
            load: 100.0,
            fuels: Fuels {
                gas_eur_per_mwh: 13.4,
                kerosine_eur_per_mwh: 50.8,
                co2_eur_per_ton: 20.0,
                wind_pct: 60.0,
            },
            powerplants: vec![PowerPlant {
                name: "windpark1".to_string(),
                plant_type: PlantType::Windturbine,
                efficiency: 1.0,
                pmin: 0.0,
                pmax: 150.0,
            }],
        };

        let text = serde_json::to_string(&payload).unwrap();
        assert!(text.contains("wind(%)"));
        let back: Payload = serde_json::from_str(&text).unwrap();
        assert_eq!(back.load, 100.0);
        assert_eq!(back.powerplants[0].name, "windpark1");
    }
}
