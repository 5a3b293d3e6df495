use crate::engine::types::FlightRecord;
use serde_json::{Value, json};
use std::collections::HashMap;

/// Builds `FlightRecord`s from flat parameters. Setting a parameter to
/// `Value::Null` leaves the field absent.
pub struct FlightFactory {
    params: HashMap<String, Value>,
}

impl FlightFactory {
    pub fn new() -> Self {
        let mut params = HashMap::new();
        params.insert("iata_code".into(), json!("LH"));
        params.insert("icao_code".into(), json!("A320"));
        params.insert("model_name".into(), json!("Airbus A320"));
        params.insert("arrival_airport".into(), json!("MUC"));
        params.insert("gate".into(), json!("A1"));
        params.insert("origin_date".into(), json!("2018-08-10"));
        params.insert("scheduled_time".into(), json!("12:00:00"));
        params.insert("flight_status".into(), json!("A"));
        params.insert("airline_display_code".into(), json!("LH"));
        Self { params }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    fn param(&self, key: &str) -> Value {
        self.params.get(key).cloned().unwrap_or(Value::Null)
    }

    pub fn create(&self) -> FlightRecord {
        let value = json!({
            "operatingAirline": { "iataCode": self.param("iata_code") },
            "aircraftType": {
                "icaoCode": self.param("icao_code"),
                "modelName": self.param("model_name"),
            },
            "arrivalAirport": self.param("arrival_airport"),
            "departure": { "gate": self.param("gate") },
            "originDate": self.param("origin_date"),
            "scheduledTime": self.param("scheduled_time"),
            "flightStatus": self.param("flight_status"),
            "airlineDisplayCode": self.param("airline_display_code"),
        });
        serde_json::from_value(value).expect("factory params must form a valid flight")
    }

    pub fn create_list(&self, count: usize) -> Vec<FlightRecord> {
        (0..count).map(|_| self.create()).collect()
    }
}

impl Default for FlightFactory {
    fn default() -> Self {
        Self::new()
    }
}
