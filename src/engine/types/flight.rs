use serde::{Deserialize, Serialize};

/// Operating carrier of a flight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airline {
    pub iata_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AircraftType {
    pub icao_code: Option<String>,
    pub model_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Departure {
    #[serde(alias = "gates")]
    pub gate: Option<String>,
}

/// Immutable snapshot of a single flight as supplied by a record source.
///
/// Every field may be absent. Dates are `YYYY-MM-DD` and times are
/// `hh:mm:ss` (24h, zero padded) whenever present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    pub operating_airline: Option<Airline>,
    pub aircraft_type: Option<AircraftType>,
    pub arrival_airport: Option<String>,
    pub departure: Option<Departure>,
    pub origin_date: Option<String>,
    pub scheduled_time: Option<String>,
    pub flight_status: Option<String>,
    pub airline_display_code: Option<String>,
}

/// Typed accessor for the record fields the engine filters and groups on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightField {
    IataCode,
    IcaoCode,
    ModelName,
    ArrivalAirport,
    Gate,
    OriginDate,
    ScheduledTime,
    FlightStatus,
    AirlineDisplayCode,
}

impl FlightField {
    pub fn name(&self) -> &'static str {
        match self {
            FlightField::IataCode => "operatingAirline.iataCode",
            FlightField::IcaoCode => "aircraftType.icaoCode",
            FlightField::ModelName => "aircraftType.modelName",
            FlightField::ArrivalAirport => "arrivalAirport",
            FlightField::Gate => "departure.gate",
            FlightField::OriginDate => "originDate",
            FlightField::ScheduledTime => "scheduledTime",
            FlightField::FlightStatus => "flightStatus",
            FlightField::AirlineDisplayCode => "airlineDisplayCode",
        }
    }

    /// Extracts the field value; absent and empty strings both yield `None`.
    pub fn extract<'a>(&self, record: &'a FlightRecord) -> Option<&'a str> {
        let raw = match self {
            FlightField::IataCode => record
                .operating_airline
                .as_ref()
                .and_then(|a| a.iata_code.as_deref()),
            FlightField::IcaoCode => record
                .aircraft_type
                .as_ref()
                .and_then(|a| a.icao_code.as_deref()),
            FlightField::ModelName => record
                .aircraft_type
                .as_ref()
                .and_then(|a| a.model_name.as_deref()),
            FlightField::ArrivalAirport => record.arrival_airport.as_deref(),
            FlightField::Gate => record.departure.as_ref().and_then(|d| d.gate.as_deref()),
            FlightField::OriginDate => record.origin_date.as_deref(),
            FlightField::ScheduledTime => record.scheduled_time.as_deref(),
            FlightField::FlightStatus => record.flight_status.as_deref(),
            FlightField::AirlineDisplayCode => record.airline_display_code.as_deref(),
        };
        raw.filter(|v| !v.is_empty())
    }
}

impl FlightRecord {
    #[inline]
    pub fn field(&self, field: FlightField) -> Option<&str> {
        field.extract(self)
    }
}
