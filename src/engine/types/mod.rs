pub mod flight;

pub use flight::{AircraftType, Airline, Departure, FlightField, FlightRecord};
