pub mod flight_factory;

pub use flight_factory::FlightFactory;
