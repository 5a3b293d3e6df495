pub use super::factories::FlightFactory;

pub struct Factory;

impl Factory {
    pub fn flight() -> FlightFactory {
        FlightFactory::new()
    }
}
