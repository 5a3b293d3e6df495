pub mod airport;
pub mod rate;
pub mod status;
pub mod strike;

pub use airport::AirportStats;
pub use rate::RateCalculator;
pub use status::StatusSetFilter;
pub use strike::StrikeDayDetector;

#[cfg(test)]
mod strike_test;
