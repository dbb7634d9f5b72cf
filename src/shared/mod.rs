pub mod clock;
pub mod error;
#[macro_use]
pub mod macros;
pub mod structs;

pub use clock::MonotonicClock;
#[cfg(test)]
pub use clock::SequenceClock;
pub use clock::TimeSource;
pub use error::ElevatorError;
pub use structs::ButtonKind;
pub use structs::ButtonPress;
pub use structs::Direction;
pub use structs::State;
