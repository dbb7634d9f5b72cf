/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/// Errors surfaced to the caller.
///
/// The state machine itself is total; only button registration and the
/// configuration layer can fail.
#[derive(Debug, Error)]
pub enum ElevatorError {
    #[error("floor {floor} is out of range (0..{n_floors})")]
    FloorOutOfRange { floor: u8, n_floors: u8 },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
