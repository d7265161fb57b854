use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Setup errors for the simulation core.
///
/// Every variant is a configuration error: it is raised while the field and
/// vehicles are being assembled and aborts the run before any step executes.
/// Moves that run into the field boundary are clamped and never surface here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Field width or height is not a positive integer.
    #[error("invalid field dimensions {width}x{height}: width and height must be > 0")]
    InvalidField { width: i64, height: i64 },

    /// Vehicle name is empty or whitespace only.
    #[error("vehicle name must not be empty")]
    EmptyName,

    /// Another vehicle with the same name is already registered.
    #[error("duplicate vehicle name: {0}")]
    DuplicateName(String),

    /// Command string contains a token outside {L, R, F}.
    #[error("unknown command token {token:?} at index {index}")]
    UnknownCommand { token: char, index: usize },

    /// Direction token outside {N, E, S, W}.
    #[error("unknown direction token {0:?}")]
    UnknownDirection(String),

    /// Initial position lies outside the field.
    #[error("out of bounds: vehicle {name} at ({x},{y}) is outside a {width}x{height} field")]
    OutOfBounds {
        name: String,
        x: i64,
        y: i64,
        width: i64,
        height: i64,
    },

    /// `run` was called before any vehicle was registered.
    #[error("no vehicles registered")]
    NoVehicles,
}
