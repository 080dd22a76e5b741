//! Calculator core: digits, operators, number conversions and the engine
//!
//! Nothing in here touches a terminal. Adapters drive the engine through
//! its five commands and re-read the display afterwards.

mod digit;
pub mod engine;
pub mod number;
mod operations;

pub use digit::Digit;
pub use engine::{Calculator, CalculatorState, Phase};
pub use operations::Operator;

use thiserror::Error;

/// Result type for fallible conversions at the calculator boundary
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors raised where untyped input enters the calculator
///
/// Engine commands themselves never fail; these only come from parsing
/// labels, loading configuration or talking to the terminal.
#[derive(Debug, Error)]
pub enum CalcError {
    /// Input that is not a single decimal digit
    #[error("Invalid digit: {0:?}")]
    InvalidDigit(String),

    /// Operator symbol outside `+ - * /`
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(String),

    /// Label that names no keypad button
    #[error("Unknown button: {0:?}")]
    UnknownButton(String),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CalcError {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
