//! Keypad Calculator
//!
//! A four-function calculator driven by buttons. The engine keeps a running
//! entry and folds operations strictly left to right; there is no
//! expression parsing and no operator precedence.
//!
//! Front-ends only press buttons and re-read the display:
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for label in ["5", "+", "3", "+", "2", "="] {
//!     calc.press(label.parse::<ButtonAction>().unwrap());
//! }
//! assert_eq!(calc.display(), "10");
//!
//! // Division by zero is not an error
//! calc.press(ButtonAction::Operator(Operator::Divide));
//! calc.press(ButtonAction::Digit(Digit::ZERO));
//! calc.press(ButtonAction::Equals);
//! assert_eq!(calc.display(), "Infinity");
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod keypad;
pub mod logging;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::AppConfig;
    pub use crate::core::number::{format_number, parse_number};
    pub use crate::core::{
        CalcError, CalcResult, Calculator, CalculatorState, Digit, Operator, Phase,
    };
    pub use crate::driver::{CalculatorDriver, EngineDriver};
    pub use crate::keypad::{ButtonAction, Keypad, KeypadButton};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;

    #[cfg(feature = "tui")]
    pub use crate::tui::CalculatorApp;
}
