//! Unified calculator driver
//!
//! Test logic is written once against [`CalculatorDriver`] and run against
//! every front-end: the bare engine and the terminal app (through simulated
//! mouse clicks).

use crate::core::{CalcResult, Calculator, Phase};
use crate::keypad::ButtonAction;

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use keypad_calculator::driver::{CalculatorDriver, EngineDriver};
///
/// let mut driver = EngineDriver::new();
/// driver.press_sequence("12 * 3 =").unwrap();
/// assert_eq!(driver.display(), "36");
/// ```
pub trait CalculatorDriver {
    /// Presses one button
    fn press(&mut self, action: ButtonAction);

    /// Gets the current display text
    fn display(&self) -> String;

    /// Gets the current phase
    fn phase(&self) -> Phase;

    /// Presses the clear button
    fn clear(&mut self) {
        self.press(ButtonAction::Clear);
    }

    /// Presses one button per non-whitespace character of `sequence`
    ///
    /// Stops at the first character that names no button; presses before
    /// it have already happened.
    fn press_sequence(&mut self, sequence: &str) -> CalcResult<()> {
        for ch in sequence.chars().filter(|c| !c.is_whitespace()) {
            self.press(ButtonAction::try_from(ch)?);
        }
        Ok(())
    }
}

/// Driver over the bare engine
#[derive(Debug, Default)]
pub struct EngineDriver {
    calculator: Calculator,
}

impl EngineDriver {
    /// Creates a new engine driver
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, action: ButtonAction) {
        self.calculator.press(action);
    }

    fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    fn phase(&self) -> Phase {
        self.calculator.phase()
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use ratatui::layout::Rect;

    use super::{ButtonAction, CalculatorDriver, Phase};
    use crate::tui::{screen_layout, CalculatorApp};

    /// Drives the terminal app by clicking keypad buttons
    ///
    /// A click that does not land on the intended button panics, so a
    /// layout that hides buttons fails the specifications instead of
    /// passing them through a side door.
    #[derive(Debug)]
    pub struct TuiDriver {
        app: CalculatorApp,
        screen: Rect,
    }

    impl Default for TuiDriver {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TuiDriver {
        /// Terminal size the driver assumes
        pub const SCREEN: Rect = Rect {
            x: 0,
            y: 0,
            width: 60,
            height: 24,
        };

        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::with_app(CalculatorApp::new())
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self {
                app,
                screen: Self::SCREEN,
            }
        }

        /// Uses a different terminal size
        #[must_use]
        pub fn with_screen(mut self, screen: Rect) -> Self {
            self.screen = screen;
            self
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, action: ButtonAction) {
            let keypad_area = screen_layout(self.screen).keypad;
            let target = self
                .app
                .keypad()
                .find_by_action(action)
                .and_then(|idx| self.app.keypad().button_area(keypad_area, idx));

            let hit = target.and_then(|rect| {
                let x = rect.x + rect.width / 2;
                let y = rect.y + rect.height / 2;
                self.app.click(keypad_area, x, y)
            });
            assert_eq!(
                hit,
                Some(action),
                "click on {action} did not press it on a {}x{} screen",
                self.screen.width,
                self.screen.height
            );
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn phase(&self) -> Phase {
            self.app.phase()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified Test Specifications =====
// These work with ANY CalculatorDriver implementation

/// Verifies digit entry and leading-zero collapse
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.display(), "0");

    driver.press_sequence("005").unwrap();
    assert_eq!(driver.display(), "5");

    driver.press_sequence("120").unwrap();
    assert_eq!(driver.display(), "5120");
    driver.clear();
}

/// Verifies decimal entry is idempotent
pub fn verify_decimal_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_sequence(".").unwrap();
    assert_eq!(driver.display(), "0.");

    driver.press_sequence("5..2").unwrap();
    assert_eq!(driver.display(), "0.52");
    driver.clear();
}

/// Verifies the four operations
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    for (sequence, expected) in [
        ("6/2=", "3"),
        ("7-2=", "5"),
        ("3*4=", "12"),
        ("2.5+0.5=", "3"),
    ] {
        driver.clear();
        driver.press_sequence(sequence).unwrap();
        assert_eq!(driver.display(), expected, "{sequence}");
        assert_eq!(driver.phase(), Phase::Idle);
    }
    driver.clear();
}

/// Verifies left-to-right folding of chained operators
pub fn verify_chained_operations<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_sequence("5+3+").unwrap();
    assert_eq!(driver.display(), "8");
    assert_eq!(driver.phase(), Phase::PendingOp);

    driver.press_sequence("2=").unwrap();
    assert_eq!(driver.display(), "10");

    // No precedence: 2 + 3 * 4 = 20
    driver.clear();
    driver.press_sequence("2+3*4=").unwrap();
    assert_eq!(driver.display(), "20");
    driver.clear();
}

/// Verifies division by zero shows a sentinel and clear recovers
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_sequence("5/0=").unwrap();
    assert_eq!(driver.display(), "Infinity");

    driver.clear();
    assert_eq!(driver.display(), "0");

    driver.press_sequence("0/0=").unwrap();
    assert_eq!(driver.display(), "NaN");
    driver.clear();
}

/// Verifies `=` without a pending operator changes nothing
pub fn verify_evaluate_without_operator<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_sequence("42").unwrap();
    driver.press_sequence("=").unwrap();
    assert_eq!(driver.display(), "42");
    driver.press_sequence("==").unwrap();
    assert_eq!(driver.display(), "42");
    driver.clear();
}

/// Verifies an operator after `=` continues from the result
pub fn verify_operator_after_evaluate<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    driver.press_sequence("6+4=").unwrap();
    assert_eq!(driver.display(), "10");

    driver.press_sequence("/4=").unwrap();
    assert_eq!(driver.display(), "2.5");
    driver.clear();
}

/// Complete verification suite - runs all specifications
pub fn run_full_specification<D: CalculatorDriver>(driver: &mut D) {
    verify_digit_entry(driver);
    verify_decimal_entry(driver);
    verify_basic_arithmetic(driver);
    verify_chained_operations(driver);
    verify_division_by_zero(driver);
    verify_evaluate_without_operator(driver);
    verify_operator_after_evaluate(driver);
}
