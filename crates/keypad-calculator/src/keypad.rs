//! Keypad model shared by every front-end
//!
//! Describes which buttons exist, where they sit on the grid and which
//! engine command each one triggers. Rendering and hit testing live with the
//! front-end that draws the keypad.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::core::{CalcError, Calculator, Digit, Operator};

/// What pressing a button does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonAction {
    /// Type a digit
    Digit(Digit),
    /// Type a decimal point
    Decimal,
    /// Select an operator
    Operator(Operator),
    /// Evaluate the pending operation
    Equals,
    /// Reset the calculator
    Clear,
}

impl ButtonAction {
    /// Character printed on the button
    #[must_use]
    pub const fn label(self) -> char {
        match self {
            Self::Digit(d) => d.as_char(),
            Self::Decimal => '.',
            Self::Operator(op) => op.symbol(),
            Self::Equals => '=',
            Self::Clear => 'C',
        }
    }

    /// Routes the action to exactly one engine command
    pub fn dispatch(self, calculator: &mut Calculator) {
        trace!(target: "keypad_calculator::keypad", button = %self, "dispatch");
        match self {
            Self::Digit(d) => calculator.input_digit(d),
            Self::Decimal => calculator.input_decimal(),
            Self::Operator(op) => calculator.perform_operation(op),
            Self::Equals => calculator.evaluate(),
            Self::Clear => calculator.clear(),
        }
    }
}

impl TryFrom<char> for ButtonAction {
    type Error = CalcError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '0'..='9' => Digit::try_from(ch).map(Self::Digit),
            '.' => Ok(Self::Decimal),
            '=' => Ok(Self::Equals),
            'C' | 'c' => Ok(Self::Clear),
            other => Operator::try_from(other)
                .map(Self::Operator)
                .map_err(|_| CalcError::UnknownButton(other.to_string())),
        }
    }
}

impl FromStr for ButtonAction {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::try_from(ch),
            _ => Err(CalcError::UnknownButton(s.to_string())),
        }
    }
}

impl fmt::Display for ButtonAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Calculator {
    /// Presses a keypad button
    pub fn press(&mut self, action: ButtonAction) {
        action.dispatch(self);
    }
}

/// A button placed on the keypad grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The action this button performs
    pub action: ButtonAction,
    /// Top grid row (0-indexed)
    pub row: usize,
    /// Left grid column (0-indexed)
    pub col: usize,
    /// Rows covered
    pub row_span: usize,
    /// Columns covered
    pub col_span: usize,
    /// Whether the button is currently highlighted
    pub pressed: bool,
}

impl KeypadButton {
    /// Creates a one-cell button
    #[must_use]
    pub fn new(action: ButtonAction, row: usize, col: usize) -> Self {
        Self {
            action,
            row,
            col,
            row_span: 1,
            col_span: 1,
            pressed: false,
        }
    }

    /// Creates a digit button
    #[must_use]
    pub fn digit(d: Digit, row: usize, col: usize) -> Self {
        Self::new(ButtonAction::Digit(d), row, col)
    }

    /// Creates an operator button
    #[must_use]
    pub fn operator(op: Operator, row: usize, col: usize) -> Self {
        Self::new(ButtonAction::Operator(op), row, col)
    }

    /// Creates the decimal point button
    #[must_use]
    pub fn decimal(row: usize, col: usize) -> Self {
        Self::new(ButtonAction::Decimal, row, col)
    }

    /// Creates the equals button
    #[must_use]
    pub fn equals(row: usize, col: usize) -> Self {
        Self::new(ButtonAction::Equals, row, col)
    }

    /// Creates the clear button
    #[must_use]
    pub fn clear(row: usize, col: usize) -> Self {
        Self::new(ButtonAction::Clear, row, col)
    }

    /// Stretches the button over several rows and columns
    #[must_use]
    pub fn spanning(mut self, row_span: usize, col_span: usize) -> Self {
        self.row_span = row_span.max(1);
        self.col_span = col_span.max(1);
        self
    }

    /// Character printed on the button
    #[must_use]
    pub fn label(&self) -> char {
        self.action.label()
    }

    /// Whether the button occupies the given grid cell
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        (self.row..self.row + self.row_span).contains(&row)
            && (self.col..self.col + self.col_span).contains(&col)
    }

    /// Sets the pressed state
    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }
}

/// The calculator keypad, a 5x4 grid
/// ```text
/// [   C   ] [ / ] [ * ]
/// [ 7 ] [ 8 ] [ 9 ] [ - ]
/// [ 4 ] [ 5 ] [ 6 ] [ + ]
/// [ 1 ] [ 2 ] [ 3 ] [ = ]
/// [   0   ] [ . ] [ = ]
/// ```
/// `C` and `0` are two columns wide, `=` is two rows tall.
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Buttons in reading order
    buttons: Vec<KeypadButton>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: C / *
            KeypadButton::clear(0, 0).spanning(1, 2),
            KeypadButton::operator(Operator::Divide, 0, 2),
            KeypadButton::operator(Operator::Multiply, 0, 3),
            // Row 1: 7 8 9 -
            KeypadButton::digit(Digit::SEVEN, 1, 0),
            KeypadButton::digit(Digit::EIGHT, 1, 1),
            KeypadButton::digit(Digit::NINE, 1, 2),
            KeypadButton::operator(Operator::Subtract, 1, 3),
            // Row 2: 4 5 6 +
            KeypadButton::digit(Digit::FOUR, 2, 0),
            KeypadButton::digit(Digit::FIVE, 2, 1),
            KeypadButton::digit(Digit::SIX, 2, 2),
            KeypadButton::operator(Operator::Add, 2, 3),
            // Row 3: 1 2 3 =
            KeypadButton::digit(Digit::ONE, 3, 0),
            KeypadButton::digit(Digit::TWO, 3, 1),
            KeypadButton::digit(Digit::THREE, 3, 2),
            KeypadButton::equals(3, 3).spanning(2, 1),
            // Row 4: 0 .
            KeypadButton::digit(Digit::ZERO, 4, 0).spanning(1, 2),
            KeypadButton::decimal(4, 2),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Index of the button covering a grid cell
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Button covering a grid cell
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    /// Finds the button performing an action
    #[must_use]
    pub fn find_by_action(&self, action: ButtonAction) -> Option<usize> {
        self.buttons.iter().position(|b| b.action == action)
    }

    /// Finds a button by its label character
    #[must_use]
    pub fn find_by_label(&self, label: char) -> Option<usize> {
        self.buttons.iter().position(|b| b.label() == label)
    }

    /// Highlights a button by index
    pub fn press(&mut self, index: usize) {
        if let Some(btn) = self.buttons.get_mut(index) {
            btn.set_pressed(true);
        }
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        for btn in &mut self.buttons {
            btn.set_pressed(false);
        }
    }

    /// Highlights only the button for `action`
    pub fn highlight(&mut self, action: ButtonAction) {
        self.release_all();
        if let Some(idx) = self.find_by_action(action) {
            self.press(idx);
        }
    }

    /// Index of the highlighted button, if any
    #[must_use]
    pub fn pressed_index(&self) -> Option<usize> {
        self.buttons.iter().position(|b| b.pressed)
    }

    /// Returns an iterator over all buttons
    pub fn buttons(&self) -> impl Iterator<Item = &KeypadButton> {
        self.buttons.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(n: u8) -> ButtonAction {
        ButtonAction::Digit(Digit::new(n).unwrap())
    }

    // ===== ButtonAction tests =====

    #[test]
    fn test_action_labels() {
        assert_eq!(digit(7).label(), '7');
        assert_eq!(ButtonAction::Decimal.label(), '.');
        assert_eq!(ButtonAction::Operator(Operator::Multiply).label(), '*');
        assert_eq!(ButtonAction::Equals.label(), '=');
        assert_eq!(ButtonAction::Clear.label(), 'C');
    }

    #[test]
    fn test_action_from_str() {
        assert_eq!("7".parse::<ButtonAction>().unwrap(), digit(7));
        assert_eq!(" = ".parse::<ButtonAction>().unwrap(), ButtonAction::Equals);
        assert_eq!(
            "/".parse::<ButtonAction>().unwrap(),
            ButtonAction::Operator(Operator::Divide)
        );
        assert_eq!("c".parse::<ButtonAction>().unwrap(), ButtonAction::Clear);
    }

    #[test]
    fn test_action_from_str_rejects_unknown() {
        assert!(matches!(
            "(".parse::<ButtonAction>(),
            Err(CalcError::UnknownButton(s)) if s == "("
        ));
        assert!("12".parse::<ButtonAction>().is_err());
        assert!("".parse::<ButtonAction>().is_err());
    }

    #[test]
    fn test_dispatch_reaches_engine() {
        let mut calc = Calculator::new();
        for action in [
            digit(1),
            ButtonAction::Decimal,
            digit(5),
            ButtonAction::Operator(Operator::Multiply),
            digit(2),
            ButtonAction::Equals,
        ] {
            calc.press(action);
        }
        assert_eq!(calc.display(), "3");
        calc.press(ButtonAction::Clear);
        assert_eq!(calc.display(), "0");
    }

    // ===== KeypadButton tests =====

    #[test]
    fn test_button_covers_single_cell() {
        let btn = KeypadButton::decimal(4, 2);
        assert!(btn.covers(4, 2));
        assert!(!btn.covers(4, 3));
        assert!(!btn.covers(3, 2));
    }

    #[test]
    fn test_button_covers_span() {
        let btn = KeypadButton::equals(3, 3).spanning(2, 1);
        assert!(btn.covers(3, 3));
        assert!(btn.covers(4, 3));
        assert!(!btn.covers(5, 3));
    }

    #[test]
    fn test_spanning_never_zero() {
        let btn = KeypadButton::clear(0, 0).spanning(0, 0);
        assert_eq!((btn.row_span, btn.col_span), (1, 1));
    }

    #[test]
    fn test_button_pressed_state() {
        let mut btn = KeypadButton::digit(Digit::ZERO, 0, 0);
        assert!(!btn.pressed);
        btn.set_pressed(true);
        assert!(btn.pressed);
    }

    // ===== Keypad tests =====

    #[test]
    fn test_keypad_new() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 17);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_every_cell_covered_exactly_once() {
        let keypad = Keypad::new();
        let (rows, cols) = keypad.dimensions();
        for row in 0..rows {
            for col in 0..cols {
                let covering = keypad.buttons().filter(|b| b.covers(row, col)).count();
                assert_eq!(covering, 1, "cell ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_every_action_present() {
        let keypad = Keypad::new();
        for d in Digit::all() {
            assert!(keypad.find_by_action(ButtonAction::Digit(d)).is_some());
        }
        for op in Operator::ALL {
            assert!(keypad.find_by_action(ButtonAction::Operator(op)).is_some());
        }
        for action in [ButtonAction::Decimal, ButtonAction::Equals, ButtonAction::Clear] {
            assert!(keypad.find_by_action(action).is_some());
        }
    }

    #[test]
    fn test_digit_buttons_match_layout() {
        let keypad = Keypad::new();
        let expected = [
            ('7', 1, 0),
            ('8', 1, 1),
            ('9', 1, 2),
            ('4', 2, 0),
            ('5', 2, 1),
            ('6', 2, 2),
            ('1', 3, 0),
            ('2', 3, 1),
            ('3', 3, 2),
            ('0', 4, 0),
        ];
        for (label, row, col) in expected {
            let btn = keypad.button_at(row, col).unwrap();
            assert_eq!(btn.action, ButtonAction::try_from(label).unwrap(), "cell ({row}, {col})");
        }
        let digit_buttons = keypad
            .buttons()
            .filter(|b| matches!(b.action, ButtonAction::Digit(_)))
            .count();
        assert_eq!(digit_buttons, 10);
    }

    #[test]
    fn test_button_at_spans() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_at(0, 0).unwrap().label(), 'C');
        assert_eq!(keypad.button_at(0, 1).unwrap().label(), 'C');
        assert_eq!(keypad.button_at(0, 3).unwrap().label(), '*');
        assert_eq!(keypad.button_at(4, 1).unwrap().label(), '0');
        assert_eq!(keypad.button_at(4, 3).unwrap().label(), '=');
        assert_eq!(keypad.index_at(3, 3), keypad.index_at(4, 3));
    }

    #[test]
    fn test_button_at_out_of_bounds() {
        let keypad = Keypad::new();
        assert!(keypad.button_at(5, 0).is_none());
        assert!(keypad.button_at(0, 4).is_none());
    }

    #[test]
    fn test_find_by_label() {
        let keypad = Keypad::new();
        assert_eq!(keypad.find_by_label('C'), Some(0));
        assert_eq!(keypad.find_by_label('7'), Some(3));
        assert_eq!(keypad.find_by_label('.'), Some(16));
        assert_eq!(keypad.find_by_label('('), None);
    }

    #[test]
    fn test_highlight() {
        let mut keypad = Keypad::new();
        keypad.highlight(digit(5));
        assert_eq!(keypad.pressed_index(), keypad.find_by_label('5'));
        keypad.highlight(ButtonAction::Equals);
        assert_eq!(keypad.pressed_index(), keypad.find_by_label('='));
        assert_eq!(keypad.buttons().filter(|b| b.pressed).count(), 1);
        keypad.release_all();
        assert!(keypad.pressed_index().is_none());
    }

    #[test]
    fn test_press_out_of_range_is_ignored() {
        let mut keypad = Keypad::new();
        keypad.press(100);
        assert!(keypad.pressed_index().is_none());
    }
}
