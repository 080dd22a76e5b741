//! TUI application state

use ratatui::layout::Rect;
use tracing::{debug, info};

use super::input::InputAction;
use crate::config::AppConfig;
use crate::core::{Calculator, CalculatorState, Phase};
use crate::keypad::{ButtonAction, Keypad};

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// The engine
    calculator: Calculator,
    /// Keypad model, also tracks the highlighted button
    keypad: Keypad,
    /// Title shown in the outer frame
    title: String,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates an app with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&AppConfig::default())
    }

    /// Creates an app from configuration
    #[must_use]
    pub fn with_config(config: &AppConfig) -> Self {
        info!(title = %config.title, "calculator app created");
        Self {
            calculator: Calculator::new(),
            keypad: Keypad::new(),
            title: config.title.clone(),
            should_quit: false,
        }
    }

    /// Returns the display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.calculator.display()
    }

    /// Returns the engine state
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        self.calculator.state()
    }

    /// Returns the engine phase
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.calculator.phase()
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns the title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        info!("calculator app quitting");
        self.should_quit = true;
    }

    /// Presses a button: runs its command and highlights it
    pub fn press(&mut self, action: ButtonAction) {
        self.calculator.press(action);
        self.keypad.highlight(action);
        debug!(button = %action, display = %self.calculator.display(), "button pressed");
    }

    /// Presses the button under a click, if any
    ///
    /// `keypad_area` is where the keypad is drawn.
    pub fn click(&mut self, keypad_area: Rect, x: u16, y: u16) -> Option<ButtonAction> {
        let action = self
            .keypad
            .hit_test(keypad_area, x, y)
            .and_then(|idx| self.keypad.get_button(idx))
            .map(|btn| btn.action)?;
        self.press(action);
        Some(action)
    }

    /// Applies an input action; returns true when the app should stop
    pub fn handle(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::Press(button) => self.press(button),
            InputAction::Quit => self.quit(),
            InputAction::None => {}
        }
        self.should_quit
    }
}
