//! Terminal front-end for the calculator
//!
//! Draws the display and keypad with ratatui and turns mouse clicks on
//! buttons into engine commands.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputAction, InputHandler};
pub use keypad::KeypadWidget;
pub use ui::{render, screen_layout, CalculatorUI, ScreenLayout};
