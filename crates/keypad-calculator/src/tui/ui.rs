//! TUI rendering
//!
//! The display sits above the keypad in a centred column. `screen_layout`
//! is shared with event handling so clicks land where buttons are drawn.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;
use crate::core::number::is_non_finite;

/// Widest the calculator column grows
pub const MAX_COLUMN_WIDTH: u16 = 34;

/// Height of the display panel including its border
pub const DISPLAY_HEIGHT: u16 = 3;

/// Where each part of the calculator is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Display panel
    pub display: Rect,
    /// Keypad block
    pub keypad: Rect,
}

/// Computes the layout for a frame of size `area`
#[must_use]
pub fn screen_layout(area: Rect) -> ScreenLayout {
    // Inside the outer frame border
    let inner = Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    let width = inner.width.min(MAX_COLUMN_WIDTH);
    let column = Rect {
        x: inner.x + (inner.width - width) / 2,
        width,
        ..inner
    };

    let chunks = Layout::vertical([Constraint::Length(DISPLAY_HEIGHT), Constraint::Min(0)])
        .split(column);
    ScreenLayout {
        display: chunks[0],
        keypad: chunks[1],
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Title of the display panel, showing the pending operation if any
    fn display_title(&self) -> String {
        let state = self.app.state();
        match (&state.pending_operand, state.pending_operator) {
            (Some(operand), Some(op)) => format!(" {operand} {op} "),
            _ => " Display ".to_string(),
        }
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let text = self.app.display();
        let style = if is_non_finite(text) {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };

        Paragraph::new(Span::styled(text, style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(self.display_title())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(format!(" {} ", self.app.title()))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .render(area, buf);

        let layout = screen_layout(area);
        self.render_display(layout.display, buf);
        KeypadWidget::new(self.app.keypad()).render(layout.keypad, buf);
    }
}
