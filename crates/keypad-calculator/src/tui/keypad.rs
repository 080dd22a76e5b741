//! Keypad rendering and hit testing
//!
//! The keypad is drawn inside a bordered block; the inner area is split
//! into equal grid cells and a spanning button covers several of them.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::keypad::{ButtonAction, Keypad, KeypadButton};

/// Area inside the keypad border
fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

impl Keypad {
    /// Size of one grid cell inside `area`, `None` when too small to use
    fn cell_size(&self, inner: Rect) -> Option<(u16, u16)> {
        let (rows, cols) = self.dimensions();
        let cell_w = inner.width / cols as u16;
        let cell_h = inner.height / rows as u16;
        (cell_w > 0 && cell_h > 0).then_some((cell_w, cell_h))
    }

    /// Screen rectangle of a button when the keypad is drawn in `area`
    #[must_use]
    pub fn button_area(&self, area: Rect, index: usize) -> Option<Rect> {
        let btn = self.get_button(index)?;
        let inner = inner_area(area);
        let (cell_w, cell_h) = self.cell_size(inner)?;
        Some(Rect {
            x: inner.x + btn.col as u16 * cell_w,
            y: inner.y + btn.row as u16 * cell_h,
            width: btn.col_span as u16 * cell_w,
            height: btn.row_span as u16 * cell_h,
        })
    }

    /// Converts a terminal cell to the index of the button under it
    #[must_use]
    pub fn hit_test(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        let inner = inner_area(area);
        if x < inner.x || y < inner.y {
            return None;
        }
        let (cell_w, cell_h) = self.cell_size(inner)?;

        let col = ((x - inner.x) / cell_w) as usize;
        let row = ((y - inner.y) / cell_h) as usize;
        self.index_at(row, col)
    }
}

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self { keypad }
    }

    fn button_style(btn: &KeypadButton) -> Style {
        if btn.pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match btn.action {
            ButtonAction::Digit(_) | ButtonAction::Decimal => Style::default().fg(Color::White),
            ButtonAction::Operator(_) => Style::default().fg(Color::Magenta),
            ButtonAction::Equals => Style::default().fg(Color::Green),
            ButtonAction::Clear => Style::default().fg(Color::Red),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .render(area, buf);

        for (index, btn) in self.keypad.buttons().enumerate() {
            let Some(rect) = self.keypad.button_area(area, index) else {
                return; // Too small to render
            };

            // Label on the middle line of the button
            let label_line = Rect {
                y: rect.y + rect.height / 2,
                height: 1,
                ..rect
            };
            Paragraph::new(Span::styled(
                format!("[{}]", btn.label()),
                Self::button_style(btn),
            ))
            .alignment(Alignment::Center)
            .render(label_line, buf);
        }
    }
}
