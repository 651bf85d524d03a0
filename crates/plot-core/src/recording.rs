// File: crates/plot-core/src/recording.rs
// Summary: Headless canvas that records every draw call; used by tests and benchmarks.

use crate::canvas::{Canvas, Color, FontKind, TextDirection};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    SetColor(Color),
    SetFillStyle(Color),
    Rectangle { x1: i32, y1: i32, x2: i32, y2: i32 },
    FilledBar { x1: i32, y1: i32, x2: i32, y2: i32 },
    Line { x1: i32, y1: i32, x2: i32, y2: i32 },
    Text { x: i32, y: i32, text: String },
    TextStyle { font: FontKind, direction: TextDirection, size: u32 },
}

/// Canvas that draws nothing and keeps the command log.
///
/// [`RecordingCanvas::lines_in`] replays the log to recover the stroke colour
/// of each line, which separates axis ticks from series segments.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub commands: Vec<DrawCommand>,
    color: Option<Color>,
}

impl RecordingCanvas {
    pub fn new() -> Self { Self::default() }

    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    pub fn clear_log(&mut self) {
        self.commands.clear();
        self.color = None;
    }

    /// Line commands issued while `color` was the stroke colour.
    pub fn lines_in(&self, color: Color) -> Vec<(i32, i32, i32, i32)> {
        let mut current = None;
        let mut out = Vec::new();
        for cmd in &self.commands {
            match *cmd {
                DrawCommand::SetColor(c) => current = Some(c),
                DrawCommand::Line { x1, y1, x2, y2 } if current == Some(color) => {
                    out.push((x1, y1, x2, y2));
                }
                _ => {}
            }
        }
        out
    }

    /// Text commands issued while `color` was the stroke colour.
    pub fn texts_in(&self, color: Color) -> Vec<&str> {
        let mut current = None;
        let mut out = Vec::new();
        for cmd in &self.commands {
            match cmd {
                DrawCommand::SetColor(c) => current = Some(*c),
                DrawCommand::Text { text, .. } if current == Some(color) => out.push(text.as_str()),
                _ => {}
            }
        }
        out
    }

    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn filled_bars(&self) -> Vec<(i32, i32, i32, i32)> {
        self.commands
            .iter()
            .filter_map(|c| match *c {
                DrawCommand::FilledBar { x1, y1, x2, y2 } => Some((x1, y1, x2, y2)),
                _ => None,
            })
            .collect()
    }

    /// Stroke colour currently selected.
    pub fn current_color(&self) -> Option<Color> { self.color }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, background: Color) {
        self.commands.push(DrawCommand::Clear(background));
    }
    fn set_color(&mut self, color: Color) {
        self.color = Some(color);
        self.commands.push(DrawCommand::SetColor(color));
    }
    fn set_fill_style(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFillStyle(color));
    }
    fn draw_rectangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.commands.push(DrawCommand::Rectangle { x1, y1, x2, y2 });
    }
    fn draw_filled_bar(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.commands.push(DrawCommand::FilledBar { x1, y1, x2, y2 });
    }
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.commands.push(DrawCommand::Line { x1, y1, x2, y2 });
    }
    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        self.commands.push(DrawCommand::Text { x, y, text: text.to_string() });
    }
    fn set_text_style(&mut self, font: FontKind, direction: TextDirection, size: u32) {
        self.commands.push(DrawCommand::TextStyle { font, direction, size });
    }
}
