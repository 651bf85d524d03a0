// File: crates/plot-core/src/canvas.rs
// Summary: Drawing-surface capability consumed by the chart renderers.

/// 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLUE: Color = Color::rgb(0, 0, 168);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontKind {
    #[default]
    Default,
    Monospace,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextDirection {
    #[default]
    Horizontal,
    /// Rotated 90 degrees counter-clockwise, reading bottom to top.
    Vertical,
}

/// Primitive raster surface.
///
/// Coordinates are integer pixels with the origin at the top-left corner.
/// `draw_text` positions the top-left corner of the text box. Stroke
/// operations use the colour from `set_color`; `draw_filled_bar` uses the
/// colour from `set_fill_style` and draws no outline.
pub trait Canvas {
    fn clear(&mut self, background: Color);
    fn set_color(&mut self, color: Color);
    fn set_fill_style(&mut self, color: Color);
    fn draw_rectangle(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);
    fn draw_filled_bar(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);
    fn draw_text(&mut self, x: i32, y: i32, text: &str);
    /// `size` is a scale factor; 1 is the normal label size.
    fn set_text_style(&mut self, font: FontKind, direction: TextDirection, size: u32);
}
