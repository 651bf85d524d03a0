// File: crates/plot-core/src/theme.rs
// Summary: Colour presets for chart rendering.

use crate::canvas::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub bar_fill: Color,
    pub bar_outline: Color,
    pub line_stroke: Color,
}

impl Theme {
    /// White page, black axes, blue data.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: Color::WHITE,
            axis_line: Color::BLACK,
            axis_label: Color::BLACK,
            bar_fill: Color::BLUE,
            bar_outline: Color::BLACK,
            line_stroke: Color::BLUE,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            axis_line: Color::from_argb(255, 60, 60, 70),
            axis_label: Color::from_argb(255, 20, 20, 30),
            bar_fill: Color::from_argb(255, 40, 120, 200),
            bar_outline: Color::from_argb(255, 60, 60, 70),
            line_stroke: Color::from_argb(255, 32, 120, 200),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            axis_line: Color::from_argb(255, 180, 180, 190),
            axis_label: Color::from_argb(255, 235, 235, 245),
            bar_fill: Color::from_argb(255, 96, 156, 255),
            bar_outline: Color::from_argb(255, 150, 150, 160),
            line_stroke: Color::from_argb(255, 64, 160, 255),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high_contrast",
            background: Color::from_argb(255, 0x00, 0x00, 0x00),
            axis_line: Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: Color::from_argb(255, 0xff, 0xff, 0xff),
            bar_fill: Color::from_argb(255, 0x00, 0xaa, 0xff),
            bar_outline: Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            line_stroke: Color::from_argb(255, 0x00, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::classic() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::classic(),
        Theme::light(),
        Theme::dark(),
        Theme::high_contrast(),
    ]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::classic()
}
