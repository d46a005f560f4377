//! Shape colours.

use crate::fb::{CellStyle, Rgb};
use crate::types::Shape;

pub const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
pub const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

pub const fn shape_color(shape: Shape) -> Rgb {
    match shape {
        Shape::I => Rgb::new(80, 220, 220),
        Shape::O => Rgb::new(240, 220, 80),
        Shape::T => Rgb::new(200, 120, 220),
        Shape::S => Rgb::new(100, 220, 120),
        Shape::Z => Rgb::new(220, 80, 80),
        Shape::J => Rgb::new(80, 120, 220),
        Shape::L => Rgb::new(255, 165, 0),
    }
}

/// Style for a filled board square of `shape`.
pub const fn block_style(shape: Shape) -> CellStyle {
    CellStyle::new(shape_color(shape), BOARD_BG).bold()
}

pub const fn empty_style() -> CellStyle {
    CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim()
}

pub const fn border_style() -> CellStyle {
    CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG)
}

pub const fn label_style() -> CellStyle {
    CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold()
}

pub const fn value_style() -> CellStyle {
    CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG)
}

pub const fn overlay_style() -> CellStyle {
    CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold()
}
