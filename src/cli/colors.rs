//! Theme colors of the CLI.
//!
//! - FERRUM_RED: main color, sources and highlights
//! - FERRUM_GREY: row positions and other secondary output

use colored::Color;

pub(crate) const FERRUM_RED: Color = Color::TrueColor {
    r: 255,
    g: 87,
    b: 87,
};

pub(crate) const FERRUM_GREY: Color = Color::TrueColor {
    r: 140,
    g: 140,
    b: 140,
};
