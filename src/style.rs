//! Color treatment for everything the game prints.
//!
//! [`GameStyle`] names one method per output role rather than exposing raw
//! `colored` calls at the print sites, so the palette lives in one place.
//! It hangs off `&str` and `String` directly.

use colored::{ColoredString, Colorize};

/// One styling method per kind of output the REPL produces.
pub trait GameStyle {
    fn title_style(&self) -> ColoredString;
    fn narration_style(&self) -> ColoredString;
    fn prompt_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn death_style(&self) -> ColoredString;
}

impl GameStyle for &str {
    fn title_style(&self) -> ColoredString {
        self.bold().truecolor(220, 180, 40)
    }
    fn narration_style(&self) -> ColoredString {
        self.truecolor(102, 208, 250)
    }
    fn prompt_style(&self) -> ColoredString {
        self.truecolor(110, 220, 110)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn death_style(&self) -> ColoredString {
        self.bold().truecolor(230, 30, 30)
    }
}

impl GameStyle for String {
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn narration_style(&self) -> ColoredString {
        self.as_str().narration_style()
    }
    fn prompt_style(&self) -> ColoredString {
        self.as_str().prompt_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn death_style(&self) -> ColoredString {
        self.as_str().death_style()
    }
}
