//! Terminal styling helpers

use owo_colors::{OwoColorize, Stream};
use std::fmt::Display;

/// Check mark for passing results
pub const CHECK: &str = "✓";

/// Cross for failing results
pub const CROSS: &str = "✗";

/// Color helpers that respect whether stdout supports color
pub trait Stylize {
    /// Bold text
    fn emphasis(&self) -> String;
    /// Dimmed text
    fn muted(&self) -> String;
    /// Green text
    fn success(&self) -> String;
    /// Red text
    fn failure(&self) -> String;
    /// Cyan text
    fn accent(&self) -> String;
}

impl<T: Display> Stylize for T {
    fn emphasis(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.bold()).to_string()
    }

    fn muted(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.dimmed()).to_string()
    }

    fn success(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.green()).to_string()
    }

    fn failure(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.red()).to_string()
    }

    fn accent(&self) -> String {
        self.if_supports_color(Stream::Stdout, |t| t.cyan()).to_string()
    }
}
