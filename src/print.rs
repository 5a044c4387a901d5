//! Colorized line printing over the palette constants

use crate::palette;
use std::fmt::Arguments;
use std::io::Write;

/// Wrap formatted text in a color code and the clear code (no newline).
///
/// Useful with the palette entries that have no dedicated macro
/// ([`LIME`](palette::LIME), [`LAVENDER`](palette::LAVENDER),
/// [`MAROON`](palette::MAROON), [`ORANGE`](palette::ORANGE)).
#[must_use]
pub fn paint(code: &str, args: Arguments<'_>) -> String {
    let clear = palette::CLEAR;
    format!("{code}{args}{clear}")
}

/// Write one colorized line to stdout: color code, text, clear code, newline.
///
/// The stdout lock is held for a single write, so one call's line never
/// interleaves with another thread's. Write errors are not reported; a
/// closed or broken stdout behaves however the platform primitive does.
pub fn println_color(code: &str, args: Arguments<'_>) {
    let line = paint(code, args);
    let mut out = std::io::stdout().lock();
    let _ = writeln!(out, "{line}");
}

/// Print a line in blue
#[macro_export]
macro_rules! println_blue {
    ($($arg:tt)*) => {
        $crate::print::println_color($crate::palette::BLUE, ::core::format_args!($($arg)*))
    };
}

/// Print a line in grey
#[macro_export]
macro_rules! println_grey {
    ($($arg:tt)*) => {
        $crate::print::println_color($crate::palette::GREY, ::core::format_args!($($arg)*))
    };
}

/// Print a line in mint
#[macro_export]
macro_rules! println_mint {
    ($($arg:tt)*) => {
        $crate::print::println_color($crate::palette::MINT, ::core::format_args!($($arg)*))
    };
}

/// Print a line in red
#[macro_export]
macro_rules! println_red {
    ($($arg:tt)*) => {
        $crate::print::println_color($crate::palette::RED, ::core::format_args!($($arg)*))
    };
}

/// Print a line in yellow
#[macro_export]
macro_rules! println_yellow {
    ($($arg:tt)*) => {
        $crate::print::println_color($crate::palette::YELLOW, ::core::format_args!($($arg)*))
    };
}

/// Print a line in pink
#[macro_export]
macro_rules! println_pink {
    ($($arg:tt)*) => {
        $crate::print::println_color($crate::palette::PINK, ::core::format_args!($($arg)*))
    };
}
