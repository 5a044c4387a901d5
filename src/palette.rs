//! ANSI SGR color codes for terminal output
//! Raw escape-sequence strings; prepend one, print, then print [`CLEAR`]

pub const RED: &str = "\x1b[31;1m";
pub const BLUE: &str = "\x1b[34;1m";
pub const YELLOW: &str = "\x1b[33;1m";
pub const PINK: &str = "\x1b[38;5;161;1m"; // 256-color 161
pub const MINT: &str = "\x1b[38;5;48;1m"; // 256-color 48
pub const GREY: &str = "\x1b[90m"; // bright black

pub const LIME: &str = "\x1b[38;5;119;1m"; // 256-color 119
pub const LAVENDER: &str = "\x1b[38;5;183;1m"; // 256-color 183
pub const MAROON: &str = "\x1b[38;5;124;1m"; // 256-color 124
pub const ORANGE: &str = "\x1b[38;5;202;1m"; // 256-color 202

/// Reset all attributes
pub const CLEAR: &str = "\x1b[0;0m";
