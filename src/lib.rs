//! tinct - ANSI terminal colorization
//!
//! A fixed palette of SGR escape-sequence constants, per-color line-printing
//! macros that wrap text in a color and reset it afterward, and [`uncolor`],
//! which strips escape sequences and normalizes whitespace (handy for log
//! comparison or plain-text output).
//!
//! ```
//! use tinct::println_blue;
//!
//! println_blue!("count: {}", 5); // "\x1b[34;1mcount: 5\x1b[0;0m\n"
//! assert_eq!(tinct::uncolor("\x1b[31;1mHello\x1b[0;0m   World"), "Hello World");
//! ```

pub mod error;
pub mod palette;
pub mod print;
pub mod uncolor;

pub use palette::{BLUE, CLEAR, GREY, LAVENDER, LIME, MAROON, MINT, ORANGE, PINK, RED, YELLOW};
pub use print::{paint, println_color};
pub use uncolor::uncolor;
