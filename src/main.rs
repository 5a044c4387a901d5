//! tinct - colorize text on the command line or strip colors from a stream

use clap::{Parser, Subcommand, ValueEnum};
use std::io::{Read, Write};
use std::process::ExitCode;
use tinct::error::Result;
use tinct::{palette, println_color, uncolor};

#[derive(Parser)]
#[command(name = "tinct")]
#[command(about = "ANSI terminal colorization helpers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print arguments in the given palette color
    Paint {
        /// Palette color to use
        color: ColorName,
        /// Text to print, joined with single spaces
        text: Vec<String>,
    },
    /// Strip ANSI codes from stdin and collapse whitespace
    Uncolor,
    /// Show each palette color with a sample swatch
    List,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorName {
    Red,
    Blue,
    Yellow,
    Pink,
    Mint,
    Grey,
    Lime,
    Lavender,
    Maroon,
    Orange,
}

impl ColorName {
    const ALL: [Self; 10] = [
        Self::Red,
        Self::Blue,
        Self::Yellow,
        Self::Pink,
        Self::Mint,
        Self::Grey,
        Self::Lime,
        Self::Lavender,
        Self::Maroon,
        Self::Orange,
    ];

    const fn code(self) -> &'static str {
        match self {
            Self::Red => palette::RED,
            Self::Blue => palette::BLUE,
            Self::Yellow => palette::YELLOW,
            Self::Pink => palette::PINK,
            Self::Mint => palette::MINT,
            Self::Grey => palette::GREY,
            Self::Lime => palette::LIME,
            Self::Lavender => palette::LAVENDER,
            Self::Maroon => palette::MAROON,
            Self::Orange => palette::ORANGE,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Yellow => "yellow",
            Self::Pink => "pink",
            Self::Mint => "mint",
            Self::Grey => "grey",
            Self::Lime => "lime",
            Self::Lavender => "lavender",
            Self::Maroon => "maroon",
            Self::Orange => "orange",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("tinct: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Paint { color, text } => {
            println_color(color.code(), format_args!("{}", text.join(" ")));
        }
        Command::Uncolor => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            let mut out = std::io::stdout().lock();
            writeln!(out, "{}", uncolor(&input))?;
        }
        Command::List => {
            for color in ColorName::ALL {
                println_color(color.code(), format_args!("{}", color.name()));
            }
        }
    }
    Ok(())
}
