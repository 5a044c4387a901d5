//! Error type for the CLI's fallible I/O
//! The library operations themselves are total and never return `Result`

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o: {0}")]
    Io(#[from] std::io::Error),
}
