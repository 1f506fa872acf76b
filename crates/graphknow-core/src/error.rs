//! Error types for Graphknow

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("missing environment variable: {0}")]
    MissingEnv(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
