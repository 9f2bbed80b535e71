use thiserror::Error;

pub type FtResult<T> = Result<T, FtError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FtError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
