use thiserror::Error;

pub type TrResult<T> = Result<T, TrError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
