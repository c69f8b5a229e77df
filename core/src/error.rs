use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PredictError {
    #[error("Server seed must not be empty")]
    EmptyServerSeed,
    #[error("Server seed was rejected as HMAC key material")]
    KeyRejected,
    #[error("Safe index out of range")]
    IndexOutOfRange,
}

pub type Result<T> = core::result::Result<T, PredictError>;
