use thiserror::Error;

pub type TalkResult<T> = Result<T, TalkError>;

/// Errors local to a single send/receive cycle. None of these are fatal to
/// the process; the UI surfaces them as a notice and keeps accepting input.
#[derive(Debug, Error)]
pub enum TalkError {
    #[error("configuration error: {0}")]
    InvalidConfiguration(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("could not parse response: {0}")]
    Decode(String),
}

impl TalkError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        TalkError::InvalidConfiguration(msg.into())
    }

    pub fn network_error(msg: impl Into<String>) -> Self {
        TalkError::Network(msg.into())
    }

    pub fn decode_error(msg: impl Into<String>) -> Self {
        TalkError::Decode(msg.into())
    }
}
