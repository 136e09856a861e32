use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("world index {index} is out of range (expected 0..{count})")]
    InvalidWorld { index: usize, count: usize },

    #[error("config field `{field}` must be {expected}")]
    ConfigValue {
        field: &'static str,
        expected: &'static str,
    },

    #[error("malformed config: {0}")]
    ConfigParse(#[from] ron::error::SpannedError),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
}
