use thiserror::Error;

/// Contract violations and malformed input.
///
/// Missing optional data never produces one of these; it degrades to
/// "treat as absent" inside the engine instead.
#[derive(Error, Debug)]
pub enum SbcError {
    #[error("Invalid squad size: expected {expected} slots, found {found}")]
    InvalidSquadSize { expected: usize, found: usize },

    #[error("Invalid slot index: {index}")]
    InvalidSlotIndex { index: usize },

    #[error("Invalid player position: {0}")]
    InvalidPosition(String),

    #[error("Invalid rating: {0}. Must be between 0 and 99")]
    InvalidRating(u8),

    #[error("Invalid rule book: {0}")]
    InvalidRuleBook(String),

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    UnsupportedSchema { found: u8, expected: u8 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl SbcError {
    /// True for errors caused by a caller handing the engine impossible data,
    /// as opposed to a file or payload that failed to parse.
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            SbcError::InvalidSquadSize { .. }
                | SbcError::InvalidSlotIndex { .. }
                | SbcError::InvalidPosition(_)
                | SbcError::InvalidRating(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SbcError>;
