//! Error types for the input boundary.
//!
//! Frame building and scoring never fail. These errors classify input
//! before it reaches them, and results that should not be trusted after.

/// Errors raised while collecting or checking a game.
#[derive(Debug, thiserror::Error)]
pub enum BowlingError {
    #[error("Invalid roll value (must be 0-10): {value}")]
    OutOfRangeRoll { value: i64 },

    #[error("Invalid input, expected a number: {token}")]
    NotANumber { token: String },

    #[error("Incomplete input: {frames} of 10 frames completed")]
    IncompleteGame { frames: usize },

    #[error("Invalid 10th frame: expected {} rolls, got {rolls}", tenth_frame_rolls(.strike_or_spare))]
    InvalidTenthFrame { rolls: usize, strike_or_spare: bool },

    #[error("Invalid frame: a frame holds 1 to 3 rolls, got {rolls}")]
    InvalidFrame { rolls: usize },

    #[error("Gave up without a complete game (attempt limit {attempts})")]
    AttemptsExhausted { attempts: u32 },

    #[error("End of input before a complete game was entered")]
    EndOfInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BowlingError {
    /// Stable identifier for this error kind.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfRangeRoll { .. } => "OUT_OF_RANGE_ROLL",
            Self::NotANumber { .. } => "NOT_A_NUMBER",
            Self::IncompleteGame { .. } => "INCOMPLETE_GAME",
            Self::InvalidTenthFrame { .. } => "INVALID_TENTH_FRAME",
            Self::InvalidFrame { .. } => "INVALID_FRAME",
            Self::AttemptsExhausted { .. } => "ATTEMPTS_EXHAUSTED",
            Self::EndOfInput => "END_OF_INPUT",
            Self::Io(_) => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Errors that mean the roll sequence does not form a finished game.
    ///
    /// The interactive session re-prompts on these.
    pub fn is_incomplete_game(&self) -> bool {
        matches!(
            self,
            Self::IncompleteGame { .. } | Self::InvalidTenthFrame { .. }
        )
    }
}

fn tenth_frame_rolls(strike_or_spare: &bool) -> usize {
    if *strike_or_spare {
        3
    } else {
        2
    }
}

/// Result alias for boundary operations.
pub type BowlingResult<T> = Result<T, BowlingError>;
