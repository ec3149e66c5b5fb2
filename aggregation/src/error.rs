#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AggregateError {
    #[error("timeline holds {available} frames but the early-game window needs {required}")]
    InsufficientData { available: usize, required: usize },
    #[error("participant id {0} is outside 1..=10")]
    InvalidParticipant(i32),
    #[error("closing frame carries no state for participant {0}")]
    MissingParticipantFrame(u8),
}
