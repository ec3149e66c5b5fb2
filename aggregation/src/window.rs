use crate::error::AggregateError;
use crate::timeline::Frame;

// one frame per minute, so the first 15 frames cover the early game
pub const WINDOW: usize = 15;

pub fn first_window(frames: &[Frame]) -> Result<&[Frame], AggregateError> {
    if frames.len() < WINDOW {
        return Err(AggregateError::InsufficientData {
            available: frames.len(),
            required: WINDOW,
        });
    }

    Ok(&frames[..WINDOW])
}
