use crate::error::AggregateError;
use crate::participant::ParticipantId;
use crate::timeline::Timeline;
use crate::window;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSnapshot {
    pub participants: Vec<ParticipantState>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticipantState {
    pub id: ParticipantId,
    pub level: u32,
    pub xp: u32,
    pub total_gold: u32,
    pub minions_killed: u32,
    pub jungle_minions_killed: u32,
}

pub fn at_window_close(timeline: &Timeline) -> Result<WindowSnapshot, AggregateError> {
    let frames = window::first_window(&timeline.frames)?;
    let closing = &frames[window::WINDOW - 1];

    // the keys of the raw map are untrusted, matching happens on the
    // participantId carried by each entry
    let mut participants = Vec::with_capacity(10);
    for id in ParticipantId::all() {
        let state = closing
            .participant_frames
            .values()
            .find(|pf| pf.participant_id == id.get() as i32)
            .ok_or(AggregateError::MissingParticipantFrame(id.get()))?;

        participants.push(ParticipantState {
            id,
            level: state.level,
            xp: state.xp,
            total_gold: state.total_gold,
            minions_killed: state.minions_killed,
            jungle_minions_killed: state.jungle_minions_killed,
        });
    }

    Ok(WindowSnapshot { participants })
}
