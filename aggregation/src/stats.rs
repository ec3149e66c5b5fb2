use crate::participant::ParticipantId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerCounters {
    pub kills: usize,
    pub assists: usize,
    pub deaths: usize,
    pub wards_placed: usize,
    pub wards_destroyed: usize,
    pub towers_destroyed: usize,
    pub inhibitors_destroyed: usize,
    pub dragons_killed: usize,
    pub heralds_killed: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatTable {
    players: [PlayerCounters; 10],
}

impl StatTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: ParticipantId) -> &PlayerCounters {
        &self.players[id.index()]
    }

    pub fn get_mut(&mut self, id: ParticipantId) -> &mut PlayerCounters {
        &mut self.players[id.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, &PlayerCounters)> + '_ {
        ParticipantId::all().zip(self.players.iter())
    }
}
