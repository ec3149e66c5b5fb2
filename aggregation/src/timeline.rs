#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub frames: Vec<Frame>,
    pub frame_interval: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    #[serde(default)]
    pub events: Vec<RawEvent>,
    #[serde(default)]
    pub participant_frames: std::collections::HashMap<String, ParticipantFrame>,
    #[serde(default)]
    pub timestamp: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantFrame {
    #[serde(default)]
    pub participant_id: i32,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub xp: u32,
    #[serde(default)]
    pub total_gold: u32,
    #[serde(default)]
    pub minions_killed: u32,
    #[serde(default)]
    pub jungle_minions_killed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub timestamp: u64,
    pub killer_id: Option<i32>,
    pub victim_id: Option<i32>,
    pub creator_id: Option<i32>,
    pub team_id: Option<i32>,
    #[serde(default)]
    pub assisting_participant_ids: Vec<i32>,
    pub building_type: Option<String>,
    pub monster_type: Option<String>,
}
