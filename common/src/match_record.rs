use crate::{AccountProfile, Role};

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneState {
    pub level: u32,
    pub xp: u32,
    pub total_gold: u32,
    pub minions_killed: u32,
    pub jungle_minions_killed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarlyStats {
    pub kills: u32,
    pub assists: u32,
    pub deaths: u32,
    pub wards_placed: u32,
    pub wards_destroyed: u32,
    pub towers_destroyed: u32,
    pub inhibitors_destroyed: u32,
    pub dragons_killed: u32,
    pub heralds_killed: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantRow {
    pub participant_id: u8,
    pub team_id: u16,
    pub summoner_name: Option<String>,
    pub platform_id: Option<String>,
    pub champion_id: Option<i32>,
    pub role: Option<Role>,
    #[serde(flatten)]
    pub profile: AccountProfile,
    #[serde(flatten)]
    pub lane: LaneState,
    #[serde(flatten)]
    pub stats: EarlyStats,
    pub win: Option<bool>,
}
