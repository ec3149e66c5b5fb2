pub mod match_record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Bot,
    Supp,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountProfile {
    pub account_level: Option<u32>,
    pub rank_division: Option<String>,
    pub wins: Option<u32>,
    pub losses: Option<u32>,
    pub main_role: Option<String>,
    pub alt_role: Option<String>,
    pub main_champ: Option<String>,
    pub main_champ_mastery_lvl: Option<u32>,
    pub main_champ_mastery_pts: Option<u64>,
}
