use crate::earlygame::EarlyGameStats;
use crate::snapshot::WindowSnapshot;

// identity, role, account profile and the win flag come from other
// services and stay at their defaults here
pub fn rows(
    early: &EarlyGameStats,
    snapshot: &WindowSnapshot,
) -> Vec<common::match_record::ParticipantRow> {
    snapshot
        .participants
        .iter()
        .map(|state| {
            let counters = early.stats.get(state.id);

            common::match_record::ParticipantRow {
                participant_id: state.id.get(),
                team_id: state.id.side().team_id(),
                lane: common::match_record::LaneState {
                    level: state.level,
                    xp: state.xp,
                    total_gold: state.total_gold,
                    minions_killed: state.minions_killed,
                    jungle_minions_killed: state.jungle_minions_killed,
                },
                stats: common::match_record::EarlyStats {
                    kills: counters.kills as u32,
                    assists: counters.assists as u32,
                    deaths: counters.deaths as u32,
                    wards_placed: counters.wards_placed as u32,
                    wards_destroyed: counters.wards_destroyed as u32,
                    towers_destroyed: counters.towers_destroyed as u32,
                    inhibitors_destroyed: counters.inhibitors_destroyed as u32,
                    dragons_killed: counters.dragons_killed as u32,
                    heralds_killed: counters.heralds_killed as u32,
                },
                ..Default::default()
            }
        })
        .collect()
}
