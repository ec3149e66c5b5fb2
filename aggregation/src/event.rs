use crate::participant::{ParticipantId, Side};
use crate::timeline::RawEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    ChampionKill,
    WardPlaced,
    WardKill,
    BuildingKill,
    EliteMonsterKill,
}

// https://developer.riotgames.com/apis#match-v4/GET_getMatchTimelineByMatchId
pub static EVENT_KINDS: phf::Map<&'static str, EventKind> = phf::phf_map! {
    "CHAMPION_KILL" => EventKind::ChampionKill,
    "WARD_PLACED" => EventKind::WardPlaced,
    "WARD_KILL" => EventKind::WardKill,
    "BUILDING_KILL" => EventKind::BuildingKill,
    "ELITE_MONSTER_KILL" => EventKind::EliteMonsterKill,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildingKind {
    Tower,
    Inhibitor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonsterKind {
    Dragon,
    RiftHerald,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ChampionKill {
        killer: Option<ParticipantId>,
        victim: ParticipantId,
        assists: Vec<ParticipantId>,
    },
    WardPlaced {
        creator: ParticipantId,
    },
    WardKill {
        killer: ParticipantId,
    },
    BuildingKill {
        killer: Option<ParticipantId>,
        owner: Side,
        building: BuildingKind,
    },
    EliteMonsterKill {
        killer: ParticipantId,
        monster: MonsterKind,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    Event(Event),
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error("{kind:?} event is missing its {field} field")]
    MissingField { kind: EventKind, field: &'static str },
    #[error("participant id {0} is outside 1..=10")]
    InvalidParticipant(i32),
}

pub fn classify(raw: &RawEvent) -> Result<Classified, ClassifyError> {
    let kind = match EVENT_KINDS.get(raw.kind.as_str()) {
        Some(k) => *k,
        None => return Ok(Classified::Skip),
    };

    match kind {
        EventKind::ChampionKill => {
            let victim_raw = field(kind, "victimId", raw.victim_id)?;
            let victim = match participant(victim_raw)? {
                Some(v) => v,
                // a death always needs a real participant behind it
                None => return Err(ClassifyError::InvalidParticipant(victim_raw)),
            };
            let killer = participant(field(kind, "killerId", raw.killer_id)?)?;

            let mut assists = Vec::with_capacity(raw.assisting_participant_ids.len());
            for id in raw.assisting_participant_ids.iter() {
                match participant(*id)? {
                    Some(p) => assists.push(p),
                    None => return Err(ClassifyError::InvalidParticipant(*id)),
                }
            }

            Ok(Classified::Event(Event::ChampionKill {
                killer,
                victim,
                assists,
            }))
        }
        EventKind::WardPlaced => {
            match participant(field(kind, "creatorId", raw.creator_id)?)? {
                Some(creator) => Ok(Classified::Event(Event::WardPlaced { creator })),
                None => {
                    tracing::trace!("Ward placed by the environment, nobody to credit");
                    Ok(Classified::Skip)
                }
            }
        }
        EventKind::WardKill => match participant(field(kind, "killerId", raw.killer_id)?)? {
            Some(killer) => Ok(Classified::Event(Event::WardKill { killer })),
            None => {
                tracing::trace!("Ward killed by the environment, nobody to credit");
                Ok(Classified::Skip)
            }
        },
        EventKind::BuildingKill => {
            let killer = participant(field(kind, "killerId", raw.killer_id)?)?;

            let team_raw = field(kind, "teamId", raw.team_id)?;
            let owner = match Side::from_team_id(team_raw) {
                Some(s) => s,
                None => {
                    tracing::trace!(team_id = team_raw, "Building kill for unknown team");
                    return Ok(Classified::Skip);
                }
            };

            let building = match raw.building_type.as_deref() {
                Some("TOWER_BUILDING") => BuildingKind::Tower,
                Some("INHIBITOR_BUILDING") => BuildingKind::Inhibitor,
                Some(other) => {
                    tracing::trace!(building_type = other, "Unknown building type");
                    return Ok(Classified::Skip);
                }
                None => {
                    return Err(ClassifyError::MissingField {
                        kind,
                        field: "buildingType",
                    })
                }
            };

            Ok(Classified::Event(Event::BuildingKill {
                killer,
                owner,
                building,
            }))
        }
        EventKind::EliteMonsterKill => {
            match participant(field(kind, "killerId", raw.killer_id)?)? {
                Some(killer) => {
                    let monster = match raw.monster_type.as_deref() {
                        Some("DRAGON") => MonsterKind::Dragon,
                        Some("RIFTHERALD") => MonsterKind::RiftHerald,
                        _ => MonsterKind::Other,
                    };

                    Ok(Classified::Event(Event::EliteMonsterKill { killer, monster }))
                }
                None => {
                    tracing::trace!("Monster kill without a participant killer");
                    Ok(Classified::Skip)
                }
            }
        }
    }
}

fn field(
    kind: EventKind,
    name: &'static str,
    value: Option<i32>,
) -> Result<i32, ClassifyError> {
    value.ok_or(ClassifyError::MissingField { kind, field: name })
}

// 0 marks the environment as the actor, everything else has to be a real id
fn participant(raw: i32) -> Result<Option<ParticipantId>, ClassifyError> {
    if raw == 0 {
        return Ok(None);
    }

    match ParticipantId::new(raw) {
        Some(id) => Ok(Some(id)),
        None => Err(ClassifyError::InvalidParticipant(raw)),
    }
}
