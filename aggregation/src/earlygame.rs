use rand::Rng;

use crate::attribution;
use crate::error::AggregateError;
use crate::event::{self, BuildingKind, Classified, ClassifyError, Event, MonsterKind};
use crate::participant::ParticipantId;
use crate::stats::StatTable;
use crate::timeline::Timeline;
use crate::window;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarlyGameStats {
    pub stats: StatTable,
    pub dropped_events: usize,
}

pub fn aggregate(
    timeline: &Timeline,
    rng: &mut impl Rng,
) -> Result<EarlyGameStats, AggregateError> {
    let frames = window::first_window(&timeline.frames)?;

    let mut stats = StatTable::new();
    let mut dropped_events = 0;

    for (minute, frame) in frames.iter().enumerate() {
        let _tracing_guard = tracing::debug_span!("Frame", minute).entered();

        for raw in frame.events.iter() {
            match event::classify(raw) {
                Ok(Classified::Event(ev)) => apply(&ev, &mut stats, rng),
                Ok(Classified::Skip) => {}
                Err(ClassifyError::MissingField { kind, field }) => {
                    dropped_events += 1;
                    tracing::warn!(?kind, field, "Skipping malformed event");
                }
                Err(ClassifyError::InvalidParticipant(id)) => {
                    return Err(AggregateError::InvalidParticipant(id));
                }
            }
        }
    }

    Ok(EarlyGameStats {
        stats,
        dropped_events,
    })
}

fn apply(event: &Event, stats: &mut StatTable, rng: &mut impl Rng) {
    match event {
        Event::ChampionKill {
            killer,
            victim,
            assists,
        } => {
            champion_kill(*killer, *victim, assists, stats, rng);
        }
        Event::WardPlaced { creator } => {
            stats.get_mut(*creator).wards_placed += 1;
        }
        Event::WardKill { killer } => {
            stats.get_mut(*killer).wards_destroyed += 1;
        }
        Event::BuildingKill {
            killer,
            owner,
            building,
        } => {
            // buildings always fall to the side that does not own them
            let credited = attribution::resolve(*killer, owner.opposite(), rng);
            match building {
                BuildingKind::Tower => stats.get_mut(credited).towers_destroyed += 1,
                BuildingKind::Inhibitor => stats.get_mut(credited).inhibitors_destroyed += 1,
            };
        }
        Event::EliteMonsterKill { killer, monster } => match monster {
            MonsterKind::Dragon => stats.get_mut(*killer).dragons_killed += 1,
            MonsterKind::RiftHerald => stats.get_mut(*killer).heralds_killed += 1,
            MonsterKind::Other => {}
        },
    };
}

fn champion_kill(
    killer: Option<ParticipantId>,
    victim: ParticipantId,
    assists: &[ParticipantId],
    stats: &mut StatTable,
    rng: &mut impl Rng,
) {
    let credited = attribution::resolve(killer, victim.side().opposite(), rng);
    stats.get_mut(credited).kills += 1;
    stats.get_mut(victim).deaths += 1;

    // an environment kill credits a random enemy and drops the assist list
    if killer.is_some() {
        for assist in assists.iter() {
            stats.get_mut(*assist).assists += 1;
        }
    }
}
