use aggregation::snapshot;
use aggregation::timeline::{Frame, ParticipantFrame, Timeline};
use aggregation::AggregateError;

use pretty_assertions::assert_eq;

fn state(id: i32) -> ParticipantFrame {
    ParticipantFrame {
        participant_id: id,
        level: id as u32,
        xp: 480 * id as u32,
        total_gold: 390 * id as u32,
        minions_killed: 9 * id as u32,
        jungle_minions_killed: id as u32 / 2,
    }
}

fn timeline_with_closing_states() -> Timeline {
    let mut frames: Vec<Frame> = (0..15)
        .map(|i| Frame {
            timestamp: (i as u64) * 60_000,
            ..Default::default()
        })
        .collect();

    // nonsense in an earlier frame stays invisible, only the closing frame counts
    frames[13].participant_frames = [("1".to_owned(), state(9))].into_iter().collect();
    frames[14].participant_frames = (1..=10)
        .map(|id| (id.to_string(), state(id)))
        .collect();

    Timeline {
        frames,
        frame_interval: Some(60_000),
    }
}

#[test]
fn closing_frame_state_is_extracted_in_order() {
    let result = snapshot::at_window_close(&timeline_with_closing_states()).unwrap();

    assert_eq!(10, result.participants.len());
    for (expected_id, state) in (1..=10).zip(result.participants.iter()) {
        assert_eq!(expected_id, state.id.get());
        assert_eq!(expected_id as u32, state.level);
        assert_eq!(480 * expected_id as u32, state.xp);
        assert_eq!(390 * expected_id as u32, state.total_gold);
        assert_eq!(9 * expected_id as u32, state.minions_killed);
        assert_eq!(expected_id as u32 / 2, state.jungle_minions_killed);
    }
}

#[test]
fn entries_match_on_id_not_on_key() {
    let mut timeline = timeline_with_closing_states();
    // keys shifted by one against the ids they hold, plus one entry
    // with an id that belongs to nobody
    timeline.frames[14].participant_frames = (1..=10)
        .map(|id| (((id % 10) + 1).to_string(), state(id)))
        .collect();
    timeline.frames[14]
        .participant_frames
        .insert("0".to_owned(), state(99));

    let result = snapshot::at_window_close(&timeline).unwrap();

    assert_eq!(10, result.participants.len());
    for (expected_id, state) in (1..=10).zip(result.participants.iter()) {
        assert_eq!(expected_id, state.id.get());
        assert_eq!(expected_id as u32, state.level);
    }
}

#[test]
fn missing_participant_state_is_fatal() {
    let mut timeline = timeline_with_closing_states();
    timeline.frames[14].participant_frames.remove("7");

    let result = snapshot::at_window_close(&timeline);

    assert_eq!(Err(AggregateError::MissingParticipantFrame(7)), result);
}

#[test]
fn short_timelines_are_rejected() {
    let mut timeline = timeline_with_closing_states();
    timeline.frames.truncate(12);

    assert_eq!(
        Err(AggregateError::InsufficientData {
            available: 12,
            required: 15,
        }),
        snapshot::at_window_close(&timeline)
    );
}
