use rand::SeedableRng;

fn main() {
    divan::main();
}

fn synthetic_timeline(events_per_frame: usize) -> aggregation::timeline::Timeline {
    let frames = (0..15)
        .map(|minute| {
            let events = (0..events_per_frame)
                .map(|i| match i % 5 {
                    0 => aggregation::timeline::RawEvent {
                        kind: "CHAMPION_KILL".to_owned(),
                        timestamp: (minute as u64) * 60_000 + (i as u64) * 700,
                        killer_id: Some(if i % 4 == 0 {
                            0
                        } else {
                            ((i % 10) + 1) as i32
                        }),
                        victim_id: Some(((i + 5) % 10 + 1) as i32),
                        assisting_participant_ids: vec![((i + 2) % 10 + 1) as i32],
                        ..Default::default()
                    },
                    1 => aggregation::timeline::RawEvent {
                        kind: "WARD_PLACED".to_owned(),
                        creator_id: Some(((i % 10) + 1) as i32),
                        ..Default::default()
                    },
                    2 => aggregation::timeline::RawEvent {
                        kind: "ITEM_PURCHASED".to_owned(),
                        ..Default::default()
                    },
                    3 => aggregation::timeline::RawEvent {
                        kind: "WARD_KILL".to_owned(),
                        killer_id: Some(((i % 10) + 1) as i32),
                        ..Default::default()
                    },
                    _ => aggregation::timeline::RawEvent {
                        kind: "BUILDING_KILL".to_owned(),
                        killer_id: Some(0),
                        team_id: Some(if i % 2 == 0 { 100 } else { 200 }),
                        building_type: Some("TOWER_BUILDING".to_owned()),
                        ..Default::default()
                    },
                })
                .collect();

            let participant_frames = (1..=10)
                .map(|id| {
                    (
                        id.to_string(),
                        aggregation::timeline::ParticipantFrame {
                            participant_id: id,
                            level: 8,
                            xp: 6000,
                            total_gold: 5200,
                            minions_killed: 90,
                            jungle_minions_killed: 10,
                        },
                    )
                })
                .collect();

            aggregation::timeline::Frame {
                events,
                participant_frames,
                timestamp: (minute as u64) * 60_000,
            }
        })
        .collect();

    aggregation::timeline::Timeline {
        frames,
        frame_interval: Some(60_000),
    }
}

#[divan::bench(args = [4, 16, 64])]
fn aggregate(bencher: divan::Bencher, events_per_frame: usize) {
    let timeline = synthetic_timeline(events_per_frame);

    bencher.bench(|| {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(3);
        aggregation::earlygame::aggregate(divan::black_box(&timeline), &mut rng)
    });
}

#[divan::bench(args = [4, 16, 64])]
fn classify(bencher: divan::Bencher, events_per_frame: usize) {
    let timeline = synthetic_timeline(events_per_frame);

    bencher.bench(|| {
        timeline
            .frames
            .iter()
            .flat_map(|frame| frame.events.iter())
            .filter(|raw| {
                matches!(
                    aggregation::event::classify(divan::black_box(raw)),
                    Ok(aggregation::event::Classified::Event(_))
                )
            })
            .count()
    });
}

#[divan::bench]
fn window_snapshot(bencher: divan::Bencher) {
    let timeline = synthetic_timeline(16);

    bencher.bench(|| aggregation::snapshot::at_window_close(divan::black_box(&timeline)));
}
