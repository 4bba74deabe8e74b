use memory_grid_engine::domain::Entry;
use memory_grid_engine::engine::{
    EngineError, Outcome, Reveal, RoundEventKind, RoundPlan, RoundStatus, TurnEngine,
};

fn entry(word: &str) -> Entry {
    Entry::new(word, format!("img/{word}.png"), format!("audio/{word}.mp3"))
}

/// Поле из 4 карточек A,B,C,D; искать в порядке слотов 2,0,3,1.
fn four_card_engine() -> TurnEngine {
    let plan = RoundPlan::new(
        vec![entry("A"), entry("B"), entry("C"), entry("D")],
        vec![2, 0, 3, 1],
    )
    .unwrap();
    TurnEngine::new(plan)
}

fn accepted(outcome: Outcome) -> Reveal {
    match outcome {
        Outcome::Accepted(reveal) => reveal,
        other => panic!("expected Accepted, got {other:?}"),
    }
}

#[test]
fn new_engine_starts_in_progress_at_zero() {
    let engine = four_card_engine();

    assert_eq!(engine.status(), RoundStatus::InProgress { progress: 0 });
    assert_eq!(engine.progress(), 0);
    assert_eq!(engine.expected_slot(), Some(2));
    assert_eq!(engine.current_target().map(|e| e.word.as_str()), Some("C"));
    assert!(engine.state().revealed().is_empty());
    assert_eq!(
        engine.history().last(),
        Some(&RoundEventKind::RoundStarted {
            round_size: 4,
            first_target: 2
        })
    );
}

#[test]
fn worked_scenario_four_cards() {
    let mut engine = four_card_engine();

    // select(0) -> Rejected (ждём 2)
    assert_eq!(engine.select(0).unwrap(), Outcome::Rejected { slot: 0 });
    assert_eq!(engine.progress(), 0);
    assert!(!engine.is_revealed(0));

    // select(2) -> Accepted, слово C, дальше слот 0
    let r = accepted(engine.select(2).unwrap());
    assert_eq!(r.slot, 2);
    assert_eq!(r.word, "C");
    assert_eq!(r.audio, "audio/C.mp3");
    assert_eq!(r.progress, 1);
    assert!(!r.round_complete);
    assert_eq!(r.next_expected, Some(0));
    assert_eq!(r.completion_slot, None);
    assert_eq!(engine.current_target().map(|e| e.word.as_str()), Some("A"));

    let r = accepted(engine.select(0).unwrap());
    assert_eq!((r.word.as_str(), r.progress, r.next_expected), ("A", 2, Some(3)));

    let r = accepted(engine.select(3).unwrap());
    assert_eq!((r.word.as_str(), r.progress, r.next_expected), ("D", 3, Some(1)));

    let r = accepted(engine.select(1).unwrap());
    assert_eq!(r.word, "B");
    assert_eq!(r.progress, 4);
    assert!(r.round_complete);
    assert_eq!(r.next_expected, None);
    assert_eq!(r.completion_slot, Some(1));

    assert_eq!(engine.status(), RoundStatus::Complete);
    assert!(engine.state().is_complete());
    assert_eq!(engine.current_target(), None);
    assert_eq!(engine.expected_slot(), None);
}

#[test]
fn history_records_accepted_and_rejected_clicks_in_order() {
    let mut engine = four_card_engine();

    engine.select(0).unwrap();
    engine.select(2).unwrap();
    engine.select(2).unwrap();

    let kinds: Vec<RoundEventKind> = engine
        .history()
        .events
        .iter()
        .map(|e| e.kind.clone())
        .collect();

    assert_eq!(
        kinds,
        vec![
            RoundEventKind::RoundStarted {
                round_size: 4,
                first_target: 2
            },
            RoundEventKind::SlotRejected {
                slot: 0,
                expected: 2
            },
            RoundEventKind::SlotAccepted {
                slot: 2,
                progress: 1
            },
        ]
    );
    let indexes: Vec<u32> = engine.history().events.iter().map(|e| e.index).collect();
    assert_eq!(indexes, vec![0, 1, 2]);
}

#[test]
fn completion_event_names_last_slot() {
    let mut engine = four_card_engine();
    for slot in [2, 0, 3, 1] {
        engine.select(slot).unwrap();
    }
    assert_eq!(
        engine.history().last(),
        Some(&RoundEventKind::RoundCompleted { last_slot: 1 })
    );
}

#[test]
fn revealed_slot_is_ignored_without_state_change() {
    let mut engine = four_card_engine();
    engine.select(2).unwrap();
    let before = engine.state().clone();

    let history_len = engine.history().len();

    for _ in 0..5 {
        assert_eq!(engine.select(2).unwrap(), Outcome::Ignored { slot: 2 });
    }

    assert_eq!(engine.state(), &before);
    assert_eq!(engine.history().len(), history_len);
}

#[test]
fn rejection_does_not_change_state() {
    let mut engine = four_card_engine();
    engine.select(2).unwrap();
    let before = engine.state().clone();

    assert_eq!(engine.select(1).unwrap(), Outcome::Rejected { slot: 1 });
    assert_eq!(engine.select(3).unwrap(), Outcome::Rejected { slot: 3 });

    assert_eq!(engine.state(), &before);
    assert_eq!(engine.expected_slot(), Some(0));
}

#[test]
fn every_click_after_completion_is_ignored() {
    let mut engine = four_card_engine();
    for slot in [2, 0, 3, 1] {
        engine.select(slot).unwrap();
    }
    let before = engine.state().clone();
    let history = engine.history().clone();

    for _ in 0..100 {
        for slot in 0..4 {
            assert_eq!(engine.select(slot).unwrap(), Outcome::Ignored { slot });
        }
    }
    assert_eq!(engine.state(), &before);
    assert_eq!(engine.history(), &history);
    assert_eq!(
        engine.history().last(),
        Some(&RoundEventKind::RoundCompleted { last_slot: 1 })
    );
    assert_eq!(engine.progress(), 4);
}

#[test]
fn single_card_round_completes_on_first_hit() {
    let plan = RoundPlan::new(vec![entry("solo")], vec![0]).unwrap();
    let mut engine = TurnEngine::new(plan);

    let r = accepted(engine.select(0).unwrap());
    assert!(r.round_complete);
    assert_eq!(r.completion_slot, Some(0));
    assert_eq!(engine.status(), RoundStatus::Complete);
}

#[test]
fn out_of_range_slot_is_contract_violation() {
    let mut engine = four_card_engine();
    let before = engine.state().clone();
    let history_len = engine.history().len();

    assert_eq!(
        engine.select(4).unwrap_err(),
        EngineError::InvalidSlot {
            slot: 4,
            round_size: 4
        }
    );
    assert!(engine.select(255).is_err());

    assert_eq!(engine.state(), &before);
    assert_eq!(engine.history().len(), history_len);
}

#[test]
fn outcome_helpers() {
    let mut engine = four_card_engine();
    let rejected = engine.select(1).unwrap();
    let ok = engine.select(2).unwrap();

    assert_eq!(rejected.slot(), 1);
    assert!(!rejected.is_accepted());
    assert_eq!(ok.slot(), 2);
    assert!(ok.is_accepted());
}
