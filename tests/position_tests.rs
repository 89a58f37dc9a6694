// Host-side tests for the engine-order table.

use std::collections::HashSet;
use telegraph_core::*;

#[test]
fn table_is_ordered_astern_to_ahead() {
    let angles: Vec<f32> = TelegraphPosition::ALL.iter().map(|p| p.angle()).collect();
    assert!(angles.windows(2).all(|w| w[0] < w[1]), "{angles:?}");
    assert_eq!(angles.first(), Some(&MIN_ANGLE_DEG));
    assert_eq!(angles.last(), Some(&MAX_ANGLE_DEG));
}

#[test]
fn default_is_stop_at_zero() {
    assert_eq!(TelegraphPosition::default(), TelegraphPosition::Stop);
    assert_eq!(TelegraphPosition::Stop.angle(), 0.0);
}

#[test]
fn keys_and_labels_are_unique() {
    let keys: HashSet<_> = TelegraphPosition::ALL.iter().map(|p| p.key()).collect();
    let labels: HashSet<_> = TelegraphPosition::ALL.iter().map(|p| p.label()).collect();
    assert_eq!(keys.len(), 10);
    assert_eq!(labels.len(), 10);
}

#[test]
fn keys_parse_back() {
    for p in TelegraphPosition::ALL {
        assert_eq!(p.key().parse::<TelegraphPosition>(), Ok(p));
    }
    assert_eq!(
        "flank-speed".parse::<TelegraphPosition>(),
        Err(ParsePositionError("flank-speed".into()))
    );
}

#[test]
fn display_uses_label() {
    assert_eq!(
        TelegraphPosition::FinishedWithEngines.to_string(),
        "FINISHED WITH ENGINES"
    );
    assert_eq!(TelegraphPosition::DeadSlowAstern.key(), "dead-slow-astern");
}
