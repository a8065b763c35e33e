//! Scenario tests for the story flow.
//!
//! These walk the presentation the way a viewer would:
//! - Paging forward through the whole story and back
//! - Clamping at both ends of the catalog
//! - The intro cycle and its reset
//! - Data-panel selection across every page

use paradox_core::{
    DataPanel, Direction, IntroPlayer, Pager, SensorPayload, CHART_RECORD_ID, INTRO_SEQUENCE,
    NARRATIVE_CATALOG, PARADOX_DATA,
};

// =============================================================================
// PAGING SCENARIOS
// =============================================================================

#[test]
fn test_advance_seven_times_reaches_conclusion() {
    let mut pager = Pager::new();
    assert_eq!(pager.page(), 1);

    for _ in 0..7 {
        pager.advance();
    }

    assert_eq!(pager.page(), 8);
    assert_eq!(pager.direction(), Direction::Forward);
    assert_eq!(pager.current().slug, "conclusion");
}

#[test]
fn test_retreat_from_first_page_is_a_no_op() {
    let mut pager = Pager::new();
    assert!(!pager.retreat());
    assert_eq!(pager.page(), 1);
    assert_eq!(pager.current().slug, "discovery");
}

#[test]
fn test_overshooting_both_ends_stays_in_bounds() {
    let mut pager = Pager::new();
    for _ in 0..NARRATIVE_CATALOG.len() + 5 {
        pager.advance();
    }
    assert_eq!(pager.page(), pager.total());
    assert!(pager.at_last());

    for _ in 0..NARRATIVE_CATALOG.len() + 5 {
        pager.retreat();
    }
    assert_eq!(pager.page(), 1);
    assert!(pager.at_first());
}

#[test]
fn test_every_page_resolves_its_own_record() {
    let mut pager = Pager::new();
    loop {
        let record = pager.current();
        assert_eq!(record.id, pager.page());
        assert_eq!(
            record.slug,
            NARRATIVE_CATALOG[(pager.page() - 1) as usize].slug
        );
        if !pager.advance() {
            break;
        }
    }
}

// =============================================================================
// INTRO SCENARIOS
// =============================================================================

#[test]
fn test_intro_cycles_back_after_two_ended_events() {
    let mut player = IntroPlayer::new();
    assert_eq!(INTRO_SEQUENCE.len(), 2);
    assert_eq!(player.cursor(), 0);

    player.playback_finished();
    player.playback_finished();

    assert_eq!(player.cursor(), 0);
}

#[test]
fn test_intro_never_halts_over_many_cycles() {
    let mut player = IntroPlayer::new();
    for round in 0..50 {
        player.playback_finished();
        assert_eq!(player.cursor(), (round + 1) % INTRO_SEQUENCE.len());
    }
}

#[test]
fn test_reset_mid_playback_returns_to_first_record() {
    let mut player = IntroPlayer::new();
    player.skip();
    for _ in 0..10 {
        player.tick();
    }
    assert_eq!(player.cursor(), 1);

    player.reset();
    assert_eq!(player.cursor(), 0);
    assert_eq!(player.progress(), 0.0);
}

// =============================================================================
// DATA-PANEL SELECTION
// =============================================================================

#[test]
fn test_panel_selection_over_the_whole_catalog() {
    for record in NARRATIVE_CATALOG.iter() {
        match DataPanel::for_record(record) {
            DataPanel::Chart => {
                assert_eq!(record.id, CHART_RECORD_ID);
            }
            DataPanel::Sensor(sensor) => {
                assert_ne!(record.id, CHART_RECORD_ID);
                assert!(matches!(sensor.payload, SensorPayload::Value(_)));
            }
            DataPanel::Empty => {
                panic!("every shipped record carries a sensor entry");
            }
        }
    }
}

#[test]
fn test_chart_data_is_five_fixed_points() {
    assert_eq!(PARADOX_DATA.len(), 5);
    assert_eq!(PARADOX_DATA[2].time, "Perihelion");
    for point in PARADOX_DATA {
        assert!(point.lower <= point.predicted);
        assert!(point.predicted <= point.upper);
    }
}
