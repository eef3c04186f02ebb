use bevy::prelude::*;

use the_bistro::progression::{EffectLog, EffectOutcome, GameClock, GamePhase, PhaseChanged};
use the_bistro::state::GameState;

use crate::harness::*;

#[test]
fn day_zero_morning_events_fire_on_session_start() {
    let mut app = headless_app();
    tick(&mut app);

    assert_event_fired(app.world(), "intro_welcome");
    assert_event_fired(app.world(), "opening_quest");
    assert_quest_active(app.world(), "learn_the_basics");
    assert_effect_logged(app.world(), "intro_welcome", |outcome| {
        matches!(outcome, EffectOutcome::DialogueStarted(id) if id == "intro_welcome")
    });
}

#[test]
fn idle_frames_fire_nothing_new() {
    let mut app = headless_app();
    tick(&mut app);
    let after_start = app.world().resource::<EffectLog>().len();

    tick_n(&mut app, 10);
    assert_eq!(app.world().resource::<EffectLog>().len(), after_start);
}

#[test]
fn evening_takings_arrive_with_the_phase() {
    let mut app = headless_app();
    tick(&mut app);
    let opening_balance = app.world().resource::<GameState>().money;

    assert_event_not_fired(app.world(), "first_day_takings");
    advance_to(&mut app, 0, GamePhase::Evening);

    assert_event_fired(app.world(), "first_day_takings");
    assert_money(app.world(), opening_balance + 40);
}

#[test]
fn clock_wraps_into_the_next_day() {
    let mut app = headless_app();
    tick(&mut app);

    advance_phase(&mut app);
    advance_phase(&mut app);
    advance_phase(&mut app);

    let clock = *app.world().resource::<GameClock>();
    assert_eq!(clock.slot(), (1, GamePhase::Morning));
    assert_recipe_unlocked(app.world(), "tomato_soup");
}

#[test]
fn replayed_phase_message_fires_nothing_twice() {
    let mut app = headless_app();
    tick(&mut app);
    advance_to(&mut app, 0, GamePhase::Evening);
    let balance = app.world().resource::<GameState>().money;

    // Re-announce the slot, as a rewound or replayed clock would.
    app.world_mut().write_message(PhaseChanged {
        day: 0,
        phase: GamePhase::Evening,
    });
    tick(&mut app);

    assert_money(app.world(), balance);
}

#[test]
fn batched_events_fire_in_declaration_order() {
    let mut app = headless_app();
    tick(&mut app);
    advance_to(&mut app, 3, GamePhase::Morning);

    let log = app.world().resource::<EffectLog>();
    let day3: Vec<&str> = log
        .entries()
        .iter()
        .filter(|applied| {
            ["oven_delivery", "oven_installed", "margherita_recipe"]
                .contains(&applied.event.as_str())
        })
        .map(|applied| applied.event.as_str())
        .collect();
    assert_eq!(day3, ["oven_delivery", "oven_installed", "margherita_recipe"]);
}

#[test]
fn quest_completes_through_the_shipped_script() {
    let mut app = headless_app();
    tick(&mut app);
    advance_to(&mut app, 2, GamePhase::Evening);

    assert_quest_completed(app.world(), "learn_the_basics");
    let state = app.world().resource::<GameState>();
    assert!(!state.active_quests.contains("learn_the_basics"));
}

#[test]
fn rent_day_deducts_without_going_negative() {
    let mut app = headless_app();
    tick(&mut app);
    set_money(app.world_mut(), 10);
    advance_to(&mut app, 4, GamePhase::Day);

    // Evening takings on day 0 bring the balance to 50; rent is 35.
    assert_money(app.world(), 15);
    assert_effect_logged(app.world(), "weekly_rent", |outcome| {
        matches!(outcome, EffectOutcome::MoneyLost { amount: 35, shortfall: 0, .. })
    });
}

#[test]
fn a_week_of_play_fires_every_scheduled_event_once() {
    let mut app = headless_app();
    tick(&mut app);
    advance_to(&mut app, 8, GamePhase::Morning);

    let state = app.world().resource::<GameState>();
    let fired = state.fired_events.len();
    let log_len = app.world().resource::<EffectLog>().len();
    assert_eq!(fired, 16, "whole script should have fired: {:?}", state.fired_events);
    assert_eq!(log_len, fired, "each firing should be logged exactly once");
}
