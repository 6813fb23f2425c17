//! Menus, exploration and the ways a run can end.

mod common;

use bevy::prelude::*;

use common::*;
use water_quest::combat::{Facing, Health};
use water_quest::core::{Action, Ending, GameState, Outcome, SimContext};
use water_quest::enemies::{Enemy, Tag};
use water_quest::player::{CharacterClass, Player, PotionKind};
use water_quest::world::{BANDIT_COUNT, BOSS_TAG, PLAYER_START};

fn outcome(app: &App) -> Option<Ending> {
    app.world().resource::<Outcome>().0
}

fn water(app: &mut App) -> u32 {
    let player = player(app);
    app.world().get::<Player>(player).unwrap().water
}

#[test]
fn class_menu_starts_a_run_with_a_full_level() {
    let mut app = app();
    assert_eq!(state(&app), GameState::ClassSelect);

    start_run(&mut app, CharacterClass::Ranger);
    let player = player(&mut app);
    let stats = &app.world().get::<Player>(player).unwrap().stats;
    assert_eq!(stats.class, CharacterClass::Ranger);
    assert_eq!(health(&app, player), Health::new(110));
    assert_eq!(water(&mut app), 50);

    assert_eq!(enemy_count(&mut app), BANDIT_COUNT + 1);
    let mut tags = app.world_mut().query_filtered::<&Tag, With<Enemy>>();
    let tags: Vec<String> = tags.iter(app.world()).map(|tag| tag.0.clone()).collect();
    assert!(tags.iter().any(|tag| tag == BOSS_TAG));
    assert!(tags.iter().any(|tag| tag == "Bandit 1"));
    assert!(tags.iter().any(|tag| tag == "Bandit 10"));
}

#[test]
fn story_hold_freezes_the_simulation() {
    let mut app = app();
    tap(&mut app, Action::Confirm);
    assert_eq!(state(&app), GameState::Exploring);

    let player = player(&mut app);
    input(&mut app).press(Action::MoveRight);
    ticks(&mut app, 60);
    let frozen = body(&app, player).rect;
    assert_eq!(frozen.x, PLAYER_START.x);
    assert_eq!(frozen.y, PLAYER_START.y);

    ticks(&mut app, 70);
    assert!(!app.world().resource::<SimContext>().is_holding());
    assert!(body(&app, player).rect.x > PLAYER_START.x);
}

#[test]
fn shop_sells_what_the_player_can_afford() {
    let mut app = app();
    start_run(&mut app, CharacterClass::Warrior);
    tick(&mut app);

    tap(&mut app, Action::Interact);
    assert_eq!(state(&app), GameState::Shop);

    let player = player(&mut app);
    let potions_before = app.world().get::<Player>(player).unwrap().inventory.len();
    tap(&mut app, Action::Confirm);
    assert_eq!(water(&mut app), 30);
    let inventory = &app.world().get::<Player>(player).unwrap().inventory;
    assert_eq!(inventory.len(), potions_before + 1);
    assert!(inventory.contains(PotionKind::Health));

    skip_hold(&mut app);
    tap(&mut app, Action::MenuDown);
    tap(&mut app, Action::MenuDown);
    tap(&mut app, Action::Confirm);
    assert_eq!(water(&mut app), 30);
    assert!(!app
        .world()
        .get::<Player>(player)
        .unwrap()
        .inventory
        .contains(PotionKind::Knockback));

    skip_hold(&mut app);
    tap(&mut app, Action::Back);
    assert_eq!(state(&app), GameState::Exploring);
}

#[test]
fn interact_away_from_the_village_does_nothing() {
    let mut app = app();
    start_run(&mut app, CharacterClass::Warrior);
    let player = player(&mut app);
    set_body(&mut app, player, 700.0, 604.0);
    tap(&mut app, Action::Interact);
    assert_eq!(state(&app), GameState::Exploring);
}

#[test]
fn portal_needs_enough_water() {
    let run = |water: u32| {
        let mut app = app();
        start_run(&mut app, CharacterClass::Mage);
        for (tag, x) in [("Bandit 9", 2500.0), ("Bandit 10", 2700.0)] {
            let bandit = enemy_tagged(&mut app, tag);
            set_body(&mut app, bandit, x, 604.0);
        }

        let player = player(&mut app);
        app.world_mut().get_mut::<Player>(player).unwrap().water = water;
        set_body(&mut app, player, 4630.0, 604.0);
        tick(&mut app);
        (state(&app), outcome(&app))
    };

    assert_eq!(run(50), (GameState::Ended, Some(Ending::Secret)));
    assert_eq!(run(49), (GameState::Exploring, None));
}

#[test]
fn losing_a_duel_ends_the_run_badly() {
    let mut app = app();
    start_run(&mut app, CharacterClass::Mage);
    let bandit = engage(&mut app, "Bandit 1");
    let player = player(&mut app);

    set_body(&mut app, player, 900.0, 604.0);
    set_body(&mut app, bandit, 980.0, 604.0);
    app.world_mut().get_mut::<Enemy>(bandit).unwrap().cooldown = 0;
    app.world_mut().get_mut::<Health>(player).unwrap().current = 1;

    ticks(&mut app, 20);
    assert_eq!(state(&app), GameState::Ended);
    assert_eq!(outcome(&app), Some(Ending::Bad));
    assert_eq!(health(&app, player).current, 0);
}

#[test]
fn felling_the_boss_wins_the_game() {
    let mut app = app();
    start_run(&mut app, CharacterClass::Warrior);
    let straggler = enemy_tagged(&mut app, "Bandit 10");
    set_body(&mut app, straggler, 2500.0, 604.0);

    let boss = engage(&mut app, BOSS_TAG);
    assert_eq!(health(&app, boss), Health::new(300));
    let player = player(&mut app);

    set_body(&mut app, player, 960.0, 604.0);
    *app.world_mut().get_mut::<Facing>(player).unwrap() = Facing::Right;
    set_body(&mut app, boss, 980.0, 552.0);
    app.world_mut().get_mut::<Enemy>(boss).unwrap().cooldown = 1000;
    app.world_mut().get_mut::<Health>(boss).unwrap().current = 1;

    tap(&mut app, Action::Attack);
    ticks(&mut app, 20);

    assert!(!exists(&mut app, boss));
    assert_eq!(state(&app), GameState::Ended);
    assert_eq!(outcome(&app), Some(Ending::Good));
}
