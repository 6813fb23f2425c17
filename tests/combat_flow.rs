//! Duels driven tick by tick through the full plugin stack.

mod common;

use bevy::prelude::*;

use common::*;
use water_quest::combat::{Attack, Faction, Facing, Health};
use water_quest::core::{Action, GameState, HitEvent, SimContext};
use water_quest::enemies::{Benched, Enemy};
use water_quest::player::{CharacterClass, Player, PotionKind};
use water_quest::world::LEVEL_WIDTH;

/// Stand the player just left of `enemy`, both on the ground, facing it.
fn face_off(app: &mut App, enemy: Entity, player_x: f32) {
    let player = player(app);
    set_body(app, player, player_x, 604.0);
    *app.world_mut().get_mut::<Facing>(player).unwrap() = Facing::Right;
    set_body(app, enemy, 980.0, 604.0);
    app.world_mut().get_mut::<Enemy>(enemy).unwrap().cooldown = 1000;
}

fn damage_dealt_to(app: &App, target: Entity) -> Vec<i32> {
    let events = app.world().resource::<Events<HitEvent>>();
    let mut cursor = events.get_cursor();
    cursor
        .read(events)
        .filter(|event| event.target == target)
        .map(|event| event.damage)
        .collect()
}

#[test]
fn warrior_swing_hits_fresh_bandit_once_for_22() {
    let mut app = app();
    start_run(&mut app, CharacterClass::Warrior);
    let bandit = engage(&mut app, "Bandit 1");
    assert_eq!(health(&app, bandit), Health::new(60));

    face_off(&mut app, bandit, 900.0);
    tap(&mut app, Action::Attack);
    ticks(&mut app, 24);

    assert_eq!(health(&app, bandit).current, 38);
    assert_eq!(damage_dealt_to(&app, bandit), vec![22]);
}

#[test]
fn dead_enemy_leaves_the_same_tick_and_duel_is_won() {
    let mut app = app();
    start_run(&mut app, CharacterClass::Warrior);
    let bandit = engage(&mut app, "Bandit 1");
    let player = player(&mut app);
    let enemies_before = enemy_count(&mut app);

    face_off(&mut app, bandit, 900.0);
    app.world_mut().get_mut::<Health>(bandit).unwrap().current = 10;
    app.world_mut().get_mut::<Health>(player).unwrap().current = 100;
    input(&mut app).press(Action::Attack);

    for _ in 0..30 {
        tick(&mut app);
        let mut alive = app.world_mut().query_filtered::<&Health, With<Enemy>>();
        assert!(alive.iter(app.world()).all(|health| health.current > 0));
        if !exists(&mut app, bandit) {
            break;
        }
    }
    input(&mut app).release(Action::Attack);

    assert!(!exists(&mut app, bandit));
    assert_eq!(state(&app), GameState::Exploring);
    assert_eq!(enemy_count(&mut app), enemies_before - 1);

    let water = app.world().get::<Player>(player).unwrap().water;
    assert!((60..=72).contains(&water), "water: {water}");
    assert_eq!(health(&app, player).current, 130);

    let mut benched = app.world_mut().query_filtered::<Entity, With<Benched>>();
    assert_eq!(benched.iter(app.world()).count(), 0);
    assert_eq!(app.world().resource::<SimContext>().arena_width, LEVEL_WIDTH);
}

#[test]
fn dash_invulnerability_blocks_a_swing_that_otherwise_lands() {
    let run = |dash: bool| {
        let mut app = app();
        start_run(&mut app, CharacterClass::Warrior);
        let bandit = engage(&mut app, "Bandit 1");
        let player = player(&mut app);

        // Player against the left wall facing away, bandit right behind.
        set_body(&mut app, player, 0.0, 604.0);
        set_body(&mut app, bandit, 60.0, 604.0);
        *app.world_mut().get_mut::<Facing>(player).unwrap() = Facing::Left;
        app.world_mut().get_mut::<Enemy>(bandit).unwrap().cooldown = 0;

        let before = health(&app, player).current;
        if dash {
            tap(&mut app, Action::Dash);
        } else {
            tick(&mut app);
        }
        ticks(&mut app, 25);
        before - health(&app, player).current
    };

    assert_eq!(run(false), 12);
    assert_eq!(run(true), 0);
}

#[test]
fn attacks_are_cleared_when_a_duel_starts() {
    let mut app = app();
    start_run(&mut app, CharacterClass::Ranger);
    input(&mut app).press(Action::Attack);
    tick(&mut app);
    input(&mut app).release(Action::Attack);

    let mut attacks = app.world_mut().query::<&Attack>();
    assert!(attacks.iter(app.world()).count() > 0);

    engage(&mut app, "Bandit 1");
    assert_eq!(attacks.iter(app.world()).count(), 0);
}

#[test]
fn mage_fires_a_single_bolt_and_never_swings() {
    let mut app = app();
    start_run(&mut app, CharacterClass::Mage);
    input(&mut app).press(Action::Attack);

    let mut spawned_on = Vec::new();
    let mut attacks = app.world_mut().query::<&Attack>();
    for tick_no in 1..=20 {
        tick(&mut app);
        let projectiles: Vec<bool> = attacks
            .iter(app.world())
            .filter(|attack| attack.faction == Faction::Player)
            .map(|attack| attack.is_projectile())
            .collect();
        assert!(projectiles.iter().all(|projectile| *projectile));
        if !projectiles.is_empty() && spawned_on.is_empty() {
            spawned_on.push(tick_no);
        }
    }
    assert_eq!(spawned_on, vec![7]);
}

#[test]
fn health_stays_in_bounds_through_a_long_brawl() {
    let mut app = app();
    start_run(&mut app, CharacterClass::Ranger);
    engage(&mut app, "Bandit 1");
    input(&mut app).press(Action::Attack);
    input(&mut app).press(Action::MoveRight);

    for i in 0..1200 {
        if i % 50 == 0 {
            input(&mut app).press(Action::Dash);
        } else {
            input(&mut app).release(Action::Dash);
        }
        tick(&mut app);
        skip_hold(&mut app);

        let mut query = app.world_mut().query::<&Health>();
        for health in query.iter(app.world()) {
            assert!((0..=health.maximum).contains(&health.current));
        }
        if state(&app) == GameState::Ended {
            break;
        }
    }
}

#[test]
fn potion_key_in_a_duel_only_drinks_health() {
    let mut app = app();
    start_run(&mut app, CharacterClass::Warrior);
    engage(&mut app, "Bandit 1");
    let player = player(&mut app);
    app.world_mut().get_mut::<Player>(player).unwrap().inventory =
        [PotionKind::Strength, PotionKind::Knockback].into_iter().collect();

    tap(&mut app, Action::UsePotion);
    skip_hold(&mut app);
    let buffed = app.world().get::<Player>(player).unwrap();
    assert_eq!(buffed.inventory.len(), 2);
    assert_eq!(buffed.attack_bonus, 6);

    app.world_mut()
        .get_mut::<Player>(player)
        .unwrap()
        .inventory
        .add(PotionKind::Health);
    app.world_mut().get_mut::<Health>(player).unwrap().current = 150;
    tap(&mut app, Action::UsePotion);

    assert_eq!(health(&app, player).current, 160);
    let player = app.world().get::<Player>(player).unwrap();
    assert_eq!(player.inventory.items(), &[PotionKind::Strength, PotionKind::Knockback]);
}
