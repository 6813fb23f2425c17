//! Headless app helpers shared by the integration tests.

#![allow(dead_code)]

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::state::state::StateTransition;

use water_quest::combat::Health;
use water_quest::core::{Action, GameRng, GameState, SimContext};
use water_quest::enemies::{Enemy, Tag};
use water_quest::physics::Body;
use water_quest::player::{CharacterClass, Player};
use water_quest::ui::ClassMenu;
use water_quest::WaterQuestPlugin;

/// App with the whole simulation and no window, seeded for repeatability.
pub fn app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, WaterQuestPlugin))
        .insert_resource(GameRng::seeded(42));
    app.world_mut().run_schedule(StateTransition);
    app
}

/// One simulation tick followed by any pending state change.
pub fn tick(app: &mut App) {
    app.world_mut().run_schedule(FixedUpdate);
    app.world_mut().run_schedule(StateTransition);
}

pub fn ticks(app: &mut App, n: usize) {
    for _ in 0..n {
        tick(app);
    }
}

pub fn input(app: &mut App) -> Mut<'_, ButtonInput<Action>> {
    app.world_mut().resource_mut::<ButtonInput<Action>>()
}

/// Press `action` for exactly one tick, then let go of it.
pub fn tap(app: &mut App, action: Action) {
    input(app).press(action);
    tick(app);
    input(app).release(action);
}

pub fn state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

/// Drop any scripted pause so the next tick simulates.
pub fn skip_hold(app: &mut App) {
    app.world_mut().resource_mut::<SimContext>().hold_ticks = 0;
}

/// Pick `class` from the menu and start exploring.
pub fn start_run(app: &mut App, class: CharacterClass) {
    while app.world().resource::<ClassMenu>().selected() != class {
        app.world_mut().resource_mut::<ClassMenu>().cursor.down();
    }
    tap(app, Action::Confirm);
    assert_eq!(state(app), GameState::Exploring);
    skip_hold(app);
}

pub fn player(app: &mut App) -> Entity {
    app.world_mut()
        .query_filtered::<Entity, With<Player>>()
        .single(app.world())
}

pub fn enemy_tagged(app: &mut App, tag: &str) -> Entity {
    let mut query = app.world_mut().query::<(Entity, &Tag)>();
    query
        .iter(app.world())
        .find(|(_, t)| t.0 == tag)
        .map(|(entity, _)| entity)
        .unwrap_or_else(|| panic!("no enemy tagged {tag}"))
}

pub fn body(app: &App, entity: Entity) -> Body {
    app.world().get::<Body>(entity).cloned().unwrap()
}

pub fn set_body(app: &mut App, entity: Entity, x: f32, y: f32) {
    let mut body = app.world_mut().get_mut::<Body>(entity).unwrap();
    body.rect.x = x;
    body.rect.y = y;
    body.vel_y = 0.0;
}

pub fn health(app: &App, entity: Entity) -> Health {
    *app.world().get::<Health>(entity).unwrap()
}

pub fn exists(app: &mut App, entity: Entity) -> bool {
    app.world_mut().query::<Entity>().get(app.world(), entity).is_ok()
}

/// Walk the player into `tag` and start the duel, with the hold skipped.
pub fn engage(app: &mut App, tag: &str) -> Entity {
    let enemy = enemy_tagged(app, tag);
    let target = body(app, enemy).rect;
    let player = player(app);
    set_body(app, player, target.x - 40.0, target.bottom() - 76.0);
    tick(app);
    assert_eq!(state(app), GameState::Duel);
    skip_hold(app);
    enemy
}

/// Every enemy still in the world.
pub fn enemy_count(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<Entity, With<Enemy>>()
        .iter(app.world())
        .count()
}
