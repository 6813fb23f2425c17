//! Core plugin that sets up game states, events, the fixed tick and the
//! system sets every other plugin hangs its systems on.

use bevy::prelude::*;
use bevy::state::state::StateTransitionEvent;

use super::context::*;
use super::events::*;
use super::input::*;
use super::states::*;

/// The simulation advances exactly this many ticks per second.
pub const TICK_RATE_HZ: f64 = 120.0;

/// System set ordering for one simulation tick.
///
/// Physics happens inside `Player` and `Enemies`, attack objects advance in
/// `Attacks` before `Combat` hit-tests them, and the `Encounter` set reacts to
/// whatever the tick produced.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimSet {
    Input,
    Menus,
    Player,
    Enemies,
    Attacks,
    Combat,
    Encounter,
    Latch,
}

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (ClassSelect, Exploring, Shop, Duel, Ended)
/// - Global events (HitEvent, DeathEvent, ParticleBurst)
/// - The simulation context, action state and RNG
/// - The fixed 120 Hz tick and its ordered system sets
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<HitEvent>()
            .add_event::<DeathEvent>()
            .add_event::<ParticleBurst>()

            // Shared resources
            .init_resource::<SimContext>()
            .init_resource::<ButtonInput<Action>>()
            .init_resource::<GameRng>()
            .init_resource::<Outcome>()
            .insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))

            // System ordering
            .configure_sets(
                FixedUpdate,
                (
                    SimSet::Input,
                    SimSet::Menus,
                    SimSet::Player,
                    SimSet::Enemies,
                    SimSet::Attacks,
                    SimSet::Combat,
                    SimSet::Encounter,
                    SimSet::Latch,
                )
                    .chain(),
            )
            .configure_sets(FixedUpdate, SimSet::Menus.run_if(menus_ready))
            .configure_sets(
                FixedUpdate,
                (
                    SimSet::Player,
                    SimSet::Enemies,
                    SimSet::Attacks,
                    SimSet::Combat,
                    SimSet::Encounter,
                )
                    .run_if(simulation_running),
            )

            // Keyboard is sampled once per frame, the simulation reads the snapshot
            .add_systems(PreUpdate, read_keyboard.after(bevy::input::InputSystem))
            .add_systems(FixedUpdate, advance_tick.in_set(SimSet::Input))
            .add_systems(
                FixedUpdate,
                (clear_action_edges, release_hold, decay_shake).in_set(SimSet::Latch),
            )
            .add_systems(Update, log_transitions);
    }
}

/// True while gameplay should advance: exploring or dueling, no scripted hold
/// running and no state change waiting to be applied.
pub fn simulation_running(
    state: Res<State<GameState>>,
    next_state: Res<NextState<GameState>>,
    ctx: Res<SimContext>,
) -> bool {
    matches!(state.get(), GameState::Exploring | GameState::Duel)
        && !ctx.is_holding()
        && matches!(*next_state, NextState::Unchanged)
}

/// Menus only read input once any message has been acknowledged.
fn menus_ready(next_state: Res<NextState<GameState>>, ctx: Res<SimContext>) -> bool {
    !ctx.is_holding() && matches!(*next_state, NextState::Unchanged)
}

fn advance_tick(mut ctx: ResMut<SimContext>) {
    ctx.tick += 1;
}

fn release_hold(mut ctx: ResMut<SimContext>) {
    ctx.hold_ticks = ctx.hold_ticks.saturating_sub(1);
}

fn decay_shake(mut ctx: ResMut<SimContext>) {
    if ctx.shake_ticks > 0 {
        ctx.shake_ticks -= 1;
        if ctx.shake_ticks == 0 {
            ctx.shake_intensity = 0;
        }
    }
}

fn log_transitions(mut transitions: EventReader<StateTransitionEvent<GameState>>) {
    for transition in transitions.read() {
        info!("Game state: {:?} -> {:?}", transition.exited, transition.entered);
    }
}
