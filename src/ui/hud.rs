//! Text HUD - resources, health and menu prompts.

use bevy::prelude::*;

use super::menu::ClassMenu;
use crate::combat::Health;
use crate::core::{DeathEvent, GameState, HitEvent, Outcome};
use crate::enemies::Tag;
use crate::player::{CharacterClass, Player, PotionKind};
use crate::world::{price, ShopMenu, SHOP_ITEMS};

/// How long a combat message stays on screen.
const MESSAGE_SECONDS: f32 = 1.5;

/// Marker for the HUD text.
#[derive(Component)]
pub struct HudText;

/// Most recent hit or kill, shown under the stats for a moment.
#[derive(Resource, Default)]
struct CombatMessage {
    text: String,
    timer: Timer,
}

impl CombatMessage {
    fn show(&mut self, text: String) {
        self.text = text;
        self.timer = Timer::from_seconds(MESSAGE_SECONDS, TimerMode::Once);
    }

    fn visible(&self) -> Option<&str> {
        (!self.text.is_empty() && !self.timer.finished()).then_some(self.text.as_str())
    }
}

/// Draws the HUD. Needs a window, so only the binary adds it.
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatMessage>()
            .add_systems(Startup, spawn_hud)
            .add_systems(Update, (read_combat_events, update_hud).chain());
    }
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        HudText,
    ));
}

fn read_combat_events(
    time: Res<Time>,
    mut message: ResMut<CombatMessage>,
    mut hits: EventReader<HitEvent>,
    mut deaths: EventReader<DeathEvent>,
    tags: Query<&Tag>,
    players: Query<(), With<Player>>,
) {
    message.timer.tick(time.delta());

    for hit in hits.read() {
        if players.contains(hit.target) {
            message.show(format!("You took {} damage", hit.damage));
        } else {
            let name = tags.get(hit.target).map_or("Enemy", |tag| tag.0.as_str());
            message.show(format!("{} -{}", name, hit.damage));
        }
    }
    for death in deaths.read() {
        message.show(format!("{} defeated", death.tag.as_deref().unwrap_or("Enemy")));
    }
}

fn update_hud(
    state: Res<State<GameState>>,
    message: Res<CombatMessage>,
    class_menu: Res<ClassMenu>,
    shop_menu: Res<ShopMenu>,
    outcome: Res<Outcome>,
    player_query: Query<(&Player, &Health)>,
    mut hud_query: Query<&mut Text, With<HudText>>,
) {
    let Ok(mut text) = hud_query.get_single_mut() else {
        return;
    };
    let player = player_query.get_single().ok();

    text.0 = match state.get() {
        GameState::ClassSelect => {
            let mut lines = vec!["Choose your class".to_string()];
            for (i, class) in CharacterClass::ALL.iter().enumerate() {
                let marker = if i == class_menu.cursor.index() { ">" } else { " " };
                lines.push(format!("{} {}", marker, class.name()));
            }
            lines.join("\n")
        }
        GameState::Shop => {
            let mut lines = vec!["Village Shop - Buy Potions".to_string()];
            for (i, item) in SHOP_ITEMS.iter().enumerate() {
                let marker = if i == shop_menu.cursor.index() { ">" } else { " " };
                lines.push(format!("{} {} Potion ({} Water)", marker, item, price(*item)));
            }
            if let Some((player, _)) = player {
                lines.push(format!("Your Water: {}", player.water));
            }
            lines.push("ESC to leave".to_string());
            lines.join("\n")
        }
        GameState::Exploring | GameState::Duel => match player {
            Some((player, health)) => {
                let count = |kind: PotionKind| player.inventory.count(kind);
                let mut hud = format!(
                    "Water: {}    H:{} S:{} K:{}\nClass: {}    HP: {}/{}",
                    player.water,
                    count(PotionKind::Health),
                    count(PotionKind::Strength),
                    count(PotionKind::Knockback),
                    player.class().name(),
                    health.current,
                    health.maximum,
                );
                if let Some(line) = message.visible() {
                    hud.push('\n');
                    hud.push_str(line);
                }
                hud
            }
            None => String::new(),
        },
        GameState::Ended => outcome
            .0
            .map(|ending| ending.epilogue().join("\n"))
            .unwrap_or_default(),
    };
}
