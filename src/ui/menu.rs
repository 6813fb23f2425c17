//! Class selection menu.

use bevy::prelude::*;

use crate::core::{Action, GameRng, GameState, SimContext};
use crate::enemies::EnemyRegistry;
use crate::player::{CharacterClass, ClassRegistry};
use crate::world::{spawn_level, STORY_HOLD_TICKS};

/// Wrapping selection over `len` options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuCursor {
    index: usize,
    len: usize,
}

impl MenuCursor {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn up(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn down(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }
}

/// Class menu selection.
#[derive(Resource, Debug, Clone)]
pub struct ClassMenu {
    pub cursor: MenuCursor,
}

impl Default for ClassMenu {
    fn default() -> Self {
        Self {
            cursor: MenuCursor::new(CharacterClass::ALL.len()),
        }
    }
}

impl ClassMenu {
    pub fn selected(&self) -> CharacterClass {
        CharacterClass::ALL[self.cursor.index()]
    }
}

pub fn enter_class_select(mut menu: ResMut<ClassMenu>) {
    *menu = ClassMenu::default();
    info!("Choose your class: Warrior, Ranger or Mage");
}

/// Pick a class and start the run.
#[allow(clippy::too_many_arguments)]
pub fn class_menu_input(
    mut commands: Commands,
    input: Res<ButtonInput<Action>>,
    mut menu: ResMut<ClassMenu>,
    classes: Res<ClassRegistry>,
    enemies: Res<EnemyRegistry>,
    mut rng: ResMut<GameRng>,
    mut ctx: ResMut<SimContext>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if input.just_pressed(Action::MenuUp) {
        menu.cursor.up();
    }
    if input.just_pressed(Action::MenuDown) {
        menu.cursor.down();
    }
    if !input.just_pressed(Action::Confirm) {
        return;
    }

    let class = menu.selected();
    let stats = match classes.get(class) {
        Ok(stats) => stats.clone(),
        Err(e) => {
            error!("Cannot start as {}: {}", class.name(), e);
            return;
        }
    };

    if let Err(e) = spawn_level(&mut commands, stats, &enemies, &mut rng.0) {
        error!("Failed to build the level: {}", e);
        return;
    }

    *ctx = SimContext {
        tick: ctx.tick,
        ..default()
    };
    info!("THE REALM OF 67: the princess has been kidnapped by the fearsome BANDIT KING.");
    info!("You are a {}. Gather the mystical 67 Water and save the realm.", class.name());
    ctx.hold(STORY_HOLD_TICKS);
    next_state.set(GameState::Exploring);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_wraps_both_ways() {
        let mut cursor = MenuCursor::new(3);
        cursor.up();
        assert_eq!(cursor.index(), 2);
        cursor.down();
        assert_eq!(cursor.index(), 0);
        cursor.down();
        cursor.down();
        cursor.down();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn class_menu_lists_classes_in_order() {
        let mut menu = ClassMenu::default();
        assert_eq!(menu.selected(), CharacterClass::Warrior);
        menu.cursor.down();
        assert_eq!(menu.selected(), CharacterClass::Ranger);
        menu.cursor.up();
        menu.cursor.up();
        assert_eq!(menu.selected(), CharacterClass::Mage);
    }
}
