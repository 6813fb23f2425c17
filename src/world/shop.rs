//! Village shop: buying potions with Water.

use bevy::prelude::*;
use thiserror::Error;

use super::level::Landmark;
use crate::core::{Action, GameState, SimContext};
use crate::physics::Body;
use crate::player::{Player, PotionKind};
use crate::ui::MenuCursor;

/// How long a purchase message stays up.
pub const SHOP_MESSAGE_TICKS: u32 = 84;

/// Items in menu order.
pub const SHOP_ITEMS: [PotionKind; 3] = [PotionKind::Health, PotionKind::Strength, PotionKind::Knockback];

/// Errors from a purchase attempt. Nothing changes when one is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShopError {
    #[error("Not enough Water: {item} costs {price}, you have {available}")]
    InsufficientWater {
        item: PotionKind,
        price: u32,
        available: u32,
    },
}

/// Price in Water.
pub fn price(kind: PotionKind) -> u32 {
    match kind {
        PotionKind::Health => 20,
        PotionKind::Strength => 60,
        PotionKind::Knockback => 50,
    }
}

/// Deduct the price and add the potion. Returns the Water left.
pub fn buy(player: &mut Player, kind: PotionKind) -> Result<u32, ShopError> {
    let cost = price(kind);
    if player.water < cost {
        return Err(ShopError::InsufficientWater {
            item: kind,
            price: cost,
            available: player.water,
        });
    }

    player.water -= cost;
    player.inventory.add(kind);
    Ok(player.water)
}

/// Shop menu selection.
#[derive(Resource, Debug, Clone)]
pub struct ShopMenu {
    pub cursor: MenuCursor,
}

impl Default for ShopMenu {
    fn default() -> Self {
        Self {
            cursor: MenuCursor::new(SHOP_ITEMS.len()),
        }
    }
}

impl ShopMenu {
    pub fn selected(&self) -> PotionKind {
        SHOP_ITEMS[self.cursor.index()]
    }
}

/// Enter the shop when interacting inside the village.
pub fn open_shop(
    input: Res<ButtonInput<Action>>,
    mut next_state: ResMut<NextState<GameState>>,
    landmarks: Query<&Landmark>,
    player_query: Query<&Body, With<Player>>,
) {
    if !input.just_pressed(Action::Interact) || matches!(*next_state, NextState::Pending(_)) {
        return;
    }
    let Ok(body) = player_query.get_single() else {
        return;
    };

    let in_village = landmarks
        .iter()
        .any(|landmark| matches!(landmark, Landmark::Shop(rect) if rect.overlaps(&body.rect)));
    if in_village {
        next_state.set(GameState::Shop);
    }
}

pub fn enter_shop(mut menu: ResMut<ShopMenu>, player_query: Query<&Player>) {
    *menu = ShopMenu::default();
    info!("Village Shop - Buy Potions");
    if let Ok(player) = player_query.get_single() {
        info!("Your Water: {}", player.water);
    }
}

/// Navigate, buy and leave.
pub fn shop_input(
    input: Res<ButtonInput<Action>>,
    mut ctx: ResMut<SimContext>,
    mut menu: ResMut<ShopMenu>,
    mut next_state: ResMut<NextState<GameState>>,
    mut player_query: Query<&mut Player>,
) {
    if input.just_pressed(Action::Back) {
        next_state.set(GameState::Exploring);
        return;
    }
    if input.just_pressed(Action::MenuUp) {
        menu.cursor.up();
    }
    if input.just_pressed(Action::MenuDown) {
        menu.cursor.down();
    }
    if !input.just_pressed(Action::Confirm) {
        return;
    }

    let Ok(mut player) = player_query.get_single_mut() else {
        return;
    };
    let item = menu.selected();
    match buy(&mut player, item) {
        Ok(left) => info!("Bought {} Potion! Water left: {}", item, left),
        Err(e) => warn!("{}", e),
    }
    ctx.hold(SHOP_MESSAGE_TICKS);
}
