//! Drinking potions.

use super::components::Player;
use super::controller::BUFF_TICKS;
use super::inventory::PotionKind;
use crate::combat::Health;

pub const HEALTH_POTION_HEAL: i32 = 60;
pub const STRENGTH_POTION_BONUS: i32 = 25;
pub const KNOCKBACK_POTION_BOOST: f32 = 1.8;

impl Player {
    /// Drink one potion by name (case-insensitive).
    ///
    /// Returns false if the name is not a potion or none is carried; the
    /// inventory is then left untouched.
    pub fn use_potion(&mut self, name: &str, health: &mut Health) -> bool {
        match name.parse::<PotionKind>() {
            Ok(kind) => self.drink(kind, health),
            Err(_) => false,
        }
    }

    /// Potion key behaviour: below half health only a Health potion will do,
    /// otherwise the first of Health, Strength, Knockback that is carried.
    pub fn quick_use_potion(&mut self, health: &mut Health) -> Option<PotionKind> {
        let candidates: &[PotionKind] = if health.current * 2 < health.maximum {
            &[PotionKind::Health]
        } else {
            &PotionKind::ALL
        };

        candidates
            .iter()
            .copied()
            .find(|kind| self.drink(*kind, health))
    }

    /// Potion key during a duel: only a Health potion is drunk.
    pub fn duel_use_potion(&mut self, health: &mut Health) -> Option<PotionKind> {
        self.drink(PotionKind::Health, health).then_some(PotionKind::Health)
    }

    fn drink(&mut self, kind: PotionKind, health: &mut Health) -> bool {
        if !self.inventory.take(kind) {
            return false;
        }

        match kind {
            PotionKind::Health => {
                health.heal(HEALTH_POTION_HEAL);
            }
            PotionKind::Strength => {
                self.attack_bonus = self.stats.attack_bonus + STRENGTH_POTION_BONUS;
                self.strength_timer = BUFF_TICKS;
            }
            PotionKind::Knockback => {
                self.knockback_boost = KNOCKBACK_POTION_BOOST;
                self.knockback_timer = BUFF_TICKS;
            }
        }
        true
    }
}
