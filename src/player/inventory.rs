//! Potions and the ordered inventory that holds them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Potion name that matches no known kind.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown potion: {0}")]
pub struct UnknownPotion(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PotionKind {
    Health,
    Strength,
    Knockback,
}

impl PotionKind {
    pub const ALL: [PotionKind; 3] = [PotionKind::Health, PotionKind::Strength, PotionKind::Knockback];

    pub fn name(&self) -> &'static str {
        match self {
            PotionKind::Health => "Health",
            PotionKind::Strength => "Strength",
            PotionKind::Knockback => "Knockback",
        }
    }
}

impl fmt::Display for PotionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PotionKind {
    type Err = UnknownPotion;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PotionKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPotion(s.to_string()))
    }
}

/// Potions in the order they were acquired. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<PotionKind>,
}

impl Inventory {
    pub fn add(&mut self, kind: PotionKind) {
        self.items.push(kind);
    }

    /// Remove the first potion of `kind`. Returns false if there is none.
    pub fn take(&mut self, kind: PotionKind) -> bool {
        match self.items.iter().position(|item| *item == kind) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, kind: PotionKind) -> bool {
        self.items.contains(&kind)
    }

    pub fn count(&self, kind: PotionKind) -> usize {
        self.items.iter().filter(|item| **item == kind).count()
    }

    pub fn items(&self) -> &[PotionKind] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<PotionKind> for Inventory {
    fn from_iter<I: IntoIterator<Item = PotionKind>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
