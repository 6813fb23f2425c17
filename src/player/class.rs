//! Character classes and their stat blocks, loaded from embedded RON.

use std::collections::HashMap;

use bevy::prelude::*;
use serde::Deserialize;

use crate::world::DataLoadError;

const CLASSES_RON: &str = include_str!("../../assets/data/classes.ron");
const CLASSES_PATH: &str = "assets/data/classes.ron";

/// Playable classes, chosen once at the start of a run.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Warrior,
    Ranger,
    Mage,
}

impl CharacterClass {
    /// Menu order.
    pub const ALL: [CharacterClass; 3] = [
        CharacterClass::Warrior,
        CharacterClass::Ranger,
        CharacterClass::Mage,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CharacterClass::Warrior => "Warrior",
            CharacterClass::Ranger => "Ranger",
            CharacterClass::Mage => "Mage",
        }
    }
}

/// How the attack input is turned into an attack object.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackStyle {
    /// Swing immediately.
    Melee,
    /// Wind up, then release a bolt halfway through the cast.
    Cast,
}

/// Per-class base stats.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ClassStats {
    pub class: CharacterClass,
    pub max_health: i32,
    /// Horizontal speed in px/tick.
    pub speed: f32,
    /// Permanent bonus added to every strike.
    pub attack_bonus: i32,
    /// Initial dash velocity in px/tick.
    pub dash_strength: f32,
    /// Invulnerability ticks granted by a dash.
    pub dash_invulnerability: u32,
    /// Upward velocity of a jump.
    pub jump_impulse: f32,
    pub attack_style: AttackStyle,
}

/// Resource holding the stat block of every class.
#[derive(Resource, Default, Debug)]
pub struct ClassRegistry {
    pub classes: HashMap<CharacterClass, ClassStats>,
}

impl ClassRegistry {
    /// Parse a RON list of class stat blocks.
    pub fn from_ron(source: &str) -> Result<Self, DataLoadError> {
        let definitions: Vec<ClassStats> =
            ron::from_str(source).map_err(|e| DataLoadError::ParseError {
                path: CLASSES_PATH.to_string(),
                details: e.to_string(),
            })?;

        let classes = definitions
            .into_iter()
            .map(|stats| (stats.class, stats))
            .collect();
        Ok(Self { classes })
    }

    /// Registry built from the class file compiled into the binary.
    ///
    /// Logs and returns an empty registry if the data cannot be parsed.
    pub fn load_embedded() -> Self {
        match Self::from_ron(CLASSES_RON) {
            Ok(registry) => {
                info!("Loaded {} class definitions", registry.classes.len());
                registry
            }
            Err(e) => {
                error!("{}", e);
                Self::default()
            }
        }
    }

    pub fn get(&self, class: CharacterClass) -> Result<&ClassStats, DataLoadError> {
        self.classes
            .get(&class)
            .ok_or_else(|| DataLoadError::MissingDefinition(class.name().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_classes_parse() {
        let registry = ClassRegistry::from_ron(CLASSES_RON).unwrap();
        assert_eq!(registry.classes.len(), 3);

        let warrior = registry.get(CharacterClass::Warrior).unwrap();
        assert_eq!(warrior.max_health, 160);
        assert_eq!(warrior.dash_strength, 26.0);
        assert_eq!(warrior.attack_style, AttackStyle::Melee);

        let mage = registry.get(CharacterClass::Mage).unwrap();
        assert_eq!(mage.attack_style, AttackStyle::Cast);
        assert_eq!(mage.attack_bonus, 10);
    }

    #[test]
    fn malformed_data_is_a_parse_error() {
        let result = ClassRegistry::from_ron("[ (class: Warrior) ]");
        assert!(matches!(result, Err(DataLoadError::ParseError { .. })));
    }

    #[test]
    fn missing_class_is_reported() {
        let registry = ClassRegistry::default();
        assert!(matches!(
            registry.get(CharacterClass::Ranger),
            Err(DataLoadError::MissingDefinition(_))
        ));
    }
}
