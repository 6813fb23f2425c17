//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. For example, combat
//! resolution only runs while a duel is in progress, while the class menu
//! only reacts to input in the ClassSelect state.

use bevy::prelude::*;

/// Main game states - controls overall game flow.
///
/// The game transitions between these states based on player actions:
/// - Start in `ClassSelect` to pick Warrior, Ranger or Mage
/// - `Exploring` roams the wide level
/// - `Shop` is entered from the village and returns to `Exploring`
/// - `Duel` isolates the player and one enemy in an arena
/// - `Ended` once one of the endings has been reached
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Class selection menu
    #[default]
    ClassSelect,
    /// Roaming the level
    Exploring,
    /// Buying potions in the village
    Shop,
    /// One-on-one fight in the arena
    Duel,
    /// The run is over
    Ended,
}

/// The ways a run can end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ending {
    /// The Bandit King was defeated.
    Good,
    /// The player fell in a duel.
    Bad,
    /// The player stepped through the portal with enough Water.
    Secret,
}

impl Ending {
    /// Closing lines shown when the ending is reached.
    pub fn epilogue(&self) -> &'static [&'static str] {
        match self {
            Ending::Good => &[
                "You defeated the Bandit King!",
                "The princess is saved.",
                "The realm of 67 prospers.",
                "GOOD ENDING - You are the richest in the realm with infinite 67 Water!",
            ],
            Ending::Bad => &[
                "You were defeated...",
                "The realm of 67 falls into ruin.",
                "BAD ENDING",
            ],
            Ending::Secret => &[
                "You step through the mystical portal...",
                "Your accumulated 67 Water creates a bridge between worlds.",
                "The portal closes behind you forever.",
                "ALTERNATE ENDING - You became a traveler between worlds!",
            ],
        }
    }
}

/// How the run ended, once it has.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Outcome(pub Option<Ending>);
