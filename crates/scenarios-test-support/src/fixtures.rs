//! Player and stage case sources for integration suites.

use std::fmt;

use scenarios::{LabelAll, LabeledValue, describe_via_display, zip_combined};
use serde::Serialize;

/// A selectable fighter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Player {
    /// Display name of the fighter.
    pub name: String,
}

impl Player {
    /// Build a player from its name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Player {{ name: {} }}", self.name)
    }
}

/// A fight location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Stage {
    /// Name of the stage.
    pub name: String,
    /// Country the stage is set in.
    pub country: String,
}

impl Stage {
    /// Build a stage from its name and country.
    #[must_use]
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Stage {{ name: {}, country: {} }}", self.name, self.country)
    }
}

describe_via_display!(Player, Stage);

/// Names of the roster returned by [`players`], in order.
pub const PLAYER_NAMES: [&str; 4] = ["ryu", "m. bison", "rose", "fei long"];

/// The raw roster, without labels.
#[must_use]
pub fn roster() -> Vec<Player> {
    PLAYER_NAMES.into_iter().map(Player::new).collect()
}

/// The stages paired with the roster by [`players_and_stages`].
#[must_use]
pub fn arenas() -> Vec<Stage> {
    vec![
        Stage::new("suzaku castle", "japan"),
        Stage::new("shadaloo base", "thailand"),
        Stage::new("venice", "italy"),
        Stage::new("kowloon market", "hong kong"),
    ]
}

/// The roster labeled by player name.
pub fn players() -> impl Iterator<Item = LabeledValue<Player>> + Clone {
    roster().label_all(|player| player.name.clone())
}

/// The stages labeled by stage name.
pub fn stages() -> impl Iterator<Item = LabeledValue<Stage>> + Clone {
    arenas().label_all(|stage| stage.name.clone())
}

/// Every player matched with the stage at the same position.
pub fn players_and_stages() -> impl Iterator<Item = LabeledValue<(Player, Stage)>> {
    zip_combined(players(), stages())
}
