//! Match setup.
//!
//! The setup screen collects a name and a color per player. `MatchSetup`
//! holds those values and checks them before a session is created; the
//! engine itself trusts whatever it is given.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerMap, Profile};
use crate::error::SetupError;

/// Names and colors for both players.
///
/// Defaults match the setup screen's fallbacks: "Player 1" in red and
/// "Player 2" in blue.
///
/// ```
/// use shift_three::core::{MatchSetup, Player};
///
/// let setup = MatchSetup::default()
///     .with_name(Player::One, "Ana")
///     .with_color(Player::Two, "green");
///
/// assert!(setup.validate().is_ok());
/// assert_eq!(setup.profile(Player::One).name, "Ana");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSetup {
    profiles: PlayerMap<Profile>,
}

impl Default for MatchSetup {
    fn default() -> Self {
        Self {
            profiles: PlayerMap::new(|player| match player {
                Player::One => Profile::new("Player 1", "red"),
                Player::Two => Profile::new("Player 2", "blue"),
            }),
        }
    }
}

impl MatchSetup {
    /// Create a setup from explicit values.
    pub fn new(
        player1_name: impl Into<String>,
        player1_color: impl Into<String>,
        player2_name: impl Into<String>,
        player2_color: impl Into<String>,
    ) -> Self {
        Self {
            profiles: PlayerMap::from_array([
                Profile::new(player1_name, player1_color),
                Profile::new(player2_name, player2_color),
            ]),
        }
    }

    /// Set a player's display name.
    #[must_use]
    pub fn with_name(mut self, player: Player, name: impl Into<String>) -> Self {
        self.profiles[player].name = name.into();
        self
    }

    /// Set a player's piece color.
    #[must_use]
    pub fn with_color(mut self, player: Player, color: impl Into<String>) -> Self {
        self.profiles[player].color = color.into();
        self
    }

    #[must_use]
    pub fn profile(&self, player: Player) -> &Profile {
        &self.profiles[player]
    }

    #[must_use]
    pub fn profiles(&self) -> &PlayerMap<Profile> {
        &self.profiles
    }

    /// Check the values a session cannot start with.
    ///
    /// Names must be non-blank and the two colors must differ (compared
    /// case-insensitively, ignoring surrounding whitespace).
    pub fn validate(&self) -> Result<(), SetupError> {
        for (player, profile) in self.profiles.iter() {
            if profile.name.trim().is_empty() {
                return Err(SetupError::MissingName { player });
            }
            if profile.color.trim().is_empty() {
                return Err(SetupError::MissingColor { player });
            }
        }

        let one = self.profiles[Player::One].color.trim();
        let two = self.profiles[Player::Two].color.trim();
        if one.eq_ignore_ascii_case(two) {
            return Err(SetupError::DuplicateColor {
                color: one.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let setup = MatchSetup::default();

        assert_eq!(setup.profile(Player::One), &Profile::new("Player 1", "red"));
        assert_eq!(setup.profile(Player::Two), &Profile::new("Player 2", "blue"));
        assert_eq!(setup.validate(), Ok(()));
    }

    #[test]
    fn test_new_sets_all_fields() {
        let setup = MatchSetup::new("Ana", "#ff0000", "Rui", "#0000ff");

        assert_eq!(setup.profile(Player::One), &Profile::new("Ana", "#ff0000"));
        assert_eq!(setup.profile(Player::Two), &Profile::new("Rui", "#0000ff"));
    }

    #[test]
    fn test_blank_name_rejected() {
        let setup = MatchSetup::default().with_name(Player::Two, "   ");

        assert_eq!(
            setup.validate(),
            Err(SetupError::MissingName { player: Player::Two })
        );
    }

    #[test]
    fn test_blank_color_rejected() {
        let setup = MatchSetup::default().with_color(Player::One, "");

        assert_eq!(
            setup.validate(),
            Err(SetupError::MissingColor { player: Player::One })
        );
    }

    #[test]
    fn test_duplicate_color_rejected() {
        let setup = MatchSetup::default()
            .with_color(Player::One, "Green")
            .with_color(Player::Two, " green");

        assert_eq!(
            setup.validate(),
            Err(SetupError::DuplicateColor {
                color: "Green".to_string()
            })
        );
    }
}
