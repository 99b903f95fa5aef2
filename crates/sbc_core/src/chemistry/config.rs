//! Chemistry rule constants

use serde::{Deserialize, Serialize};

/// Scoring constants for one game edition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChemistryConfig {
    /// Per-player ceiling (default: 3)
    pub max_player_chemistry: u8,
    /// Team ceiling (default: 33, eleven players at the per-player ceiling)
    pub max_team_chemistry: u8,

    // === Links ===
    /// Same club and same nation (default: 2)
    pub link_strong: u8,
    /// Same club, nation or league (default: 1)
    pub link_medium: u8,
    /// Nothing shared (default: 0)
    pub link_dead: u8,

    // === Position penalties ===
    /// Player is in a compatible but not natural position (default: 1)
    pub wrong_position_penalty: u8,
    /// Player is out of position entirely (default: 3)
    pub out_of_position_penalty: u8,
}

impl Default for ChemistryConfig {
    fn default() -> Self {
        Self {
            max_player_chemistry: 3,
            max_team_chemistry: 33,

            link_strong: 2,
            link_medium: 1,
            link_dead: 0,

            wrong_position_penalty: 1,
            out_of_position_penalty: 3,
        }
    }
}

impl ChemistryConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.link_dead > self.link_medium || self.link_medium > self.link_strong {
            return Err(format!(
                "link values must be ordered dead <= medium <= strong, got {}/{}/{}",
                self.link_dead, self.link_medium, self.link_strong
            ));
        }
        let structural = u32::from(self.max_player_chemistry) * crate::models::SQUAD_SIZE as u32;
        if u32::from(self.max_team_chemistry) != structural {
            return Err(format!(
                "max_team_chemistry must equal 11 x max_player_chemistry ({structural}), got {}",
                self.max_team_chemistry
            ));
        }
        Ok(())
    }
}
