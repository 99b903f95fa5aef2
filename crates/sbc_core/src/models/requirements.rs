use super::player::Quality;
use super::squad::{Squad, SQUAD_SIZE};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Formation assumed when a challenge does not name one.
pub const DEFAULT_FORMATION: &str = "4-3-3";

/// Constraints scraped from a challenge view.
///
/// Every field is optional and `None` means "unconstrained". The scraper
/// reports `0` for numbers it could not read, so zero is treated the same as
/// `None` by the accessors below.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct Requirements {
    pub min_rating: Option<u8>,
    pub min_chemistry: Option<u8>,
    pub max_players_from_same_league: Option<u8>,
    pub max_players_from_same_club: Option<u8>,
    pub max_players_from_same_nation: Option<u8>,
    pub formation: Option<String>,
    /// Players the challenge asks for; 11 when unset.
    pub number_of_players: Option<u8>,
    pub exact_league: Option<String>,
    pub exact_nation: Option<String>,
    pub exact_club: Option<String>,
    pub min_gold_players: Option<u8>,
    pub min_silver_players: Option<u8>,
    pub min_bronze_players: Option<u8>,
    pub min_rare_players: Option<u8>,
}

fn active(value: Option<u8>) -> Option<u8> {
    value.filter(|&v| v > 0)
}

impl Requirements {
    pub fn min_rating(&self) -> Option<u8> {
        active(self.min_rating)
    }

    pub fn min_chemistry(&self) -> Option<u8> {
        active(self.min_chemistry)
    }

    pub fn max_same_league(&self) -> Option<u8> {
        active(self.max_players_from_same_league)
    }

    pub fn max_same_club(&self) -> Option<u8> {
        active(self.max_players_from_same_club)
    }

    pub fn max_same_nation(&self) -> Option<u8> {
        active(self.max_players_from_same_nation)
    }

    pub fn min_quality(&self, quality: Quality) -> Option<u8> {
        match quality {
            Quality::Gold => active(self.min_gold_players),
            Quality::Silver => active(self.min_silver_players),
            Quality::Bronze => active(self.min_bronze_players),
        }
    }

    pub fn min_rare(&self) -> Option<u8> {
        active(self.min_rare_players)
    }

    pub fn formation_or_default(&self) -> &str {
        self.formation
            .as_deref()
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(DEFAULT_FORMATION)
    }

    pub fn players_needed(&self) -> usize {
        active(self.number_of_players)
            .map_or(SQUAD_SIZE, usize::from)
    }

    /// Quality filter to apply when searching for cards.
    ///
    /// Bronze wins over silver, silver over gold, so the cheapest tier that
    /// still satisfies a minimum is searched first.
    pub fn search_quality(&self) -> Option<Quality> {
        [Quality::Bronze, Quality::Silver, Quality::Gold]
            .into_iter()
            .find(|&q| self.min_quality(q).is_some())
    }

    /// Empty slots the collaborator should fill, capped at [`Self::players_needed`].
    pub fn slots_to_fill(&self, squad: &Squad) -> Vec<usize> {
        let mut empty = squad.empty_slot_indices();
        empty.truncate(self.players_needed());
        empty
    }

    pub fn is_unconstrained(&self) -> bool {
        self.min_rating().is_none()
            && self.min_chemistry().is_none()
            && self.max_same_league().is_none()
            && self.max_same_club().is_none()
            && self.max_same_nation().is_none()
            && self.min_quality(Quality::Gold).is_none()
            && self.min_quality(Quality::Silver).is_none()
            && self.min_quality(Quality::Bronze).is_none()
            && self.min_rare().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Player, Position};

    #[test]
    fn test_defaults_are_unconstrained() {
        let req = Requirements::default();
        assert!(req.is_unconstrained());
        assert_eq!(req.formation_or_default(), "4-3-3");
        assert_eq!(req.players_needed(), 11);
        assert_eq!(req.search_quality(), None);
    }

    #[test]
    fn test_zero_counts_as_unset() {
        let req = Requirements {
            min_rating: Some(0),
            max_players_from_same_club: Some(0),
            ..Default::default()
        };
        assert!(req.is_unconstrained());
    }

    #[test]
    fn test_null_fields_deserialize() {
        let json = r#"{"minRating":null,"minChemistry":20,"formation":null,"numberOfPlayers":1}"#;
        let req: Requirements = serde_json::from_str(json).unwrap();
        assert_eq!(req.min_rating(), None);
        assert_eq!(req.min_chemistry(), Some(20));
        assert_eq!(req.players_needed(), 1);
    }

    #[test]
    fn test_search_quality_prefers_cheapest_tier() {
        let req = Requirements {
            min_gold_players: Some(2),
            min_silver_players: Some(1),
            ..Default::default()
        };
        assert_eq!(req.search_quality(), Some(Quality::Silver));

        let req = Requirements {
            min_gold_players: Some(1),
            ..Default::default()
        };
        assert_eq!(req.search_quality(), Some(Quality::Gold));
    }

    #[test]
    fn test_slots_to_fill_respects_number_of_players() {
        use Position::*;
        let positions = [GK, LB, CB, CB, RB, CDM, LM, CAM, RM, LW, ST];
        let mut squad = Squad::empty("4-3-3", positions);
        squad.place(0, Player::new("gk", 60, GK)).unwrap();

        let req = Requirements {
            number_of_players: Some(3),
            ..Default::default()
        };
        assert_eq!(req.slots_to_fill(&squad), vec![1, 2, 3]);
        assert_eq!(Requirements::default().slots_to_fill(&squad).len(), 10);
    }
}
