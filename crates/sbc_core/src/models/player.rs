use crate::error::SbcError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Highest rating a card can carry.
pub const MAX_RATING: u8 = 99;

/// Card as scraped from the club or search results.
///
/// The engine only ever reads players. `club`, `nation` and `league` are opaque
/// identifiers and may be missing when the collaborator could not resolve them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub rating: u8,
    pub position: Position,
    #[serde(default)]
    pub club: Option<String>,
    #[serde(default)]
    pub nation: Option<String>,
    #[serde(default)]
    pub league: Option<String>,
    pub quality: Quality,
    #[serde(default)]
    pub rarity: Rarity,
}

impl Player {
    /// Common card with quality derived from the rating band.
    pub fn new(id: impl Into<String>, rating: u8, position: Position) -> Self {
        Self {
            id: id.into(),
            rating,
            position,
            club: None,
            nation: None,
            league: None,
            quality: Quality::from_rating(rating),
            rarity: Rarity::Common,
        }
    }

    pub fn with_club(mut self, club: impl Into<String>) -> Self {
        self.club = Some(club.into());
        self
    }

    pub fn with_nation(mut self, nation: impl Into<String>) -> Self {
        self.nation = Some(nation.into());
        self
    }

    pub fn with_league(mut self, league: impl Into<String>) -> Self {
        self.league = Some(league.into());
        self
    }

    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn with_quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    pub fn validate(&self) -> Result<(), SbcError> {
        if self.rating > MAX_RATING {
            return Err(SbcError::InvalidRating(self.rating));
        }
        Ok(())
    }
}

/// Card tier derived from rating.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Bronze,
    Silver,
    Gold,
}

impl Quality {
    /// Rating bands used by the game: bronze below 65, silver 65-74, gold 75+.
    pub fn from_rating(rating: u8) -> Self {
        match rating {
            0..=64 => Quality::Bronze,
            65..=74 => Quality::Silver,
            _ => Quality::Gold,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quality::Bronze => "bronze",
            Quality::Silver => "silver",
            Quality::Gold => "gold",
        }
    }
}

/// Card category, independent of quality.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Special,
}

impl Rarity {
    /// Special cards count towards "rare" requirements.
    pub fn is_rare(&self) -> bool {
        matches!(self, Rarity::Rare | Rarity::Special)
    }
}

/// Position code. Serialized as its upper-case abbreviation; parsed
/// case-insensitively from strings, JSON and YAML alike.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE", try_from = "String", into = "String")]
pub enum Position {
    GK,
    LB,
    LWB,
    CB,
    RB,
    RWB,
    LM,
    CDM,
    CM,
    CAM,
    RM,
    LW,
    CF,
    ST,
    RW,
    LF,
    RF,
}

impl Position {
    pub const ALL: [Position; 17] = [
        Position::GK,
        Position::LB,
        Position::LWB,
        Position::CB,
        Position::RB,
        Position::RWB,
        Position::LM,
        Position::CDM,
        Position::CM,
        Position::CAM,
        Position::RM,
        Position::LW,
        Position::CF,
        Position::ST,
        Position::RW,
        Position::LF,
        Position::RF,
    ];

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::GK)
    }

    pub fn is_defender(&self) -> bool {
        matches!(
            self,
            Position::LB | Position::LWB | Position::CB | Position::RB | Position::RWB
        )
    }

    pub fn is_midfielder(&self) -> bool {
        matches!(
            self,
            Position::LM | Position::CDM | Position::CM | Position::CAM | Position::RM
        )
    }

    pub fn is_forward(&self) -> bool {
        matches!(
            self,
            Position::LW | Position::CF | Position::ST | Position::RW | Position::LF | Position::RF
        )
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            Position::GK => "GK",
            Position::LB => "LB",
            Position::LWB => "LWB",
            Position::CB => "CB",
            Position::RB => "RB",
            Position::RWB => "RWB",
            Position::LM => "LM",
            Position::CDM => "CDM",
            Position::CM => "CM",
            Position::CAM => "CAM",
            Position::RM => "RM",
            Position::LW => "LW",
            Position::CF => "CF",
            Position::ST => "ST",
            Position::RW => "RW",
            Position::LF => "LF",
            Position::RF => "RF",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for Position {
    type Err = SbcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Position::ALL
            .iter()
            .copied()
            .find(|p| p.abbreviation() == code)
            .ok_or_else(|| SbcError::InvalidPosition(s.to_string()))
    }
}

impl TryFrom<String> for Position {
    type Error = SbcError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        position.abbreviation().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_parse_is_case_insensitive() {
        assert_eq!("cdm".parse::<Position>().unwrap(), Position::CDM);
        assert_eq!(" RF ".parse::<Position>().unwrap(), Position::RF);
    }

    #[test]
    fn test_unknown_position_is_rejected() {
        let err = "SW".parse::<Position>().unwrap_err();
        assert!(matches!(err, SbcError::InvalidPosition(ref code) if code == "SW"));
    }

    #[test]
    fn test_every_position_round_trips_through_its_code() {
        for pos in Position::ALL {
            assert_eq!(pos.to_string().parse::<Position>().unwrap(), pos);
        }
    }

    #[test]
    fn test_lines_partition_positions() {
        for pos in Position::ALL {
            let lines = [
                pos.is_goalkeeper(),
                pos.is_defender(),
                pos.is_midfielder(),
                pos.is_forward(),
            ];
            let on = lines.iter().filter(|&&b| b).count();
            assert_eq!(on, 1, "{pos} must sit on one line");
        }
    }

    #[test]
    fn test_quality_bands() {
        assert_eq!(Quality::from_rating(0), Quality::Bronze);
        assert_eq!(Quality::from_rating(64), Quality::Bronze);
        assert_eq!(Quality::from_rating(65), Quality::Silver);
        assert_eq!(Quality::from_rating(74), Quality::Silver);
        assert_eq!(Quality::from_rating(75), Quality::Gold);
        assert_eq!(Quality::from_rating(99), Quality::Gold);
    }

    #[test]
    fn test_special_counts_as_rare() {
        assert!(!Rarity::Common.is_rare());
        assert!(Rarity::Rare.is_rare());
        assert!(Rarity::Special.is_rare());
    }

    #[test]
    fn test_player_deserializes_with_missing_links() {
        let json = r#"{"id":"p1","rating":70,"position":"ST","quality":"silver"}"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.club, None);
        assert_eq!(player.rarity, Rarity::Common);
    }

    #[test]
    fn test_player_json_position_is_case_insensitive() {
        let json = r#"{"id":"p1","rating":70,"position":"cm","quality":"silver"}"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.position, Position::CM);
        let out = serde_json::to_string(&player).unwrap();
        assert!(out.contains(r#""position":"CM""#));

        let json = r#"{"id":"p1","rating":70,"position":"SW","quality":"silver"}"#;
        let err = serde_json::from_str::<Player>(json).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Invalid player position: SW"), "{message}");
    }

    #[test]
    fn test_with_quality_overrides_rating_band() {
        let player = Player::new("p", 70, Position::ST);
        assert_eq!(player.quality, Quality::Silver);
        assert_eq!(player.with_quality(Quality::Gold).quality, Quality::Gold);
    }

    #[test]
    fn test_rating_above_99_is_invalid() {
        let result = Player::new("p", 100, Position::ST).validate();
        assert!(matches!(result, Err(SbcError::InvalidRating(100))));
        assert!(Player::new("p", 99, Position::ST).validate().is_ok());
    }
}
