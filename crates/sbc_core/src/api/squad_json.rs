//! JSON API for squad evaluation
//!
//! Entry point for the page-automation layer: it sends the squad it sees on
//! screen (and the requirements it scraped) as JSON and gets back the
//! chemistry breakdown, the validation result, and which slots to fill next.

use crate::chemistry::{ChemistryEngine, ChemistryReport};
use crate::data::{default_rulebook, RuleBook};
use crate::error::{Result, SbcError};
use crate::models::{FormationSlot, Player, Position, Quality, Rarity, Requirements, Squad};
use crate::validation::{RequirementValidator, ValidationResult};
use crate::SCHEMA_VERSION;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Request envelope. Field names are camelCase throughout, matching the
/// player and requirement records nested inside it.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SquadRequest {
    pub schema_version: u8,
    /// Formation id, e.g. "4-3-3".
    pub formation: String,
    /// Exactly 11 slots in squad order.
    pub slots: Vec<SlotData>,
    #[serde(default)]
    pub requirements: Option<Requirements>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SlotData {
    /// Position code the slot requires.
    pub position: String,
    #[serde(default)]
    pub player: Option<PlayerData>,
}

/// Player record as the collaborator emits it.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerData {
    pub id: String,
    pub rating: u8,
    pub position: String,
    #[serde(default)]
    pub club: Option<String>,
    #[serde(default)]
    pub nation: Option<String>,
    #[serde(default)]
    pub league: Option<String>,
    /// Derived from the rating when missing.
    #[serde(default)]
    pub quality: Option<Quality>,
    #[serde(default)]
    pub rarity: Option<Rarity>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SquadResponse {
    pub schema_version: u8,
    pub report: ChemistryReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationResult>,
    /// Empty slots still to fill, capped at the requested number of players.
    pub slots_to_fill: Vec<usize>,
    /// Quality filter to search with, if the requirements ask for one.
    pub search_quality: Option<Quality>,
}

impl TryFrom<PlayerData> for Player {
    type Error = SbcError;

    fn try_from(data: PlayerData) -> Result<Self> {
        let position: Position = data.position.parse()?;
        let player = Player {
            quality: data.quality.unwrap_or_else(|| Quality::from_rating(data.rating)),
            rarity: data.rarity.unwrap_or_default(),
            id: data.id,
            rating: data.rating,
            position,
            club: data.club,
            nation: data.nation,
            league: data.league,
        };
        player.validate()?;
        Ok(player)
    }
}

impl SquadRequest {
    pub fn into_squad(self) -> Result<(Squad, Option<Requirements>)> {
        let slots = self
            .slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                Ok(FormationSlot {
                    index,
                    required_position: slot.position.parse()?,
                    occupant: slot.player.map(Player::try_from).transpose()?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok((Squad::new(self.formation, slots)?, self.requirements))
    }
}

pub fn evaluate_squad(rules: &RuleBook, request: SquadRequest) -> Result<SquadResponse> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(SbcError::UnsupportedSchema {
            found: request.schema_version,
            expected: SCHEMA_VERSION,
        });
    }

    let (squad, requirements) = request.into_squad()?;
    let engine = ChemistryEngine::new(rules);
    if rules.formations().get(squad.formation_id()).is_none() {
        warn!(
            formation = squad.formation_id(),
            "unknown formation, links will not count"
        );
    }

    let report = engine.squad_report(&squad);
    let validator = RequirementValidator::new(engine);
    let validation = requirements
        .as_ref()
        .map(|req| validator.validate(&squad, req));
    let requirements = requirements.unwrap_or_default();

    debug!(
        chemistry = report.team_chemistry,
        rating = report.team_rating,
        valid = ?validation.as_ref().map(|v| v.valid),
        "squad evaluated"
    );

    Ok(SquadResponse {
        schema_version: SCHEMA_VERSION,
        slots_to_fill: requirements.slots_to_fill(&squad),
        search_quality: requirements.search_quality(),
        report,
        validation,
    })
}

/// Evaluate a JSON request against `rules`, returning the JSON response.
pub fn evaluate_squad_json_with(rules: &RuleBook, request_json: &str) -> Result<String> {
    let request: SquadRequest = serde_json::from_str(request_json)?;
    let response = evaluate_squad(rules, request)?;
    Ok(serde_json::to_string(&response)?)
}

/// Evaluate a JSON request against the default FC 26 rule book.
pub fn evaluate_squad_json(request_json: &str) -> Result<String> {
    evaluate_squad_json_with(default_rulebook(), request_json)
}

/// JSON Schema of [`SquadRequest`], for collaborators building requests.
pub fn request_schema() -> Result<String> {
    let schema = schemars::schema_for!(SquadRequest);
    Ok(serde_json::to_string_pretty(&schema)?)
}
