use super::violation::{GroupKind, ValidationResult, Violation};
use crate::chemistry::{team_rating, ChemistryEngine};
use crate::models::{Player, Quality, Requirements, Squad};
use std::collections::BTreeMap;
use tracing::debug;

/// Checks squads against scraped challenge requirements.
///
/// Checks run in a fixed order and never short-circuit, so one call reports
/// every violation:
/// 1. minimum team rating
/// 2. minimum team chemistry (in the challenge's formation, 4-3-3 if unset)
/// 3. max players from one league
/// 4. max players from one club
/// 5. max players from one nation
/// 6. minimum gold, silver, bronze players (in that order)
/// 7. minimum rare players
#[derive(Debug, Clone, Copy)]
pub struct RequirementValidator<'r> {
    engine: ChemistryEngine<'r>,
}

impl Default for RequirementValidator<'static> {
    fn default() -> Self {
        Self::new(ChemistryEngine::default())
    }
}

impl<'r> RequirementValidator<'r> {
    pub fn new(engine: ChemistryEngine<'r>) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &ChemistryEngine<'r> {
        &self.engine
    }

    pub fn validate(&self, squad: &Squad, requirements: &Requirements) -> ValidationResult {
        let mut result = ValidationResult::default();

        if let Some(minimum) = requirements.min_rating() {
            let rating = team_rating(squad);
            if rating < minimum {
                result.push(Violation::RatingBelowMinimum { rating, minimum });
            }
        }

        if let Some(minimum) = requirements.min_chemistry() {
            let formation = requirements.formation_or_default();
            let chemistry = self.engine.team_chemistry_for(squad, formation);
            if chemistry < u32::from(minimum) {
                result.push(Violation::ChemistryBelowMinimum { chemistry, minimum });
            }
        }

        let caps = [
            (GroupKind::League, requirements.max_same_league()),
            (GroupKind::Club, requirements.max_same_club()),
            (GroupKind::Nation, requirements.max_same_nation()),
        ];
        for (group, cap) in caps {
            let Some(max) = cap else { continue };
            if let Some((name, count)) = largest_group(squad, group) {
                if count > usize::from(max) {
                    result.push(Violation::TooManyFromSameGroup {
                        group,
                        name,
                        count,
                        max,
                    });
                }
            }
        }

        for quality in [Quality::Gold, Quality::Silver, Quality::Bronze] {
            let Some(minimum) = requirements.min_quality(quality) else {
                continue;
            };
            let count = squad.occupants().filter(|p| p.quality == quality).count();
            if count < usize::from(minimum) {
                result.push(Violation::NotEnoughQuality {
                    quality,
                    count,
                    minimum,
                });
            }
        }

        if let Some(minimum) = requirements.min_rare() {
            let count = squad.occupants().filter(|p| p.rarity.is_rare()).count();
            if count < usize::from(minimum) {
                result.push(Violation::NotEnoughRare { count, minimum });
            }
        }

        debug!(
            valid = result.valid,
            issues = result.issues.len(),
            "squad validated"
        );
        result
    }
}

fn group_key(player: &Player, group: GroupKind) -> Option<&str> {
    match group {
        GroupKind::League => player.league.as_deref(),
        GroupKind::Club => player.club.as_deref(),
        GroupKind::Nation => player.nation.as_deref(),
    }
}

/// Biggest group of occupants sharing `group`, ignoring missing values.
/// Ties go to the alphabetically first name.
fn largest_group(squad: &Squad, group: GroupKind) -> Option<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for key in squad.occupants().filter_map(|p| group_key(p, group)) {
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .max_by(|(name_a, count_a), (name_b, count_b)| {
            count_a.cmp(count_b).then_with(|| name_b.cmp(name_a))
        })
        .map(|(name, count)| (name.to_string(), count))
}

/// Validate with the default FC 26 rule book.
pub fn validate(squad: &Squad, requirements: &Requirements) -> ValidationResult {
    RequirementValidator::default().validate(squad, requirements)
}
