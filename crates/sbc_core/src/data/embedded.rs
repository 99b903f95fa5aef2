//! Embedded rule data
//!
//! The default rule book is compiled into the binary with `include_str!` and
//! parsed on first use, so the engine needs no file I/O.

use super::rulebook::RuleBook;
use std::sync::OnceLock;

/// FC 26 chemistry rules (config, compatibility table, formations).
pub const FC26_RULES_YAML: &str = include_str!("../../data/fc26_rules.yaml");

static DEFAULT_RULEBOOK: OnceLock<RuleBook> = OnceLock::new();

/// Rule book used when the caller does not supply one.
///
/// Parsed on first call, cached afterwards.
pub fn default_rulebook() -> &'static RuleBook {
    DEFAULT_RULEBOOK.get_or_init(|| {
        RuleBook::from_yaml_str(FC26_RULES_YAML).expect("Embedded FC26 rule book is corrupted")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;

    #[test]
    fn test_default_rulebook_loaded() {
        let book = default_rulebook();
        assert_eq!(book.edition(), "fc26");
        assert_eq!(book.config().max_team_chemistry, 33);
        let ids: Vec<_> = book.formations().ids().collect();
        assert_eq!(ids, ["4-2-3-1", "4-3-3", "4-4-2"]);
        assert!(book.asymmetry_report().formation_edges.is_empty());
    }

    #[test]
    fn test_every_position_has_a_compatibility_entry() {
        let table = default_rulebook().compatibility();
        for pos in Position::ALL {
            assert!(
                table.accepted_by(pos).any(|p| p == pos),
                "{pos} missing from table"
            );
        }
    }
}
