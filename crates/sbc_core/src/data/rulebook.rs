use crate::chemistry::{
    AsymmetricEdge, ChemistryConfig, CompatibilityTable, FormationLibrary, FormationSpec,
};
use crate::error::{Result, SbcError};
use crate::models::Position;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Rule book as stored on disk (YAML or JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleBookFile {
    pub edition: String,
    #[serde(default)]
    pub config: ChemistryConfig,
    #[serde(default)]
    pub compatibility: CompatibilityTable,
    #[serde(default)]
    pub formations: BTreeMap<String, FormationSpec>,
}

/// Just the position codes of a rule book file, read ahead of the full parse
/// so an unknown code surfaces as [`SbcError::InvalidPosition`].
#[derive(Debug, Default, Deserialize)]
struct PositionCodes {
    #[serde(default)]
    compatibility: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    formations: BTreeMap<String, FormationCodes>,
}

#[derive(Debug, Default, Deserialize)]
struct FormationCodes {
    #[serde(default)]
    positions: Vec<String>,
}

impl PositionCodes {
    fn check(&self) -> Result<()> {
        let compatibility = self
            .compatibility
            .iter()
            .flat_map(|(slot, accepted)| std::iter::once(slot).chain(accepted));
        let formations = self.formations.values().flat_map(|f| f.positions.iter());
        for code in compatibility.chain(formations) {
            code.parse::<Position>()?;
        }
        Ok(())
    }
}

/// Everything the chemistry engine needs for one game edition.
///
/// Built once, never mutated; engines borrow it. Substitute another value to
/// score squads under different rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleBook {
    edition: String,
    config: ChemistryConfig,
    compatibility: CompatibilityTable,
    formations: FormationLibrary,
}

/// One-way entries found in a rule book's tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AsymmetryReport {
    pub formation_edges: Vec<AsymmetricEdge>,
    /// `(slot, player)` position pairs accepted in one direction only.
    pub compatibility_pairs: Vec<(Position, Position)>,
}

impl RuleBook {
    pub fn new(
        edition: impl Into<String>,
        config: ChemistryConfig,
        compatibility: CompatibilityTable,
        formations: FormationLibrary,
    ) -> Result<Self> {
        config.validate().map_err(SbcError::InvalidRuleBook)?;
        Ok(Self {
            edition: edition.into(),
            config,
            compatibility,
            formations,
        })
    }

    pub fn from_file(file: RuleBookFile) -> Result<Self> {
        let formations = FormationLibrary::from_specs(&file.formations)?;
        let book = Self::new(file.edition, file.config, file.compatibility, formations)?;

        let report = book.asymmetry_report();
        debug!(
            edition = %book.edition,
            one_way_positions = report.compatibility_pairs.len(),
            "compatibility table is keyed by slot and not expected to be symmetric"
        );
        info!(
            edition = %book.edition,
            formations = book.formations.ids().count(),
            one_way_links = report.formation_edges.len(),
            "rule book loaded"
        );
        Ok(book)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // Structural problems are left to the full parse below.
        if let Ok(codes) = serde_yaml::from_str::<PositionCodes>(yaml) {
            codes.check()?;
        }
        Self::from_file(serde_yaml::from_str(yaml)?)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        if let Ok(codes) = serde_json::from_str::<PositionCodes>(json) {
            codes.check()?;
        }
        Self::from_file(serde_json::from_str(json)?)
    }

    /// Same tables, different scoring constants.
    pub fn with_config(mut self, config: ChemistryConfig) -> Result<Self> {
        config.validate().map_err(SbcError::InvalidRuleBook)?;
        self.config = config;
        Ok(self)
    }

    pub fn edition(&self) -> &str {
        &self.edition
    }

    pub fn config(&self) -> &ChemistryConfig {
        &self.config
    }

    pub fn compatibility(&self) -> &CompatibilityTable {
        &self.compatibility
    }

    pub fn formations(&self) -> &FormationLibrary {
        &self.formations
    }

    pub fn asymmetry_report(&self) -> AsymmetryReport {
        AsymmetryReport {
            formation_edges: self.formations.asymmetries().cloned().collect(),
            compatibility_pairs: self.compatibility.asymmetric_pairs(),
        }
    }
}
