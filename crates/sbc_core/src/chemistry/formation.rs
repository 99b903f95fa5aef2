//! Formation adjacency graphs
//!
//! Which squad slots link to which is pure data: a formation is an id, the
//! eleven required positions in slot order, and an adjacency list. New
//! formations are added to the rule book file, never to the engine.
//!
//! Tables are checked for symmetry when loaded. Undirected formations (the
//! default) get any missing reverse edge added and a warning logged. A
//! formation marked `directed: true` is kept exactly as written; its one-way
//! edges are still recorded and reported.

use crate::error::{Result, SbcError};
use crate::models::{Position, Squad, SQUAD_SIZE};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

static NO_NEIGHBOURS: BTreeSet<usize> = BTreeSet::new();

/// Formation as written in a rule book file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormationSpec {
    pub positions: Vec<Position>,
    pub adjacency: BTreeMap<usize, Vec<usize>>,
    #[serde(default)]
    pub directed: bool,
}

/// One-way edge found while loading a formation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AsymmetricEdge {
    pub formation: String,
    pub from: usize,
    pub to: usize,
    /// The reverse edge was added at load time.
    pub corrected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormationGraph {
    id: String,
    positions: [Position; SQUAD_SIZE],
    adjacency: Vec<BTreeSet<usize>>,
    directed: bool,
    asymmetries: Vec<AsymmetricEdge>,
}

impl FormationGraph {
    pub fn from_spec(id: &str, spec: &FormationSpec) -> Result<Self> {
        let positions: [Position; SQUAD_SIZE] =
            spec.positions.clone().try_into().map_err(|p: Vec<Position>| {
                SbcError::InvalidRuleBook(format!(
                    "formation {id}: expected {SQUAD_SIZE} positions, found {}",
                    p.len()
                ))
            })?;

        let mut adjacency = vec![BTreeSet::new(); SQUAD_SIZE];
        for (&slot, neighbours) in &spec.adjacency {
            for &other in neighbours {
                if slot >= SQUAD_SIZE || other >= SQUAD_SIZE {
                    return Err(SbcError::InvalidRuleBook(format!(
                        "formation {id}: edge {slot}->{other} leaves the 0..{SQUAD_SIZE} slot range"
                    )));
                }
                if slot == other {
                    return Err(SbcError::InvalidRuleBook(format!(
                        "formation {id}: slot {slot} is adjacent to itself"
                    )));
                }
                adjacency[slot].insert(other);
            }
        }

        let one_way: Vec<(usize, usize)> = adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, set)| set.iter().map(move |&to| (from, to)))
            .filter(|&(from, to)| !adjacency[to].contains(&from))
            .collect();

        let mut asymmetries = Vec::with_capacity(one_way.len());
        for (from, to) in one_way {
            if spec.directed {
                debug!(
                    formation = id,
                    from,
                    to,
                    "keeping one-way link in directed formation"
                );
            } else {
                warn!(
                    formation = id,
                    from,
                    to,
                    "one-way link in formation table, adding reverse"
                );
                adjacency[to].insert(from);
            }
            asymmetries.push(AsymmetricEdge {
                formation: id.to_string(),
                from,
                to,
                corrected: !spec.directed,
            });
        }

        Ok(Self {
            id: id.to_string(),
            positions,
            adjacency,
            directed: spec.directed,
            asymmetries,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn positions(&self) -> &[Position; SQUAD_SIZE] {
        &self.positions
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Slots linked to `slot`; empty for an index outside the squad.
    pub fn adjacent(&self, slot: usize) -> &BTreeSet<usize> {
        self.adjacency.get(slot).unwrap_or(&NO_NEIGHBOURS)
    }

    pub fn is_symmetric(&self) -> bool {
        self.adjacency
            .iter()
            .enumerate()
            .all(|(from, set)| set.iter().all(|&to| self.adjacency[to].contains(&from)))
    }

    pub fn asymmetries(&self) -> &[AsymmetricEdge] {
        &self.asymmetries
    }

    pub fn blank_squad(&self) -> Squad {
        Squad::empty(self.id.clone(), self.positions)
    }
}

/// Every formation a rule book knows about, keyed by id ("4-3-3").
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormationLibrary {
    graphs: BTreeMap<String, FormationGraph>,
}

impl FormationLibrary {
    pub fn from_specs(specs: &BTreeMap<String, FormationSpec>) -> Result<Self> {
        let graphs = specs
            .iter()
            .map(|(id, spec)| FormationGraph::from_spec(id, spec).map(|g| (id.clone(), g)))
            .collect::<Result<BTreeMap<_, _>>>()?;
        Ok(Self { graphs })
    }

    pub fn insert(&mut self, graph: FormationGraph) {
        self.graphs.insert(graph.id.clone(), graph);
    }

    pub fn get(&self, formation_id: &str) -> Option<&FormationGraph> {
        self.graphs.get(formation_id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.graphs.keys().map(String::as_str)
    }

    /// Unknown formation or slot yields no neighbours rather than an error.
    pub fn adjacent(&self, formation_id: &str, slot: usize) -> &BTreeSet<usize> {
        match self.graphs.get(formation_id) {
            Some(graph) => graph.adjacent(slot),
            None => &NO_NEIGHBOURS,
        }
    }

    pub fn blank_squad(&self, formation_id: &str) -> Option<Squad> {
        self.get(formation_id).map(FormationGraph::blank_squad)
    }

    pub fn asymmetries(&self) -> impl Iterator<Item = &AsymmetricEdge> {
        self.graphs.values().flat_map(|g| g.asymmetries.iter())
    }
}
