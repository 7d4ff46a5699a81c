use std::path::Path;

use log::{debug, trace};
use rust_decimal::Decimal;
use rustc_hash::FxHashMap as HashMap;

use crate::{
    error::HuntError,
    game::{Chest, Hunt},
    save,
    value::HuntValue,
};

pub mod parallel;

/// Expected-value solver over chest hunts.
///
/// Solved hunts are kept for the solver's whole lifetime, so one solver shared
/// across many starting hunts reuses every subtree they have in common.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    solved: HashMap<Hunt, HuntValue>,
    transitions: u64,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a solver cache written by [`Solver::save`]. A missing file gives an
    /// empty solver, and an empty cache is written there straight away so an
    /// unwritable path fails before any solving.
    pub fn load(path: &Path) -> Result<Self, HuntError> {
        let solver = Self {
            solved: save::read_or_create(path, HashMap::default)?,
            transitions: 0,
        };
        debug!("loaded {} solved hunts from {}", solver.len(), path.display());
        Ok(solver)
    }

    pub fn save(&self, path: &Path) -> Result<(), HuntError> {
        debug!("saving {} solved hunts to {}", self.len(), path.display());
        save::write(path, &self.solved)
    }

    /// Copy of the cache with its own transition count, for a worker thread.
    pub fn fork(&self) -> Self {
        Self {
            solved: self.solved.clone(),
            transitions: 0,
        }
    }

    /// Takes in every hunt `other` has solved.
    pub fn merge(&mut self, other: Solver) {
        self.solved.extend(other.solved);
        self.transitions += other.transitions;
    }

    pub fn len(&self) -> usize {
        self.solved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solved.is_empty()
    }

    /// Number of hunt transitions made so far.
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    pub fn get(&self, hunt: &Hunt) -> Option<HuntValue> {
        self.solved.get(hunt).copied()
    }

    pub fn is_stop(&self, hunt: &Hunt) -> bool {
        self.solved.contains_key(hunt) || hunt.is_terminal()
    }

    /// Value of a hunt that is not expanded any further.
    pub fn stop_value(&self, hunt: &Hunt) -> HuntValue {
        self.get(hunt).unwrap_or_else(|| base_value(hunt))
    }

    pub fn solve(&mut self, hunt: Hunt) -> HuntValue {
        if self.is_stop(&hunt) {
            return self.stop_value(&hunt);
        }
        let value = self.expand(&hunt);
        self.solved.insert(hunt, value);
        value
    }

    fn branch(&mut self, hunt: &Hunt, chest: Chest) -> HuntValue {
        self.transitions += 1;
        trace!("opening {} from {:?}", chest.name(), hunt);
        let next = hunt.next(chest);
        self.solve(next)
    }

    fn expand(&mut self, hunt: &Hunt) -> HuntValue {
        let mut value = base_value(hunt);
        for chest in Chest::iter_all() {
            match chest {
                Chest::Saver if hunt.savers > 0 => {
                    if !hunt.skip_priority {
                        value += hunt.chance(chest) * self.branch(hunt, chest);
                    } else if hunt.opens_saver_first() {
                        // the saver is opened for certain, nothing else is drawn
                        return self.branch(hunt, chest);
                    }
                }
                Chest::Doubler if hunt.doublers > 0 => {
                    value += hunt.chance(chest) * self.branch(hunt, chest);
                }
                Chest::Mimic if hunt.mimics > 0 && hunt.can_survive_mimic() => {
                    value += hunt.chance(chest) * self.branch(hunt, chest);
                }
                Chest::Loot => {
                    let chance = hunt.chance(chest);
                    let armory = hunt.armory_rate();
                    let reward = HuntValue::new(Decimal::ONE - armory, Decimal::ZERO, armory);
                    value += chance * hunt.loot_gain() * reward;
                    value += chance * self.branch(hunt, chest);
                }
                _ => {}
            }
        }
        value
    }
}

/// A stopped hunt is worth nothing besides whether it ended perfect.
pub fn base_value(hunt: &Hunt) -> HuntValue {
    HuntValue::perfect_only(hunt.ends_perfect())
}
