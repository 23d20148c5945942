//! The single flat progress record owned by a session.
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    LOSE_BANDWIDTH_FLOOR, LOSE_DEAD_KITTENS, LOSE_REPUTATION_FLOOR, START_BANDWIDTH, START_IDEAS,
    START_INFLUENCE, START_REPUTATION, WIN_ENTITIES_HELPED, WIN_ENTITIES_REPUTATION,
    WIN_SINGULARITY_PROGRESS, WIN_SINGULARITY_REPUTATION,
};
use crate::data::Effects;

/// A save record that is missing a field, carries an unknown one, or holds a
/// value of the wrong primitive kind.
#[derive(Debug, Error)]
#[error("malformed save record: {0}")]
pub struct MalformedSave(#[from] serde_json::Error);

/// All progress counters for one game.
///
/// No counter is clamped. Spend branches check sufficiency before paying, but
/// passive drift and forced penalties may push any value negative or past 100.
/// Arithmetic saturates at the `i32` bounds, so a record loaded near a bound
/// stays pinned there instead of wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GameState {
    pub reputation: i32,
    pub ideas: i32,
    pub bandwidth: i32,
    pub influence: i32,
    pub turn: i32,
    pub dead_kittens: i32,
    pub entities_helped: i32,
    pub patents_released: i32,
    pub singularity_progress: i32,
    pub pamela_relationship: i32,
    pub game_over: bool,
    pub victory: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            reputation: START_REPUTATION,
            ideas: START_IDEAS,
            bandwidth: START_BANDWIDTH,
            influence: START_INFLUENCE,
            turn: 0,
            dead_kittens: 0,
            entities_helped: 0,
            patents_released: 0,
            singularity_progress: 0,
            pamela_relationship: 0,
            game_over: false,
            victory: false,
        }
    }
}

impl GameState {
    /// Apply a branch's resource delta in place.
    pub fn apply(&mut self, effects: &Effects) {
        if effects.reset_pamela {
            self.pamela_relationship = 0;
        }
        self.reputation = self.reputation.saturating_add(effects.reputation);
        self.ideas = self.ideas.saturating_add(effects.ideas);
        self.bandwidth = self.bandwidth.saturating_add(effects.bandwidth);
        self.influence = self.influence.saturating_add(effects.influence);
        self.dead_kittens = self.dead_kittens.saturating_add(effects.dead_kittens);
        self.entities_helped = self.entities_helped.saturating_add(effects.entities_helped);
        self.patents_released = self.patents_released.saturating_add(effects.patents_released);
        self.singularity_progress = self
            .singularity_progress
            .saturating_add(effects.singularity_progress);
        self.pamela_relationship = self
            .pamela_relationship
            .saturating_add(effects.pamela_relationship);
    }

    /// Singularity route or the many-entities route, each gated on reputation.
    #[must_use]
    pub const fn is_victory(&self) -> bool {
        (self.singularity_progress >= WIN_SINGULARITY_PROGRESS
            && self.reputation >= WIN_SINGULARITY_REPUTATION)
            || (self.entities_helped >= WIN_ENTITIES_HELPED
                && self.reputation >= WIN_ENTITIES_REPUTATION)
    }

    #[must_use]
    pub const fn is_defeat(&self) -> bool {
        self.reputation <= LOSE_REPUTATION_FLOOR
            || self.dead_kittens >= LOSE_DEAD_KITTENS
            || self.bandwidth <= LOSE_BANDWIDTH_FLOOR
    }

    /// Field-name to value record suitable for exact round-trip storage.
    ///
    /// # Errors
    ///
    /// Returns an error only if serde cannot represent the record, which does
    /// not happen for plain integers and booleans.
    pub fn to_record(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Rebuild a state from a record with exactly the twelve fields.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedSave`] when a field is missing, unknown, or of the
    /// wrong primitive kind.
    pub fn from_record(record: serde_json::Value) -> Result<Self, MalformedSave> {
        Ok(serde_json::from_value(record)?)
    }
}
