//! Centralized balance and tuning constants for Accelerando game logic.
//!
//! Starting values, victory/defeat thresholds and passive drift ranges all live
//! here so balance can only change through reviewed code, never through the
//! save file.

// Save file ----------------------------------------------------------------
pub const DEFAULT_SAVE_PATH: &str = "accelerando_save.json";

// Starting values ------------------------------------------------------------
pub(crate) const START_REPUTATION: i32 = 50;
pub(crate) const START_IDEAS: i32 = 10;
pub(crate) const START_BANDWIDTH: i32 = 100;
pub(crate) const START_INFLUENCE: i32 = 20;

// Victory ------------------------------------------------------------------
pub(crate) const WIN_SINGULARITY_PROGRESS: i32 = 100;
pub(crate) const WIN_SINGULARITY_REPUTATION: i32 = 50;
pub(crate) const WIN_ENTITIES_HELPED: i32 = 10;
pub(crate) const WIN_ENTITIES_REPUTATION: i32 = 75;

// Defeat -------------------------------------------------------------------
pub(crate) const LOSE_REPUTATION_FLOOR: i32 = 0;
pub(crate) const LOSE_BANDWIDTH_FLOOR: i32 = 0;
pub(crate) const LOSE_DEAD_KITTENS: i32 = 10;

// Passive drift (inclusive ranges) -------------------------------------------
pub(crate) const DRIFT_IDEAS: (i32, i32) = (1, 3);
pub(crate) const DRIFT_BANDWIDTH: (i32, i32) = (5, 10);
pub(crate) const DRIFT_INFLUENCE: (i32, i32) = (1, 2);
pub(crate) const DRIFT_SINGULARITY: (i32, i32) = (1, 3);

// Outcome rolls --------------------------------------------------------------
pub(crate) const ROLL_MIN: i32 = 1;
pub(crate) const ROLL_MAX: i32 = 100;
