use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_SAVE_PATH, DRIFT_BANDWIDTH, DRIFT_IDEAS, DRIFT_INFLUENCE, DRIFT_SINGULARITY,
};
use crate::events::{self, EventKind, Outcome};
use crate::operator::{ChoiceKind, ChoiceRequest, Operator, OperatorInterrupt};
use crate::result::{Ending, evaluate_ending, result_summary};
use crate::rng::{RngBundle, Stream, TurnDice};
use crate::screens;
use crate::state::GameState;
use crate::storage::{GameStorage, JsonFileStorage, StorageError};

const MAIN_MENU: [&str; 3] = ["New Game", "Load Game", "Quit"];
const TURN_MENU: [&str; 3] = ["Continue to next turn", "Save game", "Quit"];
const SAVE_MENU: [&str; 2] = ["Continue playing", "Quit"];

/// Shown when the operator cancels mid-session, whether by closing input or
/// by a terminal interrupt.
pub const INTERRUPT_FAREWELL: &str = "\n\nGame interrupted. Goodbye!";

/// Where to save and how to seed a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub save_path: PathBuf,
    /// Fixed seed for reproducible runs; drawn from entropy when absent.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            seed: None,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

/// What happened during one call to [`GameSession::run_turn`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub turn: i32,
    pub event: EventKind,
    pub choice: u8,
    pub outcome: Outcome,
    pub ending: Option<Ending>,
    /// The operator chose to stop after this turn.
    pub quit: bool,
}

/// How a full [`GameSession::run`] finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub ending: Option<Ending>,
    pub turns: i32,
    pub quit: bool,
}

/// Owns the one live game state, its randomness and its save slot.
pub struct GameSession {
    state: GameState,
    storage: Box<dyn GameStorage>,
    dice: Box<dyn TurnDice>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("storage", &self.storage.describe())
            .field("draws", &self.dice.draws())
            .finish()
    }
}

impl GameSession {
    /// Session saving to the configured JSON file with seeded streams.
    #[must_use]
    pub fn new(config: &SessionConfig) -> Self {
        let seed = config.resolve_seed();
        log::info!(
            "Session seed {seed} (save path {})",
            config.save_path.display()
        );
        Self::with_parts(
            JsonFileStorage::new(config.save_path.clone()),
            RngBundle::from_user_seed(seed),
        )
    }

    /// Session with an explicit storage backend and roll source.
    #[must_use]
    pub fn with_parts(
        storage: impl GameStorage + 'static,
        dice: impl TurnDice + 'static,
    ) -> Self {
        Self {
            state: GameState::default(),
            storage: Box::new(storage),
            dice: Box::new(dice),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    pub const fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Replace the state with a fresh one.
    pub fn new_game(&mut self) {
        self.state = GameState::default();
        log::info!("New game started");
    }

    /// Replace the state with the saved one. On failure the current state is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// Returns the storage error when no save exists or it is malformed.
    pub fn load_game(&mut self) -> Result<(), StorageError> {
        self.state = self.storage.load_game()?;
        Ok(())
    }

    /// Persist the current state without changing it.
    ///
    /// # Errors
    ///
    /// Returns the storage error when the save cannot be written.
    pub fn save_game(&self) -> Result<(), StorageError> {
        self.storage.save_game(&self.state)
    }

    fn apply_drift(&mut self, gs: &mut GameState) {
        let drift = self.dice.stream(Stream::Drift);
        let ideas = drift.roll(DRIFT_IDEAS.0, DRIFT_IDEAS.1);
        let bandwidth = drift.roll(DRIFT_BANDWIDTH.0, DRIFT_BANDWIDTH.1);
        let influence = drift.roll(DRIFT_INFLUENCE.0, DRIFT_INFLUENCE.1);
        let singularity = drift.roll(DRIFT_SINGULARITY.0, DRIFT_SINGULARITY.1);
        gs.ideas = gs.ideas.saturating_add(ideas);
        gs.bandwidth = gs.bandwidth.saturating_add(bandwidth);
        gs.influence = gs.influence.saturating_add(influence);
        gs.singularity_progress = gs.singularity_progress.saturating_add(singularity);
        log::debug!(
            "Turn {} drift | ideas +{ideas} bandwidth +{bandwidth} influence +{influence} singularity +{singularity}",
            gs.turn
        );
    }

    /// Play one turn: drift, one vignette, the ending check, then the
    /// continue/save/quit menu.
    ///
    /// The turn is worked out on a copy and committed once the vignette has
    /// resolved, so an interrupt before then leaves the state as it was.
    ///
    /// # Errors
    ///
    /// Returns [`OperatorInterrupt`] when the operator cancels at any prompt.
    pub fn run_turn(&mut self, op: &mut dyn Operator) -> Result<TurnReport, OperatorInterrupt> {
        let mut working = self.state.clone();
        working.turn = working.turn.saturating_add(1);
        self.apply_drift(&mut working);
        op.show(&screens::stats_panel(&working));

        let kind = EventKind::ALL[self.dice.stream(Stream::Event).pick(EventKind::ALL.len())];
        log::debug!("Turn {} event {}", working.turn, kind.key());
        op.show(&screens::event_panel(kind, &working));
        let card = kind.card();
        let choice = op.choose(&ChoiceRequest {
            kind: ChoiceKind::Event(kind),
            options: &card.options,
            state: &working,
        })?;
        let outcome = events::play(kind, &mut working, choice, self.dice.stream(Stream::Outcome));
        op.show(&format!("\n{} {}", outcome.tone.marker(), outcome.message));

        let ending = evaluate_ending(&working);
        if let Some(ending) = ending {
            working.game_over = true;
            working.victory = ending.is_victory();
            log::info!("Game over at turn {}: {ending}", working.turn);
            op.show(&screens::summary_panel(&result_summary(&working, ending)));
        }
        self.state = working;

        let mut report = TurnReport {
            turn: self.state.turn,
            event: kind,
            choice,
            outcome,
            ending,
            quit: false,
        };
        if ending.is_none() {
            report.quit = self.end_of_turn(op)?;
            if report.quit {
                self.state.game_over = true;
            }
        }
        log::debug!("Turn {} complete, {} draws so far", report.turn, self.dice.draws());
        Ok(report)
    }

    /// Returns true when the operator chose to quit.
    fn end_of_turn(&mut self, op: &mut dyn Operator) -> Result<bool, OperatorInterrupt> {
        op.show(&format!("\n{}", "=".repeat(70)));
        let choice = op.choose(&ChoiceRequest {
            kind: ChoiceKind::EndOfTurn,
            options: &TURN_MENU,
            state: &self.state,
        })?;
        match choice {
            1 => Ok(false),
            2 => {
                self.save_with_report(op);
                let again = op.choose(&ChoiceRequest {
                    kind: ChoiceKind::AfterSave,
                    options: &SAVE_MENU,
                    state: &self.state,
                })?;
                Ok(again == 2)
            }
            _ => Ok(true),
        }
    }

    fn save_with_report(&self, op: &mut dyn Operator) {
        match self.save_game() {
            Ok(()) => op.show(&format!(
                "\n💾 Game saved to {}",
                self.storage.describe()
            )),
            Err(err) => {
                log::warn!("Save failed: {err}");
                op.show(&format!("\n⚠ Could not save game: {err}"));
            }
        }
    }

    /// Title banner and new/load/quit menu. Returns false when the operator
    /// quits from the menu.
    ///
    /// A failed load falls back to a new game and says why.
    ///
    /// # Errors
    ///
    /// Returns [`OperatorInterrupt`] when the operator cancels at the menu.
    pub fn main_menu(&mut self, op: &mut dyn Operator) -> Result<bool, OperatorInterrupt> {
        op.show(&screens::title_banner());
        let choice = op.choose(&ChoiceRequest {
            kind: ChoiceKind::MainMenu,
            options: &MAIN_MENU,
            state: &self.state,
        })?;
        match choice {
            1 => {
                self.new_game();
                Ok(true)
            }
            2 => {
                match self.load_game() {
                    Ok(()) => op.show(&format!(
                        "\n💾 Game loaded from {}",
                        self.storage.describe()
                    )),
                    Err(StorageError::NotFound { .. }) => {
                        log::info!("No save file, starting new game");
                        op.show("\nNo save file found. Starting new game...");
                        self.new_game();
                    }
                    Err(err) => {
                        log::warn!("Load failed, falling back to new game: {err}");
                        op.show(&format!(
                            "\n⚠ Error loading save file: {err}\nStarting new game..."
                        ));
                        self.new_game();
                    }
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Full session: menu, intro, then turns until the game is over.
    ///
    /// # Errors
    ///
    /// Returns [`OperatorInterrupt`] after showing a farewell when the operator
    /// cancels at any prompt. Nothing is saved on that path.
    pub fn run(&mut self, op: &mut dyn Operator) -> Result<RunSummary, OperatorInterrupt> {
        let result = self.play_session(op);
        if result.is_err() {
            log::info!("Session interrupted at turn {}", self.state.turn);
            op.show(INTERRUPT_FAREWELL);
        }
        result
    }

    fn play_session(&mut self, op: &mut dyn Operator) -> Result<RunSummary, OperatorInterrupt> {
        if !self.main_menu(op)? {
            return Ok(RunSummary {
                ending: None,
                turns: self.state.turn,
                quit: true,
            });
        }
        op.show(&screens::intro());
        op.pause("\nPress Enter to begin...")?;

        let mut last = None;
        while !self.state.game_over {
            last = Some(self.run_turn(op)?);
        }
        op.show("\nThank you for playing Accelerando: Lobsters!");
        Ok(RunSummary {
            ending: last.as_ref().and_then(|report| report.ending),
            turns: self.state.turn,
            quit: last.is_some_and(|report| report.quit),
        })
    }
}
