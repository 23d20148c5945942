//! Accelerando: Lobsters Game Engine
//!
//! Platform-agnostic core logic for a menu-driven text adventure about a
//! meme-broker steering the world toward the Singularity. This crate owns the
//! game state, the six vignettes, randomness, persistence and the turn loop;
//! input and output go through the [`Operator`] seam so terminals, automated
//! players and tests drive the same code.

pub mod constants;
pub mod data;
pub mod events;
pub mod operator;
pub mod result;
pub mod rng;
pub mod screens;
pub mod session;
pub mod state;
pub mod storage;

// Re-export commonly used types
pub use data::{Effects, EventCard};
pub use events::{EventKind, Outcome, Tone, play, resolve};
pub use operator::{
    ChoiceKind, ChoiceRequest, InputError, Operator, OperatorInterrupt, ScriptedOperator,
    parse_choice,
};
pub use result::{Ending, ResultSummary, evaluate_ending, result_summary};
pub use rng::{CountingRng, RngBundle, RollSource, ScriptedRolls, Stream, TurnDice};
pub use session::{GameSession, INTERRUPT_FAREWELL, RunSummary, SessionConfig, TurnReport};
pub use state::{GameState, MalformedSave};
pub use storage::{GameStorage, JsonFileStorage, MemoryStorage, StorageError};
