//! Headless play: a [`PlayerPolicy`] drives full sessions through the same
//! operator seam a human uses.
pub mod policy;

use accelerando_game::{
    ChoiceKind, ChoiceRequest, Ending, GameSession, GameState, MemoryStorage, Operator,
    OperatorInterrupt, RngBundle,
};
use serde::{Deserialize, Serialize};

pub use policy::{GameplayStrategy, PlayerPolicy};

/// Operator that answers every prompt from a policy and quits at a turn cap.
pub struct PolicyOperator {
    policy: Box<dyn PlayerPolicy>,
    max_turns: i32,
    decisions: usize,
}

impl PolicyOperator {
    #[must_use]
    pub fn new(policy: Box<dyn PlayerPolicy>, max_turns: i32) -> Self {
        Self {
            policy,
            max_turns,
            decisions: 0,
        }
    }

    #[must_use]
    pub const fn decisions(&self) -> usize {
        self.decisions
    }
}

impl Operator for PolicyOperator {
    fn show(&mut self, text: &str) {
        log::trace!("{text}");
    }

    fn choose(&mut self, request: &ChoiceRequest<'_>) -> Result<u8, OperatorInterrupt> {
        let choice = match request.kind {
            ChoiceKind::MainMenu | ChoiceKind::AfterSave => 1,
            ChoiceKind::Event(kind) => {
                let decision = self.policy.pick_choice(request.state, kind);
                self.decisions += 1;
                log::debug!(
                    "{} picks {} on turn {} for {}{}",
                    self.policy.name(),
                    decision.choice,
                    request.state.turn,
                    kind.key(),
                    decision
                        .rationale
                        .as_deref()
                        .map(|why| format!(" ({why})"))
                        .unwrap_or_default()
                );
                decision.choice
            }
            ChoiceKind::EndOfTurn if request.state.turn >= self.max_turns => 3,
            ChoiceKind::EndOfTurn => 1,
        };
        Ok(choice.clamp(1, request.max()))
    }
}

/// Result of one automated game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub seed: u64,
    pub strategy: GameplayStrategy,
    pub ending: Option<Ending>,
    pub turns: i32,
    pub final_state: GameState,
}

/// Aggregate over a batch of automated games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub strategy: GameplayStrategy,
    pub games: usize,
    pub victories: usize,
    pub reputation_collapses: usize,
    pub kitten_catastrophes: usize,
    pub disconnections: usize,
    /// Games stopped at the turn cap.
    pub unfinished: usize,
    pub average_turns: f64,
    pub records: Vec<GameRecord>,
}

impl BatchSummary {
    fn from_records(strategy: GameplayStrategy, records: Vec<GameRecord>) -> Self {
        let count = |ending: Option<Ending>| records.iter().filter(|r| r.ending == ending).count();
        let total_turns: i64 = records.iter().map(|r| i64::from(r.turns)).sum();
        #[allow(clippy::cast_precision_loss)]
        let average_turns = if records.is_empty() {
            0.0
        } else {
            total_turns as f64 / records.len() as f64
        };
        Self {
            strategy,
            games: records.len(),
            victories: count(Some(Ending::Victory)),
            reputation_collapses: count(Some(Ending::ReputationCollapse)),
            kitten_catastrophes: count(Some(Ending::KittenCatastrophe)),
            disconnections: count(Some(Ending::Disconnected)),
            unfinished: count(None),
            average_turns,
            records,
        }
    }

    /// Share of games won, as a percentage.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.victories as f64 / self.games as f64 * 100.0
    }
}

/// Play one seeded game to its ending or the turn cap.
///
/// # Errors
///
/// Returns [`OperatorInterrupt`] only if the session is cancelled, which a
/// policy operator never does.
pub fn play_game(
    strategy: GameplayStrategy,
    seed: u64,
    max_turns: i32,
) -> Result<GameRecord, OperatorInterrupt> {
    let mut session =
        GameSession::with_parts(MemoryStorage::default(), RngBundle::from_user_seed(seed));
    let mut operator = PolicyOperator::new(strategy.create_policy(seed), max_turns);
    let summary = session.run(&mut operator)?;
    log::info!(
        "{strategy} seed {seed}: {} after {} turns, {} decisions",
        summary
            .ending
            .map_or_else(|| "unfinished".to_string(), |e| e.to_string()),
        summary.turns,
        operator.decisions()
    );
    Ok(GameRecord {
        seed,
        strategy,
        ending: summary.ending,
        turns: summary.turns,
        final_state: session.into_state(),
    })
}

/// Play `games` games with consecutive seeds starting at `base_seed`.
///
/// # Errors
///
/// Propagates [`OperatorInterrupt`] from [`play_game`].
pub fn play_batch(
    strategy: GameplayStrategy,
    base_seed: u64,
    games: usize,
    max_turns: i32,
) -> Result<BatchSummary, OperatorInterrupt> {
    let records = (0..games as u64)
        .map(|offset| play_game(strategy, base_seed.wrapping_add(offset), max_turns))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(BatchSummary::from_records(strategy, records))
}
