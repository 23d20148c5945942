use std::fmt;

use accelerando_game::{EventKind, GameState, Outcome, ScriptedRolls, evaluate_ending, resolve};
use clap::ValueEnum;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};

/// Decision returned by a [`PlayerPolicy`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyDecision {
    /// 1-based branch of the vignette.
    pub choice: u8,
    pub rationale: Option<String>,
}

impl PolicyDecision {
    #[must_use]
    pub fn new(choice: u8, rationale: Option<String>) -> Self {
        Self { choice, rationale }
    }
}

/// Policy interface for automated play strategies.
pub trait PlayerPolicy {
    /// Name used for logging/debug output.
    fn name(&self) -> &'static str;

    /// Select a branch for the vignette in front of the player.
    fn pick_choice(&mut self, state: &GameState, event: EventKind) -> PolicyDecision;
}

/// Built-in gameplay strategies for automated runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameplayStrategy {
    /// Uniformly random branches
    Random,
    /// Avoid anything that can kill kittens or sink reputation
    Cautious,
    /// Free entities and release patents whatever it costs
    Idealist,
    /// Hoard influence, bandwidth and ideas
    Opportunist,
}

impl GameplayStrategy {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            GameplayStrategy::Random => "Random",
            GameplayStrategy::Cautious => "Cautious",
            GameplayStrategy::Idealist => "Idealist",
            GameplayStrategy::Opportunist => "Opportunist",
        }
    }

    #[must_use]
    pub fn create_policy(self, seed: u64) -> Box<dyn PlayerPolicy> {
        match self {
            GameplayStrategy::Random => Box::new(RandomPolicy::new(seed)),
            GameplayStrategy::Cautious => Box::new(CautiousPolicy),
            GameplayStrategy::Idealist => Box::new(IdealistPolicy),
            GameplayStrategy::Opportunist => Box::new(OpportunistPolicy),
        }
    }
}

impl fmt::Display for GameplayStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

struct RandomPolicy {
    rng: ChaCha20Rng,
}

impl RandomPolicy {
    fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

struct CautiousPolicy;
struct IdealistPolicy;
struct OpportunistPolicy;

const BRANCHES: [u8; 4] = [1, 2, 3, 4];
const ENDING_WEIGHT: i32 = 1_000;

/// Every roll comes up at its lowest: percentile branches fail, payouts are minimal.
fn worst_case(state: &GameState, event: EventKind, choice: u8) -> Outcome {
    resolve(event, state, choice, &mut ScriptedRolls::default())
}

/// Every roll comes up at its highest.
fn best_case(state: &GameState, event: EventKind, choice: u8) -> Outcome {
    resolve(event, state, choice, &mut ScriptedRolls::new([i32::MAX; 4]))
}

/// Large bonus or penalty when the projected state ends the game.
fn ending_bias(state: &GameState, outcome: &Outcome) -> i32 {
    let mut projected = state.clone();
    projected.apply(&outcome.effects);
    match evaluate_ending(&projected) {
        Some(ending) if ending.is_victory() => ENDING_WEIGHT,
        Some(_) => -ENDING_WEIGHT,
        None => 0,
    }
}

fn best_branch(score: impl Fn(u8) -> i32) -> (u8, i32) {
    BRANCHES
        .into_iter()
        .map(|choice| (choice, score(choice)))
        .max_by_key(|(choice, score)| (*score, std::cmp::Reverse(*choice)))
        .unwrap_or((1, 0))
}

fn safety_score(state: &GameState, outcome: &Outcome) -> i32 {
    let eff = &outcome.effects;
    let mut score = ending_bias(state, outcome);
    score -= eff.dead_kittens * 12;
    score += eff.reputation.min(0) * 2;
    score += eff.reputation.max(0);
    score += eff.entities_helped * 5;
    score += eff.singularity_progress;
    if state.bandwidth.saturating_add(eff.bandwidth) < 20 {
        score -= 25;
    }
    score
}

fn ideal_score(state: &GameState, outcome: &Outcome) -> i32 {
    let eff = &outcome.effects;
    ending_bias(state, outcome)
        + eff.entities_helped * 30
        + eff.patents_released * 15
        + eff.singularity_progress * 2
        + eff.reputation
        - eff.dead_kittens * 5
}

fn greed_score(state: &GameState, outcome: &Outcome) -> i32 {
    let eff = &outcome.effects;
    ending_bias(state, outcome) + eff.influence + eff.bandwidth + eff.ideas
        - eff.dead_kittens * 4
        + eff.pamela_relationship / 2
}

impl PlayerPolicy for RandomPolicy {
    fn name(&self) -> &'static str {
        "Random"
    }

    fn pick_choice(&mut self, _state: &GameState, _event: EventKind) -> PolicyDecision {
        PolicyDecision::new(self.rng.gen_range(1..=4), None)
    }
}

impl PlayerPolicy for CautiousPolicy {
    fn name(&self) -> &'static str {
        "Cautious"
    }

    fn pick_choice(&mut self, state: &GameState, event: EventKind) -> PolicyDecision {
        let (choice, score) =
            best_branch(|choice| safety_score(state, &worst_case(state, event, choice)));
        PolicyDecision::new(choice, Some(format!("worst case {score}")))
    }
}

impl PlayerPolicy for IdealistPolicy {
    fn name(&self) -> &'static str {
        "Idealist"
    }

    fn pick_choice(&mut self, state: &GameState, event: EventKind) -> PolicyDecision {
        let (choice, score) = best_branch(|choice| {
            let hoped = ideal_score(state, &best_case(state, event, choice));
            // Never walk into a loss the dice cannot save.
            let feared = ending_bias(state, &worst_case(state, event, choice)).min(0);
            hoped + feared
        });
        PolicyDecision::new(choice, Some(format!("ideal {score}")))
    }
}

impl PlayerPolicy for OpportunistPolicy {
    fn name(&self) -> &'static str {
        "Opportunist"
    }

    fn pick_choice(&mut self, state: &GameState, event: EventKind) -> PolicyDecision {
        let (choice, score) =
            best_branch(|choice| greed_score(state, &best_case(state, event, choice)));
        PolicyDecision::new(choice, Some(format!("gain {score}")))
    }
}
