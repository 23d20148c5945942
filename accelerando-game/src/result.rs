//! End of game evaluation and the victory/defeat screens.
use serde::{Deserialize, Serialize};

use crate::constants::{LOSE_BANDWIDTH_FLOOR, LOSE_DEAD_KITTENS, LOSE_REPUTATION_FLOOR};
use crate::state::GameState;

/// Possible game endings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ending {
    /// Singularity reached, or enough entities freed, with reputation intact
    Victory,
    /// Reputation fell to zero or below
    ReputationCollapse,
    /// Ten or more dead kittens
    KittenCatastrophe,
    /// Bandwidth fell to zero or below
    Disconnected,
}

impl Ending {
    #[must_use]
    pub const fn is_victory(self) -> bool {
        matches!(self, Self::Victory)
    }
}

impl std::fmt::Display for Ending {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ending::Victory => write!(f, "victory"),
            Ending::ReputationCollapse => write!(f, "reputation_collapse"),
            Ending::KittenCatastrophe => write!(f, "kitten_catastrophe"),
            Ending::Disconnected => write!(f, "disconnected"),
        }
    }
}

/// Select the ending, if any. Victory is checked first and wins ties with
/// any defeat cause; defeat causes are reported in strict priority order.
#[must_use]
pub fn evaluate_ending(gs: &GameState) -> Option<Ending> {
    if gs.is_victory() {
        return Some(Ending::Victory);
    }
    if gs.reputation <= LOSE_REPUTATION_FLOOR {
        return Some(Ending::ReputationCollapse);
    }
    if gs.dead_kittens >= LOSE_DEAD_KITTENS {
        return Some(Ending::KittenCatastrophe);
    }
    if gs.bandwidth <= LOSE_BANDWIDTH_FLOOR {
        return Some(Ending::Disconnected);
    }
    None
}

/// Everything the end screen shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub ending: Ending,
    pub headline: String,
    pub epilogue: Vec<String>,
    pub stats: Vec<(String, String)>,
    pub closing: String,
}

/// Build the summary for a finished game.
#[must_use]
pub fn result_summary(gs: &GameState, ending: Ending) -> ResultSummary {
    match ending {
        Ending::Victory => ResultSummary {
            ending,
            headline: "🎉 VICTORY! 🎉".to_string(),
            epilogue: vec![
                "You've successfully navigated the path to the Singularity!".to_string(),
            ],
            stats: vec![
                ("Final Reputation".to_string(), gs.reputation.to_string()),
                ("Entities Helped".to_string(), gs.entities_helped.to_string()),
                ("Patents Released".to_string(), gs.patents_released.to_string()),
                (
                    "Singularity Progress".to_string(),
                    format!("{}%", gs.singularity_progress),
                ),
            ],
            closing: [
                "Your vision of an agalmic future has begun to take shape.",
                "The uploaded minds you helped now flourish in cyberspace.",
                "The old economic order is giving way to something new...",
                "",
                "The future accelerates. Humanity transcends. You made it happen.",
            ]
            .join("\n"),
        },
        _ => ResultSummary {
            ending,
            headline: "💀 GAME OVER 💀".to_string(),
            epilogue: defeat_epitaph(ending)
                .iter()
                .map(|line| (*line).to_string())
                .collect(),
            stats: vec![
                ("Reputation".to_string(), gs.reputation.to_string()),
                ("Dead Kittens".to_string(), gs.dead_kittens.to_string()),
                (
                    "Singularity Progress".to_string(),
                    format!("{}%", gs.singularity_progress),
                ),
                ("Turns Survived".to_string(), gs.turn.to_string()),
            ],
            closing: "The future accelerates... without you.".to_string(),
        },
    }
}

const fn defeat_epitaph(ending: Ending) -> &'static [&'static str] {
    match ending {
        Ending::ReputationCollapse => &[
            "Your reputation has been destroyed. The community no longer",
            "trusts you, and your dreams of accelerating toward the singularity",
            "die with your credibility.",
        ],
        Ending::KittenCatastrophe => &[
            "Too many unintended consequences. The 'dead kittens' of your",
            "reckless innovation have piled up, and society turns against",
            "unchecked technological acceleration.",
        ],
        Ending::Disconnected => &[
            "You've been cut off from the network. Without bandwidth you",
            "can't operate in the information economy. You're obsolete.",
        ],
        Ending::Victory => &[],
    }
}
