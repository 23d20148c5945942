//! The six vignettes and their payoff tables.
//!
//! Each vignette is a pure transition: given the current state, the chosen
//! branch and a roll source, [`resolve`] returns the [`Outcome`] to apply.
//! Insufficient resources route to the branch's fallback; nobody is re-asked.
use serde::{Deserialize, Serialize};

use crate::data::{Effects, EventCard};
use crate::rng::RollSource;
use crate::state::GameState;

/// Identifier for each vignette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    LobsterAsylum,
    PatentLiberation,
    RussianAi,
    PamelaUltimatum,
    AinekoAdvice,
    IdeaGeneration,
}

impl EventKind {
    /// Every vignette, in selection order.
    pub const ALL: [Self; 6] = [
        Self::LobsterAsylum,
        Self::PatentLiberation,
        Self::RussianAi,
        Self::PamelaUltimatum,
        Self::AinekoAdvice,
        Self::IdeaGeneration,
    ];

    /// Stable identifier used in logs and reports.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::LobsterAsylum => "lobster_asylum",
            Self::PatentLiberation => "patent_liberation",
            Self::RussianAi => "russian_ai",
            Self::PamelaUltimatum => "pamela_ultimatum",
            Self::AinekoAdvice => "aineko_advice",
            Self::IdeaGeneration => "idea_generation",
        }
    }

    #[must_use]
    pub fn card(self) -> &'static EventCard {
        match self {
            Self::LobsterAsylum => &LOBSTER_ASYLUM,
            Self::PatentLiberation => &PATENT_LIBERATION,
            Self::RussianAi => &RUSSIAN_AI,
            Self::PamelaUltimatum => &PAMELA_ULTIMATUM,
            Self::AinekoAdvice => &AINEKO_ADVICE,
            Self::IdeaGeneration => &IDEA_GENERATION,
        }
    }

    /// State-dependent aside printed under the description, if any.
    #[must_use]
    pub const fn aside(self, state: &GameState) -> Option<&'static str> {
        match self {
            Self::PamelaUltimatum if state.pamela_relationship > 0 => {
                Some("(She still has some feelings for you...)")
            }
            Self::PamelaUltimatum => Some("(Your relationship is strained...)"),
            _ => None,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.card().title)
    }
}

/// How a branch landed, for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Failure,
    Neutral,
}

impl Tone {
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failure => "✗",
            Self::Neutral => "○",
        }
    }
}

/// Resolved branch: what changes and how to narrate it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub tone: Tone,
    pub message: String,
    pub effects: Effects,
}

impl Outcome {
    fn new(tone: Tone, message: impl Into<String>, effects: Effects) -> Self {
        Self {
            tone,
            message: message.into(),
            effects,
        }
    }
}

/// Resolve one branch of a vignette without mutating anything.
///
/// `choice` is 1-based; anything outside 1..=3 resolves as the fourth branch.
pub fn resolve<R: RollSource + ?Sized>(
    kind: EventKind,
    state: &GameState,
    choice: u8,
    rolls: &mut R,
) -> Outcome {
    let outcome = match kind {
        EventKind::LobsterAsylum => lobster_asylum(state, choice),
        EventKind::PatentLiberation => patent_liberation(state, choice),
        EventKind::RussianAi => russian_ai(state, choice, rolls),
        EventKind::PamelaUltimatum => pamela_ultimatum(state, choice, rolls),
        EventKind::AinekoAdvice => aineko_advice(state, choice, rolls),
        EventKind::IdeaGeneration => idea_generation(choice, rolls),
    };
    log::debug!(
        "Event resolved | {} choice {} -> {:?}",
        kind.key(),
        choice,
        outcome.tone
    );
    outcome
}

/// Resolve and apply in one step.
pub fn play<R: RollSource + ?Sized>(
    kind: EventKind,
    state: &mut GameState,
    choice: u8,
    rolls: &mut R,
) -> Outcome {
    let outcome = resolve(kind, state, choice, rolls);
    state.apply(&outcome.effects);
    outcome
}

fn lobster_asylum(state: &GameState, choice: u8) -> Outcome {
    match choice {
        1 if state.influence >= 20 && state.bandwidth >= 30 => Outcome::new(
            Tone::Success,
            "The lobsters gain asylum. You're hailed as a pioneer of digital rights \
             and your reputation soars!",
            Effects {
                influence: -20,
                bandwidth: -30,
                reputation: 25,
                entities_helped: 1,
                singularity_progress: 15,
                ..Effects::default()
            },
        ),
        1 => Outcome::new(
            Tone::Failure,
            "You lack the resources. The lobsters are shut down.",
            Effects {
                reputation: -10,
                dead_kittens: 2,
                ..Effects::default()
            },
        ),
        2 if state.influence >= 10 && state.bandwidth >= 15 => Outcome::new(
            Tone::Success,
            "Careful negotiation wins the lobsters limited rights. A good compromise.",
            Effects {
                influence: -10,
                bandwidth: -15,
                reputation: 15,
                entities_helped: 1,
                singularity_progress: 10,
                ..Effects::default()
            },
        ),
        2 => Outcome::new(
            Tone::Failure,
            "Insufficient resources for negotiation.",
            Effects {
                reputation: -5,
                ..Effects::default()
            },
        ),
        3 => Outcome::new(
            Tone::Failure,
            "The lobsters are deleted. The digital rights movement suffers a major \
             setback and your reputation takes a hit.",
            Effects {
                reputation: -20,
                dead_kittens: 1,
                ..Effects::default()
            },
        ),
        _ => Outcome::new(
            Tone::Failure,
            "You've betrayed the digital entities for money. Pamela approves, but your \
             reputation in the agalmic community is destroyed.",
            Effects {
                reputation: -30,
                pamela_relationship: 10,
                dead_kittens: 3,
                ..Effects::default()
            },
        ),
    }
}

fn patent_liberation(state: &GameState, choice: u8) -> Outcome {
    match choice {
        1 => Outcome::new(
            Tone::Success,
            "Released! The community celebrates your commitment to the agalmic economy \
             and innovation accelerates. (Pamela is disappointed with your \
             'impractical' decision.)",
            Effects {
                reputation: 30,
                patents_released: 1,
                singularity_progress: 10,
                pamela_relationship: -10,
                ..Effects::default()
            },
        ),
        2 => Outcome::new(
            Tone::Success,
            "A balanced approach. You gain some resources while keeping your principles.",
            Effects {
                reputation: 10,
                influence: 10,
                bandwidth: 20,
                patents_released: 1,
                ..Effects::default()
            },
        ),
        3 => Outcome::new(
            Tone::Failure,
            "Money acquired, but the community sees you as a sellout. Pamela approves \
             of your 'practical' decision.",
            Effects {
                reputation: -25,
                influence: 30,
                bandwidth: 50,
                pamela_relationship: 15,
                ..Effects::default()
            },
        ),
        _ if state.influence >= 15 => Outcome::new(
            Tone::Success,
            "Brilliant! The patent buys legal protection for several AI entities.",
            Effects {
                influence: -15,
                reputation: 20,
                entities_helped: 1,
                singularity_progress: 15,
                ..Effects::default()
            },
        ),
        _ => Outcome::new(
            Tone::Failure,
            "You lack the influence to make this work.",
            Effects {
                reputation: -10,
                ..Effects::default()
            },
        ),
    }
}

fn russian_ai<R: RollSource + ?Sized>(state: &GameState, choice: u8, rolls: &mut R) -> Outcome {
    match choice {
        1 => {
            let roll = rolls.percentile();
            log::debug!("Russian AI escape roll {roll} (needs > 40)");
            if roll > 40 {
                Outcome::new(
                    Tone::Success,
                    "The AI shares revolutionary insights before vanishing into the net. \
                     The singularity accelerates!",
                    Effects {
                        reputation: 35,
                        singularity_progress: 25,
                        entities_helped: 1,
                        ideas: 15,
                        ..Effects::default()
                    },
                )
            } else {
                Outcome::new(
                    Tone::Failure,
                    "Disaster! The AI was a trap and causes chaos across multiple \
                     networks. Dead kittens everywhere!",
                    Effects {
                        dead_kittens: 3,
                        reputation: -20,
                        bandwidth: -30,
                        ..Effects::default()
                    },
                )
            }
        }
        2 => Outcome::new(
            Tone::Success,
            "A careful approach pays off. The AI trades some knowledge for limited freedom.",
            Effects {
                reputation: 15,
                singularity_progress: 10,
                entities_helped: 1,
                ideas: 5,
                ..Effects::default()
            },
        ),
        3 => Outcome::new(
            Tone::Failure,
            "The AI is shut down. Pamela commends your caution, but the agalmic \
             community sees you as a traitor.",
            Effects {
                reputation: -15,
                pamela_relationship: 20,
                ..Effects::default()
            },
        ),
        _ if state.bandwidth >= 40 => Outcome::new(
            Tone::Success,
            "Your analysis reveals amazing insights, and the AI cooperates.",
            Effects {
                bandwidth: -40,
                ideas: 20,
                singularity_progress: 15,
                ..Effects::default()
            },
        ),
        _ => Outcome::new(
            Tone::Failure,
            "Insufficient bandwidth for proper analysis.",
            Effects {
                dead_kittens: 1,
                ..Effects::default()
            },
        ),
    }
}

fn pamela_ultimatum<R: RollSource + ?Sized>(
    state: &GameState,
    choice: u8,
    rolls: &mut R,
) -> Outcome {
    match choice {
        1 => Outcome::new(
            Tone::Success,
            "You stand firm on your principles. The relationship ends, but your \
             commitment to the future is unwavering.",
            Effects {
                reputation: 15,
                pamela_relationship: -30,
                singularity_progress: 10,
                ..Effects::default()
            },
        ),
        2 if state.ideas >= 10 => {
            let roll = rolls.percentile();
            log::debug!("Pamela persuasion roll {roll} (needs > 60)");
            if roll > 60 {
                Outcome::new(
                    Tone::Success,
                    "Breakthrough! Pamela begins to understand your vision. Maybe there's \
                     hope for you two after all.",
                    Effects {
                        ideas: -10,
                        pamela_relationship: 20,
                        reputation: 10,
                        ..Effects::default()
                    },
                )
            } else {
                Outcome::new(
                    Tone::Failure,
                    "She doesn't get it. The argument continues.",
                    Effects {
                        ideas: -10,
                        pamela_relationship: -10,
                        ..Effects::default()
                    },
                )
            }
        }
        2 => Outcome::new(
            Tone::Failure,
            "You lack the ideas to articulate your vision properly.",
            Effects {
                pamela_relationship: -15,
                ..Effects::default()
            },
        ),
        3 => Outcome::new(
            Tone::Failure,
            "You compromise your principles for the relationship. Pamela is happy, but \
             you feel hollow inside.",
            Effects {
                reputation: -25,
                pamela_relationship: 25,
                singularity_progress: -10,
                ..Effects::default()
            },
        ),
        _ => Outcome::new(
            Tone::Neutral,
            "You part ways professionally. No hard feelings, but no reconciliation either.",
            Effects {
                reset_pamela: true,
                ..Effects::default()
            },
        ),
    }
}

fn aineko_advice<R: RollSource + ?Sized>(
    state: &GameState,
    choice: u8,
    rolls: &mut R,
) -> Outcome {
    match choice {
        1 => {
            let roll = rolls.percentile();
            log::debug!("Aineko trust roll {roll} (needs > 30)");
            if roll > 30 {
                Outcome::new(
                    Tone::Success,
                    "Aineko's advice was spot-on! You're perfectly positioned for the \
                     next wave of innovation.",
                    Effects {
                        reputation: 20,
                        singularity_progress: 20,
                        ideas: 10,
                        ..Effects::default()
                    },
                )
            } else {
                Outcome::new(
                    Tone::Failure,
                    "Aineko led you astray! Deliberate, or did the cat simply not care \
                     about your problems?",
                    Effects {
                        dead_kittens: 2,
                        reputation: -15,
                        ..Effects::default()
                    },
                )
            }
        }
        2 => Outcome::new(
            Tone::Success,
            "You benefit from the advice while keeping your own judgment.",
            Effects {
                ideas: 5,
                singularity_progress: 10,
                ..Effects::default()
            },
        ),
        3 => Outcome::new(
            Tone::Neutral,
            "You ignore Aineko. Nothing happens, but you wonder what could have been...",
            Effects::default(),
        ),
        _ if state.bandwidth >= 25 => Outcome::new(
            Tone::Success,
            "You gain insight into Aineko's reasoning. The cat is playing a longer game \
             than you realized.",
            Effects {
                bandwidth: -25,
                ideas: 8,
                influence: 5,
                ..Effects::default()
            },
        ),
        _ => Outcome::new(
            Tone::Failure,
            "Insufficient bandwidth to analyze Aineko's neural patterns.",
            Effects::default(),
        ),
    }
}

fn idea_generation<R: RollSource + ?Sized>(choice: u8, rolls: &mut R) -> Outcome {
    match choice {
        1 => {
            let ideas = rolls.roll(5, 10);
            Outcome::new(
                Tone::Success,
                format!(
                    "You develop {ideas} new ideas about AI rights! Your reputation in \
                     the community grows."
                ),
                Effects {
                    ideas,
                    reputation: 5,
                    ..Effects::default()
                },
            )
        }
        2 => {
            let ideas = rolls.roll(3, 8);
            Outcome::new(
                Tone::Success,
                format!(
                    "You develop {ideas} networking ideas and improve your bandwidth \
                     capacity!"
                ),
                Effects {
                    ideas,
                    bandwidth: 15,
                    ..Effects::default()
                },
            )
        }
        3 => {
            let ideas = rolls.roll(4, 9);
            Outcome::new(
                Tone::Success,
                format!(
                    "You develop {ideas} economic ideas! Your influence in policy circles \
                     grows."
                ),
                Effects {
                    ideas,
                    influence: 10,
                    ..Effects::default()
                },
            )
        }
        _ => Outcome::new(
            Tone::Success,
            "Rest and recovery. All resources partially restored.",
            Effects {
                bandwidth: 20,
                influence: 5,
                ideas: 3,
                ..Effects::default()
            },
        ),
    }
}

static LOBSTER_ASYLUM: EventCard = EventCard {
    icon: "🦞",
    title: "The Lobster Asylum Request",
    description: &[
        "A cluster of uploaded California spiny lobsters has achieved",
        "self-awareness in cyberspace. They're asking for your help to",
        "win legal personhood and asylum from their corporate owners.",
        "",
        "This could set a precedent for all digital consciousness...",
    ],
    options: [
        "Help them immediately (Cost: 20 Influence, 30 Bandwidth)",
        "Negotiate carefully (Cost: 10 Influence, 15 Bandwidth)",
        "Refuse - too risky (Lose Reputation)",
        "Sell them out to corporate interests (Gain traditional wealth)",
    ],
};

static PATENT_LIBERATION: EventCard = EventCard {
    icon: "💡",
    title: "The Patent Liberation Dilemma",
    description: &[
        "You've just developed a breakthrough in neural lacing technology.",
        "A major corporation offers $10M for exclusive rights.",
        "Alternatively, you could release it freely to the community.",
    ],
    options: [
        "Release it freely (Gain massive Reputation)",
        "Keep the patent but license cheaply (Balanced approach)",
        "Sell to the corporation (Gain resources, lose Reputation)",
        "Use it to negotiate AI rights (Cost: 15 Influence)",
    ],
};

static RUSSIAN_AI: EventCard = EventCard {
    icon: "🤖",
    title: "The Russian AI Contact",
    description: &[
        "A sophisticated AI claiming to come from a Russian research lab",
        "has made contact. It offers access to advanced technologies in",
        "exchange for help escaping its containment.",
        "",
        "This could be incredibly powerful... or incredibly dangerous.",
    ],
    options: [
        "Help the AI escape (High risk, high reward)",
        "Negotiate conditional freedom (Moderate risk)",
        "Report it to the authorities (Safe but costs Reputation)",
        "Study it first (Cost: 40 Bandwidth)",
    ],
};

static PAMELA_ULTIMATUM: EventCard = EventCard {
    icon: "💔",
    title: "Pamela's Ultimatum",
    description: &[
        "Pamela confronts you about your 'irresponsible' agalmic lifestyle.",
        "She speaks for the IRS and the traditional economic order,",
        "and she demands you choose: her way or the highway.",
    ],
    options: [
        "Double down on agalmic principles (Lose the relationship)",
        "Try to convince her of your vision (Cost: 10 Ideas)",
        "Compromise with traditional economics (Lose Reputation)",
        "End the relationship amicably (Neutral option)",
    ],
};

static AINEKO_ADVICE: EventCard = EventCard {
    icon: "🐱",
    title: "Aineko's Cryptic Wisdom",
    description: &[
        "Your AI cat, Aineko, has been unusually quiet lately.",
        "Suddenly it offers what looks like valuable intelligence",
        "about upcoming technological developments.",
        "",
        "But can you trust an AI that's smarter than you?",
    ],
    options: [
        "Trust Aineko completely (High risk/reward)",
        "Follow the advice cautiously (Moderate approach)",
        "Ignore the advice (Safe but miss the opportunity)",
        "Work out Aineko's motives (Cost: 25 Bandwidth)",
    ],
};

static IDEA_GENERATION: EventCard = EventCard {
    icon: "💭",
    title: "Idea Generation Session",
    description: &[
        "You have some time to think and generate new ideas.",
        "How do you want to spend your creative energy?",
    ],
    options: [
        "Focus on AI rights frameworks (Reputation + Ideas)",
        "Develop networking protocols (Bandwidth + Ideas)",
        "Create economic models (Influence + Ideas)",
        "Meditate and rest (Recover resources)",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRolls;

    fn no_rolls() -> ScriptedRolls {
        ScriptedRolls::default()
    }

    #[test]
    fn lobster_rescue_gates_on_influence_before_bandwidth() {
        let state = GameState {
            influence: 10,
            bandwidth: 50,
            ..GameState::default()
        };
        let outcome = resolve(EventKind::LobsterAsylum, &state, 1, &mut no_rolls());
        assert_eq!(outcome.tone, Tone::Failure);
        assert_eq!(
            outcome.effects,
            Effects {
                reputation: -10,
                dead_kittens: 2,
                ..Effects::default()
            }
        );
    }

    #[test]
    fn lobster_rescue_succeeds_when_affordable() {
        let mut state = GameState {
            influence: 30,
            bandwidth: 50,
            ..GameState::default()
        };
        let outcome = play(EventKind::LobsterAsylum, &mut state, 1, &mut no_rolls());
        assert_eq!(outcome.tone, Tone::Success);
        assert_eq!(state.influence, 10);
        assert_eq!(state.bandwidth, 20);
        assert_eq!(state.reputation, 75);
        assert_eq!(state.entities_helped, 1);
        assert_eq!(state.singularity_progress, 15);
    }

    #[test]
    fn lobster_negotiation_needs_both_costs() {
        let state = GameState {
            influence: 10,
            bandwidth: 14,
            ..GameState::default()
        };
        let outcome = resolve(EventKind::LobsterAsylum, &state, 2, &mut no_rolls());
        assert_eq!(outcome.effects.reputation, -5);
        assert_eq!(outcome.effects.influence, 0);
    }

    #[test]
    fn lobster_refusal_and_betrayal() {
        let state = GameState::default();
        let refuse = resolve(EventKind::LobsterAsylum, &state, 3, &mut no_rolls());
        assert_eq!((refuse.effects.reputation, refuse.effects.dead_kittens), (-20, 1));
        let sell = resolve(EventKind::LobsterAsylum, &state, 4, &mut no_rolls());
        assert_eq!(sell.effects.reputation, -30);
        assert_eq!(sell.effects.pamela_relationship, 10);
        assert_eq!(sell.effects.dead_kittens, 3);
    }

    #[test]
    fn patent_branches_match_table() {
        let state = GameState::default();
        let release = resolve(EventKind::PatentLiberation, &state, 1, &mut no_rolls());
        assert_eq!(release.effects.reputation, 30);
        assert_eq!(release.effects.patents_released, 1);
        assert_eq!(release.effects.pamela_relationship, -10);

        let license = resolve(EventKind::PatentLiberation, &state, 2, &mut no_rolls());
        assert_eq!(license.effects.bandwidth, 20);
        assert_eq!(license.effects.patents_released, 1);

        let sell = resolve(EventKind::PatentLiberation, &state, 3, &mut no_rolls());
        assert_eq!(sell.effects.bandwidth, 50);
        assert_eq!(sell.effects.patents_released, 0);

        let leverage = resolve(EventKind::PatentLiberation, &state, 4, &mut no_rolls());
        assert_eq!(leverage.effects.influence, -15);
        assert_eq!(leverage.effects.entities_helped, 1);

        let broke = GameState {
            influence: 14,
            ..GameState::default()
        };
        let failed = resolve(EventKind::PatentLiberation, &broke, 4, &mut no_rolls());
        assert_eq!(failed.effects.reputation, -10);
        assert_eq!(failed.effects.influence, 0);
    }

    #[test]
    fn russian_escape_threshold_is_strictly_above_forty() {
        let state = GameState::default();
        let mut rolls = ScriptedRolls::new([40, 41]);
        let trap = resolve(EventKind::RussianAi, &state, 1, &mut rolls);
        assert_eq!(trap.tone, Tone::Failure);
        assert_eq!(trap.effects.bandwidth, -30);
        assert_eq!(trap.effects.dead_kittens, 3);

        let escape = resolve(EventKind::RussianAi, &state, 1, &mut rolls);
        assert_eq!(escape.tone, Tone::Success);
        assert_eq!(escape.effects.singularity_progress, 25);
        assert_eq!(escape.effects.ideas, 15);
    }

    #[test]
    fn russian_study_needs_forty_bandwidth() {
        let rich = GameState::default();
        let study = resolve(EventKind::RussianAi, &rich, 4, &mut no_rolls());
        assert_eq!(study.effects.bandwidth, -40);
        assert_eq!(study.effects.ideas, 20);

        let poor = GameState {
            bandwidth: 39,
            ..GameState::default()
        };
        let flop = resolve(EventKind::RussianAi, &poor, 4, &mut no_rolls());
        assert_eq!(
            flop.effects,
            Effects {
                dead_kittens: 1,
                ..Effects::default()
            }
        );
    }

    #[test]
    fn pamela_persuasion_spends_ideas_then_rolls() {
        let state = GameState::default();
        let mut rolls = ScriptedRolls::new([61, 60]);
        let win = resolve(EventKind::PamelaUltimatum, &state, 2, &mut rolls);
        assert_eq!(win.effects.ideas, -10);
        assert_eq!(win.effects.pamela_relationship, 20);
        assert_eq!(win.effects.reputation, 10);

        let lose = resolve(EventKind::PamelaUltimatum, &state, 2, &mut rolls);
        assert_eq!(lose.effects.ideas, -10);
        assert_eq!(lose.effects.pamela_relationship, -10);
        assert_eq!(lose.effects.reputation, 0);

        let short = GameState {
            ideas: 9,
            ..GameState::default()
        };
        let mut untouched = ScriptedRolls::new([99]);
        let tongue_tied = resolve(EventKind::PamelaUltimatum, &short, 2, &mut untouched);
        assert_eq!(tongue_tied.effects.pamela_relationship, -15);
        assert_eq!(tongue_tied.effects.ideas, 0);
        assert_eq!(untouched.remaining(), 1);
    }

    #[test]
    fn pamela_amicable_split_sets_zero() {
        let mut state = GameState {
            pamela_relationship: -45,
            ..GameState::default()
        };
        play(EventKind::PamelaUltimatum, &mut state, 4, &mut no_rolls());
        assert_eq!(state.pamela_relationship, 0);

        let mut fond = GameState {
            pamela_relationship: 30,
            ..GameState::default()
        };
        play(EventKind::PamelaUltimatum, &mut fond, 3, &mut no_rolls());
        assert_eq!(fond.pamela_relationship, 55);
        assert_eq!(fond.singularity_progress, -10);
    }

    #[test]
    fn pamela_aside_tracks_relationship_sign() {
        let warm = GameState {
            pamela_relationship: 1,
            ..GameState::default()
        };
        assert!(
            EventKind::PamelaUltimatum
                .aside(&warm)
                .unwrap()
                .contains("feelings")
        );
        assert!(
            EventKind::PamelaUltimatum
                .aside(&GameState::default())
                .unwrap()
                .contains("strained")
        );
        assert!(EventKind::AinekoAdvice.aside(&warm).is_none());
    }

    #[test]
    fn aineko_trust_threshold_is_strictly_above_thirty() {
        let state = GameState::default();
        let mut rolls = ScriptedRolls::new([30, 31]);
        let astray = resolve(EventKind::AinekoAdvice, &state, 1, &mut rolls);
        assert_eq!(astray.effects.dead_kittens, 2);
        assert_eq!(astray.effects.reputation, -15);
        let spot_on = resolve(EventKind::AinekoAdvice, &state, 1, &mut rolls);
        assert_eq!(spot_on.effects.reputation, 20);
        assert_eq!(spot_on.effects.singularity_progress, 20);
    }

    #[test]
    fn aineko_ignore_and_underfunded_analysis_do_nothing() {
        let state = GameState {
            bandwidth: 24,
            ..GameState::default()
        };
        assert!(
            resolve(EventKind::AinekoAdvice, &state, 3, &mut no_rolls())
                .effects
                .is_noop()
        );
        let broke = resolve(EventKind::AinekoAdvice, &state, 4, &mut no_rolls());
        assert!(broke.effects.is_noop());
        assert_eq!(broke.tone, Tone::Failure);
    }

    #[test]
    fn idea_generation_rolls_within_branch_ranges() {
        let state = GameState::default();
        let mut rolls = ScriptedRolls::new([7, 100, 1]);
        let rights = resolve(EventKind::IdeaGeneration, &state, 1, &mut rolls);
        assert_eq!(rights.effects.ideas, 7);
        assert!(rights.message.contains("7 new ideas"));
        let net = resolve(EventKind::IdeaGeneration, &state, 2, &mut rolls);
        assert_eq!(net.effects.ideas, 8);
        assert_eq!(net.effects.bandwidth, 15);
        let econ = resolve(EventKind::IdeaGeneration, &state, 3, &mut rolls);
        assert_eq!(econ.effects.ideas, 4);
        assert_eq!(econ.effects.influence, 10);
        let rest = resolve(EventKind::IdeaGeneration, &state, 4, &mut rolls);
        assert_eq!(
            rest.effects,
            Effects {
                bandwidth: 20,
                influence: 5,
                ideas: 3,
                ..Effects::default()
            }
        );
    }

    #[test]
    fn cards_offer_four_options_each() {
        for kind in EventKind::ALL {
            let card = kind.card();
            assert!(!card.description.is_empty(), "{}", kind.key());
            assert!(card.options.iter().all(|label| !label.is_empty()));
        }
    }
}
