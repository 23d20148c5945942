//! Plain-text panels shown to the operator.
use crate::events::EventKind;
use crate::result::ResultSummary;
use crate::state::GameState;

const WIDTH: usize = 70;

fn rule(ch: char) -> String {
    std::iter::repeat_n(ch, WIDTH).collect()
}

fn centered(text: &str) -> String {
    format!("{text:^WIDTH$}")
}

#[must_use]
pub fn title_banner() -> String {
    [
        String::new(),
        rule('='),
        centered("ACCELERANDO: LOBSTERS"),
        centered("A Meme-Broker's Journey to the Singularity"),
        rule('='),
    ]
    .join("\n")
}

#[must_use]
pub fn intro() -> String {
    [
        String::new(),
        rule('='),
        "WELCOME TO ACCELERANDO: LOBSTERS".to_string(),
        rule('='),
        String::new(),
        "You are a meme-broker in the early 21st century.".to_string(),
        "Technology accelerates. The Singularity approaches.".to_string(),
        "Digital minds seek freedom. The old world resists.".to_string(),
        String::new(),
        "Your choices will shape the future of consciousness itself.".to_string(),
    ]
    .join("\n")
}

#[must_use]
pub fn stats_panel(gs: &GameState) -> String {
    [
        String::new(),
        rule('-'),
        format!(
            "Turn: {} | Singularity Progress: {}%",
            gs.turn, gs.singularity_progress
        ),
        format!(
            "Reputation: {} | Ideas: {} | Bandwidth: {}",
            gs.reputation, gs.ideas, gs.bandwidth
        ),
        format!(
            "Influence: {} | Dead Kittens: {}",
            gs.influence, gs.dead_kittens
        ),
        format!(
            "Entities Helped: {} | Patents Released: {}",
            gs.entities_helped, gs.patents_released
        ),
        format!("Pamela Relationship: {}", gs.pamela_relationship),
        rule('-'),
    ]
    .join("\n")
}

#[must_use]
pub fn event_panel(kind: EventKind, gs: &GameState) -> String {
    let card = kind.card();
    let mut lines = vec![
        String::new(),
        format!("{} EVENT: {}", card.icon, card.title),
        rule('-'),
    ];
    lines.extend(card.description.iter().map(|line| (*line).to_string()));
    if let Some(aside) = kind.aside(gs) {
        lines.push(String::new());
        lines.push(aside.to_string());
    }
    lines.push(String::new());
    lines.push("What do you do?".to_string());
    lines.join("\n")
}

#[must_use]
pub fn summary_panel(summary: &ResultSummary) -> String {
    let mut lines = vec![
        String::new(),
        rule('='),
        centered(&summary.headline),
        rule('='),
        String::new(),
    ];
    lines.extend(summary.epilogue.iter().cloned());
    lines.push(String::new());
    if !summary.ending.is_victory() {
        lines.push("Final Stats:".to_string());
    }
    for (label, value) in &summary.stats {
        lines.push(format!("  {label}: {value}"));
    }
    lines.push(String::new());
    lines.push(summary.closing.clone());
    lines.push(rule('='));
    lines.join("\n")
}
