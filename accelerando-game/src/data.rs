use serde::{Deserialize, Serialize};

/// Resource delta applied when a branch resolves.
///
/// Every field is additive except `reset_pamela`, which pins the relationship
/// to exactly zero before the additive part is applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Effects {
    #[serde(default)]
    pub reputation: i32,
    #[serde(default)]
    pub ideas: i32,
    #[serde(default)]
    pub bandwidth: i32,
    #[serde(default)]
    pub influence: i32,
    #[serde(default)]
    pub dead_kittens: i32,
    #[serde(default)]
    pub entities_helped: i32,
    #[serde(default)]
    pub patents_released: i32,
    #[serde(default)]
    pub singularity_progress: i32,
    #[serde(default)]
    pub pamela_relationship: i32,
    #[serde(default)]
    pub reset_pamela: bool,
}

impl Effects {
    /// True when applying these effects leaves a state untouched.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

/// Narrative content for one vignette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static [&'static str],
    pub options: [&'static str; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effects_deserialize_with_defaults() {
        let json = r#"{ "reputation": -10, "dead_kittens": 2 }"#;
        let effects: Effects = serde_json::from_str(json).unwrap();
        assert_eq!(effects.reputation, -10);
        assert_eq!(effects.dead_kittens, 2);
        assert_eq!(effects.ideas, 0);
        assert!(!effects.reset_pamela);
        assert!(!effects.is_noop());
        assert!(Effects::default().is_noop());
    }
}
