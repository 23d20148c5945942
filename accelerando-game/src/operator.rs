//! The seam between a session and whoever is playing it.
//!
//! A terminal, an automated policy and a test script all implement
//! [`Operator`]; the session never reads input or prints on its own.
use std::collections::VecDeque;
use thiserror::Error;

use crate::events::EventKind;
use crate::state::GameState;

/// Raw operator text that is not a valid choice. Recovered by asking again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Please enter a valid number")]
    NotANumber(String),
    #[error("Please enter a number between 1 and {max}")]
    OutOfRange { value: i64, max: u8 },
}

/// The operator cancelled while the session was waiting on them.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Default)]
#[error("session interrupted by operator")]
pub struct OperatorInterrupt;

/// What a choice prompt is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChoiceKind {
    /// New game / load game / quit.
    MainMenu,
    /// One of the four branches of a vignette.
    Event(EventKind),
    /// Continue / save / quit after a turn.
    EndOfTurn,
    /// Continue / quit after saving.
    AfterSave,
}

/// A numbered menu the operator must pick from.
#[derive(Debug, Clone, Copy)]
pub struct ChoiceRequest<'a> {
    pub kind: ChoiceKind,
    pub options: &'a [&'a str],
    pub state: &'a GameState,
}

impl ChoiceRequest<'_> {
    /// Highest valid choice; choices are 1-based.
    #[must_use]
    pub fn max(&self) -> u8 {
        u8::try_from(self.options.len()).unwrap_or(u8::MAX)
    }
}

/// Interprets one line of operator text as a 1-based choice.
///
/// # Errors
///
/// Returns [`InputError::NotANumber`] for anything that is not an integer and
/// [`InputError::OutOfRange`] for integers outside `1..=max`.
pub fn parse_choice(raw: &str, max: u8) -> Result<u8, InputError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    match u8::try_from(value) {
        Ok(choice) if (1..=max).contains(&choice) => Ok(choice),
        _ => Err(InputError::OutOfRange { value, max }),
    }
}

/// Whoever drives a session.
pub trait Operator {
    /// Present a block of narrative text.
    fn show(&mut self, text: &str);

    /// Obtain a valid 1-based choice for `request`.
    ///
    /// # Errors
    ///
    /// Returns [`OperatorInterrupt`] when the operator cancels instead.
    fn choose(&mut self, request: &ChoiceRequest<'_>) -> Result<u8, OperatorInterrupt>;

    /// Wait for acknowledgement before continuing.
    ///
    /// # Errors
    ///
    /// Returns [`OperatorInterrupt`] when the operator cancels instead.
    fn pause(&mut self, _prompt: &str) -> Result<(), OperatorInterrupt> {
        Ok(())
    }
}

/// Replays raw input lines and records everything shown.
///
/// Lines go through [`parse_choice`] exactly as a terminal's would, so invalid
/// lines are rejected and the next one is tried. Running out of lines is an
/// interrupt, like end-of-file on a real terminal.
#[derive(Debug, Clone, Default)]
pub struct ScriptedOperator {
    lines: VecDeque<String>,
    transcript: Vec<String>,
    requests: Vec<ChoiceKind>,
    rejected: Vec<InputError>,
}

impl ScriptedOperator {
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// True when any shown block contains `needle`.
    #[must_use]
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|block| block.contains(needle))
    }

    /// Kinds of prompts answered or attempted, in order.
    #[must_use]
    pub fn requests(&self) -> &[ChoiceKind] {
        &self.requests
    }

    /// Validation failures encountered while replaying.
    #[must_use]
    pub fn rejected(&self) -> &[InputError] {
        &self.rejected
    }

    /// Lines not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl Operator for ScriptedOperator {
    fn show(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }

    fn choose(&mut self, request: &ChoiceRequest<'_>) -> Result<u8, OperatorInterrupt> {
        self.requests.push(request.kind);
        loop {
            let line = self.lines.pop_front().ok_or(OperatorInterrupt)?;
            match parse_choice(&line, request.max()) {
                Ok(choice) => return Ok(choice),
                Err(err) => {
                    self.transcript.push(err.to_string());
                    self.rejected.push(err);
                }
            }
        }
    }

    fn pause(&mut self, prompt: &str) -> Result<(), OperatorInterrupt> {
        self.transcript.push(prompt.to_string());
        self.lines.pop_front().map(|_| ()).ok_or(OperatorInterrupt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_choice_accepts_padded_digits() {
        assert_eq!(parse_choice(" 3\n", 4), Ok(3));
        assert_eq!(parse_choice("1", 1), Ok(1));
    }

    #[test]
    fn parse_choice_rejects_words_and_out_of_range() {
        assert_eq!(
            parse_choice("two", 4),
            Err(InputError::NotANumber("two".to_string()))
        );
        assert_eq!(parse_choice("", 4), Err(InputError::NotANumber(String::new())));
        assert_eq!(
            parse_choice("5", 4),
            Err(InputError::OutOfRange { value: 5, max: 4 })
        );
        assert_eq!(
            parse_choice("0", 3),
            Err(InputError::OutOfRange { value: 0, max: 3 })
        );
        assert_eq!(
            parse_choice("-2", 3),
            Err(InputError::OutOfRange { value: -2, max: 3 })
        );
        assert_eq!(
            parse_choice("1000", 3),
            Err(InputError::OutOfRange { value: 1000, max: 3 })
        );
        assert!(parse_choice("2.0", 3).is_err());
    }

    #[test]
    fn input_errors_render_reprompt_messages() {
        assert_eq!(
            InputError::OutOfRange { value: 9, max: 2 }.to_string(),
            "Please enter a number between 1 and 2"
        );
        assert_eq!(
            InputError::NotANumber("x".into()).to_string(),
            "Please enter a valid number"
        );
    }

    #[test]
    fn scripted_operator_skips_invalid_lines_then_interrupts() {
        let state = GameState::default();
        let options = ["Continue", "Quit"];
        let request = ChoiceRequest {
            kind: ChoiceKind::AfterSave,
            options: &options,
            state: &state,
        };
        let mut operator = ScriptedOperator::new(["abc", "7", "2"]);
        assert_eq!(operator.choose(&request), Ok(2));
        assert_eq!(operator.rejected().len(), 2);
        assert!(operator.saw("Please enter a number between 1 and 2"));
        assert_eq!(operator.choose(&request), Err(OperatorInterrupt));
        assert_eq!(
            operator.requests(),
            &[ChoiceKind::AfterSave, ChoiceKind::AfterSave]
        );
    }
}
