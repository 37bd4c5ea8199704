//! Runtime selection of one of the five grammars.

use crate::automata::{BinaryState, EmailState, FloatState, IntegerState, PasswordState};
use crate::core::{classify, Automaton, Detector, State};
use crate::error::{GrammarError, GrammarResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the supported lexical grammars.
///
/// # Example
///
/// ```rust
/// use charstate::Grammar;
///
/// let grammar: Grammar = "float".parse().unwrap();
/// assert_eq!(grammar, Grammar::Float);
/// assert!(grammar.classify("123.456"));
/// assert!("hex".parse::<Grammar>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    Binary,
    Integer,
    Float,
    Email,
    Password,
}

impl Grammar {
    pub const ALL: [Grammar; 5] = [
        Grammar::Binary,
        Grammar::Integer,
        Grammar::Float,
        Grammar::Email,
        Grammar::Password,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    /// Whether `text` belongs to this grammar.
    pub fn classify(&self, text: &str) -> bool {
        match self {
            Self::Binary => classify::<BinaryState>(text),
            Self::Integer => classify::<IntegerState>(text),
            Self::Float => classify::<FloatState>(text),
            Self::Email => classify::<EmailState>(text),
            Self::Password => classify::<PasswordState>(text),
        }
    }

    /// Classify `text` and return every step taken, with states by name.
    pub fn trace(&self, text: &str) -> GrammarTrace {
        match self {
            Self::Binary => GrammarTrace::capture::<BinaryState>(*self, text),
            Self::Integer => GrammarTrace::capture::<IntegerState>(*self, text),
            Self::Float => GrammarTrace::capture::<FloatState>(*self, text),
            Self::Email => GrammarTrace::capture::<EmailState>(*self, text),
            Self::Password => GrammarTrace::capture::<PasswordState>(*self, text),
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Grammar {
    type Err = GrammarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bin" => Ok(Self::Binary),
            "integer" | "int" => Ok(Self::Integer),
            "float" => Ok(Self::Float),
            "email" => Ok(Self::Email),
            "password" | "complex-password" => Ok(Self::Password),
            _ => Err(GrammarError::Unknown {
                name: s.to_string(),
            }),
        }
    }
}

/// A single step of a [`GrammarTrace`].
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct NamedStep {
    pub position: usize,
    pub character: char,
    pub from: &'static str,
    pub to: &'static str,
}

/// A trace with the automaton's state type erased to state names.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct GrammarTrace {
    pub grammar: Grammar,
    pub input: String,
    pub accepted: bool,
    pub initial_state: &'static str,
    pub final_state: &'static str,
    pub sink_entered_at: Option<usize>,
    pub steps: Vec<NamedStep>,
}

impl GrammarTrace {
    fn capture<A: Automaton>(grammar: Grammar, text: &str) -> Self {
        let trace = Detector::<A>::new().trace(text);
        Self {
            grammar,
            input: text.to_string(),
            accepted: trace.accepted(),
            initial_state: trace.initial_state().name(),
            final_state: trace.final_state().name(),
            sink_entered_at: trace.sink_entered_at(),
            steps: trace
                .steps()
                .iter()
                .map(|step| NamedStep {
                    position: step.position,
                    character: step.character,
                    from: step.from.name(),
                    to: step.to.name(),
                })
                .collect(),
        }
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> GrammarResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
