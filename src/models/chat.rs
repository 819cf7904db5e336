use serde::{ Serialize, Deserialize };
use std::fmt;

/// Author of a single conversation turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "You"),
            Role::Model => write!(f, "AI"),
        }
    }
}

/// One message in the conversation. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub text: String,
}

/// In-memory conversation log, insertion order = chronological order.
///
/// Turns are only ever appended in user/model pairs, so the log length is
/// even after every completed exchange. A failed exchange appends nothing.
/// The log lives for the duration of the session; there is no persistence.
#[derive(Clone, Debug, Default)]
pub struct ConversationLog {
    turns: Vec<ConversationTurn>,
}

impl ConversationLog {
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// Appends the user turn followed by its model turn.
    ///
    /// This is the only way turns enter the log, which keeps the
    /// even-length invariant by construction.
    pub fn push_exchange(&mut self, user_text: &str, model_text: &str) {
        self.turns.push(ConversationTurn {
            role: Role::User,
            text: user_text.to_string(),
        });
        self.turns.push(ConversationTurn {
            role: Role::Model,
            text: model_text.to_string(),
        });
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}
