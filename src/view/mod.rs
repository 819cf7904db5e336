use log::debug;

use crate::models::chat::Role;

/// Stand-in for the scrolling transcript region and its input field.
///
/// The widget treats this surface as a collaborator: the manager decides
/// what appears and when, the surface decides how. Scrolling and input
/// clearing are modeled explicitly so a real front end can honor them.
pub trait TranscriptView: Send {
    /// Renders one turn with its timestamp and a speak affordance.
    fn append_turn(&mut self, role: Role, text: &str, timestamp: &str);

    /// Renders a failure notice in place of a model turn.
    fn show_failure(&mut self, notice: &str, timestamp: &str);

    /// Blocking user-facing alert, used for validation failures only.
    fn alert(&mut self, message: &str);

    fn scroll_to_latest(&mut self);

    fn clear_input(&mut self);
}

/// Terminal rendition of the transcript: one line per turn, timestamp at
/// the end, alerts on stderr.
#[derive(Default)]
pub struct TerminalTranscript;

impl TerminalTranscript {
    pub fn new() -> Self {
        Self
    }
}

impl TranscriptView for TerminalTranscript {
    fn append_turn(&mut self, role: Role, text: &str, timestamp: &str) {
        println!("{}: {}  [{}]", role, text, timestamp);
    }

    fn show_failure(&mut self, notice: &str, timestamp: &str) {
        println!("{}: {}  [{}]", Role::Model, notice, timestamp);
    }

    fn alert(&mut self, message: &str) {
        eprintln!("{}", message);
    }

    fn scroll_to_latest(&mut self) {
        // A terminal already shows the latest line.
        debug!("transcript scrolled to latest turn");
    }

    fn clear_input(&mut self) {
        debug!("input field cleared");
    }
}
