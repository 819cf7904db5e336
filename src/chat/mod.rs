use chrono::Local;
use log::{ info, error };
use std::sync::Arc;
use thiserror::Error;

use crate::models::chat::{ ConversationLog, ConversationTurn, Role };
use crate::speech::SpeechSynthesizer;
use crate::translate::Translator;
use crate::view::TranscriptView;

/// Generic apologetic notice rendered when the translation request fails.
pub const FAILURE_NOTICE: &str = "Sorry, there was an error processing your request.";

const EMPTY_MESSAGE_ALERT: &str = "Please enter a message.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Blank or whitespace-only input. The only validation in the system.
    #[error("message must not be empty")]
    EmptyMessage,
}

/// Wall-clock time of display, two-digit 24-hour fields.
pub fn current_timestamp() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// Owns the conversation log and drives the request/response exchange.
///
/// One instance per session; the log starts empty and is discarded with
/// the manager. Submissions are serialized by the `&mut self` receiver, so
/// a second submission cannot start while one is awaiting the endpoint.
pub struct ConversationManager {
    log: ConversationLog,
    translator: Arc<dyn Translator>,
    view: Box<dyn TranscriptView>,
    speech: Arc<dyn SpeechSynthesizer>,
}

impl ConversationManager {
    pub fn new(
        translator: Arc<dyn Translator>,
        view: Box<dyn TranscriptView>,
        speech: Arc<dyn SpeechSynthesizer>
    ) -> Self {
        Self {
            log: ConversationLog::new(),
            translator,
            view,
            speech,
        }
    }

    /// Handles one user submission end to end.
    ///
    /// On success both turns are appended to the log (user first) and
    /// rendered, each stamped with its own wall-clock time of display. On a
    /// request failure the log is left untouched and only a failure notice
    /// is rendered; the error is absorbed here and never propagates.
    /// `Err` is returned for validation failures alone.
    pub async fn submit(
        &mut self,
        user_message: &str,
        target_language: &str
    ) -> Result<(), SubmitError> {
        if user_message.trim().is_empty() {
            self.view.alert(EMPTY_MESSAGE_ALERT);
            return Err(SubmitError::EmptyMessage);
        }

        match self.translator.translate(user_message, target_language).await {
            Ok(model_text) => {
                self.log.push_exchange(user_message, &model_text);
                info!("Exchange completed, log now holds {} turns", self.log.len());

                self.view.append_turn(Role::User, user_message, &current_timestamp());
                self.view.append_turn(Role::Model, &model_text, &current_timestamp());
                self.view.scroll_to_latest();
                self.view.clear_input();
            }
            Err(e) => {
                error!("Error: {}", e);
                self.view.show_failure(FAILURE_NOTICE, &current_timestamp());
            }
        }

        Ok(())
    }

    /// Reads the given turn aloud; fire-and-forget.
    pub fn speak(&self, text: &str) {
        self.speech.speak(text);
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn turn(&self, index: usize) -> Option<&ConversationTurn> {
        self.log.turns().get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::Mutex;

    use crate::speech::NullSpeech;
    use crate::translate::{ TranslateError, NO_RESPONSE_FALLBACK };

    /// Endpoint double: replies with a fixed text, or fails with HTTP 500.
    struct FakeTranslator {
        reply: Option<String>,
    }

    impl FakeTranslator {
        fn replying(text: &str) -> Self {
            Self { reply: Some(text.to_string()) }
        }

        fn failing() -> Self {
            Self { reply: None }
        }
    }

    #[async_trait]
    impl Translator for FakeTranslator {
        async fn translate(
            &self,
            _message: &str,
            _target_language: &str
        ) -> Result<String, TranslateError> {
            match &self.reply {
                Some(text) => Ok(text.clone()),
                None =>
                    Err(TranslateError::RequestFailed {
                        status: StatusCode::INTERNAL_SERVER_ERROR,
                        body: r#"{"error":{"code":500,"status":"INTERNAL"}}"#.to_string(),
                    }),
            }
        }
    }

    #[derive(Default)]
    struct Recorded {
        turns: Vec<(Role, String, String)>,
        failures: Vec<(String, String)>,
        alerts: Vec<String>,
        scrolls: usize,
        input_clears: usize,
    }

    /// Transcript double that records every call for assertion. Cloning
    /// shares the underlying record so the test keeps a handle after the
    /// manager takes ownership.
    #[derive(Clone, Default)]
    struct RecordingView(Arc<Mutex<Recorded>>);

    impl TranscriptView for RecordingView {
        fn append_turn(&mut self, role: Role, text: &str, timestamp: &str) {
            self.0
                .lock()
                .unwrap()
                .turns.push((role, text.to_string(), timestamp.to_string()));
        }

        fn show_failure(&mut self, notice: &str, timestamp: &str) {
            self.0
                .lock()
                .unwrap()
                .failures.push((notice.to_string(), timestamp.to_string()));
        }

        fn alert(&mut self, message: &str) {
            self.0.lock().unwrap().alerts.push(message.to_string());
        }

        fn scroll_to_latest(&mut self) {
            self.0.lock().unwrap().scrolls += 1;
        }

        fn clear_input(&mut self) {
            self.0.lock().unwrap().input_clears += 1;
        }
    }

    fn manager_with(
        translator: FakeTranslator
    ) -> (ConversationManager, RecordingView) {
        let view = RecordingView::default();
        let manager = ConversationManager::new(
            Arc::new(translator),
            Box::new(view.clone()),
            Arc::new(NullSpeech)
        );
        (manager, view)
    }

    fn is_hh_mm_ss(stamp: &str) -> bool {
        let bytes = stamp.as_bytes();
        bytes.len() == 8 &&
            bytes[2] == b':' &&
            bytes[5] == b':' &&
            [0, 1, 3, 4, 6, 7].iter().all(|&i| bytes[i].is_ascii_digit())
    }

    #[tokio::test]
    async fn successful_exchange_appends_two_turns_in_order() {
        let (mut manager, view) = manager_with(FakeTranslator::replying("Bonjour"));

        manager.submit("Hello", "French").await.unwrap();

        let turns = manager.log().turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].role, Role::User);
        assert_eq!(turns[0].text, "Hello");
        assert_eq!(turns[1].role, Role::Model);
        assert_eq!(turns[1].text, "Bonjour");

        let recorded = view.0.lock().unwrap();
        assert_eq!(recorded.turns.len(), 2);
        assert_eq!(recorded.scrolls, 1);
        assert_eq!(recorded.input_clears, 1);
        assert!(recorded.failures.is_empty());
    }

    #[tokio::test]
    async fn blank_input_is_rejected_without_log_mutation() {
        let (mut manager, view) = manager_with(FakeTranslator::replying("unused"));

        let result = manager.submit("   ", "French").await;

        assert_eq!(result, Err(SubmitError::EmptyMessage));
        assert!(manager.log().is_empty());

        let recorded = view.0.lock().unwrap();
        assert_eq!(recorded.alerts, vec!["Please enter a message.".to_string()]);
        assert!(recorded.turns.is_empty());
        assert_eq!(recorded.input_clears, 0);
    }

    #[tokio::test]
    async fn request_failure_leaves_log_unchanged_and_shows_notice() {
        let (mut manager, view) = manager_with(FakeTranslator::failing());

        manager.submit("Hello", "French").await.unwrap();

        assert!(manager.log().is_empty());

        let recorded = view.0.lock().unwrap();
        assert!(recorded.turns.is_empty());
        assert_eq!(recorded.failures.len(), 1);
        assert_eq!(recorded.failures[0].0, FAILURE_NOTICE);
        assert!(is_hh_mm_ss(&recorded.failures[0].1));
    }

    #[tokio::test]
    async fn fallback_text_flows_through_like_any_reply() {
        let (mut manager, _view) = manager_with(
            FakeTranslator::replying(NO_RESPONSE_FALLBACK)
        );

        manager.submit("Hello", "French").await.unwrap();

        assert_eq!(manager.log().turns()[1].text, NO_RESPONSE_FALLBACK);
    }

    #[tokio::test]
    async fn each_rendered_turn_carries_its_own_timestamp() {
        let (mut manager, view) = manager_with(FakeTranslator::replying("Bonjour"));

        manager.submit("Hello", "French").await.unwrap();

        let recorded = view.0.lock().unwrap();
        for (_, _, stamp) in &recorded.turns {
            assert!(is_hh_mm_ss(stamp), "bad timestamp: {}", stamp);
        }
    }

    #[tokio::test]
    async fn log_grows_by_two_per_successful_exchange() {
        let (mut manager, _view) = manager_with(FakeTranslator::replying("oui"));

        for expected in [2, 4, 6] {
            manager.submit("again", "French").await.unwrap();
            assert_eq!(manager.log().len(), expected);
        }
    }

    #[test]
    fn current_timestamp_is_two_digit_fields() {
        assert!(is_hh_mm_ss(&current_timestamp()));
    }
}
