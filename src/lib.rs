pub mod chat;
pub mod cli;
pub mod models;
pub mod panel;
pub mod speech;
pub mod translate;
pub mod view;

use chat::ConversationManager;
use cli::Args;
use log::{ info, warn };
use panel::PanelState;
use speech::{ CommandSpeech, NullSpeech, SpeechSynthesizer };
use std::error::Error;
use std::sync::Arc;
use tokio::io::{ AsyncBufReadExt, BufReader };
use translate::{ GeminiTranslator, TranslatorConfig };
use view::TerminalTranscript;

fn build_speech(args: &Args) -> Arc<dyn SpeechSynthesizer> {
    if args.no_speech {
        return Arc::new(NullSpeech);
    }
    match &args.speech_command {
        Some(program) => Arc::new(CommandSpeech::new(program.clone())),
        None => Arc::new(CommandSpeech::platform_default()),
    }
}

/// Splits a submission line into message and target language. A trailing
/// `:: language` overrides the configured default.
fn parse_submission<'a>(line: &'a str, default_language: &'a str) -> (&'a str, &'a str) {
    match line.rsplit_once("::") {
        Some((message, language)) if !language.trim().is_empty() => {
            (message.trim_end(), language.trim())
        }
        _ => (line, default_language),
    }
}

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Model: {}", args.model);
    info!("Base URL: {}", args.base_url);
    info!("Default Target Language: {}", args.target_language);
    info!(
        "Generation: temperature={} top_p={} top_k={} max_output_tokens={}",
        args.temperature,
        args.top_p,
        args.top_k,
        args.max_output_tokens
    );
    info!("Speech Enabled: {}", !args.no_speech);
    info!("-------------------------");

    if args.api_key.is_empty() {
        warn!("No API key configured; translation requests will be rejected by the endpoint");
    }

    let translator = Arc::new(GeminiTranslator::new(TranslatorConfig::from_args(&args)));
    let mut manager = ConversationManager::new(
        translator,
        Box::new(TerminalTranscript::new()),
        build_speech(&args)
    );

    // Startup mirrors the page load: probe network status once. The
    // terminal stand-in has no status signal of its own, so it assumes
    // online; /online and /offline replay the platform events by hand.
    let mut panel = PanelState::new();
    panel.on_network_status_changed(true);
    info!("Chat toggle is available. Commands: /toggle /online /offline /say <n> /quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim_end().to_string();
        match line.as_str() {
            "/quit" => {
                break;
            }
            "/toggle" => {
                panel.on_toggle_pressed();
                info!(
                    "Chat panel is now {}",
                    if panel.panel_visible() { "visible" } else { "hidden" }
                );
            }
            "/online" => {
                panel.on_network_status_changed(true);
            }
            "/offline" => {
                panel.on_network_status_changed(false);
            }
            command if command.starts_with("/say") => {
                let index = command
                    .strip_prefix("/say")
                    .map(str::trim)
                    .and_then(|n| n.parse::<usize>().ok());
                match index.and_then(|i| manager.turn(i)) {
                    Some(turn) => {
                        let text = turn.text.clone();
                        manager.speak(&text);
                    }
                    None => warn!("No such turn; usage: /say <turn index>"),
                }
            }
            _ => {
                if !panel.panel_visible() {
                    info!("The chat panel is hidden. Use /toggle to open it.");
                    continue;
                }
                let (message, language) = parse_submission(&line, &args.target_language);
                // Validation failures already surfaced an alert; nothing
                // else to do with them here.
                let _ = manager.submit(message, language).await;
            }
        }
    }

    info!("Session ended with {} turns in the log", manager.log().len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_defaults_to_configured_language() {
        assert_eq!(parse_submission("Hello", "French"), ("Hello", "French"));
    }

    #[test]
    fn submission_suffix_overrides_language() {
        assert_eq!(
            parse_submission("Hello :: Spanish", "French"),
            ("Hello", "Spanish")
        );
    }

    #[test]
    fn empty_suffix_falls_back_to_default() {
        assert_eq!(parse_submission("Hello ::", "French"), ("Hello ::", "French"));
    }
}
