use log::{ info, warn };
use std::process::{ Command, Stdio };

/// Hand-off to the platform speech engine. Fire-and-forget: no completion
/// signal, no queueing discipline, overlapping calls are ordered by the
/// platform.
pub trait SpeechSynthesizer: Send + Sync {
    fn speak(&self, text: &str);
}

/// Speaks by spawning the platform text-to-speech command and dropping the
/// child handle. Spawn failures are logged, never propagated.
pub struct CommandSpeech {
    program: String,
}

impl CommandSpeech {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    pub fn platform_default() -> Self {
        let program = if cfg!(target_os = "macos") { "say" } else { "espeak" };
        Self::new(program)
    }
}

impl SpeechSynthesizer for CommandSpeech {
    fn speak(&self, text: &str) {
        match
            Command::new(&self.program)
                .arg(text)
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
        {
            Ok(_child) => {
                info!("Speaking via '{}'", self.program);
            }
            Err(e) => {
                warn!("Speech synthesis unavailable ('{}'): {}", self.program, e);
            }
        }
    }
}

/// Silent engine for tests and `--no-speech`.
pub struct NullSpeech;

impl SpeechSynthesizer for NullSpeech {
    fn speak(&self, _text: &str) {}
}
