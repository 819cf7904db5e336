use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- Translation Endpoint Args ---
    /// API key for the generative-language endpoint. Sent as a query
    /// parameter; prefer the environment variable over the flag so the key
    /// stays out of shell history.
    #[arg(long, env = "GEMINI_API_KEY", default_value = "")]
    pub api_key: String,

    /// Model name used for the generateContent call.
    #[arg(long, env = "CHAT_MODEL", default_value = "gemini-1.5-flash-latest")]
    pub model: String,

    /// Base URL of the generative-language API.
    #[arg(
        long,
        env = "CHAT_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com/v1beta/models"
    )]
    pub base_url: String,

    /// Target language used when a submission does not name one.
    #[arg(long, env = "TARGET_LANGUAGE", default_value = "French")]
    pub target_language: String,

    // --- Generation Config Args ---
    /// Sampling temperature passed through to the model.
    #[arg(long, env = "GEN_TEMPERATURE", default_value = "1.0")]
    pub temperature: f64,

    /// Nucleus sampling parameter passed through to the model.
    #[arg(long, env = "GEN_TOP_P", default_value = "0.95")]
    pub top_p: f64,

    /// Top-k sampling parameter passed through to the model.
    #[arg(long, env = "GEN_TOP_K", default_value = "64")]
    pub top_k: u32,

    /// Output length bound for a single reply.
    #[arg(long, env = "GEN_MAX_OUTPUT_TOKENS", default_value = "100")]
    pub max_output_tokens: u32,

    // --- Speech Args ---
    /// Text-to-speech program (e.g. say, espeak). Defaults per platform.
    #[arg(long, env = "SPEECH_COMMAND")]
    pub speech_command: Option<String>,

    /// Disable speech synthesis entirely.
    #[arg(long, env = "NO_SPEECH", default_value = "false")]
    pub no_speech: bool,
}
