pub mod gemini;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::cli::Args;

pub use self::gemini::GeminiTranslator;

/// Fixed text shown when a successful response carries no usable candidate.
pub const NO_RESPONSE_FALLBACK: &str = "No response from the model.";

#[derive(Debug, Error)]
pub enum TranslateError {
    /// Non-success HTTP status from the endpoint. The structured error body
    /// is kept verbatim for logging; nothing else consumes it.
    #[error("translation request failed with status {status}: {body}")]
    RequestFailed {
        status: StatusCode,
        body: String,
    },

    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// The sole network operation of the system: one request, one suspension
/// point, no retries, no timeout, no cancellation.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        message: &str,
        target_language: &str
    ) -> Result<String, TranslateError>;
}

/// Sampling parameters passed through to the model. They shape response
/// style only; correctness does not depend on them.
#[derive(Clone, Debug)]
pub struct GenerationParams {
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            top_p: 0.95,
            top_k: 64,
            max_output_tokens: 100,
        }
    }
}

#[derive(Clone, Debug)]
pub struct TranslatorConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub generation: GenerationParams,
}

impl TranslatorConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            api_key: args.api_key.clone(),
            model: args.model.clone(),
            base_url: args.base_url.clone(),
            generation: GenerationParams {
                temperature: args.temperature,
                top_p: args.top_p,
                top_k: args.top_k,
                max_output_tokens: args.max_output_tokens,
            },
        }
    }
}
