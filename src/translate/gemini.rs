use async_trait::async_trait;
use log::{ info, error };
use serde::{ Deserialize, Serialize };
use url::Url;

use super::{ GenerationParams, TranslateError, Translator, TranslatorConfig, NO_RESPONSE_FALLBACK };

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Debug)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize, Debug)]
struct Part {
    text: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_p: f64,
    top_k: u32,
    max_output_tokens: u32,
}

impl From<&GenerationParams> for GenerationConfig {
    fn from(params: &GenerationParams) -> Self {
        Self {
            temperature: params.temperature,
            top_p: params.top_p,
            top_k: params.top_k,
            max_output_tokens: params.max_output_tokens,
        }
    }
}

#[derive(Deserialize, Debug)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize, Debug)]
struct CandidatePart {
    text: String,
}

fn build_request(
    message: &str,
    target_language: &str,
    params: &GenerationParams
) -> GenerateRequest {
    let instruction = format!(
        "You are a translating chatbot that translates what it is given to {}",
        target_language
    );
    GenerateRequest {
        contents: vec![Content {
            role: "user".to_string(),
            parts: vec![Part { text: message.to_string() }],
        }],
        system_instruction: Content {
            role: "model".to_string(),
            parts: vec![Part { text: instruction }],
        },
        generation_config: GenerationConfig::from(params),
    }
}

/// Only the first candidate's first part is consumed; anything short of
/// that yields the fixed fallback text rather than an error.
fn extract_text(response: GenerateResponse) -> String {
    response.candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.clone())
        .unwrap_or_else(|| NO_RESPONSE_FALLBACK.to_string())
}

pub struct GeminiTranslator {
    client: reqwest::Client,
    config: TranslatorConfig,
}

impl GeminiTranslator {
    pub fn new(config: TranslatorConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Endpoint with the static credential attached as a query parameter.
    /// The key therefore ends up in client-visible request URLs; see the
    /// security note in DESIGN.md.
    fn endpoint(&self) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(
            &format!(
                "{}/{}:generateContent",
                self.config.base_url.trim_end_matches('/'),
                self.config.model
            )
        )?;
        url.query_pairs_mut().append_pair("key", &self.config.api_key);
        Ok(url)
    }
}

#[async_trait]
impl Translator for GeminiTranslator {
    async fn translate(
        &self,
        message: &str,
        target_language: &str
    ) -> Result<String, TranslateError> {
        let payload = build_request(message, target_language, &self.config.generation);
        let url = self.endpoint()?;

        info!(
            "GeminiTranslator::translate() → model={} target_language={}",
            self.config.model,
            target_language
        );

        let response = self.client.post(url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Request failed with status: {}", status);
            error!("Error details: {}", body);
            return Err(TranslateError::RequestFailed { status, body });
        }

        let parsed: GenerateResponse = response.json().await?;
        Ok(extract_text(parsed))
    }
}
