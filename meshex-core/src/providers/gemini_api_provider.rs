use std::fmt;

use async_trait::async_trait;
use meshex_model::ColorTheme;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use super::{PaletteProvider, ProviderError};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";
const GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// Palette suggestion backed by the Gemini `generateContent` endpoint.
///
/// The request pins a JSON response schema so a successful call always
/// decodes into a [`ColorTheme`]; semantic validity of the returned values
/// is deliberately not checked.
pub struct GeminiApiProvider {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl fmt::Debug for GeminiApiProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiApiProvider")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for GeminiApiProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl GeminiApiProvider {
    /// Build a provider from the environment (`GEMINI_API_KEY`, optional
    /// `GEMINI_BASE_URL`).
    pub fn new() -> Self {
        let api_key =
            std::env::var("GEMINI_API_KEY").unwrap_or_else(|_| String::new());
        let base_url = std::env::var("GEMINI_BASE_URL")
            .unwrap_or_else(|_| GEMINI_API_BASE.to_string());

        Self {
            http: reqwest::Client::new(),
            api_key,
            base_url,
        }
    }

    /// Build a provider with an explicit key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: GEMINI_API_BASE.to_string(),
        }
    }

    /// Override the service base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    fn prompt_for(mood: &str) -> String {
        format!(
            "生成一个高级感十足的弥散渐变配色方案。基于以下氛围关键词：\"{mood}\"。\n\
             提供 5 个和谐的十六进制（HEX）颜色，用于弥散渐变效果。\n\
             并提供一个适合的背景底色（通常是白色，或者主色调的极浅/极深版本）。\n\
             请用中文命名这个主题。"
        )
    }

    fn response_schema() -> Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "name": {
                    "type": "STRING",
                    "description": "主题的中文名称"
                },
                "colors": {
                    "type": "ARRAY",
                    "items": { "type": "STRING" },
                    "description": "5 个 HEX 颜色字符串"
                },
                "background": {
                    "type": "STRING",
                    "description": "1 个 HEX 背景色字符串"
                }
            },
            "required": ["name", "colors", "background"]
        })
    }

    fn parse_theme(
        body: &GenerateContentResponse,
    ) -> Result<ColorTheme, ProviderError> {
        let text = body
            .candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| content.parts.first())
            .map(|part| part.text.trim())
            .filter(|text| !text.is_empty())
            .ok_or(ProviderError::EmptyResponse)?;

        serde_json::from_str(text)
            .map_err(|err| ProviderError::ParseError(err.to_string()))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl PaletteProvider for GeminiApiProvider {
    async fn request_theme(
        &self,
        mood: &str,
    ) -> Result<ColorTheme, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::MissingApiKey);
        }

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, GEMINI_MODEL
        );
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Self::prompt_for(mood),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: Self::response_schema(),
            },
        };

        debug!(mood, "requesting palette suggestion");
        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            #[derive(Debug, Deserialize)]
            struct ErrorBody {
                #[serde(default)]
                error: Option<ErrorDetail>,
            }

            #[derive(Debug, Deserialize)]
            struct ErrorDetail {
                #[serde(default)]
                message: String,
            }

            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error)
                .map(|detail| detail.message)
                .unwrap_or_else(|| {
                    format!("palette request failed with status {status}")
                });

            return match status.as_u16() {
                401 | 403 => Err(ProviderError::InvalidApiKey),
                429 => Err(ProviderError::RateLimited),
                _ => Err(ProviderError::ApiError(message)),
            };
        }

        let body = response.json::<GenerateContentResponse>().await?;
        Self::parse_theme(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::fallback_theme;

    fn response_with_text(text: &str) -> GenerateContentResponse {
        GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(CandidateContent {
                    parts: vec![ResponsePart {
                        text: text.to_string(),
                    }],
                }),
            }],
        }
    }

    #[test]
    fn parses_a_schema_conforming_candidate() {
        let body = response_with_text(
            r##" {"name":"深海秘境","colors":["#001122","#112233","#223344","#334455","#445566"],"background":"#F0F4F8"} "##,
        );
        let theme = GeminiApiProvider::parse_theme(&body).unwrap();
        assert_eq!(theme.name, "深海秘境");
        assert_eq!(theme.colors.len(), 5);
        assert_eq!(theme.background, "#F0F4F8");
    }

    #[test]
    fn semantically_odd_values_still_parse() {
        // Shape-valid but wrong-length palettes flow through untouched.
        let body = response_with_text(
            r##"{"name":"短","colors":["#000000"],"background":"not-a-color"}"##,
        );
        let theme = GeminiApiProvider::parse_theme(&body).unwrap();
        assert_eq!(theme.colors.len(), 1);
        assert_eq!(theme.background, "not-a-color");
    }

    #[test]
    fn empty_candidates_are_an_empty_response() {
        let body = GenerateContentResponse::default();
        assert!(matches!(
            GeminiApiProvider::parse_theme(&body),
            Err(ProviderError::EmptyResponse)
        ));
    }

    #[test]
    fn non_json_text_is_a_parse_error() {
        let body = response_with_text("sorry, no palette today");
        assert!(matches!(
            GeminiApiProvider::parse_theme(&body),
            Err(ProviderError::ParseError(_))
        ));
    }

    #[tokio::test]
    async fn request_theme_without_key_fails_fast() {
        let provider = GeminiApiProvider::with_api_key("");
        assert!(matches!(
            provider.request_theme("棉花糖").await,
            Err(ProviderError::MissingApiKey)
        ));
    }

    #[tokio::test]
    async fn suggest_resolves_to_fallback_when_unreachable() {
        let provider = GeminiApiProvider::with_api_key("test-key")
            .base_url("http://127.0.0.1:9");
        let theme = provider.suggest("赛博霓虹").await;
        assert_eq!(theme, fallback_theme());
        assert_eq!(theme.background, "#FFFFFF");
        assert_eq!(theme.colors.len(), 5);
    }
}
