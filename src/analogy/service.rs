use anyhow::Result;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::types::{AnalogyData, GenerateRequest, GenerateResponse};
use crate::llm::client::LlmClient;
use crate::llm::prompts;

/// The remote generation procedure, as seen by the controller.
///
/// `Err` means the call itself failed; a well-formed call that produced no
/// usable analogy resolves to `Ok` with `success == false`.
#[async_trait]
pub trait AnalogyGenerator: Send + Sync {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse>;
}

static FENCED_JSON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:json|JSON)?\s*(\{.*\})\s*```").expect("valid fence pattern")
});

/// Pull the JSON object out of a model answer that may be wrapped in prose
/// or markdown fences.
fn extract_json_object(answer: &str) -> Option<&str> {
    if let Some(caps) = FENCED_JSON.captures(answer) {
        return caps.get(1).map(|m| m.as_str());
    }

    let start = answer.find('{')?;
    let end = answer.rfind('}')?;
    (start < end).then(|| &answer[start..=end])
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnalogy {
    concept: Option<String>,
    description: Option<String>,
    tech_analogy: Option<String>,
    tech_description: Option<String>,
    sophistication: Option<String>,
}

/// Parse a model answer into the analogy fields.
///
/// Every field must be present and non-blank.
pub fn parse_analogy(answer: &str) -> Result<AnalogyData, String> {
    let json = extract_json_object(answer).ok_or("no JSON object in model answer")?;
    let raw: RawAnalogy =
        serde_json::from_str(json).map_err(|e| format!("invalid JSON in model answer: {}", e))?;

    let mut missing = Vec::new();
    let mut take = |name: &'static str, value: Option<String>| -> String {
        match value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            Some(v) => v,
            None => {
                missing.push(name);
                String::new()
            }
        }
    };

    let data = AnalogyData {
        concept: take("concept", raw.concept),
        description: take("description", raw.description),
        tech_analogy: take("techAnalogy", raw.tech_analogy),
        tech_description: take("techDescription", raw.tech_description),
        sophistication: take("sophistication", raw.sophistication),
    };

    if missing.is_empty() {
        Ok(data)
    } else {
        Err(format!("model answer is missing: {}", missing.join(", ")))
    }
}

/// Generates analogies by prompting an LLM provider.
pub struct LlmAnalogyService {
    client: Box<dyn LlmClient>,
}

impl LlmAnalogyService {
    pub fn new(client: Box<dyn LlmClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AnalogyGenerator for LlmAnalogyService {
    async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        let prompt = prompts::build_prompt(&request.concept, request.context.as_deref());
        info!("Generating analogy for \"{}\"", request.concept);
        debug!("User prompt is {} bytes", prompt.len());

        let answer = self
            .client
            .complete(prompts::system_prompt(), &prompt)
            .await?;

        match parse_analogy(&answer) {
            Ok(data) => {
                info!("Model chose analogy: {}", data.tech_analogy);
                Ok(GenerateResponse::ok(data))
            }
            Err(reason) => {
                warn!("Unusable model answer: {}", reason);
                debug!("Raw answer: {}", answer);
                Ok(GenerateResponse::failure(reason))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::client::MockLlmClient;

    const FULL: &str = r#"{
        "concept": "Résilience",
        "description": "Capacité à rebondir.",
        "techAnalogy": "Sauvegarde automatique",
        "techDescription": "Le cloud restaure vos fichiers.",
        "sophistication": "Planifier des points de restauration."
    }"#;

    #[test]
    fn test_parse_plain_json() {
        let data = parse_analogy(FULL).unwrap();
        assert_eq!(data.concept, "Résilience");
        assert_eq!(data.tech_analogy, "Sauvegarde automatique");
    }

    #[test]
    fn test_parse_fenced_json() {
        let answer = format!("Voici l'analogie :\n```json\n{}\n```\nBonne étude !", FULL);
        assert_eq!(parse_analogy(&answer).unwrap().concept, "Résilience");
    }

    #[test]
    fn test_parse_json_surrounded_by_prose() {
        let answer = format!("Bien sûr. {} J'espère que cela aide.", FULL);
        assert!(parse_analogy(&answer).is_ok());
    }

    #[test]
    fn test_parse_reports_missing_fields() {
        let err = parse_analogy(r#"{"concept": "X", "description": "  "}"#).unwrap_err();
        assert!(err.contains("description"));
        assert!(err.contains("techAnalogy"));
        assert!(!err.contains("concept,"));
    }

    #[test]
    fn test_parse_rejects_non_json() {
        assert!(parse_analogy("Je ne peux pas répondre.").is_err());
        assert!(parse_analogy("} reversed {").is_err());
        assert!(parse_analogy("{not json}").is_err());
    }

    #[tokio::test]
    async fn test_service_with_mock_client() {
        let service = LlmAnalogyService::new(Box::new(MockLlmClient::new()));
        let response = service
            .generate(&GenerateRequest::new("Biais de confirmation", ""))
            .await
            .unwrap();
        assert!(response.success);
        assert_eq!(response.data.unwrap().concept, "Biais de confirmation");
    }
}
