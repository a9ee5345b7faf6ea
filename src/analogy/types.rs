use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The five fields the model answers with. camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalogyData {
    pub concept: String,
    pub description: String,
    pub tech_analogy: String,
    pub tech_description: String,
    pub sophistication: String,
}

/// Input of one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub concept: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl GenerateRequest {
    /// An empty context is sent as absent.
    pub fn new(concept: impl Into<String>, context: impl Into<String>) -> Self {
        let context = context.into();
        Self {
            concept: concept.into(),
            context: if context.is_empty() {
                None
            } else {
                Some(context)
            },
        }
    }
}

/// Result shape of the generation procedure: `{success, data?, error?}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<AnalogyData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateResponse {
    pub fn ok(data: AnalogyData) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// The payload, only when the response is a complete success.
    pub fn into_data(self) -> Result<AnalogyData, String> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err("response reported success without data".to_string()),
            (false, _) => Err(self
                .error
                .unwrap_or_else(|| "generation reported failure".to_string())),
        }
    }
}

/// An analogy kept in the session list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedAnalogy {
    pub concept: String,
    pub description: String,
    pub tech_analogy: String,
    pub tech_description: String,
    pub sophistication: String,
    pub created_at: DateTime<Utc>,
}

impl GeneratedAnalogy {
    pub fn new(data: AnalogyData, created_at: DateTime<Utc>) -> Self {
        Self {
            concept: data.concept,
            description: data.description,
            tech_analogy: data.tech_analogy,
            tech_description: data.tech_description,
            sophistication: data.sophistication,
            created_at,
        }
    }

    /// Flat text written to the clipboard. The sophistication note is left out.
    pub fn clipboard_text(&self) -> String {
        format!(
            "{}\n\n{}\n\n→ {}\n\n{}",
            self.concept, self.description, self.tech_analogy, self.tech_description
        )
    }
}
