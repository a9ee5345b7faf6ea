use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Send a system instruction and a user prompt, return the raw text answer.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String>;
}

/// Offline client used by `--dry-run` and tests.
pub struct MockLlmClient;

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self
    }
}

/// The concept is the line right after the prompt's opening sentence.
fn concept_from_prompt(prompt: &str) -> &str {
    prompt
        .lines()
        .skip_while(|line| !line.ends_with("suivant:"))
        .nth(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .unwrap_or("Concept")
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _system: &str, prompt: &str) -> Result<String> {
        let concept = concept_from_prompt(prompt);
        let answer = serde_json::json!({
            "concept": concept,
            "description": format!(
                "{} décrit une tendance de l'esprit à filtrer et organiser l'information selon des règles implicites.",
                concept
            ),
            "techAnalogy": "Fil d'actualité des réseaux sociaux",
            "techDescription": "L'algorithme de recommandation montre surtout ce qui ressemble à ce que l'on a déjà aimé, comme l'esprit privilégie ce qui confirme ses attentes.",
            "sophistication": "Comme pour un fil d'actualité, diversifier volontairement ses sources aide à corriger le filtrage automatique."
        });
        Ok(format!("```json\n{}\n```", serde_json::to_string_pretty(&answer)?))
    }
}
