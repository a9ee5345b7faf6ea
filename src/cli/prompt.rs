use anyhow::{bail, Result};

use crate::llm::prompts;

/// Print the prompt that would be sent for a concept, without calling a model.
pub fn run(concept: String, context: Option<String>, system: bool) -> Result<()> {
    if concept.trim().is_empty() {
        bail!("Concept must not be empty");
    }

    if system {
        println!("{}", prompts::system_prompt());
        println!();
        println!("---");
        println!();
    }
    println!("{}", prompts::build_prompt(&concept, context.as_deref()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_concept_rejected() {
        assert!(run("  ".to_string(), None, false).is_err());
    }

    #[test]
    fn test_prints_prompt() {
        assert!(run("Résilience".to_string(), Some("L1".to_string()), true).is_ok());
    }
}
