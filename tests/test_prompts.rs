use psychotech::catalog::CATALOG;
use psychotech::llm::prompts::{build_prompt, system_prompt, CONTEXT_INTRO};

const CONCEPTS: &[&str] = &[
    "Biais de confirmation",
    "Transfert émotionnel",
    "Résilience",
    "Dissonance cognitive (Festinger, 1957)",
    "  espaces autour  ",
    "{accolades} et \"guillemets\"",
];

#[test]
fn test_build_prompt_is_pure() {
    for concept in CONCEPTS {
        for context in [None, Some("Pour un cours de psychologie cognitive")] {
            assert_eq!(
                build_prompt(concept, context),
                build_prompt(concept, context),
                "non-deterministic output for {:?}",
                concept
            );
        }
    }
}

#[test]
fn test_build_prompt_contains_concept_verbatim() {
    for concept in CONCEPTS {
        let prompt = build_prompt(concept, Some("contexte"));
        assert!(prompt.contains(concept), "missing {:?}", concept);
    }
}

#[test]
fn test_every_category_appears_exactly_once() {
    let prompt = build_prompt("Résilience", Some("Recherche sur le comportement utilisateur"));
    for category in CATALOG {
        assert_eq!(
            prompt.matches(category.display_name).count(),
            1,
            "{} should be listed once",
            category.display_name
        );
    }
}

#[test]
fn test_every_facet_is_listed() {
    let prompt = build_prompt("Résilience", None);
    for category in CATALOG {
        let line = format!("- {}: {}", category.display_name, category.facets.join(", "));
        assert!(prompt.contains(&line), "missing line for {}", category.key);
    }
}

#[test]
fn test_context_fragment_absent_without_context() {
    let prompt = build_prompt("Résilience", None);
    assert!(!prompt.contains(CONTEXT_INTRO.trim()));
}

#[test]
fn test_context_fragment_present_with_context() {
    let prompt = build_prompt("Résilience", Some("Séminaire de master"));
    assert!(prompt.contains("\n\nContexte académique: Séminaire de master\n"));
    let concept_pos = prompt.find("Résilience").unwrap();
    let context_pos = prompt.find("Séminaire de master").unwrap();
    assert!(concept_pos < context_pos);
}

#[test]
fn test_prompt_layout() {
    let prompt = build_prompt("Résilience", None);
    assert!(prompt.starts_with(
        "Génère une analogie TRÈS ACCESSIBLE pour le concept psychologique suivant:\nRésilience\n\n"
    ));
    assert!(prompt.contains("Technologies du quotidien à utiliser comme analogies:\n- Smartphones: "));
    assert!(prompt.contains("RÈGLES IMPORTANTES:"));
    assert!(prompt.ends_with("Elle aide à MÉMORISER et COMPRENDRE le concept psychologique"));
}

#[test]
fn test_system_prompt_is_stable() {
    assert_eq!(system_prompt(), system_prompt());
    assert!(system_prompt().contains("Réponds TOUJOURS en JSON"));
}
