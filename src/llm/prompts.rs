// Prompt templates for analogy generation

use crate::catalog::{TechnologyCategory, CATALOG};

/// Introduces the optional academic context in the user prompt.
pub const CONTEXT_INTRO: &str = "Contexte académique: ";

const SYSTEM_PROMPT: &str = r#"Tu es un expert en psychologie et en technologie, spécialisé dans la création d'analogies pour les étudiants, enseignants et chercheurs.

Ton objectif est de rendre les concepts psychologiques TRÈS ACCESSIBLES en les comparant à des technologies que TOUT LE MONDE utilise au quotidien :
- Smartphones (iOS/Android)
- Ordinateurs (PC/Mac)
- Navigateurs web (Chrome, Firefox, Safari)
- Réseaux sociaux (Instagram, Twitter, TikTok, Facebook)
- Écouteurs Bluetooth et appareils connectés
- Services cloud (Google Drive, Dropbox, OneDrive)
- Email
- Vidéoconférence (Zoom, Teams, Meet)

Quand on te donne un concept psychologique, tu dois:
1. Expliquer le concept psychologique de manière SIMPLE et CLAIRE
2. Identifier UNE analogie technologique du quotidien qui RESSEMBLE EXACTEMENT au concept
3. Expliquer l'analogie en détail avec des exemples CONCRETS que les étudiants connaissent
4. Montrer les PARALLÈLES PRÉCIS entre la psychologie et la technologie
5. Ajouter des IMPLICATIONS PRATIQUES pour l'apprentissage ou la recherche

IMPORTANT:
- Les analogies doivent être INTUITIVES et ÉVIDENTES pour un étudiant
- Utilise des exemples que TOUT LE MONDE a expérimentés
- Évite les concepts technologiques obscurs ou trop avancés
- Rends l'analogie MÉMORABLE et FACILE À COMPRENDRE
- Ajoute des cas d'usage ACADÉMIQUES concrets

Réponds TOUJOURS en JSON avec cette structure exacte:
{
  "concept": "nom du concept psychologique",
  "description": "explication simple du concept (2-3 phrases)",
  "techAnalogy": "nom de l'analogie technologique du quotidien",
  "techDescription": "explication détaillée avec exemples concrets",
  "sophistication": "parallèles précis et implications pratiques pour les étudiants/chercheurs"
}"#;

const GENERATION_RULES: &str = r#"RÈGLES IMPORTANTES:
1. Choisis UNE SEULE technologie du quotidien que les étudiants utilisent TOUS LES JOURS
2. L'analogie doit être ÉVIDENTE et FACILE À COMPRENDRE
3. Utilise des exemples CONCRETS que les étudiants ont vécus
4. Montre comment cette analogie aide à COMPRENDRE le concept psychologique
5. Ajoute des implications PRATIQUES pour l'apprentissage ou la recherche

Assure-toi que:
- L'analogie est SIMPLE et INTUITIVE
- Elle utilise des technologies ACCESSIBLES (pas d'IA avancée, pas de blockchain, etc.)
- Elle est PERTINENTE pour les étudiants et chercheurs
- Elle aide à MÉMORISER et COMPRENDRE le concept psychologique"#;

/// System instruction sent with every generation request.
pub fn system_prompt() -> &'static str {
    SYSTEM_PROMPT
}

/// One line per category: `- Name: facet, facet, ...`
pub fn technology_list(catalog: &[TechnologyCategory]) -> String {
    catalog
        .iter()
        .map(|tech| format!("- {}: {}", tech.display_name, tech.facets.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the user prompt for a concept and optional academic context.
///
/// The caller is responsible for rejecting blank concepts. Any non-empty
/// context is embedded verbatim.
pub fn build_prompt(concept: &str, context: Option<&str>) -> String {
    let context_section = match context.filter(|c| !c.is_empty()) {
        Some(ctx) => format!("\n\n{}{}", CONTEXT_INTRO, ctx),
        None => String::new(),
    };

    format!(
        r#"Génère une analogie TRÈS ACCESSIBLE pour le concept psychologique suivant:
{concept}{context_section}

Technologies du quotidien à utiliser comme analogies:
{technologies}

{rules}"#,
        concept = concept,
        context_section = context_section,
        technologies = technology_list(CATALOG),
        rules = GENERATION_RULES,
    )
}
