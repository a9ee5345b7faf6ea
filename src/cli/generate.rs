use anyhow::{Context, Result};
use tracing::info;

use super::{build_controller, load_config, LlmOverrides};
use crate::render;

/// One-shot generation: submit a single concept and print the result.
pub async fn run(
    concept: String,
    context: Option<String>,
    copy: bool,
    json: bool,
    config_path: Option<String>,
    overrides: LlmOverrides,
    dry_run: bool,
) -> Result<()> {
    let config = load_config(config_path, &overrides)?;
    info!("Provider: {} (model: {})", config.llm.provider, config.llm.model);
    info!("Dry run: {}", dry_run);

    let mut controller = build_controller(&config, dry_run)?;
    controller.set_concept(concept);
    controller.set_context(context.unwrap_or_default());

    let analogy = controller
        .submit()
        .await
        .context("Could not generate an analogy")?
        .clone();

    if json {
        println!("{}", serde_json::to_string_pretty(&analogy)?);
    } else {
        println!("{}", render::render_card(1, &analogy));
    }

    // copy_on_success already copied it
    if copy && !config.session.copy_on_success {
        controller.copy(0);
    }

    Ok(())
}
