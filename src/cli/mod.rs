pub mod catalog;
pub mod config_check;
pub mod generate;
pub mod prompt;
pub mod session;

use anyhow::Result;
use tracing::{info, warn};

use crate::analogy::LlmAnalogyService;
use crate::config::{Config, Provider};
use crate::controller::Controller;
use crate::llm::factory;
use crate::platform::{Clipboard, ConsoleNotifier, StdoutClipboard, SystemClipboard};

/// LLM settings given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct LlmOverrides {
    pub provider: Option<Provider>,
    pub model: Option<String>,
    pub base_url: Option<String>,
}

impl LlmOverrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(provider) = self.provider {
            info!("CLI override: provider = {}", provider);
            config.llm.provider = provider;
        }
        if let Some(ref model) = self.model {
            info!("CLI override: model = {}", model);
            config.llm.model = model.clone();
        }
        if let Some(ref base_url) = self.base_url {
            info!("CLI override: base_url = {}", base_url);
            config.llm.base_url = Some(base_url.clone());
        }
    }
}

/// Load config and apply command-line overrides.
pub fn load_config(config_path: Option<String>, overrides: &LlmOverrides) -> Result<Config> {
    let mut config = Config::load_with_path(config_path)?;
    overrides.apply(&mut config);
    Ok(config)
}

fn system_clipboard() -> Box<dyn Clipboard> {
    match SystemClipboard::detect() {
        Ok(clipboard) => Box::new(clipboard),
        Err(e) => {
            warn!("{}; copied analogies will be printed instead", e);
            Box::new(StdoutClipboard)
        }
    }
}

/// Wire a controller to the configured LLM, the system clipboard and the console.
pub fn build_controller(config: &Config, dry_run: bool) -> Result<Controller> {
    let client = factory::create_client(&config.llm, dry_run)?;
    let generator = LlmAnalogyService::new(client);
    Ok(Controller::new(
        Box::new(generator),
        system_clipboard(),
        Box::new(ConsoleNotifier),
    )
    .with_copy_on_success(config.session.copy_on_success))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply() {
        let mut config = Config::default();
        let overrides = LlmOverrides {
            provider: Some(Provider::OpenAICompatible),
            model: Some("llama3".to_string()),
            base_url: Some("http://localhost:8080/v1".to_string()),
        };
        overrides.apply(&mut config);
        assert_eq!(config.llm.provider, Provider::OpenAICompatible);
        assert_eq!(config.llm.model, "llama3");
        assert_eq!(
            config.llm.base_url.as_deref(),
            Some("http://localhost:8080/v1")
        );
    }

    #[test]
    fn test_empty_overrides_keep_config() {
        let mut config = Config::default();
        LlmOverrides::default().apply(&mut config);
        assert_eq!(config.llm.provider, Provider::Anthropic);
        assert!(config.llm.base_url.is_none());
    }

    #[test]
    fn test_build_controller_dry_run() {
        let controller = build_controller(&Config::default(), true).unwrap();
        assert!(controller.analogies().is_empty());
    }
}
