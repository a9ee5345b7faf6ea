use anyhow::Result;
use std::env;

use crate::config::{Config, LlmConfig, Provider};
use crate::platform::SystemClipboard;

struct CheckResult {
    passed: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl CheckResult {
    fn new() -> Self {
        Self {
            passed: Vec::new(),
            warnings: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn pass(&mut self, msg: impl Into<String>) {
        self.passed.push(msg.into());
    }

    fn warn(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }
}

pub fn run(config_path: Option<String>) -> Result<()> {
    let mut results = CheckResult::new();

    // 1. Try to load config
    let config = match Config::load_with_path(config_path.clone()) {
        Ok(config) => {
            let source = config_path.as_deref().unwrap_or("default search path");
            results.pass(format!("Config loaded from {}", source));
            config
        }
        Err(e) => {
            // Reported through print_results, not propagated (would double-print)
            results.error(format!("Failed to load config: {:#}", e));
            print_results(&results);
            return Ok(());
        }
    };

    check_llm(&config.llm, &mut results);

    // Clipboard is optional: copies fall back to stdout
    match SystemClipboard::detect() {
        Ok(clipboard) => results.pass(format!("Clipboard tool: {}", clipboard.program())),
        Err(e) => results.warn(format!("{} (copies will be printed)", e)),
    }

    print_results(&results);

    if !results.errors.is_empty() {
        anyhow::bail!("{} config error(s) found", results.errors.len());
    }

    Ok(())
}

fn check_llm(llm: &LlmConfig, results: &mut CheckResult) {
    results.pass(format!(
        "LLM provider: {} (model: {}, max_tokens: {})",
        llm.provider,
        llm.model,
        llm.get_max_tokens()
    ));

    check_api_key(llm, results);

    if llm.provider == Provider::OpenAICompatible {
        if llm.base_url.is_some() {
            results.pass("Base URL configured for openai-compatible provider");
        } else {
            results.warn(
                "openai-compatible provider without base_url, using default http://localhost:11434/v1",
            );
        }
    }

    if llm.timeout_secs < 10 {
        results.warn(format!(
            "LLM timeout {}s is very short; generation usually takes longer",
            llm.timeout_secs
        ));
    }

    if !(0.0..=2.0).contains(&llm.temperature) {
        results.error(format!(
            "temperature {} is outside the 0.0-2.0 range",
            llm.temperature
        ));
    }
}

fn check_api_key(llm: &LlmConfig, results: &mut CheckResult) {
    let is_oai_compat = llm.provider == Provider::OpenAICompatible;
    let inferred = if llm.api_key_env.is_none() {
        " (inferred from provider)"
    } else {
        ""
    };

    let Some(env_var) = llm.api_key_var() else {
        results.pass("API key: not needed");
        return;
    };

    match env::var(env_var) {
        Ok(v) if !v.trim().is_empty() => {
            results.pass(format!("API key: {} is set{}", env_var, inferred));
        }
        Ok(_) if is_oai_compat => {
            results.warn(format!(
                "API key: {} is set but empty (OK for local models, needed for gateways)",
                env_var
            ));
        }
        Ok(_) => {
            results.error(format!("API key: {} is set but empty{}", env_var, inferred));
        }
        Err(_) if is_oai_compat => {
            results.warn(format!(
                "API key: {} is not set (OK for local models, needed for gateways)",
                env_var
            ));
        }
        Err(_) => {
            results.error(format!("API key: {} is not set{}", env_var, inferred));
        }
    }
}

fn print_results(results: &CheckResult) {
    println!();
    for msg in &results.passed {
        println!("  \u{2713} {}", msg);
    }
    for msg in &results.warnings {
        println!("  ! {}", msg);
    }
    for msg in &results.errors {
        println!("  \u{2717} {}", msg);
    }
    println!();
    println!(
        "{} passed, {} warnings, {} errors",
        results.passed.len(),
        results.warnings.len(),
        results.errors.len()
    );
}
