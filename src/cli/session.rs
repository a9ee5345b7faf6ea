//! Interactive session: the terminal counterpart of the analogy page.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use super::{build_controller, load_config, LlmOverrides};
use crate::catalog::CATALOG;
use crate::controller::{Controller, SubmitError};
use crate::render;

const HELP: &str = "\
Tapez un concept psychologique puis Entrée pour générer une analogie.

Commandes :
  :context <texte>   définir le contexte académique (vide pour l'effacer)
  :retry             relancer le dernier concept après une erreur
  :list              afficher les analogies générées
  :copy [n]          copier l'analogie n (1 = la plus récente)
  :catalog           afficher les technologies disponibles
  :help              afficher cette aide
  :quit              quitter";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Submit(String),
    Retry,
    SetContext(String),
    List,
    Copy(usize),
    Catalog,
    Help,
    Quit,
    Unknown(String),
}

/// Parse one input line. Plain text is a concept; `:`-prefixed words are commands.
pub fn parse_line(line: &str) -> SessionCommand {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix(':') else {
        return SessionCommand::Submit(line.trim_end_matches(['\r', '\n']).to_string());
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    match name {
        "context" | "ctx" => SessionCommand::SetContext(arg.to_string()),
        "retry" | "r" => SessionCommand::Retry,
        "list" | "ls" => SessionCommand::List,
        "copy" | "cp" => {
            if arg.is_empty() {
                return SessionCommand::Copy(1);
            }
            match arg.parse::<usize>() {
                Ok(n) if n >= 1 => SessionCommand::Copy(n),
                _ => SessionCommand::Unknown(trimmed.to_string()),
            }
        }
        "catalog" => SessionCommand::Catalog,
        "help" | "h" | "?" => SessionCommand::Help,
        "quit" | "q" | "exit" => SessionCommand::Quit,
        _ => SessionCommand::Unknown(trimmed.to_string()),
    }
}

async fn submit(controller: &mut Controller) {
    if controller.can_submit() {
        eprintln!("Génération en cours...");
    }
    match controller.submit().await {
        Ok(analogy) => println!("\n{}", render::render_card(1, analogy)),
        // Notices already went to the user
        Err(SubmitError::EmptyConcept) | Err(SubmitError::Busy) => {}
        Err(SubmitError::Remote(reason)) => {
            debug!("Submission failed: {}", reason);
            eprintln!("Le concept est conservé : tapez :retry pour relancer.");
        }
    }
}

/// Apply one command. Returns false when the session should end.
pub async fn handle(controller: &mut Controller, command: SessionCommand) -> bool {
    match command {
        SessionCommand::Submit(concept) => {
            controller.set_concept(concept);
            submit(controller).await;
        }
        SessionCommand::Retry => submit(controller).await,
        SessionCommand::SetContext(context) => {
            if context.is_empty() {
                eprintln!("Contexte effacé.");
            } else {
                eprintln!("Contexte : {}", context);
            }
            controller.set_context(context);
        }
        SessionCommand::List => {
            if controller.analogies().is_empty() {
                println!(
                    "Commencez par entrer un concept psychologique pour générer une analogie technologique sophistiquée."
                );
            } else {
                println!("{}", render::render_list(controller.analogies()));
            }
        }
        SessionCommand::Copy(n) => {
            if !controller.copy(n - 1) {
                eprintln!("Aucune analogie n°{}.", n);
            }
        }
        SessionCommand::Catalog => print!("{}", super::catalog::render(CATALOG, true)),
        SessionCommand::Help => println!("{}", HELP),
        SessionCommand::Quit => return false,
        SessionCommand::Unknown(input) => {
            eprintln!("Commande inconnue : {} (tapez :help)", input);
        }
    }
    true
}

pub async fn run(
    context: Option<String>,
    config_path: Option<String>,
    overrides: LlmOverrides,
    dry_run: bool,
) -> Result<()> {
    let config = load_config(config_path, &overrides)?;
    info!("Provider: {} (model: {})", config.llm.provider, config.llm.model);

    let mut controller = build_controller(&config, dry_run)?;
    if let Some(context) = context {
        controller.set_context(context);
    }

    println!("Analogies Psycho-Tech");
    println!("{}\n", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        if !handle(&mut controller, parse_line(&line)).await {
            break;
        }
    }

    info!(
        "Session ended with {} analogies",
        controller.analogies().len()
    );
    Ok(())
}
