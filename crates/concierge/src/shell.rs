// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `concierge shell` command implementation.
//!
//! Interactive REPL with colored prompt and readline history. Creates a new
//! session per invocation; the transcript persists like any other session,
//! so a crash loses nothing but the prompt.

use colored::Colorize;
use concierge_config::ConciergeConfig;
use concierge_core::ConciergeError;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::setup::build_concierge;

/// Runs the interactive REPL until `quit`, `exit`, Ctrl+C, or Ctrl+D.
pub async fn run_shell(config: ConciergeConfig) -> Result<(), ConciergeError> {
    let concierge = build_concierge(&config).await?;
    let session_id = format!("shell-{}", uuid::Uuid::new_v4());
    debug!(session_id, "shell session started");

    let mut rl = DefaultEditor::new()
        .map_err(|e| ConciergeError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "concierge shell".bold().green());
    println!(
        "Hello, I'm your AI hotel concierge. Where would you like to stay and for which dates?"
    );
    println!("Type {} to leave.\n", "quit".yellow());

    let prompt = format!("{}> ", "you".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
                    break;
                }
                if trimmed.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(&line);

                match concierge.run_turn(&session_id, trimmed).await {
                    Ok(reply) => {
                        println!("\n{} {}\n", "concierge:".bold().cyan(), reply.text);
                        if let Some(hints) = reply.ui_action {
                            if !hints.is_empty() {
                                debug!(?hints, "ui hints");
                            }
                        }
                    }
                    Err(e) => {
                        eprintln!("{}: {e}", "error".red());
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C
                break;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D
                break;
            }
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}
