// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turn entry point: wires the session adapter to the orchestrator.

use std::sync::Arc;

use concierge_catalog::Catalog;
use concierge_core::{ChatMessage, ChatProvider, ConciergeError, TurnReply};
use concierge_storage::Database;
use concierge_tools::Toolbox;
use tracing::debug;

use crate::orchestrator::Orchestrator;
use crate::session;

/// The assembled booking assistant: catalog, store, provider, and loop.
///
/// Turns for different session ids are independent. Turns for the *same*
/// session id must not run concurrently: the session upsert is
/// last-write-wins, and single-flight per session is the caller's contract.
pub struct Concierge {
    db: Database,
    orchestrator: Orchestrator,
    system_prompt: String,
}

impl Concierge {
    /// Assembles the assistant from its injected dependencies.
    pub fn new(
        db: Database,
        provider: Arc<dyn ChatProvider>,
        catalog: Arc<Catalog>,
        model: String,
        system_prompt: String,
    ) -> Self {
        let toolbox = Toolbox::new(catalog, db.clone());
        Self {
            db,
            orchestrator: Orchestrator::new(provider, toolbox, model),
            system_prompt,
        }
    }

    /// Runs one user turn for a session: load history, orchestrate, persist.
    ///
    /// A brand-new (or corrupted) session starts from a transcript seeded
    /// with the system prompt. The transcript is persisted on every
    /// completed turn, including degraded ones; only a propagated provider
    /// failure leaves the stored session untouched.
    pub async fn run_turn(
        &self,
        session_id: &str,
        user_text: &str,
    ) -> Result<TurnReply, ConciergeError> {
        let mut messages = session::load_history(&self.db, session_id)
            .await?
            .unwrap_or_else(|| vec![ChatMessage::system(&self.system_prompt)]);
        debug!(session_id, history_len = messages.len(), "turn started");

        let reply = self.orchestrator.process(&mut messages, user_text).await?;

        session::save_history(&self.db, session_id, &messages).await?;
        debug!(session_id, transcript_len = messages.len(), "turn persisted");
        Ok(reply)
    }
}
