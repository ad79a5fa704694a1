// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The two-round agent loop.
//!
//! One user turn is: model call #1 with tools enabled; if the model
//! requested tools, dispatch each one locally and append its result to the
//! transcript; model call #2 with tools disabled for the natural-language
//! summary. Provider failures degrade to user-safe replies wherever the
//! contract allows; only an unrecognized call-1 failure propagates.

use std::sync::Arc;
use std::sync::LazyLock;

use concierge_core::{
    ChatMessage, ChatProvider, ChatRequest, ConciergeError, ToolChoice, TurnReply, UiHints,
};
use concierge_tools::{ToolCall, Toolbox, tool_definitions};
use regex::Regex;
use serde_json::json;
use tracing::{debug, error, warn};

/// Marker some providers put in the error body when the model failed to
/// generate well-formed tool arguments.
const TOOL_USE_FAILED: &str = "tool_use_failed";

/// Extracts the city the model was trying to search from a raw provider
/// error body.
static CITY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""city":\s*"([^"]+)""#).unwrap());

/// Drives the two-round loop over an in-memory transcript.
pub struct Orchestrator {
    provider: Arc<dyn ChatProvider>,
    toolbox: Toolbox,
    model: String,
}

impl Orchestrator {
    /// Creates an orchestrator over a provider and a toolbox.
    pub fn new(provider: Arc<dyn ChatProvider>, toolbox: Toolbox, model: String) -> Self {
        Self {
            provider,
            toolbox,
            model,
        }
    }

    fn request(&self, messages: &[ChatMessage], tool_choice: ToolChoice) -> ChatRequest {
        ChatRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            tools: tool_definitions(),
            tool_choice,
        }
    }

    /// Processes one user message against the transcript.
    ///
    /// Appends the user turn, the assistant turn, and any tool results to
    /// `messages`; the call-2 summary text is returned but not appended.
    pub async fn process(
        &self,
        messages: &mut Vec<ChatMessage>,
        user_text: &str,
    ) -> Result<TurnReply, ConciergeError> {
        messages.push(ChatMessage::user(user_text));

        // Model call 1: tools enabled, model decides.
        let reply = match self.provider.chat(self.request(messages, ToolChoice::Auto)).await {
            Ok(reply) => reply,
            Err(e) => {
                let text = e.to_string();
                if text.contains(TOOL_USE_FAILED) {
                    warn!("tool argument generation failed, returning clarifying reply");
                    return Ok(clarifying_reply(&text));
                }
                return Err(e);
            }
        };

        messages.push(reply.to_message());

        // No tools requested: the turn is already answered.
        if !reply.has_tool_calls() {
            return Ok(TurnReply {
                text: reply.content.unwrap_or_default(),
                ui_action: None,
            });
        }

        // Dispatch each requested call, in model order, one at a time.
        let mut hints = UiHints::default();
        for request in &reply.tool_calls {
            let name = &request.function.name;
            let payload = match ToolCall::parse(name, &request.function.arguments) {
                Ok(call) => {
                    match &call {
                        ToolCall::SearchHotels(args) => {
                            hints.filter_city = Some(args.city.clone());
                        }
                        ToolCall::ShowHotelDetails(args) => {
                            hints.show_hotel_details = Some(args.hotel_id.clone());
                        }
                        _ => {}
                    }
                    self.toolbox.dispatch(&call).await?
                }
                // Unknown tool or malformed arguments: report through the
                // tool-result channel so the model can recover.
                Err(e) => {
                    warn!(tool = %name, error = %e, "tool call rejected");
                    json!({"error": e.to_string()})
                }
            };
            messages.push(ChatMessage::tool(&request.id, name, payload.to_string()));
        }

        debug!(
            tool_calls = reply.tool_calls.len(),
            "tool round complete, requesting summary"
        );

        // Model call 2: summarize the tool results; no further tool calls.
        let text = match self.provider.chat(self.request(messages, ToolChoice::None)).await {
            Ok(final_reply) => final_reply.content.unwrap_or_default(),
            Err(e) => {
                let text = e.to_string();
                if text.contains(TOOL_USE_FAILED) {
                    let city = serde_json::to_string(hints.filter_city.as_deref().unwrap_or(""))
                        .unwrap_or_default();
                    format!(
                        "I found some results but had trouble summarizing them. Here are the hotels I found: {city}"
                    )
                } else {
                    error!(error = %text, "final completion failed");
                    "I encountered an error generating the final response. Please try again."
                        .to_string()
                }
            }
        };

        Ok(TurnReply {
            text,
            ui_action: Some(hints),
        })
    }
}

/// Builds the degraded clarifying reply for a call-1 tool-argument failure,
/// salvaging the city from the raw error text when possible.
fn clarifying_reply(error_text: &str) -> TurnReply {
    let city = CITY_PATTERN
        .captures(error_text)
        .map(|caps| caps[1].to_string());
    let city_hint = city
        .as_deref()
        .map(|c| format!(" in {c}"))
        .unwrap_or_default();

    TurnReply {
        text: format!(
            "I'd love to help you find hotels{city_hint}! To show you the best options, \
             I'll need your travel dates and number of guests. When are you planning to visit?"
        ),
        ui_action: Some(UiHints {
            filter_city: city,
            show_hotel_details: None,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clarifying_reply_extracts_city_from_error_body() {
        let reply = clarifying_reply(
            r#"API error (invalid_request_error, code tool_use_failed): Failed to call a function, got {"city": "Paris", "budget": 0}"#,
        );
        assert!(reply.text.contains("hotels in Paris!"), "got: {}", reply.text);
        assert_eq!(
            reply.ui_action.unwrap().filter_city.as_deref(),
            Some("Paris")
        );
    }

    #[test]
    fn clarifying_reply_without_city_stays_generic() {
        let reply = clarifying_reply("API error: tool_use_failed, no arguments recovered");
        assert!(reply.text.starts_with("I'd love to help you find hotels!"));
        assert!(reply.ui_action.unwrap().filter_city.is_none());
    }
}
