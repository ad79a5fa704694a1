// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transcript and provider types shared across the Concierge workspace.
//!
//! [`ChatMessage`] is both the persisted transcript element and the
//! OpenAI-compatible wire shape: the session `context` blob is the plain
//! `serde_json` serialization of `Vec<ChatMessage>`, replayed verbatim to
//! the provider on every turn.

use serde::{Deserialize, Serialize};

/// Role of a transcript message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
    Tool,
}

/// A tool invocation requested by the model.
///
/// `function.arguments` is the raw JSON-encoded argument string exactly as
/// the provider returned it; parsing is the tool layer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// Provider-assigned call id; tool-result messages echo it back.
    pub id: String,
    /// Call type tag (always "function").
    #[serde(rename = "type")]
    pub call_type: String,
    /// The requested function and its argument blob.
    pub function: FunctionCall,
}

/// Function name and JSON-encoded arguments within a tool call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: String,
}

/// One message in the conversation transcript.
///
/// Invariant: every `Tool`-role message references a `tool_call_id` from the
/// immediately preceding assistant message's `tool_calls` list, in matching
/// order. The provider rejects transcripts that violate this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,

    /// Text content. Absent on assistant messages that only carry tool calls.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Tool invocations requested by the model (assistant role only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCallRequest>>,

    /// Id of the tool call this message answers (tool role only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,

    /// Function name this message answers (tool role only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ChatMessage {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
            name: None,
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: None,
            name: None,
        }
    }

    /// Creates an assistant message with optional content and tool calls.
    pub fn assistant(content: Option<String>, tool_calls: Vec<ToolCallRequest>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content,
            tool_calls: if tool_calls.is_empty() {
                None
            } else {
                Some(tool_calls)
            },
            tool_call_id: None,
            name: None,
        }
    }

    /// Creates a tool-result message keyed to a call id.
    pub fn tool(
        tool_call_id: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            role: ChatRole::Tool,
            content: Some(content.into()),
            tool_calls: None,
            tool_call_id: Some(tool_call_id.into()),
            name: Some(name.into()),
        }
    }
}

/// A tool definition in the provider's function-calling format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Definition type tag (always "function").
    #[serde(rename = "type")]
    pub def_type: String,
    pub function: FunctionDefinition,
}

/// Function name, description, and JSON Schema parameters of a tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

impl ToolDefinition {
    /// Creates a function tool definition.
    pub fn function(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            def_type: "function".to_string(),
            function: FunctionDefinition {
                name: name.into(),
                description: description.into(),
                parameters,
            },
        }
    }
}

/// Tool-choice mode for a provider request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolChoice {
    /// The model decides whether to call tools.
    Auto,
    /// Tool calls are disabled; the model must answer in text.
    None,
}

/// A chat completion request handed to a [`ChatProvider`](crate::ChatProvider).
///
/// The tool layer generates `tools`; the orchestrator picks the
/// `tool_choice` mode per round.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub tools: Vec<ToolDefinition>,
    pub tool_choice: ToolChoice,
}

/// The assistant message extracted from a provider response.
#[derive(Debug, Clone, Default)]
pub struct AssistantReply {
    pub content: Option<String>,
    pub tool_calls: Vec<ToolCallRequest>,
}

impl AssistantReply {
    /// Returns true if the model requested at least one tool call.
    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls.is_empty()
    }

    /// Converts the reply into the transcript message to append.
    pub fn to_message(&self) -> ChatMessage {
        ChatMessage::assistant(self.content.clone(), self.tool_calls.clone())
    }
}

/// Presentation hints returned alongside the reply text.
///
/// Side channel for the caller only; never sent to the model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiHints {
    /// City the front end should filter the hotel list by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_city: Option<String>,

    /// Hotel id whose detail page the front end should open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_hotel_details: Option<String>,
}

impl UiHints {
    /// Returns true if no hint has been set.
    pub fn is_empty(&self) -> bool {
        self.filter_city.is_none() && self.show_hotel_details.is_none()
    }
}

/// The result of one user turn: reply text plus optional UI hints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnReply {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ui_action: Option<UiHints>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_user_message_minimal() {
        let msg = ChatMessage::user("Hello");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "Hello");
        assert!(json.get("tool_calls").is_none());
        assert!(json.get("tool_call_id").is_none());
        assert!(json.get("name").is_none());
    }

    #[test]
    fn serialize_assistant_message_with_tool_calls() {
        let msg = ChatMessage::assistant(
            None,
            vec![ToolCallRequest {
                id: "call_1".into(),
                call_type: "function".into(),
                function: FunctionCall {
                    name: "search_hotels".into(),
                    arguments: r#"{"city":"Paris"}"#.into(),
                },
            }],
        );
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "assistant");
        assert!(json.get("content").is_none());
        assert_eq!(json["tool_calls"][0]["id"], "call_1");
        assert_eq!(json["tool_calls"][0]["type"], "function");
        assert_eq!(json["tool_calls"][0]["function"]["name"], "search_hotels");
        assert_eq!(
            json["tool_calls"][0]["function"]["arguments"],
            r#"{"city":"Paris"}"#
        );
    }

    #[test]
    fn assistant_with_empty_tool_calls_omits_field() {
        let msg = ChatMessage::assistant(Some("Hi there".into()), vec![]);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["content"], "Hi there");
        assert!(json.get("tool_calls").is_none());
    }

    #[test]
    fn serialize_tool_result_message() {
        let msg = ChatMessage::tool("call_1", "search_hotels", r#"[{"id":"h1"}]"#);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "tool");
        assert_eq!(json["tool_call_id"], "call_1");
        assert_eq!(json["name"], "search_hotels");
        assert_eq!(json["content"], r#"[{"id":"h1"}]"#);
    }

    #[test]
    fn transcript_round_trips_through_json() {
        let transcript = vec![
            ChatMessage::system("You are a hotel concierge."),
            ChatMessage::user("Find me a hotel in Tokyo"),
            ChatMessage::assistant(
                None,
                vec![ToolCallRequest {
                    id: "call_abc".into(),
                    call_type: "function".into(),
                    function: FunctionCall {
                        name: "search_hotels".into(),
                        arguments: r#"{"city":"Tokyo"}"#.into(),
                    },
                }],
            ),
            ChatMessage::tool("call_abc", "search_hotels", "[]"),
        ];
        let blob = serde_json::to_string(&transcript).unwrap();
        let restored: Vec<ChatMessage> = serde_json::from_str(&blob).unwrap();
        assert_eq!(restored, transcript);
    }

    #[test]
    fn tool_definition_serializes_in_function_format() {
        let def = ToolDefinition::function(
            "cancel_reservation",
            "Cancel an existing reservation.",
            serde_json::json!({
                "type": "object",
                "properties": {"reservation_id": {"type": "string"}},
                "required": ["reservation_id"]
            }),
        );
        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["type"], "function");
        assert_eq!(json["function"]["name"], "cancel_reservation");
        assert!(json["function"]["parameters"]["properties"]["reservation_id"].is_object());
    }

    #[test]
    fn tool_choice_serializes_lowercase() {
        assert_eq!(serde_json::to_value(ToolChoice::Auto).unwrap(), "auto");
        assert_eq!(serde_json::to_value(ToolChoice::None).unwrap(), "none");
    }

    #[test]
    fn ui_hints_skip_unset_fields() {
        let hints = UiHints {
            filter_city: Some("Paris".into()),
            show_hotel_details: None,
        };
        let json = serde_json::to_value(&hints).unwrap();
        assert_eq!(json["filter_city"], "Paris");
        assert!(json.get("show_hotel_details").is_none());

        assert!(UiHints::default().is_empty());
        assert!(!hints.is_empty());
    }

    #[test]
    fn turn_reply_omits_absent_ui_action() {
        let reply = TurnReply {
            text: "Done".into(),
            ui_action: None,
        };
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["text"], "Done");
        assert!(json.get("ui_action").is_none());
    }

    #[test]
    fn assistant_reply_to_message() {
        let reply = AssistantReply {
            content: Some("Looking now".into()),
            tool_calls: vec![ToolCallRequest {
                id: "c1".into(),
                call_type: "function".into(),
                function: FunctionCall {
                    name: "recommend_activities".into(),
                    arguments: r#"{"city":"London"}"#.into(),
                },
            }],
        };
        assert!(reply.has_tool_calls());
        let msg = reply.to_message();
        assert_eq!(msg.role, ChatRole::Assistant);
        assert_eq!(msg.tool_calls.as_ref().unwrap().len(), 1);
    }
}
