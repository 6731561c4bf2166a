//! Transcript model and wire types for the assistant side panel.

use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

use crate::config::ChatConfig;
use crate::error::ChatError;

pub const FALLBACK_REPLY: &str = "Sorry, I couldn't get a response right now.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: ChatRole::User, text: text.into() }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self { role: ChatRole::Assistant, text: text.into() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatTranscript {
    pub turns: Vec<ChatTurn>,
    pub sending: bool,
}

impl ChatTranscript {
    pub fn new(greeting: &str) -> Self {
        Self { turns: vec![ChatTurn::assistant(greeting)], sending: false }
    }

    /// Whether `text` would be accepted by [`ChatAction::Send`].
    pub fn can_send(&self, text: &str) -> bool {
        !self.sending && !text.trim().is_empty()
    }
}

#[derive(Clone, Debug)]
pub enum ChatAction {
    Send(String),
    Reply(String),
    Failed(String),
}

impl Reducible for ChatTranscript {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            ChatAction::Send(text) => {
                if !self.can_send(&text) {
                    return self;
                }
                new.turns.push(ChatTurn::user(text.trim()));
                new.sending = true;
            }
            ChatAction::Reply(text) => {
                new.turns.push(ChatTurn::assistant(text));
                new.sending = false;
            }
            ChatAction::Failed(message) => {
                new.turns.push(ChatTurn::assistant(format!(
                    "Error: {message}. Check your internet or API key."
                )));
                new.sending = false;
            }
        }
        Rc::new(new)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<WireMessage>,
}

impl ChatRequest {
    /// System preamble first, then the transcript in order.
    pub fn from_transcript(cfg: &ChatConfig, turns: &[ChatTurn]) -> Self {
        let preamble = WireMessage { role: ChatRole::System, content: cfg.system_prompt.clone() };
        let messages = std::iter::once(preamble)
            .chain(turns.iter().map(|t| WireMessage {
                role: match t.role {
                    ChatRole::User => ChatRole::User,
                    _ => ChatRole::Assistant,
                },
                content: t.text.clone(),
            }))
            .collect();
        Self { model: cfg.model.clone(), messages }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<WireReply>,
}

#[derive(Debug, Deserialize)]
struct WireReply {
    content: Option<String>,
}

/// Extracts the first choice's text, falling back to [`FALLBACK_REPLY`].
pub fn parse_reply(body: &str) -> Result<String, ChatError> {
    let resp: ChatResponse =
        serde_json::from_str(body).map_err(|e| ChatError::Decode(e.to_string()))?;
    Ok(resp
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| FALLBACK_REPLY.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reduce(t: ChatTranscript, a: ChatAction) -> ChatTranscript {
        (*Rc::new(t).reduce(a)).clone()
    }

    #[test]
    fn send_reply_cycle() {
        let t = ChatTranscript::new("hi");
        let t = reduce(t, ChatAction::Send("  what is Mars?  ".into()));
        assert!(t.sending);
        assert_eq!(t.turns[1], ChatTurn::user("what is Mars?"));
        let t = reduce(t, ChatAction::Reply("A planet.".into()));
        assert!(!t.sending);
        assert_eq!(t.turns.len(), 3);
    }

    #[test]
    fn blank_or_busy_sends_are_ignored() {
        let t = ChatTranscript::new("hi");
        let t = reduce(t, ChatAction::Send("   ".into()));
        assert_eq!(t.turns.len(), 1);
        let t = reduce(t, ChatAction::Send("one".into()));
        let t = reduce(t, ChatAction::Send("two".into()));
        assert_eq!(t.turns.len(), 2);
    }

    #[test]
    fn failure_is_appended_as_assistant_turn() {
        let t = reduce(ChatTranscript::new("hi"), ChatAction::Send("q".into()));
        let t = reduce(t, ChatAction::Failed("API error: Unauthorized".into()));
        assert_eq!(
            t.turns.last().unwrap().text,
            "Error: API error: Unauthorized. Check your internet or API key."
        );
        assert!(!t.sending);
    }

    #[test]
    fn request_starts_with_preamble() {
        let cfg = ChatConfig::default();
        let turns = vec![ChatTurn::assistant("hi"), ChatTurn::user("q")];
        let req = ChatRequest::from_transcript(&cfg, &turns);
        assert_eq!(req.messages.len(), 3);
        assert_eq!(req.messages[0].role, ChatRole::System);
        assert_eq!(req.messages[1].role, ChatRole::Assistant);
        assert_eq!(req.messages[2], WireMessage { role: ChatRole::User, content: "q".into() });
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["model"], "gpt-3.5-turbo");
    }

    #[test]
    fn parses_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Olympus Mons."}}]}"#;
        assert_eq!(parse_reply(body).unwrap(), "Olympus Mons.");
    }

    #[test]
    fn missing_content_falls_back() {
        assert_eq!(parse_reply(r#"{"choices":[]}"#).unwrap(), FALLBACK_REPLY);
        assert_eq!(parse_reply("{}").unwrap(), FALLBACK_REPLY);
        assert!(matches!(parse_reply("nope"), Err(ChatError::Decode(_))));
    }
}
