//! Research adapter
//!
//! Wraps a research agent. Queries pass through unchanged; the agent's
//! reply, however, arrives in one of several shapes depending on how the
//! underlying pipeline terminated, so extraction goes through an explicit
//! tagged decoder instead of guessing field by field.

use async_trait::async_trait;
use serde_json::Value;

use crate::{
    protocol::agent::{AgentCard, AgentSkill},
    subagent::{AgentError, ToolAgent},
};

use super::AgentAdapter;

/// Registry name this adapter advertises
pub const AGENT_NAME: &str = "Research Agent";

/// The recognized shapes of a research-agent reply
///
/// Decoding tries each shape in order: a conversation object whose last
/// message carries the answer, a `["ai", text]` pair, and finally the raw
/// reply as-is. Keeping the shapes as variants makes the ambiguity visible
/// instead of burying it in fallback parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyShape {
    /// A conversation object; the answer is the last message's content
    Conversation(String),

    /// A `(role, text)` pair; the answer is the second element
    Pair(String),

    /// Anything else; passed through verbatim
    Raw(String),
}

impl ReplyShape {
    /// Decode a raw agent reply into its shape
    pub fn decode(raw: &str) -> Self {
        if let Ok(value) = serde_json::from_str::<Value>(raw) {
            if let Some(shape) = Self::from_conversation(&value) {
                return shape;
            }
        }
        ReplyShape::Raw(raw.to_string())
    }

    /// The extracted answer text
    pub fn into_text(self) -> String {
        match self {
            ReplyShape::Conversation(text) | ReplyShape::Pair(text) | ReplyShape::Raw(text) => text,
        }
    }

    fn from_conversation(value: &Value) -> Option<Self> {
        let last = value.get("messages")?.as_array()?.last()?;

        if let Some(content) = last.get("content") {
            return Some(ReplyShape::Conversation(stringify(content)));
        }
        if let Some(pair) = last.as_array() {
            if pair.len() >= 2 {
                return Some(ReplyShape::Pair(stringify(&pair[1])));
            }
        }
        if let Some(text) = last.as_str() {
            return Some(ReplyShape::Conversation(text.to_string()));
        }
        Some(ReplyShape::Raw(last.to_string()))
    }
}

/// Strings pass through unquoted; everything else is rendered as JSON.
fn stringify(value: &Value) -> String {
    match value.as_str() {
        Some(text) => text.to_string(),
        None => value.to_string(),
    }
}

/// Adapter exposing a research agent behind the delegation protocol
pub struct ResearchAdapter<A> {
    agent: A,
    base_url: String,
}

impl<A: ToolAgent> ResearchAdapter<A> {
    /// Wrap an agent, advertising `base_url` on the card
    pub fn new(agent: A, base_url: impl Into<String>) -> Self {
        Self {
            agent,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl<A: ToolAgent> AgentAdapter for ResearchAdapter<A> {
    fn card(&self) -> AgentCard {
        AgentCard::new(
            AGENT_NAME,
            "A research agent that can search for information and provide detailed answers",
            &self.base_url,
        )
        .with_skill(
            AgentSkill::new(
                "research",
                "Web Research",
                "Searches the web for information and provides detailed answers",
            )
            .with_tags(["research", "information", "knowledge"])
            .with_examples([
                "What are the latest developments in quantum computing?",
                "Explain the impact of climate change on marine ecosystems",
            ]),
        )
    }

    async fn handle(&self, query: &str) -> Result<String, AgentError> {
        match self.agent.run(query).await {
            Ok(reply) => Ok(ReplyShape::decode(&reply).into_text()),
            Err(e) => Err(AgentError::other(format!("Error: {e}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_decode_conversation_shape() {
        let raw = json!({
            "messages": [
                {"role": "user", "content": "what is rust?"},
                {"role": "ai", "content": "A systems programming language."}
            ]
        })
        .to_string();

        let shape = ReplyShape::decode(&raw);
        assert_eq!(
            shape,
            ReplyShape::Conversation("A systems programming language.".to_string())
        );
    }

    #[test]
    fn test_decode_conversation_with_structured_content() {
        let raw = json!({
            "messages": [{"role": "ai", "content": {"blocks": ["a", "b"]}}]
        })
        .to_string();

        let shape = ReplyShape::decode(&raw);
        assert_eq!(
            shape.into_text(),
            json!({"blocks": ["a", "b"]}).to_string()
        );
    }

    #[test]
    fn test_decode_pair_shape() {
        let raw = json!({
            "messages": [["ai", "the answer"]]
        })
        .to_string();

        assert_eq!(
            ReplyShape::decode(&raw),
            ReplyShape::Pair("the answer".to_string())
        );
    }

    #[test]
    fn test_decode_raw_passthrough() {
        assert_eq!(
            ReplyShape::decode("plain text answer"),
            ReplyShape::Raw("plain text answer".to_string())
        );

        // JSON without a messages array also passes through verbatim.
        let raw = json!({"result": 42}).to_string();
        assert_eq!(ReplyShape::decode(&raw), ReplyShape::Raw(raw.clone()));
    }

    #[test]
    fn test_decode_empty_conversation_is_raw() {
        let raw = json!({"messages": []}).to_string();
        assert_eq!(ReplyShape::decode(&raw), ReplyShape::Raw(raw.clone()));
    }

    #[tokio::test]
    async fn test_handle_passes_query_through() {
        let adapter = ResearchAdapter::new(
            |prompt: &str| -> Result<String, AgentError> {
                assert_eq!(prompt, "research rust adoption");
                Ok("rust is widely adopted".to_string())
            },
            "http://localhost:8001/",
        );

        let reply = adapter.handle("research rust adoption").await.unwrap();
        assert_eq!(reply, "rust is widely adopted");
    }

    #[tokio::test]
    async fn test_handle_decodes_structured_reply() {
        let adapter = ResearchAdapter::new(
            |_prompt: &str| -> Result<String, AgentError> {
                Ok(json!({"messages": [{"content": "decoded answer"}]}).to_string())
            },
            "http://localhost:8001/",
        );

        let reply = adapter.handle("search something").await.unwrap();
        assert_eq!(reply, "decoded answer");
    }

    #[tokio::test]
    async fn test_handle_prefixes_agent_failure() {
        let adapter = ResearchAdapter::new(
            |_prompt: &str| -> Result<String, AgentError> {
                Err(AgentError::other("search backend down"))
            },
            "http://localhost:8001/",
        );

        let err = adapter.handle("search something").await.unwrap_err();
        assert_eq!(err.to_string(), "Error: search backend down");
    }

    #[test]
    fn test_card_advertises_research_skill() {
        let adapter = ResearchAdapter::new(
            |_: &str| -> Result<String, AgentError> { Ok(String::new()) },
            "http://localhost:8001/",
        );
        let card = adapter.card();

        assert_eq!(card.name, AGENT_NAME);
        assert_eq!(card.skills[0].id, "research");
        assert!(card.skills[0].tags.contains(&"information".to_string()));
    }
}
