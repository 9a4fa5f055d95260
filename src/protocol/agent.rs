//! Agent card and capability types

use serde::{Deserialize, Serialize};

/// Capability descriptor for an agent, fetched from its base URL
///
/// The card is immutable once fetched. The orchestrator keys its registry by
/// `name`; two agents advertising the same name silently overwrite each
/// other.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentCard {
    /// Name of the agent
    pub name: String,

    /// Human-readable description of the agent
    pub description: String,

    /// Base URL where the agent is served
    pub url: String,

    /// Agent version
    pub version: String,

    /// Agent capabilities
    pub capabilities: AgentCapabilities,

    /// Modalities accepted as input, in preference order
    #[serde(rename = "defaultInputModes")]
    pub default_input_modes: Vec<String>,

    /// Modalities produced as output, in preference order
    #[serde(rename = "defaultOutputModes")]
    pub default_output_modes: Vec<String>,

    /// Skills the agent advertises
    pub skills: Vec<AgentSkill>,
}

impl AgentCard {
    /// Create a new text-in/text-out agent card
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            url: url.into(),
            version: "1.0.0".to_string(),
            capabilities: AgentCapabilities::default(),
            default_input_modes: vec!["text".to_string()],
            default_output_modes: vec!["text".to_string()],
            skills: Vec::new(),
        }
    }

    /// Set the agent version
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Add a skill to the card
    pub fn with_skill(mut self, skill: AgentSkill) -> Self {
        self.skills.push(skill);
        self
    }

    /// Names of the advertised skills, comma separated
    pub fn skill_names(&self) -> String {
        self.skills
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Agent capabilities
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentCapabilities {
    /// Supports streaming responses
    #[serde(default)]
    pub streaming: bool,

    /// Supports push notifications via webhooks
    #[serde(rename = "pushNotifications", default)]
    pub push_notifications: bool,

    /// Reports the history of task state transitions
    #[serde(rename = "stateTransitionHistory", default)]
    pub state_transition_history: bool,
}

/// A skill advertised on an agent card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AgentSkill {
    /// Skill identifier
    pub id: String,

    /// Display name for the skill
    pub name: String,

    /// What the skill does
    pub description: String,

    /// Keyword tags for the skill
    pub tags: Vec<String>,

    /// Example prompts exercising the skill
    pub examples: Vec<String>,
}

impl AgentSkill {
    /// Create a new skill
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            tags: Vec::new(),
            examples: Vec::new(),
        }
    }

    /// Set the skill tags
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the example prompts
    pub fn with_examples(mut self, examples: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.examples = examples.into_iter().map(Into::into).collect();
        self
    }
}
