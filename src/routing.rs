//! Query-to-agent routing
//!
//! Routing is an explicit, ordered list of keyword rules evaluated in
//! priority order. The first rule whose keywords match wins. The rule set
//! is injectable so a smarter router can replace the keyword table without
//! touching the delegation flow.

use crate::adapter::{research, video};

/// A single routing rule: keywords mapped to an agent name
#[derive(Debug, Clone)]
pub struct RouteRule {
    keywords: Vec<String>,
    agent: String,
}

impl RouteRule {
    /// Create a rule routing any query containing one of `keywords`
    /// (case-insensitive substring match) to `agent`
    pub fn new(
        agent: impl Into<String>,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.into().to_lowercase())
                .collect(),
            agent: agent.into(),
        }
    }

    /// The agent this rule routes to
    pub fn agent(&self) -> &str {
        &self.agent
    }

    fn matches(&self, query_lower: &str) -> bool {
        self.keywords.iter().any(|k| query_lower.contains(k.as_str()))
    }
}

/// Ordered keyword router, first matching rule wins
#[derive(Debug, Clone)]
pub struct KeywordRouter {
    rules: Vec<RouteRule>,
}

impl KeywordRouter {
    /// Create a router from an ordered rule list
    pub fn new(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    /// Append a rule at the lowest priority
    pub fn with_rule(mut self, rule: RouteRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Select an agent name for the query, if any rule matches
    pub fn route(&self, query: &str) -> Option<&str> {
        let query_lower = query.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&query_lower))
            .map(RouteRule::agent)
    }
}

impl Default for KeywordRouter {
    /// The built-in rule table: video queries first, then research queries
    fn default() -> Self {
        Self::new(vec![
            RouteRule::new(video::AGENT_NAME, ["youtube", "video"]),
            RouteRule::new(research::AGENT_NAME, ["research", "search", "information"]),
        ])
    }
}
