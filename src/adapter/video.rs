//! Video-analysis adapter
//!
//! Wraps a video-analysis agent. Queries must embed a YouTube URL; the
//! adapter extracts it, picks an analysis mode from the query wording, and
//! hands the wrapped agent a mode-specific analysis prompt.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::{
    protocol::agent::{AgentCard, AgentSkill},
    subagent::{AgentError, ToolAgent},
};

use super::AgentAdapter;

/// Registry name this adapter advertises
pub const AGENT_NAME: &str = "Video Analysis Agent";

static VIDEO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:https?://)?(?:www\.)?(?:youtube|youtu|youtube-nocookie)\.(?:com|be)/(?:watch\?v=|embed/|v/|.+\?v=)?([^&=%\?]{11})",
    )
    .unwrap()
});

/// How deeply the wrapped agent should analyze the video
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    /// Short summary with key points
    Quick,
    /// Full breakdown with timestamps (the default)
    Detailed,
    /// Specialized analysis for the video's category
    Custom,
}

impl AnalysisMode {
    /// Pick a mode from the query wording; detailed unless the query asks
    /// for something else
    pub fn detect(query: &str) -> Self {
        let query = query.to_lowercase();
        if query.contains("quick") || query.contains("brief") {
            AnalysisMode::Quick
        } else if query.contains("custom") || query.contains("specialized") {
            AnalysisMode::Custom
        } else {
            AnalysisMode::Detailed
        }
    }

    /// Wire/display name of the mode
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Quick => "quick",
            AnalysisMode::Detailed => "detailed",
            AnalysisMode::Custom => "custom",
        }
    }
}

/// The video reference parsed out of a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoQuery {
    /// The full URL as matched in the query
    pub url: String,

    /// The 11-character video id
    pub video_id: String,

    /// Analysis mode requested by the query
    pub mode: AnalysisMode,
}

impl VideoQuery {
    /// Extract the video reference from a free-text query
    pub fn parse(query: &str) -> Result<Self, AgentError> {
        let captures = VIDEO_URL
            .captures(query)
            .ok_or_else(|| AgentError::other("No valid YouTube URL found in the message"))?;

        Ok(Self {
            url: captures[0].to_string(),
            video_id: captures[1].to_string(),
            mode: AnalysisMode::detect(query),
        })
    }
}

/// Adapter exposing a video-analysis agent behind the delegation protocol
pub struct VideoAnalysisAdapter<A> {
    agent: A,
    base_url: String,
}

impl<A: ToolAgent> VideoAnalysisAdapter<A> {
    /// Wrap an agent, advertising `base_url` on the card
    pub fn new(agent: A, base_url: impl Into<String>) -> Self {
        Self {
            agent,
            base_url: base_url.into(),
        }
    }

    fn analysis_prompt(video: &VideoQuery) -> String {
        let instructions = match video.mode {
            AnalysisMode::Quick => {
                "Give a short summary: main topic, three key points, and who should watch it."
            }
            AnalysisMode::Detailed => {
                "Provide a full breakdown: overview, section-by-section timestamps, \
                 key takeaways, and notable quotes."
            }
            AnalysisMode::Custom => {
                "Identify the video's category and apply the analysis most useful for \
                 that category, with timestamps where relevant."
            }
        };
        format!("Analyze this YouTube video: {}\n\n{}", video.url, instructions)
    }
}

#[async_trait]
impl<A: ToolAgent> AgentAdapter for VideoAnalysisAdapter<A> {
    fn card(&self) -> AgentCard {
        AgentCard::new(
            AGENT_NAME,
            "Analyzes videos and produces breakdowns, timestamps, summaries, and more",
            &self.base_url,
        )
        .with_skill(
            AgentSkill::new(
                "analyze_video",
                "Video Analysis",
                "Analyzes YouTube videos and provides detailed breakdowns, timestamps, and summaries",
            )
            .with_tags(["youtube", "video", "analysis", "summary"])
            .with_examples([
                "Analyze this YouTube video: https://www.youtube.com/watch?v=dQw4w9WgXcQ",
                "Give me a quick summary of https://www.youtube.com/watch?v=jNQXAC9IVRw",
            ]),
        )
    }

    async fn handle(&self, query: &str) -> Result<String, AgentError> {
        let result = match VideoQuery::parse(query) {
            Ok(video) => {
                tracing::debug!(
                    video_id = %video.video_id,
                    mode = video.mode.as_str(),
                    "Extracted video reference"
                );
                self.agent.run(&Self::analysis_prompt(&video)).await
            }
            Err(e) => Err(e),
        };

        result.map_err(|e| AgentError::other(format!("Error analyzing YouTube video: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_watch_url() {
        let video = VideoQuery::parse(
            "Analyze this video: https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        )
        .unwrap();

        assert_eq!(video.video_id, "dQw4w9WgXcQ");
        assert!(video.url.contains("youtube.com/watch?v=dQw4w9WgXcQ"));
        assert_eq!(video.mode, AnalysisMode::Detailed);
    }

    #[test]
    fn test_extracts_embed_url() {
        let video =
            VideoQuery::parse("check https://www.youtube.com/embed/jNQXAC9IVRw please").unwrap();
        assert_eq!(video.video_id, "jNQXAC9IVRw");
    }

    #[test]
    fn test_missing_url_is_an_error() {
        let err = VideoQuery::parse("analyze my vacation footage").unwrap_err();
        assert_eq!(err.to_string(), "No valid YouTube URL found in the message");
    }

    #[test]
    fn test_mode_detection() {
        assert_eq!(AnalysisMode::detect("give me a QUICK look"), AnalysisMode::Quick);
        assert_eq!(AnalysisMode::detect("a brief rundown"), AnalysisMode::Quick);
        assert_eq!(AnalysisMode::detect("custom analysis please"), AnalysisMode::Custom);
        assert_eq!(
            AnalysisMode::detect("specialized breakdown"),
            AnalysisMode::Custom
        );
        assert_eq!(AnalysisMode::detect("analyze this"), AnalysisMode::Detailed);
    }

    #[tokio::test]
    async fn test_handle_runs_agent_with_analysis_prompt() {
        let adapter = VideoAnalysisAdapter::new(
            |prompt: &str| -> Result<String, AgentError> { Ok(format!("analysis for [{prompt}]")) },
            "http://localhost:8002/",
        );

        let reply = adapter
            .handle("Analyze this video: https://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .await
            .unwrap();

        assert!(reply.contains("https://www.youtube.com/watch?v=dQw4w9WgXcQ"));
        assert!(reply.contains("timestamps"));
    }

    #[tokio::test]
    async fn test_handle_without_url_reports_domain_error() {
        let adapter = VideoAnalysisAdapter::new(
            |_prompt: &str| -> Result<String, AgentError> { Ok("unreachable".to_string()) },
            "http://localhost:8002/",
        );

        let err = adapter.handle("no link here").await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error analyzing YouTube video: No valid YouTube URL found in the message"
        );
    }

    #[tokio::test]
    async fn test_handle_wraps_agent_failure() {
        let adapter = VideoAnalysisAdapter::new(
            |_prompt: &str| -> Result<String, AgentError> {
                Err(AgentError::other("transcript unavailable"))
            },
            "http://localhost:8002/",
        );

        let err = adapter
            .handle("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error analyzing YouTube video: transcript unavailable"
        );
    }

    #[test]
    fn test_card_advertises_video_skill() {
        let adapter = VideoAnalysisAdapter::new(
            |_: &str| -> Result<String, AgentError> { Ok(String::new()) },
            "http://localhost:8002/",
        );
        let card = adapter.card();

        assert_eq!(card.name, AGENT_NAME);
        assert_eq!(card.skills[0].id, "analyze_video");
        assert!(card.skills[0].tags.contains(&"youtube".to_string()));
    }
}
