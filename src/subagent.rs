//! The seam to the wrapped agent intelligence
//!
//! Adapters talk to their underlying agent through a single narrow call:
//! run a prompt, get text back or an error. What sits behind that call (a
//! search-augmented chat model, a transcript-analysis pipeline) is outside
//! this crate.

use std::process::Stdio;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// Failure from the wrapped agent
#[derive(Debug, Error)]
pub enum AgentError {
    /// The agent process could not be launched or its pipes failed
    #[error("failed to run agent process: {0}")]
    Spawn(#[from] std::io::Error),

    /// The agent process exited unsuccessfully
    #[error("agent process failed ({status}): {stderr}")]
    Process { status: String, stderr: String },

    /// Any other agent-reported failure
    #[error("{0}")]
    Other(String),
}

impl AgentError {
    /// A free-form agent failure
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

/// The synchronous "run" capability of a wrapped agent
#[async_trait]
pub trait ToolAgent: Send + Sync + 'static {
    /// Run the prompt to completion and return the agent's text reply
    async fn run(&self, prompt: &str) -> Result<String, AgentError>;
}

/// Closures double as agents, which keeps tests free of boilerplate.
#[async_trait]
impl<F> ToolAgent for F
where
    F: Fn(&str) -> Result<String, AgentError> + Send + Sync + 'static,
{
    async fn run(&self, prompt: &str) -> Result<String, AgentError> {
        self(prompt)
    }
}

/// An agent backed by an external program
///
/// The prompt is written to the program's stdin; trimmed stdout is the
/// reply. A non-zero exit status is an agent failure carrying the
/// program's stderr.
#[derive(Debug, Clone)]
pub struct CommandAgent {
    program: String,
    args: Vec<String>,
}

impl CommandAgent {
    /// Create an agent that runs `program` with the given arguments
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl ToolAgent for CommandAgent {
    async fn run(&self, prompt: &str) -> Result<String, AgentError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(prompt.as_bytes()).await?;
            // Close stdin so the agent sees end-of-input.
            drop(stdin);
        }

        let output = child.wait_with_output().await?;

        if !output.status.success() {
            return Err(AgentError::Process {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_closure_agent() {
        let agent = |prompt: &str| -> Result<String, AgentError> { Ok(format!("echo: {prompt}")) };
        assert_eq!(agent.run("hi").await.unwrap(), "echo: hi");
    }

    #[tokio::test]
    async fn test_closure_agent_failure() {
        let agent = |_prompt: &str| -> Result<String, AgentError> {
            Err(AgentError::other("model unavailable"))
        };

        let err = agent.run("hi").await.unwrap_err();
        assert_eq!(err.to_string(), "model unavailable");
    }

    #[tokio::test]
    async fn test_command_agent_pipes_prompt_through() {
        let agent = CommandAgent::new("cat", Vec::<String>::new());
        assert_eq!(agent.run("hello world").await.unwrap(), "hello world");
    }

    #[tokio::test]
    async fn test_command_agent_trims_output() {
        let agent = CommandAgent::new("echo", ["reply"]);
        assert_eq!(agent.run("ignored").await.unwrap(), "reply");
    }

    #[tokio::test]
    async fn test_command_agent_reports_nonzero_exit() {
        let agent = CommandAgent::new("false", Vec::<String>::new());
        let err = agent.run("prompt").await.unwrap_err();
        assert!(matches!(err, AgentError::Process { .. }));
    }

    #[tokio::test]
    async fn test_command_agent_reports_missing_program() {
        let agent = CommandAgent::new("definitely-not-a-real-binary", Vec::<String>::new());
        let err = agent.run("prompt").await.unwrap_err();
        assert!(matches!(err, AgentError::Spawn(_)));
    }
}
