mod client;

pub use client::{
    AgentClient, AnswerChunk, BedrockAgentClient, Completion, InvocationRequest,
};

use crate::{Error, Result, config::AgentConfig};
use std::sync::Arc;
use tracing::debug;

/// Forwards one question to the configured Bedrock agent and buffers the
/// streamed answer into a single string. Holds the client handle
/// explicitly so tests can substitute a fake.
pub struct AgentProxy {
    client: Option<Arc<dyn AgentClient>>,
    config: AgentConfig,
}

impl AgentProxy {
    pub fn new(client: Option<Arc<dyn AgentClient>>, config: AgentConfig) -> Self {
        Self { client, config }
    }

    /// Single-shot ask: either the whole answer comes back, or an error.
    /// Checks run in a fixed order, all before any network call: agent
    /// addressing, client handle, question.
    pub async fn ask(&self, question: &str, session_id: &str) -> Result<String> {
        let (Some(agent_id), Some(agent_alias_id)) = (
            self.config.agent_id.as_deref(),
            self.config.agent_alias_id.as_deref(),
        ) else {
            return Err(Error::config(
                "Bedrock Agent ID or Alias ID not configured on the server.",
            ));
        };

        let Some(client) = self.client.as_ref() else {
            return Err(Error::client_unavailable(
                "Bedrock client is not initialized. Check server logs.",
            ));
        };

        if question.trim().is_empty() {
            return Err(Error::validation("Question is required."));
        }

        let request = InvocationRequest {
            agent_id: agent_id.to_string(),
            agent_alias_id: agent_alias_id.to_string(),
            session_id: session_id.to_string(),
            input_text: question.to_string(),
        };

        let mut completion = client.invoke_agent(request).await?;

        // Drain the whole stream before responding; chunks arrive in
        // order and are appended without separators.
        let mut answer = String::new();
        while let Some(chunk) = completion.recv().await {
            let chunk = chunk?;
            if let Some(bytes) = chunk.bytes {
                let text = String::from_utf8(bytes)
                    .map_err(|e| Error::upstream(format!("chunk is not valid UTF-8: {e}")))?;
                answer.push_str(&text);
            }
        }

        debug!(
            "Agent answered session {} with {} bytes",
            session_id,
            answer.len()
        );

        Ok(answer)
    }
}
