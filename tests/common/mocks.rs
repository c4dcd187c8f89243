use async_trait::async_trait;
use bedrock_agent_proxy::{
    Error, Result,
    agent::{AgentClient, AnswerChunk, Completion, InvocationRequest},
};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Mock agent client for testing: replays canned chunks and records
/// every invocation it receives.
pub struct MockAgentClient {
    pub chunks: Arc<Mutex<Vec<Result<AnswerChunk>>>>,
    pub requests: Arc<Mutex<Vec<InvocationRequest>>>,
    pub invoke_error: Option<String>,
}

impl MockAgentClient {
    pub fn new() -> Self {
        Self {
            chunks: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            invoke_error: None,
        }
    }

    pub fn with_text_chunks(self, texts: &[&str]) -> Self {
        *self.chunks.lock().unwrap() = texts
            .iter()
            .map(|text| {
                Ok(AnswerChunk {
                    bytes: Some(text.as_bytes().to_vec()),
                })
            })
            .collect();
        self
    }

    pub fn with_stream_error(self, error: impl Into<String>) -> Self {
        self.chunks
            .lock()
            .unwrap()
            .push(Err(Error::upstream(error.into())));
        self
    }

    pub fn with_invoke_error(mut self, error: impl Into<String>) -> Self {
        self.invoke_error = Some(error.into());
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Default for MockAgentClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AgentClient for MockAgentClient {
    async fn invoke_agent(&self, request: InvocationRequest) -> Result<Completion> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.invoke_error {
            return Err(Error::upstream(error.clone()));
        }

        let chunks: Vec<_> = self.chunks.lock().unwrap().drain(..).collect();
        let (tx, rx) = mpsc::channel(chunks.len().max(1));
        for chunk in chunks {
            tx.send(chunk).await.expect("mock channel closed");
        }
        Ok(Completion::new(rx))
    }
}
