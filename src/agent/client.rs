use crate::{Error, Result};
use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_bedrockagentruntime::Client;
use aws_sdk_bedrockagentruntime::types::ResponseStream;
use tokio::sync::mpsc;
use tracing::debug;

const DEFAULT_REGION: &str = "us-east-1";

/// Input tuple for one agent invocation.
#[derive(Debug, Clone)]
pub struct InvocationRequest {
    pub agent_id: String,
    pub agent_alias_id: String,
    pub session_id: String,
    pub input_text: String,
}

/// One fragment of the streamed answer. `bytes` is absent for events
/// that carry no text payload.
#[derive(Debug, Clone)]
pub struct AnswerChunk {
    pub bytes: Option<Vec<u8>>,
}

/// The streamed completion of one invocation: a finite, non-restartable
/// sequence of chunks. An `Err` item terminates the sequence.
pub struct Completion {
    rx: mpsc::Receiver<Result<AnswerChunk>>,
}

impl Completion {
    pub fn new(rx: mpsc::Receiver<Result<AnswerChunk>>) -> Self {
        Self { rx }
    }

    pub async fn recv(&mut self) -> Option<Result<AnswerChunk>> {
        self.rx.recv().await
    }
}

#[async_trait]
pub trait AgentClient: Send + Sync {
    async fn invoke_agent(&self, request: InvocationRequest) -> Result<Completion>;
}

/// Production client over AWS Bedrock Agents. Safe to share across
/// concurrent requests.
pub struct BedrockAgentClient {
    client: Client,
}

impl BedrockAgentClient {
    /// Resolves the region (configured value, then the default provider
    /// chain, then us-east-1) and builds the SDK client. Credentials come
    /// from the default provider chain.
    pub async fn connect(region: &str) -> Self {
        let region_provider = RegionProviderChain::first_try(Region::new(region.to_string()))
            .or_default_provider()
            .or_else(Region::new(DEFAULT_REGION));

        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider)
            .load()
            .await;

        Self {
            client: Client::new(&config),
        }
    }
}

#[async_trait]
impl AgentClient for BedrockAgentClient {
    async fn invoke_agent(&self, request: InvocationRequest) -> Result<Completion> {
        debug!(
            "Invoking agent {} (alias {}) for session {}",
            request.agent_id, request.agent_alias_id, request.session_id
        );

        let output = self
            .client
            .invoke_agent()
            .agent_id(request.agent_id)
            .agent_alias_id(request.agent_alias_id)
            .session_id(request.session_id)
            .input_text(request.input_text)
            .send()
            .await
            .map_err(|e| Error::upstream(e.to_string()))?;

        let mut completion = output.completion;
        let (tx, rx) = mpsc::channel(16);

        // Forward chunk payloads; trace, files and return-control events
        // carry no answer text and are skipped.
        tokio::spawn(async move {
            loop {
                match completion.recv().await {
                    Ok(Some(ResponseStream::Chunk(part))) => {
                        let chunk = AnswerChunk {
                            bytes: part.bytes.map(|b| b.into_inner()),
                        };
                        if tx.send(Ok(chunk)).await.is_err() {
                            break;
                        }
                    }
                    Ok(Some(_)) => continue,
                    Ok(None) => break,
                    Err(e) => {
                        let _ = tx.send(Err(Error::upstream(e.to_string()))).await;
                        break;
                    }
                }
            }
        });

        Ok(Completion::new(rx))
    }
}
