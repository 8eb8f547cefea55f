//! Scripted collaborators shared by the use case tests.

use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use crate::ports::progress::NoProgress;
use crate::ports::response_sink::{ResponseSink, SinkError};
use crate::use_cases::round::RoundServices;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub(crate) enum Scripted {
    Text(String),
    Fail(String),
    /// Reply only after the given delay
    Slow(Duration, String),
}

/// Gateway answering from a fixed queue and recording every request
pub(crate) struct ScriptedGateway {
    responses: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedGateway {
    pub(crate) fn new(responses: Vec<Scripted>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn replies(texts: &[&str]) -> Self {
        Self::new(
            texts
                .iter()
                .map(|t| Scripted::Text(t.to_string()))
                .collect(),
        )
    }

    pub(crate) fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub(crate) fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Text(text)) => Ok(text),
            Some(Scripted::Fail(message)) => Err(GatewayError::RequestFailed(message)),
            Some(Scripted::Slow(delay, text)) => {
                tokio::time::sleep(delay).await;
                Ok(text)
            }
            None => Err(GatewayError::RequestFailed(
                "no scripted response left".to_string(),
            )),
        }
    }
}

#[derive(Default)]
pub(crate) struct RecordingSink {
    pub(crate) notified: Mutex<Vec<(String, String)>>,
}

impl RecordingSink {
    pub(crate) fn agents(&self) -> Vec<String> {
        self.notified
            .lock()
            .unwrap()
            .iter()
            .map(|(agent, _)| agent.clone())
            .collect()
    }
}

impl ResponseSink for RecordingSink {
    fn notify(&self, agent_name: &str, text: &str) -> Result<(), SinkError> {
        self.notified
            .lock()
            .unwrap()
            .push((agent_name.to_string(), text.to_string()));
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct RecordingLogger {
    pub(crate) events: Mutex<Vec<ConversationEvent>>,
}

impl RecordingLogger {
    pub(crate) fn event_types(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.event_type)
            .collect()
    }
}

impl ConversationLogger for RecordingLogger {
    fn log(&self, event: ConversationEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Owns the collaborators a runner needs during a test round
#[derive(Default)]
pub(crate) struct Harness {
    pub(crate) sink: RecordingSink,
    pub(crate) logger: RecordingLogger,
    pub(crate) progress: NoProgress,
    pub(crate) token: CancellationToken,
}

impl Harness {
    pub(crate) fn services(&self) -> RoundServices<'_> {
        RoundServices {
            sink: &self.sink,
            progress: &self.progress,
            logger: &self.logger,
            cancellation: &self.token,
        }
    }
}
