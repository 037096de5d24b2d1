//! Mock implementations for testing verification flows

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::value_objects::UserMessage;
use crate::errors::{KycError, KycResult};
use crate::services::kyc::{CodePrompt, Endpoint, KycClient, ProgressReporter};

/// Client that replays queued responses and records every call
#[derive(Default)]
pub struct ScriptedClient {
    responses: Mutex<VecDeque<KycResult<Value>>>,
    pub calls: Arc<Mutex<Vec<(Endpoint, Value)>>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, response: Value) -> Self {
        self.responses.lock().unwrap().push_back(Ok(response));
        self
    }

    pub fn fail(self, endpoint: Endpoint, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(KycError::service_call_failed(endpoint.api_name(), message)));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn endpoints(&self) -> Vec<Endpoint> {
        self.calls.lock().unwrap().iter().map(|(e, _)| *e).collect()
    }

    pub fn payload(&self, index: usize) -> Value {
        self.calls.lock().unwrap()[index].1.clone()
    }
}

#[async_trait]
impl KycClient for ScriptedClient {
    async fn call(&self, endpoint: Endpoint, payload: Value) -> KycResult<Value> {
        self.calls.lock().unwrap().push((endpoint, payload));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(KycError::Internal {
                    message: format!("no scripted response for {}", endpoint),
                })
            })
    }
}

/// Progress reporter that records begin/end/alert in order
#[derive(Default)]
pub struct RecordingProgress {
    pub events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressReporter for RecordingProgress {
    fn begin(&self, message: &str) {
        self.events.lock().unwrap().push(format!("begin:{}", message));
    }

    fn end(&self) {
        self.events.lock().unwrap().push("end".to_string());
    }

    fn alert(&self, message: &UserMessage) {
        self.events
            .lock()
            .unwrap()
            .push(format!("alert:{}", message.text));
    }
}

/// Prompt that answers with a fixed code, or cancels when given `None`
pub struct ScriptedPrompt {
    code: Option<String>,
    pub titles: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn answering(code: &str) -> Self {
        Self {
            code: Some(code.to_string()),
            titles: Mutex::new(Vec::new()),
        }
    }

    pub fn cancelling() -> Self {
        Self {
            code: None,
            titles: Mutex::new(Vec::new()),
        }
    }

    pub fn times_asked(&self) -> usize {
        self.titles.lock().unwrap().len()
    }
}

#[async_trait]
impl CodePrompt for ScriptedPrompt {
    async fn request_code(&self, title: &str) -> Option<String> {
        self.titles.lock().unwrap().push(title.to_string());
        self.code.clone()
    }
}
