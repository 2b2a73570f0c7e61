//! Provider doubles for end-to-end HTTP tests.
//!
//! The server runs on its own worker thread, so the scripted reply and the
//! call log sit behind `Arc<Mutex<_>>` and stay adjustable after start-up.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use nameforge::domain::ports::{TextGenerationError, TextGenerationProvider};

/// What the scripted provider answers with.
#[derive(Debug, Clone)]
pub(crate) enum ProviderReply {
    Completion(String),
    Failure(TextGenerationError),
}

/// Provider double that records prompts and replays a scripted reply.
#[derive(Clone)]
pub(crate) struct ScriptedProvider {
    prompts: Arc<Mutex<Vec<String>>>,
    reply: Arc<Mutex<ProviderReply>>,
}

impl ScriptedProvider {
    pub(crate) fn new(reply: ProviderReply) -> Self {
        Self {
            prompts: Arc::new(Mutex::new(Vec::new())),
            reply: Arc::new(Mutex::new(reply)),
        }
    }

    pub(crate) fn set_reply(&self, reply: ProviderReply) {
        *self.reply.lock().expect("reply lock") = reply;
    }

    pub(crate) fn call_count(&self) -> usize {
        self.prompts.lock().expect("prompts lock").len()
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("prompts lock").clone()
    }
}

#[async_trait]
impl TextGenerationProvider for ScriptedProvider {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn generate_text(&self, prompt: &str) -> Result<String, TextGenerationError> {
        self.prompts
            .lock()
            .expect("prompts lock")
            .push(prompt.to_owned());
        match self.reply.lock().expect("reply lock").clone() {
            ProviderReply::Completion(text) => Ok(text),
            ProviderReply::Failure(err) => Err(err),
        }
    }
}
