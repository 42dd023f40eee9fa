//! Simulated completion clients for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::openai::{CompletionClient, CompletionReply, CompletionRequest};

#[derive(Default)]
struct Calls {
    count: AtomicUsize,
    models: Mutex<Vec<Option<String>>>,
}

impl Calls {
    fn record(&self, request: &CompletionRequest<'_>) -> usize {
        self.models
            .lock()
            .unwrap()
            .push(request.model.map(str::to_string));
        self.count.fetch_add(1, Ordering::SeqCst) + 1
    }
}

/// Words of the system prompt kept in an echo; enough to tell the built-in
/// agents apart, since all of them open with "You".
const ECHO_WORDS: usize = 4;

fn echo(request: &CompletionRequest<'_>) -> String {
    let opening: Vec<&str> = request
        .system_prompt
        .split_whitespace()
        .take(ECHO_WORDS)
        .collect();
    format!("{} {}", opening.join(" "), request.user_text)
}

/// Replies with the system prompt's opening words followed by the user text.
///
/// Clones share the same call log.
#[derive(Clone, Default)]
pub struct EchoClient {
    calls: Arc<Calls>,
}

impl EchoClient {
    pub fn calls(&self) -> usize {
        self.calls.count.load(Ordering::SeqCst)
    }

    pub fn models(&self) -> Vec<Option<String>> {
        self.calls.models.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for EchoClient {
    async fn complete(
        &self,
        request: &CompletionRequest<'_>,
    ) -> Result<CompletionReply, ProviderError> {
        self.calls.record(request);
        Ok(CompletionReply {
            text: echo(request),
        })
    }
}

/// Echoes like [`EchoClient`] but fails on the `fail_on`-th call (1-based).
#[derive(Clone)]
pub struct FailingClient {
    fail_on: usize,
    calls: Arc<Calls>,
}

impl FailingClient {
    pub fn on_call(fail_on: usize) -> Self {
        FailingClient {
            fail_on,
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for FailingClient {
    async fn complete(
        &self,
        request: &CompletionRequest<'_>,
    ) -> Result<CompletionReply, ProviderError> {
        let n = self.calls.record(request);
        if n == self.fail_on {
            return Err(ProviderError::malformed("simulated outage"));
        }
        Ok(CompletionReply {
            text: echo(request),
        })
    }
}
