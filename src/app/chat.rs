//! Turn dispatch: send one user message through every agent, in order.

use thiserror::Error;

use crate::error::ProviderError;
use crate::openai::{CompletionClient, CompletionRequest};

use super::agents::{Agent, AgentRegistry};
use super::logging::{LogLevel, Logger};

/// One agent's answer for the current turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentReply {
    pub agent: String,
    pub label: String,
    pub text: String,
}

/// A turn that stopped at a failing agent. Later agents were not called.
#[derive(Debug, Error)]
#[error("{source}")]
pub struct DispatchError {
    pub agent: String,
    #[source]
    pub source: ProviderError,
}

/// Calls the completion client once per agent, awaiting each before the next.
pub struct Dispatcher<C> {
    client: C,
    registry: AgentRegistry,
    logger: Logger,
}

impl<C: CompletionClient> Dispatcher<C> {
    pub fn new(client: C, registry: AgentRegistry, logger: Logger) -> Self {
        Dispatcher {
            client,
            registry,
            logger,
        }
    }

    /// Run `user_text` through every agent in registry order.
    pub async fn dispatch(&self, user_text: &str) -> Result<Vec<AgentReply>, DispatchError> {
        let mut replies = Vec::with_capacity(self.registry.len());
        for agent in self.registry.iter() {
            let text = self.ask(agent, user_text).await?;
            replies.push(AgentReply {
                agent: agent.name.clone(),
                label: agent.label.clone(),
                text,
            });
        }
        Ok(replies)
    }

    async fn ask(&self, agent: &Agent, user_text: &str) -> Result<String, DispatchError> {
        self.logger
            .log(LogLevel::Debug, format!("Asking {}", agent.name));
        let request = CompletionRequest {
            system_prompt: &agent.instructions,
            user_text,
            model: agent.model.as_deref(),
        };
        match self.client.complete(&request).await {
            Ok(reply) => Ok(reply.text),
            Err(source) => Err(DispatchError {
                agent: agent.name.clone(),
                source,
            }),
        }
    }
}
