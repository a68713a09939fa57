//! Grant tweeting agent.
//!
//! The agent posts short announcements about grants. No social network is
//! contacted: [`SimulatedTweetingAgent`] keeps per-agent counters in memory
//! and returns the text and a status URL it would have posted.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

use venthatgrant_core::ids;
use venthatgrant_core::models::grant::GrantResult;

use crate::error::AssistError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

const STATUS_URL_PREFIX: &str = "https://twitter.com/VenThatGrant/status/";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentConfig {
    pub name: String,
    pub description: String,
    pub persona: String,
    pub grant_types: Vec<String>,
    pub tweet_style: String,
    pub is_active: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: "GrantScout".to_string(),
            description: "An AI agent that tweets about new grant opportunities".to_string(),
            persona: "Helpful grant expert who shares funding opportunities".to_string(),
            grant_types: ["research", "innovation", "arts", "health", "tech"]
                .map(str::to_string)
                .to_vec(),
            tweet_style: "Professional with a touch of enthusiasm".to_string(),
            is_active: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentStatus {
    pub connected: bool,
    pub last_message: Option<String>,
    pub last_message_time: Option<jiff::Timestamp>,
    pub total_sent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TweetReceipt {
    pub text: String,
    pub url: String,
}

/// The agent collaborator boundary.
pub trait TweetingAgent: Send + Sync {
    /// Register an agent and return its id.
    fn create(&self, config: AgentConfig) -> BoxFuture<'_, Result<String, AssistError>>;

    fn status<'a>(&'a self, agent_id: &'a str) -> BoxFuture<'a, Result<AgentStatus, AssistError>>;

    fn tweet_about_grant<'a>(
        &'a self,
        agent_id: &'a str,
        grant: &'a GrantResult,
    ) -> BoxFuture<'a, Result<TweetReceipt, AssistError>>;
}

struct AgentRecord {
    config: AgentConfig,
    status: AgentStatus,
}

#[derive(Default)]
pub struct SimulatedTweetingAgent {
    agents: Mutex<HashMap<String, AgentRecord>>,
}

impl SimulatedTweetingAgent {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn config(&self, agent_id: &str) -> Result<AgentConfig, AssistError> {
        self.agents
            .lock()
            .await
            .get(agent_id)
            .map(|r| r.config.clone())
            .ok_or_else(|| AssistError::AgentNotFound(agent_id.to_string()))
    }

    async fn register(&self, config: AgentConfig) -> Result<String, AssistError> {
        let agent_id = ids::agent();
        info!(agent_id = %agent_id, name = %config.name, active = config.is_active, "agent created");
        let record = AgentRecord {
            config,
            status: AgentStatus {
                connected: true,
                last_message: None,
                last_message_time: None,
                total_sent: 0,
            },
        };
        self.agents.lock().await.insert(agent_id.clone(), record);
        Ok(agent_id)
    }

    async fn lookup_status(&self, agent_id: &str) -> Result<AgentStatus, AssistError> {
        debug!(agent_id, "agent status requested");
        self.agents
            .lock()
            .await
            .get(agent_id)
            .map(|r| r.status.clone())
            .ok_or_else(|| AssistError::AgentNotFound(agent_id.to_string()))
    }

    async fn post(&self, agent_id: &str, grant: &GrantResult) -> Result<TweetReceipt, AssistError> {
        let mut agents = self.agents.lock().await;
        let record = agents
            .get_mut(agent_id)
            .ok_or_else(|| AssistError::AgentNotFound(agent_id.to_string()))?;
        if !record.config.is_active {
            return Err(AssistError::AgentInactive(agent_id.to_string()));
        }

        let now = jiff::Timestamp::now();
        let text = compose_tweet(grant);
        let url = format!("{STATUS_URL_PREFIX}{}", now.as_millisecond());

        record.status.total_sent += 1;
        record.status.last_message = Some(text.clone());
        record.status.last_message_time = Some(now);
        info!(agent_id, grant_id = grant.id, total_sent = record.status.total_sent, "tweet posted");

        Ok(TweetReceipt { text, url })
    }
}

impl TweetingAgent for SimulatedTweetingAgent {
    fn create(&self, config: AgentConfig) -> BoxFuture<'_, Result<String, AssistError>> {
        Box::pin(self.register(config))
    }

    fn status<'a>(&'a self, agent_id: &'a str) -> BoxFuture<'a, Result<AgentStatus, AssistError>> {
        Box::pin(self.lookup_status(agent_id))
    }

    fn tweet_about_grant<'a>(
        &'a self,
        agent_id: &'a str,
        grant: &'a GrantResult,
    ) -> BoxFuture<'a, Result<TweetReceipt, AssistError>> {
        Box::pin(self.post(agent_id, grant))
    }
}

/// Announcement text for `grant`.
pub fn compose_tweet(grant: &GrantResult) -> String {
    format!(
        "Just discovered: {} from {}!\nAmount: {}. Deadline: {}.\nGreat for {} projects! #GrantFunding",
        grant.title,
        grant.organization,
        grant.amount,
        display_deadline(&grant.deadline),
        grant.type_hashtag(),
    )
}

/// `2025-11-15` becomes `Nov 15, 2025`; anything unparseable is kept as is.
fn display_deadline(deadline: &str) -> String {
    deadline
        .parse::<jiff::civil::Date>()
        .map(|d| d.strftime("%b %-d, %Y").to_string())
        .unwrap_or_else(|_| deadline.to_string())
}
