//! venthatgrant-assist
//!
//! Simulated AI collaborators: proposal drafting, optimization, progress
//! reports, critiques, and the grant tweeting agent. Outputs are canned;
//! what matters is how they land in the collection store.

pub mod agent;
pub mod assistant;
pub mod error;
pub mod templates;

pub use crate::agent::{AgentConfig, AgentStatus, SimulatedTweetingAgent, TweetReceipt, TweetingAgent};
pub use crate::assistant::{Assistant, Latency, ProposalDraft};
pub use crate::error::AssistError;
