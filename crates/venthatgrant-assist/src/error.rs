use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistError {
    #[error("proposal not found: {0}")]
    ProposalNotFound(String),

    #[error("proposal already submitted: {0}")]
    ProposalSubmitted(String),

    #[error("agent not found: {0}")]
    AgentNotFound(String),

    #[error("agent is inactive: {0}")]
    AgentInactive(String),
}
