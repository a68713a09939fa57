//! Identifier conventions.
//!
//! Every record id is `<kind>-<uuid v4>`. The prefix makes ids readable in
//! logs; the UUID keeps them unique no matter how fast records are created.

use uuid::Uuid;

pub const SAVED_GRANT_PREFIX: &str = "saved";
pub const PROPOSAL_PREFIX: &str = "proposal";
pub const REPORT_PREFIX: &str = "report";
pub const CRITIQUE_PREFIX: &str = "critique";
pub const AGENT_PREFIX: &str = "grant-agent";

fn generate(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

pub fn saved_grant() -> String {
    generate(SAVED_GRANT_PREFIX)
}

pub fn proposal() -> String {
    generate(PROPOSAL_PREFIX)
}

pub fn report() -> String {
    generate(REPORT_PREFIX)
}

pub fn critique() -> String {
    generate(CRITIQUE_PREFIX)
}

pub fn agent() -> String {
    generate(AGENT_PREFIX)
}

