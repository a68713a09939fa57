use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Structured applicant profile sent alongside a search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserProfile {
    pub role: String,
    pub funding_types: Vec<String>,
    pub region: String,
    pub min_grant_size: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// `(value, label)` pairs offered by the profile form.
pub const ROLE_OPTIONS: &[(&str, &str)] = &[
    ("researcher", "Researcher"),
    ("entrepreneur", "Entrepreneur"),
    ("creative", "Creative Artist"),
    ("web3", "Web3 Founder"),
    ("health", "Health Innovator"),
];

pub const FUNDING_TYPE_OPTIONS: &[(&str, &str)] = &[
    ("research", "Research"),
    ("music", "Music"),
    ("web3", "Web3"),
    ("health", "Health"),
    ("creative", "Creative Arts"),
    ("innovation", "Innovation"),
    ("equity", "Equity/Inclusion"),
];

pub const REGION_OPTIONS: &[(&str, &str)] = &[
    ("uk", "UK"),
    ("eu", "EU"),
    ("global", "Global"),
    ("africa", "Africa"),
    ("usa", "USA"),
];

pub const GRANT_SIZE_OPTIONS: &[(&str, &str)] = &[
    ("none", "No minimum"),
    ("5k", "£5k+"),
    ("10k", "£10k+"),
    ("50k", "£50k+"),
];

impl UserProfile {
    /// Blank optional email is treated as absent, as the profile form does.
    pub fn with_email(mut self, email: &str) -> Self {
        let email = email.trim();
        self.email = (!email.is_empty()).then(|| email.to_string());
        self
    }
}
