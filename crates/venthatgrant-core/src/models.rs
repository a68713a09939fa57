pub mod critique;
pub mod grant;
pub mod profile;
pub mod proposal;
pub mod report;
pub mod saved_grant;
