pub mod auth;
pub mod execute;
pub mod problem;
pub mod stats;
pub mod submission;
