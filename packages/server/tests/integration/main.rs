
mod auth;
mod execute;
mod stats;
