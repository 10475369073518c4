// GitHub API client for the portfolio gallery
pub mod github;

// Re-export common types
pub use github::{GitHubClient, GitHubError, GitHubRepo};
