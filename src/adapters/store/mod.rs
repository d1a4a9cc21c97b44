//! Remote document stores
//!
//! - [`RemoteStore`] - versioned get/create/update abstraction
//! - [`GitHubStore`] - files on one branch of a GitHub repository

pub mod github;
pub mod traits;

pub use github::GitHubStore;
pub use traits::{RemoteDocument, RemoteStore, StoreResult};
