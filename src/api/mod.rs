//! Typed client for the TaskLY REST API.

pub mod http;
#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;
use thiserror::Error;

use crate::core::family::{Family, NewFamily};
use crate::core::quick_task::{NewQuickTask, QuickTask};
use crate::core::task::Task;

pub use http::HttpApiClient;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("no API token stored")]
    MissingToken,
    #[error("{method} {path} failed: {message}")]
    Network {
        method: &'static str,
        path: String,
        message: String,
    },
    #[error("{method} {path} returned {status}")]
    Status {
        method: &'static str,
        path: String,
        status: u16,
    },
    #[error("failed to decode {path}: {message}")]
    Decode { path: String, message: String },
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::MissingToken)
            || matches!(self, Self::Status { status, .. } if *status == 401 || *status == 403)
    }
}

/// Endpoint paths, relative to the API base URL.
pub mod endpoints {
    pub const FAMILIES: &str = "family/";
    pub const TASKS: &str = "tasks/";
    pub const QUICK_TASKS: &str = "quickTasks/";

    pub fn family(id: i64) -> String {
        format!("family/{}/", id)
    }

    pub fn quick_task(id: i64) -> String {
        format!("quickTasks/{}/", id)
    }
}

/// Every remote operation the dashboard performs.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn list_families(&self) -> Result<Vec<Family>, ApiError>;

    async fn create_family(&self, family: &NewFamily) -> Result<(), ApiError>;

    async fn delete_family(&self, id: i64) -> Result<(), ApiError>;

    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError>;

    async fn list_quick_tasks(&self) -> Result<Vec<QuickTask>, ApiError>;

    async fn create_quick_task(&self, task: &NewQuickTask) -> Result<(), ApiError>;

    async fn delete_quick_task(&self, id: i64) -> Result<(), ApiError>;
}
