//! In-memory [`DashboardApi`] for controller tests.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ApiError, DashboardApi};
use crate::core::family::{Family, NewFamily};
use crate::core::quick_task::{NewQuickTask, QuickTask};
use crate::core::task::Task;

/// A recorded remote call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Call {
    ListFamilies,
    CreateFamily(String),
    DeleteFamily(i64),
    ListTasks,
    ListQuickTasks,
    CreateQuickTask(String),
    DeleteQuickTask(i64),
}

#[derive(Default)]
pub struct MockApi {
    pub families: Mutex<Vec<Family>>,
    pub tasks: Mutex<Vec<Task>>,
    pub quick_tasks: Mutex<Vec<QuickTask>>,
    pub calls: Mutex<Vec<Call>>,
    /// Calls that fail with a 500 instead of succeeding.
    pub failing: Mutex<HashSet<Call>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_families(self, families: Vec<Family>) -> Self {
        *self.families.lock().unwrap() = families;
        self
    }

    pub fn with_tasks(self, tasks: Vec<Task>) -> Self {
        *self.tasks.lock().unwrap() = tasks;
        self
    }

    pub fn with_quick_tasks(self, quick_tasks: Vec<QuickTask>) -> Self {
        *self.quick_tasks.lock().unwrap() = quick_tasks;
        self
    }

    pub fn fail_on(&self, call: Call) {
        self.failing.lock().unwrap().insert(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call.clone());
        if self.failing.lock().unwrap().contains(&call) {
            return Err(ApiError::Status {
                method: "MOCK",
                path: format!("{:?}", call),
                status: 500,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl DashboardApi for MockApi {
    async fn list_families(&self) -> Result<Vec<Family>, ApiError> {
        self.record(Call::ListFamilies)?;
        Ok(self.families.lock().unwrap().clone())
    }

    async fn create_family(&self, family: &NewFamily) -> Result<(), ApiError> {
        self.record(Call::CreateFamily(family.title.clone()))?;
        let mut families = self.families.lock().unwrap();
        let id = families.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        families.push(Family {
            id,
            title: family.title.clone(),
            color: family.color.clone(),
        });
        Ok(())
    }

    async fn delete_family(&self, id: i64) -> Result<(), ApiError> {
        self.record(Call::DeleteFamily(id))?;
        self.families.lock().unwrap().retain(|f| f.id != id);
        Ok(())
    }

    async fn list_tasks(&self) -> Result<Vec<Task>, ApiError> {
        self.record(Call::ListTasks)?;
        Ok(self.tasks.lock().unwrap().clone())
    }

    async fn list_quick_tasks(&self) -> Result<Vec<QuickTask>, ApiError> {
        self.record(Call::ListQuickTasks)?;
        Ok(self.quick_tasks.lock().unwrap().clone())
    }

    async fn create_quick_task(&self, task: &NewQuickTask) -> Result<(), ApiError> {
        self.record(Call::CreateQuickTask(task.title.clone()))?;
        let mut quick_tasks = self.quick_tasks.lock().unwrap();
        let id = quick_tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        quick_tasks.push(QuickTask {
            id,
            title: task.title.clone(),
            completed: false,
            kind: task.kind,
        });
        Ok(())
    }

    async fn delete_quick_task(&self, id: i64) -> Result<(), ApiError> {
        self.record(Call::DeleteQuickTask(id))?;
        self.quick_tasks.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }
}
