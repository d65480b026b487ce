use super::{Navigation, NotesWidget, QuickTasksWidget, ROOT_PATH, Sidebar, TaskCompletionChart};
use crate::api::ApiError;
use crate::core::family::Family;
use crate::core::quick_task::QuickTask;
use crate::store::{LocalStore, StoreKey};

/// Identifies one mounted set of widgets. A new epoch starts only when every
/// widget is torn down (sign-in, logout, full reload); a refresh keeps it.
pub type Epoch = u64;

/// Every widget alive while a token is stored.
#[derive(Debug)]
pub struct Session {
    epoch: Epoch,
    store: LocalStore,
    pub notes: NotesWidget,
    pub quick_tasks: QuickTasksWidget,
    pub sidebar: Sidebar,
    pub chart: TaskCompletionChart,
}

impl Session {
    pub fn mount(store: LocalStore, epoch: Epoch) -> Self {
        log::debug!("Mounting session {}", epoch);
        Self {
            epoch,
            notes: NotesWidget::new(store.clone()),
            quick_tasks: QuickTasksWidget::new(),
            sidebar: Sidebar::mount(store.clone()),
            chart: TaskCompletionChart::new(),
            store,
        }
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// Whether a result started under `epoch` still belongs to these widgets.
    pub fn accepts(&self, epoch: Epoch) -> bool {
        if epoch != self.epoch {
            log::debug!("Dropping result from session {} (now {})", epoch, self.epoch);
            return false;
        }
        true
    }

    /// Put the widgets back into their loading state. The epoch is kept so
    /// writes still in flight land on these widgets.
    pub fn begin_refresh(&mut self) {
        self.chart.begin_loading();
    }

    pub fn apply_quick_tasks(&mut self, result: Result<Vec<QuickTask>, ApiError>) -> Option<Navigation> {
        if let Some(nav) = self.expire_if_unauthorized(&result) {
            return Some(nav);
        }
        self.quick_tasks.apply_load(result);
        None
    }

    pub fn apply_families(&mut self, result: Result<Vec<Family>, ApiError>) -> Option<Navigation> {
        if let Some(nav) = self.expire_if_unauthorized(&result) {
            return Some(nav);
        }
        self.sidebar.apply_load(result);
        None
    }

    /// A rejected token is dropped from the store and the user is sent back
    /// to the signed-out page.
    fn expire_if_unauthorized<T>(&self, result: &Result<T, ApiError>) -> Option<Navigation> {
        match result {
            Err(e) if e.is_unauthorized() => {
                log::warn!("Token rejected ({}), signing out", e);
                if let Err(e) = self.store.remove(StoreKey::Token) {
                    log::error!("Failed to drop rejected token: {}", e);
                }
                Some(Navigation::FullLoad { path: ROOT_PATH })
            }
            _ => None,
        }
    }
}
