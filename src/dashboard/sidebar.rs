use super::list::EntityList;
use super::{Navigation, ROOT_PATH, messages};
use crate::api::{ApiError, DashboardApi};
use crate::core::color;
use crate::core::family::Family;
use crate::store::LocalStore;

/// Static navigation entries shown above the team list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Dashboard,
    Calendar,
    MyTasks,
}

impl NavTarget {
    pub const ALL: [NavTarget; 3] = [NavTarget::Dashboard, NavTarget::Calendar, NavTarget::MyTasks];

    pub fn href(&self) -> &'static str {
        match self {
            Self::Dashboard => "/auth/dashboard",
            Self::Calendar => "/auth/calendar",
            Self::MyTasks => "/auth/tasks",
        }
    }
}

/// Family list with cache-then-fetch loading and the logout action.
#[derive(Debug)]
pub struct Sidebar {
    families: EntityList<Family>,
    store: LocalStore,
    cache_hit: bool,
}

impl Sidebar {
    /// Build from the cached family list. Check [`Sidebar::needs_fetch`] afterwards.
    pub fn mount(store: LocalStore) -> Self {
        let cached = match store.families() {
            Ok(cached) => cached,
            Err(e) => {
                log::warn!("Ignoring cached families: {}", e);
                None
            }
        };
        let cache_hit = cached.is_some();
        if cache_hit {
            log::debug!("Using cached families");
        }
        Self {
            families: EntityList::from_items(cached.unwrap_or_default()),
            store,
            cache_hit,
        }
    }

    /// Whether mount found no usable cache and a fetch is required.
    pub fn needs_fetch(&self) -> bool {
        !self.cache_hit
    }

    pub fn families(&self) -> &[Family] {
        self.families.items()
    }

    pub fn error(&self) -> Option<&str> {
        self.families.error()
    }

    /// Report an error raised outside the sidebar, e.g. by the creation dialog.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.families.fail(message);
    }

    /// Dot colour for the family at `index`.
    pub fn dot_color(&self, index: usize) -> String {
        let token = self.families.items().get(index).and_then(Family::color_token);
        color::resolve_hex(token.as_ref(), index)
    }

    pub fn apply_load(&mut self, result: Result<Vec<Family>, ApiError>) -> bool {
        let replaced = self
            .families
            .apply(result, "families", messages::FAMILIES_FETCH);
        if replaced {
            self.mirror();
        }
        replaced
    }

    pub async fn load(&mut self, api: &dyn DashboardApi) -> bool {
        let result = api.list_families().await;
        self.apply_load(result)
    }

    /// Fold a finished family DELETE in. Success drops the family locally and
    /// asks for a full reload so every dependent widget starts over.
    pub fn apply_delete(&mut self, id: i64, result: Result<(), ApiError>) -> Option<Navigation> {
        match result {
            Ok(()) => {
                log::info!("Deleted family {}", id);
                self.families.retain(|f| f.id != id);
                self.mirror();
                Some(Navigation::Reload)
            }
            Err(e) => {
                log::error!("Error deleting family {}: {}", id, e);
                self.families.fail(messages::FAMILY_DELETE);
                None
            }
        }
    }

    pub async fn delete_family(&mut self, api: &dyn DashboardApi, id: i64) -> Option<Navigation> {
        let result = api.delete_family(id).await;
        self.apply_delete(id, result)
    }

    /// Clear every stored key and leave for the root page.
    pub fn logout(&mut self) -> Navigation {
        if let Err(e) = self.store.clear() {
            log::error!("Failed to clear local store on logout: {}", e);
        }
        self.families.clear();
        self.cache_hit = false;
        log::info!("Logged out");
        Navigation::FullLoad { path: ROOT_PATH }
    }

    fn mirror(&mut self) {
        if let Err(e) = self.store.set_families(self.families.items()) {
            log::error!("Failed to cache families: {}", e);
        }
    }
}
