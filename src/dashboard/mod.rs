//! Widget controllers: in-memory state kept consistent with the local store and the API.
//!
//! Each controller exposes two layers. `apply_*` methods fold a finished
//! remote result into state and are what the GUI calls when a task completes.
//! The `async` convenience methods run the request and apply it in one go and
//! are used by the check tool and the tests.

pub mod chart;
pub mod list;
pub mod notes;
pub mod quick_tasks;
pub mod session;
pub mod sidebar;

pub use chart::{ChartRow, ChartSeries, TaskCompletionChart, process_data};
pub use list::EntityList;
pub use notes::NotesWidget;
pub use quick_tasks::{DeleteOutcome, QuickTasksWidget};
pub use session::{Epoch, Session};
pub use sidebar::{NavTarget, Sidebar};

pub const ROOT_PATH: &str = "/";

/// Page-level navigation requested by a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Discard all in-memory state and open `path` from scratch.
    FullLoad { path: &'static str },
    /// Discard all in-memory state and rebuild the current page.
    Reload,
}

/// Inline error strings shown by the widgets.
pub mod messages {
    pub const QUICK_TASKS_FETCH: &str = "Failed to fetch Quick Tasks. Please try again.";
    pub const QUICK_TASKS_DELETE: &str = "Failed to delete selected tasks. Please try again.";
    pub const FAMILIES_FETCH: &str = "Error fetching families. Please try again.";
    pub const FAMILY_DELETE: &str = "Error deleting family. Please try again.";
    pub const TASKS_FETCH: &str = "Error fetching tasks. Please try again.";
    pub const NOTES_SAVE: &str = "Failed to save notes.";
    pub const CREATE_FAMILY: &str = "Error creating family. Please try again.";
    pub const CREATE_QUICK_TASK: &str = "Error creating quick task. Please try again.";
}
