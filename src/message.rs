use taskly::api::ApiError;
use taskly::core::family::Family;
use taskly::core::quick_task::QuickTask;
use taskly::core::task::Task;
use taskly::dashboard::{DeleteOutcome, Epoch, NavTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Family,
    QuickTask,
}

#[derive(Debug, Clone)]
pub enum Message {
    // Shell
    Refresh,
    Logout,

    // Signed-out screen
    TokenInputChanged(String),
    SignIn,

    // Notes
    NoteDraftChanged(String),
    NoteSubmit,
    DeleteNote(usize),

    // Quick tasks
    QuickTasksLoaded(Epoch, Result<Vec<QuickTask>, ApiError>),
    ToggleQuickTask(i64),
    DeleteSelectedQuickTasks,
    QuickTasksDeleted(Epoch, DeleteOutcome),
    /// Reload after a delete; the flag says whether the delete failed part way.
    QuickTasksReloaded(Epoch, bool, Result<Vec<QuickTask>, ApiError>),

    // Families
    FamiliesLoaded(Epoch, Result<Vec<Family>, ApiError>),
    DeleteFamily(i64),
    FamilyDeleted(Epoch, i64, Result<(), ApiError>),

    // Chart
    ChartLoaded(Epoch, Result<(Vec<Task>, Vec<Family>), String>),

    // Creation dialogs
    OpenDialog(DialogKind),
    CloseDialog,
    DialogTitleChanged(String),
    DialogOptionSelected(usize),
    DialogSubmit,
    DialogFinished(Epoch, DialogKind, Result<(), ApiError>),
}

pub trait NavTargetExt {
    fn title(&self) -> String;
    fn icon_name(&self) -> &'static str;
}

impl NavTargetExt for NavTarget {
    fn title(&self) -> String {
        match self {
            NavTarget::Dashboard => crate::fl!("nav-dashboard"),
            NavTarget::Calendar => crate::fl!("nav-calendar"),
            NavTarget::MyTasks => crate::fl!("nav-my-tasks"),
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            NavTarget::Dashboard => "view-grid-symbolic",
            NavTarget::Calendar => "x-office-calendar-symbolic",
            NavTarget::MyTasks => "checkbox-checked-symbolic",
        }
    }
}
