use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "TODO")]
    Todo,
    #[serde(rename = "DOING")]
    Doing,
    #[serde(rename = "DONE")]
    Done,
    #[serde(rename = "PAUSED")]
    Paused,
    /// Any status this client does not know about. Never counted in the chart.
    #[serde(other)]
    Other,
}

impl TaskStatus {
    /// Row order of the completion chart.
    pub const CHART_ORDER: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::Doing,
        TaskStatus::Paused,
        TaskStatus::Done,
    ];

    pub fn as_keyword(&self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::Doing => "DOING",
            Self::Done => "DONE",
            Self::Paused => "PAUSED",
            Self::Other => "OTHER",
        }
    }
}

/// Task identifier. The backend has served both integer and string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(pub String);

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => TaskId(n.to_string()),
            Raw::Text(s) => TaskId(s),
        })
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        TaskId(s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Owning family id; tasks may be unassigned.
    #[serde(default)]
    pub family: Option<i64>,
    pub status: TaskStatus,
}

impl Task {
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>, family: Option<i64>, status: TaskStatus) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            family,
            status,
        }
    }
}
