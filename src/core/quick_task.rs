use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuickTaskType {
    #[serde(rename = "DAY")]
    Day,
    #[serde(rename = "MONTH")]
    Month,
    /// Any type this client does not know about. Never shown.
    #[serde(other)]
    Other,
}

impl QuickTaskType {
    pub const ALL: [QuickTaskType; 2] = [QuickTaskType::Day, QuickTaskType::Month];

    pub fn as_keyword(&self) -> &'static str {
        match self {
            Self::Day => "DAY",
            Self::Month => "MONTH",
            Self::Other => "OTHER",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickTask {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(rename = "type")]
    pub kind: QuickTaskType,
}

impl QuickTask {
    pub fn is_daily(&self) -> bool {
        self.kind == QuickTaskType::Day
    }
}

/// Body of `POST quickTasks/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewQuickTask {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: QuickTaskType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_uses_server_keywords() {
        let task: QuickTask =
            serde_json::from_str(r#"{"id":4,"title":"Water plants","completed":true,"type":"MONTH"}"#)
                .unwrap();
        assert_eq!(task.kind, QuickTaskType::Month);
        assert!(task.completed);
        assert!(!task.is_daily());

        let body = NewQuickTask {
            title: "Call mum".to_string(),
            kind: QuickTaskType::Day,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"title": "Call mum", "type": "DAY"})
        );
    }

    #[test]
    fn unknown_type_does_not_fail_the_list() {
        let tasks: Vec<QuickTask> = serde_json::from_str(
            r#"[{"id":1,"title":"Feed cat","type":"DAY"},{"id":2,"title":"Gym","type":"WEEK"}]"#,
        )
        .unwrap();
        assert_eq!(tasks[1].kind, QuickTaskType::Other);
        let daily: Vec<i64> = tasks.iter().filter(|t| t.is_daily()).map(|t| t.id).collect();
        assert_eq!(daily, vec![1]);
    }
}
