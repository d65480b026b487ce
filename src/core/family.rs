use serde::{Deserialize, Serialize};

use super::color::ColorToken;

/// A team/family as returned by `GET family/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Family {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Family {
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            color: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn color_token(&self) -> Option<ColorToken> {
        self.color
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .map(ColorToken::parse)
    }
}

/// Body of `POST family/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewFamily {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
