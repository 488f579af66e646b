use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::error::TaskError;

pub type TaskId = Uuid;

pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

time::serde::format_description!(due_date_format, Date, "[year]-[month]-[day]");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Pending,
    #[serde(rename = "in progress", alias = "in-progress", alias = "in_progress")]
    InProgress,
    Completed,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in progress",
            Status::Completed => "completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Status::Pending),
            "in progress" | "in-progress" | "in_progress" => Ok(Status::InProgress),
            "completed" => Ok(Status::Completed),
            _ => Err(TaskError::InvalidStatus(s.trim().to_string())),
        }
    }
}

/// Variant order matters: `Ord` ranks `High` above `Low`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(TaskError::InvalidPriority(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub priority: Priority,
    /// Records saved without a timestamp load as the Unix epoch.
    #[serde(default = "unknown_created_at", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "due_date_format::option"
    )]
    pub due_date: Option<Date>,
}

impl Task {
    /// Builds a pending task. Callers validate the description first.
    pub fn new(description: impl Into<String>, priority: Priority, due_date: Option<Date>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            status: Status::Pending,
            priority,
            created_at: OffsetDateTime::now_utc(),
            due_date,
        }
    }

    pub fn due_date_label(&self) -> Option<String> {
        self.due_date.and_then(|d| d.format(DATE_FORMAT).ok())
    }
}

fn unknown_created_at() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH
}

pub fn parse_due_date(raw: &str) -> Result<Option<Date>, TaskError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    Date::parse(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| TaskError::InvalidDueDate(raw.to_string()))
}

/// Text that is not a UUID cannot name any stored task.
pub fn parse_task_id(raw: &str) -> Result<TaskId, TaskError> {
    let raw = raw.trim();
    Uuid::parse_str(raw).map_err(|_| TaskError::NotFound(raw.to_string()))
}
