//! Core type definitions with validation.

use std::fmt;
use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::clock::Timestamp;

/// Matches an archive slot name such as `work_old/3`.
static ARCHIVE_SLOT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?<base>.+_old)/(?<slot>\d+)$").unwrap());

/// Validation errors for core types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },
}

/// A validated project name.
///
/// Names are opaque except for `/`, which separates a parent from a child
/// (`parent/child`), and the reserved `<project>_old/<N>` archive slots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    /// Creates a new name after validation.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::Empty {
                field: "project name",
            });
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `candidate` is a descendant of this project.
    ///
    /// This is a plain prefix comparison on `<name>/`, so characters that
    /// would be special in a pattern need no escaping.
    pub fn is_parent_of(&self, candidate: &str) -> bool {
        candidate
            .strip_prefix(self.0.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .is_some_and(|child| !child.is_empty())
    }

    /// The archive slot this project ages into.
    ///
    /// `work` ages into `work_old/1`; an archive slot `work_old/1` ages into
    /// `work_old/2`.
    pub fn archive_slot(&self) -> Self {
        let next = ARCHIVE_SLOT_RE.captures(&self.0).and_then(|caps| {
            let slot: u64 = caps["slot"].parse().ok()?;
            Some(format!("{}/{}", &caps["base"], slot.checked_add(1)?))
        });
        Self(next.unwrap_or_else(|| format!("{}_old/1", self.0)))
    }
}

impl TryFrom<String> for ProjectName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProjectName> for String {
    fn from(name: ProjectName) -> Self {
        name.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Whether a project is currently punched in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    In,
    Out,
}

impl Status {
    /// String representation for output.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Detailed status of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub status: Status,
    /// Punch-in time when in, punch-out time when out.
    pub time: Timestamp,
    /// Latest log message of the active entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A project's status, bare or detailed depending on the `full` option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StatusValue {
    Bare(Status),
    Full(StatusReport),
}

impl StatusValue {
    /// The status regardless of detail level.
    pub const fn status(&self) -> Status {
        match self {
            Self::Bare(status) => *status,
            Self::Full(report) => report.status,
        }
    }
}

/// Status of every project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statuses {
    /// Per-project statuses; `None` for projects without entries.
    Projects(IndexMap<String, Option<StatusValue>>),
    /// Nothing is punched in (only produced by the `short` option).
    AllOut,
}

impl Serialize for Statuses {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Projects(projects) => projects.serialize(serializer),
            Self::AllOut => Status::Out.serialize(serializer),
        }
    }
}

/// Result of a mutating ledger operation.
///
/// Neither negative variant is an error: `Unchanged` means the project was
/// already in the requested state, `NotFound` means there was nothing to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The ledger was modified and should be saved.
    Applied,
    /// The operation was a no-op.
    Unchanged,
    /// The project does not exist.
    NotFound,
}

impl Outcome {
    pub const fn from_applied(applied: bool) -> Self {
        if applied { Self::Applied } else { Self::Unchanged }
    }

    /// Returns true if the ledger changed.
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}
