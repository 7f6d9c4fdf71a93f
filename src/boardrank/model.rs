use crate::rank::OrderKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scope {
    Project,
    Global,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Board,
    List,
    Card,
}

impl RecordKind {
    /// The kind a record of this kind must be parented by.
    pub fn parent_kind(self) -> Option<RecordKind> {
        match self {
            RecordKind::Board => None,
            RecordKind::List => Some(RecordKind::Board),
            RecordKind::Card => Some(RecordKind::List),
        }
    }

    /// The kind of records nested directly under this one.
    pub fn child_kind(self) -> Option<RecordKind> {
        match self {
            RecordKind::Board => Some(RecordKind::List),
            RecordKind::List => Some(RecordKind::Card),
            RecordKind::Card => None,
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Board => "board",
            RecordKind::List => "list",
            RecordKind::Card => "card",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub id: Uuid,
    pub kind: RecordKind,
    pub parent_id: Option<Uuid>,
    pub title: String,
    // Only ever compared; never interpreted.
    pub rank: OrderKey,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record {
    pub fn new(kind: RecordKind, parent_id: Option<Uuid>, title: String, rank: OrderKey) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kind,
            parent_id,
            title,
            rank,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn group(&self) -> SiblingGroup {
        SiblingGroup {
            kind: self.kind,
            parent_id: self.parent_id,
        }
    }
}

/// Records sharing a parent, ordered among themselves by rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SiblingGroup {
    pub kind: RecordKind,
    pub parent_id: Option<Uuid>,
}

impl SiblingGroup {
    pub fn boards() -> Self {
        Self {
            kind: RecordKind::Board,
            parent_id: None,
        }
    }

    /// The group of children of `parent`, if that kind has children.
    pub fn children_of(parent: &Record) -> Option<Self> {
        parent.kind.child_kind().map(|kind| Self {
            kind,
            parent_id: Some(parent.id),
        })
    }

    pub fn contains(&self, record: &Record) -> bool {
        record.kind == self.kind && record.parent_id == self.parent_id
    }
}
