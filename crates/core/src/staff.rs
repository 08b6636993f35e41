//! Staff roster: a read-only reference entity loaded from JSON, plus the
//! role-category mapping used by the leaderboard and analytics views.

use serde::{Deserialize, Serialize};

use crate::types::StaffId;

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub id: StaffId,
    pub name: String,
    #[serde(default)]
    pub role: String,
}

/// Canonical grouping of free-text role strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RoleCategory {
    Command,
    Lead,
    Senior,
    Attorney,
    Junior,
    Paralegal,
    Other,
}

impl RoleCategory {
    /// Every category, in display order.
    pub const ALL: [RoleCategory; 7] = [
        RoleCategory::Command,
        RoleCategory::Lead,
        RoleCategory::Senior,
        RoleCategory::Attorney,
        RoleCategory::Junior,
        RoleCategory::Paralegal,
        RoleCategory::Other,
    ];

    /// Wire name, used as a bucket key in role-distribution output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Command => "Command",
            Self::Lead => "Lead",
            Self::Senior => "Senior",
            Self::Attorney => "Attorney",
            Self::Junior => "Junior",
            Self::Paralegal => "Paralegal",
            Self::Other => "Other",
        }
    }
}

/// Map a free-text role string onto its canonical category.
///
/// Checks are ordered so that e.g. "Lead Public Defender" lands in `Lead`
/// before the generic attorney patterns get a chance.
pub fn canonical_role(role: &str) -> RoleCategory {
    let r = role.to_lowercase();
    if r.contains("chief") || r.contains("deputy") {
        RoleCategory::Command
    } else if r.contains("lead") {
        RoleCategory::Lead
    } else if r.contains("senior") {
        RoleCategory::Senior
    } else if r.contains("junior") {
        RoleCategory::Junior
    } else if r.contains("paralegal") {
        RoleCategory::Paralegal
    } else if r.contains("attorney") || r.contains("lawyer") || r.contains("counsel") {
        RoleCategory::Attorney
    } else {
        RoleCategory::Other
    }
}

/// The staff roster, read-only from this crate's perspective.
#[derive(Debug, Clone, Default)]
pub struct StaffDirectory {
    members: Vec<Staff>,
}

impl StaffDirectory {
    pub fn new(members: Vec<Staff>) -> Self {
        Self { members }
    }

    /// Parse a roster from its JSON representation (an array of entries).
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Vec<Staff>>(raw).map(Self::new)
    }

    pub fn members(&self) -> &[Staff] {
        &self.members
    }

    pub fn get(&self, id: StaffId) -> Option<&Staff> {
        self.members.iter().find(|s| s.id == id)
    }

    /// Display name for an id; falls back to the id itself for staff that
    /// appear in records but not in the roster.
    pub fn name_of(&self, id: StaffId) -> String {
        self.get(id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// First roster member whose first name occurs in the given text,
    /// case-insensitively. Used by the OCR form-fill heuristics.
    pub fn match_first_name(&self, text: &str) -> Option<&Staff> {
        let haystack = text.to_lowercase();
        self.members.iter().find(|s| {
            s.name
                .split_whitespace()
                .next()
                .is_some_and(|first| haystack.contains(&first.to_lowercase()))
        })
    }
}
