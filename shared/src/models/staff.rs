//! Staff Model

use serde::{Deserialize, Serialize};

/// Staff member (croupier) who can be assigned to events
///
/// Orders embed copies of staff members, so removing a member from the
/// roster leaves existing orders untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
}

impl StaffMember {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
