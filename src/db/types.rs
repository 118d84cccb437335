// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Document types stored in the `users` collection

use serde::{Deserialize, Serialize};

/// Key of the bootstrap user
pub const SEED_USER_ID: i64 = 1;
pub const SEED_USER_NAME: &str = "Jeron";

const UNKNOWN_USER_NAME: &str = "Unknown User";

/// A document in the `users` collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserRecord {
    pub fn new(user_id: i64, name: impl Into<String>) -> Self {
        Self {
            user_id,
            name: Some(name.into()),
        }
    }

    /// The record inserted into an empty store at startup
    pub fn seed() -> Self {
        Self::new(SEED_USER_ID, SEED_USER_NAME)
    }

    /// Stored name, or a placeholder when the document has none
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_USER_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_record() {
        let seed = UserRecord::seed();
        assert_eq!(seed.user_id, 1);
        assert_eq!(seed.display_name(), "Jeron");
    }

    #[test]
    fn test_missing_name_uses_placeholder() {
        let record: UserRecord = serde_json::from_str(r#"{"user_id": 7}"#).unwrap();
        assert_eq!(record.name, None);
        assert_eq!(record.display_name(), "Unknown User");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let record: UserRecord =
            serde_json::from_str(r#"{"_id": "abc", "user_id": 1, "name": "Jeron"}"#).unwrap();
        assert_eq!(record, UserRecord::seed());
    }

    #[test]
    fn test_absent_name_not_serialized() {
        let record = UserRecord {
            user_id: 2,
            name: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"user_id":2}"#);
    }
}
