/// Worker record type definitions
///
/// The single domain entity of the registry and the id-less field set used as the
/// request body for create/update and as client form state.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A persisted worker row
///
/// `id` is assigned by the store and kept dense: the ids in the table are always
/// exactly `1..=N` for N rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Worker {
    /// Store-assigned position, contiguous from 1
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone_number: String,
    pub worker_position: String,
}

impl Worker {
    /// Copy of the replaceable (non-id) fields
    pub fn fields(&self) -> WorkerFields {
        WorkerFields {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            address: self.address.clone(),
            phone_number: self.phone_number.clone(),
            worker_position: self.worker_position.clone(),
        }
    }

    /// Case-insensitive (Unicode) substring match over the five text fields
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [
            &self.first_name,
            &self.last_name,
            &self.worker_position,
            &self.address,
            &self.phone_number,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Worker fields without an id
///
/// Missing keys deserialize to empty strings; an `id` key is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerFields {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone_number: String,
    pub worker_position: String,
}

impl WorkerFields {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        phone_number: impl Into<String>,
        worker_position: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            phone_number: phone_number.into(),
            worker_position: worker_position.into(),
        }
    }

    /// Overwrite a single named field
    pub fn set(&mut self, field: WorkerField, value: impl Into<String>) {
        let slot = match field {
            WorkerField::FirstName => &mut self.first_name,
            WorkerField::LastName => &mut self.last_name,
            WorkerField::Address => &mut self.address,
            WorkerField::PhoneNumber => &mut self.phone_number,
            WorkerField::WorkerPosition => &mut self.worker_position,
        };
        *slot = value.into();
    }
}

/// Names of the editable worker fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerField {
    FirstName,
    LastName,
    Address,
    PhoneNumber,
    WorkerPosition,
}

/// A field name outside the five editable columns
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown worker field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for WorkerField {
    type Err = UnknownField;

    /// Parses the wire/column name of a field (e.g. "first_name")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first_name" => Ok(Self::FirstName),
            "last_name" => Ok(Self::LastName),
            "address" => Ok(Self::Address),
            "phone_number" => Ok(Self::PhoneNumber),
            "worker_position" => Ok(Self::WorkerPosition),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> Worker {
        Worker {
            id: 1,
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            address: "12 Elm Street".to_string(),
            phone_number: "555-0101".to_string(),
            worker_position: "Welder".to_string(),
        }
    }

    #[test]
    fn matches_any_field_case_insensitively() {
        let worker = ann();
        assert!(worker.matches("ann"));
        assert!(worker.matches("ANN"));
        assert!(worker.matches("elm st"));
        assert!(worker.matches("0101"));
        assert!(worker.matches("weld"));
        assert!(worker.matches(""));
        assert!(!worker.matches("bob"));
    }

    #[test]
    fn matches_folds_non_ascii_letters() {
        let worker = Worker {
            first_name: "Đorđe".to_string(),
            address: "Čačak".to_string(),
            ..ann()
        };
        assert!(worker.matches("đorđe"));
        assert!(worker.matches("ČAČAK"));
    }

    #[test]
    fn fields_deserialize_with_missing_keys_and_ignore_id() {
        let fields: WorkerFields =
            serde_json::from_str(r#"{"id": 42, "first_name": "Ann"}"#).unwrap();
        assert_eq!(fields.first_name, "Ann");
        assert_eq!(fields.last_name, "");
        assert_eq!(fields.worker_position, "");
    }

    #[test]
    fn set_overwrites_named_field() {
        let mut fields = ann().fields();
        fields.set("address".parse().unwrap(), "1 Oak Lane");
        assert_eq!(fields.address, "1 Oak Lane");
        assert_eq!(fields.first_name, "Ann");
        assert_eq!(
            "salary".parse::<WorkerField>(),
            Err(UnknownField("salary".to_string()))
        );
    }
}
