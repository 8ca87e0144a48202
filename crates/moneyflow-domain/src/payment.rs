//! Payment channels and their free-form detail bags.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Displayable, Identifiable};

/// Supported payment channel kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum PaymentKind {
    BankAccount,
}

impl fmt::Display for PaymentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PaymentKind::BankAccount => "BankAccount",
        };
        f.write_str(label)
    }
}

/// Immutable registry mapping payment kinds to human-readable labels.
///
/// Built once at startup and passed by reference wherever payments are
/// constructed; a kind missing from the registry cannot be used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentRegistry {
    labels: BTreeMap<PaymentKind, String>,
}

impl PaymentRegistry {
    /// Returns a registry with no registered kinds.
    pub fn empty() -> Self {
        Self {
            labels: BTreeMap::new(),
        }
    }

    /// Registers (or replaces) the label for a kind.
    pub fn with_kind(mut self, kind: PaymentKind, label: impl Into<String>) -> Self {
        self.labels.insert(kind, label.into());
        self
    }

    /// Returns the label for a kind, if registered.
    pub fn label(&self, kind: PaymentKind) -> Option<&str> {
        self.labels.get(&kind).map(String::as_str)
    }
}

impl Default for PaymentRegistry {
    fn default() -> Self {
        Self::empty().with_kind(PaymentKind::BankAccount, "Bank Account")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Errors raised by payment construction and detail lookups.
pub enum PaymentError {
    /// The kind is not present in the payment registry.
    UnknownKind(PaymentKind),
    /// The requested detail key is absent or holds an empty value.
    MissingDetail(String),
}

impl fmt::Display for PaymentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentError::UnknownKind(kind) => {
                write!(f, "invalid payment type: {kind}")
            }
            PaymentError::MissingDetail(key) => {
                write!(f, "key {key} doesn't exist in payment details")
            }
        }
    }
}

impl std::error::Error for PaymentError {}

/// A payment channel plus an opaque key/value detail bag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Payment {
    pub id: Uuid,
    kind: PaymentKind,
    label: String,
    details: BTreeMap<String, String>,
}

impl Payment {
    /// Creates a payment of the given kind, resolving its label through the
    /// registry. Fails when the kind is unregistered.
    pub fn new(kind: PaymentKind, registry: &PaymentRegistry) -> Result<Self, PaymentError> {
        let label = registry
            .label(kind)
            .ok_or(PaymentError::UnknownKind(kind))?;
        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            label: label.to_string(),
            details: BTreeMap::new(),
        })
    }

    pub fn kind(&self) -> PaymentKind {
        self.kind
    }

    /// Human-readable label captured from the registry at construction.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Stores or overwrites a detail value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Returns a stored detail. Absent keys and empty values both fail.
    pub fn get(&self, key: &str) -> Result<&str, PaymentError> {
        self.details
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| PaymentError::MissingDetail(key.to_string()))
    }
}

impl Identifiable for Payment {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Payment {
    fn display_label(&self) -> String {
        self.label.clone()
    }
}
