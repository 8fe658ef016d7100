//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// A single field-level validation violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Document field name (wire shape, e.g. `poundsPerBag`).
    pub field: String,
    pub reason: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl core::fmt::Display for Violation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Catalog invariant violations, one entry per offending field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationFailure {
    pub violations: Vec<Violation>,
}

impl ValidationFailure {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn push(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.violations.push(Violation::new(field, reason));
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// `Ok(())` when no violations were collected, `Err(self)` otherwise.
    pub fn into_result(self) -> Result<(), ValidationFailure> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl core::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for v in &self.violations {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{v}")?;
            first = false;
        }
        Ok(())
    }
}

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures. Storage
/// concerns surface only as the opaque `StoreFailure` passthrough.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The requested dispensing method does not match the product's
    /// populated rate field.
    #[error("unit mismatch: {0}")]
    UnitMismatch(String),

    /// A rate field resolved to a value outside its domain (negative rate,
    /// non-positive bag size).
    #[error("invalid rate: {0}")]
    InvalidRate(String),

    /// A record failed validation; carries field-level reasons.
    #[error("validation failed: {0}")]
    Validation(ValidationFailure),

    /// An identifier was invalid (e.g. empty).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A referenced record does not exist (domain-level).
    #[error("not found")]
    NotFound,

    /// A duplicate bucket resolution was requested without naming the
    /// surviving record. The resolver never auto-picks one.
    #[error("ambiguous keep: the surviving record must be named explicitly")]
    AmbiguousKeep,

    /// A write-time precondition failed (e.g. uniqueness guard).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Opaque failure from the store collaborator, never interpreted.
    #[error("store failure: {0}")]
    StoreFailure(String),
}

impl DomainError {
    pub fn unit_mismatch(msg: impl Into<String>) -> Self {
        Self::UnitMismatch(msg.into())
    }

    pub fn invalid_rate(msg: impl Into<String>) -> Self {
        Self::InvalidRate(msg.into())
    }

    pub fn validation(failure: ValidationFailure) -> Self {
        Self::Validation(failure)
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn store_failure(msg: impl Into<String>) -> Self {
        Self::StoreFailure(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
