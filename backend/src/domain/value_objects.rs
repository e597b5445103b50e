/// Value objects for the domain layer
use super::base::{DomainError, DomainResult, ValueObject};
use std::fmt;

/// Unique identifier for a wiki page: a non-empty string of ASCII decimal digits
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageId(String);

impl PageId {
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.is_empty() {
            return Err(DomainError::InvalidValue("PageId cannot be empty".to_string()));
        }
        if !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidValue(format!(
                "PageId must be decimal digits, got {:?}",
                id
            )));
        }
        // Numeric value must be representable so the store can order and allocate ids
        id.parse::<u64>().map_err(|_| {
            DomainError::InvalidValue(format!("PageId out of range: {}", id))
        })?;
        Ok(PageId(id))
    }

    /// Build the id for a freshly allocated sequence number
    pub fn from_number(value: u64) -> Self {
        PageId(value.to_string())
    }

    /// Numeric value of the identifier
    pub fn number(&self) -> u64 {
        // Validated in `new`; `from_number` always round-trips
        self.0.parse().unwrap_or(0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for PageId {}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
