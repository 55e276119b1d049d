// 👤 Resident Value - A person living at an Address
// Names are kept exactly as given; only the address is normalized

use crate::address::Address;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Resident - immutable person record
///
/// Ordering: last name → first name → address → age.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Resident {
    first_name: String,
    last_name: String,
    address: Address,
    age: u32,
}

impl Resident {
    /// Create a resident; takes its own copy of `address`
    pub fn new(first_name: &str, last_name: &str, address: &Address, age: u32) -> Self {
        Resident {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            address: address.clone(),
            age,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Read-only view of the resident's address
    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    /// Strictly older than `threshold`
    pub fn is_older_than(&self, threshold: u32) -> bool {
        self.age > threshold
    }
}

impl Ord for Resident {
    fn cmp(&self, other: &Self) -> Ordering {
        self.last_name
            .cmp(&other.last_name)
            .then_with(|| self.first_name.cmp(&other.first_name))
            .then_with(|| self.address.cmp(&other.address))
            .then_with(|| self.age.cmp(&other.age))
    }
}

impl PartialOrd for Resident {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Resident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {}, {}",
            self.first_name, self.last_name, self.address, self.age
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
