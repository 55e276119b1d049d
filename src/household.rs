// 🏘️ Household Grouping - Residents bucketed by normalized address
//
// Households are discovered in input order (first time an address is seen)
// and read back either in that order or sorted by Address for the report.

use crate::address::Address;
use crate::resident::Resident;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tracing::debug;

/// Length of the hex household fingerprint
const HOUSEHOLD_ID_LEN: usize = 16;

// ============================================================================
// HOUSEHOLD
// ============================================================================

/// Household - every resident sharing one normalized address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Household {
    address: Address,

    /// Input order
    residents: Vec<Resident>,
}

impl Household {
    fn new(address: Address) -> Self {
        Household {
            address,
            residents: Vec::new(),
        }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Residents in the order they appeared in the input
    pub fn residents(&self) -> &[Resident] {
        &self.residents
    }

    /// Everyone at the address, minors included
    pub fn occupant_count(&self) -> usize {
        self.residents.len()
    }

    /// Residents strictly older than `threshold`, sorted by Resident ordering
    pub fn adults(&self, threshold: u32) -> Vec<&Resident> {
        let mut adults: Vec<&Resident> = self
            .residents
            .iter()
            .filter(|r| r.is_older_than(threshold))
            .collect();
        adults.sort();
        adults
    }

    /// Stable fingerprint of the address (hex SHA-256 prefix)
    ///
    /// Same normalized address → same id, across runs and machines.
    pub fn household_id(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.address.to_string());
        let digest = format!("{:x}", hasher.finalize());
        digest[..HOUSEHOLD_ID_LEN].to_string()
    }
}

// ============================================================================
// HOUSEHOLDS
// ============================================================================

/// Households - ordered collection keyed by Address
#[derive(Debug, Clone, Default)]
pub struct Households {
    /// Discovery order
    households: Vec<Household>,

    /// Address → position in `households`
    index: HashMap<Address, usize>,
}

impl Households {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resident to the household for its address, creating it on first sight
    pub fn add(&mut self, resident: Resident) {
        let position = match self.index.get(resident.address()) {
            Some(&position) => position,
            None => {
                let position = self.households.len();
                self.index.insert(resident.address().clone(), position);
                self.households.push(Household::new(resident.address().clone()));
                position
            }
        };

        self.households[position].residents.push(resident);
    }

    pub fn get(&self, address: &Address) -> Option<&Household> {
        self.index.get(address).map(|&i| &self.households[i])
    }

    /// Number of distinct addresses
    pub fn len(&self) -> usize {
        self.households.len()
    }

    pub fn is_empty(&self) -> bool {
        self.households.is_empty()
    }

    /// Sum of occupants over every household
    pub fn total_occupants(&self) -> usize {
        self.households.iter().map(Household::occupant_count).sum()
    }

    /// Households in the order their address first appeared
    pub fn iter_discovery(&self) -> impl Iterator<Item = &Household> {
        self.households.iter()
    }

    /// Households sorted by Address
    pub fn iter_sorted(&self) -> impl Iterator<Item = &Household> {
        let mut sorted: Vec<&Household> = self.households.iter().collect();
        sorted.sort_by(|a, b| a.address.cmp(&b.address));
        sorted.into_iter()
    }
}

/// Group residents into households, keeping input order inside each one
pub fn group_households<I>(residents: I) -> Households
where
    I: IntoIterator<Item = Resident>,
{
    let mut households = Households::new();
    for resident in residents {
        households.add(resident);
    }

    debug!(
        "Grouped {} residents into {} households",
        households.total_occupants(),
        households.len()
    );

    households
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn resident(first: &str, last: &str, street: &str, age: u32) -> Resident {
        Resident::new(first, last, &Address::new(street, "Seattle", "WA"), age)
    }

    #[test]
    fn test_group_empty() {
        let households = group_households(Vec::<Resident>::new());
        assert!(households.is_empty());
        assert_eq!(households.len(), 0);
        assert_eq!(households.total_occupants(), 0);
    }

    #[test]
    fn test_group_same_address() {
        let households = group_households(vec![
            resident("Bob", "Doe", "123 Gofer St", 25),
            resident("Jane", "Doe", "123 gofer st.", 17),
        ]);

        assert_eq!(households.len(), 1);
        let household = households.iter_sorted().next().unwrap();
        assert_eq!(household.occupant_count(), 2);
        assert_eq!(household.address().to_string(), "123 Gofer St, Seattle, WA");
    }

    #[test]
    fn test_group_preserves_input_order_within_household() {
        let households = group_households(vec![
            resident("Zed", "Adams", "1 A St", 30),
            resident("Amy", "Adams", "1 A St", 40),
            resident("Max", "Brown", "1 A St", 50),
        ]);

        let names: Vec<&str> = households
            .get(&Address::new("1 A St", "Seattle", "WA"))
            .unwrap()
            .residents()
            .iter()
            .map(Resident::first_name)
            .collect();
        assert_eq!(names, vec!["Zed", "Amy", "Max"]);
    }

    #[test]
    fn test_discovery_vs_sorted_order() {
        let households = group_households(vec![
            resident("A", "A", "9 Zulu St", 30),
            resident("B", "B", "1 Alpha St", 30),
            resident("C", "C", "9 Zulu St", 30),
        ]);

        let discovery: Vec<String> = households
            .iter_discovery()
            .map(|h| h.address().street().to_string())
            .collect();
        let sorted: Vec<String> = households
            .iter_sorted()
            .map(|h| h.address().street().to_string())
            .collect();

        assert_eq!(discovery, vec!["9 Zulu St", "1 Alpha St"]);
        assert_eq!(sorted, vec!["1 Alpha St", "9 Zulu St"]);
    }

    #[test]
    fn test_single_occupant_households_kept() {
        let households = group_households(vec![
            resident("A", "A", "1 A St", 5),
            resident("B", "B", "2 B St", 6),
        ]);
        assert_eq!(households.len(), 2);
        assert_eq!(households.total_occupants(), 2);
    }

    #[test]
    fn test_adults_filtered_and_sorted() {
        let households = group_households(vec![
            resident("Zed", "Doe", "1 A St", 40),
            resident("Kid", "Doe", "1 A St", 18),
            resident("Amy", "Doe", "1 A St", 19),
        ]);
        let household = households.iter_sorted().next().unwrap();

        let adults = household.adults(18);
        let names: Vec<&str> = adults.iter().map(|r| r.first_name()).collect();
        assert_eq!(names, vec!["Amy", "Zed"]);
        assert_eq!(household.occupant_count(), 3);
    }

    #[test]
    fn test_household_id_stable() {
        let a = group_households(vec![resident("A", "A", "1 A St", 30)]);
        let b = group_households(vec![resident("B", "B", "1 a st.", 50)]);
        let c = group_households(vec![resident("C", "C", "2 A St", 30)]);

        let id_a = a.iter_sorted().next().unwrap().household_id();
        let id_b = b.iter_sorted().next().unwrap().household_id();
        let id_c = c.iter_sorted().next().unwrap().household_id();

        assert_eq!(id_a.len(), HOUSEHOLD_ID_LEN);
        assert_eq!(id_a, id_b);
        assert_ne!(id_a, id_c);
    }
}
