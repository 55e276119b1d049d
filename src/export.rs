// 📤 Export - Households as JSON or CSV
// Same grouping as the text report, for tools instead of people

use crate::config::ReportConfig;
use crate::error::Result;
use crate::household::{Household, Households};
use crate::resident::Resident;
use serde::Serialize;

// ============================================================================
// EXPORT TYPES
// ============================================================================

/// One household, as written to JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HouseholdExport {
    pub household_id: String,
    pub address: String,
    pub street: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apartment: Option<String>,
    pub city: String,
    pub state: String,
    pub occupant_count: usize,
    /// Listed residents only (same filter and order as the text report)
    pub adults: Vec<ResidentExport>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResidentExport {
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
}

/// One CSV row: every resident, minors included
#[derive(Debug, Clone, Serialize)]
struct ResidentRow<'a> {
    household_id: &'a str,
    street: &'a str,
    apartment: &'a str,
    city: &'a str,
    state: &'a str,
    first_name: &'a str,
    last_name: &'a str,
    age: u32,
    adult: bool,
}

impl HouseholdExport {
    pub fn from_household(household: &Household, config: &ReportConfig) -> Self {
        let address = household.address();
        HouseholdExport {
            household_id: household.household_id(),
            address: address.to_string(),
            street: address.street().to_string(),
            apartment: address.apartment().map(str::to_string),
            city: address.city().to_string(),
            state: address.state().to_string(),
            occupant_count: household.occupant_count(),
            adults: household
                .adults(config.adult_age_threshold)
                .into_iter()
                .map(ResidentExport::from)
                .collect(),
        }
    }
}

impl From<&Resident> for ResidentExport {
    fn from(resident: &Resident) -> Self {
        ResidentExport {
            first_name: resident.first_name().to_string(),
            last_name: resident.last_name().to_string(),
            age: resident.age(),
        }
    }
}

// ============================================================================
// EXPORT FUNCTIONS
// ============================================================================

/// Households in Address order, ready to serialize
pub fn collect_exports(households: &Households, config: &ReportConfig) -> Vec<HouseholdExport> {
    households
        .iter_sorted()
        .map(|h| HouseholdExport::from_household(h, config))
        .collect()
}

/// Pretty-printed JSON array, one object per household
pub fn to_json(households: &Households, config: &ReportConfig) -> Result<String> {
    let exports = collect_exports(households, config);
    Ok(serde_json::to_string_pretty(&exports)?)
}

/// CSV with a header row and one row per resident
///
/// Households in Address order, residents sorted within each household.
pub fn to_csv(households: &Households, config: &ReportConfig) -> Result<String> {
    // Header is written by hand so empty input still produces it
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record([
        "household_id",
        "street",
        "apartment",
        "city",
        "state",
        "first_name",
        "last_name",
        "age",
        "adult",
    ])?;

    for household in households.iter_sorted() {
        let household_id = household.household_id();
        let address = household.address();

        let mut residents: Vec<&Resident> = household.residents().iter().collect();
        residents.sort();

        for resident in residents {
            let row = ResidentRow {
                household_id: &household_id,
                street: address.street(),
                apartment: address.apartment().unwrap_or(""),
                city: address.city(),
                state: address.state(),
                first_name: resident.first_name(),
                last_name: resident.last_name(),
                age: resident.age(),
                adult: resident.is_older_than(config.adult_age_threshold),
            };
            writer.serialize(row)?;
        }
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

// ============================================================================
// TESTS
// ============================================================================
