//! Closed value sets for enum-constrained fields.
//!
//! The sets are compile-time constants; membership is a case-sensitive exact
//! match with no partial matching.

pub const GUARANTEE_TYPES: &[&str] = &["MORTGAGE", "COLLATERAL", "PERSONAL"];

pub const INSURANCE_TYPES: &[&str] = &["LIFE", "VEHICLE", "PROPERTY", "UNEMPLOYMENT"];

pub const COMMISSION_CATEGORIES: &[&str] = &[
    "ORIGINATION",
    "LATE_PAYMENT",
    "PREPAYMENT",
    "MODIFICATION",
    "ADDITIONAL_SERVICE",
];

pub const COMMISSION_CALCULATION_METHODS: &[&str] = &["PERCENTAGE", "FIXED"];

pub const CALCULATION_BASES: &[&str] = &["30/360", "31/365"];

pub const CLIENT_TYPES: &[&str] = &["INDIVIDUAL", "CORPORATE"];

/// Every loan type is created with the French amortization scheme.
pub const FRENCH_AMORTIZATION: &str = "FRENCH";

/// Case-sensitive membership test against a closed value set.
pub fn value_in_set(set: &[&str], value: &str) -> bool {
    set.iter().any(|candidate| *candidate == value)
}
