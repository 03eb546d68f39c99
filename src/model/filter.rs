//! # Student Filter
//!
//! Request-scoped predicate built from the optional `country` and `age`
//! query parameters. An absent parameter places no constraint on its field.

use serde::Deserialize;

use super::student::Student;

/// Filter over student records, combined with AND logic
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StudentFilter {
    /// Exact match against `address.country`
    #[serde(default)]
    pub country: Option<String>,

    /// Inclusive lower bound on `age`
    #[serde(default, rename = "age")]
    pub min_age: Option<i64>,
}

impl StudentFilter {
    /// Filter that matches every record
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to an exact country
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Restrict to records with `age >= min_age`
    pub fn with_min_age(mut self, min_age: i64) -> Self {
        self.min_age = Some(min_age);
        self
    }

    /// Drop constraints that carry no value.
    ///
    /// `?country=` arrives as an empty string and is treated as absent.
    pub fn normalized(mut self) -> Self {
        if self.country.as_deref() == Some("") {
            self.country = None;
        }
        self
    }

    /// Check if a record matches every constraint
    pub fn matches(&self, student: &Student) -> bool {
        if let Some(country) = &self.country {
            if &student.address.country != country {
                return false;
            }
        }
        if let Some(min_age) = self.min_age {
            if student.age < min_age {
                return false;
            }
        }
        true
    }
}
