//! Crowdfunding project record as served by the dataset endpoint.

use serde::{Deserialize, Serialize};

/// One project from the dataset.
///
/// Keys in the dataset are dotted (`s.no`, `amt.pledged`, ...); the serde
/// renames map them onto Rust field names. Only the three numeric columns
/// are required, descriptive text defaults to empty. Numeric columns are
/// strict: a fractional or `null` value rejects the whole dataset, which
/// surfaces as a load error instead of a silently wrong sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "s.no")]
    pub sequence: u32,
    #[serde(rename = "amt.pledged")]
    pub amount_pledged: f64,
    #[serde(rename = "percentage.funded")]
    pub percentage_funded: f64,
    #[serde(default)]
    pub blurb: String,
    #[serde(default)]
    pub by: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub currency: String,
    #[serde(rename = "end.time", default)]
    pub end_time: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "num.backers", default)]
    pub num_backers: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub url: String,
}

impl Project {
    /// Creates a project with only the numeric columns filled in.
    #[must_use]
    pub fn new(sequence: u32, percentage_funded: f64, amount_pledged: f64) -> Self {
        Self {
            sequence,
            amount_pledged,
            percentage_funded,
            blurb: String::new(),
            by: String::new(),
            country: String::new(),
            currency: String::new(),
            end_time: String::new(),
            location: String::new(),
            num_backers: String::new(),
            state: String::new(),
            title: String::new(),
            kind: String::new(),
            url: String::new(),
        }
    }

    /// Funding percentage as shown in the table, e.g. `186%`.
    #[must_use]
    pub fn percentage_label(&self) -> String {
        format!("{}%", self.percentage_funded)
    }

    /// Pledged amount as shown in the table, e.g. `$15823`.
    #[must_use]
    pub fn pledged_label(&self) -> String {
        format!("${}", self.amount_pledged)
    }
}
