use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// Outcome – binary launch outcome class
// ---------------------------------------------------------------------------

/// Launch outcome: did the booster land/recover successfully?
/// Serialized as `0` (failure) / `1` (success) in the source CSV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Parse the CSV `class` column. Anything other than 0/1 is rejected.
    pub fn from_class(class: i64) -> Option<Outcome> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// The numeric class plotted on the scatter y-axis.
    pub fn class(self) -> i64 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    /// Axis / legend label, e.g. `Fail (0)`.
    pub fn axis_label(self) -> &'static str {
        match self {
            Outcome::Failure => "Fail (0)",
            Outcome::Success => "Success (1)",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.axis_label())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single launch attempt (one row of the source CSV).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    /// Launch site identifier, e.g. `KSC LC-39A`.
    pub site: String,
    /// Payload mass in kilograms.
    pub payload_mass: f64,
    /// Binary outcome class.
    pub outcome: Outcome,
    /// Booster version category, e.g. `FT`.
    pub booster_category: String,
}

// ---------------------------------------------------------------------------
// PayloadBounds – min/max payload mass across the dataset
// ---------------------------------------------------------------------------

/// Minimum and maximum payload mass over all records, computed once at load.
/// Only used to seed the initial value of the payload range control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

// ---------------------------------------------------------------------------
// SiteSelection – the site control's value
// ---------------------------------------------------------------------------

/// Current value of the site control: a specific site, or the all-sites
/// sentinel meaning "do not filter by site".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Whether a record at `site` passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(s) => s == site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str("All Sites"),
            SiteSelection::Site(s) => f.write_str(s),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed distinct-value indices and
/// payload bounds. Immutable after load.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    /// All launch records (rows).
    pub records: Vec<LaunchRecord>,
    /// Sorted distinct launch site identifiers.
    pub sites: Vec<String>,
    /// Sorted distinct booster version categories.
    pub booster_categories: Vec<String>,
    /// Min/max payload mass across `records`.
    pub payload_bounds: PayloadBounds,
}

impl LaunchDataset {
    /// Build the distinct-value indices and payload bounds from the loaded
    /// records. The loader rejects empty input before calling this, so the
    /// 0/0 bounds fallback is never observed past startup.
    pub fn from_records(records: Vec<LaunchRecord>) -> Self {
        let mut sites: BTreeSet<&str> = BTreeSet::new();
        let mut categories: BTreeSet<&str> = BTreeSet::new();
        let mut bounds: Option<PayloadBounds> = None;

        for rec in &records {
            sites.insert(rec.site.as_str());
            categories.insert(rec.booster_category.as_str());
            bounds = Some(match bounds {
                None => PayloadBounds {
                    min: rec.payload_mass,
                    max: rec.payload_mass,
                },
                Some(b) => PayloadBounds {
                    min: b.min.min(rec.payload_mass),
                    max: b.max.max(rec.payload_mass),
                },
            });
        }

        let sites: Vec<String> = sites.into_iter().map(str::to_string).collect();
        let booster_categories: Vec<String> =
            categories.into_iter().map(str::to_string).collect();

        LaunchDataset {
            records,
            sites,
            booster_categories,
            payload_bounds: bounds.unwrap_or(PayloadBounds { min: 0.0, max: 0.0 }),
        }
    }

    /// Number of launch records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(site: &str, payload: f64, outcome: Outcome, category: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass: payload,
            outcome,
            booster_category: category.to_string(),
        }
    }

    #[test]
    fn outcome_class_round_trip() {
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::from_class(-1), None);
        assert_eq!(Outcome::Failure.class(), 0);
        assert_eq!(Outcome::Success.class(), 1);
    }

    #[test]
    fn dataset_indices_are_sorted_and_distinct() {
        let ds = LaunchDataset::from_records(vec![
            record("VAFB SLC-4E", 9000.0, Outcome::Success, "FT"),
            record("KSC LC-39A", 5000.0, Outcome::Success, "B5"),
            record("KSC LC-39A", 3000.0, Outcome::Failure, "FT"),
        ]);
        assert_eq!(ds.sites, vec!["KSC LC-39A", "VAFB SLC-4E"]);
        assert_eq!(ds.booster_categories, vec!["B5", "FT"]);
        assert_eq!(ds.len(), 3);
        assert!(!ds.is_empty());
    }

    #[test]
    fn payload_bounds_cover_all_records() {
        let ds = LaunchDataset::from_records(vec![
            record("KSC LC-39A", 5000.0, Outcome::Success, "FT"),
            record("KSC LC-39A", 350.5, Outcome::Failure, "v1.0"),
            record("VAFB SLC-4E", 9600.0, Outcome::Success, "B5"),
        ]);
        assert_eq!(
            ds.payload_bounds,
            PayloadBounds {
                min: 350.5,
                max: 9600.0
            }
        );
    }

    #[test]
    fn site_selection_matching() {
        let all = SiteSelection::All;
        let ksc = SiteSelection::Site("KSC LC-39A".to_string());
        assert!(all.matches("KSC LC-39A"));
        assert!(all.matches("VAFB SLC-4E"));
        assert!(ksc.matches("KSC LC-39A"));
        assert!(!ksc.matches("VAFB SLC-4E"));
        assert_eq!(all.to_string(), "All Sites");
        assert_eq!(ksc.to_string(), "KSC LC-39A");
    }
}
