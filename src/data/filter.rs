use std::collections::BTreeMap;

use super::model::{LaunchDataset, Outcome, SiteSelection};

// ---------------------------------------------------------------------------
// Outcome aggregation (pie chart input)
// ---------------------------------------------------------------------------

/// One pie slice: a label and the number of matching records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeSlice {
    pub label: String,
    pub count: usize,
}

/// Grouped outcome counts plus the chart title. Slices are in sorted label
/// order, which keeps slice colours stable across re-renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeSummary {
    pub title: String,
    pub slices: Vec<OutcomeSlice>,
}

impl OutcomeSummary {
    /// Sum of all slice counts.
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// Derive the outcome summary for the current site selection.
///
/// * All sites: successful launches only, one slice per site.
/// * Single site: all launches at that site, one slice per outcome class.
///
/// A selection matching no records (including a site absent from the
/// dataset) yields an empty summary, never an error.
pub fn aggregate_outcomes(dataset: &LaunchDataset, selection: &SiteSelection) -> OutcomeSummary {
    match selection {
        SiteSelection::All => {
            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for rec in &dataset.records {
                if rec.outcome == Outcome::Success {
                    *counts.entry(rec.site.as_str()).or_default() += 1;
                }
            }
            OutcomeSummary {
                title: "Total Successful Launches by Site (All Sites)".to_string(),
                slices: counts
                    .into_iter()
                    .map(|(site, count)| OutcomeSlice {
                        label: site.to_string(),
                        count,
                    })
                    .collect(),
            }
        }
        SiteSelection::Site(site) => {
            let mut counts: BTreeMap<Outcome, usize> = BTreeMap::new();
            for rec in &dataset.records {
                if rec.site == *site {
                    *counts.entry(rec.outcome).or_default() += 1;
                }
            }
            OutcomeSummary {
                title: format!("Launch Outcomes at {site}"),
                slices: counts
                    .into_iter()
                    .map(|(outcome, count)| OutcomeSlice {
                        label: outcome.axis_label().to_string(),
                        count,
                    })
                    .collect(),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Payload range filter (scatter chart input)
// ---------------------------------------------------------------------------

/// Indices of the records passing the payload/site filter, plus the chart
/// title. Indices point into the immutable dataset so the rows themselves
/// pass through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadSelection {
    pub title: String,
    pub indices: Vec<usize>,
}

impl PayloadSelection {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Retain records whose payload mass lies in the closed interval
/// `[low, high]`, further narrowed to a single site unless the all-sites
/// sentinel is selected. Row order is the dataset's order.
pub fn filter_payload(
    dataset: &LaunchDataset,
    low: f64,
    high: f64,
    selection: &SiteSelection,
) -> PayloadSelection {
    let indices = dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| rec.payload_mass >= low && rec.payload_mass <= high)
        .filter(|(_, rec)| selection.matches(&rec.site))
        .map(|(i, _)| i)
        .collect();

    let title = match selection {
        SiteSelection::All => "Payload vs. Success — All Sites".to_string(),
        SiteSelection::Site(site) => format!("Payload vs. Success — {site}"),
    };

    PayloadSelection { title, indices }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LaunchRecord;

    fn record(site: &str, payload: f64, outcome: Outcome, category: &str) -> LaunchRecord {
        LaunchRecord {
            site: site.to_string(),
            payload_mass: payload,
            outcome,
            booster_category: category.to_string(),
        }
    }

    /// The worked three-row example: two KSC launches (one success, one
    /// failure) and one successful VAFB launch.
    fn example_dataset() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            record("KSC LC-39A", 5000.0, Outcome::Success, "FT"),
            record("KSC LC-39A", 3000.0, Outcome::Failure, "FT"),
            record("VAFB SLC-4E", 9000.0, Outcome::Success, "B5"),
        ])
    }

    fn all() -> SiteSelection {
        SiteSelection::All
    }

    fn site(s: &str) -> SiteSelection {
        SiteSelection::Site(s.to_string())
    }

    #[test]
    fn all_sites_counts_one_success_per_site() {
        let ds = example_dataset();
        let summary = aggregate_outcomes(&ds, &all());
        assert_eq!(summary.title, "Total Successful Launches by Site (All Sites)");
        assert_eq!(
            summary.slices,
            vec![
                OutcomeSlice {
                    label: "KSC LC-39A".to_string(),
                    count: 1
                },
                OutcomeSlice {
                    label: "VAFB SLC-4E".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn all_sites_sum_equals_total_successes() {
        let ds = example_dataset();
        let summary = aggregate_outcomes(&ds, &all());
        let successes = ds
            .records
            .iter()
            .filter(|r| r.outcome == Outcome::Success)
            .count();
        assert_eq!(summary.total(), successes);
    }

    #[test]
    fn single_site_counts_per_outcome_class() {
        let ds = example_dataset();
        let summary = aggregate_outcomes(&ds, &site("KSC LC-39A"));
        assert_eq!(summary.title, "Launch Outcomes at KSC LC-39A");
        assert_eq!(
            summary.slices,
            vec![
                OutcomeSlice {
                    label: "Fail (0)".to_string(),
                    count: 1
                },
                OutcomeSlice {
                    label: "Success (1)".to_string(),
                    count: 1
                },
            ]
        );
        // Counts sum to the number of launches at the site.
        assert_eq!(summary.total(), 2);
    }

    #[test]
    fn unknown_site_yields_empty_summary() {
        let ds = example_dataset();
        let summary = aggregate_outcomes(&ds, &site("Boca Chica"));
        assert!(summary.is_empty());
        assert_eq!(summary.total(), 0);
    }

    #[test]
    fn full_range_site_filter_equals_site_subset() {
        let ds = example_dataset();
        for s in &ds.sites {
            let selection = filter_payload(&ds, 0.0, 10_000.0, &site(s));
            let expected: Vec<usize> = ds
                .records
                .iter()
                .enumerate()
                .filter(|(_, r)| r.site == *s)
                .map(|(i, _)| i)
                .collect();
            assert_eq!(selection.indices, expected);

            // Aggregating that site sums to the subset's row count.
            let summary = aggregate_outcomes(&ds, &site(s));
            assert_eq!(summary.total(), expected.len());
        }
    }

    #[test]
    fn worked_example_payload_window() {
        let ds = example_dataset();
        let selection = filter_payload(&ds, 4000.0, 10_000.0, &all());
        assert_eq!(selection.indices, vec![0, 2]);
        assert_eq!(selection.title, "Payload vs. Success — All Sites");
    }

    #[test]
    fn widening_the_range_never_shrinks_the_result() {
        let ds = example_dataset();
        let narrow = filter_payload(&ds, 3000.0, 5000.0, &all());
        let wide = filter_payload(&ds, 0.0, 10_000.0, &all());
        assert!(narrow.len() <= wide.len());
        for idx in &narrow.indices {
            assert!(wide.indices.contains(idx));
        }
    }

    #[test]
    fn derivations_are_idempotent() {
        let ds = example_dataset();
        let sel = site("KSC LC-39A");
        assert_eq!(
            aggregate_outcomes(&ds, &sel),
            aggregate_outcomes(&ds, &sel)
        );
        assert_eq!(
            filter_payload(&ds, 2000.0, 6000.0, &sel),
            filter_payload(&ds, 2000.0, 6000.0, &sel)
        );
    }

    #[test]
    fn degenerate_range_keeps_exact_matches_only() {
        let ds = example_dataset();
        let selection = filter_payload(&ds, 5000.0, 5000.0, &all());
        assert_eq!(selection.indices, vec![0]);
    }

    #[test]
    fn range_outside_dataset_bounds_is_empty() {
        let ds = example_dataset();
        let below = filter_payload(&ds, 0.0, 2000.0, &all());
        assert!(below.is_empty());
        let above = filter_payload(&ds, 9500.0, 10_000.0, &all());
        assert!(above.is_empty());
    }

    #[test]
    fn site_filter_composes_with_payload_range() {
        let ds = example_dataset();
        let selection = filter_payload(&ds, 4000.0, 10_000.0, &site("KSC LC-39A"));
        assert_eq!(selection.indices, vec![0]);
        assert_eq!(selection.title, "Payload vs. Success — KSC LC-39A");

        let unknown = filter_payload(&ds, 0.0, 10_000.0, &site("Boca Chica"));
        assert!(unknown.is_empty());
    }
}
