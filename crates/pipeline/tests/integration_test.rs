//! Integration tests for the pipeline.
//!
//! These tests run validation, filtering and aggregation together the way
//! the dashboard does, against the sample dataset and a larger one with
//! repeated regions and reps.

use data_loader::{Record, SalesDataset};
use pipeline::{
    apply_filter, compute_metrics, evaluate, validate_rep_filter, FilterError, FilterSelection,
    Metrics,
};
use std::collections::BTreeSet;

fn regions(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn create_larger_dataset() -> SalesDataset {
    SalesDataset::from_records(vec![
        Record::new("North", 120, "Alex"),
        Record::new("South", 95, "Blake"),
        Record::new("North", 40, "Blake"),
        Record::new("West", 140, "Casey"),
        Record::new("East", 110, "Dakota"),
        Record::new("South", 75, "Alex"),
        Record::new("East", 0, "Casey"),
        Record::new("West", 30, "Alex"),
    ])
    .unwrap()
}

/// Every rep filter worth trying: none, each known rep
fn rep_choices(dataset: &SalesDataset) -> Vec<String> {
    std::iter::once(String::new())
        .chain(dataset.known_values().reps().iter().cloned())
        .collect()
}

/// Every subset of the known regions
fn region_choices(dataset: &SalesDataset) -> Vec<BTreeSet<String>> {
    let all = dataset.known_values().regions();
    (0..1u32 << all.len())
        .map(|mask| {
            all.iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, region)| region.clone())
                .collect()
        })
        .collect()
}

#[test]
fn test_sample_scenario_rep_and_two_regions() {
    let dataset = SalesDataset::sample();
    let known_reps = dataset.known_values().reps();

    validate_rep_filter("Alex", known_reps).unwrap();
    let view = apply_filter(dataset.records(), "Alex", &regions(&["North", "South"]));
    let metrics = compute_metrics(&view);

    assert_eq!(view.records(), [Record::new("North", 120, "Alex")]);
    assert_eq!(metrics, Metrics { total_sales: 120, count: 1 });
}

#[test]
fn test_sample_scenario_unknown_rep() {
    let dataset = SalesDataset::sample();

    let err = validate_rep_filter("Zed", dataset.known_values().reps()).unwrap_err();

    let FilterError::InvalidRep { attempted, known_reps } = err;
    assert_eq!(attempted, "Zed");
    assert_eq!(known_reps, ["Alex", "Blake", "Casey", "Dakota"]);
}

#[test]
fn test_sample_scenario_no_regions() {
    let dataset = SalesDataset::sample();

    let view = apply_filter(dataset.records(), "", &BTreeSet::new());

    assert!(view.is_empty());
    assert_eq!(compute_metrics(&view), Metrics { total_sales: 0, count: 0 });
}

#[test]
fn test_results_match_selection_for_every_combination() {
    let dataset = create_larger_dataset();

    for rep in rep_choices(&dataset) {
        for region_filter in region_choices(&dataset) {
            let view = apply_filter(dataset.records(), &rep, &region_filter);

            // Only matching records...
            for record in &view {
                assert!(region_filter.contains(&record.region));
                assert!(rep.is_empty() || record.rep == rep);
            }

            // ...and all of them, in dataset order
            let expected: Vec<Record> = dataset
                .records()
                .iter()
                .filter(|r| region_filter.contains(&r.region) && (rep.is_empty() || r.rep == rep))
                .cloned()
                .collect();
            assert_eq!(view.records(), expected.as_slice());
        }
    }
}

#[test]
fn test_no_filter_totals_whole_dataset() {
    let dataset = create_larger_dataset();
    let all = dataset.known_values().all_regions();

    let metrics = compute_metrics(&apply_filter(dataset.records(), "", &all));

    assert_eq!(metrics.total_sales, dataset.total_sales());
    assert_eq!(metrics.count, dataset.len());
}

#[test]
fn test_empty_regions_yield_nothing_for_any_rep() {
    let dataset = create_larger_dataset();

    for rep in rep_choices(&dataset) {
        let view = apply_filter(dataset.records(), &rep, &BTreeSet::new());
        assert!(view.is_empty(), "rep {rep:?} should see no rows");
        assert_eq!(compute_metrics(&view), Metrics::default());
    }
}

#[test]
fn test_validation_accepts_exactly_known_reps() {
    let dataset = create_larger_dataset();
    let known_reps = dataset.known_values().reps();

    for rep in rep_choices(&dataset) {
        assert!(validate_rep_filter(&rep, known_reps).is_ok());
    }
    for attempt in ["Zed", "alex", "North", "Alex Blake"] {
        assert!(validate_rep_filter(attempt, known_reps).is_err());
    }
}

#[test]
fn test_apply_filter_is_idempotent() {
    let dataset = create_larger_dataset();
    let region_filter = regions(&["South", "West"]);

    let first = apply_filter(dataset.records(), "Alex", &region_filter);
    let second = apply_filter(dataset.records(), "Alex", &region_filter);

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_repeated_passes_with_changing_selection() {
    let dataset = create_larger_dataset();

    // Mirrors a user narrowing then widening the selection
    let passes = [
        (FilterSelection::defaults(dataset.known_values()), 8, 610),
        (FilterSelection::new("Alex", dataset.known_values().all_regions()), 3, 225),
        (FilterSelection::new("Alex", ["North"]), 1, 120),
        (FilterSelection::new("", ["North"]), 2, 160),
        (FilterSelection::defaults(dataset.known_values()), 8, 610),
    ];

    for (selection, count, total_sales) in passes {
        let snapshot = evaluate(&dataset, &selection).unwrap();
        assert_eq!(snapshot.metrics, Metrics { total_sales, count });
        assert_eq!(
            snapshot.chart.iter().map(|bar| bar.sales).sum::<u64>(),
            total_sales
        );
    }
}

#[test]
fn test_invalid_rep_does_not_affect_next_pass() {
    let dataset = create_larger_dataset();

    let bad = FilterSelection::new("Zed", ["North"]);
    assert!(evaluate(&dataset, &bad).is_err());

    let good = FilterSelection::new("Blake", ["North"]);
    let snapshot = evaluate(&dataset, &good).unwrap();
    assert_eq!(snapshot.view.records(), [Record::new("North", 40, "Blake")]);
}

#[test]
fn test_metrics_at_largest_accepted_total() {
    let dataset = SalesDataset::from_records(vec![
        Record::new("North", u64::MAX - 10, "Alex"),
        Record::new("South", 10, "Blake"),
    ])
    .unwrap();

    let snapshot = evaluate(&dataset, &FilterSelection::defaults(dataset.known_values())).unwrap();

    assert_eq!(snapshot.metrics, Metrics { total_sales: u64::MAX, count: 2 });
}
