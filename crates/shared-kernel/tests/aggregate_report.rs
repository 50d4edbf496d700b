// crates/shared-kernel/tests/aggregate_report.rs
use p8tokens_shared_kernel::{AggregateReport, Budget, BudgetError, FileCount};

#[test]
fn remaining_is_limit_minus_total() {
    let report = AggregateReport::new(
        vec![FileCount::new("a.p8", 100), FileCount::new("b.p8", 92)],
        Budget::default(),
    );
    assert_eq!(report.total, 192usize);
    assert_eq!(report.limit, 8192);
    assert_eq!(report.remaining, 8000);
    assert!(!report.is_over_budget());
    assert_eq!(report.remaining_percent(), 97);
}

#[test]
fn remaining_goes_negative_over_budget() {
    let report = AggregateReport::new(vec![FileCount::new("big.p8", 8200)], Budget::default());
    assert_eq!(report.remaining, -8);
    assert!(report.is_over_budget());
    assert_eq!(report.remaining_percent(), -1);
}

#[test]
fn empty_workspace_has_full_budget() {
    let report = AggregateReport::new(Vec::new(), Budget::default());
    assert!(report.total.is_zero());
    assert_eq!(report.remaining, 8192);
    assert_eq!(report.remaining_percent(), 100);
}

#[test]
fn budget_rejects_zero() {
    assert_eq!(Budget::new(0), Err(BudgetError::Zero));
    assert_eq!(Budget::new(100).map(Budget::limit), Ok(100));
}

#[test]
fn custom_budget() {
    let budget = Budget::new(10).expect("valid budget");
    let report = AggregateReport::new(vec![FileCount::new("a.p8", 4)], budget);
    assert_eq!(report.remaining, 6);
    assert_eq!(report.remaining_percent(), 60);
}
