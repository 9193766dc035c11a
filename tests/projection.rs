use kira_ngscost::calc::projection::{DEFAULT_MAX_VOLUME, Projection};
use kira_ngscost::factors::RiskFactorTable;
use kira_ngscost::{WorkflowInputs, evaluate};

#[test]
fn default_covers_one_to_hundred() {
    let p = Projection::new(650.0, 365.0);
    let points: Vec<_> = p.iter().collect();
    assert_eq!(points.len(), DEFAULT_MAX_VOLUME as usize);
    assert_eq!(points.first().unwrap().volume, 1);
    assert_eq!(points.last().unwrap().volume, 100);
}

#[test]
fn values_scale_linearly() {
    let p = Projection::new(650.0, 365.0).with_max_volume(10);
    for point in &p {
        let v = point.volume as f64;
        assert_eq!(point.revenue, 650.0 * v);
        assert_eq!(point.cost, 365.0 * v);
        assert_eq!(point.profit, point.revenue - point.cost);
    }
}

#[test]
fn iteration_is_restartable_and_sized() {
    let p = Projection::new(10.0, 4.0).with_max_volume(5);
    let mut it = p.iter();
    assert_eq!(it.len(), 5);
    it.next();
    it.next();
    assert_eq!(it.len(), 3);
    let again: Vec<_> = p.iter().map(|pt| pt.volume).collect();
    assert_eq!(again, vec![1, 2, 3, 4, 5]);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn largest_volume_ends_cleanly() {
    let p = Projection::new(1.0, 0.5).with_max_volume(u64::MAX);
    let mut it = p.iter();
    assert_eq!(it.len(), usize::MAX);
    let last = it.nth((u64::MAX - 1) as usize).unwrap();
    assert_eq!(last.volume, u64::MAX);
    assert_eq!(it.len(), 0);
    assert!(it.next().is_none());
}

#[test]
fn nth_skips_ahead() {
    let p = Projection::new(10.0, 4.0).with_max_volume(5);
    let mut it = p.iter();
    assert_eq!(it.nth(2).unwrap().volume, 3);
    assert_eq!(it.len(), 2);
    assert!(it.nth(5).is_none());
}

#[test]
fn empty_projection() {
    let p = Projection::new(10.0, 4.0).with_max_volume(0);
    assert_eq!(p.iter().count(), 0);
}

#[test]
fn outputs_projection_uses_current_workflow() {
    let inputs = WorkflowInputs::default();
    let out = evaluate(&inputs, &RiskFactorTable::default()).unwrap();
    let p = out.projection(&inputs).unwrap();
    assert_eq!(p.revenue_per_sample, inputs.reimbursement_per_test);
    assert_eq!(p.cost_per_sample, out.total_cost_current.unwrap());
    let tenth = p.iter().nth(9).unwrap();
    assert_eq!(tenth.volume, 10);
    assert!((tenth.profit - out.profit_current.unwrap() * 10.0).abs() < 1e-9);
}
