use kira_ngscost::calc::cost::{
    annual_cost, break_even_volume, cost_per_sample, payback_samples, profit, roi, round2,
    samples_per_run,
};
use kira_ngscost::factors::RiskFactorTable;
use kira_ngscost::{CalcError, WorkflowInputs, evaluate};

fn scenario_a() -> WorkflowInputs {
    WorkflowInputs {
        flowcell_output_gb: 360.0,
        panel_size_gb: 6.0,
        flowcell_cost: 6335.0,
        wet_bench_cost: 150.0,
        bioinformatics_cost: 110.0,
        bundle_cost: 225.0,
        reimbursement_per_test: 650.0,
        ..WorkflowInputs::default()
    }
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn scenario_a_matches_reference_values() {
    let out = evaluate(&scenario_a(), &RiskFactorTable::default()).unwrap();
    assert_eq!(out.samples_per_run, 60);
    assert!(close(round2(out.flowcell_cost_per_sample.unwrap()), 105.58));
    assert!(close(round2(out.total_cost_current.unwrap()), 365.58));
    assert!(close(round2(out.total_cost_alt.unwrap()), 330.58));
    assert!(close(round2(out.profit_current.unwrap()), 284.42));
    assert!(close(round2(out.profit_alt.unwrap()), 319.42));
    assert!(close(round2(out.profit_delta.unwrap()), 35.00));
}

#[test]
fn samples_per_run_brackets_capacity() {
    let outputs = [1.0, 7.5, 100.0, 360.0, 999.9, 6000.0];
    let panels = [0.3, 1.0, 5.0, 6.0, 45.0, 90.0, 1200.0];
    for &flowcell in &outputs {
        for &panel in &panels {
            let n = samples_per_run(flowcell, panel).unwrap();
            assert_eq!(n, (flowcell / panel).floor() as u64);
            assert!(n as f64 * panel <= flowcell + 1e-9);
            assert!(flowcell < (n + 1) as f64 * panel);
        }
    }
}

#[test]
fn samples_per_run_rejects_non_positive_panel() {
    assert!(matches!(
        samples_per_run(360.0, 0.0),
        Err(CalcError::DivisionUndefined { .. })
    ));
    assert!(matches!(
        samples_per_run(360.0, -6.0),
        Err(CalcError::DivisionUndefined { .. })
    ));
}

#[test]
fn cost_per_sample_adds_extras_in_order() {
    let c = cost_per_sample(6000.0, 60, &[150.0, 110.0]).unwrap();
    assert!(close(c, 360.0));
    assert!(close(cost_per_sample(6000.0, 60, &[]).unwrap(), 100.0));
    assert!(matches!(
        cost_per_sample(6000.0, 0, &[1.0]),
        Err(CalcError::DivisionUndefined { .. })
    ));
}

#[test]
fn profit_is_exact_and_may_be_negative() {
    assert_eq!(profit(650.0, 365.5), 650.0 - 365.5);
    assert_eq!(profit(100.0, 250.0), -150.0);
}

#[test]
fn profit_delta_is_alt_minus_current() {
    let out = evaluate(&scenario_a(), &RiskFactorTable::default()).unwrap();
    assert_eq!(
        out.profit_delta.unwrap(),
        out.profit_alt.unwrap() - out.profit_current.unwrap()
    );
}

#[test]
fn roi_undefined_only_for_zero_cost() {
    assert_eq!(roi(10.0, 0.0), None);
    assert_eq!(roi(0.0, 0.0), None);
    for &(p, c) in &[(284.42, 365.58), (-50.0, 200.0), (0.0, 1.0)] {
        let r = roi(p, c).unwrap();
        assert!((r - p / c * 100.0).abs() < 1e-9);
    }
}

#[test]
fn payback_requires_positive_profit() {
    assert_eq!(payback_samples(300.0, 0.0), None);
    assert_eq!(payback_samples(300.0, -10.0), None);
    assert!(close(payback_samples(300.0, 150.0).unwrap(), 2.0));
}

#[test]
fn annual_cost_and_break_even_primitives() {
    assert!(close(annual_cost(950.0, 1000, 20_000.0), 970_000.0));
    assert!(close(annual_cost(75.0, 1000, 0.0), 75_000.0));
    assert_eq!(break_even_volume(20_000.0, 0.0), None);
    assert_eq!(break_even_volume(20_000.0, -5.0), None);
    assert!(close(break_even_volume(20_000.0, 875.0).unwrap(), 20_000.0 / 875.0));
}

#[test]
fn zero_samples_per_run_leaves_per_sample_values_undefined() {
    let inputs = WorkflowInputs {
        panel_size_gb: 500.0,
        ..scenario_a()
    };
    let out = evaluate(&inputs, &RiskFactorTable::default()).unwrap();
    assert_eq!(out.samples_per_run, 0);
    assert_eq!(out.flowcell_cost_per_sample, None);
    assert_eq!(out.total_cost_current, None);
    assert_eq!(out.profit_delta, None);
    assert_eq!(out.roi_percent, None);
    assert_eq!(out.runs_per_year, None);
    assert!(out.comparison.is_none());
    assert!(out.risk.score > 0.0);
}

#[test]
fn loss_making_scenario_has_no_payback() {
    let inputs = WorkflowInputs {
        reimbursement_per_test: 100.0,
        ..scenario_a()
    };
    let out = evaluate(&inputs, &RiskFactorTable::default()).unwrap();
    assert!(out.profit_current.unwrap() < 0.0);
    assert!(out.roi_percent.unwrap() < 0.0);
    assert_eq!(out.payback_samples, None);
}

#[test]
fn runs_per_year_rounds_up() {
    let inputs = WorkflowInputs {
        annual_volume: 121,
        ..scenario_a()
    };
    let out = evaluate(&inputs, &RiskFactorTable::default()).unwrap();
    assert_eq!(out.runs_per_year, Some(3));
}

#[test]
fn invalid_magnitude_fails_whole_evaluation() {
    let inputs = WorkflowInputs {
        bundle_cost: -1.0,
        ..scenario_a()
    };
    let err = evaluate(&inputs, &RiskFactorTable::default()).unwrap_err();
    assert!(matches!(
        err,
        CalcError::InvalidMagnitude {
            field: "bundle_cost",
            ..
        }
    ));

    let inputs = WorkflowInputs {
        annual_volume: 0,
        ..scenario_a()
    };
    assert!(evaluate(&inputs, &RiskFactorTable::default()).is_err());
}

#[test]
fn evaluation_is_pure() {
    let table = RiskFactorTable::default();
    let first = evaluate(&scenario_a(), &table).unwrap();
    let other = WorkflowInputs {
        panel_size_gb: 90.0,
        ..scenario_a()
    };
    let _ = evaluate(&other, &table).unwrap();
    let again = evaluate(&scenario_a(), &table).unwrap();
    assert_eq!(first, again);
}
