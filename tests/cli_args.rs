use clap::Parser;
use kira_ngscost::cli::{Cli, Commands, ScenarioArgs};
use kira_ngscost::schema::categories::{PanelPreset, Platform, Positioning, Region};

#[test]
fn run_defaults() {
    let cli = Cli::parse_from(["kira-ngscost", "run"]);
    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.projection, 100);
            assert!(!args.json);
            assert!(args.session.is_none());
            let inputs = args.scenario.resolve().unwrap();
            assert_eq!(inputs.panel_size_gb, 6.0);
            assert_eq!(inputs.flowcell_cost, 6335.0);
        }
        _ => panic!("expected run command"),
    }
}

#[test]
fn categorical_flags_parse_loosely() {
    let cli = Cli::parse_from([
        "kira-ngscost",
        "run",
        "--platform",
        "aviti-high",
        "--panel",
        "wgs",
        "--positioning",
        "reflex",
        "--region",
        "south",
    ]);
    match cli.command {
        Commands::Run(args) => {
            let inputs = args.scenario.resolve().unwrap();
            assert_eq!(inputs.platform, Platform::AvitiHigh);
            assert_eq!(inputs.panel, Some(PanelPreset::Wgs));
            assert_eq!(inputs.panel_size_gb, 90.0);
            assert_eq!(inputs.positioning, Positioning::Reflex);
            assert_eq!(inputs.region, Region::South);
        }
        _ => panic!("expected run command"),
    }
}

#[test]
fn unknown_region_is_a_parse_error() {
    let res = Cli::try_parse_from(["kira-ngscost", "run", "--region", "Pacific"]);
    assert!(res.is_err());
}

#[test]
fn panel_size_overrides_preset() {
    let args = ScenarioArgs {
        panel: Some(PanelPreset::Wes),
        panel_size_gb: Some(40.0),
        ..ScenarioArgs::default()
    };
    assert_eq!(args.resolve().unwrap().panel_size_gb, 40.0);
}

#[test]
fn bare_panel_size_replaces_default_preset() {
    let args = ScenarioArgs {
        panel_size_gb: Some(45.0),
        ..ScenarioArgs::default()
    };
    let inputs = args.resolve().unwrap();
    assert_eq!(inputs.panel, Some(PanelPreset::Wes));
    assert!(inputs.warnings().is_empty());

    let args = ScenarioArgs {
        panel_size_gb: Some(12.0),
        ..ScenarioArgs::default()
    };
    assert_eq!(args.resolve().unwrap().panel, None);
}

#[test]
fn negative_flag_is_rejected_on_resolve() {
    let args = ScenarioArgs {
        reimbursement: Some(-5.0),
        ..ScenarioArgs::default()
    };
    assert!(args.resolve().is_err());
}
