use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kira_ngscost::cli::{Cli, Commands, FactorsCommand, SessionCommand};
use kira_ngscost::ctx::Ctx;
use kira_ngscost::factors;
use kira_ngscost::io;
use kira_ngscost::pipeline::Pipeline;
use kira_ngscost::session::{self, JsonFileStore, SessionSnapshot, SessionStore};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let inputs = args.scenario.resolve()?;
            let mut ctx = Ctx::new(
                inputs,
                args.out,
                args.factors,
                args.json,
                args.tsv,
                env!("CARGO_PKG_VERSION"),
            );
            ctx.projection_max = args.projection;
            ctx.session_path = args.session;
            ctx.session_key = args.session_key;

            Pipeline::full().run(&mut ctx)?;
            print_summary(&ctx)?;
        }
        Commands::Validate(args) => {
            let inputs = args.scenario.resolve()?;
            let mut ctx = Ctx::new(
                inputs,
                std::path::PathBuf::from("."),
                args.factors,
                false,
                false,
                env!("CARGO_PKG_VERSION"),
            );
            Pipeline::calculate().run(&mut ctx)?;
            print_validate_summary(&ctx)?;
        }
        Commands::Factors(args) => match args.command {
            FactorsCommand::Show(show) => {
                let table = factors::load_table(show.factors.as_deref())?;
                print_factor_table(&table);
            }
        },
        Commands::Session(args) => match args.command {
            SessionCommand::List(list) => {
                let store = JsonFileStore::new(list.store);
                for key in store.keys()? {
                    println!("{}", key);
                }
            }
            SessionCommand::Show(show) => {
                let store = JsonFileStore::new(show.store);
                let (key, snapshot) = load_snapshot(&store, show.key.as_deref())?;
                print_snapshot(&key, &snapshot);
            }
            SessionCommand::Export(export) => {
                let store = JsonFileStore::new(export.store);
                let (_, snapshot) = load_snapshot(&store, export.key.as_deref())?;
                let json = session::export_json(&snapshot)?;
                match export.out {
                    Some(path) => std::fs::write(&path, json)
                        .with_context(|| format!("failed to write {}", path.display()))?,
                    None => println!("{}", json),
                }
            }
        },
    }

    Ok(())
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    print_warnings(ctx);
    Ok(())
}

fn print_validate_summary(ctx: &Ctx) -> Result<()> {
    let outputs = ctx.outputs()?;
    println!("kira-ngscost validate ok");
    println!("samples per run: {}", outputs.samples_per_run);
    println!("risk score: {:.3}", outputs.risk.score);
    print_warnings(ctx);
    Ok(())
}

fn print_warnings(ctx: &Ctx) {
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}

fn print_factor_table(table: &factors::RiskFactorTable) {
    println!("risk factors (version {}):", table.version);
    for def in table.rows() {
        println!("{}\t{}\t{}", def.category, def.value, def.factor);
    }
    println!("max score: {:.4}", table.max_score());
}

fn load_snapshot(store: &JsonFileStore, key: Option<&str>) -> Result<(String, SessionSnapshot)> {
    let key = match key {
        Some(k) => k.to_string(),
        None => store
            .keys()?
            .pop()
            .with_context(|| format!("no sessions in {}", store.path().display()))?,
    };
    let snapshot = store
        .load(&key)?
        .with_context(|| format!("session '{}' not found", key))?;
    Ok((key, snapshot))
}

fn print_snapshot(key: &str, s: &SessionSnapshot) {
    let na = |v: Option<f64>| v.map_or_else(|| "N/A".to_string(), |x| format!("{:.2}", x));
    println!("session {}", key);
    println!(
        "backbone={} positioning={} region={} reporting={} batch_size={}",
        s.backbone, s.positioning, s.region, s.reporting, s.batch_size
    );
    println!(
        "cost_per_sample={} reimbursement={:.2} profit={} roi={} payback={} risk_score={:.3}",
        na(s.cost_per_sample),
        s.reimbursement,
        na(s.profit),
        na(s.roi),
        na(s.payback),
        s.risk_score
    );
}
