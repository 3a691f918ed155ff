use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use yield_core::models::{InputFieldId, ViewMode};
use yield_ui::form::{ScheduleWorkflow, SubmitOutcome};
use yield_ui::{logging, render};

/// Derive a per-period price/revenue schedule and render it.
///
/// Takes a starting price, a revenue rate per unit period, and a period
/// count, then prints the schedule as a table or writes it as an HTML line
/// chart. Values are entered as raw field input and validated per field,
/// so errors are reported the way the form front-end reports them.
#[derive(Parser, Debug)]
#[command(name = "yield-estimator")]
#[command(version, about, long_about = None)]
struct Args {
    /// Starting price (must be greater than 0)
    #[arg(short, long)]
    price: Option<String>,

    /// Revenue per unit period (must be greater than 0)
    #[arg(short, long)]
    revenue: Option<String>,

    /// Number of periods (must be a whole number greater than 0)
    #[arg(short = 'n', long)]
    periods: Option<String>,

    /// Presentation to render
    #[arg(long, value_enum, default_value = "table")]
    view: ViewArg,

    /// Output file for the chart view
    #[arg(short, long, default_value = "yield-chart.html")]
    out: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ViewArg {
    Table,
    Chart,
}

impl From<ViewArg> for ViewMode {
    fn from(view: ViewArg) -> Self {
        match view {
            ViewArg::Table => ViewMode::Table,
            ViewArg::Chart => ViewMode::Chart,
        }
    }
}

fn main() -> Result<()> {
    logging::init_default_logging();

    let args = Args::parse();

    let mut workflow = ScheduleWorkflow::new();
    workflow.select_view(args.view.into());

    for (id, raw) in [
        (InputFieldId::Price, &args.price),
        (InputFieldId::Revenue, &args.revenue),
        (InputFieldId::Periods, &args.periods),
    ] {
        if let Some(raw) = raw {
            workflow.enter(id, raw);
        }
    }

    match workflow.submit() {
        SubmitOutcome::Accepted => {}
        SubmitOutcome::Rejected(errors) => {
            for error in &errors {
                eprintln!("{}: {}", error.label, error.message);
            }
            bail!("input validation failed");
        }
        SubmitOutcome::Failed(err) => {
            return Err(err).context("schedule derivation refused validated inputs");
        }
    }

    let schedule = workflow
        .schedule()
        .context("no schedule after an accepted submit")?;

    match workflow.mode() {
        ViewMode::Table => print!("{}", render::render_table(schedule)),
        ViewMode::Chart => {
            let html = render::render_chart(schedule)?;
            fs::write(&args.out, html)
                .with_context(|| format!("Failed to write chart: {}", args.out.display()))?;
            println!("Wrote {}", args.out.display());
        }
    }

    Ok(())
}
