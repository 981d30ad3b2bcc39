use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use envelope::api::{
    compute_envelope, draw_lines, Envelope, EnvelopeCfg, LineSampler, LinesReplay,
    RandomLinesCfg, View,
};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod lines_io;
mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Upper envelope of lines via the dual lower hull")]
struct Cmd {
    /// Optional run tag; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the upper envelope of a line table (.csv or .parquet) and write it as JSON
    Envelope(EnvelopeArgs),
    /// Write a random click-style line table as CSV
    Random(RandomArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Debug)]
struct EnvelopeArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// Left clip of the envelope
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    view_min: f64,
    /// Right clip of the envelope (default: screen width)
    #[arg(long, default_value_t = 1000.0, allow_negative_numbers = true)]
    view_max: f64,
    /// Shift x2 by this amount when a row has x1 == x2 (otherwise such rows are errors)
    #[arg(long, allow_negative_numbers = true)]
    nudge: Option<f64>,
    /// Treat adjacent hull lines with |Δslope| <= eps as parallel
    #[arg(long, default_value_t = 0.0)]
    eps_parallel: f64,
}

#[derive(Args, Debug)]
struct RandomArgs {
    #[arg(long, default_value_t = 8)]
    count: usize,
    #[arg(long, default_value_t = 2017)]
    seed: u64,
    #[arg(long, default_value_t = 0)]
    index: u64,
    #[arg(long, default_value_t = 1000)]
    width: u32,
    #[arg(long, default_value_t = 750)]
    height: u32,
    #[arg(long)]
    out: PathBuf,
}

/// JSON shape of an envelope artifact.
#[derive(Serialize, Debug)]
struct EnvelopeDoc {
    lines: usize,
    view: [f64; 2],
    hull: Vec<usize>,
    breakpoints: Vec<[f64; 2]>,
    active: Vec<usize>,
}

impl EnvelopeDoc {
    fn new(lines: usize, view: View, env: &Envelope) -> Self {
        Self {
            lines,
            view: [view.min_x(), view.max_x()],
            hull: env.hull().to_vec(),
            breakpoints: env.breakpoints().iter().map(|p| [p.x, p.y]).collect(),
            active: env.active().to_vec(),
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    let tag = cmd.tag.as_deref();
    match cmd.action {
        Action::Envelope(args) => run_envelope(&args, tag).map(|_| ()),
        Action::Random(args) => run_random(&args, tag).map(|_| ()),
        Action::Report => report(tag),
    }
}

pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}

fn run_envelope(args: &EnvelopeArgs, tag: Option<&str>) -> Result<EnvelopeDoc> {
    tracing::info!(input = %args.input.display(), out = %args.out.display(), tag = ?tag, "envelope");
    let view = View::new(args.view_min, args.view_max)?;
    let cfg = EnvelopeCfg {
        eps_parallel: args.eps_parallel,
    };
    let rows = lines_io::read_line_table(&args.input)?;
    let lines = lines_io::build_lines(&rows, args.nudge)
        .with_context(|| format!("building lines from {}", args.input.display()))?;
    let env = compute_envelope(&lines, view, cfg)
        .with_context(|| format!("envelope of {} lines", lines.len()))?;
    tracing::info!(
        lines = lines.len(),
        hull = env.hull().len(),
        segments = env.active().len(),
        "envelope_done"
    );

    let doc = EnvelopeDoc::new(lines.len(), view, &env);
    ensure_parent(&args.out)?;
    std::fs::write(&args.out, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", args.out.display()))?;
    let payload = Payload::new(
        "envelope",
        json!({
            "input": args.input.to_string_lossy(),
            "view": [args.view_min, args.view_max],
            "nudge": args.nudge,
            "eps_parallel": args.eps_parallel,
        }),
        tag,
    );
    write_sidecar(&args.out, &payload)?;
    Ok(doc)
}

fn run_random(args: &RandomArgs, tag: Option<&str>) -> Result<PathBuf> {
    tracing::info!(count = args.count, seed = args.seed, index = args.index, tag = ?tag, "random");
    let cfg = RandomLinesCfg {
        count: args.count,
        sampler: LineSampler::Clicks {
            width: args.width,
            height: args.height,
            nudge: 3.0,
        },
    };
    let lines = draw_lines(
        cfg,
        LinesReplay {
            seed: args.seed,
            index: args.index,
        },
    )
    .context("drawing random lines")?;
    lines_io::write_line_table(&args.out, &lines)?;
    let payload = Payload::new(
        "random",
        json!({
            "count": args.count,
            "seed": args.seed,
            "index": args.index,
            "width": args.width,
            "height": args.height,
        }),
        tag,
    );
    write_sidecar(&args.out, &payload)?;
    Ok(args.out.clone())
}

#[track_caller]
fn report(tag: Option<&str>) -> Result<()> {
    let obj = report_doc(tag);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

/// Provenance block whose callsite is the caller of this function.
#[track_caller]
fn report_doc(tag: Option<&str>) -> serde_json::Value {
    Payload::new("report", json!({}), tag).to_doc(&[], std::panic::Location::caller())
}
