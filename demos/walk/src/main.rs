//! walk — print turn-by-turn directions for a hand-picked route.
//!
//! Segments are chosen by index from a small sample catalog (`--list` shows
//! it).  A segment that cannot be appended is reported and skipped; the route
//! built so far stays as it was.
//!
//! ```text
//! walk 0 1 2 3 4 5 6 7
//! walk --mode driving --heading 90 0 1 2
//! RUST_LOG=debug walk 0 1 2
//! ```

mod catalog;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use wr_directions::{DirectionsConfig, TravelMode};
use wr_geo::GeoSegment;
use wr_route::Route;

use catalog::sample_segments;

#[derive(Parser, Debug)]
#[command(version, about = "Turn-by-turn directions for a route of sample segments")]
struct Args {
    /// Travel mode (walking or driving); overrides the config file.
    #[arg(long)]
    mode: Option<TravelMode>,

    /// Heading (degrees) before the first feature.  Defaults to the route's
    /// own start heading.
    #[arg(long)]
    heading: Option<f64>,

    /// JSON file with a `DirectionsConfig`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the segment catalog and exit.
    #[arg(long)]
    list: bool,

    /// Catalog indices to append, in order.
    segments: Vec<usize>,
}

fn load_config(args: &Args) -> Result<DirectionsConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            DirectionsConfig::from_json_str(&json)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => DirectionsConfig::default(),
    };
    if let Some(mode) = args.mode {
        config.mode = mode;
    }
    Ok(config)
}

/// Append the chosen catalog entries in order.
///
/// Entries that are missing or cannot be appended are skipped; the route
/// built so far is kept and one message per skipped entry is returned.
fn pick_route(catalog: &[GeoSegment], indices: &[usize]) -> (Option<Route>, Vec<String>) {
    let mut route: Option<Route> = None;
    let mut skipped = Vec::new();
    for &idx in indices {
        let Some(gs) = catalog.get(idx) else {
            skipped.push(format!("skipping segment #{idx}: catalog has {} entries", catalog.len()));
            continue;
        };
        route = match route {
            None => Some(Route::new(gs.clone())),
            Some(r) => match r.add_segment(gs.clone()) {
                Ok(grown) => Some(grown),
                Err(e) => {
                    skipped.push(format!("skipping segment #{idx}: {e}"));
                    Some(r)
                }
            },
        };
    }
    (route, skipped)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let catalog = sample_segments()?;

    if args.list {
        for (i, gs) in catalog.iter().enumerate() {
            println!("{i:>3}  {gs}  ({:.3} km)", gs.length());
        }
        return Ok(());
    }

    let config = load_config(&args)?;
    let formatter = config.formatter()?;
    log::info!("formatting for {} ({:?})", config.mode, formatter);

    let (route, skipped) = pick_route(&catalog, &args.segments);
    for msg in &skipped {
        eprintln!("{msg}");
    }

    let Some(route) = route else {
        bail!("no segments selected (try --list)");
    };
    log::info!("{route}, {} features", route.feature_count());

    let heading = args.heading.unwrap_or_else(|| route.start_heading());
    print!("{}", formatter.format_route(&route, heading));
    log::info!("total {:.2} km", route.length());
    Ok(())
}
