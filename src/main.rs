use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rfcatalog::products;
use rfcatalog::{CatalogConfig, Dimension, ProductKind, RangeQuery, SearchCriteria, Session};

#[derive(Parser)]
#[command(name = "rfcatalog", about = "Query the RF component catalog")]
struct Cli {
    /// JSON config file; defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the graphs a product type publishes.
    Graphs {
        #[arg(long)]
        kind: ProductKind,
    },
    /// Find models whose operating ranges contain the given windows.
    Search(SearchArgs),
    /// Print the line labels of a graph.
    Labels(GraphArgs),
    /// Min/max/median of a graph over a frequency window.
    Stats {
        #[command(flatten)]
        graph: GraphArgs,
        #[arg(long)]
        low: f64,
        #[arg(long)]
        high: f64,
    },
    /// Write a graph as CSV.
    Export {
        #[command(flatten)]
        graph: GraphArgs,
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct GraphArgs {
    #[arg(long)]
    kind: ProductKind,
    #[arg(long)]
    model: String,
    #[arg(long)]
    graph: String,
}

#[derive(Args)]
struct SearchArgs {
    #[arg(long)]
    kind: ProductKind,
    #[arg(long)]
    low: Option<f64>,
    #[arg(long)]
    high: Option<f64>,
    #[arg(long)]
    rf_low: Option<f64>,
    #[arg(long)]
    rf_high: Option<f64>,
    #[arg(long)]
    lo_low: Option<f64>,
    #[arg(long)]
    lo_high: Option<f64>,
    #[arg(long)]
    if_low: Option<f64>,
    #[arg(long)]
    if_high: Option<f64>,
    #[arg(long)]
    lodr_low: Option<f64>,
    #[arg(long)]
    lodr_high: Option<f64>,
}

impl SearchArgs {
    fn criteria(&self) -> SearchCriteria {
        if self.kind == ProductKind::Mixer {
            SearchCriteria::new()
                .with(Dimension::Rf, RangeQuery::new(self.rf_low, self.rf_high))
                .with(Dimension::Lo, RangeQuery::new(self.lo_low, self.lo_high))
                .with(Dimension::If, RangeQuery::new(self.if_low, self.if_high))
                .with(Dimension::LoDrive, RangeQuery::new(self.lodr_low, self.lodr_high))
        } else {
            SearchCriteria::frequency(self.low, self.high)
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> rfcatalog::Result<()> {
    let config = match &cli.config {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::default(),
    };
    let base_url = config.datasheet_base_url.clone();
    let mut session = Session::new(config);

    match cli.command {
        Command::Graphs { kind } => {
            for g in products::graphs(kind) {
                println!("{}\t{} ({}) vs {} ({})", g.name, g.y_label, g.y_unit, g.x_label, g.x_unit);
            }
        }
        Command::Search(args) => {
            let criteria = args.criteria();
            for record in session.search(args.kind, &criteria)? {
                println!("{}\t{}", record.model, record.datasheet_url(&base_url));
            }
        }
        Command::Labels(g) => {
            for label in session.line_labels(g.kind, &g.model, &g.graph)? {
                println!("{label}");
            }
        }
        Command::Stats { graph: g, low, high } => {
            let stats = session.range_stats(g.kind, &g.model, &g.graph, low, high)?;
            match stats.primary {
                None => println!("no data in [{low}, {high}]"),
                Some(a) => {
                    print!("min {:.2}  max {:.2}  median {:.2}", a.min, a.max, a.median);
                    if let Some(b) = stats.secondary {
                        print!("  ({:.2} / {:.2} / {:.2})", b.min, b.max, b.median);
                    }
                    println!();
                }
            }
        }
        Command::Export { graph: g, output } => {
            let data = session.resolve_graph(g.kind, &g.model, &g.graph)?;
            match output {
                Some(path) => {
                    let file = std::fs::File::create(&path)
                        .map_err(|source| rfcatalog::CatalogError::Io { path: path.clone(), source })?;
                    rfcatalog::export::write_csv(data, file)?;
                    tracing::info!("Exported CSV to {:?}", path);
                }
                None => rfcatalog::export::write_csv(data, std::io::stdout().lock())?,
            }
        }
    }
    Ok(())
}
