//! Pulseboard CLI
//!
//! Command-line interface for headless dashboard operations:
//! - Render a chart to SVG or JSON
//! - Print the stats row for a filter
//! - Replay a recorded session script
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use pulseboard::{
    generate_default_config, init_logging, script, ChartRenderer, Config, Dashboard, DisplayList,
    Filter, RealtimeDriver, SvgSurface,
};

#[derive(Parser)]
#[command(name = "pulseboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Headless driver for the Pulseboard creator dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a chart series
    Render {
        /// Series name (views, engagement, revenue)
        #[arg(default_value = "views")]
        series: String,
        /// Canvas width (default from config)
        #[arg(long)]
        width: Option<f64>,
        /// Canvas height (default from config)
        #[arg(long)]
        height: Option<f64>,
        /// Emit the chart frame and draw commands as JSON instead of SVG
        #[arg(long)]
        json: bool,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the stats shown for a filter
    Stats {
        /// Filter key (all, month, week)
        #[arg(default_value = "all")]
        filter: String,
    },

    /// Replay a JSON session script and print the final state
    Replay {
        /// Path to the script
        path: PathBuf,
        /// Sleep through waits instead of simulating them
        #[arg(long)]
        realtime: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    init_logging(&config.logging);

    match cli.command {
        Commands::Render {
            series,
            width,
            height,
            json,
            output,
        } => {
            let width = width.unwrap_or(config.chart.width);
            let height = height.unwrap_or(config.chart.height);
            let renderer = ChartRenderer::new(config.chart.style());

            let rendered = if json {
                let mut display = DisplayList::new();
                let frame = renderer.render(&mut display, &series, width, height);
                serde_json::to_string_pretty(&serde_json::json!({
                    "frame": frame,
                    "display": display,
                }))?
            } else {
                let mut svg = SvgSurface::new();
                renderer.render(&mut svg, &series, width, height);
                svg.finish()
            };

            write_output(output, &rendered)?;
        }

        Commands::Stats { filter } => {
            let resolved = Filter::resolve(&filter);
            if Filter::parse(&filter).is_none() {
                eprintln!("Unknown filter {:?}, showing {:?}", filter, resolved.as_str());
            }

            let row = resolved.row();
            println!("{:<12} {}", "Views", row.views);
            println!("{:<12} {}", "Engagement", row.engagement);
            println!("{:<12} {}", "Revenue", row.revenue);
            println!("{:<12} {}", "Campaigns", row.campaigns);
        }

        Commands::Replay { path, realtime } => {
            let actions = script::load_script(&path)?;
            tracing::info!("Replaying {} actions from {:?}", actions.len(), path);

            let mut dashboard = Dashboard::new(&config);
            if realtime {
                RealtimeDriver::new(&mut dashboard).play(&actions).await;
            } else {
                script::replay(&mut dashboard, &actions);
            }

            println!("{}", serde_json::to_string_pretty(&dashboard.snapshot())?);
        }

        Commands::Config { output } => {
            write_output(output, &generate_default_config())?;
        }
    }

    Ok(())
}

fn write_output(output: Option<PathBuf>, content: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write {:?}", path))?;
            eprintln!("Written to {:?}", path);
        }
        None => print!("{}", content),
    }
    Ok(())
}
