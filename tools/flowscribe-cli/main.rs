use clap::{Parser, ValueEnum};
use flowscribe::prelude::*;
use std::fs;
use std::path::PathBuf;

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatCli {
    Prompt,
    Document,
    Sequence,
    Topology,
    Matrix,
    Json,
}

impl From<FormatCli> for OutputFormat {
    fn from(format: FormatCli) -> Self {
        match format {
            FormatCli::Prompt => OutputFormat::Prompt,
            FormatCli::Document => OutputFormat::Document,
            FormatCli::Sequence => OutputFormat::SequenceGraph,
            FormatCli::Topology => OutputFormat::TopologyGraph,
            FormatCli::Matrix => OutputFormat::InteractionMatrix,
            FormatCli::Json => OutputFormat::Json,
        }
    }
}

/// A workflow documentation and diagram-markup rendering CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow JSON file
    flow_path: String,
    /// Path to the catalog JSON file
    catalog_path: String,

    /// The output format to render
    #[arg(short, long, value_enum, default_value_t = FormatCli::Prompt)]
    format: FormatCli,

    /// Write to this file or directory instead of stdout. A directory gets a
    /// filename derived from the flow name.
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let flow_json = fs::read_to_string(&cli.flow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read flow file '{}': {}",
            &cli.flow_path, e
        ))
    });
    let catalog_json = fs::read_to_string(&cli.catalog_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read catalog file '{}': {}",
            &cli.catalog_path, e
        ))
    });

    let raw_flow: UiFlow = serde_json::from_str(&flow_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse flow JSON: {}", e)));
    let raw_catalog: UiCatalog = serde_json::from_str(&catalog_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse catalog JSON: {}", e)));

    let flow = raw_flow
        .into_flow()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert flow: {}", e)));
    let catalog = raw_catalog
        .into_catalog()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert catalog: {}", e)));

    let renderer = Renderer::builder(&flow, &catalog).build();
    let format = OutputFormat::from(cli.format);
    let output = renderer
        .render(format)
        .unwrap_or_else(|e| exit_with_error(&format!("Render failed: {}", e)));

    match cli.out {
        None => print!("{}", output),
        Some(path) => {
            let target = if path.is_dir() {
                path.join(renderer.suggested_filename(format))
            } else {
                path
            };
            fs::write(&target, &output).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", target.display(), e))
            });
            println!("Wrote {}", target.display());
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
