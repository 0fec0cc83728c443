use clap::{Parser, Subcommand};
use serde::Serialize;
use shapematch::segment::{load_gray_image, segment};
use shapematch::{
    find_closest, CorpusFigureProvider, Figure, FigureProvider, OutlineFigureProvider,
};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Shape recognition against a signature corpus")]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Enable tracing output for match diagnostics.
    #[arg(long)]
    trace: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Segment an image and store its labeled signatures in the corpus.
    Enroll {
        /// Raster image with the reference shapes.
        #[arg(short, long, value_name = "FILE")]
        image: PathBuf,
        /// Corpus file to write (created if absent).
        #[arg(short, long, value_name = "FILE")]
        corpus: PathBuf,
        /// How many shapes to keep and label.
        #[arg(short, long, default_value_t = 24)]
        quantity: usize,
    },
    /// Identify shapes in an image against a stored corpus.
    Classify {
        /// Raster image with the unknown shapes.
        #[arg(short, long, value_name = "FILE")]
        image: PathBuf,
        /// Corpus file holding the reference signatures.
        #[arg(short, long, value_name = "FILE")]
        corpus: PathBuf,
        /// How many shapes to identify, largest first.
        #[arg(short, long, default_value_t = 1)]
        quantity: usize,
        /// Write the JSON report here instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
struct MatchRecord {
    label: String,
    distance: f64,
    centroid_x: i32,
    centroid_y: i32,
}

#[derive(Debug, Serialize)]
struct Output {
    matches: Vec<MatchRecord>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("shapematch=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    match cli.command {
        Command::Enroll {
            image,
            corpus,
            quantity,
        } => enroll(image, corpus, quantity),
        Command::Classify {
            image,
            corpus,
            quantity,
            output,
        } => classify(image, corpus, quantity, output),
    }
}

fn enroll(
    image: PathBuf,
    corpus: PathBuf,
    quantity: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let raster = load_gray_image(&image)?;
    let outlines = segment(&raster, quantity);
    let figures = OutlineFigureProvider::new().figures(&outlines, quantity)?;

    let provider = CorpusFigureProvider::new(&corpus)?;
    provider.save_figures(&figures)?;
    println!("enrolled {} figures into {}", figures.len(), corpus.display());
    Ok(())
}

fn classify(
    image: PathBuf,
    corpus: PathBuf,
    quantity: usize,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let provider = CorpusFigureProvider::new(&corpus)?;
    let references = provider.load_figures()?;

    let raster = load_gray_image(&image)?;
    let mut matches = Vec::new();
    for outline in segment(&raster, quantity) {
        let query = Figure::from_outline(outline, "query")?;
        let closest = find_closest(&query, &references)?;
        let centroid = query.centroid();
        matches.push(MatchRecord {
            label: closest.figure.label().to_string(),
            distance: closest.distance,
            centroid_x: centroid.x,
            centroid_y: centroid.y,
        });
    }

    let json = serde_json::to_string_pretty(&Output { matches })?;
    match output {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }
    Ok(())
}
