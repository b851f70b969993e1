use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use env_logger::Env;
use log::{info, warn};
use ruc_generator::config::{DEFAULT_FIBER_ID, DEFAULT_MATRIX_ID, WRAPPED_ITEMS_PER_LINE};
use ruc_generator::io::ruc_writer;
use ruc_generator::{
    read_microstructure, synthesize, write_microstructure, FileFormat, GeometryRequest, Grid,
    MaterialId, MaterialPair, PackingFamily, ReadOptions,
};

#[derive(Parser)]
#[command(name = "ruc-generator")]
#[command(about = "Synthesize, analyze and convert repeating unit cell microstructures")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a unit cell from two of: volume fraction, subcell count, radius
    Generate {
        /// Fiber packing
        #[arg(value_enum)]
        family: FamilyArg,

        /// Fiber volume fraction
        #[arg(long)]
        vf: Option<f64>,

        /// Subcell count in the beta direction
        #[arg(long)]
        nb: Option<usize>,

        /// Fiber radius in subcells
        #[arg(long)]
        radius: Option<f64>,

        /// Fiber material identifier
        #[arg(long, default_value_t = DEFAULT_FIBER_ID)]
        fiber: MaterialId,

        /// Matrix material identifier
        #[arg(long, default_value_t = DEFAULT_MATRIX_ID)]
        matrix: MaterialId,

        /// Output file (format inferred from the extension unless --format is given)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Break *RUC lists into '&' continuation lines
        #[arg(long)]
        wrap: bool,

        /// List items per line when wrapping
        #[arg(long, default_value_t = WRAPPED_ITEMS_PER_LINE)]
        items_per_line: usize,
    },
    /// Report volume fraction and fiber radius of a grid file
    Analyze {
        /// Input file (.csv, .txt, .mac or .ruc)
        #[arg(short, long)]
        input: PathBuf,

        /// Reject *RUC records with an unsupported archetype or model
        #[arg(long)]
        strict: bool,

        /// Skip the fiber radius estimate
        #[arg(long)]
        no_radius: bool,

        #[arg(long, default_value_t = DEFAULT_FIBER_ID)]
        fiber: MaterialId,

        #[arg(long, default_value_t = DEFAULT_MATRIX_ID)]
        matrix: MaterialId,
    },
    /// Re-encode a grid file in the format of the output extension
    Convert {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,

        /// Break *RUC lists into '&' continuation lines
        #[arg(long)]
        wrap: bool,

        /// List items per line when wrapping
        #[arg(long, default_value_t = WRAPPED_ITEMS_PER_LINE)]
        items_per_line: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FamilyArg {
    Hexagonal,
    Square,
}

impl From<FamilyArg> for PackingFamily {
    fn from(family: FamilyArg) -> Self {
        match family {
            FamilyArg::Hexagonal => PackingFamily::Hexagonal,
            FamilyArg::Square => PackingFamily::Square,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Ruc,
}

impl From<FormatArg> for FileFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Csv => FileFormat::Csv,
            FormatArg::Ruc => FileFormat::Ruc,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting ruc-generator v{}", ruc_generator::VERSION);

    match cli.command {
        Commands::Generate {
            family,
            vf,
            nb,
            radius,
            fiber,
            matrix,
            output,
            format,
            wrap,
            items_per_line,
        } => {
            let materials = MaterialPair::new(fiber, matrix);
            let request = GeometryRequest::from_parameters(family.into(), vf, nb, radius, materials)?;
            generate(
                &request,
                output.as_deref(),
                format.map(FileFormat::from),
                wrap.then_some(items_per_line),
            )
        }
        Commands::Analyze {
            input,
            strict,
            no_radius,
            fiber,
            matrix,
        } => {
            let options = ReadOptions::default()
                .strict(strict)
                .with_radius(!no_radius)
                .materials(MaterialPair::new(fiber, matrix));
            analyze_file(&input, &options)
        }
        Commands::Convert {
            input,
            output,
            wrap,
            items_per_line,
        } => convert(&input, &output, wrap.then_some(items_per_line)),
    }
}

fn generate(
    request: &GeometryRequest,
    output: Option<&Path>,
    format: Option<FileFormat>,
    wrap: Option<usize>,
) -> Result<()> {
    info!("Generating {} packing", request.family);
    let (grid, properties) = synthesize(request)?.into_parts();
    println!("{}", properties);

    match output {
        Some(path) => {
            let format = match format {
                Some(format) => format,
                None => FileFormat::from_path(path)?,
            };
            save(&grid, path, format, wrap)
        }
        None => {
            if format.is_some() || wrap.is_some() {
                warn!("No --output given; ignoring --format and --wrap");
            }
            Ok(())
        }
    }
}

fn analyze_file(input: &Path, options: &ReadOptions) -> Result<()> {
    info!("Analyzing {}", input.display());
    let microstructure = load(input, options)?;
    println!("{}", microstructure.properties);
    Ok(())
}

fn convert(input: &Path, output: &Path, wrap: Option<usize>) -> Result<()> {
    let options = ReadOptions::default().with_radius(false);
    let microstructure = load(input, &options)?;
    save(&microstructure.grid, output, FileFormat::from_path(output)?, wrap)
}

fn load(input: &Path, options: &ReadOptions) -> Result<ruc_generator::Microstructure> {
    let format = FileFormat::from_path(input)?;
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let microstructure = read_microstructure(&text, format, options)
        .with_context(|| format!("Failed to decode {} as {}", input.display(), format))?;
    Ok(microstructure)
}

fn save(grid: &Grid, path: &Path, format: FileFormat, wrap: Option<usize>) -> Result<()> {
    let text = match (format, wrap) {
        (FileFormat::Ruc, Some(items_per_line)) => ruc_writer::encode_wrapped(grid, items_per_line)?,
        (FileFormat::Csv, Some(_)) => {
            warn!("--wrap only applies to *RUC output");
            write_microstructure(grid, format)
        }
        (_, None) => write_microstructure(grid, format),
    };
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} grid to {}", format, path.display());
    Ok(())
}
