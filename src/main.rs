//! Headless command line driver for the Game of Life simulator

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use life_sim::{
    config::{parse_dimensions, CliOverrides, Settings},
    game_of_life::create_example_grids,
    utils::{ColorOutput, GridFormatter, GridSummary},
    Session,
};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "life_sim")]
#[command(about = "Conway's Game of Life simulator")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation for a number of generations
    Run(RunArgs),

    /// Create a default configuration and example patterns
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Print a saved grid
    Show {
        /// Grid file in export format
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Pixels per cell
    #[arg(long)]
    scale: Option<usize>,

    /// Window size in pixels, e.g. 500x1000
    #[arg(long)]
    window: Option<String>,

    /// Grid size in cells, e.g. 20x40 (window follows from the scale)
    #[arg(long)]
    size: Option<String>,

    /// Maximum frames per second when showing every generation
    #[arg(long)]
    framerate: Option<u32>,

    /// Disable framerate limiting
    #[arg(long)]
    unlimited_framerate: bool,

    /// Load cells from an exported file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Number of generations to run
    #[arg(short, long)]
    generations: Option<usize>,

    /// Fill the grid randomly first, optionally with a spawn rate
    #[arg(long)]
    randomize: Option<Option<u32>>,

    /// Export the final grid, optionally to a given path
    #[arg(short, long)]
    export: Option<Option<PathBuf>>,

    /// Print every generation
    #[arg(long)]
    show: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run(args) => run_command(args),
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Show { file, format } => show_command(file, format),
    };

    if let Err(err) = result {
        eprintln!("{}", ColorOutput::error(&format!("Error: {:#}", err)));
        std::process::exit(1);
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        log::warn!("config file {} not found, using defaults", config_path.display());
        Ok(Settings::default())
    }
}

fn run_command(args: RunArgs) -> Result<()> {
    let mut settings = load_settings(&args.config)?;

    let cli_overrides = CliOverrides {
        scale: args.scale,
        window: args.window.as_deref().map(parse_dimensions).transpose()?,
        size: args.size.as_deref().map(parse_dimensions).transpose()?,
        framerate: args.framerate,
        unlimited_framerate: args.unlimited_framerate,
        spawn_rate: args.randomize.flatten(),
        generations: args.generations,
        load_file: args.file.clone(),
        export_path: args.export.clone().flatten(),
    };
    settings.merge_with_cli(&cli_overrides);

    settings.validate()
        .context("Configuration validation failed")?;

    if args.verbose {
        println!("Configuration:");
        println!("  Scale: {}px", settings.display.scale);
        println!("  Generations: {}", settings.simulation.generations);
        println!("  Spawn rate: {}", settings.simulation.spawn_rate);
        if let Some(ref file) = settings.persistence.load_file {
            println!("  Load file: {}", file.display());
        }
        println!();
    }

    let mut session = match settings.persistence.load_file {
        Some(ref file) => Session::from_file(file)
            .with_context(|| format!("Failed to load grid from {}", file.display()))?,
        None => Session::new(settings.geometry()?)?,
    };

    if args.randomize.is_some() {
        session.randomize(settings.simulation.spawn_rate);
    }

    let frame_time = frame_duration(&settings);
    let generations = settings.simulation.generations as u64;
    let start_time = Instant::now();

    if args.show {
        print_generation(&session);
    }

    session.set_running(true);
    while session.generation() < generations {
        if session.tick() && args.show {
            print_generation(&session);
            if let Some(frame_time) = frame_time {
                std::thread::sleep(frame_time);
            }
        }
    }
    session.set_running(false);

    println!("{}", ColorOutput::success(&format!(
        "Ran {} generation(s) in {:.3}s",
        session.generation(),
        start_time.elapsed().as_secs_f64()
    )));

    if !args.show {
        println!("{}", GridFormatter::format_grid_compact(session.grid()));
    }
    let summary = GridSummary::new(session.grid(), session.geometry());
    println!("{}", GridFormatter::format_summary(&summary));

    if args.export.is_some() {
        let path = &settings.persistence.export_path;
        session.export(path)
            .with_context(|| format!("Failed to export to {}", path.display()))?;
        println!("{}", ColorOutput::success(&format!("Exported to {}", path.display())));
    }

    Ok(())
}

fn frame_duration(settings: &Settings) -> Option<Duration> {
    if settings.display.unlimited_framerate || settings.display.framerate == 0 {
        return None;
    }
    Some(Duration::from_secs_f64(1.0 / f64::from(settings.display.framerate)))
}

fn print_generation(session: &Session) {
    println!("{}", ColorOutput::info(&format!(
        "Generation {} (Living: {})",
        session.generation(),
        session.grid().living_count()
    )));
    println!("{}", GridFormatter::format_grid_compact(session.grid()));
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("{}", ColorOutput::warning(&format!(
            "Skipped: {} (already exists)", config_path.display()
        )));
    }

    create_example_grids(&patterns_dir)
        .context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    let mut glider_config = Settings::default();
    glider_config.simulation.generations = 4;
    glider_config.persistence.load_file = Some(patterns_dir.join("glider.txt"));
    glider_config.to_file(&config_dir.join("glider.yaml"))?;

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: life_sim run --config {} --show", config_dir.join("glider.yaml").display());

    Ok(())
}

fn show_command(file: PathBuf, format: OutputFormat) -> Result<()> {
    let session = Session::from_file(&file)
        .with_context(|| format!("Failed to load grid from {}", file.display()))?;
    let grid = session.grid();
    let summary = GridSummary::new(grid, session.geometry());

    match format {
        OutputFormat::Text => {
            println!("Grid ({}x{}):", grid.width(), grid.height());
            println!("{}", GridFormatter::format_grid_with_coords(grid));
            println!("{}", GridFormatter::format_summary(&summary));
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)
                .context("Failed to serialize grid summary")?;
            println!("{}", json);
        }
    }

    Ok(())
}
