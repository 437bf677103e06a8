//! Command line driver for the toroidal Game of Life

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, warn};
use std::io::Write;
use std::path::{Path, PathBuf};
use toroidal_life::{
    config::{CliOverrides, Settings},
    game_of_life::{
        create_example_saves, load_record_from_file, save_record_to_file, GridEngine, PATTERNS,
    },
    utils::{ColorOutput, GridFormatter},
    LifeError, Simulation,
};

#[derive(Parser)]
#[command(name = "toroidal_life")]
#[command(about = "Conway's Game of Life on a wrap-around grid")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed a grid and animate it in the terminal
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid size (overrides config)
        #[arg(short, long)]
        size: Option<usize>,

        /// Seed pattern (overrides config)
        #[arg(short, long)]
        pattern: Option<String>,

        /// Randomize the grid instead of stamping a pattern
        #[arg(short, long)]
        random: bool,

        /// Random density (overrides config)
        #[arg(long)]
        density: Option<f64>,

        /// Start from a save file
        #[arg(short, long)]
        load: Option<PathBuf>,

        /// Number of generations to run
        #[arg(short, long, default_value_t = 100)]
        generations: u64,

        /// Milliseconds between generations (overrides config)
        #[arg(short, long)]
        interval_ms: Option<u64>,

        /// Save the final state to this file (overrides config)
        #[arg(long)]
        save: Option<PathBuf>,

        /// Do not save the final state
        #[arg(long, conflicts_with = "save")]
        no_save: bool,
    },

    /// Create a default configuration and example save files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Print a save file and its statistics
    Show {
        /// Save file to read
        file: PathBuf,

        /// Include row and column numbers
        #[arg(long)]
        coords: bool,
    },

    /// List the available seed patterns
    Patterns,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    match cli.command {
        Commands::Run {
            config, size, pattern, random, density, load,
            generations, interval_ms, save, no_save,
        } => {
            let overrides = CliOverrides {
                size,
                tick_interval_ms: interval_ms,
                random_density: density,
                pattern,
                save_file: save,
            };
            run_command(config, overrides, random, load, generations, !no_save)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Show { file, coords } => show_command(&file, coords),
        Commands::Patterns => {
            patterns_command();
            Ok(())
        }
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        debug!("Config file {} not found, using defaults", config_path.display());
        Ok(Settings::default())
    }
}

fn run_command(
    config_path: PathBuf,
    overrides: CliOverrides,
    random: bool,
    load: Option<PathBuf>,
    generations: u64,
    save_final: bool,
) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);
    settings.validate()
        .context("Configuration validation failed")?;

    let mut simulation = Simulation::new(&settings)
        .context("Failed to create simulation")?;

    if let Some(ref path) = load {
        match load_record_from_file(path) {
            Ok(grid) => simulation.load_grid(grid),
            Err(e) => {
                warn!("{:#}", e);
                println!("{}", ColorOutput::warning(&format!(
                    "{}; continuing with the seeded grid", load_failure_message(path, &e)
                )));
            }
        }
    } else if random {
        simulation.randomize();
    }

    let style = settings.output.style;
    let clear_screen = settings.output.clear_screen;
    print!("{}", GridFormatter::format_frame(simulation.engine(), style, clear_screen));

    simulation.run(generations, |engine| {
        print!("{}", GridFormatter::format_frame(engine, style, clear_screen));
        std::io::stdout().flush().is_ok()
    });

    if save_final {
        let path = &settings.output.save_file;
        save_record_to_file(simulation.engine(), path)
            .context("Failed to save final state")?;
        println!("{}", ColorOutput::success(&format!("Saved final state to {}", path.display())));
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let saves_dir = directory.join("saves");

    for dir in [&config_dir, &saves_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    // Create default configuration
    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let written = create_example_saves(&saves_dir)
        .context("Failed to create example saves")?;
    println!("Created {} example saves in: {}", written.len(), saves_dir.display());

    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: cargo run -- run --load {}", saves_dir.join("pulsar.json").display());

    Ok(())
}

/// One-line notification for a failed load: bad contents versus an unreadable file
fn load_failure_message(path: &Path, error: &anyhow::Error) -> String {
    let bad_record = error
        .chain()
        .filter_map(|cause| cause.downcast_ref::<LifeError>())
        .any(LifeError::is_recoverable);

    if bad_record {
        format!(
            "Could not load {}. Make sure it is a valid Game of Life save file",
            path.display()
        )
    } else {
        format!("Could not read {}", path.display())
    }
}

fn show_command(path: &Path, coords: bool) -> Result<()> {
    let grid = match load_record_from_file(path) {
        Ok(grid) => grid,
        Err(e) => {
            warn!("{:#}", e);
            println!("{}", ColorOutput::error(&load_failure_message(path, &e)));
            return Err(e);
        }
    };

    let engine = GridEngine::from(grid);
    if coords {
        println!("{}", GridFormatter::format_grid_with_coords(engine.snapshot()));
    } else {
        println!("{}", GridFormatter::format_grid_compact(engine.snapshot()));
    }
    println!("{}", GridFormatter::format_status(&engine));

    Ok(())
}

fn patterns_command() {
    println!("{}", ColorOutput::info("Available patterns:"));
    for pattern in PATTERNS {
        println!(
            "  {:8} {:3} cells, needs {}x{}",
            pattern.name,
            pattern.cells.len(),
            pattern.extent(),
            pattern.extent()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "toroidal_life",
            "run",
            "--size", "20",
            "--pattern", "pulsar",
            "--generations", "5",
        ]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["toroidal_life", "-v", "show", "board.json"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Show { coords: false, .. }));
    }

    #[test]
    fn test_cli_rejects_conflicting_save_flags() {
        let cli = Cli::try_parse_from([
            "toroidal_life", "run", "--save", "out.json", "--no-save",
        ]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        let result = setup_command(temp_dir.path().to_path_buf(), false);

        assert!(result.is_ok());
        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("saves/glider.json").exists());
    }

    #[test]
    fn test_show_command_reports_bad_save() {
        let temp_dir = tempdir().unwrap();
        let bad = temp_dir.path().join("bad.json");
        std::fs::write(&bad, r#"{"size": 3, "board": [[0, 0], [0, 0]]}"#).unwrap();

        let err = show_command(&bad, false).unwrap_err();
        assert!(load_failure_message(&bad, &err).contains("valid Game of Life save file"));

        let missing = temp_dir.path().join("missing.json");
        let err = show_command(&missing, false).unwrap_err();
        assert!(load_failure_message(&missing, &err).starts_with("Could not read"));

        let good = temp_dir.path().join("good.json");
        std::fs::write(&good, r#"{"rows": 2, "board": [[1, 0], [0, 1]]}"#).unwrap();
        assert!(show_command(&good, true).is_ok());
    }

    #[test]
    fn test_run_command_saves_final_state() {
        let temp_dir = tempdir().unwrap();
        let save_path = temp_dir.path().join("out/final.json");
        let overrides = CliOverrides {
            size: Some(5),
            tick_interval_ms: Some(0),
            pattern: Some("blinker".to_string()),
            save_file: Some(save_path.clone()),
            ..Default::default()
        };

        run_command(temp_dir.path().join("missing.yaml"), overrides, false, None, 3, true).unwrap();

        let grid = load_record_from_file(&save_path).unwrap();
        let mut live = grid.living_cells();
        live.sort();
        assert_eq!(live, vec![(1, 0), (1, 1), (1, 2)]);
    }
}
