// dllviz: step-by-step doubly linked list visualizer

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use dllviz::catalog::OperationKind;
use dllviz::config::SimConfig;
use dllviz::engine::constants::{DEFAULT_LIST_SIZE, DEFAULT_SPEED_MS, WAIT_SLICE};
use dllviz::engine::{OperationParams, RunController};
use dllviz::ui::App;

#[derive(Parser, Debug)]
#[command(name = "dllviz", about = "Step-by-step doubly linked list visualizer")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Initial list size (3-10).
    #[arg(long, global = true, default_value_t = DEFAULT_LIST_SIZE)]
    size: usize,

    /// Delay per step in milliseconds (80-900).
    #[arg(long, global = true, default_value_t = DEFAULT_SPEED_MS)]
    speed: u64,

    /// Seed for node values, for reproducible lists.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file while the TUI is open.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Directory snippets are exported into.
    #[arg(long, default_value = ".")]
    export_dir: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one operation without the TUI and print its narration.
    Run {
        /// insert-head, insert-tail, insert-position, delete-head, delete-tail or delete-value.
        operation: OperationKind,
        /// Value to insert or delete; inserts pick a random value when omitted.
        #[arg(long, allow_hyphen_values = true)]
        value: Option<String>,
        /// Position for insert-position.
        #[arg(long)]
        position: Option<String>,
        /// Wait out each step delay instead of running on virtual time.
        #[arg(long)]
        realtime: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SimConfig::new(cli.size, cli.speed, cli.seed);

    match cli.command {
        Some(Commands::Run {
            operation,
            value,
            position,
            realtime,
        }) => {
            init_stderr_logging();
            run_headless(
                config,
                operation,
                value.as_deref().unwrap_or(""),
                position.as_deref().unwrap_or(""),
                realtime,
            )
        }
        None => {
            if let Some(path) = &cli.log_file {
                init_file_logging(path)?;
            }
            run_tui(config, cli.export_dir)
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .init();
}

fn init_file_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run_headless(
    config: SimConfig,
    operation: OperationKind,
    value: &str,
    position: &str,
    realtime: bool,
) -> Result<()> {
    let mut controller = RunController::new(config);
    let params = OperationParams::parse(value, position);

    println!("{}: {}", operation.title(), controller.list().describe());

    let report = if realtime {
        controller
            .start_with(operation, &params)
            .context("failed to start run")?;
        let mut printed = 0;
        loop {
            for line in &controller.narration_log()[printed..] {
                println!("{}", line);
            }
            printed = controller.narration_log().len();
            if !controller.run_state().is_running {
                break;
            }
            thread::sleep(WAIT_SLICE);
            controller.tick(WAIT_SLICE);
        }
        controller.finish_headless()
    } else {
        let report = controller
            .run_with(operation, &params)
            .context("failed to start run")?;
        for line in &report.narration {
            println!("{}", line);
        }
        report
    };

    println!("{}", controller.list().describe());
    println!("outcome: {:?} after {} suspensions", report.outcome, report.suspensions);
    Ok(())
}

fn run_tui(config: SimConfig, export_dir: PathBuf) -> Result<()> {
    let controller = RunController::new(config);

    // Set up terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    let mut app = App::new(controller, export_dir);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("TUI event loop failed")
}
