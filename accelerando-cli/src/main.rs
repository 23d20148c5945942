mod autoplay;
mod reports;
mod terminal;

use accelerando_game::{GameSession, OperatorInterrupt, SessionConfig};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdin, stdout};
use std::path::PathBuf;
use std::time::Instant;

use autoplay::{GameplayStrategy, play_batch};
use terminal::TerminalOperator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "accelerando", version)]
#[command(about = "Accelerando: Lobsters - a meme-broker's journey to the Singularity")]
struct Args {
    /// Save file used by the in-game save and load menus
    #[arg(long, default_value = accelerando_game::constants::DEFAULT_SAVE_PATH)]
    save_path: PathBuf,

    /// Seed for reproducible runs (drawn from entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Play automatically with the given strategy instead of reading stdin
    #[arg(long, value_enum)]
    autoplay: Option<GameplayStrategy>,

    /// Number of games to play in autoplay mode
    #[arg(long, default_value_t = 1)]
    games: usize,

    /// Quit an autoplay game after this many turns
    #[arg(long, default_value_t = 200)]
    max_turns: i32,

    /// Output report format for autoplay
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the autoplay report instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = SessionConfig {
        save_path: args.save_path.clone(),
        seed: args.seed,
    };

    match args.autoplay {
        Some(strategy) => run_autoplay(&args, strategy, config.resolve_seed()),
        None => run_interactive(&config),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run_interactive(config: &SessionConfig) -> Result<()> {
    terminal::install_interrupt_handler()?;
    let mut session = GameSession::new(config);
    // Stdout stays unlocked between writes so the Ctrl-C handler can print.
    let mut operator = TerminalOperator::new(stdin().lock(), stdout());
    match session.run(&mut operator) {
        Ok(summary) => {
            log::info!(
                "Session finished after {} turns (quit: {})",
                summary.turns,
                summary.quit
            );
            Ok(())
        }
        Err(OperatorInterrupt) => Ok(()),
    }
}

fn run_autoplay(args: &Args, strategy: GameplayStrategy, seed: u64) -> Result<()> {
    eprintln!("{}", "🦞 Accelerando Autoplay".bright_cyan().bold());
    eprintln!(
        "{}",
        format!(
            "{strategy} strategy, {} game(s) from seed {seed}",
            args.games
        )
        .cyan()
    );

    let start_time = Instant::now();
    let summary = play_batch(strategy, seed, args.games, args.max_turns)
        .context("autoplay session was interrupted")?;

    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report {
        ReportFormat::Json => reports::generate_json_report(&mut output_target, &summary)?,
        ReportFormat::Markdown => {
            reports::generate_markdown_report(&mut output_target, &summary)?;
        }
        ReportFormat::Console => reports::generate_console_report(
            &mut output_target,
            &summary,
            start_time.elapsed(),
        )?,
    }
    output_target
        .flush_inner()
        .context("failed to flush report output")?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
