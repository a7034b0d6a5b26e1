use anyhow::Result;
use clap::{Parser, Subcommand};

mod handlers;
mod theme;
mod ui;

use handlers::estimate::{EstimateArgs, UsageArgs};
use handlers::format::FormatKind;

#[derive(Parser, Debug)]
#[command(name = "envelope")]
#[command(version)]
#[command(about = "Envelope - back-of-the-envelope capacity estimates", long_about = None)]
#[command(styles = styles())]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

fn styles() -> clap::builder::Styles {
    use clap::builder::styling::{AnsiColor, Effects, Styles};
    Styles::styled()
        .header(AnsiColor::Magenta.on_default() | Effects::BOLD)
        .usage(AnsiColor::Magenta.on_default() | Effects::BOLD)
        .literal(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default())
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Estimate request rates, storage and bandwidth")]
    Estimate(EstimateArgs),
    #[command(about = "Show the same estimate under approximate and exact constants")]
    Compare(UsageArgs),
    #[command(about = "Scale a raw magnitude into a readable unit")]
    Format {
        #[command(subcommand)]
        kind: FormatKind,
    },
    #[command(about = "Manage configuration")]
    Config {
        #[arg(long, short)]
        get: Option<String>,
        #[arg(long, short)]
        set: Option<String>,
        #[arg(long)]
        reset: bool,
    },
}

fn init_logging(verbose: bool) -> Result<flexi_logger::LoggerHandle> {
    let level = if verbose { "debug" } else { "warn" };
    let handle = flexi_logger::Logger::try_with_env_or_str(level)?
        .log_to_stderr()
        .format(flexi_logger::opt_format)
        .start()?;
    Ok(handle)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = init_logging(cli.verbose)?;
    log::debug!("envelope v{} starting", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(Commands::Estimate(args)) => handlers::estimate::handle_estimate(&args),
        Some(Commands::Compare(args)) => handlers::compare::handle_compare(&args),
        Some(Commands::Format { kind }) => handlers::format::handle_format(&kind),
        Some(Commands::Config { get, set, reset }) => {
            handlers::config::handle_config(get, set, reset)
        }
        None => handlers::estimate::handle_estimate(&EstimateArgs::default()),
    }
}
