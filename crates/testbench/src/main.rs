use clap::builder::styling::{AnsiColor, Styles};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use testbench::config::TestbenchConfig;
use testbench::output::OutputFormat;
use testbench::report::{self, ReportArgs};
use testbench::serve::{self, ServeArgs};

/// Help output styling.
const HELP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().bold())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::Cyan.on_default().bold())
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser)]
#[command(name = "testbench")]
#[command(about = "Mock API servers and code-complexity reports for development")]
#[command(version, styles = HELP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Project root whose .testbench/config.toml is loaded (defaults to current directory)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a mock API server
    Serve(ServeArgs),

    /// Generate an HTML report from a complexity-metrics JSON file
    Report(ReportArgs),
}

/// Reset SIGPIPE to default behavior so piping to `head` etc. doesn't panic.
#[cfg(unix)]
fn reset_sigpipe() {
    // SAFETY: libc::signal is a standard POSIX function; restoring the default
    // disposition for SIGPIPE touches no Rust-managed memory.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
fn reset_sigpipe() {}

fn main() {
    reset_sigpipe();

    let cli = Cli::parse();
    testbench::logging::init(cli.verbose);

    let root = cli.root.unwrap_or_else(|| PathBuf::from("."));
    let config = TestbenchConfig::load(&root);
    let format = OutputFormat::from_cli(cli.json);

    let exit_code = match cli.command {
        Commands::Serve(args) => serve::run(args, &config),
        Commands::Report(args) => report::run(args, &config, &format),
    };

    std::process::exit(exit_code);
}
