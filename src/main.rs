use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use s4::config::{self, SpecFormat, SpecSource};
use s4::exec::{CommandOutput, ShellExecutor};
use s4::{commands, loader};

#[derive(Parser)]
#[command(name = "s4")]
#[command(version)]
#[command(about = "Keep a semi-structured software specification consistent and in sync with its acceptance tests")]
struct Cli {
    #[command(flatten)]
    spec: SpecArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args, Clone)]
struct SpecArgs {
    /// Spec file path
    #[arg(long, global = true, env = "S4_SPEC", default_value = config::DEFAULT_SPEC_PATH)]
    spec: PathBuf,

    /// Spec file format (inferred from the extension when omitted)
    #[arg(short, long, global = true, env = "S4_FORMAT", value_enum)]
    format: Option<SpecFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Get the status of the project and the next action to take
    #[command(alias = "s")]
    Status,
    /// Validate the internal consistency of the spec
    #[command(alias = "v")]
    Validate,
    /// Locate an acceptance test file by ID
    LocateAt {
        /// Acceptance test ID (e.g., AT-0001)
        id: String,
    },
    /// Run an acceptance test by ID
    RunAt {
        /// Acceptance test ID (e.g., AT-0001)
        id: String,
    },
    /// Run all acceptance tests
    RunAts,
    /// Display detailed information about a feature or acceptance test
    #[command(alias = "i")]
    Info {
        /// Feature ID (e.g., FE-0001) or acceptance test ID (e.g., AT-0001)
        id: String,
    },
    /// Run a tool defined in the spec
    Tool {
        /// Tool id as defined in spec.tools
        tool_id: String,
    },
    /// Run all tools in defined order
    Tools,
}

/// Logs go to stderr so stdout carries only command output.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(config::log_filter());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn dispatch(args: SpecArgs, command: Commands) -> CommandOutput {
    let source = SpecSource::resolve(args.spec, args.format);
    let spec = match loader::load_spec(&source) {
        Ok(spec) => spec,
        Err(e) => return commands::system_error(&e),
    };
    let exec = ShellExecutor::new();

    match command {
        Commands::Status => commands::status(&spec, &exec).await,
        Commands::Validate => commands::validate(&spec),
        Commands::LocateAt { id } => commands::locate_at(&spec, &id, &exec).await,
        Commands::RunAt { id } => commands::run_at(&spec, &id, &exec).await,
        Commands::RunAts => commands::run_ats(&spec, &exec).await,
        Commands::Info { id } => commands::info(&spec, &id),
        Commands::Tool { tool_id } => commands::tool(&spec, &tool_id, &exec).await,
        Commands::Tools => commands::tools(&spec, &exec).await,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    // No subcommand: behave like `s4 status`
    let command = cli.command.unwrap_or(Commands::Status);

    let output = dispatch(cli.spec, command).await;
    if !output.stdout.is_empty() {
        println!("{}", output.stdout.trim_end());
    }
    if !output.stderr.is_empty() {
        eprintln!("{}", output.stderr.trim_end());
    }

    ExitCode::from(u8::try_from(output.exit_code).unwrap_or(1))
}
