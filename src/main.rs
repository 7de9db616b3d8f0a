use std::io;
use std::process;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::env::CompleteEnv;
use clap_complete::{Shell, generate};
use tracing_subscriber::EnvFilter;

use hop::cmd;
use hop::output;

#[derive(Parser)]
#[command(name = "hop")]
#[command(version = env!("HOP_VERSION"))]
#[command(about = "Fuzzy directory jumping for multi-project workspaces")]
#[command(
    long_about = "hop - Jump to a directory by typing a fragment of its path.\n\nDirectories under the workspace root are ranked by how well the query\naligns with path separators, word breaks, camelCase, and consecutive\ncharacters. Use `hop shell <shell>` to install a `j` function that cds\ninto the best match."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List ranked jump targets
    #[command(alias = "ls")]
    Find(cmd::find::FindArgs),

    /// Print the best jump target
    Pick(cmd::pick::PickArgs),

    /// Print a shell function that cds into `hop pick`
    Shell(cmd::shell::ShellArgs),

    /// Generate shell completion script
    Completion(CompletionArgs),

    /// Configuration introspection
    Config(cmd::config_cmd::ConfigArgs),
}

#[derive(clap::Args)]
struct CompletionArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: CompletionShell,
}

#[derive(Clone, ValueEnum)]
enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

/// Diagnostics go to stderr so stdout stays a clean path for `cd`.
fn init_logging() {
    let filter = EnvFilter::try_from_env("HOP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

fn main() {
    // Handle dynamic shell completions
    CompleteEnv::with_factory(Cli::command).complete();

    // Use try_parse to catch errors and normalize exit code
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // Exit with 0 for help/version, 1 for actual errors
            let exit_code = if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                0
            } else {
                1
            };
            process::exit(exit_code);
        }
    };

    init_logging();
    output::init_color();

    let result = match cli.command {
        Commands::Find(args) => cmd::find::run(args),
        Commands::Pick(args) => cmd::pick::run(args),
        Commands::Shell(args) => cmd::shell::run(args),
        Commands::Config(args) => cmd::config_cmd::run(args),
        Commands::Completion(args) => {
            let shell = match args.shell {
                CompletionShell::Bash => Shell::Bash,
                CompletionShell::Zsh => Shell::Zsh,
                CompletionShell::Fish => Shell::Fish,
                CompletionShell::Powershell => Shell::PowerShell,
            };
            generate(shell, &mut Cli::command(), "hop", &mut io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        process::exit(1);
    }
}
