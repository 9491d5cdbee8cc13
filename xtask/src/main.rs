use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for caravan")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run fmt, clippy, tests, and doc in sequence
    Check,
    /// Run cargo fmt --check on all crates
    Fmt,
    /// Run clippy on all crates
    Clippy,
    /// Run all tests
    Test,
    /// Build rustdoc for the workspace
    Doc,
    /// Build the entire workspace
    Build,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            for step in [Step::Fmt, Step::Clippy, Step::Test, Step::Doc] {
                run(step)?;
            }
        }
        Commands::Fmt => run(Step::Fmt)?,
        Commands::Clippy => run(Step::Clippy)?,
        Commands::Test => run(Step::Test)?,
        Commands::Doc => run(Step::Doc)?,
        Commands::Build => run(Step::Build)?,
    }

    Ok(())
}

#[derive(Clone, Copy)]
enum Step {
    Fmt,
    Clippy,
    Test,
    Doc,
    Build,
}

impl Step {
    fn args(self) -> &'static [&'static str] {
        match self {
            Step::Fmt => &["fmt", "--all", "--", "--check"],
            Step::Clippy => &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
            Step::Test => &["test", "--workspace"],
            Step::Doc => &["doc", "--workspace", "--no-deps"],
            Step::Build => &["build", "--workspace"],
        }
    }
}

fn run(step: Step) -> Result<()> {
    let args = step.args();
    println!("==> cargo {}", args.join(" "));
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("cargo {} failed", args[0]);
    }
    Ok(())
}
