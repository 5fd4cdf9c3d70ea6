//! Cellshare - shared 3x3 sheets with per-user access control

mod config;
mod error;
mod shell;

use anyhow::Context;
use cellshare_core::Store;
use cellshare_engine::OperatorRule;
use clap::Parser;
use config::{PermissionPolicy, Settings};
use shell::Shell;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cellshare", version, about = "Shared 3x3 sheets with per-user access control")]
struct Cli {
    /// Settings file (default: <config dir>/cellshare/config.toml)
    #[arg(short, long, value_name = "FILE", conflicts_with = "no_config")]
    config: Option<PathBuf>,

    /// Ignore any settings file
    #[arg(long)]
    no_config: bool,

    /// How cell expressions pick their operator: priority or leftmost
    #[arg(long, value_name = "RULE")]
    operator_rule: Option<OperatorRule>,

    /// Access-right changes: permissive (unchecked) or strict (acting editor required)
    #[arg(long, value_name = "POLICY")]
    permission_policy: Option<PermissionPolicy>,

    /// Do not print the menu or prompts
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("cellshare=warn".parse()?))
        .with_writer(io::stderr)
        .init();

    let mut settings = if cli.no_config {
        Settings::default()
    } else {
        Settings::load(cli.config.as_deref()).context("Failed to load settings")?
    };
    if let Some(rule) = cli.operator_rule {
        settings.operator_rule = rule;
    }
    if let Some(policy) = cli.permission_policy {
        settings.permission_policy = policy;
    }
    settings.quiet = cli.quiet;
    tracing::info!(
        operator_rule = %settings.operator_rule,
        permission_policy = %settings.permission_policy,
        "starting shell"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(Store::new(), settings, stdin.lock(), stdout.lock());
    shell.run().context("Shell I/O failed")?;
    Ok(())
}
