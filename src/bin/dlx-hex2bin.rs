use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dlx_tools::{Orchestrator, OrchestratorConfig};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Assemble a DLX source file and drop an annotated binary dump into ../sim"
)]
struct Opts {
    /// Assembly source, one instruction per line
    #[arg(value_name = "ASMFILE")]
    input: PathBuf,
    /// JSON config file (fields not given keep their defaults)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Assembler script to run instead of ./assembler.sh
    #[arg(long, value_name = "PATH")]
    assembler: Option<PathBuf>,
    /// Directory the binary dump is moved into
    #[arg(long, value_name = "DIR")]
    sim_dir: Option<PathBuf>,
    /// Fail when the hex dump has fewer words than the source has lines
    #[arg(long)]
    strict: bool,
    /// Debug logging when RUST_LOG is not set
    #[arg(short, long)]
    verbose: bool,
}

impl Opts {
    fn config(&self) -> Result<OrchestratorConfig> {
        let mut cfg = match &self.config {
            Some(path) => OrchestratorConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => OrchestratorConfig::default(),
        };
        if let Some(a) = &self.assembler {
            cfg.assembler = a.clone();
        }
        if let Some(d) = &self.sim_dir {
            cfg.sim_dir = d.clone();
        }
        cfg.strict_line_count |= self.strict;
        Ok(cfg)
    }
}

fn main() -> Result<()> {
    let opts = Opts::parse();

    let default_level = if opts.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let cfg = opts.config()?;
    let orch = Orchestrator::with_script(cfg);
    let out = orch
        .run(&opts.input)
        .with_context(|| format!("processing {}", opts.input.display()))?;
    println!("{} ({} instructions)", out.paths.relocated.display(), out.records);
    Ok(())
}
