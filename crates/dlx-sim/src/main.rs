use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dlx_sim::{run_plan, DryRunner, FailurePolicy, Plan, SimConfig, SystemRunner};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compile and simulate the DLX control-unit test bench with GHDL", long_about = None)]
struct Cli {
    /// JSON config (fields not given keep their defaults)
    #[arg(long, value_name = "FILE", conflicts_with = "plan")]
    config: Option<PathBuf>,
    /// Run a saved JSON plan instead of building one from the config
    #[arg(long, value_name = "FILE")]
    plan: Option<PathBuf>,
    /// Directory holding the VHDL sources
    #[arg(long, value_name = "DIR")]
    src_dir: Option<PathBuf>,
    /// Simulated stop time passed to the test bench
    #[arg(long, value_name = "TIME")]
    stop_time: Option<String>,
    /// Keep running later steps after one fails
    #[arg(long)]
    keep_going: bool,
    /// Print the resolved plan as JSON and exit
    #[arg(long)]
    print_plan: bool,
    /// Log the steps without running them
    #[arg(long)]
    dry_run: bool,
    /// Debug logging when RUST_LOG is not set
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn plan(&self) -> Result<Plan> {
        let mut plan = match &self.plan {
            Some(path) => {
                Plan::load(path).with_context(|| format!("loading plan {}", path.display()))?
            }
            None => {
                let mut cfg = match &self.config {
                    Some(path) => SimConfig::load(path)
                        .with_context(|| format!("loading config {}", path.display()))?,
                    None => SimConfig::default(),
                };
                if let Some(dir) = &self.src_dir {
                    cfg.src_dir = dir.clone();
                }
                if let Some(t) = &self.stop_time {
                    cfg.stop_time = t.clone();
                }
                cfg.plan()
            }
        };
        if self.keep_going {
            plan.policy = FailurePolicy::Continue;
        }
        Ok(plan)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let plan = cli.plan()?;
    if cli.print_plan {
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    let summary = if cli.dry_run {
        run_plan(&plan, &mut DryRunner)?
    } else {
        run_plan(&plan, &mut SystemRunner)?
    };
    if !summary.success() {
        let failed: Vec<&str> = summary.failures.iter().map(|f| f.step.as_str()).collect();
        anyhow::bail!("{} of {} steps failed: {}", failed.len(), plan.steps.len(), failed.join(", "));
    }
    Ok(())
}
