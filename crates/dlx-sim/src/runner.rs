use tracing::{error, info, warn};

use dlx_tools::process::{describe, run_checked};

use crate::plan::{FailurePolicy, Plan, Step};

/// Executes a single step of a plan.
pub trait StepRunner {
    fn run_step(&mut self, step: &Step) -> dlx_tools::Result<()>;
}

/// Runs each step as a child process in the current directory.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl StepRunner for SystemRunner {
    fn run_step(&mut self, step: &Step) -> dlx_tools::Result<()> {
        run_checked(&mut step.command())
    }
}

/// Logs each step instead of running it.
#[derive(Debug, Default)]
pub struct DryRunner;

impl StepRunner for DryRunner {
    fn run_step(&mut self, step: &Step) -> dlx_tools::Result<()> {
        info!(step = %step.name, "would run: {}", describe(&step.command()));
        Ok(())
    }
}

#[derive(thiserror::Error, Debug)]
#[error("step `{step}` failed: {source}")]
pub struct StepFailure {
    pub step: String,
    #[source]
    pub source: dlx_tools::Error,
}

#[derive(Debug, Default)]
pub struct Summary {
    pub completed: Vec<String>,
    pub failures: Vec<StepFailure>,
}

impl Summary {
    pub fn success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Run `plan` in order. Under [`FailurePolicy::Abort`] the first failure is
/// returned and later steps never start; under `Continue` failures are
/// collected in the summary.
pub fn run_plan<R: StepRunner>(plan: &Plan, runner: &mut R) -> Result<Summary, StepFailure> {
    let mut summary = Summary::default();
    for (i, step) in plan.steps.iter().enumerate() {
        info!(step = %step.name, "[{}/{}]", i + 1, plan.steps.len());
        match runner.run_step(step) {
            Ok(()) => summary.completed.push(step.name.clone()),
            Err(source) => {
                let failure = StepFailure { step: step.name.clone(), source };
                match plan.policy {
                    FailurePolicy::Abort => {
                        error!("{failure}");
                        return Err(failure);
                    }
                    FailurePolicy::Continue => {
                        warn!("{failure}, continuing");
                        summary.failures.push(failure);
                    }
                }
            }
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::SimConfig;
    use dlx_tools::Error;

    // Records step names and fails the ones listed.
    struct Scripted {
        fail: Vec<&'static str>,
        seen: Vec<String>,
    }

    impl StepRunner for Scripted {
        fn run_step(&mut self, step: &Step) -> dlx_tools::Result<()> {
            self.seen.push(step.name.clone());
            if self.fail.contains(&step.name.as_str()) {
                return Err(Error::ProcessFailed { program: step.program.clone(), code: Some(1) });
            }
            Ok(())
        }
    }

    #[test]
    fn all_steps_run_in_order() {
        let plan = SimConfig::default().plan();
        let mut r = Scripted { fail: vec![], seen: vec![] };
        let summary = run_plan(&plan, &mut r).unwrap();
        assert!(summary.success());
        assert_eq!(summary.completed.len(), 6);
        assert_eq!(r.seen.first().map(String::as_str), Some("analyze globals"));
        assert_eq!(r.seen.last().map(String::as_str), Some("run test bench"));
    }

    #[test]
    fn abort_stops_at_first_failure() {
        let plan = SimConfig::default().plan();
        let mut r = Scripted { fail: vec!["analyze design"], seen: vec![] };
        let failure = run_plan(&plan, &mut r).unwrap_err();
        assert_eq!(failure.step, "analyze design");
        assert!(matches!(failure.source, Error::ProcessFailed { code: Some(1), .. }));
        assert_eq!(r.seen, ["analyze globals", "analyze design"]);
    }

    #[test]
    fn continue_collects_failures() {
        let plan = Plan { policy: FailurePolicy::Continue, ..SimConfig::default().plan() };
        let mut r = Scripted { fail: vec!["analyze design", "elaborate design"], seen: vec![] };
        let summary = run_plan(&plan, &mut r).unwrap();
        assert!(!summary.success());
        assert_eq!(r.seen.len(), 6);
        let failed: Vec<&str> = summary.failures.iter().map(|f| f.step.as_str()).collect();
        assert_eq!(failed, ["analyze design", "elaborate design"]);
        assert_eq!(summary.completed.len(), 4);
    }

    #[test]
    fn dry_run_never_fails() {
        let plan = SimConfig { ghdl: "/no/such/ghdl".into(), ..SimConfig::default() }.plan();
        let summary = run_plan(&plan, &mut DryRunner).unwrap();
        assert_eq!(summary.completed.len(), 6);
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_reports_exit_status() {
        let ok = Step::new("ok", "true", Vec::new());
        let bad = Step::new("bad", "false", Vec::new());
        SystemRunner.run_step(&ok).unwrap();
        let err = SystemRunner.run_step(&bad).unwrap_err();
        assert!(matches!(err, Error::ProcessFailed { .. }));
    }
}
