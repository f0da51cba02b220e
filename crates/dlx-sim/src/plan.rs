use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// One external command of the simulation flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    pub program: String,
    pub args: Vec<String>,
}

impl Step {
    pub fn new(name: &str, program: &str, args: impl IntoIterator<Item = String>) -> Self {
        Self { name: name.to_string(), program: program.to_string(), args: args.into_iter().collect() }
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailurePolicy {
    /// Stop at the first step that exits non-zero.
    #[default]
    Abort,
    /// Run every step and report all failures at the end.
    Continue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub policy: FailurePolicy,
    pub steps: Vec<Step>,
}

impl Plan {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

/// Everything the control-unit flow needs, defaulting to the layout under
/// `sim/CU`: sources two levels up in `src/`, traces in the current directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub ghdl: String,
    pub src_dir: PathBuf,
    pub globals: PathBuf,
    pub design: PathBuf,
    pub testbench: PathBuf,
    pub ieee: String, // library profile for the test bench
    pub design_unit: String,
    pub tb_unit: String,
    pub tb_exe: String,
    pub stop_time: String,
    pub wave: String,
    pub vcd: String,
    pub policy: FailurePolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ghdl: "ghdl".into(),
            src_dir: PathBuf::from("../../src"),
            globals: PathBuf::from("000-globals.vhd"),
            design: PathBuf::from("a.a-CU_FSM.vhd"),
            testbench: PathBuf::from("tb/TB_a.a-CU_FSM.vhd"),
            ieee: "synopsys".into(),
            design_unit: "dlx_cu".into(),
            tb_unit: "TB_CU_FSM".into(),
            tb_exe: "./tb_cu_fsm".into(),
            stop_time: "400ns".into(),
            wave: "CU_DLX.ghw".into(),
            vcd: "CU_DLX.vcd".into(),
            policy: FailurePolicy::Abort,
        }
    }
}

impl SimConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    fn src(&self, file: &Path) -> String {
        self.src_dir.join(file).display().to_string()
    }

    /// Analyze globals, design and test bench; elaborate design and test
    /// bench; run the test bench.
    pub fn plan(&self) -> Plan {
        let ieee = format!("--ieee={}", self.ieee);
        let analyze = |extra: &[&str], file: &Path| {
            let mut args = vec!["-a".to_string()];
            args.extend(extra.iter().map(|s| s.to_string()));
            args.push(self.src(file));
            args
        };
        let steps = vec![
            Step::new("analyze globals", &self.ghdl, analyze(&[], &self.globals)),
            Step::new("analyze design", &self.ghdl, analyze(&[], &self.design)),
            Step::new("analyze test bench", &self.ghdl, analyze(&[ieee.as_str()], &self.testbench)),
            Step::new("elaborate design", &self.ghdl, ["-e".to_string(), self.design_unit.clone()]),
            Step::new(
                "elaborate test bench",
                &self.ghdl,
                ["-e".to_string(), ieee.clone(), self.tb_unit.clone()],
            ),
            Step::new(
                "run test bench",
                &self.tb_exe,
                [
                    format!("--stop-time={}", self.stop_time),
                    format!("--wave={}", self.wave),
                    format!("--vcd={}", self.vcd),
                ],
            ),
        ];
        Plan { policy: self.policy, steps }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lines(plan: &Plan) -> Vec<String> {
        plan.steps
            .iter()
            .map(|s| dlx_tools::process::describe(&s.command()))
            .collect()
    }

    #[test]
    fn default_plan_matches_cu_flow() {
        let plan = SimConfig::default().plan();
        assert_eq!(plan.policy, FailurePolicy::Abort);
        assert_eq!(
            lines(&plan),
            [
                "ghdl -a ../../src/000-globals.vhd",
                "ghdl -a ../../src/a.a-CU_FSM.vhd",
                "ghdl -a --ieee=synopsys ../../src/tb/TB_a.a-CU_FSM.vhd",
                "ghdl -e dlx_cu",
                "ghdl -e --ieee=synopsys TB_CU_FSM",
                "./tb_cu_fsm --stop-time=400ns --wave=CU_DLX.ghw --vcd=CU_DLX.vcd",
            ]
        );
    }

    #[test]
    fn source_dir_with_spaces_stays_one_argument() {
        let cfg = SimConfig { src_dir: PathBuf::from("/home/me/my dlx/src"), ..SimConfig::default() };
        let plan = cfg.plan();
        assert_eq!(plan.steps[0].args, ["-a", "/home/me/my dlx/src/000-globals.vhd"]);
    }

    #[test]
    fn plan_survives_json() {
        let cfg = SimConfig { stop_time: "1us".into(), policy: FailurePolicy::Continue, ..SimConfig::default() };
        let plan = cfg.plan();
        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains("\"continue\""));
        let back: Plan = serde_json::from_str(&json).unwrap();
        assert_eq!(back, plan);
        assert_eq!(back.steps[5].args[0], "--stop-time=1us");
    }

    #[test]
    fn config_file_fields_override_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("sim.json");
        std::fs::write(&path, r#"{ "ghdl": "/opt/ghdl/bin/ghdl", "policy": "continue" }"#).unwrap();
        let cfg = SimConfig::load(&path).unwrap();
        assert_eq!(cfg.ghdl, "/opt/ghdl/bin/ghdl");
        assert_eq!(cfg.policy, FailurePolicy::Continue);
        assert_eq!(cfg.stop_time, "400ns");
    }
}
