use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hexword::WORD_WIDTH;
use crate::mnemonic::MNEMONIC_WIDTH;
use crate::paths::{BIN_SUFFIX, HEX_SUFFIX};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrchestratorConfig {
    pub work_dir: PathBuf,  // where the assembler runs and dumps land
    pub assembler: PathBuf, // relative paths resolve against work_dir
    pub sim_dir: PathBuf,   // relocation target, relative to work_dir
    pub mnemonic_width: usize,
    pub word_width: usize,
    pub hex_suffix: String,
    pub bin_suffix: String,
    pub strict_line_count: bool,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("."),
            assembler: PathBuf::from("assembler.sh"),
            sim_dir: PathBuf::from("../sim"),
            mnemonic_width: MNEMONIC_WIDTH,
            word_width: WORD_WIDTH,
            hex_suffix: HEX_SUFFIX.to_string(),
            bin_suffix: BIN_SUFFIX.to_string(),
            strict_line_count: false,
        }
    }
}

impl OrchestratorConfig {
    /// Read a JSON config; missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_json::from_str(&text).map_err(|source| Error::Config { path: path.to_path_buf(), source })
    }

    pub fn sim_dir(&self) -> PathBuf {
        self.work_dir.join(&self.sim_dir)
    }
}
