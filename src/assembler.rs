use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::info;

use crate::error::{Error, Result};
use crate::process::run_checked;

/// Something that turns an assembly source into a hex dump on disk.
pub trait Assembler {
    /// Assemble `source`; on success `hex_dump` must exist.
    fn assemble(&self, source: &Path, hex_dump: &Path) -> Result<()>;
}

/// The project's `assembler.sh`, run from the working directory with the
/// source path as its only argument.
#[derive(Debug, Clone)]
pub struct ScriptAssembler {
    pub script: PathBuf,
    pub work_dir: PathBuf,
}

impl ScriptAssembler {
    pub fn new(script: impl Into<PathBuf>, work_dir: impl Into<PathBuf>) -> Self {
        Self { script: script.into(), work_dir: work_dir.into() }
    }

    /// Absolute path of the script. The child starts inside `work_dir`, so a
    /// path relative to the caller's directory would be looked up from there.
    pub fn program(&self) -> Result<PathBuf> {
        let program = self.work_dir.join(&self.script);
        if program.is_absolute() {
            return Ok(program);
        }
        let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
        Ok(cwd.join(program))
    }
}

impl Assembler for ScriptAssembler {
    fn assemble(&self, source: &Path, hex_dump: &Path) -> Result<()> {
        let program = self.program()?;
        info!(script = %program.display(), source = %source.display(), "running assembler");
        run_checked(Command::new(&program).arg(source).current_dir(&self.work_dir))?;
        if !hex_dump.is_file() {
            return Err(Error::MissingOutput {
                program: program.display().to_string(),
                path: hex_dump.to_path_buf(),
            });
        }
        Ok(())
    }
}
