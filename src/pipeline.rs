use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::assembler::{Assembler, ScriptAssembler};
use crate::config::OrchestratorConfig;
use crate::error::{Error, Result};
use crate::mnemonic;
use crate::paths::ArtifactPaths;
use crate::relocate::relocate;
use crate::transcode::{transcode_file, TranscodeOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub paths: ArtifactPaths,
    pub records: usize,
}

/// Source file in, annotated binary dump in the simulator directory out.
///
/// Stages run strictly in order: mnemonics, assembler, transcode, relocate.
#[derive(Debug)]
pub struct Orchestrator<A: Assembler> {
    pub cfg: OrchestratorConfig,
    pub assembler: A,
}

impl Orchestrator<ScriptAssembler> {
    pub fn with_script(cfg: OrchestratorConfig) -> Self {
        let assembler = ScriptAssembler::new(&cfg.assembler, &cfg.work_dir);
        Self { cfg, assembler }
    }
}

impl<A: Assembler> Orchestrator<A> {
    pub fn new(cfg: OrchestratorConfig, assembler: A) -> Self {
        Self { cfg, assembler }
    }

    pub fn paths(&self, source: &Path) -> ArtifactPaths {
        ArtifactPaths::derive(
            source,
            &self.cfg.work_dir,
            &self.cfg.sim_dir(),
            &self.cfg.hex_suffix,
            &self.cfg.bin_suffix,
        )
    }

    pub fn run(&self, source: &Path) -> Result<Outcome> {
        let source = self.resolve_source(source)?;
        let mut paths = self.paths(&source);

        let ops = mnemonic::extract_file(&source, self.cfg.mnemonic_width)?;
        self.assembler.assemble(&source, &paths.hex_dump)?;

        let opts = TranscodeOptions {
            word_width: self.cfg.word_width,
            strict_line_count: self.cfg.strict_line_count,
        };
        let records = transcode_file(&paths.hex_dump, &paths.bin_dump, &ops, opts)?;
        info!(path = %paths.bin_dump.display(), records, "wrote binary dump");

        paths.relocated = relocate(&paths.bin_dump, &self.cfg.sim_dir())?;
        Ok(Outcome { paths, records })
    }

    // The assembler runs inside work_dir, so a relative source has to be
    // anchored to the caller's directory when the two differ.
    fn resolve_source(&self, source: &Path) -> Result<PathBuf> {
        if source.is_absolute() || self.cfg.work_dir == Path::new(".") {
            return Ok(source.to_path_buf());
        }
        let cwd = std::env::current_dir().map_err(|e| Error::io(".", e))?;
        let abs = cwd.join(source);
        debug!(source = %abs.display(), "anchored source path");
        Ok(abs)
    }
}
