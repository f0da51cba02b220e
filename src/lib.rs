pub mod assembler;
pub mod config;
pub mod error;
pub mod hexword;
pub mod mnemonic;
pub mod pad;
pub mod paths;
pub mod pipeline;
pub mod process;
pub mod relocate;
pub mod transcode;

pub use assembler::{Assembler, ScriptAssembler};
pub use config::OrchestratorConfig;
pub use error::{Error, Result};
pub use pipeline::{Orchestrator, Outcome};
