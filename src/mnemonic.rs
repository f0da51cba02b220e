use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::pad::pad_left;

pub const MNEMONIC_WIDTH: usize = 4;

/// Annotation token taken from one assembly source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mnemonic(String);

impl Mnemonic {
    /// Drop the trailing operand field of `line` and zero-pad what is left.
    ///
    /// The split happens at the last whitespace character. A line without any
    /// separator is kept whole. Longer tokens are kept as they are.
    pub fn from_line(line: &str, width: usize) -> Self {
        let line = line.trim_end_matches(['\r', '\n']);
        let head = match line.rsplit_once(char::is_whitespace) {
            Some((head, _operand)) => head,
            None => line,
        };
        Mnemonic(pad_left(head, width, '0'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One token per line of `reader`, in order.
pub fn extract<R: BufRead>(reader: R, width: usize) -> std::io::Result<Vec<Mnemonic>> {
    reader
        .lines()
        .map(|line| line.map(|l| Mnemonic::from_line(&l, width)))
        .collect()
}

pub fn extract_file(path: &Path, width: usize) -> Result<Vec<Mnemonic>> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let ops = extract(BufReader::new(file), width).map_err(|e| Error::io(path, e))?;
    debug!(path = %path.display(), count = ops.len(), "extracted mnemonics");
    Ok(ops)
}
