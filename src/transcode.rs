use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::hexword::HexWord;
use crate::mnemonic::Mnemonic;

/// One line of a binary dump: `<bits> <mnemonic>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryRecord<'a> {
    pub bits: String,
    pub mnemonic: &'a Mnemonic,
}

impl std::fmt::Display for BinaryRecord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.bits, self.mnemonic)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TranscodeOptions {
    pub word_width: usize,
    /// Fail when the hex dump has fewer words than there are mnemonics.
    pub strict_line_count: bool,
}

/// Pair each hex word from `hex` with the mnemonic at the same index and write
/// the records to `out`, one per line. Returns the number of records written.
///
/// Correlation is purely positional: the k-th hex line belongs to the k-th
/// source line. Records are written as they are produced, so a failure part way
/// leaves everything before it in `out`.
pub fn transcode<R: BufRead, W: Write>(
    hex: R,
    mnemonics: &[Mnemonic],
    out: &mut W,
    opts: TranscodeOptions,
    origin: &Path,
) -> Result<usize> {
    let mut index = 0usize;
    for line in hex.lines() {
        let line = line.map_err(|e| Error::io(origin, e))?;
        let lineno = index + 1;
        let word: HexWord = line
            .parse()
            .map_err(|_| Error::HexParse { line: lineno, text: line.clone() })?;
        let mnemonic = mnemonics
            .get(index)
            .ok_or(Error::IndexOverrun { line: lineno, mnemonics: mnemonics.len() })?;
        let record = BinaryRecord { bits: word.to_binary(opts.word_width), mnemonic };
        writeln!(out, "{record}").map_err(|e| Error::io(origin, e))?;
        index += 1;
    }
    if index < mnemonics.len() {
        if opts.strict_line_count {
            return Err(Error::LineCountMismatch { words: index, mnemonics: mnemonics.len() });
        }
        warn!(words = index, mnemonics = mnemonics.len(), "hex dump is shorter than the source");
    }
    Ok(index)
}

/// File-to-file form of [`transcode`]. The output file is flushed and closed
/// before this returns, on success and on failure.
pub fn transcode_file(
    hex_path: &Path,
    bin_path: &Path,
    mnemonics: &[Mnemonic],
    opts: TranscodeOptions,
) -> Result<usize> {
    let hex = File::open(hex_path).map_err(|e| Error::io(hex_path, e))?;
    let bin = File::create(bin_path).map_err(|e| Error::io(bin_path, e))?;
    let mut out = BufWriter::new(bin);
    let res = transcode(BufReader::new(hex), mnemonics, &mut out, opts, hex_path);
    let flushed = out.flush().map_err(|e| Error::io(bin_path, e));
    let n = res?;
    flushed?;
    debug!(hex = %hex_path.display(), bin = %bin_path.display(), records = n, "transcoded");
    Ok(n)
}
