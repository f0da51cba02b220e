use std::path::{Path, PathBuf};

pub const HEX_SUFFIX: &str = "_hex_dump.txt";
pub const BIN_SUFFIX: &str = "_bin_dump.txt";

/// Files one orchestrator run reads and writes, all named after the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub source: PathBuf,
    pub hex_dump: PathBuf,
    pub bin_dump: PathBuf,
    pub relocated: PathBuf,
}

/// Source file name without its last extension. Only the file name is
/// considered, so dots in directory names are left alone.
pub fn stem(source: &Path) -> String {
    source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl ArtifactPaths {
    pub fn derive(
        source: &Path,
        work_dir: &Path,
        sim_dir: &Path,
        hex_suffix: &str,
        bin_suffix: &str,
    ) -> Self {
        let stem = stem(source);
        let hex_name = format!("{stem}{hex_suffix}");
        let bin_name = format!("{stem}{bin_suffix}");
        Self {
            source: source.to_path_buf(),
            hex_dump: work_dir.join(hex_name),
            relocated: sim_dir.join(&bin_name),
            bin_dump: work_dir.join(bin_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_names_from_stem() {
        let p = ArtifactPaths::derive(
            Path::new("progs.v2/fib.asm"),
            Path::new("bin"),
            Path::new("bin/../sim"),
            HEX_SUFFIX,
            BIN_SUFFIX,
        );
        assert_eq!(p.hex_dump, Path::new("bin/fib_hex_dump.txt"));
        assert_eq!(p.bin_dump, Path::new("bin/fib_bin_dump.txt"));
        assert_eq!(p.relocated, Path::new("bin/../sim/fib_bin_dump.txt"));
    }

    #[test]
    fn only_last_extension_is_stripped() {
        assert_eq!(stem(Path::new("test.dlx.asm")), "test.dlx");
        assert_eq!(stem(Path::new("noext")), "noext");
    }
}
