use crate::error::{EngineError, Result};
use p8tokens_core::count_bytes;
use p8tokens_shared_kernel::FileCount;
use std::path::{Path, PathBuf};

/// Count the tokens of a single file.
///
/// The file is keyed by its base name. Read failures are reported as
/// [`EngineError::FileRead`], never as a zero count.
pub fn count_file(path: &Path) -> Result<FileCount> {
    let bytes = std::fs::read(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let tokens = count_bytes(&bytes);
    log::debug!("{}: {tokens} tokens", path.display());
    Ok(FileCount::from_path(path.to_path_buf(), tokens))
}

/// `count_file` の所有権版 (並列イテレータ用)
pub fn process_file(path: PathBuf) -> Result<FileCount> {
    count_file(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_count_file_uses_base_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("game.p8");
        std::fs::write(
            &path,
            "pico-8 cartridge // http://www.pico-8.com\nversion 41\n__lua__\nprint(1)\n",
        )
        .unwrap();

        let counted = count_file(&path).unwrap();
        assert_eq!(counted.name.as_str(), "game.p8");
        assert_eq!(counted.tokens, 3usize);
        assert_eq!(counted.path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_invalid_utf8_still_counts() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xff, b'x', b'=', b'1', 0xfe]).unwrap();

        let counted = count_file(file.path()).unwrap();
        assert!(!counted.tokens.is_zero());
    }

    #[test]
    fn test_missing_file_is_error_not_zero() {
        let dir = TempDir::new().unwrap();
        let err = count_file(&dir.path().join("missing.p8")).unwrap_err();
        assert!(matches!(err, EngineError::FileRead { .. }));
    }
}
