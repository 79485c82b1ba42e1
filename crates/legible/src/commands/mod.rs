//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod age;
pub mod info;
pub mod score;
pub mod syllables;

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Check the size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = usize::try_from(metadata.len()).unwrap_or(usize::MAX);
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    std::fs::read_to_string(path.as_std_path()).with_context(|| format!("failed to read {path}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn write_temp(content: &str) -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::try_from(dir.path().join("policy.txt")).unwrap();
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn reads_file_under_limit() {
        let (_dir, path) = write_temp("We keep your data safe.");
        let text = read_input_file(&path, Some(1024)).unwrap();
        assert_eq!(text, "We keep your data safe.");
    }

    #[test]
    fn rejects_file_over_limit() {
        let (_dir, path) = write_temp("We keep your data safe.");
        let err = read_input_file(&path, Some(4)).unwrap_err();
        assert!(err.to_string().contains("input too large"), "{err}");
    }

    #[test]
    fn no_limit_reads_anything() {
        let (_dir, path) = write_temp("We keep your data safe.");
        assert!(read_input_file(&path, None).is_ok());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read_input_file(Utf8Path::new("/nonexistent/policy.txt"), None).unwrap_err();
        assert!(err.to_string().contains("failed to read"), "{err}");
    }
}
