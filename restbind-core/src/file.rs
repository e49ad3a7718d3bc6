use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated source file
pub trait GeneratedFile {
    /// Path of the file relative to the output directory
    fn relative_path(&self) -> PathBuf;

    /// Render the file content
    fn render(&self) -> String;

    /// Full path of the file below `base`
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    /// Render the content as individual lines (no trailing newline per line)
    fn lines(&self) -> Vec<String> {
        self.render().lines().map(String::from).collect()
    }

    /// Write the file below `base`, leaving identical files untouched
    fn write(&self, base: &Path) -> Result<WriteResult> {
        write_file(&self.path(base), &self.render())
    }
}

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<WriteResult> {
    if let Ok(existing) = std::fs::read_to_string(path)
        && existing == content
    {
        return Ok(WriteResult::Unchanged);
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(WriteResult::Written)
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File already had the exact content
    Unchanged,
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Hello;

    impl GeneratedFile for Hello {
        fn relative_path(&self) -> PathBuf {
            PathBuf::from("com").join("acme").join("Hello.java")
        }

        fn render(&self) -> String {
            "class Hello {\n}\n".to_string()
        }
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("b").join("c").join("test.txt");

        let result = write_file(&path, "nested").unwrap();

        assert_eq!(result, WriteResult::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_file_unchanged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test.txt");

        write_file(&path, "same").unwrap();
        let result = write_file(&path, "same").unwrap();

        assert_eq!(result, WriteResult::Unchanged);
    }

    #[test]
    fn test_generated_file_write() {
        let temp = TempDir::new().unwrap();

        let result = Hello.write(temp.path()).unwrap();

        assert_eq!(result, WriteResult::Written);
        let path = temp.path().join("com/acme/Hello.java");
        assert_eq!(fs::read_to_string(path).unwrap(), "class Hello {\n}\n");
    }

    #[test]
    fn test_generated_file_lines() {
        assert_eq!(Hello.lines(), vec!["class Hello {", "}"]);
    }
}
