//! Checks that every source module has a unit test file and vice versa

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Crate roots and module declarations carry no logic of their own
    fn is_structural(path: &Path) -> bool {
        matches!(
            path.file_name().and_then(|name| name.to_str()),
            Some("main.rs" | "lib.rs" | "mod.rs")
        )
    }

    /// Rust files below `root`, relative to it
    fn rust_files(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];
        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path
                        .strip_prefix(root)
                        .map_err(|error| io::Error::other(error.to_string()))?;
                    found.insert(relative.to_path_buf());
                }
            }
        }
        Ok(found)
    }

    fn listing(paths: &[&PathBuf], prefix: &str) -> String {
        paths
            .iter()
            .map(|path| format!("  - {prefix}/{}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_every_module_has_unit_tests() {
        let sources = rust_files(Path::new(SRC_DIR)).expect("Failed to scan src");
        let units = rust_files(Path::new(UNIT_DIR)).expect("Failed to scan unit tests");

        let missing: Vec<&PathBuf> = sources
            .iter()
            .filter(|path| !is_structural(path) && !units.contains(*path))
            .collect();
        assert!(
            missing.is_empty(),
            "Modules without a file under {UNIT_DIR}:\n{}",
            listing(&missing, SRC_DIR)
        );
    }

    #[test]
    fn test_every_unit_test_file_has_a_module() {
        let sources = rust_files(Path::new(SRC_DIR)).expect("Failed to scan src");
        let units = rust_files(Path::new(UNIT_DIR)).expect("Failed to scan unit tests");

        let orphaned: Vec<&PathBuf> = units
            .iter()
            .filter(|path| !is_structural(path) && !sources.contains(*path))
            .collect();
        assert!(
            orphaned.is_empty(),
            "Unit test files without a module under {SRC_DIR}:\n{}",
            listing(&orphaned, UNIT_DIR)
        );
    }

    #[test]
    fn test_every_test_file_declares_tests() {
        let files = rust_files(Path::new("tests")).expect("Failed to scan tests");
        let mut empty = Vec::new();
        for path in files.iter().filter(|path| !is_structural(path)) {
            let content =
                fs::read_to_string(Path::new("tests").join(path)).expect("Failed to read test file");
            if !content.contains("#[test]") {
                empty.push(path);
            }
        }
        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            listing(&empty, "tests")
        );
    }
}
