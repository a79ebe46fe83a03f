// Integration tests for Loader module
// This file should be run with cargo test --test test_loader

#[path = "../src/loader/mod.rs"]
mod loader;

use loader::{CommandSet, Loader, LoaderError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn init_tracing() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .init();
    });
}

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn load(root: &Path) -> CommandSet {
    Loader::default().load(root).expect("scan should start")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Empty directory yields an empty set
    #[test]
    fn test_empty_directory() {
        init_tracing();
        let dir = TempDir::new().unwrap();

        let set = load(dir.path());
        assert!(set.is_empty());
        assert_eq!(set, CommandSet::new());
    }

    /// Files are visited in lexical path order, subdirectories in place
    #[test]
    fn test_discovery_order() {
        init_tracing();
        let dir = TempDir::new().unwrap();

        write(dir.path(), "c.yml", "raw_cmd: [c1]\nraw_ps: [pc]\n");
        write(dir.path(), "a.yml", "raw_cmd: [a1, a2]\n");
        write(dir.path(), "b/inner.yml", "raw_cmd: [b1]\nraw_ps: [pb]\n");
        write(dir.path(), "b/deeper/z.yml", "raw_cmd: [bz]\n");
        write(dir.path(), "b/a.yml", "raw_cmd: [ba]\n");

        let set = load(dir.path());
        assert_eq!(set.cmd, vec!["a1", "a2", "ba", "bz", "b1", "c1"]);
        assert_eq!(set.powershell, vec!["pb", "pc"]);
    }

    /// Only *.yml files are parsed
    #[test]
    fn test_non_yml_files_ignored() {
        init_tracing();
        let dir = TempDir::new().unwrap();

        write(dir.path(), "keep.yml", "raw_cmd: [kept]\n");
        write(dir.path(), "other.yaml", "raw_cmd: [yaml]\n");
        write(dir.path(), "notes.txt", "raw_cmd: [txt]\n");
        write(dir.path(), "UPPER.YML", "raw_cmd: [upper]\n");
        write(dir.path(), "broken.txt", "{{{{ not yaml");

        let set = load(dir.path());
        assert_eq!(set.cmd, vec!["kept"]);
        assert!(set.powershell.is_empty());
    }

    /// A directory named like a command file is descended into
    #[test]
    fn test_yml_named_directory_is_walked() {
        init_tracing();
        let dir = TempDir::new().unwrap();

        write(dir.path(), "group.yml/one.yml", "raw_ps: [inside]\n");

        let set = load(dir.path());
        assert_eq!(set.powershell, vec!["inside"]);
    }

    /// Broken files contribute nothing and do not affect other files
    #[test]
    fn test_bad_files_skipped() {
        init_tracing();
        let dir = TempDir::new().unwrap();

        write(dir.path(), "1-good.yml", "raw_cmd: [first]\n");
        write(dir.path(), "2-scalar.yml", "raw_ps: [dropped]\nraw_cmd: not-a-list\n");
        write(dir.path(), "3-syntax.yml", "raw_cmd: [unclosed\n");
        write(dir.path(), "4-list.yml", "- just\n- a list\n");
        write(dir.path(), "5-good.yml", "raw_cmd: [last]\nraw_ps: [ps]\n");

        let set = load(dir.path());
        assert_eq!(set.cmd, vec!["first", "last"]);
        assert_eq!(set.powershell, vec!["ps"]);
    }

    /// Each string entry is kept in file order, others dropped
    #[test]
    fn test_entries_in_file_order() {
        init_tracing();
        let dir = TempDir::new().unwrap();

        write(
            dir.path(),
            "setup.yml",
            "raw_ps:\n  - Set-TimeZone -Id 'UTC'\n  - 1\n  - Restart-Service w32time\n  - Set-TimeZone -Id 'UTC'\n",
        );

        let set = load(dir.path());
        assert_eq!(
            set.powershell,
            vec![
                "Set-TimeZone -Id 'UTC'",
                "Restart-Service w32time",
                "Set-TimeZone -Id 'UTC'",
            ]
        );
        assert_eq!(set.len(), 3);
    }

    /// Missing root cannot be scanned
    #[test]
    fn test_missing_root() {
        init_tracing();
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");

        let err = Loader::default().load(&missing).unwrap_err();
        assert!(matches!(err, LoaderError::RootUnavailable { .. }));
    }

    /// A file root is rejected
    #[test]
    fn test_file_root() {
        init_tracing();
        let dir = TempDir::new().unwrap();
        write(dir.path(), "single.yml", "raw_cmd: [x]\n");

        let err = Loader::default()
            .load(&dir.path().join("single.yml"))
            .unwrap_err();
        assert!(matches!(err, LoaderError::NotADirectory(_)));
    }
}
