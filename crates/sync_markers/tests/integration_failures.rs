// crates/sync_markers/tests/integration_failures.rs

#[cfg(test)]
mod integration_failures {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn sync_cmd(root: &Path) -> Command {
        let mut cmd = Command::cargo_bin("sync_markers").unwrap();
        cmd.current_dir(root);
        cmd
    }

    /// --- Test: Missing Canonical Source ---
    /// The run aborts with the missing path named, before any target
    /// directory is scanned or any file touched.
    #[test]
    fn test_missing_source_is_fatal() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let scripts = root.join("scripts");
        fs::create_dir_all(&scripts).unwrap();
        let stale = "#LOCKFILE_START#\nstale\n#LOCKFILE_END#\n";
        fs::write(scripts.join("deploy.sh"), stale).unwrap();

        sync_cmd(root)
            .assert()
            .failure()
            .stderr(predicate::str::contains("common.sh does not exist"))
            .stdout(predicate::str::contains("Processing").not());

        // No target was rewritten.
        assert_eq!(
            fs::read_to_string(scripts.join("deploy.sh")).unwrap(),
            stale
        );
    }

    /// --- Test: Missing Target Directory ---
    /// Every configured root must exist; a missing one aborts the run
    /// before any file is rewritten.
    #[test]
    fn test_missing_target_dir_is_fatal() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("common.sh"),
            "#LOCKFILE_START#\nfresh\n#LOCKFILE_END#\n",
        )
        .unwrap();
        let scripts = root.join("scripts");
        fs::create_dir_all(&scripts).unwrap();
        let stale = "#LOCKFILE_START#\nstale\n#LOCKFILE_END#\n";
        fs::write(scripts.join("deploy.sh"), stale).unwrap();
        // The default `extras` directory is deliberately absent.

        sync_cmd(root)
            .assert()
            .failure()
            .stderr(predicate::str::contains("extras"))
            .stderr(predicate::str::contains("does not exist"))
            .stdout(predicate::str::contains("Processing").not());

        assert_eq!(
            fs::read_to_string(scripts.join("deploy.sh")).unwrap(),
            stale
        );
    }

    /// --- Test: Missing Custom Target Directory ---
    /// The same existence check applies to directories given on the
    /// command line.
    #[test]
    fn test_missing_custom_target_dir_is_fatal() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("source.txt"), "#A_START#x#A_END#").unwrap();

        sync_cmd(root)
            .args(["--source", "source.txt", "--target-dir", "no_such_dir", "--marker", "A"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("no_such_dir"))
            .stderr(predicate::str::contains("does not exist"));
    }
}
