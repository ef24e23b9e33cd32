//! Integration tests for Relic

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use predicates::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    const CACHED: &str = r#"{"pep386":"2.5","short":"2.5","long":"2.5","date":"2024-01-02 03:04:05 +0000","dirty":false,"commit":"0123abcd","post":"0"}"#;

    fn relic() -> Command {
        let mut cmd = cargo_bin_cmd!("relic");
        cmd.env_remove("RELIC_CONFIG");
        cmd
    }

    /// A project directory where git can never be found
    fn project() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("relic.toml"),
            "[version]\ngit = \"relic-no-such-git\"\n",
        )
        .unwrap();
        temp
    }

    #[test]
    fn help_displays() {
        relic()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("version constants from git tags"));
    }

    #[test]
    fn version_displays() {
        relic()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("relic"));
    }

    #[test]
    fn parse_json() {
        let temp = project();
        relic()
            .arg("-C")
            .arg(temp.path())
            .args(["parse", "release_1.2-3-gabcdef12-dirty", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""pep386": "1.2.post3""#))
            .stdout(predicate::str::contains(r#""commit": "abcdef12""#))
            .stdout(predicate::str::contains(r#""dirty": true"#));
    }

    #[test]
    fn parse_text() {
        let temp = project();
        relic()
            .arg("-C")
            .arg(temp.path())
            .args(["parse", "1.0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Version 1.0"))
            .stdout(predicate::str::contains("status: release"));
    }

    #[test]
    fn parse_malformed_fails() {
        let temp = project();
        relic()
            .arg("-C")
            .arg(temp.path())
            .args(["parse", "not a version"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Malformed version string"))
            .stderr(predicate::str::contains("Hint:"));
    }

    #[test]
    fn info_without_any_source_warns() {
        let temp = project();
        relic()
            .arg("-C")
            .arg(temp.path())
            .args(["info", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""pep386": "0.0.0""#))
            .stdout(predicate::str::contains(r#""post": "-1""#))
            .stderr(predicate::str::contains("no version data available!"));

        assert!(!temp.path().join("RELIC-INFO").exists());
    }

    #[test]
    fn info_uses_cache() {
        let temp = project();
        fs::write(temp.path().join("RELIC-INFO"), format!("{CACHED}\n")).unwrap();

        relic()
            .arg("-C")
            .arg(temp.path())
            .args(["info", "--json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""commit": "0123abcd""#))
            .stderr(predicate::str::contains("no version data").not());
    }

    #[test]
    fn status_reports_build_status() {
        let temp = project();
        relic()
            .arg("-C")
            .arg(temp.path())
            .arg("status")
            .assert()
            .success()
            .stdout("development\n");

        fs::write(temp.path().join("RELIC-INFO"), format!("{CACHED}\n")).unwrap();
        relic()
            .arg("-C")
            .arg(temp.path())
            .arg("status")
            .assert()
            .success()
            .stdout("release\n");
    }

    #[test]
    fn write_rust_module() {
        let temp = project();
        fs::write(temp.path().join("RELIC-INFO"), format!("{CACHED}\n")).unwrap();

        relic()
            .arg("-C")
            .arg(temp.path())
            .arg("write")
            .assert()
            .success()
            .stdout(predicate::str::contains("Wrote version 2.5"));

        let module = fs::read_to_string(temp.path().join("version.rs")).unwrap();
        assert!(module.starts_with("// AUTOMATICALLY GENERATED BY 'RELIC':"));
        assert!(module.contains("pub const VERSION: &str = \"2.5\";"));
        assert!(module.contains("pub const VERSION_COMMIT: &str = \"0123abcd\";"));
    }

    #[test]
    fn write_python_module_into_subdir() {
        let temp = project();
        fs::create_dir(temp.path().join("pkg")).unwrap();

        relic()
            .arg("-C")
            .arg(temp.path())
            .args(["write", "pkg", "--format", "python", "-f", "_version.py"])
            .assert()
            .success();

        let module = fs::read_to_string(temp.path().join("pkg").join("_version.py")).unwrap();
        assert!(module.contains("__version__ = '0.0.0'"));
        assert!(module.contains("__version_dirty__ = True"));
    }

    #[test]
    fn write_format_flag_ignores_configured_filename() {
        let temp = project();
        fs::write(
            temp.path().join("relic.toml"),
            "[version]\ngit = \"relic-no-such-git\"\n\n[module]\nformat = \"rust\"\nfilename = \"build_version.rs\"\n",
        )
        .unwrap();

        relic()
            .arg("-C")
            .arg(temp.path())
            .args(["write", "--format", "python"])
            .assert()
            .success();

        assert!(temp.path().join("version.py").exists());
        assert!(!temp.path().join("build_version.rs").exists());
    }

    #[test]
    fn write_into_missing_dir_fails() {
        let temp = project();
        relic()
            .arg("-C")
            .arg(temp.path())
            .args(["write", "does-not-exist"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("IO error"));
    }

    #[test]
    fn config_path() {
        let temp = project();
        relic()
            .arg("-C")
            .arg(temp.path())
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("relic.toml"));
    }

    #[test]
    fn config_show() {
        let temp = project();
        relic()
            .arg("-C")
            .arg(temp.path())
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[version]"))
            .stdout(predicate::str::contains("relic-no-such-git"));
    }

    #[test]
    fn config_init_respects_existing() {
        let temp = project();
        relic()
            .arg("-C")
            .arg(temp.path())
            .args(["config", "init"])
            .assert()
            .success()
            .stdout(predicate::str::contains("already exists"));

        relic()
            .arg("-C")
            .arg(temp.path())
            .args(["config", "init", "--force"])
            .assert()
            .success();

        let content = fs::read_to_string(temp.path().join("relic.toml")).unwrap();
        assert!(content.contains("tag_prefix = \"release_\""));
    }

    #[test]
    fn invalid_config_fails() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("relic.toml"), "[version\n").unwrap();
        relic()
            .arg("-C")
            .arg(temp.path())
            .arg("status")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid configuration"));
    }
}
