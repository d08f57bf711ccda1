use assert_cmd::Command;
use predicates::prelude::*;

fn pyflymake() -> Command {
    Command::cargo_bin("pyflymake").unwrap()
}

#[test]
fn test_requires_a_filename() {
    pyflymake()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_exits_zero() {
    pyflymake()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--checkers"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_unknown_checker_exits_one_and_lists_valid_names() {
    pyflymake()
        .args(["-c", "flake9", "app.py"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unknown checker 'flake9'"))
        .stderr(predicate::str::contains("pep8, pyflakes, todo"));
}

#[test]
fn test_dry_run_prints_default_invocations() {
    pyflymake()
        .args(["--dry-run", "-i", "E501", "app.py"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pyflakes app.py"))
        .stdout(predicate::str::contains(
            "pep8 --repeat --ignore=E501 app.py",
        ));
}

#[test]
fn test_dry_run_respects_checker_order() {
    let assert = pyflymake()
        .args(["-d", "-c", "todo,pyflakes", "users.py"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("grep -H -n -i -e todo -e fixme"));
    assert!(lines[1].starts_with("pyflakes"));
}

#[test]
fn test_ignore_codes_merge_sorted_into_one_flag() {
    pyflymake()
        .args(["-d", "-c", "pep8", "-i", "W291", "-i", "E501", "app.py"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--ignore=E501,W291"));
}

#[cfg(unix)]
mod venv {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;
    use tempfile::TempDir;

    fn install_checker(venv: &Path, name: &str, script: &str) {
        let bin = venv.join("bin");
        fs::create_dir_all(&bin).unwrap();
        let path = bin.join(name);
        fs::write(&path, script).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
    }

    #[test]
    fn test_runs_checkers_from_a_virtualenv() {
        let venv = TempDir::new().unwrap();
        install_checker(
            venv.path(),
            "pep8",
            "#!/bin/sh\necho 'app.py:3:80: E501 line too long (82 characters)'\n",
        );

        pyflymake()
            .args(["-c", "pep8", "-e"])
            .arg(venv.path())
            .arg("app.py")
            .assert()
            .success()
            .stdout("WARNING:3:app.py:[E501] line too long (82 characters)\n");
    }

    #[test]
    fn test_json_lines_reach_stdout() {
        let venv = TempDir::new().unwrap();
        install_checker(
            venv.path(),
            "pyflakes",
            "#!/bin/sh\necho \"app.py:4: 'doom' imported but unused\"\n",
        );

        pyflymake()
            .args(["-c", "pyflakes", "--json", "-e"])
            .arg(venv.path())
            .arg("app.py")
            .assert()
            .success()
            .stdout(predicate::str::contains("\"level\":\"WARNING\""))
            .stdout(predicate::str::contains("\"error_type\":\"PY\""));
    }

    #[test]
    fn test_missing_checker_binary_exits_one() {
        let venv = TempDir::new().unwrap();
        let bin = venv.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        // Present but not executable
        fs::write(bin.join("pyflakes"), "not a script").unwrap();

        pyflymake()
            .args(["-c", "pyflakes", "-e"])
            .arg(venv.path())
            .arg("app.py")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Failed to launch"));
    }
}
