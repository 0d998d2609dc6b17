use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

const RESUME: &str = "\
Summary: data engineer with 4 years of experience.

Projects
- Built a realtime analytics dashboard with Python and SQL
- Developed a fraud-detection pipeline that cut losses by 18%
";

const JD: &str = "Looking for Python and AWS skills for a data platform team";

fn compass() -> Command {
    let mut cmd = Command::cargo_bin("compass").unwrap();
    // Insulate from any host configuration.
    cmd.env_remove("COMPASS_CONFIG")
        .env_remove("COMPASS_SKILLS_PATH")
        .env_remove("COMPASS_ROLES_PATH");
    cmd
}

fn write(path: &Path, content: &str) {
    std::fs::write(path, content).unwrap();
}

#[test]
fn cli_help() {
    compass()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn cli_version() {
    compass()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn analyze_robot_mode_emits_report_json() {
    let dir = tempdir().unwrap();
    let resume_path = dir.path().join("resume.txt");
    let jd_path = dir.path().join("jd.txt");
    write(&resume_path, RESUME);
    write(&jd_path, JD);

    let output = compass()
        .args(["--robot", "--quiet", "analyze"])
        .arg("--resume")
        .arg(&resume_path)
        .arg("--jd")
        .arg(&jd_path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output).unwrap();
    for field in [
        "overall_score",
        "skills_found",
        "required_skills",
        "matched",
        "gaps",
        "relevant_projects",
        "recommended_jobs",
        "resume_suggestions",
    ] {
        assert!(report.get(field).is_some(), "missing field {field}");
    }

    let skills: Vec<&str> = report["skills_found"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert!(skills.contains(&"python"));
    assert!(skills.contains(&"sql"));

    let matched: Vec<&str> = report["matched"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert!(matched.contains(&"python"));

    let gaps: Vec<&str> = report["gaps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert!(gaps.contains(&"aws"));

    assert!(!report["relevant_projects"].as_array().unwrap().is_empty());
    assert_eq!(report["degraded"], Value::Bool(false));
}

#[test]
fn analyze_human_mode_prints_sections() {
    let dir = tempdir().unwrap();
    let resume_path = dir.path().join("resume.txt");
    let jd_path = dir.path().join("jd.txt");
    write(&resume_path, RESUME);
    write(&jd_path, JD);

    compass()
        .args(["--quiet", "analyze"])
        .arg("--resume")
        .arg(&resume_path)
        .arg("--jd")
        .arg(&jd_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall match:"))
        .stdout(predicate::str::contains("Recommended roles"));
}

#[test]
fn skills_command_lists_builtin_catalog() {
    compass()
        .args(["--quiet", "skills"])
        .assert()
        .success()
        .stdout(predicate::str::contains("python"));
}

#[test]
fn custom_catalogs_via_environment() {
    let dir = tempdir().unwrap();
    let skills_path = dir.path().join("skills.json");
    let roles_path = dir.path().join("roles.json");
    let resume_path = dir.path().join("resume.txt");
    let jd_path = dir.path().join("jd.txt");
    write(&skills_path, r#"["fortran"]"#);
    write(
        &roles_path,
        r#"[{"id": "Numerical Analyst", "description": "fortran numerical computing"}]"#,
    );
    write(&resume_path, "Wrote FORTRAN kernels");
    write(&jd_path, "fortran role");

    let output = compass()
        .env("COMPASS_SKILLS_PATH", &skills_path)
        .env("COMPASS_ROLES_PATH", &roles_path)
        .args(["--robot", "--quiet", "analyze"])
        .arg("--resume")
        .arg(&resume_path)
        .arg("--jd")
        .arg(&jd_path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["skills_found"], serde_json::json!(["fortran"]));
    assert_eq!(
        report["recommended_jobs"][0]["role"],
        Value::String("Numerical Analyst".to_string())
    );
}

#[test]
fn missing_resume_file_fails() {
    compass()
        .args(["--quiet", "analyze", "--resume", "/no/such/file", "--jd", "/also/missing"])
        .assert()
        .failure();
}

#[test]
fn robot_mode_errors_are_json() {
    let output = compass()
        .args(["--robot", "--quiet", "analyze", "--resume", "/no/such/file", "--jd", "/missing"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let error: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(error["error"], Value::Bool(true));
    assert!(error["message"].as_str().is_some());
}
