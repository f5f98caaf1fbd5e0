//! Tests for the script runner.

use super::*;
use crate::events::EventKind;

fn run(text: &str, config: &Config) -> (Result<RunSummary>, Vec<StepReport>) {
    let script = Script::parse(text).unwrap();
    let mut reports = Vec::new();
    let result = run_script(&script, config, |report| {
        reports.push(report.clone());
        Ok(())
    });
    (result, reports)
}

fn kinds(report: &StepReport) -> Vec<EventKind> {
    report.events.iter().map(|e| e.kind).collect()
}

#[test]
fn test_run_reference_scenario() {
    let text = r#"
acquire t1
acquire t2
release t1
release t1
release t2
expect unlocked
"#;
    let (result, reports) = run(text, &Config::default());
    let summary = result.unwrap();

    assert_eq!(summary, RunSummary { steps: 6, final_count: 0 });

    let counts: Vec<usize> = reports.iter().map(|r| r.count).collect();
    assert_eq!(counts, vec![1, 2, 1, 1, 0, 0]);

    use EventKind::*;
    assert_eq!(kinds(&reports[0]), vec![Create, Up]);
    assert_eq!(kinds(&reports[1]), vec![Up]);
    assert_eq!(kinds(&reports[2]), vec![Down]);
    assert!(kinds(&reports[3]).is_empty());
    assert_eq!(kinds(&reports[4]), vec![Destroy, Down]);
    assert!(kinds(&reports[5]).is_empty());
}

#[test]
fn test_report_lines_match_script_lines() {
    let text = "# comment\nacquire a\n\nrelease a\n";
    let (result, reports) = run(text, &Config::default());
    result.unwrap();

    let lines: Vec<usize> = reports.iter().map(|r| r.line).collect();
    assert_eq!(lines, vec![2, 4]);
    assert_eq!(reports[0].step, "acquire a");
}

#[test]
fn test_release_unknown_token_fails() {
    let (result, reports) = run("acquire a\nrelease b\n", &Config::default());

    let err = result.unwrap_err();
    assert!(matches!(err, LockerError::ScriptError { line: 2, .. }));
    assert!(err.to_string().contains("token 'b' was never acquired"));
    // The step before the failure was still reported
    assert_eq!(reports.len(), 1);
}

#[test]
fn test_reacquire_held_name_fails() {
    let (result, _) = run("acquire a\nacquire a\n", &Config::default());

    let err = result.unwrap_err();
    assert!(err.to_string().contains("token 'a' is still held"));
}

#[test]
fn test_reacquire_released_name_is_allowed() {
    let (result, reports) = run(
        "acquire a\nrelease a\nacquire a\nrelease a\n",
        &Config::default(),
    );
    result.unwrap();

    use EventKind::*;
    assert_eq!(kinds(&reports[2]), vec![Create, Up]);
    assert_eq!(kinds(&reports[3]), vec![Destroy, Down]);
}

#[test]
fn test_failed_expectation() {
    let (result, _) = run("acquire a\nexpect 2\n", &Config::default());

    let err = result.unwrap_err();
    assert!(matches!(err, LockerError::ScriptError { line: 2, .. }));
    assert!(err.to_string().contains("expected 2 but count is 1"));
}

#[test]
fn test_expect_locked_and_unlocked() {
    let (result, _) = run(
        "expect unlocked\nexpect 0\nacquire a\nexpect locked\nrelease a\nexpect unlocked\n",
        &Config::default(),
    );
    result.unwrap();

    let (result, _) = run("expect locked\n", &Config::default());
    assert!(result.is_err());
}

#[test]
fn test_locked_at_end_fails_by_default() {
    let (result, reports) = run("acquire a\nacquire b\nrelease a\n", &Config::default());

    let err = result.unwrap_err();
    assert_eq!(err.exit_code(), crate::exit_codes::LOCK_FAILURE);
    assert!(err.to_string().contains("1 lock(s) still held at end of script: b"));
    assert_eq!(reports.len(), 3);
}

#[test]
fn test_locked_at_end_allowed_when_configured() {
    let config = Config {
        require_unlocked_at_end: false,
        ..Config::default()
    };
    let (result, _) = run("acquire a\n", &config);

    assert_eq!(result.unwrap().final_count, 1);
}

#[test]
fn test_max_outstanding_enforced() {
    let config = Config {
        max_outstanding: 2,
        ..Config::default()
    };
    let (result, _) = run("acquire a\nacquire b\nacquire c\n", &config);

    let err = result.unwrap_err();
    assert!(matches!(err, LockerError::ScriptError { line: 3, .. }));
    assert!(err.to_string().contains("max_outstanding = 2"));

    // Released tokens do not count against the limit
    let (result, _) = run(
        "acquire a\nacquire b\nrelease a\nacquire c\nrelease b\nrelease c\n",
        &config,
    );
    result.unwrap();
}

#[test]
fn test_callback_error_stops_run() {
    let script = Script::parse("acquire a\nrelease a\n").unwrap();
    let mut seen = 0;
    let result = run_script(&script, &Config::default(), |_| {
        seen += 1;
        Err(LockerError::UserError("stdout closed".to_string()))
    });

    assert!(result.is_err());
    assert_eq!(seen, 1);
}

#[test]
fn test_step_report_text() {
    let (result, reports) = run("acquire a\nrelease a\n", &Config::default());
    result.unwrap();

    let text = reports[0].to_text();
    assert!(text.contains("acquire a"));
    assert!(text.contains("count=1"));
    assert!(text.ends_with("[create, up]"));

    let text = reports[1].to_text();
    assert!(text.contains("locked=false"));
    assert!(text.ends_with("[destroy, down]"));
}

#[test]
fn test_locked_step_text_reports_lock_state() {
    let config = Config {
        require_unlocked_at_end: false,
        ..Config::default()
    };
    let (result, reports) = run("locked\nacquire a\nlocked\n", &config);
    result.unwrap();

    assert_eq!(
        reports[0].to_text(),
        format!("   1  locked{} count=0 locked=false []", " ".repeat(18))
    );
    assert_eq!(
        reports[2].to_text(),
        format!("   3  locked{} count=1 locked=true []", " ".repeat(18))
    );
    assert!(reports[1].to_text().contains("count=1 locked=true [create, up]"));
}

#[test]
fn test_step_report_ndjson() {
    let (result, reports) = run("acquire a\n", &Config {
        require_unlocked_at_end: false,
        ..Config::default()
    });
    result.unwrap();

    let line = reports[0].to_ndjson_line().unwrap();
    assert!(!line.contains('\n'));

    let value: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(value["line"], 1);
    assert_eq!(value["step"], "acquire a");
    assert_eq!(value["count"], 1);
    assert_eq!(value["locked"], true);
    assert_eq!(value["events"][0]["kind"], "create");
    assert_eq!(value["events"][1]["kind"], "up");
}

#[test]
fn test_cmd_run_with_config_file() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut script = NamedTempFile::new().unwrap();
    writeln!(script, "acquire a").unwrap();
    writeln!(script, "release a").unwrap();

    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "output: ndjson").unwrap();

    let args = RunArgs {
        script: script.path().to_path_buf(),
        config: Some(config.path().to_path_buf()),
        format: None,
    };
    cmd_run(args).unwrap();
}

#[test]
fn test_cmd_run_reports_script_failure() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut script = NamedTempFile::new().unwrap();
    writeln!(script, "release never").unwrap();

    let args = RunArgs {
        script: script.path().to_path_buf(),
        config: None,
        format: Some(OutputFormat::Text),
    };
    let err = cmd_run(args).unwrap_err();
    assert_eq!(err.exit_code(), crate::exit_codes::SCRIPT_FAILURE);
}
