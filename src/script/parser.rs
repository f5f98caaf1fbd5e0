//! Line-oriented script parsing.

use super::types::{Expectation, Script, ScriptLine, Step};
use crate::error::{LockerError, Result};
use std::io::Read;
use std::path::Path;

impl Script {
    /// Load a script from a file, or from stdin when `path` is `-`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = if path == Path::new("-") {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).map_err(|e| {
                LockerError::UserError(format!("failed to read script from stdin: {}", e))
            })?;
            buf
        } else {
            std::fs::read_to_string(path).map_err(|e| {
                LockerError::UserError(format!(
                    "failed to read script file '{}': {}",
                    path.display(),
                    e
                ))
            })?
        };

        Self::parse(&content)
    }

    /// Parse script text. Blank lines and lines starting with `#` are skipped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut steps = Vec::new();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let words = shell_words::split(trimmed).map_err(|e| {
                LockerError::script(
                    line,
                    format!(
                        "failed to parse '{}': {}\n\n\
                         Fix: check for unmatched quotes or invalid escape sequences.",
                        trimmed, e
                    ),
                )
            })?;

            let step = parse_step(line, &words)?;
            steps.push(ScriptLine { line, step });
        }

        Ok(Script { steps })
    }
}

fn parse_step(line: usize, words: &[String]) -> Result<Step> {
    let words: Vec<&str> = words.iter().map(String::as_str).collect();

    match words.as_slice() {
        ["acquire", name] => Ok(Step::Acquire(name.to_string())),
        ["release", name] => Ok(Step::Release(name.to_string())),
        ["count"] => Ok(Step::Count),
        ["locked"] => Ok(Step::Locked),
        ["expect", "locked"] => Ok(Step::Expect(Expectation::Locked)),
        ["expect", "unlocked"] => Ok(Step::Expect(Expectation::Unlocked)),
        ["expect", value] => value
            .parse::<usize>()
            .map(|n| Step::Expect(Expectation::Count(n)))
            .map_err(|_| {
                LockerError::script(
                    line,
                    format!(
                        "invalid expectation '{}' (expected a count, 'locked' or 'unlocked')",
                        value
                    ),
                )
            }),
        [op @ ("acquire" | "release"), ..] => Err(LockerError::script(
            line,
            format!("'{}' takes exactly one token name", op),
        )),
        [op @ ("count" | "locked"), ..] => Err(LockerError::script(
            line,
            format!("'{}' takes no arguments", op),
        )),
        ["expect", ..] => Err(LockerError::script(
            line,
            "'expect' takes exactly one argument",
        )),
        [op, ..] => Err(LockerError::script(
            line,
            format!(
                "unknown step '{}' (expected acquire, release, count, locked or expect)",
                op
            ),
        )),
        [] => Err(LockerError::script(line, "empty step")),
    }
}
