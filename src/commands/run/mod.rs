//! Implementation of the `locker run` command.
//!
//! Executes a lock script against a fresh [`Locker`] and reports, for every
//! step, the resulting count and the events the step emitted.

mod report;

#[cfg(test)]
mod tests;

pub use report::{RunSummary, StepReport};

use crate::cli::RunArgs;
use crate::config::{Config, OutputFormat};
use crate::error::{LockerError, Result};
use crate::events::Recorder;
use crate::locks::{Locker, ReleaseToken};
use crate::script::{Expectation, Script, ScriptLine, Step};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Execute the `locker run` command.
pub fn cmd_run(args: RunArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(format) = args.format {
        config.output = format;
    }

    let script = Script::load(&args.script)?;
    info!(
        script = %args.script.display(),
        steps = script.steps.len(),
        output = %config.output,
        "running lock script"
    );

    let output = config.output;
    let summary = run_script(&script, &config, |report| {
        match output {
            OutputFormat::Text => println!("{}", report.to_text()),
            OutputFormat::Ndjson => println!("{}", report.to_ndjson_line()?),
        }
        Ok(())
    })?;

    debug!(
        steps = summary.steps,
        final_count = summary.final_count,
        "lock script finished"
    );
    Ok(())
}

/// Run `script` against a fresh locker, passing each step's report to
/// `on_step` as soon as the step completes.
///
/// Reports for steps that completed before a failure have already been
/// delivered when the error is returned.
pub fn run_script<F>(script: &Script, config: &Config, mut on_step: F) -> Result<RunSummary>
where
    F: FnMut(&StepReport) -> Result<()>,
{
    let locker = Locker::new();
    let recorder = Recorder::attach(&locker);
    let mut tokens: BTreeMap<String, ReleaseToken<'_>> = BTreeMap::new();

    for ScriptLine { line, step } in &script.steps {
        let line = *line;
        execute_step(&locker, &mut tokens, config, line, step)?;

        let report = StepReport {
            line,
            step: step.to_string(),
            count: locker.count(),
            locked: locker.is_locked(),
            events: recorder.take(),
        };
        on_step(&report)?;
    }

    if config.require_unlocked_at_end && locker.is_locked() {
        let held: Vec<&str> = tokens
            .iter()
            .filter(|(_, token)| !token.is_consumed())
            .map(|(name, _)| name.as_str())
            .collect();
        return Err(LockerError::LockError(format!(
            "{} lock(s) still held at end of script: {}\n\n\
             Fix: release every acquired token, or set require_unlocked_at_end: false.",
            locker.count(),
            held.join(", ")
        )));
    }

    Ok(RunSummary {
        steps: script.steps.len(),
        final_count: locker.count(),
    })
}

fn execute_step<'a>(
    locker: &'a Locker,
    tokens: &mut BTreeMap<String, ReleaseToken<'a>>,
    config: &Config,
    line: usize,
    step: &Step,
) -> Result<()> {
    match step {
        Step::Acquire(name) => {
            if tokens.get(name).is_some_and(|t| !t.is_consumed()) {
                return Err(LockerError::script(
                    line,
                    format!(
                        "token '{}' is still held; release it before acquiring under the same name",
                        name
                    ),
                ));
            }

            let outstanding = tokens.values().filter(|t| !t.is_consumed()).count();
            if outstanding >= config.max_outstanding as usize {
                return Err(LockerError::script(
                    line,
                    format!(
                        "cannot acquire '{}': {} tokens already outstanding (max_outstanding = {})",
                        name, outstanding, config.max_outstanding
                    ),
                ));
            }

            tokens.insert(name.clone(), locker.acquire());
        }
        Step::Release(name) => {
            let token = tokens.get(name).ok_or_else(|| {
                LockerError::script(line, format!("token '{}' was never acquired", name))
            })?;
            token.release();
        }
        Step::Count | Step::Locked => {}
        Step::Expect(expectation) => check_expectation(locker, line, *expectation)?,
    }

    Ok(())
}

fn check_expectation(locker: &Locker, line: usize, expectation: Expectation) -> Result<()> {
    let holds = match expectation {
        Expectation::Count(n) => locker.count() == n,
        Expectation::Locked => locker.is_locked(),
        Expectation::Unlocked => !locker.is_locked(),
    };

    if holds {
        Ok(())
    } else {
        Err(LockerError::script(
            line,
            format!(
                "expected {} but count is {}",
                expectation,
                locker.count()
            ),
        ))
    }
}
