//! Script step definitions.

/// A condition checked by an `expect` step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// The count equals this value.
    Count(usize),
    /// At least one lock is held.
    Locked,
    /// No lock is held.
    Unlocked,
}

impl std::fmt::Display for Expectation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expectation::Count(n) => write!(f, "{}", n),
            Expectation::Locked => write!(f, "locked"),
            Expectation::Unlocked => write!(f, "unlocked"),
        }
    }
}

/// One operation against the locker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Acquire a lock and bind its token to a name.
    Acquire(String),
    /// Release the token bound to a name.
    Release(String),
    /// Report the current count.
    Count,
    /// Report whether the door is locked.
    Locked,
    /// Fail the run unless the condition holds.
    Expect(Expectation),
}

/// Renders the step as script text; token names are shell-quoted when
/// needed so the output parses back to the same step.
impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::Acquire(name) => write!(f, "acquire {}", shell_words::quote(name)),
            Step::Release(name) => write!(f, "release {}", shell_words::quote(name)),
            Step::Count => write!(f, "count"),
            Step::Locked => write!(f, "locked"),
            Step::Expect(expectation) => write!(f, "expect {}", expectation),
        }
    }
}

/// A step together with the 1-based source line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub step: Step,
}

/// A parsed script, in execution order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    pub steps: Vec<ScriptLine>,
}
