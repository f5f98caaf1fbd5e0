//! Implementation of the `locker kinds` command.

use crate::error::Result;
use crate::events::EventKind;

/// One-line description of when a kind fires.
pub fn describe(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Create => "first acquire: count went from 0 to 1",
        EventKind::Up => "every acquire",
        EventKind::Destroy => "last release: count went from 1 to 0",
        EventKind::Down => "every first-time release of a token",
    }
}

/// Execute the `locker kinds` command.
pub fn cmd_kinds() -> Result<()> {
    for kind in EventKind::ALL {
        println!("{:8} {}", kind, describe(kind));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_description() {
        for kind in EventKind::ALL {
            assert!(!describe(kind).is_empty());
        }
    }

    #[test]
    fn cmd_kinds_succeeds() {
        cmd_kinds().unwrap();
    }
}
