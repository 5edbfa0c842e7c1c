//! Tab completion over builtin names.

use crate::builtin::Builtin;

/// Result of completing a partial command name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Nothing starts with the input.
    NoMatch,
    /// Exactly one builtin matches; holds the replacement input line
    /// (name plus a trailing space).
    Unique(String),
    /// Several builtins match, in registry order.
    Ambiguous(Vec<&'static str>),
}

/// Complete `partial` against the builtin names.
pub fn complete(partial: &str) -> Completion {
    let matches: Vec<&'static str> = Builtin::ALL
        .iter()
        .map(|b| b.name())
        .filter(|name| name.starts_with(partial))
        .collect();
    match matches.as_slice() {
        [] => Completion::NoMatch,
        [only] => Completion::Unique(format!("{only} ")),
        _ => Completion::Ambiguous(matches),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_match_gets_trailing_space() {
        assert_eq!(complete("hi"), Completion::Unique("history ".into()));
        assert_eq!(complete("wc"), Completion::Unique("wc ".into()));
    }

    #[test]
    fn ambiguous_lists_in_registry_order() {
        assert_eq!(
            complete("c"),
            Completion::Ambiguous(vec!["clear", "cd", "cat", "cp", "consciousness"])
        );
    }

    #[test]
    fn no_match() {
        assert_eq!(complete("xyz"), Completion::NoMatch);
    }

    #[test]
    fn empty_partial_lists_everything() {
        match complete("") {
            Completion::Ambiguous(all) => assert_eq!(all.len(), Builtin::ALL.len()),
            other => panic!("expected ambiguous, got {other:?}"),
        }
    }
}
