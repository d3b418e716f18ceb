//! Matcher combinators.
//!
//! - [`OneOf`]: at least one candidate must match (membership)
//! - [`All`]: every matcher must match, all failures are reported

use std::fmt::{self, Display};
use std::sync::Arc;

use crate::desire_value;
use crate::validation::ValidationContext;
use crate::value::{write_list, Value};

use super::traits::{IntoMatcher, Matcher};

/// Accepts a value that fully matches at least one candidate.
///
/// Each candidate is tried in isolation, and its rejections are discarded.
/// Candidates may themselves be matchers.
///
/// # Example
///
/// ```rust
/// use desire::{desire, Match};
///
/// let rejections = desire(&0, Match::one_of([1, 2, 3]));
///
/// assert_eq!(rejections[0].reason, "expected one of [1 2 3] but got 0");
/// ```
#[derive(Clone, Default)]
pub struct OneOf {
    candidates: Vec<Arc<dyn Matcher>>,
}

impl OneOf {
    pub fn new<I>(candidates: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoMatcher,
    {
        Self {
            candidates: candidates
                .into_iter()
                .map(IntoMatcher::into_matcher)
                .collect(),
        }
    }

    /// Adds another candidate.
    pub fn or(mut self, candidate: impl IntoMatcher) -> Self {
        self.candidates.push(candidate.into_matcher());
        self
    }
}

impl Matcher for OneOf {
    fn validate(&self, ctx: &ValidationContext<'_>, actual: &Value) {
        for candidate in &self.candidates {
            let trial = desire_value(actual, candidate.as_ref());
            if trial.is_empty() {
                return;
            }
            tracing::trace!(
                %candidate,
                rejections = trial.len(),
                "one_of candidate did not match"
            );
        }
        ctx.reject(format!(
            "expected one of {} but got {}",
            Candidates(&self.candidates),
            actual
        ));
    }
}

impl Display for OneOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "one_of{}", Candidates(&self.candidates))
    }
}

struct Candidates<'a>(&'a [Arc<dyn Matcher>]);

impl Display for Candidates<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, self.0)
    }
}

/// Requires every matcher to accept the value.
///
/// All matchers run at the same context; there is no short-circuit, so every
/// failing matcher contributes its rejections.
#[derive(Clone, Default)]
pub struct All {
    matchers: Vec<Arc<dyn Matcher>>,
}

impl All {
    pub fn new<I>(matchers: I) -> Self
    where
        I: IntoIterator,
        I::Item: IntoMatcher,
    {
        Self {
            matchers: matchers
                .into_iter()
                .map(IntoMatcher::into_matcher)
                .collect(),
        }
    }

    /// Adds another required matcher.
    pub fn and(mut self, matcher: impl IntoMatcher) -> Self {
        self.matchers.push(matcher.into_matcher());
        self
    }
}

impl Matcher for All {
    fn validate(&self, ctx: &ValidationContext<'_>, actual: &Value) {
        for matcher in &self.matchers {
            super::validate(ctx, actual, matcher.as_ref());
        }
    }
}

impl Display for All {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "all")?;
        write_list(f, &self.matchers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::NotZero;

    fn reasons(actual: &Value, matcher: &dyn Matcher) -> Vec<String> {
        desire_value(actual, matcher)
            .into_iter()
            .map(|r| r.reason)
            .collect()
    }

    #[test]
    fn test_one_of_accepts_any_candidate() {
        let one_of = OneOf::new([1, 2, 3]);
        for i in 1..=3 {
            assert!(reasons(&Value::Int(i), &one_of).is_empty());
        }
    }

    #[test]
    fn test_one_of_with_matcher_candidates() {
        let one_of = OneOf::new([0]).or(NotZero);
        assert!(reasons(&Value::Int(0), &one_of).is_empty());
        assert!(reasons(&Value::Int(5), &one_of).is_empty());
    }

    #[test]
    fn test_one_of_with_no_candidates_rejects() {
        assert_eq!(
            reasons(&Value::Int(1), &OneOf::default()),
            vec!["expected one of [] but got 1"]
        );
    }

    #[test]
    fn test_all_reports_every_failure() {
        let all = All::new([NotZero]).and(OneOf::new([1, 2, 3]));
        assert_eq!(
            reasons(&Value::Int(0), &all),
            vec![
                "expected non-zero value but got 0",
                "expected one of [1 2 3] but got 0",
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(OneOf::new(["a", "b"]).to_string(), "one_of[a b]");
        assert_eq!(All::new([NotZero]).to_string(), "all[not_zero]");
    }
}
