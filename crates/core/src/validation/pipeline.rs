//! Composable, short-circuiting validation chains.

use super::rules::ValidationError;

type Check<T> = Box<dyn Fn(&T) -> Result<(), ValidationError> + Send + Sync>;

/// An ordered list of checks run against one input value.
///
/// [`Pipeline::run`] stops at the first failing check, so the order in
/// which checks are added decides which error a caller sees.
pub struct Pipeline<T> {
    checks: Vec<Check<T>>,
}

impl<T> Default for Pipeline<T> {
    fn default() -> Self {
        Self { checks: Vec::new() }
    }
}

impl<T: 'static> Pipeline<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an arbitrary check.
    pub fn check<F>(mut self, check: F) -> Self
    where
        F: Fn(&T) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Require a string field to be non-empty.
    pub fn require_non_empty(self, field: &'static str, get: fn(&T) -> &str) -> Self {
        self.check(move |input| {
            if get(input).is_empty() {
                Err(ValidationError::MissingField(field))
            } else {
                Ok(())
            }
        })
    }

    /// Allow an optional string field to be absent, but not present and empty.
    pub fn reject_empty(self, field: &'static str, get: fn(&T) -> Option<&str>) -> Self {
        self.check(move |input| match get(input) {
            Some("") => Err(ValidationError::EmptyField(field)),
            _ => Ok(()),
        })
    }

    /// Run every check in order, returning the first failure.
    pub fn run(&self, input: &T) -> Result<(), ValidationError> {
        self.checks.iter().try_for_each(|check| check(input))
    }
}
