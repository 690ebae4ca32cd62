//! Fluent checks on string content.
//!
//! This module provides the builder type for checking strings:
//! - `check_that_str()` - Entry point wrapping a string under test
//! - `StringCheck` - Chainable substring, affix and pattern checks
//!
//! Patterns come in two flavors: `matches` takes a regex, `matches_glob`
//! a glob pattern. An invalid pattern is reported as a check failure, not
//! a different kind of panic.

use super::builder::{enforce, CheckResult};
use glob::Pattern;
use regex::Regex;

/// Create a check on a string.
///
/// # Example
///
/// ```rust
/// use attest::check_that_str;
///
/// check_that_str("Success: 42 items")
///     .contains("Success")
///     .and()
///     .matches(r"\d+ items");
/// ```
pub fn check_that_str(value: &str) -> StringCheck<'_> {
    StringCheck {
        value,
        negated: false,
    }
}

/// Chainable checks on a string.
///
/// Each check evaluates immediately, panics on failure and returns `self`.
#[derive(Debug, Clone)]
pub struct StringCheck<'a> {
    value: &'a str,
    negated: bool,
}

impl<'a> StringCheck<'a> {
    /// Invert the pass/fail interpretation of the next check.
    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// Readability link between chained checks. Does nothing.
    pub fn and(self) -> Self {
        self
    }

    /// Run a custom predicate through the standard negation and failure
    /// pipeline.
    ///
    /// This is the extension point for authoring new string checks.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::check_that_str;
    ///
    /// check_that_str("hello").satisfies("string to be lowercase", |s| {
    ///     !s.chars().any(|c| c.is_uppercase())
    /// });
    /// ```
    pub fn satisfies(mut self, description: &str, predicate: impl FnOnce(&str) -> bool) -> Self {
        let result = if predicate(self.value) {
            CheckResult::pass(description)
        } else {
            CheckResult::fail(description, "the predicate returned false")
        };
        self.verify(result);
        self
    }

    /// Check the string is empty.
    pub fn is_empty(mut self) -> Self {
        let result = self.evaluate_empty();
        self.verify(result);
        self
    }

    /// Check the string length in bytes.
    pub fn has_length(mut self, length: usize) -> Self {
        let result = self.evaluate_length(length);
        self.verify(result);
        self
    }

    /// Check the string contains the given substring.
    pub fn contains(mut self, part: &str) -> Self {
        let result = self.evaluate_contains(part);
        self.verify(result);
        self
    }

    /// Check the string starts with the given prefix.
    pub fn starts_with(mut self, prefix: &str) -> Self {
        let result = self.evaluate_starts_with(prefix);
        self.verify(result);
        self
    }

    /// Check the string ends with the given suffix.
    pub fn ends_with(mut self, suffix: &str) -> Self {
        let result = self.evaluate_ends_with(suffix);
        self.verify(result);
        self
    }

    /// Check the string matches the given regex.
    pub fn matches(mut self, pattern: &str) -> Self {
        let result = self.evaluate_matches(pattern);
        self.verify(result);
        self
    }

    /// Check the string matches the given glob pattern.
    pub fn matches_glob(mut self, pattern: &str) -> Self {
        let result = self.evaluate_matches_glob(pattern);
        self.verify(result);
        self
    }

    // =========================================================================
    // Non-panicking evaluation
    // =========================================================================

    /// Evaluate the emptiness check without panicking.
    pub fn evaluate_empty(&self) -> CheckResult {
        let description = "string to be empty";
        if self.value.is_empty() {
            CheckResult::pass(description)
        } else {
            CheckResult::fail(
                description,
                format!("the checked string holds {} bytes", self.value.len()),
            )
        }
    }

    /// Evaluate the length check without panicking.
    pub fn evaluate_length(&self, length: usize) -> CheckResult {
        let description = format!("string of length {}", length);
        if self.value.len() == length {
            CheckResult::pass(description)
        } else {
            CheckResult::fail(
                description,
                format!("the checked string holds {} bytes", self.value.len()),
            )
        }
    }

    /// Evaluate the substring check without panicking.
    pub fn evaluate_contains(&self, part: &str) -> CheckResult {
        let description = format!("string containing {:?}", part);
        if self.value.contains(part) {
            CheckResult::pass(description)
        } else {
            CheckResult::fail(description, "the substring was not found")
        }
    }

    /// Evaluate the prefix check without panicking.
    pub fn evaluate_starts_with(&self, prefix: &str) -> CheckResult {
        let description = format!("string starting with {:?}", prefix);
        if self.value.starts_with(prefix) {
            CheckResult::pass(description)
        } else {
            CheckResult::fail(description, "the prefix was not found")
        }
    }

    /// Evaluate the suffix check without panicking.
    pub fn evaluate_ends_with(&self, suffix: &str) -> CheckResult {
        let description = format!("string ending with {:?}", suffix);
        if self.value.ends_with(suffix) {
            CheckResult::pass(description)
        } else {
            CheckResult::fail(description, "the suffix was not found")
        }
    }

    /// Evaluate a regex match without panicking.
    pub fn evaluate_matches(&self, pattern: &str) -> CheckResult {
        let description = format!("string matching {:?}", pattern);
        match Regex::new(pattern) {
            Ok(re) if re.is_match(self.value) => CheckResult::pass(description),
            Ok(_) => CheckResult::fail(description, "the pattern did not match"),
            Err(e) => CheckResult::fail(description, format!("invalid regex '{}': {}", pattern, e)),
        }
    }

    /// Evaluate a glob match without panicking.
    pub fn evaluate_matches_glob(&self, pattern: &str) -> CheckResult {
        let description = format!("string matching glob {:?}", pattern);
        match Pattern::new(pattern) {
            Ok(glob) if glob.matches(self.value) => CheckResult::pass(description),
            Ok(_) => CheckResult::fail(description, "the pattern did not match"),
            Err(e) => CheckResult::fail(description, format!("invalid glob '{}': {}", pattern, e)),
        }
    }

    fn verify(&mut self, result: CheckResult) {
        let preview = preview(self.value);
        enforce(&mut self.negated, result, || {
            format!("  checked: {}\n", preview)
        });
    }
}

/// Quote a string for context lines, truncating long content.
fn preview(value: &str) -> String {
    if value.len() > 100 {
        let cut = value
            .char_indices()
            .take_while(|(i, _)| *i <= 97)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("\"{}...\"", &value[..cut])
    } else {
        format!("{:?}", value)
    }
}
