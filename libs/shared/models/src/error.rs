use std::collections::BTreeMap;
use std::fmt;

/// Field-level validation errors: a mapping from field name to the first
/// error message recorded for that field. An empty set means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field. Only the first message per field is
    /// kept, so rule order decides which error a field reports.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// How a validator reacts to the first failure.
///
/// Registration stops at the first broken rule and reports a single
/// message; appointment validation checks every field and reports them
/// all. Both behaviors are deliberate and preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    FailFast,
    Exhaustive,
}

/// Collects field errors under a [`ValidationMode`] policy.
#[derive(Debug)]
pub struct Validator {
    mode: ValidationMode,
    errors: FieldErrors,
}

impl Validator {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            mode,
            errors: FieldErrors::new(),
        }
    }

    fn halted(&self) -> bool {
        self.mode == ValidationMode::FailFast && !self.errors.is_empty()
    }

    pub fn fail(&mut self, field: &'static str, message: impl Into<String>) {
        if !self.halted() {
            self.errors.push(field, message);
        }
    }

    /// Record `message` for `field` unless `ok` holds.
    pub fn require(&mut self, field: &'static str, ok: bool, message: &str) {
        if !ok {
            self.fail(field, message);
        }
    }

    pub fn finish(self) -> Result<(), FieldErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
