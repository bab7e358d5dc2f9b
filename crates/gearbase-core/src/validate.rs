//! Field validation primitives shared by every entity.
//!
//! Validation is non-failing: validators push issues into a collector and
//! the caller decides how to interpret them. `Model::is_valid` treats an
//! empty collector as valid.

///
/// Issues
/// Collected validation messages for one entity.
///

#[derive(Debug, Default)]
pub struct Issues {
    messages: Vec<String>,
}

impl Issues {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    pub fn issue(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

///
/// Validator
/// Allows a field to validate values.
///

pub trait Validator<T: ?Sized> {
    fn validate(&self, value: &T, ctx: &mut Issues);

    /// Validate one named field, prefixing every issue with the field name.
    fn validate_field(&self, field: &'static str, value: &T, ctx: &mut Issues) {
        let mut inner = Issues::new();
        self.validate(value, &mut inner);

        for message in inner.into_messages() {
            ctx.issue(format!("{field}: {message}"));
        }
    }
}

///
/// TrimmedMin
/// Minimum length after trimming surrounding whitespace.
///

pub struct TrimmedMin {
    target: usize,
}

impl TrimmedMin {
    #[must_use]
    pub const fn new(target: usize) -> Self {
        Self { target }
    }
}

impl Validator<str> for TrimmedMin {
    fn validate(&self, s: &str, ctx: &mut Issues) {
        let len = s.trim().chars().count();

        if len < self.target {
            ctx.issue(format!(
                "length ({len}) is lower than minimum of {}",
                self.target
            ));
        }
    }
}

impl Validator<String> for TrimmedMin {
    fn validate(&self, s: &String, ctx: &mut Issues) {
        Validator::<str>::validate(self, s, ctx);
    }
}

///
/// TESTS
///
