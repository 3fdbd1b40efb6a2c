//! Student record validation
//!
//! A StudentRecord only exists once all three fields have passed
//! validation; no partially-validated record ever reaches the database.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

/// Maximum length for student names (matches the VARCHAR(50) column)
const MAX_NAME_LEN: usize = 50;

/// Accepted age range, inclusive
const MIN_AGE: i32 = 16;
const MAX_AGE: i32 = 100;

/// Email syntax per the WHATWG HTML living standard, with a dotted
/// domain required so bare hostnames ("user@localhost") are rejected.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("invalid email regex")
});

/// Validated, normalized enrolment record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    name: String,
    email: String,
    age: i32,
}

impl StudentRecord {
    /// Validate and normalize a raw submission.
    ///
    /// # Rules
    /// - `name`: trimmed, 1-50 characters
    /// - `email`: trimmed, standard email syntax
    /// - `age`: strictly an integer after trimming, 16-100 inclusive
    ///
    /// All three fields must pass; the first failure wins. Parameter
    /// binding at the insert is the sole injection defense, so the
    /// normalized strings are stored as-is without escaping.
    ///
    /// # Example
    /// ```
    /// use enrollctl_server::models::StudentRecord;
    ///
    /// let record = StudentRecord::new(" Ada Lovelace ", "ada@example.com", "30").unwrap();
    /// assert_eq!(record.name(), "Ada Lovelace");
    /// assert_eq!(record.age(), 30);
    ///
    /// assert!(StudentRecord::new("Ada", "not-an-email", "30").is_err());
    /// ```
    pub fn new(name: &str, email: &str, age: &str) -> Result<Self, ValidationError> {
        let name = validate_name(name)?;
        let email = validate_email(email)?;
        let age = parse_age(age)?;

        Ok(Self { name, email, age })
    }

    /// Trimmed name, 1-50 characters.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trimmed, syntax-checked email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Age in years, within [16, 100].
    pub fn age(&self) -> i32 {
        self.age
    }
}

fn validate_name(raw: &str) -> Result<String, ValidationError> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(ValidationError::Empty { field: "name" });
    }

    // Character count, not byte length: the column is VARCHAR(50) and
    // Postgres counts characters, so multi-byte names get the full 50.
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_NAME_LEN,
        });
    }

    Ok(name.to_owned())
}

fn validate_email(raw: &str) -> Result<String, ValidationError> {
    let email = raw.trim();

    if email.is_empty() {
        return Err(ValidationError::Empty { field: "email" });
    }

    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidFormat {
            field: "email",
            reason: "must be a valid email address",
        });
    }

    Ok(email.to_owned())
}

fn parse_age(raw: &str) -> Result<i32, ValidationError> {
    // Strict integer parse: "30.5", "30abc", and empty input all fail.
    let age: i32 = raw.trim().parse().map_err(|_| ValidationError::InvalidFormat {
        field: "age",
        reason: "must be a whole number",
    })?;

    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(ValidationError::OutOfRange {
            field: "age",
            min: MIN_AGE,
            max: MAX_AGE,
        });
    }

    Ok(age)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_record() {
        let record = StudentRecord::new("Ada Lovelace", "ada@example.com", "30").unwrap();
        assert_eq!(record.name(), "Ada Lovelace");
        assert_eq!(record.email(), "ada@example.com");
        assert_eq!(record.age(), 30);
    }

    #[test]
    fn trims_name_and_email() {
        let record = StudentRecord::new("  Ada Lovelace  ", " ada@example.com ", " 30 ").unwrap();
        assert_eq!(record.name(), "Ada Lovelace");
        assert_eq!(record.email(), "ada@example.com");
    }

    #[test]
    fn rejects_empty_name() {
        let err = StudentRecord::new("", "ada@example.com", "30").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "name" }));

        // Whitespace-only trims to empty
        let err = StudentRecord::new("   ", "ada@example.com", "30").unwrap_err();
        assert!(matches!(err, ValidationError::Empty { field: "name" }));
    }

    #[test]
    fn name_length_boundaries() {
        let name_50 = "a".repeat(50);
        assert!(StudentRecord::new(&name_50, "ada@example.com", "30").is_ok());

        let name_51 = "a".repeat(51);
        let err = StudentRecord::new(&name_51, "ada@example.com", "30").unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 50, .. }));
    }

    #[test]
    fn name_length_counts_characters_not_bytes() {
        // 50 two-byte characters: 100 bytes but within the column limit
        let name = "é".repeat(50);
        assert!(StudentRecord::new(&name, "ada@example.com", "30").is_ok());
    }

    #[test]
    fn valid_emails() {
        for email in [
            "ada@example.com",
            "ada.lovelace@example.com",
            "ada+math@example.co.uk",
            "a_b-c@sub.example.org",
        ] {
            assert!(StudentRecord::new("Ada", email, "30").is_ok(), "{email}");
        }
    }

    #[test]
    fn invalid_emails() {
        for email in [
            "",
            "not-an-email",
            "ada@",
            "@example.com",
            "ada@localhost",
            "ada @example.com",
            "ada@exa mple.com",
            "ada@@example.com",
        ] {
            let result = StudentRecord::new("Ada", email, "30");
            assert!(result.is_err(), "{email:?} should be rejected");
        }
    }

    #[test]
    fn age_boundaries() {
        assert!(StudentRecord::new("Ada", "ada@example.com", "16").is_ok());
        assert!(StudentRecord::new("Ada", "ada@example.com", "100").is_ok());

        let err = StudentRecord::new("Ada", "ada@example.com", "15").unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { min: 16, max: 100, .. }));

        let err = StudentRecord::new("Ada", "ada@example.com", "101").unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }

    #[test]
    fn age_must_be_an_integer() {
        for age in ["", "abc", "30.5", "30abc", "3e1", "0x1e"] {
            let err = StudentRecord::new("Ada", "ada@example.com", age).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidFormat { field: "age", .. }),
                "{age:?} should be rejected"
            );
        }
    }

    #[test]
    fn validation_is_idempotent() {
        let first = StudentRecord::new(" Ada ", "ada@example.com", "30").unwrap();
        let second = StudentRecord::new(" Ada ", "ada@example.com", "30").unwrap();
        assert_eq!(first, second);
    }
}
