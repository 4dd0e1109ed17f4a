use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    OutOfRange {
        field: &'static str,
        min: i32,
        max: i32,
        actual: i32,
    },
    TooManyRecipients {
        max: usize,
        actual: usize,
    },
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    InvalidJson {
        field: &'static str,
        reason: String,
    },
    InvalidPhoneNumber {
        input: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} is too long: {actual} characters (max {max})")
            }
            Self::OutOfRange {
                field,
                min,
                max,
                actual,
            } => write!(
                f,
                "{field} out of range: {actual} (expected {min}..={max})"
            ),
            Self::TooManyRecipients { max, actual } => {
                write!(f, "too many recipients: {actual} (max {max})")
            }
            Self::LengthMismatch {
                field,
                expected,
                actual,
            } => write!(
                f,
                "{field} has {actual} entries but {expected} phone numbers were given"
            ),
            Self::InvalidJson { field, reason } => write!(f, "{field} is not valid JSON: {reason}"),
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "SignName" };
        assert_eq!(err.to_string(), "SignName must not be empty");

        let err = ValidationError::TooLong {
            field: "SignName",
            max: 12,
            actual: 13,
        };
        assert_eq!(
            err.to_string(),
            "SignName is too long: 13 characters (max 12)"
        );

        let err = ValidationError::OutOfRange {
            field: "SignSource",
            min: 0,
            max: 5,
            actual: 6,
        };
        assert_eq!(
            err.to_string(),
            "SignSource out of range: 6 (expected 0..=5)"
        );

        let err = ValidationError::LengthMismatch {
            field: "SignNameJson",
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "SignNameJson has 2 entries but 3 phone numbers were given"
        );

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(err.to_string(), "invalid phone number: bad");
    }
}
