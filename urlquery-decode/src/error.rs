use core::num::{ParseFloatError, ParseIntError};

use urlquery_core::{DecodeValuesError, Kind};

use crate::ParseBoolError;

/// An error that occurred while decoding query values into a record
#[derive(Debug)]
pub struct DecodeError {
    /// What went wrong
    pub kind: DecodeErrorKind,

    /// Declared name of the field being decoded, if the error is tied to one
    pub field: Option<&'static str>,
}

impl DecodeError {
    /// Creates an error that isn't tied to a field
    pub fn new(kind: DecodeErrorKind) -> Self {
        Self { kind, field: None }
    }

    /// Records which field was being decoded
    pub fn with_field(mut self, field: &'static str) -> Self {
        self.field = Some(field);
        self
    }

    pub(crate) fn incompatible(value: &str, kind: Kind) -> Self {
        Self::new(DecodeErrorKind::Incompatible {
            value: value.to_string(),
            kind,
        })
    }
}

impl From<DecodeErrorKind> for DecodeError {
    fn from(kind: DecodeErrorKind) -> Self {
        Self::new(kind)
    }
}

/// The different ways decoding can fail
#[derive(Debug)]
#[non_exhaustive]
pub enum DecodeErrorKind {
    /// The decode target is not a record
    TypeMismatch {
        /// What the target turned out to be
        got: Kind,
    },

    /// A value was converted into a pointer that points to nothing
    NilTarget,

    /// A number parsed fine but does not fit the field's type
    Incompatible {
        /// The query value, as received
        value: String,
        /// Kind of the field
        kind: Kind,
    },

    /// There is no way to convert a string into this kind of field
    Unsupported {
        /// Kind of the field
        kind: Kind,
    },

    /// An integer field got something that isn't a base-10 integer
    ParseInt(ParseIntError),

    /// A float field got something that isn't a float
    ParseFloat(ParseFloatError),

    /// A bool field got something that isn't a boolean literal
    ParseBool(ParseBoolError),

    /// A self-decoding field rejected its value
    Custom(DecodeValuesError),
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match &self.kind {
            DecodeErrorKind::TypeMismatch { got } => {
                write!(f, "decode expects a record, got {got}")
            }
            DecodeErrorKind::NilTarget => write!(f, "attempt to decode into a null pointer"),
            DecodeErrorKind::Incompatible { value, kind } => write!(
                f,
                "query value {value:?} incompatible with field value type {kind}"
            ),
            DecodeErrorKind::Unsupported { kind } => {
                write!(f, "Unsupported field value type {kind}")
            }
            DecodeErrorKind::ParseInt(e) => write!(f, "{e}"),
            DecodeErrorKind::ParseFloat(e) => write!(f, "{e}"),
            DecodeErrorKind::ParseBool(e) => write!(f, "{e}"),
            DecodeErrorKind::Custom(e) => write!(f, "{e}"),
        }
    }
}

impl core::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match &self.kind {
            DecodeErrorKind::ParseInt(e) => Some(e),
            DecodeErrorKind::ParseFloat(e) => Some(e),
            DecodeErrorKind::ParseBool(e) => Some(e),
            DecodeErrorKind::Custom(e) => Some(&**e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::error::Error;

    #[test]
    fn field_does_not_change_the_message() {
        let plain = DecodeError::incompatible("128", Kind::I8);
        let tagged = DecodeError::incompatible("128", Kind::I8).with_field("b");
        assert_eq!(plain.to_string(), tagged.to_string());
        assert_eq!(tagged.field, Some("b"));
        assert_eq!(
            plain.to_string(),
            r#"query value "128" incompatible with field value type i8"#
        );
    }

    #[test]
    fn parse_errors_are_forwarded() {
        let inner = "x".parse::<i64>().unwrap_err();
        let err = DecodeError::from(DecodeErrorKind::ParseInt(inner.clone()));
        assert_eq!(err.to_string(), inner.to_string());
        assert!(err.source().is_some());

        let err = DecodeError::new(DecodeErrorKind::Unsupported { kind: Kind::Tuple });
        assert!(err.to_string().contains("Unsupported"));
        assert!(err.source().is_none());
    }
}
