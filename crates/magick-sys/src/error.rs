use std::fmt;

use tracing::{error, warn};

use crate::{
    ExceptionType, ExceptionType_ErrorException, ExceptionType_FatalErrorException,
    ExceptionType_UndefinedException, ExceptionType_WarningException, MagickString,
};

/// An exception read back from a wand's exception slot
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub struct Error {
    pub severity: ExceptionType,
    pub fatal: bool,
    message: String,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { fatal, message, .. } = self;

        if *fatal {
            f.write_str("(FATAL) ")?;
        }

        f.write_str(message)
    }
}

impl Error {
    /// Build an error from a severity and the (possibly null) description
    /// the library handed back.  The description buffer is released here.
    ///
    /// # Safety
    /// `description` must be null or a string allocated by MagickWand that
    /// nothing else will free.
    pub unsafe fn from_raw(severity: ExceptionType, description: *mut std::ffi::c_char) -> Self {
        let message = unsafe { MagickString::from_raw(description) }
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();

        Self::new(severity, message)
    }

    pub fn new(severity: ExceptionType, message: impl Into<String>) -> Self {
        let message = message.into();

        let fatal = match severity {
            ..ExceptionType_WarningException => false,
            ExceptionType_WarningException..ExceptionType_ErrorException => {
                warn!(severity, %message);
                false
            },
            ExceptionType_ErrorException..ExceptionType_FatalErrorException => {
                error!(severity, %message, fatal = false);
                false
            },
            ExceptionType_FatalErrorException.. => {
                error!(severity, %message, fatal = true);
                true
            },
        };

        Self {
            severity,
            fatal,
            message,
        }
    }

    /// Fill in a placeholder message when the library reported failure but
    /// left its exception slot empty
    #[must_use]
    pub fn or_failed(self, native: &str) -> Self {
        if self.message.is_empty() {
            Self {
                message: format!("{native} failed"),
                ..self
            }
        } else {
            self
        }
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> &str { &self.message }

    #[inline]
    #[must_use]
    pub fn is_undefined(&self) -> bool { self.severity == ExceptionType_UndefinedException }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display_marks_fatal() {
        let err = Error::new(ExceptionType_FatalErrorException, "no memory");
        assert!(err.fatal);
        assert_eq!(err.to_string(), "(FATAL) no memory");

        let err = Error::new(ExceptionType_ErrorException, "bad file");
        assert!(!err.fatal);
        assert_eq!(err.to_string(), "bad file");
    }

    #[test]
    fn test_or_failed() {
        let err = Error::new(ExceptionType_UndefinedException, "").or_failed("MagickReadImage");
        assert!(err.is_undefined());
        assert_eq!(err.message(), "MagickReadImage failed");

        let err = Error::new(ExceptionType_ErrorException, "nope").or_failed("MagickReadImage");
        assert_eq!(err.message(), "nope");
    }
}
