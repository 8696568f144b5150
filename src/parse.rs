//! Parse-result combinator for command tokens.
//!
//! Command arguments are validated and converted through a chain of
//! [`Parse`] values. Expected problems (missing token, unknown name) travel
//! through the chain as [`Parse::Failed`] data; an actual error is only
//! materialized at the terminal [`Parse::to_action`] call, so the chain
//! itself never returns early and never panics.

use thiserror::Error;

use crate::action::Action;

/// Fallback message for a failure nothing bothered to describe.
pub const GENERIC_PARSE_ERROR: &str = "I don't understand that.";

/// A user-facing command problem, reported once per command by the REPL.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct CommandError(pub String);

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// One stage of interpreting command tokens.
///
/// `Succeeded` carries the current value plus the previous stage's value as
/// context. `Failed` carries the context at the point of first failure
/// (until a `maybe` changes the context type and drops it) and an error
/// message attached lazily via [`Parse::or`].
#[derive(Debug)]
pub enum Parse<T, C> {
    Succeeded { value: T, context: C },
    Failed { context: Option<C>, message: Option<String> },
}

impl<T, C> Parse<T, C> {
    pub fn succeed(value: T, context: C) -> Self {
        Parse::Succeeded { value, context }
    }

    pub fn fail(context: C) -> Self {
        Parse::Failed {
            context: Some(context),
            message: None,
        }
    }

    /// Succeed if the current value converts to a new value.
    ///
    /// On a failed parse the conversion is never invoked and the message
    /// (if any) survives unchanged. The old context no longer fits the new
    /// type, so a message wanting the failing context must be attached by
    /// [`Parse::or_with`] before the next `maybe`.
    pub fn maybe<X>(self, convert: impl FnOnce(&T) -> Option<X>) -> Parse<X, T> {
        match self {
            Parse::Succeeded { value, .. } => match convert(&value) {
                Some(next) => Parse::Succeeded {
                    value: next,
                    context: value,
                },
                None => Parse::Failed {
                    context: Some(value),
                    message: None,
                },
            },
            Parse::Failed { message, .. } => Parse::Failed {
                context: None,
                message,
            },
        }
    }

    /// Expect a specific value and fail otherwise.
    pub fn expect(self, expected: &T) -> Parse<T, T>
    where
        T: PartialEq + Clone,
    {
        self.maybe(|value| (value == expected).then(|| value.clone()))
    }

    /// Attach an error message if we have failed and have none yet.
    /// The first message attached wins.
    #[must_use]
    pub fn or(self, message: &str) -> Self {
        match self {
            Parse::Failed {
                context,
                message: None,
            } => Parse::Failed {
                context,
                message: Some(message.to_string()),
            },
            other => other,
        }
    }

    /// Attach an error message computed from the failing context, if we have
    /// failed, still have the context, and have no message yet.
    #[must_use]
    pub fn or_with(self, message: impl FnOnce(&C) -> String) -> Self {
        match self {
            Parse::Failed {
                context: Some(context),
                message: None,
            } => {
                let message = message(&context);
                Parse::Failed {
                    context: Some(context),
                    message: Some(message),
                }
            },
            other => other,
        }
    }

    /// Terminal conversion: a succeeded parse becomes an [`Action`] (the
    /// conversion may itself refuse); a failed parse becomes the command
    /// error carrying whatever message was attached along the way.
    ///
    /// # Errors
    /// - the attached (or generic) message on a failed parse
    /// - whatever the conversion itself reports
    pub fn to_action(
        self,
        convert: impl FnOnce(T) -> Result<Action, CommandError>,
    ) -> Result<Action, CommandError> {
        match self {
            Parse::Succeeded { value, .. } => convert(value),
            Parse::Failed { message, .. } => Err(CommandError::new(
                message.unwrap_or_else(|| GENERIC_PARSE_ERROR.to_string()),
            )),
        }
    }
}

/// Parse of the token at `index`, if there is one.
pub fn arg<'a>(tokens: &'a [&'a str], index: usize) -> Parse<&'a str, &'a [&'a str]> {
    match tokens.get(index) {
        Some(token) => Parse::succeed(*token, tokens),
        None => Parse::fail(tokens),
    }
}

/// Combine the tokens in `[start, end)` into a single space-joined argument.
/// Fails if the joined string is empty. `end` past the last token is clamped.
pub fn args<'a>(tokens: &'a [&'a str], start: usize, end: usize) -> Parse<String, &'a [&'a str]> {
    let end = end.min(tokens.len());
    let joined = if start < end {
        tokens[start..end].join(" ")
    } else {
        String::new()
    };
    if joined.trim().is_empty() {
        Parse::fail(tokens)
    } else {
        Parse::succeed(joined, tokens)
    }
}

/// Lift an already-known optional value (say, the one weapon the player is
/// carrying) into a parse chain without consuming tokens.
pub fn implicit<T>(supply: impl FnOnce() -> Option<T>) -> Parse<T, ()> {
    match supply() {
        Some(value) => Parse::succeed(value, ()),
        None => Parse::fail(()),
    }
}
