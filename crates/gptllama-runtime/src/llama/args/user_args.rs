//! Operator argument validation.
//!
//! Operators forward a small whitelist of llama.cpp options as bare words
//! (`threads 8 mlock`). The scan is positional: every recognized name is
//! checked against the token after it, and every unrecognized token must be
//! the value of the recognized name before it.

use gptllama_core::{ParsedValue, RecognizedUserArguments, ValueKind};

use crate::llama::error::{UserArgError, UserArgErrors};

/// Validate operator tokens and re-emit them in flag form.
///
/// On success every recognized name gains a `--` prefix and every value
/// passes through unchanged, in the original order. On failure the complete
/// error list is returned and no tokens are emitted.
///
/// # Examples
///
/// ```rust
/// use gptllama_core::RecognizedUserArguments;
/// use gptllama_runtime::validate_user_args;
///
/// let tokens = ["threads", "8", "mlock"].map(String::from);
/// let args = validate_user_args(&tokens, &RecognizedUserArguments::standard()).unwrap();
/// assert_eq!(args, ["--threads", "8", "--mlock"]);
/// ```
pub fn validate_user_args(
    tokens: &[String],
    whitelist: &RecognizedUserArguments,
) -> Result<Vec<String>, UserArgErrors> {
    let mut errors = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let next = tokens.get(i + 1).map(String::as_str);

        if let Some(kind) = whitelist.kind_of(token) {
            if let Some(error) = check_argument(token, kind, next, whitelist) {
                errors.push(error);
            }
            continue;
        }

        // Not a name, so it has to be the value of the previous token.
        let follows_argument = i
            .checked_sub(1)
            .and_then(|prev| tokens.get(prev))
            .is_some_and(|prev| whitelist.is_recognized(prev));
        if !follows_argument {
            errors.push(UserArgError::UnsupportedArgument {
                token: token.clone(),
            });
        }
    }

    if let Some(errors) = UserArgErrors::new(errors) {
        tracing::debug!(count = errors.len(), "Operator arguments rejected: {errors}");
        return Err(errors);
    }

    Ok(tokens
        .iter()
        .map(|token| {
            if whitelist.is_recognized(token) {
                format!("--{token}")
            } else {
                token.clone()
            }
        })
        .collect())
}

fn check_argument(
    arg: &str,
    kind: ValueKind,
    next: Option<&str>,
    whitelist: &RecognizedUserArguments,
) -> Option<UserArgError> {
    let value = next.filter(|candidate| !whitelist.is_recognized(candidate));

    if !kind.requires_value() {
        return value.map(|_| UserArgError::UnexpectedValue {
            arg: arg.to_string(),
        });
    }

    let Some(value) = value else {
        return Some(UserArgError::MissingValue {
            arg: arg.to_string(),
        });
    };

    let actual = ParsedValue::parse(value).kind();
    (actual != kind).then(|| UserArgError::TypeMismatch {
        arg: arg.to_string(),
        expected: kind,
        actual,
    })
}
