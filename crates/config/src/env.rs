//! Environment variable templating
//!
//! Runs over raw configuration text before it is parsed. Placeholders take
//! the form `${NAME}` or `${NAME:default}` where `NAME` matches
//! `[0-9A-Za-z_.]+`.
//!
//! | Placeholder | Variable set, non-empty | Set, empty | Unset |
//! |-------------|-------------------------|------------|-------|
//! | `${NAME}` | value | `""` | `""` (error in strict mode) |
//! | `${NAME:default}` | value | `default` | `default` |
//!
//! Newlines in a substituted value become the two characters `\n` so the
//! result stays valid in line-oriented formats.
//!
//! `${{NAME:default}}` is an escape: it is emitted as `${NAME:default}` and
//! never substituted.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::error::{ConfigError, Result};

#[cfg(test)]
#[path = "env_test.rs"]
mod tests;

static ENV_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{[0-9A-Za-z_.]+(:((\$\{[^}]+\})|[^}])+)?\}").expect("valid env regex")
});

static ESCAPED_ENV_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{(\{[0-9A-Za-z_.]+(:((\$\{[^}]+\})|[^}])+)?\})\}")
        .expect("valid escaped env regex")
});

/// Substitute placeholders from the process environment
///
/// A variable counts as set whenever it exists, even if its value is not
/// valid UTF-8; such values are converted lossily.
///
/// # Errors
///
/// Returns `ConfigError::EnvVarUnset` when `strict` is set and a placeholder
/// without a default names an unset variable.
pub fn replace_env_vars(input: &str, strict: bool) -> Result<String> {
    replace_env_vars_with(input, strict, |name| {
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    })
}

/// Substitute placeholders using `lookup` to resolve variable names
///
/// `lookup` returns `None` for unset variables.
pub fn replace_env_vars_with<F>(input: &str, strict: bool, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(input.len());
    let mut last = 0;

    for placeholder in ENV_PATTERN.find_iter(input) {
        out.push_str(&input[last..placeholder.start()]);
        out.push_str(&resolve(placeholder.as_str(), strict, &lookup)?);
        last = placeholder.end();
    }
    out.push_str(&input[last..]);

    let unescaped =
        ESCAPED_ENV_PATTERN.replace_all(&out, |caps: &Captures<'_>| format!("${}", &caps[1]));
    Ok(unescaped.into_owned())
}

/// Resolve a single `${...}` match to its replacement text
fn resolve<F>(placeholder: &str, strict: bool, lookup: &F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let inner = &placeholder[2..placeholder.len() - 1];

    let value = match inner.split_once(':') {
        None => match lookup(inner) {
            Some(value) => value,
            None if strict => return Err(ConfigError::env_var_unset(inner)),
            None => String::new(),
        },
        Some((name, default)) => lookup(name)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| default.to_string()),
    };

    Ok(value.replace('\n', "\\n"))
}
