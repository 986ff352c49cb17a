//! Regex dialect used by rules.
//!
//! Triggers must match the whole headword. Transforms replace every
//! non-overlapping match. Replacement text is written with `$1`-style group
//! references and `\` escapes. It is checked against the transform pattern
//! and rewritten here into the `regex` crate's replacement syntax.

use std::fmt;

use regex::Regex;

/// Compiles a trigger so it only matches a whole headword.
///
/// # Errors
/// Returns the regex engine's error if the pattern does not compile.
pub fn compile_trigger(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})$"))
}

/// Compiles a transform pattern.
///
/// # Errors
/// Returns the regex engine's error if the pattern does not compile.
pub fn compile_transform(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(pattern)
}

/// Why replacement text cannot be used with a transform pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplacementError {
    /// `$n` refers to a group the pattern does not have.
    NoGroup(usize),
    /// `${name}` refers to a group the pattern does not have.
    NoNamedGroup(String),
    /// `$` is not followed by a digit or `{`.
    IllegalGroupReference,
    /// `${` is not closed by `}`, or the name is not a letter followed by
    /// letters and digits.
    BadGroupName,
    /// `\` ends the text with nothing to escape.
    DanglingEscape,
}

impl fmt::Display for ReplacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoGroup(group) => write!(f, "no group {group}"),
            Self::NoNamedGroup(name) => write!(f, "no group with name {{{name}}}"),
            Self::IllegalGroupReference => f.write_str("illegal group reference"),
            Self::BadGroupName => f.write_str("malformed named group reference"),
            Self::DanglingEscape => f.write_str("character to be escaped is missing"),
        }
    }
}

impl std::error::Error for ReplacementError {}

/// Checks replacement text against a compiled transform and rewrites it into
/// the `regex` crate's replacement syntax.
///
/// - `$n` refers to group `n`. Further digits extend the number only while
///   the group exists, so with one group `$10` is group 1 then a literal `0`.
/// - `${name}` refers to a named group.
/// - `\x` is a literal `x`.
///
/// # Errors
/// Returns a [`ReplacementError`] for references to missing groups, a `$`
/// that starts no reference, or a trailing `\`.
pub fn compile_replacement(replacement: &str, regex: &Regex) -> Result<String, ReplacementError> {
    let groups = regex.captures_len().saturating_sub(1);
    let mut out = String::with_capacity(replacement.len() + 4);
    let mut chars = replacement.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('$') => out.push_str("$$"),
                Some(escaped) => out.push(escaped),
                None => return Err(ReplacementError::DanglingEscape),
            },
            '$' => match chars.next() {
                Some('{') => {
                    let mut name = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some(ch) if ch.is_ascii_alphanumeric() => name.push(ch),
                            _ => return Err(ReplacementError::BadGroupName),
                        }
                    }
                    if !name.starts_with(|ch: char| ch.is_ascii_alphabetic()) {
                        return Err(ReplacementError::BadGroupName);
                    }
                    if !regex.capture_names().flatten().any(|n| n == name) {
                        return Err(ReplacementError::NoNamedGroup(name));
                    }
                    out.push_str("${");
                    out.push_str(&name);
                    out.push('}');
                }
                Some(d) => {
                    let Some(mut group) = digit(d) else {
                        return Err(ReplacementError::IllegalGroupReference);
                    };
                    if group > groups {
                        return Err(ReplacementError::NoGroup(group));
                    }
                    while let Some(next) = chars.peek().copied().and_then(digit) {
                        let extended = group * 10 + next;
                        if extended > groups {
                            break;
                        }
                        group = extended;
                        chars.next();
                    }
                    out.push_str("${");
                    out.push_str(&group.to_string());
                    out.push('}');
                }
                None => return Err(ReplacementError::IllegalGroupReference),
            },
            other => out.push(other),
        }
    }
    Ok(out)
}

fn digit(c: char) -> Option<usize> {
    c.to_digit(10).and_then(|d| usize::try_from(d).ok())
}
