//! Sound-change application.
//!
//! When a language's phonology shifts, the user can push a change through
//! every stored form of a word or through the text of every rule transform.
//! Each helper returns [`EvolutionRecord`]s describing what changed and what
//! was refused.

use std::fmt;

use paradigm_foundation::{Error, ErrorKind, PosId, Result, WordId};
use paradigm_storage::InstanceStore;
use regex::Regex;

use crate::pattern::compile_replacement;
use crate::rule::store::RuleStore;

/// Which matches of a pattern a replacement touches.
///
/// Matches are classified by position among all matches in the value: the
/// first, the last, and everything between. A lone match is both first and
/// last.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReplaceScope {
    /// Every match.
    #[default]
    All,
    /// Only the first match.
    FirstOnly,
    /// The first match and the middle ones.
    FirstAndMiddle,
    /// Only matches that are neither first nor last.
    MiddleOnly,
    /// The middle matches and the last.
    MiddleAndLast,
    /// Only the last match.
    LastOnly,
}

impl ReplaceScope {
    fn selects(self, position: usize, count: usize) -> bool {
        let first = position == 0;
        let last = position + 1 == count;
        let middle = !first && !last;
        match self {
            Self::All => true,
            Self::FirstOnly => first,
            Self::FirstAndMiddle => first || middle,
            Self::MiddleOnly => middle,
            Self::MiddleAndLast => middle || last,
            Self::LastOnly => last,
        }
    }

    /// Parses a scope name as used on the command line.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "all" => Some(Self::All),
            "first" => Some(Self::FirstOnly),
            "first-middle" => Some(Self::FirstAndMiddle),
            "middle" => Some(Self::MiddleOnly),
            "middle-last" => Some(Self::MiddleAndLast),
            "last" => Some(Self::LastOnly),
            _ => None,
        }
    }
}

/// What an evolution record refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvolutionKind {
    /// A stored instance value.
    SavedForm,
    /// A rule transform's pattern and replacement.
    RuleTransform,
}

/// One change made (or refused) by an evolution pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvolutionRecord {
    /// What was evolved.
    pub kind: EvolutionKind,
    /// Text before.
    pub before: String,
    /// Text after (for refused changes, the text that was rejected).
    pub after: String,
    /// Origin of the text: a slot identifier or a rule name.
    pub source: String,
    /// Set when the change was refused and reverted.
    pub message: Option<String>,
}

impl EvolutionRecord {
    /// Returns true if the change was refused.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.message.is_some()
    }
}

impl fmt::Display for EvolutionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} => {}", self.source, self.before, self.after)?;
        if let Some(message) = &self.message {
            write!(f, " ({message})")?;
        }
        Ok(())
    }
}

fn invalid(pattern: &str, message: impl fmt::Display) -> Error {
    Error::new(ErrorKind::InvalidPattern {
        pattern: pattern.to_string(),
        message: message.to_string(),
    })
}

/// Compiles a sound change into a regex and a checked replacement.
fn compile(pattern: &str, replacement: &str) -> Result<(Regex, String)> {
    let regex = Regex::new(pattern).map_err(|e| invalid(pattern, e))?;
    let replacement =
        compile_replacement(replacement, &regex).map_err(|e| invalid(replacement, e))?;
    Ok((regex, replacement))
}

fn replace_with(value: &str, regex: &Regex, replacement: &str, scope: ReplaceScope) -> String {
    if scope == ReplaceScope::All {
        return regex.replace_all(value, replacement).into_owned();
    }
    let matches: Vec<regex::Captures<'_>> = regex.captures_iter(value).collect();
    let count = matches.len();
    let mut out = String::with_capacity(value.len());
    let mut cursor = 0;
    for (position, caps) in matches.iter().enumerate() {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        out.push_str(&value[cursor..whole.start()]);
        if scope.selects(position, count) {
            caps.expand(replacement, &mut out);
        } else {
            out.push_str(whole.as_str());
        }
        cursor = whole.end();
    }
    out.push_str(&value[cursor..]);
    out
}

/// Replaces the matches of `pattern` in `value` selected by `scope`.
///
/// # Errors
/// Returns [`ErrorKind::InvalidPattern`] if the pattern does not compile or
/// the replacement refers to a group the pattern lacks.
pub fn scoped_replace(
    value: &str,
    pattern: &str,
    replacement: &str,
    scope: ReplaceScope,
) -> Result<String> {
    let (regex, replacement) = compile(pattern, replacement)?;
    Ok(replace_with(value, &regex, &replacement, scope))
}

/// Applies a sound change to every stored form of a word.
///
/// A change that would blank a non-blank form is refused and reported.
/// Unchanged forms produce no record.
///
/// # Errors
/// Returns [`ErrorKind::InvalidPattern`] if the pattern or replacement is
/// malformed; nothing is changed in that case.
pub fn evolve_saved_forms(
    instances: &mut InstanceStore,
    word: WordId,
    pattern: &str,
    replacement: &str,
    scope: ReplaceScope,
) -> Result<Vec<EvolutionRecord>> {
    let (regex, replacement) = compile(pattern, replacement)?;
    let mut records = Vec::new();
    let current: Vec<_> = instances.instances(word).into_iter().cloned().collect();
    for instance in current {
        let after = replace_with(&instance.value, &regex, &replacement, scope);
        if after == instance.value {
            continue;
        }
        let mut record = EvolutionRecord {
            kind: EvolutionKind::SavedForm,
            before: instance.value.clone(),
            after: after.clone(),
            source: instance.slot.to_string(),
            message: None,
        };
        if after.trim().is_empty() && !instance.value.trim().is_empty() {
            record.message = Some("form would become blank (value kept)".to_string());
        } else {
            instances.set(word, instance.slot.clone(), after);
        }
        records.push(record);
    }
    Ok(records)
}

/// Replaces the literal text `from` with `to` inside every transform pattern
/// and replacement of the selected rules (`None` selects every part of speech).
///
/// A transform whose pattern would become blank is reverted and reported.
/// Transforms left unchanged produce no record.
pub fn evolve_rules(
    rules: &mut RuleStore,
    pos: Option<PosId>,
    from: &str,
    to: &str,
) -> Vec<EvolutionRecord> {
    let mut records = Vec::new();
    if from.is_empty() {
        return records;
    }
    let targets: Vec<PosId> = match pos {
        Some(pos) => vec![pos],
        None => rules.parts_of_speech(),
    };
    for pos in targets {
        for id in rules.ordered_ids(pos) {
            let Some(mut rule) = rules.get(id).cloned() else {
                continue;
            };
            let mut touched = false;
            let name = rule.display_name().to_string();
            for transform in &mut rule.transforms {
                let pattern = transform.pattern.replace(from, to);
                let replacement = transform.replacement.replace(from, to);
                if pattern == transform.pattern && replacement == transform.replacement {
                    continue;
                }
                let before = format!("{} -> {}", transform.pattern, transform.replacement);
                let after = format!("{pattern} -> {replacement}");
                let message = if pattern.trim().is_empty() {
                    Some("pattern would become blank (value reverted)".to_string())
                } else {
                    transform.pattern = pattern;
                    transform.replacement = replacement;
                    touched = true;
                    None
                };
                records.push(EvolutionRecord {
                    kind: EvolutionKind::RuleTransform,
                    before,
                    after,
                    source: name.clone(),
                    message,
                });
            }
            if touched && rules.replace(id, rule).is_err() {
                tracing::warn!(rule = %id, "rule vanished during evolution");
            }
        }
    }
    records
}
