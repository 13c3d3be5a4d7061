//! Line normalizer — rewrites a raw line into `url:username:password` order.
//!
//! Producers disagree on delimiters (`:`, `|`, space) and on field order (the
//! URL is either first or last). The normalizer unifies delimiters, moves a
//! trailing URL to the front, then copies the password bytes back from the
//! untouched line so that `|` and spaces inside a password survive.

use vault_core::DELIMITER;

/// Characters treated as field separators besides the canonical delimiter.
const ALT_DELIMITERS: &[char] = &['|', ' '];

/// Structural reading of a delimiter-unified line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape {
    /// Already `url:username:password`.
    Canonical,
    /// `username:password:url`; `split` is the byte offset of the last delimiter.
    TrailingUrl { split: usize },
    /// Fewer than two delimiters.
    Malformed,
}

/// Replace every alternative separator with the canonical delimiter.
/// Byte length is unchanged, so offsets stay valid against the input.
pub fn unify_delimiters(raw: &str) -> String {
    raw.chars()
        .map(|c| if ALT_DELIMITERS.contains(&c) { DELIMITER } else { c })
        .collect()
}

/// Classify a delimiter-unified line.
pub fn classify_shape(unified: &str) -> LineShape {
    if unified.matches(DELIMITER).count() < 2 {
        return LineShape::Malformed;
    }
    let Some(split) = unified.rfind(DELIMITER) else {
        return LineShape::Malformed;
    };
    let trailing = &unified[split + 1..];
    if looks_like_url(trailing) {
        LineShape::TrailingUrl { split }
    } else {
        LineShape::Canonical
    }
}

fn looks_like_url(field: &str) -> bool {
    field.contains('/') && field.contains('.')
}

/// Move the field after `split` to the front, terminated by the delimiter.
fn reorder(line: &str, split: usize) -> String {
    let mut out = String::with_capacity(line.len());
    out.push_str(&line[split + 1..]);
    out.push(DELIMITER);
    out.push_str(&line[..split]);
    out
}

/// Keep `unified` up to and including its second delimiter, then take the
/// remaining bytes from `faithful`. Both strings have the same length and an
/// ASCII byte at every delimiter offset.
fn restore_password(unified: &str, faithful: &str) -> String {
    let Some((second, _)) = unified.match_indices(DELIMITER).nth(1) else {
        return unified.to_string();
    };
    let mut out = String::with_capacity(unified.len());
    out.push_str(&unified[..=second]);
    out.push_str(&faithful[second + 1..]);
    out
}

/// Normalize a trimmed, protocol-stripped line. Total: a line that cannot be
/// normalized is returned unchanged and left for the tokenizer to reject.
pub fn normalize(raw: &str) -> String {
    let unified = unify_delimiters(raw);
    match classify_shape(&unified) {
        LineShape::Malformed => raw.to_string(),
        LineShape::Canonical => restore_password(&unified, raw),
        LineShape::TrailingUrl { split } => {
            restore_password(&reorder(&unified, split), &reorder(raw, split))
        }
    }
}

/// Remove the first `http://`, or failing that the first `https://`,
/// wherever it occurs in the line.
pub fn strip_protocol(line: &str) -> String {
    for scheme in ["http://", "https://"] {
        if let Some(pos) = line.find(scheme) {
            let mut out = String::with_capacity(line.len() - scheme.len());
            out.push_str(&line[..pos]);
            out.push_str(&line[pos + scheme.len()..]);
            return out;
        }
    }
    line.to_string()
}
