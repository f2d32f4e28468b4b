//! Response post-processor.
//!
//! Models like to open with a preamble ("Certainly! Here's a draft:") and to
//! sprinkle em dashes. [`clean`] strips the preamble paragraph, a leading
//! `---` divider and normalizes dashes, leaving only the email text.
//!
//! `clean` is idempotent: stripping repeats until nothing matches, so a
//! preamble uncovered by an earlier strip is removed in the same pass.

/// Leading phrases that mark a preamble, tried in this order (case-sensitive).
pub const PREFATORY_PHRASES: &[&str] = &[
    "Certainly!",
    "Sure!",
    "Here's",
    "I've",
    "Here is",
    "Below is",
    "The following",
];

const DIVIDER: &str = "---";
const EM_DASH: char = '\u{2014}';
const EN_DASH: char = '\u{2013}';

/// Cleans generated reply text.
pub fn clean(text: &str) -> String {
    // Dashes first: a run of em dashes would otherwise turn into a divider
    // line only after the divider check ran.
    let normalized = text.replace(|c: char| c == EM_DASH || c == EN_DASH, "-");

    let mut current = normalized.trim_start();
    loop {
        let before = current.len();

        for phrase in PREFATORY_PHRASES {
            if let Some(rest) = strip_preamble(current, phrase) {
                current = rest.trim_start();
            }
        }
        if let Some(rest) = strip_divider(current) {
            current = rest.trim_start();
        }

        if current.len() == before {
            break;
        }
    }

    current.trim().to_string()
}

/// If `text` starts with `phrase`, returns what follows the first blank line
/// or `---` line after it. Without such a terminator nothing is stripped.
fn strip_preamble<'a>(text: &'a str, phrase: &str) -> Option<&'a str> {
    if !text.starts_with(phrase) {
        return None;
    }

    let mut lines = text.split_inclusive('\n');
    let mut offset = lines.next()?.len();
    for line in lines {
        offset += line.len();
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed == DIVIDER {
            return Some(&text[offset..]);
        }
    }
    None
}

/// Drops the first line when it is a `---` divider.
fn strip_divider(text: &str) -> Option<&str> {
    let first = text.split_inclusive('\n').next()?;
    (first.trim() == DIVIDER).then(|| &text[first.len()..])
}
