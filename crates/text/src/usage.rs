//! Usage text cleanup.

/// Expand the shorthand used in catalog usage notes.
///
/// Drops `[?]` markers, reads `w/` as `with `, and spells out `char` and
/// `chars` when they stand as a word (so `characters` or `charset` stay
/// untouched).
pub fn format_usage(usage: &str) -> String {
    let usage = usage.replace("[?]", "").replace("w/", "with ");
    expand_char(&usage)
}

fn expand_char(text: &str) -> String {
    const CHAR: &str = "char";

    let mut out = String::with_capacity(text.len() + 16);
    let mut rest = text;
    while let Some(at) = rest.find(CHAR) {
        out.push_str(&rest[..at]);
        let tail = &rest[at + CHAR.len()..];
        let (word, consumed) = match tail.strip_prefix('s') {
            Some(after) if !starts_with_letter(after) => ("characters", CHAR.len() + 1),
            _ if !starts_with_letter(tail) => ("character", CHAR.len()),
            _ => (CHAR, CHAR.len()),
        };
        out.push_str(word);
        rest = &rest[at + consumed..];
    }
    out.push_str(rest);
    out
}

fn starts_with_letter(s: &str) -> bool {
    s.bytes().next().is_some_and(|b| b.is_ascii_alphabetic())
}
