//! Sub-header title markup.

/// Opens a de-emphasized run inside a heading.
pub const SPAN_OPEN: &str = "<span class=\"has-text-weight-normal\">";
/// Closes a run opened by [`SPAN_OPEN`].
pub const SPAN_CLOSE: &str = "</span>";

/// De-emphasized from its first occurrence to the end of the title, unless
/// the title already has a parenthetical aside.
const TRAILING_PHRASE: &str = "Multimode Graphics Adapter";

/// Each wrapped on its own, first occurrence only.
const INLINE_PHRASES: [&str; 6] = [
    "Adapter Interface drivers for",
    "series video BIOS",
    "on-board video",
    "system font",
    "system-loaded font",
    "firmware and system",
];

/// Turn an origin text into heading markup.
///
/// A parenthetical aside (everything from the first `(`) is de-emphasized,
/// as are a handful of known filler phrases. `incl.` always reads `includes`.
/// Matching is case-sensitive.
pub fn format_title(origin: &str) -> String {
    let mut title = match origin.find('(').or_else(|| origin.find(TRAILING_PHRASE)) {
        Some(at) => {
            let (head, tail) = origin.split_at(at);
            format!("{head}{SPAN_OPEN}{tail}{SPAN_CLOSE}")
        }
        None => origin.to_owned(),
    };
    title = title.replace("incl.", "includes");
    for phrase in INLINE_PHRASES {
        title = title.replacen(phrase, &format!("{SPAN_OPEN}{phrase}{SPAN_CLOSE}"), 1);
    }
    title
}
