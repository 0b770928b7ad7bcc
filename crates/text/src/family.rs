//! Family identifiers and variant detection.

/// Namespace prepended to every derived family identifier.
pub const FAMILY_PREFIX: &str = "Web_";

/// Suffixes marking a stretched-aspect rendering of another record.
const VARIANT_SUFFIXES: [&str; 2] = ["-2x", "-2y"];

/// Rewrites applied in order to a base name, `(from, to)`.
const FAMILY_REWRITES: [(&str, &str); 5] = [
    (" ", "_"),
    ("/", "-"),
    ("_re.", "_re"),
    ("_:", "_"),
    ("AT&T", "ATT"),
];

/// Derive the font-family identifier for a base name.
///
/// The result doubles as the asset filename stem and as a CSS identifier, so
/// spaces, slashes and ampersands never survive.
pub fn family_identifier(base_name: &str) -> String {
    let stem = FAMILY_REWRITES
        .iter()
        .fold(base_name.to_owned(), |s, (from, to)| s.replace(from, to));
    format!("{FAMILY_PREFIX}{stem}")
}

/// Whether a web-safe name identifies a variant (`-2x` / `-2y`) record.
pub fn is_variant(web_safe_name: &str) -> bool {
    web_safe_name.len() > 3
        && VARIANT_SUFFIXES.iter().any(|suffix| web_safe_name.ends_with(suffix))
}
