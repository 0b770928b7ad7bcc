//! # Font list text
//!
//! Pure string rewrites that turn raw catalog fields into display-ready text
//! for the font selection page.
//!
//! ```
//! use fontlist_text::{family_identifier, format_usage, is_variant};
//!
//! assert_eq!(family_identifier("IBM VGA 8x16"), "Web_IBM_VGA_8x16");
//! assert_eq!(format_usage("8x16 chars w/box drawing"), "8x16 characters with box drawing");
//! assert!(is_variant("ibm-vga-8x16-2y"));
//! ```

mod family;
mod title;
mod usage;

pub use family::{FAMILY_PREFIX, family_identifier, is_variant};
pub use title::{SPAN_CLOSE, SPAN_OPEN, format_title};
pub use usage::format_usage;
