//! Configuration constants for font list generation.

use crate::sections::Section;

/// Font metadata store, relative to the root directory.
pub const DATA_PATH: &str = "github/RetroTxt/ext/json/font_info.json";

/// Directory of web fonts, relative to the root directory.
pub const FONTS_DIR: &str = "github/RetroTxt/ext/fonts";

/// Generated HTML fragment filename.
pub const HTML_FILENAME: &str = "fonts.html";

/// Generated stylesheet filename.
pub const CSS_FILENAME: &str = "fonts.css";

/// Web font file extension, shared by the asset check and the CSS `src` URL.
pub const FONT_EXTENSION: &str = "woff";

/// Path from the stylesheet to the web fonts.
pub const CSS_FONT_URL_PREFIX: &str = "../fonts/";

/// Per-font information page, the web-safe name is appended.
pub const FONT_INFO_URL: &str = "https://int10h.org/oldschool-pc-fonts/fontlist/font?";

/// Icon sprite used for the information link.
pub const INFO_ICON_HREF: &str = "../assets/svg/material-icons.svg#info";

/// Form name shared by every radio control.
pub const RADIO_NAME: &str = "font";

/// Generation timestamp, RFC 822 with a numeric zone.
pub const TIMESTAMP_FORMAT: &str = "%d %b %y %H:%M %z";

const SECTION_DESCRIPTION: &str = "Fonts support the original IBM PC, 256 character encoding \
(codepage 437); <u>marked</u> fonts expands support to some 780 characters";

/// Catalog positions that open a top-level section.
pub const SECTIONS: &[Section] = &[
    Section { index: 0, title: "IBM PC & family", description: SECTION_DESCRIPTION },
    Section { index: 59, title: "MS-DOS compatibles", description: SECTION_DESCRIPTION },
    Section { index: 130, title: "Video hardware", description: SECTION_DESCRIPTION },
    Section { index: 184, title: "Semi-compatibles", description: SECTION_DESCRIPTION },
];
