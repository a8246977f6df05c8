//! Compact `data:` URI encoding for SVG markup
//!
//! SVG is text, so percent-encoding it produces shorter URIs than base64 and
//! stays gzip-friendly. Characters browsers tolerate inside a `url("...")`
//! value are left literal.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

const DATA_URI_PREFIX: &str = "data:image/svg+xml,";

/// Characters `encodeURIComponent` escapes, minus the ones safe to keep in a
/// quoted CSS `url()` (space, `=`, `:` and `/`).
const SVG_URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b' ')
    .remove(b'=')
    .remove(b':')
    .remove(b'/');

/// Named colors shorter than their percent-encoded hex form (`%23rrggbb`).
/// Lookup is first-match, so `aqua` wins over `cyan` and `fuchsia` over
/// `magenta`.
const SHORTER_COLOR_NAMES: &[(&str, &str)] = &[
    ("aqua", "00ffff"),
    ("azure", "f0ffff"),
    ("beige", "f5f5dc"),
    ("bisque", "ffe4c4"),
    ("black", "000000"),
    ("blue", "0000ff"),
    ("brown", "a52a2a"),
    ("coral", "ff7f50"),
    ("cornsilk", "fff8dc"),
    ("crimson", "dc143c"),
    ("darkblue", "00008b"),
    ("darkcyan", "008b8b"),
    ("darkgrey", "a9a9a9"),
    ("darkred", "8b0000"),
    ("deeppink", "ff1493"),
    ("dimgrey", "696969"),
    ("fuchsia", "ff00ff"),
    ("gold", "ffd700"),
    ("green", "008000"),
    ("grey", "808080"),
    ("honeydew", "f0fff0"),
    ("hotpink", "ff69b4"),
    ("indigo", "4b0082"),
    ("ivory", "fffff0"),
    ("khaki", "f0e68c"),
    ("lavender", "e6e6fa"),
    ("lime", "00ff00"),
    ("linen", "faf0e6"),
    ("maroon", "800000"),
    ("moccasin", "ffe4b5"),
    ("navy", "000080"),
    ("oldlace", "fdf5e6"),
    ("olive", "808000"),
    ("orange", "ffa500"),
    ("orchid", "da70d6"),
    ("peru", "cd853f"),
    ("pink", "ffc0cb"),
    ("plum", "dda0dd"),
    ("purple", "800080"),
    ("red", "ff0000"),
    ("salmon", "fa8072"),
    ("seagreen", "2e8b57"),
    ("seashell", "fff5ee"),
    ("sienna", "a0522d"),
    ("silver", "c0c0c0"),
    ("skyblue", "87ceeb"),
    ("snow", "fffafa"),
    ("tan", "d2b48c"),
    ("teal", "008080"),
    ("thistle", "d8bfd8"),
    ("tomato", "ff6347"),
    ("violet", "ee82ee"),
    ("wheat", "f5deb3"),
    ("white", "ffffff"),
];

/// Encode SVG markup as a compact `data:image/svg+xml,` URI
///
/// Double quotes are swapped for single quotes so the result can be wrapped
/// in `url("...")` without further escaping.
pub fn svg_to_data_uri(source: &str) -> String {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let body = shorten_colors(&collapse_whitespace(source)).replace('"', "'");

    let encoded = utf8_percent_encode(&body, SVG_URI_COMPONENT).to_string();
    let mut uri = String::with_capacity(DATA_URI_PREFIX.len() + encoded.len());
    uri.push_str(DATA_URI_PREFIX);
    uri.push_str(&lowercase_escapes(&encoded));
    uri
}

/// A byte-order mark anywhere in the markup counts as whitespace
fn collapse_whitespace(source: &str) -> String {
    source
        .split(|c: char| c.is_whitespace() || c == '\u{feff}')
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Replace `#rrggbb`, `#rrggbbff`, `#rgb` and `#rgbf` literals with a color
/// name when one is shorter. The hex run must not continue into another word
/// character.
fn shorten_colors(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;

    while let Some(hash) = rest.find('#') {
        out.push_str(&rest[..hash]);
        let after = &rest[hash + 1..];
        let run_len = after
            .find(|c: char| !is_word_char(c))
            .unwrap_or(after.len());
        let run = &after[..run_len];

        match color_name(run) {
            Some(name) => out.push_str(name),
            None => {
                out.push('#');
                out.push_str(run);
            }
        }
        rest = &after[run_len..];
    }
    out.push_str(rest);
    out
}

fn color_name(run: &str) -> Option<&'static str> {
    if !run.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let hex = run.to_ascii_lowercase();
    let rgb = match hex.len() {
        6 => hex,
        8 if hex.ends_with("ff") => hex[..6].to_string(),
        3 => expand_short_hex(&hex),
        4 if hex.ends_with('f') => expand_short_hex(&hex[..3]),
        _ => return None,
    };
    SHORTER_COLOR_NAMES
        .iter()
        .find(|(_, value)| *value == rgb)
        .map(|(name, _)| *name)
}

fn expand_short_hex(short: &str) -> String {
    short.chars().flat_map(|c| [c, c]).collect()
}

/// Percent escapes compress better in lowercase
fn lowercase_escapes(encoded: &str) -> String {
    let mut out = String::with_capacity(encoded.len());
    let mut chars = encoded.chars();
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '%' {
            for hex in chars.by_ref().take(2) {
                out.push(hex.to_ascii_lowercase());
            }
        }
    }
    out
}
