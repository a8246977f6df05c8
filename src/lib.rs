//! Spritemap Styles - stylesheet generation for SVG sprites
//!
//! This library turns an ordered set of SVG sprites into stylesheet source for
//! plain CSS, SCSS, Stylus or Less. Each sprite is inlined as a compact data
//! URI together with its pixel size.
//!
//! # Example
//!
//! ```rust
//! use spritemap_styles::{generate, StyleConfig, StylesLang, SvgSource};
//!
//! let svgs = [("close", SvgSource::new("<svg/>", 24.0, 24.0, "0 0 24 24"))];
//! let config = StyleConfig::new().with_prefix("icon-").with_lang(StylesLang::Css);
//!
//! let css = generate(svgs, config).unwrap();
//! assert!(css.contains(".icon-close {"));
//! assert!(css.contains(".icon-close-mask {"));
//! ```

pub mod config;
pub mod data_uri;
pub mod error;
pub mod sprite;
pub mod styles;

pub use config::{OutputConfig, StyleConfig, StylesLang, StylesSpec};
pub use data_uri::svg_to_data_uri;
pub use error::StylesError;
pub use sprite::{sprite_map, SpriteEntry, SpriteManifest, SpriteRegistry, SvgSource};
pub use styles::{
    BuiltinTemplates, DirTemplates, StyleEmitter, TemplateLoader, GENERATED_BANNER,
};

/// Generate a stylesheet with the built-in templates
///
/// Returns an empty string when `config.styles` is disabled.
///
/// # Example
///
/// ```rust
/// use spritemap_styles::{generate, StyleConfig, SvgSource};
///
/// let svgs = [("close", SvgSource::new("<svg/>", 24.0, 24.0, "0 0 24 24"))];
/// assert_eq!(generate(svgs, StyleConfig::new().without_styles()).unwrap(), "");
/// ```
pub fn generate<I, S>(svgs: I, config: StyleConfig) -> Result<String, StylesError>
where
    I: IntoIterator<Item = (S, SvgSource)>,
    S: Into<String>,
{
    StyleEmitter::new(svgs, config).generate()
}
