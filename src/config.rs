//! Configuration for stylesheet generation

use std::convert::Infallible;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::StylesError;

/// Stylesheet dialect to emit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum StylesLang {
    #[default]
    Css,
    Scss,
    Styl,
    Less,
}

impl StylesLang {
    /// Every supported dialect, in a fixed order
    pub const ALL: [StylesLang; 4] = [
        StylesLang::Css,
        StylesLang::Scss,
        StylesLang::Styl,
        StylesLang::Less,
    ];

    /// The language tag, also used as the template file extension
    pub fn as_str(self) -> &'static str {
        match self {
            StylesLang::Css => "css",
            StylesLang::Scss => "scss",
            StylesLang::Styl => "styl",
            StylesLang::Less => "less",
        }
    }
}

impl fmt::Display for StylesLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown tags fall back to plain CSS rather than failing
impl From<&str> for StylesLang {
    fn from(tag: &str) -> Self {
        match tag {
            "css" => StylesLang::Css,
            "scss" => StylesLang::Scss,
            "styl" => StylesLang::Styl,
            "less" => StylesLang::Less,
            other => {
                log::warn!("unknown styles lang {:?}, falling back to css", other);
                StylesLang::Css
            }
        }
    }
}

impl From<String> for StylesLang {
    fn from(tag: String) -> Self {
        StylesLang::from(tag.as_str())
    }
}

impl FromStr for StylesLang {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(StylesLang::from(s))
    }
}

/// Which stylesheet to generate
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StylesSpec {
    #[serde(default)]
    pub lang: StylesLang,
}

/// Output options shared with the sprite asset
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Whether the sprite exposes `<view>` fragments, enabling `-frag` rules
    pub view: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { view: true }
    }
}

/// Resolved configuration for a [`StyleEmitter`](crate::StyleEmitter)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Prepended to every generated selector and map key
    pub prefix: String,

    /// Where the sprite asset is served from, substituted for `%route%`
    pub route: String,

    pub output: OutputConfig,

    /// `None` disables generation entirely
    #[serde(deserialize_with = "deserialize_styles")]
    pub styles: Option<StylesSpec>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            prefix: "sprite-".to_string(),
            route: "__spritemap".to_string(),
            output: OutputConfig::default(),
            styles: None,
        }
    }
}

/// `styles` accepts `false`, `true` (plain CSS) or a `{ lang = ".." }` table
#[derive(Deserialize)]
#[serde(untagged)]
enum StylesField {
    Toggle(bool),
    Spec(StylesSpec),
}

fn deserialize_styles<'de, D>(deserializer: D) -> Result<Option<StylesSpec>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StylesField::deserialize(deserializer)? {
        StylesField::Toggle(false) => None,
        StylesField::Toggle(true) => Some(StylesSpec::default()),
        StylesField::Spec(spec) => Some(spec),
    })
}

impl StyleConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    ///
    /// Keys this type does not know about are ignored, so a full sprite
    /// manifest parses as well.
    pub fn from_str(content: &str) -> Result<Self, StylesError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the selector prefix
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the sprite route
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = route.into();
        self
    }

    /// Set whether `-frag` view rules are emitted for CSS
    pub fn with_output_view(mut self, view: bool) -> Self {
        self.output.view = view;
        self
    }

    /// Enable generation for the given dialect
    pub fn with_lang(mut self, lang: StylesLang) -> Self {
        self.styles = Some(StylesSpec { lang });
        self
    }

    /// Disable generation
    pub fn without_styles(mut self) -> Self {
        self.styles = None;
        self
    }

    /// The selected dialect, or `None` when generation is disabled
    pub fn lang(&self) -> Option<StylesLang> {
        self.styles.as_ref().map(|s| s.lang)
    }
}
