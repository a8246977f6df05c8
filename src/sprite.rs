//! Sprite records and the ordered registry styles are generated from

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::data_uri::svg_to_data_uri;
use crate::error::StylesError;

/// A raw SVG record as supplied by the asset pipeline
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SvgSource {
    /// Optimized SVG markup
    pub source: String,
    pub width: f64,
    pub height: f64,
    #[serde(rename = "viewBox", alias = "view_box")]
    pub view_box: String,
}

impl SvgSource {
    pub fn new(source: impl Into<String>, width: f64, height: f64, view_box: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            width,
            height,
            view_box: view_box.into(),
        }
    }
}

/// One sprite, with its markup already encoded as a data URI
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteEntry {
    pub width: f64,
    pub height: f64,
    pub view_box: String,
    pub data_uri: String,
}

impl From<&SvgSource> for SpriteEntry {
    fn from(svg: &SvgSource) -> Self {
        Self {
            width: svg.width,
            height: svg.height,
            view_box: svg.view_box.clone(),
            data_uri: svg_to_data_uri(&svg.source),
        }
    }
}

/// Ordered mapping from sprite name to [`SpriteEntry`]
///
/// Iteration order is insertion order and never changes after construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpriteRegistry {
    entries: IndexMap<String, SpriteEntry>,
}

impl SpriteRegistry {
    /// Build a registry from raw records, encoding each source once
    ///
    /// A repeated name replaces the earlier record but keeps its position.
    pub fn from_sources<I, S>(sources: I) -> Self
    where
        I: IntoIterator<Item = (S, SvgSource)>,
        S: Into<String>,
    {
        let entries = sources
            .into_iter()
            .map(|(name, svg)| (name.into(), SpriteEntry::from(&svg)))
            .collect();
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&SpriteEntry> {
        self.entries.get(name)
    }

    /// Entries in registry order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpriteEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

/// Render every entry in registry order, one line-terminated block each
///
/// `render` receives `is_last = true` for the final entry only, so map
/// syntaxes can drop the trailing separator.
pub fn sprite_map<F>(registry: &SpriteRegistry, render: F) -> String
where
    F: Fn(&str, &SpriteEntry, bool) -> String,
{
    let last = registry.len().saturating_sub(1);
    let mut map = String::new();
    for (index, (name, entry)) in registry.iter().enumerate() {
        map.push_str(&render(name, entry, index == last));
        map.push('\n');
    }
    map
}

/// One `[[sprite]]` table of a manifest
#[derive(Debug, Clone, Deserialize)]
struct ManifestSprite {
    name: String,
    #[serde(flatten)]
    svg: SvgSource,
}

#[derive(Deserialize)]
struct TomlManifest {
    #[serde(default)]
    sprite: Vec<ManifestSprite>,
}

/// Sprite records read from a TOML manifest, in file order
#[derive(Debug, Clone, Default)]
pub struct SpriteManifest {
    pub sprites: Vec<(String, SvgSource)>,
}

impl SpriteManifest {
    /// Load a manifest from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a manifest from a TOML string
    ///
    /// Only the `[[sprite]]` tables are read; config keys are ignored.
    pub fn from_str(content: &str) -> Result<Self, StylesError> {
        let parsed: TomlManifest = toml::from_str(content)?;
        Ok(Self {
            sprites: parsed
                .sprite
                .into_iter()
                .map(|sprite| (sprite.name, sprite.svg))
                .collect(),
        })
    }

    pub fn into_registry(self) -> SpriteRegistry {
        SpriteRegistry::from_sources(self.sprites)
    }
}
