//! Stylesheet generation for a sprite registry
//!
//! Each dialect renderer is a pure function of the registry and config. The
//! emitter picks one, then wraps its output with the generated-file banner
//! and the dialect's boilerplate template.

pub mod css;
pub mod less;
pub mod scss;
pub mod styl;
pub mod template;

pub use template::{BuiltinTemplates, DirTemplates, TemplateLoader, ROUTE_PLACEHOLDER};

use crate::config::{StyleConfig, StylesLang};
use crate::error::StylesError;
use crate::sprite::{SpriteRegistry, SvgSource};

/// Comment placed at the top of every generated stylesheet
pub const GENERATED_BANNER: &str = "/* Generated by spritemap-styles */\n\n";

/// Pixel length for map entries; negative zero is written as `0px`
pub(crate) fn px(value: f64) -> String {
    format!("{}px", value + 0.0)
}

/// Render the dialect block without banner or template
pub fn render(lang: StylesLang, registry: &SpriteRegistry, config: &StyleConfig) -> String {
    match lang {
        StylesLang::Scss => scss::render(registry, config),
        StylesLang::Styl => styl::render(registry, config),
        StylesLang::Less => less::render(registry, config),
        StylesLang::Css => css::render(registry, config),
    }
}

/// Generates the stylesheet for one set of sprites
pub struct StyleEmitter<L = BuiltinTemplates> {
    registry: SpriteRegistry,
    config: StyleConfig,
    templates: L,
}

impl StyleEmitter<BuiltinTemplates> {
    /// Build an emitter from raw SVG records, encoding each one
    pub fn new<I, S>(svgs: I, config: StyleConfig) -> Self
    where
        I: IntoIterator<Item = (S, SvgSource)>,
        S: Into<String>,
    {
        Self::from_registry(SpriteRegistry::from_sources(svgs), config)
    }

    pub fn from_registry(registry: SpriteRegistry, config: StyleConfig) -> Self {
        Self {
            registry,
            config,
            templates: BuiltinTemplates,
        }
    }
}

impl<L: TemplateLoader> StyleEmitter<L> {
    /// Use a different source for boilerplate templates
    pub fn with_templates<T: TemplateLoader>(self, templates: T) -> StyleEmitter<T> {
        StyleEmitter {
            registry: self.registry,
            config: self.config,
            templates,
        }
    }

    pub fn registry(&self) -> &SpriteRegistry {
        &self.registry
    }

    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// Produce the complete stylesheet
    ///
    /// Returns an empty string when styles are disabled. Fails only if the
    /// boilerplate template for a non-CSS dialect cannot be loaded.
    pub fn generate(&self) -> Result<String, StylesError> {
        let Some(lang) = self.config.lang() else {
            log::debug!("styles disabled, skipping generation");
            return Ok(String::new());
        };

        log::debug!("rendering {} sprites as {}", self.registry.len(), lang);
        let insert = render(lang, &self.registry, &self.config);
        self.insert(lang, insert)
    }

    fn insert(&self, lang: StylesLang, insert: String) -> Result<String, StylesError> {
        let template = match lang {
            StylesLang::Css => String::new(),
            _ => {
                let template = self
                    .templates
                    .load(lang)
                    .map_err(|source| StylesError::Template { lang, source })?;
                template::fill_route(&template, &self.config.route)
            }
        };

        let mut output =
            String::with_capacity(GENERATED_BANNER.len() + insert.len() + 1 + template.len());
        output.push_str(GENERATED_BANNER);
        output.push_str(&insert);
        output.push('\n');
        output.push_str(&template);
        Ok(output)
    }
}
