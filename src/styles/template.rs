//! Boilerplate templates wrapped around generated styles

use std::io;
use std::path::{Path, PathBuf};

use crate::config::StylesLang;

/// Placeholder replaced with the configured route
pub const ROUTE_PLACEHOLDER: &str = "%route%";

/// Source of per-dialect boilerplate text
///
/// Only called for dialects that have a wrapper, never for plain CSS.
pub trait TemplateLoader {
    fn load(&self, lang: StylesLang) -> io::Result<String>;
}

/// Templates compiled into the crate
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl TemplateLoader for BuiltinTemplates {
    fn load(&self, lang: StylesLang) -> io::Result<String> {
        let template = match lang {
            StylesLang::Css => "",
            StylesLang::Scss => include_str!("../../templates/template.scss"),
            StylesLang::Styl => include_str!("../../templates/template.styl"),
            StylesLang::Less => include_str!("../../templates/template.less"),
        };
        Ok(template.to_string())
    }
}

/// Templates read from `<dir>/template.<lang>` at generation time
#[derive(Debug, Clone)]
pub struct DirTemplates {
    dir: PathBuf,
}

impl DirTemplates {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, lang: StylesLang) -> PathBuf {
        self.dir.join(format!("template.{}", lang.as_str()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl TemplateLoader for DirTemplates {
    fn load(&self, lang: StylesLang) -> io::Result<String> {
        let path = self.path_for(lang);
        log::trace!("reading {} template from {}", lang, path.display());
        std::fs::read_to_string(path)
    }
}

/// Substitute the first route placeholder
pub fn fill_route(template: &str, route: &str) -> String {
    template.replacen(ROUTE_PLACEHOLDER, route, 1)
}
