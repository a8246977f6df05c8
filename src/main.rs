//! Spritemap Styles CLI
//!
//! Usage:
//!   spritemap-styles [OPTIONS] <MANIFEST>
//!
//! Options:
//!   -l, --lang <LANG>        Stylesheet dialect (css, scss, styl, less)
//!   -p, --prefix <PREFIX>    Selector prefix
//!   -r, --route <ROUTE>      Route the sprite is served from
//!       --no-view            Skip `-frag` view rules in CSS output
//!   -t, --templates <DIR>    Directory holding template.<lang> files
//!   -o, --output <FILE>      Write to a file instead of stdout
//!   -v, --verbose            Increase log verbosity (repeatable)
//!   -h, --help               Print help

use std::fs;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use spritemap_styles::{
    DirTemplates, SpriteManifest, StyleConfig, StyleEmitter, StylesError, StylesLang,
};

#[derive(Parser)]
#[command(name = "spritemap-styles")]
#[command(about = "Generate CSS, SCSS, Stylus or Less for an SVG sprite manifest")]
struct Cli {
    /// Sprite manifest (TOML): config keys plus ordered [[sprite]] tables
    manifest: PathBuf,

    /// Stylesheet dialect; enables generation even if the manifest disables it
    #[arg(short, long)]
    lang: Option<StylesLang>,

    /// Selector prefix
    #[arg(short, long)]
    prefix: Option<String>,

    /// Route the sprite is served from
    #[arg(short, long)]
    route: Option<String>,

    /// Skip `-frag` view rules in CSS output
    #[arg(long)]
    no_view: bool,

    /// Directory holding template.<lang> files (built-in templates otherwise)
    #[arg(short, long)]
    templates: Option<PathBuf>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let styles = match run(&cli) {
        Ok(styles) => styles,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &styles) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            log::debug!("wrote {} bytes to {}", styles.len(), path.display());
        }
        None => print!("{}", styles),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: &Cli) -> Result<String, StylesError> {
    let content = fs::read_to_string(&cli.manifest)?;
    let config = apply_overrides(StyleConfig::from_str(&content)?, cli);
    let registry = SpriteManifest::from_str(&content)?.into_registry();
    log::debug!(
        "loaded {} sprites from {}",
        registry.len(),
        cli.manifest.display()
    );

    let emitter = StyleEmitter::from_registry(registry, config);
    match &cli.templates {
        Some(dir) => emitter.with_templates(DirTemplates::new(dir)).generate(),
        None => emitter.generate(),
    }
}

fn apply_overrides(mut config: StyleConfig, cli: &Cli) -> StyleConfig {
    if let Some(lang) = cli.lang {
        config = config.with_lang(lang);
    }
    if let Some(prefix) = &cli.prefix {
        config = config.with_prefix(prefix.as_str());
    }
    if let Some(route) = &cli.route {
        config = config.with_route(route.as_str());
    }
    if cli.no_view {
        config = config.with_output_view(false);
    }
    config
}
