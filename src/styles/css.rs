//! Plain CSS rules, one per sprite per pass
//!
//! Background and mask rules are always emitted. View-fragment rules point at
//! the served sprite instead of the inline data URI and are only emitted when
//! `output.view` is enabled.

use crate::config::StyleConfig;
use crate::sprite::{sprite_map, SpriteRegistry};

pub fn render(registry: &SpriteRegistry, config: &StyleConfig) -> String {
    let prefix = &config.prefix;

    let mut insert = sprite_map(registry, |name, sprite, _| {
        format!(
            ".{prefix}{name} {{\n\tbackground: url(\"{}\") center no-repeat;\n}}",
            sprite.data_uri
        )
    });

    insert.push_str(&sprite_map(registry, |name, sprite, _| {
        format!(
            ".{prefix}{name}-mask {{\n\tmask: url(\"{}\") center no-repeat;\n}}",
            sprite.data_uri
        )
    }));

    if config.output.view {
        let route = &config.route;
        insert.push_str(&sprite_map(registry, |name, _, _| {
            format!(
                ".{prefix}{name}-frag {{\n\tbackground: url('/{route}#{prefix}{name}-view') center no-repeat;\n}}"
            )
        }));
    }

    insert
}
