//! Less detached-ruleset output
//!
//! Less accepts a trailing `;` after the last ruleset, so every entry is
//! terminated the same way.

use super::px;
use crate::config::StyleConfig;
use crate::sprite::{sprite_map, SpriteRegistry};

pub fn render(registry: &SpriteRegistry, config: &StyleConfig) -> String {
    let mut insert = format!("@sprites-prefix: '{}';\n", config.prefix);

    insert.push_str("@sprites: {\n");
    insert.push_str(&sprite_map(registry, |name, sprite, _| {
        format!(
            "\t@{name}: {{\n\t\turi: \"{uri}\";\n\t\twidth: {width};\n\t\theight: {height};\n\t}};",
            uri = sprite.data_uri,
            width = px(sprite.width),
            height = px(sprite.height),
        )
    }));
    insert.push_str("}\n");

    insert
}
