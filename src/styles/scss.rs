//! SCSS map output

use super::px;
use crate::config::StyleConfig;
use crate::sprite::{sprite_map, SpriteRegistry};

/// Render a `$sprites` map keyed by sprite name
pub fn render(registry: &SpriteRegistry, config: &StyleConfig) -> String {
    let mut insert = format!("$sprites-prefix: '{}';\n", config.prefix);

    insert.push_str("$sprites: (\n");
    insert.push_str(&sprite_map(registry, |name, sprite, is_last| {
        format!(
            "\t'{name}': (\n\t\turi: \"{uri}\",\n\t\twidth: {width},\n\t\theight: {height}\n\t{close}",
            uri = sprite.data_uri,
            width = px(sprite.width),
            height = px(sprite.height),
            close = if is_last { ")" } else { ")," },
        )
    }));
    insert.push_str(");\n");

    insert
}
