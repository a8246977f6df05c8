//! Integration tests for stylesheet generation across all dialects

use pretty_assertions::assert_eq;

use spritemap_styles::{
    generate, StyleConfig, StyleEmitter, StylesLang, SvgSource, GENERATED_BANNER,
};

fn icons() -> Vec<(&'static str, SvgSource)> {
    vec![
        (
            "a",
            SvgSource::new(
                r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 16"><path fill="#fff" d="M0 0h24v16H0z"/></svg>"##,
                24.0,
                16.0,
                "0 0 24 16",
            ),
        ),
        (
            "b",
            SvgSource::new(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 8 8"/>"#,
                8.0,
                8.0,
                "0 0 8 8",
            ),
        ),
    ]
}

fn config(lang: StylesLang) -> StyleConfig {
    StyleConfig::new()
        .with_prefix("icon-")
        .with_route("assets/sprites.svg")
        .with_lang(lang)
}

/// Rule selectors of CSS output, in order
fn selectors(css: &str) -> Vec<&str> {
    css.lines()
        .filter_map(|line| line.strip_suffix(" {"))
        .collect()
}

#[test]
fn test_generate_is_deterministic() {
    for lang in StylesLang::ALL {
        let emitter = StyleEmitter::new(icons(), config(lang));
        let first = emitter.generate().expect("first");
        let second = emitter.generate().expect("second");
        assert_eq!(first, second, "{lang}");
        assert_eq!(first, generate(icons(), config(lang)).expect("fresh"), "{lang}");
    }
}

#[test]
fn test_banner_is_first() {
    for lang in StylesLang::ALL {
        let output = generate(icons(), config(lang)).expect("generate");
        assert!(output.starts_with("/* Generated by spritemap-styles */\n\n"), "{lang}");
        assert!(output.starts_with(GENERATED_BANNER));
    }
}

#[test]
fn test_disabled_styles_is_empty() {
    let output = generate(icons(), config(StylesLang::Scss).without_styles()).expect("generate");
    assert_eq!(output, "");
}

#[test]
fn test_order_follows_registry() {
    let reversed: Vec<_> = icons().into_iter().rev().collect();
    let keys = [
        (StylesLang::Scss, "'b': (", "'a': ("),
        (StylesLang::Styl, "'b': {", "'a': {"),
        (StylesLang::Less, "@b: {", "@a: {"),
        (StylesLang::Css, ".icon-b {", ".icon-a {"),
    ];

    for (lang, first, second) in keys {
        let output = generate(reversed.clone(), config(lang)).expect("generate");
        let first_at = output.find(first).expect(first);
        let second_at = output.find(second).expect(second);
        assert!(first_at < second_at, "{lang}: {first} should precede {second}");
    }
}

#[test]
fn test_css_two_passes_without_view() {
    let css = generate(icons(), config(StylesLang::Css).with_output_view(false)).expect("generate");

    insta::assert_debug_snapshot!(selectors(&css), @r#"
    [
        ".icon-a",
        ".icon-b",
        ".icon-a-mask",
        ".icon-b-mask",
    ]
    "#);
    assert!(!css.contains("-frag"));
}

#[test]
fn test_css_three_passes_with_view() {
    let css = generate(icons(), config(StylesLang::Css).with_output_view(true)).expect("generate");

    insta::assert_debug_snapshot!(selectors(&css), @r#"
    [
        ".icon-a",
        ".icon-b",
        ".icon-a-mask",
        ".icon-b-mask",
        ".icon-a-frag",
        ".icon-b-frag",
    ]
    "#);
    assert!(css.contains("background: url('/assets/sprites.svg#icon-a-view') center no-repeat;"));
    assert!(css.contains("background: url('/assets/sprites.svg#icon-b-view') center no-repeat;"));
}

#[test]
fn test_css_rules_use_data_uri() {
    let css = generate(icons(), config(StylesLang::Css)).expect("generate");
    let uri = "data:image/svg+xml,%3csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 8 8'/%3e";

    assert!(css.contains(&format!(".icon-b {{\n\tbackground: url(\"{uri}\") center no-repeat;\n}}")));
    assert!(css.contains(&format!(".icon-b-mask {{\n\tmask: url(\"{uri}\") center no-repeat;\n}}")));
    assert!(css.contains("fill='white'"));
}

#[test]
fn test_last_entry_separator() {
    let scss = generate(icons(), config(StylesLang::Scss)).expect("scss");
    assert_eq!(scss.matches("\n\t),\n").count(), 1);
    assert!(scss.contains("\n\t)\n);\n"));

    let styl = generate(icons(), config(StylesLang::Styl)).expect("styl");
    assert_eq!(styl.matches("\n\t},\n").count(), 1);
    assert!(styl.contains("\n\t}\n}\n"));

    let less = generate(icons(), config(StylesLang::Less)).expect("less");
    assert_eq!(less.matches("\n\t};\n").count(), 2);
}

#[test]
fn test_numeric_pass_through() {
    let scss = generate(icons(), config(StylesLang::Scss)).expect("scss");
    assert!(scss.contains("width: 24px,\n\t\theight: 16px\n"));

    let styl = generate(icons(), config(StylesLang::Styl)).expect("styl");
    assert!(styl.contains("width: 24px,\n\t\theight: 16px\n"));

    let less = generate(icons(), config(StylesLang::Less)).expect("less");
    assert!(less.contains("width: 24px;\n\t\theight: 16px;\n"));

    let fractional = [("f", SvgSource::new("<svg/>", 10.25, 0.5, "0 0 10.25 0.5"))];
    let less = generate(fractional, config(StylesLang::Less)).expect("less");
    assert!(less.contains("width: 10.25px;\n\t\theight: 0.5px;\n"));
}

#[test]
fn test_route_placeholder_substituted() {
    for lang in [StylesLang::Scss, StylesLang::Styl, StylesLang::Less] {
        let output = generate(icons(), config(lang)).expect("generate");
        assert!(output.contains("assets/sprites.svg"), "{lang}");
        assert!(!output.contains("%route%"), "{lang}");
    }
}

#[test]
fn test_scss_full_layout() {
    let one = [("x", SvgSource::new("<g/>", 1.0, 2.0, "0 0 1 2"))];
    let scss = generate(one, config(StylesLang::Scss)).expect("scss");

    let (head, template) = scss
        .split_once(");\n\n")
        .expect("map is followed by a blank line and template");
    assert_eq!(
        head,
        "/* Generated by spritemap-styles */\n\n\
         $sprites-prefix: 'icon-';\n\
         $sprites: (\n\
         \t'x': (\n\
         \t\turi: \"data:image/svg+xml,%3cg/%3e\",\n\
         \t\twidth: 1px,\n\
         \t\theight: 2px\n\
         \t)\n"
    );
    assert!(template.contains("@mixin sprite("));
}
