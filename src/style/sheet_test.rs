use std::time::Duration;

use crate::style::*;
use crate::theme::StyleTokens;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_hero_is_bounded_and_non_interactive() {
    let sheet = StyleSheet::default();
    let hero = sheet.rule(ElementRole::Hero);
    assert_eq!(hero.get("max-height"), Some("40vh"));
    assert_eq!(hero.get("pointer-events"), Some("none"));
}

#[test]
fn test_both_regions_start_invisible() {
    let sheet = StyleSheet::default();
    assert_eq!(sheet.rule(ElementRole::Hero).opacity_at(Duration::ZERO), 0.0);
    assert_eq!(sheet.rule(ElementRole::Tagline).opacity_at(Duration::ZERO), 0.0);
}

#[test]
fn test_staggered_timeline() {
    let sheet = StyleSheet::default();
    let hero = sheet.rule(ElementRole::Hero);
    let tagline = sheet.rule(ElementRole::Tagline);

    assert_eq!(hero.opacity_at(ms(2000)), 1.0);
    assert!(tagline.opacity_at(ms(2000)) < 1.0);
    assert_eq!(tagline.opacity_at(ms(2500)), 1.0);

    for t in [3000, 10_000, 60_000, 86_400_000] {
        assert_eq!(tagline.opacity_at(ms(t)), 1.0, "tagline reverted at {}ms", t);
    }
}

#[test]
fn test_tagline_always_fills_forwards() {
    let sheet = StyleSheet::build(&StyleTokens::default(), FillMode::None);
    let tagline = sheet.rule(ElementRole::Tagline);
    assert_eq!(tagline.animation().map(|a| a.fill_mode), Some(FillMode::Forwards));
}

#[test]
fn test_hero_without_fill_reverts() {
    let sheet = StyleSheet::build(&StyleTokens::default(), FillMode::None);
    let hero = sheet.rule(ElementRole::Hero);
    assert_eq!(hero.opacity_at(ms(2000)), 0.0);
}

#[test]
fn test_container_takes_colors_from_tokens() {
    let tokens = StyleTokens::default()
        .with_background("#000000")
        .with_foreground("#ffffff");
    let sheet = StyleSheet::build(&tokens, FillMode::Forwards);
    let container = sheet.rule(ElementRole::Container);
    assert_eq!(container.get("background-color"), Some("#000000"));
    assert_eq!(container.get("color"), Some("#ffffff"));
    assert_eq!(container.get("width"), Some("100vw"));
}

#[test]
fn test_tagline_margin_uses_spacing_unit() {
    let tokens = StyleTokens::default().with_spacing_unit(10);
    let sheet = StyleSheet::build(&tokens, FillMode::Forwards);
    assert_eq!(sheet.rule(ElementRole::Tagline).get("margin-top"), Some("20px"));
}

#[test]
fn test_single_shared_keyframes() {
    let sheet = StyleSheet::default();
    let keyframes = sheet.keyframes();
    assert_eq!(keyframes.len(), 1);
    assert_eq!(keyframes[0].name, FADE_IN);
}

#[test]
fn test_settled_at_is_tagline_end() {
    assert_eq!(StyleSheet::default().settled_at(), ms(2500));
}

#[test]
fn test_rule_css_formatting() {
    let rule = StyleRule::new().with("width", "1px").with_opacity(0.0);
    assert_eq!(rule.to_css(), "width: 1px; opacity: 0;");
}

#[test]
fn test_rules_css_uses_selectors() {
    let css = StyleSheet::default().rules_css();
    assert!(css.contains(".container {"));
    assert!(css.contains(".hero img {"));
    assert!(css.contains(".tagline {"));
}
