use crate::prelude::*;

fn assert_send_sync<T: Send + Sync + 'static>() {}

#[test]
fn prelude_exports_color_surface() {
    assert_send_sync::<BezierColor>();
    assert_send_sync::<ColorToken>();
    assert_send_sync::<HexColor>();

    let color = BezierColor::fg_blue_normal();
    let _: gpui::Rgba = color.rgba(Appearance::Light);
    let _: gpui::Hsla = color.hsla(Appearance::Dark);
    let _: gpui::Rgba = color.rgba_for(InteractionState::Pressed, Appearance::Dark);
    let _: gpui::Hsla = color.hsla_in(&gpui::WindowAppearance::VibrantLight);
    let _ = BezierProvider::new().set_appearance(AppearancePreference::Dark);
}

#[test]
fn foundation_facade_exports_core_types() {
    let _ = crate::foundation::appearance::Appearance::Unspecified;
    let _ = crate::foundation::appearance::AppearancePreference::System;
    let _ = crate::foundation::color::HexColor::FALLBACK;
    let _ = crate::foundation::color::DEPRECATED_ALIASES;
    let _ = crate::foundation::color::Migration::Renamed;
    let _ = crate::foundation::tokens::PaletteCatalog::store();
    let _ = crate::foundation::provider::BezierProvider::default();
}

#[test]
fn accessors_are_usable_in_const_context() {
    const PRIMARY: BezierColor = BezierColor::primary_bg_normal();
    const DIM: BezierColor = BezierColor::dim_black_normal();
    const PRIMARY_HEX: &str = PRIMARY.hex(Appearance::Dark);

    assert_eq!(PRIMARY, BezierColor::bg_blue_normal());
    assert_eq!(PRIMARY_HEX, BezierColor::bg_blue_normal().dark_hex());
    assert!(DIM.base_token().is_adaptive());
}

#[test]
fn registry_size_matches_public_surface() {
    assert_eq!(FunctionalColorToken::ALL.len(), 197);
    assert_eq!(SemanticColorToken::ALL.len(), 45);

    let resolvable = FunctionalColorToken::ALL
        .iter()
        .map(|token| token.name())
        .chain(SemanticColorToken::ALL.iter().map(|token| token.name()))
        .chain(crate::color::DEPRECATED_ALIASES.iter().map(|alias| alias.legacy))
        .filter(|name| BezierColor::named(name).is_some())
        .count();
    assert_eq!(resolvable, 197 + 45 + 92);
}

#[test]
fn every_alias_matches_canonical_in_both_appearances() {
    for alias in crate::color::DEPRECATED_ALIASES {
        let legacy = BezierColor::named(alias.legacy).expect("legacy name resolves");
        let canonical =
            BezierColor::named(alias.canonical.name()).expect("canonical name resolves");
        for appearance in [Appearance::Light, Appearance::Dark] {
            assert_eq!(
                legacy.channels(appearance),
                canonical.channels(appearance),
                "{}",
                alias.legacy
            );
        }
    }
}
