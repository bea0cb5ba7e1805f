use super::hex::{HexColor, decode_rgba};
use super::token::ColorToken;
use super::BezierColor;
use crate::appearance::{Appearance, AppearanceSource};

pub fn resolve(token: ColorToken, appearance: Appearance) -> gpui::Rgba {
    decode_rgba(token.hex(appearance))
}

pub fn resolve_pressed(color: &BezierColor, appearance: Appearance) -> gpui::Rgba {
    resolve(color.pressed_token(), appearance)
}

pub fn resolve_channels(token: ColorToken, appearance: Appearance) -> HexColor {
    HexColor::decode(token.hex(appearance))
}

pub fn resolve_with<S>(token: ColorToken, source: &S) -> gpui::Rgba
where
    S: AppearanceSource + ?Sized,
{
    resolve(token, source.appearance())
}
