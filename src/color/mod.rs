mod deprecated;
mod functional;
mod hex;
mod resolver;
mod semantic;
mod token;

use std::hash::{Hash, Hasher};

use crate::appearance::{Appearance, AppearanceSource};

pub use deprecated::{DEPRECATED_ALIASES, DeprecatedAlias, Migration};
pub use functional::FunctionalColorToken;
pub use hex::{HexColor, HexColorError, decode_rgba};
pub use resolver::{resolve, resolve_channels, resolve_pressed, resolve_with};
pub use semantic::SemanticColorToken;
pub use token::ColorToken;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum InteractionState {
    #[default]
    Normal,
    Pressed,
}

/// A design-system color: a base token plus the token used while pressed.
///
/// Handles never cache an appearance. Every `*_rgba`/`*_hsla` call decodes
/// against the appearance passed in, so views re-resolve on each render.
#[derive(Clone, Copy, Debug)]
pub struct BezierColor {
    base: ColorToken,
    pressed: ColorToken,
}

impl BezierColor {
    pub const fn new(base: ColorToken, pressed: ColorToken) -> Self {
        Self { base, pressed }
    }

    pub const fn functional(token: FunctionalColorToken) -> Self {
        Self::new(token.base(), token.pressed())
    }

    pub const fn semantic(token: SemanticColorToken) -> Self {
        Self::functional(token.delegate())
    }

    /// Looks up a color by its public camelCase name, including legacy names.
    pub fn named(name: &str) -> Option<Self> {
        if let Some(token) = FunctionalColorToken::from_name(name) {
            return Some(Self::functional(token));
        }
        if let Some(token) = SemanticColorToken::from_name(name) {
            return Some(Self::semantic(token));
        }
        DeprecatedAlias::find(name).map(|alias| {
            tracing::warn!(
                legacy = alias.legacy,
                replacement = alias.canonical.name(),
                "{}",
                alias.message()
            );
            alias.color()
        })
    }

    pub const fn base_token(&self) -> ColorToken {
        self.base
    }

    pub const fn pressed_token(&self) -> ColorToken {
        self.pressed
    }

    pub const fn light_hex(&self) -> &'static str {
        self.base.light_hex()
    }

    pub const fn dark_hex(&self) -> &'static str {
        self.base.dark_hex()
    }

    pub const fn pressed_light_hex(&self) -> &'static str {
        self.pressed.light_hex()
    }

    pub const fn pressed_dark_hex(&self) -> &'static str {
        self.pressed.dark_hex()
    }

    pub const fn hex(&self, appearance: Appearance) -> &'static str {
        self.base.hex(appearance)
    }

    pub fn channels(&self, appearance: Appearance) -> HexColor {
        resolve_channels(self.base, appearance)
    }

    pub fn rgba(&self, appearance: Appearance) -> gpui::Rgba {
        resolve(self.base, appearance)
    }

    pub fn pressed_rgba(&self, appearance: Appearance) -> gpui::Rgba {
        resolve_pressed(self, appearance)
    }

    pub fn hsla(&self, appearance: Appearance) -> gpui::Hsla {
        self.rgba(appearance).into()
    }

    pub fn pressed_hsla(&self, appearance: Appearance) -> gpui::Hsla {
        self.pressed_rgba(appearance).into()
    }

    pub fn rgba_for(&self, state: InteractionState, appearance: Appearance) -> gpui::Rgba {
        match state {
            InteractionState::Normal => self.rgba(appearance),
            InteractionState::Pressed => self.pressed_rgba(appearance),
        }
    }

    pub fn hsla_for(&self, state: InteractionState, appearance: Appearance) -> gpui::Hsla {
        self.rgba_for(state, appearance).into()
    }

    pub fn rgba_in<S>(&self, source: &S) -> gpui::Rgba
    where
        S: AppearanceSource + ?Sized,
    {
        self.rgba(source.appearance())
    }

    pub fn pressed_rgba_in<S>(&self, source: &S) -> gpui::Rgba
    where
        S: AppearanceSource + ?Sized,
    {
        self.pressed_rgba(source.appearance())
    }

    pub fn hsla_in<S>(&self, source: &S) -> gpui::Hsla
    where
        S: AppearanceSource + ?Sized,
    {
        self.hsla(source.appearance())
    }

    pub fn pressed_hsla_in<S>(&self, source: &S) -> gpui::Hsla
    where
        S: AppearanceSource + ?Sized,
    {
        self.pressed_hsla(source.appearance())
    }
}

// Pressed tokens do not take part in identity.
impl PartialEq for BezierColor {
    fn eq(&self, other: &Self) -> bool {
        self.light_hex() == other.light_hex() && self.dark_hex() == other.dark_hex()
    }
}

impl Eq for BezierColor {}

impl Hash for BezierColor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.light_hex().hash(state);
        self.dark_hex().hash(state);
    }
}

impl From<FunctionalColorToken> for BezierColor {
    fn from(token: FunctionalColorToken) -> Self {
        Self::functional(token)
    }
}

impl From<SemanticColorToken> for BezierColor {
    fn from(token: SemanticColorToken) -> Self {
        Self::semantic(token)
    }
}
