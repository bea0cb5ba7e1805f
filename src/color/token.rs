use crate::appearance::Appearance;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ColorToken {
    /// Same hex in every appearance.
    Plain(&'static str),
    ThemeablePair {
        light: &'static str,
        dark: &'static str,
    },
}

impl ColorToken {
    pub const fn plain(hex: &'static str) -> Self {
        Self::Plain(hex)
    }

    pub const fn pair(light: &'static str, dark: &'static str) -> Self {
        Self::ThemeablePair { light, dark }
    }

    pub const fn light_hex(self) -> &'static str {
        match self {
            Self::Plain(hex) => hex,
            Self::ThemeablePair { light, .. } => light,
        }
    }

    pub const fn dark_hex(self) -> &'static str {
        match self {
            Self::Plain(hex) => hex,
            Self::ThemeablePair { dark, .. } => dark,
        }
    }

    pub const fn hex(self, appearance: Appearance) -> &'static str {
        match appearance {
            Appearance::Light => self.light_hex(),
            Appearance::Dark => self.dark_hex(),
            Appearance::Unspecified => self.light_hex(),
        }
    }

    pub const fn is_adaptive(self) -> bool {
        matches!(self, Self::ThemeablePair { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_selects_side_by_appearance() {
        let token = ColorToken::pair("#1B64F2", "#4D8BFF");
        assert_eq!(token.hex(Appearance::Light), "#1B64F2");
        assert_eq!(token.hex(Appearance::Dark), "#4D8BFF");
        assert!(token.is_adaptive());
    }

    #[test]
    fn unspecified_appearance_falls_back_to_light() {
        let token = ColorToken::pair("#1B64F2", "#4D8BFF");
        assert_eq!(token.hex(Appearance::Unspecified), token.light_hex());
    }

    #[test]
    fn plain_token_ignores_appearance() {
        let token = ColorToken::plain("#FFFFFFCC");
        for appearance in [Appearance::Light, Appearance::Dark, Appearance::Unspecified] {
            assert_eq!(token.hex(appearance), "#FFFFFFCC");
        }
        assert_eq!(token.light_hex(), token.dark_hex());
        assert!(!token.is_adaptive());
    }
}
