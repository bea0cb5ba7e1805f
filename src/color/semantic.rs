use super::BezierColor;
use super::functional::FunctionalColorToken;

macro_rules! semantic_color_tokens {
    ($($variant:ident => $name:literal, $accessor:ident, $target:ident;)*) => {
        /// Purpose-named roles. Each one forwards to a functional token, so a role
        /// can move to another palette entry without touching call sites.
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
        pub enum SemanticColorToken {
            $($variant,)*
        }

        impl SemanticColorToken {
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)*
                    _ => None,
                }
            }

            pub const fn delegate(self) -> FunctionalColorToken {
                match self {
                    $(Self::$variant => FunctionalColorToken::$target,)*
                }
            }
        }

        impl BezierColor {
            $(
                pub const fn $accessor() -> Self {
                    Self::semantic(SemanticColorToken::$variant)
                }
            )*
        }
    };
}

semantic_color_tokens! {
    // Primary
    PrimaryBgDark => "primaryBgDark", primary_bg_dark, BgBlueDark;
    PrimaryBgNormal => "primaryBgNormal", primary_bg_normal, BgBlueNormal;
    PrimaryBgLight => "primaryBgLight", primary_bg_light, BgBlueLight;
    PrimaryBgLighter => "primaryBgLighter", primary_bg_lighter, BgBlueLighter;
    PrimaryBgLightest => "primaryBgLightest", primary_bg_lightest, BgBlueLightest;
    PrimaryBgTransparent => "primaryBgTransparent", primary_bg_transparent, BgBlueTransparent;
    PrimaryFgNormal => "primaryFgNormal", primary_fg_normal, FgBlueNormal;
    PrimaryFgLight => "primaryFgLight", primary_fg_light, FgBlueLight;
    PrimaryFgDark => "primaryFgDark", primary_fg_dark, FgBlueDark;

    // Critical
    CriticalBgDark => "criticalBgDark", critical_bg_dark, BgRedDark;
    CriticalBgNormal => "criticalBgNormal", critical_bg_normal, BgRedNormal;
    CriticalBgLight => "criticalBgLight", critical_bg_light, BgRedLight;
    CriticalBgLighter => "criticalBgLighter", critical_bg_lighter, BgRedLighter;
    CriticalBgLightest => "criticalBgLightest", critical_bg_lightest, BgRedLightest;
    CriticalBgTransparent => "criticalBgTransparent", critical_bg_transparent, BgRedTransparent;
    CriticalFgNormal => "criticalFgNormal", critical_fg_normal, FgRedNormal;
    CriticalFgLight => "criticalFgLight", critical_fg_light, FgRedLight;
    CriticalFgDark => "criticalFgDark", critical_fg_dark, FgRedDark;

    // Warning
    WarningBgDark => "warningBgDark", warning_bg_dark, BgOrangeDark;
    WarningBgNormal => "warningBgNormal", warning_bg_normal, BgOrangeNormal;
    WarningBgLight => "warningBgLight", warning_bg_light, BgOrangeLight;
    WarningBgLighter => "warningBgLighter", warning_bg_lighter, BgOrangeLighter;
    WarningBgLightest => "warningBgLightest", warning_bg_lightest, BgOrangeLightest;
    WarningBgTransparent => "warningBgTransparent", warning_bg_transparent, BgOrangeTransparent;
    WarningFgNormal => "warningFgNormal", warning_fg_normal, FgOrangeNormal;
    WarningFgLight => "warningFgLight", warning_fg_light, FgOrangeLight;
    WarningFgDark => "warningFgDark", warning_fg_dark, FgOrangeDark;

    // Accent
    AccentBgDark => "accentBgDark", accent_bg_dark, BgCobaltDark;
    AccentBgNormal => "accentBgNormal", accent_bg_normal, BgCobaltNormal;
    AccentBgLight => "accentBgLight", accent_bg_light, BgCobaltLight;
    AccentBgLighter => "accentBgLighter", accent_bg_lighter, BgCobaltLighter;
    AccentBgLightest => "accentBgLightest", accent_bg_lightest, BgCobaltLightest;
    AccentBgTransparent => "accentBgTransparent", accent_bg_transparent, BgCobaltTransparent;
    AccentFgNormal => "accentFgNormal", accent_fg_normal, FgCobaltNormal;
    AccentFgLight => "accentFgLight", accent_fg_light, FgCobaltLight;
    AccentFgDark => "accentFgDark", accent_fg_dark, FgCobaltDark;

    // Success
    SuccessBgDark => "successBgDark", success_bg_dark, BgGreenDark;
    SuccessBgNormal => "successBgNormal", success_bg_normal, BgGreenNormal;
    SuccessBgLight => "successBgLight", success_bg_light, BgGreenLight;
    SuccessBgLighter => "successBgLighter", success_bg_lighter, BgGreenLighter;
    SuccessBgLightest => "successBgLightest", success_bg_lightest, BgGreenLightest;
    SuccessBgTransparent => "successBgTransparent", success_bg_transparent, BgGreenTransparent;
    SuccessFgNormal => "successFgNormal", success_fg_normal, FgGreenNormal;
    SuccessFgLight => "successFgLight", success_fg_light, FgGreenLight;
    SuccessFgDark => "successFgDark", success_fg_dark, FgGreenDark;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::Appearance;

    #[test]
    fn semantic_tokens_resolve_like_their_delegate() {
        for token in SemanticColorToken::ALL {
            let semantic = BezierColor::semantic(*token);
            let functional = BezierColor::functional(token.delegate());
            assert_eq!(semantic, functional, "{}", token.name());
            for appearance in [Appearance::Light, Appearance::Dark, Appearance::Unspecified] {
                assert_eq!(
                    semantic.rgba(appearance),
                    functional.rgba(appearance),
                    "{}",
                    token.name()
                );
                assert_eq!(
                    semantic.pressed_rgba(appearance),
                    functional.pressed_rgba(appearance),
                    "{}",
                    token.name()
                );
            }
        }
    }

    #[test]
    fn primary_fg_normal_is_blue() {
        assert_eq!(
            SemanticColorToken::PrimaryFgNormal.delegate(),
            FunctionalColorToken::FgBlueNormal
        );
        for appearance in [Appearance::Light, Appearance::Dark] {
            assert_eq!(
                BezierColor::primary_fg_normal().channels(appearance),
                BezierColor::fg_blue_normal().channels(appearance)
            );
        }
    }

    #[test]
    fn roles_map_onto_their_hue() {
        let hues = [
            ("primary", "Blue"),
            ("critical", "Red"),
            ("warning", "Orange"),
            ("accent", "Cobalt"),
            ("success", "Green"),
        ];
        for token in SemanticColorToken::ALL {
            let (role, hue) = hues
                .iter()
                .find(|(role, _)| token.name().starts_with(role))
                .expect("semantic token has a known role");
            let suffix = &token.name()[role.len()..];
            let layer = &suffix[..2];
            let step = &suffix[2..];
            assert_eq!(
                token.delegate().name(),
                format!("{}{hue}{step}", layer.to_lowercase()),
                "{}",
                token.name()
            );
        }
    }

    #[test]
    fn semantic_names_are_distinct_from_functional_names() {
        assert_eq!(SemanticColorToken::ALL.len(), 45);
        for token in SemanticColorToken::ALL {
            assert_eq!(SemanticColorToken::from_name(token.name()), Some(*token));
            assert_eq!(FunctionalColorToken::from_name(token.name()), None);
        }
    }
}
