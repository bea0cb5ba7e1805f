use super::BezierColor;
use super::functional::FunctionalColorToken;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Migration {
    /// Straight rename to the canonical token.
    Renamed,
    /// A combined bg/text name that now has separate foreground and background
    /// tokens. The alias keeps resolving to the background one.
    Split { foreground: &'static str },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DeprecatedAlias {
    pub legacy: &'static str,
    pub canonical: FunctionalColorToken,
    pub migration: Migration,
}

impl DeprecatedAlias {
    pub fn find(legacy: &str) -> Option<&'static DeprecatedAlias> {
        DEPRECATED_ALIASES
            .iter()
            .find(|alias| alias.legacy == legacy)
    }

    pub const fn renamed_to(&self) -> Option<&'static str> {
        match self.migration {
            Migration::Renamed => Some(self.canonical.name()),
            Migration::Split { .. } => None,
        }
    }

    pub fn message(&self) -> String {
        match self.migration {
            Migration::Renamed => format!("Use `{}` instead.", self.canonical.name()),
            Migration::Split { foreground } => format!(
                "Use `{foreground}` for icon and text colors, and `{}` for background color instead.",
                self.canonical.name()
            ),
        }
    }

    pub const fn color(&self) -> BezierColor {
        BezierColor::functional(self.canonical)
    }
}

macro_rules! alias {
    (renamed $legacy:literal => $canonical:ident) => {
        DeprecatedAlias {
            legacy: $legacy,
            canonical: FunctionalColorToken::$canonical,
            migration: Migration::Renamed,
        }
    };
    (split $legacy:literal => $canonical:ident, fg $foreground:literal) => {
        DeprecatedAlias {
            legacy: $legacy,
            canonical: FunctionalColorToken::$canonical,
            migration: Migration::Split {
                foreground: $foreground,
            },
        }
    };
}

pub const DEPRECATED_ALIASES: &[DeprecatedAlias] = &[
    // Background
    alias!(renamed "bgTransparent" => BgWhiteAlphaTransparent),
    alias!(renamed "bgWhiteHigh" => BgWhiteHighest),
    alias!(renamed "bgWhiteLow" => BgWhiteHigher),
    alias!(renamed "bgWhiteDimDark" => BgWhiteAlphaLighter),
    alias!(renamed "bgWhiteDimLight" => BgWhiteAlphaLight),
    alias!(renamed "bgGreyDimLightest" => BgGreyAlphaLight),
    alias!(renamed "bgGnb" => BgGreyAlphaDarkest),
    alias!(renamed "bgNavi" => BgGreyAlphaDark),
    alias!(renamed "bgHeaderFloat" => BgWhiteAlphaLightest),
    alias!(renamed "bgHeader" => BgWhiteHigher),
    alias!(renamed "bgLounge" => BgGreyAlphaDarker),

    // Text
    alias!(renamed "txtBlackDarkest" => FgBlackDarkest),
    alias!(renamed "txtBlackDarker" => FgBlackDarker),
    alias!(renamed "txtBlackDark" => FgBlackDark),
    alias!(renamed "txtWhiteNormal" => FgWhiteNormal),
    alias!(renamed "txtBlackPure" => FgBlackPure),

    // Background & Text - Absolute
    alias!(split "bgtxtAbsoluteBlackDark" => BgAbsoluteBlackDark, fg "fgAbsoluteBlackDark"),
    alias!(split "bgtxtAbsoluteBlackNormal" => BgAbsoluteBlackNormal, fg "fgAbsoluteBlackNormal"),
    alias!(split "bgtxtAbsoluteBlackLight" => BgAbsoluteBlackLight, fg "fgAbsoluteBlackLight"),
    alias!(split "bgtxtAbsoluteBlackLighter" => BgAbsoluteBlackLighter,
        fg "fgAbsoluteBlackLighter"),
    alias!(split "bgtxtAbsoluteBlackLightest" => BgAbsoluteBlackLightest,
        fg "fgAbsoluteBlackLightest"),
    alias!(split "bgtxtAbsoluteWhiteDark" => BgAbsoluteWhiteDark, fg "fgAbsoluteWhiteDark"),
    alias!(split "bgtxtAbsoluteWhiteNormal" => BgAbsoluteWhiteNormal, fg "fgAbsoluteWhiteNormal"),
    alias!(split "bgtxtAbsoluteWhiteLight" => BgAbsoluteWhiteLight, fg "fgAbsoluteWhiteLight"),
    alias!(split "bgtxtAbsoluteWhiteLighter" => BgAbsoluteWhiteLighter,
        fg "fgAbsoluteWhiteLighter"),
    alias!(split "bgtxtAbsoluteWhiteLightest" => BgAbsoluteWhiteLightest,
        fg "fgAbsoluteWhiteLightest"),

    // Shadow for elevation
    alias!(renamed "shdwXlarge" => ShadowXlarge),
    alias!(renamed "shdwLarge" => ShadowLarge),
    alias!(renamed "shdwMedium" => ShadowMedium),
    alias!(renamed "shdwSmall" => ShadowSmall),
    alias!(renamed "shdwBase" => ShadowBase),
    alias!(renamed "shdwBaseInner" => ShadowBaseInner),

    // Border & Divider
    alias!(renamed "bdrBlackDark" => BgBlackDark),
    alias!(renamed "bdrBlackLight" => BgBlackLight),
    alias!(renamed "bdrBlackLightest" => BgBlackLightest),
    alias!(renamed "bdrGreyLight" => BgGreyLight),
    alias!(renamed "bdrWhite" => BgWhiteHighest),

    // Appendix, Blue
    alias!(split "bgtxtBlueLightest" => BgBlueLightest, fg "fgBlueLightest"),
    alias!(split "bgtxtBlueLighter" => BgBlueLighter, fg "fgBlueLighter"),
    alias!(split "bgtxtBlueLight" => BgBlueLight, fg "fgBlueLight"),
    alias!(split "bgtxtBlueNormal" => BgBlueNormal, fg "fgBlueNormal"),
    alias!(split "bgtxtBlueDark" => BgBlueDark, fg "fgBlueDark"),

    // Appendix, Cobalt
    alias!(split "bgtxtCobaltLightest" => BgCobaltLightest, fg "fgCobaltLightest"),
    alias!(split "bgtxtCobaltLighter" => BgCobaltLighter, fg "fgCobaltLighter"),
    alias!(split "bgtxtCobaltLight" => BgCobaltLight, fg "fgCobaltLight"),
    alias!(split "bgtxtCobaltNormal" => BgCobaltNormal, fg "fgCobaltNormal"),
    alias!(split "bgtxtCobaltDark" => BgCobaltDark, fg "fgCobaltDark"),

    // Appendix, Teal
    alias!(split "bgtxtTealLightest" => BgTealLightest, fg "fgTealLightest"),
    alias!(split "bgtxtTealLighter" => BgTealLighter, fg "fgTealLighter"),
    alias!(split "bgtxtTealLight" => BgTealLight, fg "fgTealLight"),
    alias!(split "bgtxtTealNormal" => BgTealNormal, fg "fgTealNormal"),
    alias!(split "bgtxtTealDark" => BgTealDark, fg "fgTealDark"),

    // Appendix, Green
    alias!(split "bgtxtGreenLightest" => BgGreenLightest, fg "fgGreenLightest"),
    alias!(split "bgtxtGreenLighter" => BgGreenLighter, fg "fgGreenLighter"),
    alias!(split "bgtxtGreenLight" => BgGreenLight, fg "fgGreenLight"),
    alias!(split "bgtxtGreenNormal" => BgGreenNormal, fg "fgGreenNormal"),
    alias!(split "bgtxtGreenDark" => BgGreenDark, fg "fgGreenDark"),

    // Appendix, Olive
    alias!(split "bgtxtOliveLightest" => BgOliveLightest, fg "fgOliveLightest"),
    alias!(split "bgtxtOliveLighter" => BgOliveLighter, fg "fgOliveLighter"),
    alias!(split "bgtxtOliveLight" => BgOliveLight, fg "fgOliveLight"),
    alias!(split "bgtxtOliveNormal" => BgOliveNormal, fg "fgOliveNormal"),
    alias!(split "bgtxtOliveDark" => BgOliveDark, fg "fgOliveDark"),

    // Appendix, Yellow
    alias!(split "bgtxtYellowLightest" => BgYellowLightest, fg "fgYellowLightest"),
    alias!(split "bgtxtYellowLighter" => BgYellowLighter, fg "fgYellowLighter"),
    alias!(split "bgtxtYellowLight" => BgYellowLight, fg "fgYellowLight"),
    alias!(split "bgtxtYellowNormal" => BgYellowNormal, fg "fgYellowNormal"),
    alias!(split "bgtxtYellowDark" => BgYellowDark, fg "fgYellowDark"),

    // Appendix, Orange
    alias!(split "bgtxtOrangeLightest" => BgOrangeLightest, fg "fgOrangeLightest"),
    alias!(split "bgtxtOrangeLighter" => BgOrangeLighter, fg "fgOrangeLighter"),
    alias!(split "bgtxtOrangeLight" => BgOrangeLight, fg "fgOrangeLight"),
    alias!(split "bgtxtOrangeNormal" => BgOrangeNormal, fg "fgOrangeNormal"),
    alias!(split "bgtxtOrangeDark" => BgOrangeDark, fg "fgOrangeDark"),

    // Appendix, Red
    alias!(split "bgtxtRedLightest" => BgRedLightest, fg "fgRedLightest"),
    alias!(split "bgtxtRedLighter" => BgRedLighter, fg "fgRedLighter"),
    alias!(split "bgtxtRedLight" => BgRedLight, fg "fgRedLight"),
    alias!(split "bgtxtRedNormal" => BgRedNormal, fg "fgRedNormal"),
    alias!(split "bgtxtRedDark" => BgRedDark, fg "fgRedDark"),

    // Appendix, Pink
    alias!(split "bgtxtPinkLightest" => BgPinkLightest, fg "fgPinkLightest"),
    alias!(split "bgtxtPinkLighter" => BgPinkLighter, fg "fgPinkLighter"),
    alias!(split "bgtxtPinkLight" => BgPinkLight, fg "fgPinkLight"),
    alias!(split "bgtxtPinkNormal" => BgPinkNormal, fg "fgPinkNormal"),
    alias!(split "bgtxtPinkDark" => BgPinkDark, fg "fgPinkDark"),

    // Appendix, Purple
    alias!(split "bgtxtPurpleLightest" => BgPurpleLightest, fg "fgPurpleLightest"),
    alias!(split "bgtxtPurpleLighter" => BgPurpleLighter, fg "fgPurpleLighter"),
    alias!(split "bgtxtPurpleLight" => BgPurpleLight, fg "fgPurpleLight"),
    alias!(split "bgtxtPurpleNormal" => BgPurpleNormal, fg "fgPurpleNormal"),
    alias!(split "bgtxtPurpleDark" => BgPurpleDark, fg "fgPurpleDark"),

    // Appendix, Navy
    alias!(split "bgtxtNavyLightest" => BgNavyLightest, fg "fgNavyLightest"),
    alias!(split "bgtxtNavyLighter" => BgNavyLighter, fg "fgNavyLighter"),
    alias!(split "bgtxtNavyLight" => BgNavyLight, fg "fgNavyLight"),
    alias!(split "bgtxtNavyNormal" => BgNavyNormal, fg "fgNavyNormal"),
    alias!(split "bgtxtNavyDark" => BgNavyDark, fg "fgNavyDark"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::Appearance;
    use crate::color::SemanticColorToken;
    use std::collections::HashSet;

    #[test]
    fn aliases_resolve_like_their_canonical_token() {
        for alias in DEPRECATED_ALIASES {
            let legacy = alias.color();
            let canonical = BezierColor::functional(alias.canonical);
            assert_eq!(legacy, canonical, "{}", alias.legacy);
            for appearance in [Appearance::Light, Appearance::Dark] {
                assert_eq!(
                    legacy.rgba(appearance),
                    canonical.rgba(appearance),
                    "{}",
                    alias.legacy
                );
            }
        }
    }

    #[test]
    fn bg_transparent_forwards_to_white_alpha_transparent() {
        let alias = DeprecatedAlias::find("bgTransparent").expect("bgTransparent alias");
        assert_eq!(alias.renamed_to(), Some("bgWhiteAlphaTransparent"));
        assert_eq!(alias.message(), "Use `bgWhiteAlphaTransparent` instead.");
        for appearance in [Appearance::Light, Appearance::Dark] {
            assert_eq!(
                alias.color().channels(appearance),
                BezierColor::bg_white_alpha_transparent().channels(appearance)
            );
        }
    }

    #[test]
    fn legacy_names_are_unique_and_retired() {
        let names = DEPRECATED_ALIASES
            .iter()
            .map(|alias| alias.legacy)
            .collect::<HashSet<_>>();
        assert_eq!(names.len(), DEPRECATED_ALIASES.len());
        assert_eq!(DEPRECATED_ALIASES.len(), 92);

        for alias in DEPRECATED_ALIASES {
            assert_eq!(FunctionalColorToken::from_name(alias.legacy), None);
            assert_eq!(SemanticColorToken::from_name(alias.legacy), None);
        }
    }

    #[test]
    fn split_aliases_point_at_background_tokens() {
        for alias in DEPRECATED_ALIASES {
            match alias.migration {
                Migration::Renamed => {
                    assert_eq!(alias.renamed_to(), Some(alias.canonical.name()));
                }
                Migration::Split { foreground } => {
                    assert_eq!(alias.renamed_to(), None, "{}", alias.legacy);
                    let step = alias
                        .canonical
                        .name()
                        .strip_prefix("bg")
                        .expect("split alias targets a background token");
                    assert_eq!(foreground, format!("fg{step}"), "{}", alias.legacy);
                    assert_eq!(alias.legacy, format!("bgtxt{step}"));
                }
            }
        }
    }

    #[test]
    fn split_message_names_both_replacements() {
        let alias = DeprecatedAlias::find("bgtxtBlueNormal").expect("bgtxtBlueNormal alias");
        assert_eq!(
            alias.message(),
            "Use `fgBlueNormal` for icon and text colors, and `bgBlueNormal` for background color instead."
        );
        assert_eq!(alias.color(), BezierColor::bg_blue_normal());
    }

    #[test]
    fn named_lookup_accepts_legacy_names() {
        assert_eq!(
            BezierColor::named("txtBlackPure"),
            Some(BezierColor::fg_black_pure())
        );
        assert_eq!(
            BezierColor::named("shdwBaseInner"),
            Some(BezierColor::shadow_base_inner())
        );
        assert_eq!(
            BezierColor::named("bdrWhite"),
            Some(BezierColor::bg_white_highest())
        );
        assert!(DeprecatedAlias::find("fgBlueNormal").is_none());
    }
}
