use super::BezierColor;
use super::token::ColorToken;
use crate::tokens::PaletteKey::{self, *};
use crate::tokens::{PaletteCatalog, WHITE};

type Swatch = (PaletteKey, usize);

const fn hue(key: PaletteKey, light: usize, dark: usize) -> ColorToken {
    ColorToken::pair(
        PaletteCatalog::swatch(key, light),
        PaletteCatalog::swatch(key, dark),
    )
}

const fn mixed(light: Swatch, dark: Swatch) -> ColorToken {
    ColorToken::pair(
        PaletteCatalog::swatch(light.0, light.1),
        PaletteCatalog::swatch(dark.0, dark.1),
    )
}

const fn fixed(key: PaletteKey, stop: usize) -> ColorToken {
    ColorToken::plain(PaletteCatalog::swatch(key, stop))
}

const fn white_surface(dark: usize) -> ColorToken {
    ColorToken::pair(WHITE, PaletteCatalog::swatch(Grey, dark))
}

const fn tint(key: PaletteKey) -> ColorToken {
    let scale = PaletteCatalog::translucent(key);
    ColorToken::pair(scale[0], scale[2])
}

const fn tint_pressed(key: PaletteKey) -> ColorToken {
    let scale = PaletteCatalog::translucent(key);
    ColorToken::pair(scale[1], scale[3])
}

macro_rules! functional_color_tokens {
    ($($variant:ident => $name:literal, $accessor:ident, $base:expr, $pressed:expr;)*) => {
        #[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
        pub enum FunctionalColorToken {
            $($variant,)*
        }

        impl FunctionalColorToken {
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

            pub const fn base(self) -> ColorToken {
                match self {
                    $(Self::$variant => $base,)*
                }
            }

            pub const fn pressed(self) -> ColorToken {
                match self {
                    $(Self::$variant => $pressed,)*
                }
            }
        }

        impl BezierColor {
            $(
                pub const fn $accessor() -> Self {
                    Self::functional(FunctionalColorToken::$variant)
                }
            )*
        }
    };
}

functional_color_tokens! {
    // Foreground blue
    FgBlueNormal => "fgBlueNormal", fg_blue_normal, hue(Blue, 7, 5), hue(Blue, 8, 4);
    FgBlueLight => "fgBlueLight", fg_blue_light, hue(Blue, 5, 6), hue(Blue, 6, 7);
    FgBlueDark => "fgBlueDark", fg_blue_dark, hue(Blue, 8, 3), hue(Blue, 9, 2);

    // Foreground cobalt
    FgCobaltNormal => "fgCobaltNormal", fg_cobalt_normal, hue(Cobalt, 7, 5), hue(Cobalt, 8, 4);
    FgCobaltLight => "fgCobaltLight", fg_cobalt_light, hue(Cobalt, 5, 6), hue(Cobalt, 6, 7);
    FgCobaltDark => "fgCobaltDark", fg_cobalt_dark, hue(Cobalt, 8, 3), hue(Cobalt, 9, 2);

    // Foreground red
    FgRedNormal => "fgRedNormal", fg_red_normal, hue(Red, 7, 5), hue(Red, 8, 4);
    FgRedLight => "fgRedLight", fg_red_light, hue(Red, 5, 6), hue(Red, 6, 7);
    FgRedDark => "fgRedDark", fg_red_dark, hue(Red, 8, 3), hue(Red, 9, 2);

    // Foreground orange
    FgOrangeNormal => "fgOrangeNormal", fg_orange_normal, hue(Orange, 7, 5), hue(Orange, 8, 4);
    FgOrangeLight => "fgOrangeLight", fg_orange_light, hue(Orange, 5, 6), hue(Orange, 6, 7);
    FgOrangeDark => "fgOrangeDark", fg_orange_dark, hue(Orange, 8, 3), hue(Orange, 9, 2);

    // Foreground green
    FgGreenNormal => "fgGreenNormal", fg_green_normal, hue(Green, 7, 5), hue(Green, 8, 4);
    FgGreenLight => "fgGreenLight", fg_green_light, hue(Green, 5, 6), hue(Green, 6, 7);
    FgGreenDark => "fgGreenDark", fg_green_dark, hue(Green, 8, 3), hue(Green, 9, 2);

    // Foreground teal
    FgTealNormal => "fgTealNormal", fg_teal_normal, hue(Teal, 7, 5), hue(Teal, 8, 4);
    FgTealLight => "fgTealLight", fg_teal_light, hue(Teal, 5, 6), hue(Teal, 6, 7);
    FgTealDark => "fgTealDark", fg_teal_dark, hue(Teal, 8, 3), hue(Teal, 9, 2);

    // Foreground olive
    FgOliveNormal => "fgOliveNormal", fg_olive_normal, hue(Olive, 7, 5), hue(Olive, 8, 4);
    FgOliveLight => "fgOliveLight", fg_olive_light, hue(Olive, 5, 6), hue(Olive, 6, 7);
    FgOliveDark => "fgOliveDark", fg_olive_dark, hue(Olive, 8, 3), hue(Olive, 9, 2);

    // Foreground yellow
    FgYellowNormal => "fgYellowNormal", fg_yellow_normal, hue(Yellow, 7, 5), hue(Yellow, 8, 4);
    FgYellowLight => "fgYellowLight", fg_yellow_light, hue(Yellow, 5, 6), hue(Yellow, 6, 7);
    FgYellowDark => "fgYellowDark", fg_yellow_dark, hue(Yellow, 8, 3), hue(Yellow, 9, 2);

    // Foreground pink
    FgPinkNormal => "fgPinkNormal", fg_pink_normal, hue(Pink, 7, 5), hue(Pink, 8, 4);
    FgPinkLight => "fgPinkLight", fg_pink_light, hue(Pink, 5, 6), hue(Pink, 6, 7);
    FgPinkDark => "fgPinkDark", fg_pink_dark, hue(Pink, 8, 3), hue(Pink, 9, 2);

    // Foreground purple
    FgPurpleNormal => "fgPurpleNormal", fg_purple_normal, hue(Purple, 7, 5), hue(Purple, 8, 4);
    FgPurpleLight => "fgPurpleLight", fg_purple_light, hue(Purple, 5, 6), hue(Purple, 6, 7);
    FgPurpleDark => "fgPurpleDark", fg_purple_dark, hue(Purple, 8, 3), hue(Purple, 9, 2);

    // Foreground navy
    FgNavyNormal => "fgNavyNormal", fg_navy_normal, hue(Navy, 7, 5), hue(Navy, 8, 4);
    FgNavyLight => "fgNavyLight", fg_navy_light, hue(Navy, 5, 6), hue(Navy, 6, 7);
    FgNavyDark => "fgNavyDark", fg_navy_dark, hue(Navy, 8, 3), hue(Navy, 9, 2);

    // Foreground grey
    FgGreyDarkest => "fgGreyDarkest", fg_grey_darkest, hue(Grey, 9, 0), hue(Grey, 8, 1);
    FgGreyDark => "fgGreyDark", fg_grey_dark, hue(Grey, 8, 2), hue(Grey, 9, 1);
    FgGreyNormal => "fgGreyNormal", fg_grey_normal, hue(Grey, 6, 3), hue(Grey, 7, 2);
    FgGreyLight => "fgGreyLight", fg_grey_light, hue(Grey, 5, 4), hue(Grey, 6, 3);
    FgGreyLighter => "fgGreyLighter", fg_grey_lighter, hue(Grey, 4, 5), hue(Grey, 5, 4);
    FgGreyLightest => "fgGreyLightest", fg_grey_lightest, hue(Grey, 3, 6), hue(Grey, 4, 5);

    // Foreground grey alpha
    FgGreyAlphaDarkest => "fgGreyAlphaDarkest", fg_grey_alpha_darkest,
        mixed((GreyAlpha, 8), (WhiteAlpha, 8)), mixed((GreyAlpha, 9), (WhiteAlpha, 9));
    FgGreyAlphaDarker => "fgGreyAlphaDarker", fg_grey_alpha_darker,
        mixed((GreyAlpha, 7), (WhiteAlpha, 7)), mixed((GreyAlpha, 8), (WhiteAlpha, 8));
    FgGreyAlphaDark => "fgGreyAlphaDark", fg_grey_alpha_dark,
        mixed((GreyAlpha, 6), (WhiteAlpha, 6)), mixed((GreyAlpha, 7), (WhiteAlpha, 7));
    FgGreyAlphaLight => "fgGreyAlphaLight", fg_grey_alpha_light,
        mixed((GreyAlpha, 4), (WhiteAlpha, 4)), mixed((GreyAlpha, 5), (WhiteAlpha, 5));

    // Foreground white
    FgWhiteNormal => "fgWhiteNormal", fg_white_normal,
        mixed((WhiteAlpha, 9), (WhiteAlpha, 8)), mixed((WhiteAlpha, 8), (WhiteAlpha, 7));

    // Foreground black
    FgBlackLightest => "fgBlackLightest", fg_black_lightest,
        mixed((BlackAlpha, 3), (WhiteAlpha, 3)), mixed((BlackAlpha, 4), (WhiteAlpha, 4));
    FgBlackLight => "fgBlackLight", fg_black_light,
        mixed((BlackAlpha, 5), (WhiteAlpha, 5)), mixed((BlackAlpha, 6), (WhiteAlpha, 6));
    FgBlackDark => "fgBlackDark", fg_black_dark,
        mixed((BlackAlpha, 6), (WhiteAlpha, 6)), mixed((BlackAlpha, 7), (WhiteAlpha, 7));
    FgBlackDarker => "fgBlackDarker", fg_black_darker,
        mixed((BlackAlpha, 7), (WhiteAlpha, 7)), mixed((BlackAlpha, 8), (WhiteAlpha, 8));
    FgBlackDarkest => "fgBlackDarkest", fg_black_darkest,
        mixed((BlackAlpha, 8), (WhiteAlpha, 8)), mixed((BlackAlpha, 9), (WhiteAlpha, 9));
    FgBlackPure => "fgBlackPure", fg_black_pure,
        mixed((BlackAlpha, 9), (WhiteAlpha, 9)), mixed((BlackAlpha, 8), (WhiteAlpha, 8));

    // Foreground absolute white
    FgAbsoluteWhiteLightest => "fgAbsoluteWhiteLightest", fg_absolute_white_lightest,
        fixed(WhiteAlpha, 3), fixed(WhiteAlpha, 4);
    FgAbsoluteWhiteLighter => "fgAbsoluteWhiteLighter", fg_absolute_white_lighter,
        fixed(WhiteAlpha, 5), fixed(WhiteAlpha, 6);
    FgAbsoluteWhiteLight => "fgAbsoluteWhiteLight", fg_absolute_white_light,
        fixed(WhiteAlpha, 6), fixed(WhiteAlpha, 7);
    FgAbsoluteWhiteNormal => "fgAbsoluteWhiteNormal", fg_absolute_white_normal,
        fixed(WhiteAlpha, 8), fixed(WhiteAlpha, 9);
    FgAbsoluteWhiteDark => "fgAbsoluteWhiteDark", fg_absolute_white_dark,
        fixed(WhiteAlpha, 9), fixed(WhiteAlpha, 8);

    // Foreground absolute black
    FgAbsoluteBlackLightest => "fgAbsoluteBlackLightest", fg_absolute_black_lightest,
        fixed(BlackAlpha, 3), fixed(BlackAlpha, 4);
    FgAbsoluteBlackLighter => "fgAbsoluteBlackLighter", fg_absolute_black_lighter,
        fixed(BlackAlpha, 5), fixed(BlackAlpha, 6);
    FgAbsoluteBlackLight => "fgAbsoluteBlackLight", fg_absolute_black_light,
        fixed(BlackAlpha, 6), fixed(BlackAlpha, 7);
    FgAbsoluteBlackNormal => "fgAbsoluteBlackNormal", fg_absolute_black_normal,
        fixed(BlackAlpha, 8), fixed(BlackAlpha, 9);
    FgAbsoluteBlackDark => "fgAbsoluteBlackDark", fg_absolute_black_dark,
        fixed(BlackAlpha, 9), fixed(BlackAlpha, 8);

    // Background blue
    BgBlueNormal => "bgBlueNormal", bg_blue_normal, hue(Blue, 7, 6), hue(Blue, 8, 7);
    BgBlueLight => "bgBlueLight", bg_blue_light, hue(Blue, 4, 5), hue(Blue, 5, 6);
    BgBlueLighter => "bgBlueLighter", bg_blue_lighter, hue(Blue, 2, 8), hue(Blue, 3, 7);
    BgBlueLightest => "bgBlueLightest", bg_blue_lightest, hue(Blue, 1, 9), hue(Blue, 2, 8);
    BgBlueDark => "bgBlueDark", bg_blue_dark, hue(Blue, 8, 4), hue(Blue, 9, 3);
    BgBlueShadeLighter => "bgBlueShadeLighter", bg_blue_shade_lighter,
        hue(Blue, 0, 9), hue(Blue, 1, 8);
    BgBlueShadeNormal => "bgBlueShadeNormal", bg_blue_shade_normal,
        hue(Blue, 3, 8), hue(Blue, 4, 7);
    BgBlueTransparent => "bgBlueTransparent", bg_blue_transparent, tint(Blue), tint_pressed(Blue);

    // Background cobalt
    BgCobaltNormal => "bgCobaltNormal", bg_cobalt_normal, hue(Cobalt, 7, 6), hue(Cobalt, 8, 7);
    BgCobaltLight => "bgCobaltLight", bg_cobalt_light, hue(Cobalt, 4, 5), hue(Cobalt, 5, 6);
    BgCobaltLighter => "bgCobaltLighter", bg_cobalt_lighter, hue(Cobalt, 2, 8), hue(Cobalt, 3, 7);
    BgCobaltLightest => "bgCobaltLightest", bg_cobalt_lightest,
        hue(Cobalt, 1, 9), hue(Cobalt, 2, 8);
    BgCobaltDark => "bgCobaltDark", bg_cobalt_dark, hue(Cobalt, 8, 4), hue(Cobalt, 9, 3);
    BgCobaltShadeLighter => "bgCobaltShadeLighter", bg_cobalt_shade_lighter,
        hue(Cobalt, 0, 9), hue(Cobalt, 1, 8);
    BgCobaltShadeNormal => "bgCobaltShadeNormal", bg_cobalt_shade_normal,
        hue(Cobalt, 3, 8), hue(Cobalt, 4, 7);
    BgCobaltTransparent => "bgCobaltTransparent", bg_cobalt_transparent,
        tint(Cobalt), tint_pressed(Cobalt);

    // Background red
    BgRedNormal => "bgRedNormal", bg_red_normal, hue(Red, 7, 6), hue(Red, 8, 7);
    BgRedLight => "bgRedLight", bg_red_light, hue(Red, 4, 5), hue(Red, 5, 6);
    BgRedLighter => "bgRedLighter", bg_red_lighter, hue(Red, 2, 8), hue(Red, 3, 7);
    BgRedLightest => "bgRedLightest", bg_red_lightest, hue(Red, 1, 9), hue(Red, 2, 8);
    BgRedDark => "bgRedDark", bg_red_dark, hue(Red, 8, 4), hue(Red, 9, 3);
    BgRedShadeLighter => "bgRedShadeLighter", bg_red_shade_lighter, hue(Red, 0, 9), hue(Red, 1, 8);
    BgRedShadeNormal => "bgRedShadeNormal", bg_red_shade_normal, hue(Red, 3, 8), hue(Red, 4, 7);
    BgRedTransparent => "bgRedTransparent", bg_red_transparent, tint(Red), tint_pressed(Red);

    // Background orange
    BgOrangeNormal => "bgOrangeNormal", bg_orange_normal, hue(Orange, 7, 6), hue(Orange, 8, 7);
    BgOrangeLight => "bgOrangeLight", bg_orange_light, hue(Orange, 4, 5), hue(Orange, 5, 6);
    BgOrangeLighter => "bgOrangeLighter", bg_orange_lighter, hue(Orange, 2, 8), hue(Orange, 3, 7);
    BgOrangeLightest => "bgOrangeLightest", bg_orange_lightest,
        hue(Orange, 1, 9), hue(Orange, 2, 8);
    BgOrangeDark => "bgOrangeDark", bg_orange_dark, hue(Orange, 8, 4), hue(Orange, 9, 3);
    BgOrangeShadeLighter => "bgOrangeShadeLighter", bg_orange_shade_lighter,
        hue(Orange, 0, 9), hue(Orange, 1, 8);
    BgOrangeShadeNormal => "bgOrangeShadeNormal", bg_orange_shade_normal,
        hue(Orange, 3, 8), hue(Orange, 4, 7);
    BgOrangeTransparent => "bgOrangeTransparent", bg_orange_transparent,
        tint(Orange), tint_pressed(Orange);

    // Background green
    BgGreenNormal => "bgGreenNormal", bg_green_normal, hue(Green, 7, 6), hue(Green, 8, 7);
    BgGreenLight => "bgGreenLight", bg_green_light, hue(Green, 4, 5), hue(Green, 5, 6);
    BgGreenLighter => "bgGreenLighter", bg_green_lighter, hue(Green, 2, 8), hue(Green, 3, 7);
    BgGreenLightest => "bgGreenLightest", bg_green_lightest, hue(Green, 1, 9), hue(Green, 2, 8);
    BgGreenDark => "bgGreenDark", bg_green_dark, hue(Green, 8, 4), hue(Green, 9, 3);
    BgGreenShadeLighter => "bgGreenShadeLighter", bg_green_shade_lighter,
        hue(Green, 0, 9), hue(Green, 1, 8);
    BgGreenShadeNormal => "bgGreenShadeNormal", bg_green_shade_normal,
        hue(Green, 3, 8), hue(Green, 4, 7);
    BgGreenTransparent => "bgGreenTransparent", bg_green_transparent,
        tint(Green), tint_pressed(Green);

    // Background teal
    BgTealNormal => "bgTealNormal", bg_teal_normal, hue(Teal, 7, 6), hue(Teal, 8, 7);
    BgTealLight => "bgTealLight", bg_teal_light, hue(Teal, 4, 5), hue(Teal, 5, 6);
    BgTealLighter => "bgTealLighter", bg_teal_lighter, hue(Teal, 2, 8), hue(Teal, 3, 7);
    BgTealLightest => "bgTealLightest", bg_teal_lightest, hue(Teal, 1, 9), hue(Teal, 2, 8);
    BgTealDark => "bgTealDark", bg_teal_dark, hue(Teal, 8, 4), hue(Teal, 9, 3);
    BgTealShadeLighter => "bgTealShadeLighter", bg_teal_shade_lighter,
        hue(Teal, 0, 9), hue(Teal, 1, 8);
    BgTealShadeNormal => "bgTealShadeNormal", bg_teal_shade_normal,
        hue(Teal, 3, 8), hue(Teal, 4, 7);
    BgTealTransparent => "bgTealTransparent", bg_teal_transparent, tint(Teal), tint_pressed(Teal);

    // Background olive
    BgOliveNormal => "bgOliveNormal", bg_olive_normal, hue(Olive, 7, 6), hue(Olive, 8, 7);
    BgOliveLight => "bgOliveLight", bg_olive_light, hue(Olive, 4, 5), hue(Olive, 5, 6);
    BgOliveLighter => "bgOliveLighter", bg_olive_lighter, hue(Olive, 2, 8), hue(Olive, 3, 7);
    BgOliveLightest => "bgOliveLightest", bg_olive_lightest, hue(Olive, 1, 9), hue(Olive, 2, 8);
    BgOliveDark => "bgOliveDark", bg_olive_dark, hue(Olive, 8, 4), hue(Olive, 9, 3);
    BgOliveShadeLighter => "bgOliveShadeLighter", bg_olive_shade_lighter,
        hue(Olive, 0, 9), hue(Olive, 1, 8);
    BgOliveShadeNormal => "bgOliveShadeNormal", bg_olive_shade_normal,
        hue(Olive, 3, 8), hue(Olive, 4, 7);
    BgOliveTransparent => "bgOliveTransparent", bg_olive_transparent,
        tint(Olive), tint_pressed(Olive);

    // Background yellow
    BgYellowNormal => "bgYellowNormal", bg_yellow_normal, hue(Yellow, 7, 6), hue(Yellow, 8, 7);
    BgYellowLight => "bgYellowLight", bg_yellow_light, hue(Yellow, 4, 5), hue(Yellow, 5, 6);
    BgYellowLighter => "bgYellowLighter", bg_yellow_lighter, hue(Yellow, 2, 8), hue(Yellow, 3, 7);
    BgYellowLightest => "bgYellowLightest", bg_yellow_lightest,
        hue(Yellow, 1, 9), hue(Yellow, 2, 8);
    BgYellowDark => "bgYellowDark", bg_yellow_dark, hue(Yellow, 8, 4), hue(Yellow, 9, 3);
    BgYellowShadeLighter => "bgYellowShadeLighter", bg_yellow_shade_lighter,
        hue(Yellow, 0, 9), hue(Yellow, 1, 8);
    BgYellowShadeNormal => "bgYellowShadeNormal", bg_yellow_shade_normal,
        hue(Yellow, 3, 8), hue(Yellow, 4, 7);
    BgYellowTransparent => "bgYellowTransparent", bg_yellow_transparent,
        tint(Yellow), tint_pressed(Yellow);

    // Background pink
    BgPinkNormal => "bgPinkNormal", bg_pink_normal, hue(Pink, 7, 6), hue(Pink, 8, 7);
    BgPinkLight => "bgPinkLight", bg_pink_light, hue(Pink, 4, 5), hue(Pink, 5, 6);
    BgPinkLighter => "bgPinkLighter", bg_pink_lighter, hue(Pink, 2, 8), hue(Pink, 3, 7);
    BgPinkLightest => "bgPinkLightest", bg_pink_lightest, hue(Pink, 1, 9), hue(Pink, 2, 8);
    BgPinkDark => "bgPinkDark", bg_pink_dark, hue(Pink, 8, 4), hue(Pink, 9, 3);
    BgPinkShadeLighter => "bgPinkShadeLighter", bg_pink_shade_lighter,
        hue(Pink, 0, 9), hue(Pink, 1, 8);
    BgPinkShadeNormal => "bgPinkShadeNormal", bg_pink_shade_normal,
        hue(Pink, 3, 8), hue(Pink, 4, 7);
    BgPinkTransparent => "bgPinkTransparent", bg_pink_transparent, tint(Pink), tint_pressed(Pink);

    // Background purple
    BgPurpleNormal => "bgPurpleNormal", bg_purple_normal, hue(Purple, 7, 6), hue(Purple, 8, 7);
    BgPurpleLight => "bgPurpleLight", bg_purple_light, hue(Purple, 4, 5), hue(Purple, 5, 6);
    BgPurpleLighter => "bgPurpleLighter", bg_purple_lighter, hue(Purple, 2, 8), hue(Purple, 3, 7);
    BgPurpleLightest => "bgPurpleLightest", bg_purple_lightest,
        hue(Purple, 1, 9), hue(Purple, 2, 8);
    BgPurpleDark => "bgPurpleDark", bg_purple_dark, hue(Purple, 8, 4), hue(Purple, 9, 3);
    BgPurpleShadeLighter => "bgPurpleShadeLighter", bg_purple_shade_lighter,
        hue(Purple, 0, 9), hue(Purple, 1, 8);
    BgPurpleShadeNormal => "bgPurpleShadeNormal", bg_purple_shade_normal,
        hue(Purple, 3, 8), hue(Purple, 4, 7);
    BgPurpleTransparent => "bgPurpleTransparent", bg_purple_transparent,
        tint(Purple), tint_pressed(Purple);

    // Background navy
    BgNavyNormal => "bgNavyNormal", bg_navy_normal, hue(Navy, 7, 6), hue(Navy, 8, 7);
    BgNavyLight => "bgNavyLight", bg_navy_light, hue(Navy, 4, 5), hue(Navy, 5, 6);
    BgNavyLighter => "bgNavyLighter", bg_navy_lighter, hue(Navy, 2, 8), hue(Navy, 3, 7);
    BgNavyLightest => "bgNavyLightest", bg_navy_lightest, hue(Navy, 1, 9), hue(Navy, 2, 8);
    BgNavyDark => "bgNavyDark", bg_navy_dark, hue(Navy, 8, 4), hue(Navy, 9, 3);
    BgNavyShadeLighter => "bgNavyShadeLighter", bg_navy_shade_lighter,
        hue(Navy, 0, 9), hue(Navy, 1, 8);
    BgNavyShadeNormal => "bgNavyShadeNormal", bg_navy_shade_normal,
        hue(Navy, 3, 8), hue(Navy, 4, 7);
    BgNavyTransparent => "bgNavyTransparent", bg_navy_transparent, tint(Navy), tint_pressed(Navy);

    // Background grey
    BgGreyDarkest => "bgGreyDarkest", bg_grey_darkest, hue(Grey, 9, 0), hue(Grey, 8, 1);
    BgGreyDark => "bgGreyDark", bg_grey_dark, hue(Grey, 7, 2), hue(Grey, 8, 1);
    BgGreyNormal => "bgGreyNormal", bg_grey_normal, hue(Grey, 5, 4), hue(Grey, 6, 3);
    BgGreyLight => "bgGreyLight", bg_grey_light, hue(Grey, 2, 7), hue(Grey, 3, 6);
    BgGreyLighter => "bgGreyLighter", bg_grey_lighter, hue(Grey, 1, 8), hue(Grey, 2, 7);
    BgGreyLightest => "bgGreyLightest", bg_grey_lightest, hue(Grey, 0, 9), hue(Grey, 1, 8);
    BgGreyTransparent => "bgGreyTransparent", bg_grey_transparent, tint(Grey), tint_pressed(Grey);

    // Background grey alpha
    BgGreyAlphaDarkest => "bgGreyAlphaDarkest", bg_grey_alpha_darkest,
        mixed((GreyAlpha, 7), (WhiteAlpha, 7)), mixed((GreyAlpha, 8), (WhiteAlpha, 8));
    BgGreyAlphaDarker => "bgGreyAlphaDarker", bg_grey_alpha_darker,
        mixed((GreyAlpha, 6), (WhiteAlpha, 6)), mixed((GreyAlpha, 7), (WhiteAlpha, 7));
    BgGreyAlphaDark => "bgGreyAlphaDark", bg_grey_alpha_dark,
        mixed((GreyAlpha, 5), (WhiteAlpha, 5)), mixed((GreyAlpha, 6), (WhiteAlpha, 6));
    BgGreyAlphaLight => "bgGreyAlphaLight", bg_grey_alpha_light,
        mixed((GreyAlpha, 2), (WhiteAlpha, 2)), mixed((GreyAlpha, 3), (WhiteAlpha, 3));

    // Background black
    BgBlackDarkest => "bgBlackDarkest", bg_black_darkest,
        mixed((BlackAlpha, 9), (WhiteAlpha, 9)), mixed((BlackAlpha, 8), (WhiteAlpha, 8));
    BgBlackDarker => "bgBlackDarker", bg_black_darker,
        mixed((BlackAlpha, 8), (WhiteAlpha, 8)), mixed((BlackAlpha, 9), (WhiteAlpha, 9));
    BgBlackDark => "bgBlackDark", bg_black_dark,
        mixed((BlackAlpha, 7), (WhiteAlpha, 7)), mixed((BlackAlpha, 8), (WhiteAlpha, 8));
    BgBlackLight => "bgBlackLight", bg_black_light,
        mixed((BlackAlpha, 4), (WhiteAlpha, 4)), mixed((BlackAlpha, 5), (WhiteAlpha, 5));
    BgBlackLighter => "bgBlackLighter", bg_black_lighter,
        mixed((BlackAlpha, 3), (WhiteAlpha, 3)), mixed((BlackAlpha, 4), (WhiteAlpha, 4));
    BgBlackLightest => "bgBlackLightest", bg_black_lightest,
        mixed((BlackAlpha, 2), (WhiteAlpha, 2)), mixed((BlackAlpha, 3), (WhiteAlpha, 3));
    BgBlackTransparent => "bgBlackTransparent", bg_black_transparent,
        tint(BlackAlpha), tint_pressed(BlackAlpha);

    // Background white
    BgWhiteHighest => "bgWhiteHighest", bg_white_highest, white_surface(7), hue(Grey, 0, 6);
    BgWhiteHigher => "bgWhiteHigher", bg_white_higher, white_surface(8), hue(Grey, 0, 7);
    BgWhiteNormal => "bgWhiteNormal", bg_white_normal, white_surface(9), hue(Grey, 0, 8);
    BgWhiteTransparent => "bgWhiteTransparent", bg_white_transparent,
        tint(WhiteAlpha), tint_pressed(WhiteAlpha);

    // Background white alpha
    BgWhiteAlphaLightest => "bgWhiteAlphaLightest", bg_white_alpha_lightest,
        mixed((WhiteAlpha, 8), (GreyAlpha, 8)), mixed((WhiteAlpha, 9), (GreyAlpha, 9));
    BgWhiteAlphaLighter => "bgWhiteAlphaLighter", bg_white_alpha_lighter,
        mixed((WhiteAlpha, 7), (GreyAlpha, 7)), mixed((WhiteAlpha, 8), (GreyAlpha, 8));
    BgWhiteAlphaLight => "bgWhiteAlphaLight", bg_white_alpha_light,
        mixed((WhiteAlpha, 6), (GreyAlpha, 6)), mixed((WhiteAlpha, 7), (GreyAlpha, 7));
    BgWhiteAlphaTransparent => "bgWhiteAlphaTransparent", bg_white_alpha_transparent,
        mixed((WhiteAlpha, 0), (GreyAlpha, 0)), mixed((WhiteAlpha, 1), (GreyAlpha, 1));

    // Background absolute black
    BgAbsoluteBlackDark => "bgAbsoluteBlackDark", bg_absolute_black_dark,
        fixed(BlackAlpha, 9), fixed(BlackAlpha, 8);
    BgAbsoluteBlackNormal => "bgAbsoluteBlackNormal", bg_absolute_black_normal,
        fixed(BlackAlpha, 8), fixed(BlackAlpha, 9);
    BgAbsoluteBlackLight => "bgAbsoluteBlackLight", bg_absolute_black_light,
        fixed(BlackAlpha, 6), fixed(BlackAlpha, 7);
    BgAbsoluteBlackLighter => "bgAbsoluteBlackLighter", bg_absolute_black_lighter,
        fixed(BlackAlpha, 4), fixed(BlackAlpha, 5);
    BgAbsoluteBlackLightest => "bgAbsoluteBlackLightest", bg_absolute_black_lightest,
        fixed(BlackAlpha, 2), fixed(BlackAlpha, 3);
    BgAbsoluteBlackTransparent => "bgAbsoluteBlackTransparent", bg_absolute_black_transparent,
        fixed(BlackAlpha, 0), fixed(BlackAlpha, 1);

    // Background absolute white
    BgAbsoluteWhiteDark => "bgAbsoluteWhiteDark", bg_absolute_white_dark,
        fixed(WhiteAlpha, 9), fixed(WhiteAlpha, 8);
    BgAbsoluteWhiteNormal => "bgAbsoluteWhiteNormal", bg_absolute_white_normal,
        fixed(WhiteAlpha, 8), fixed(WhiteAlpha, 9);
    BgAbsoluteWhiteLight => "bgAbsoluteWhiteLight", bg_absolute_white_light,
        fixed(WhiteAlpha, 6), fixed(WhiteAlpha, 7);
    BgAbsoluteWhiteLighter => "bgAbsoluteWhiteLighter", bg_absolute_white_lighter,
        fixed(WhiteAlpha, 4), fixed(WhiteAlpha, 5);
    BgAbsoluteWhiteLightest => "bgAbsoluteWhiteLightest", bg_absolute_white_lightest,
        fixed(WhiteAlpha, 2), fixed(WhiteAlpha, 3);
    BgAbsoluteWhiteTransparent => "bgAbsoluteWhiteTransparent", bg_absolute_white_transparent,
        fixed(WhiteAlpha, 0), fixed(WhiteAlpha, 1);

    // Surface
    SurfaceLowest => "surfaceLowest", surface_lowest, hue(Grey, 0, 9), hue(Grey, 1, 8);
    SurfaceLower => "surfaceLower", surface_lower, hue(Grey, 1, 8), hue(Grey, 2, 7);
    SurfaceNormal => "surfaceNormal", surface_normal, white_surface(7), hue(Grey, 0, 6);

    // Shadow
    ShadowXlarge => "shadowXlarge", shadow_xlarge,
        mixed((BlackAlpha, 4), (BlackAlpha, 7)), mixed((BlackAlpha, 4), (BlackAlpha, 7));
    ShadowLarge => "shadowLarge", shadow_large,
        mixed((BlackAlpha, 3), (BlackAlpha, 6)), mixed((BlackAlpha, 3), (BlackAlpha, 6));
    ShadowMedium => "shadowMedium", shadow_medium,
        mixed((BlackAlpha, 3), (BlackAlpha, 5)), mixed((BlackAlpha, 3), (BlackAlpha, 5));
    ShadowSmall => "shadowSmall", shadow_small,
        mixed((BlackAlpha, 2), (BlackAlpha, 4)), mixed((BlackAlpha, 2), (BlackAlpha, 4));
    ShadowBase => "shadowBase", shadow_base,
        mixed((BlackAlpha, 1), (BlackAlpha, 3)), mixed((BlackAlpha, 1), (BlackAlpha, 3));
    ShadowBaseInner => "shadowBaseInner", shadow_base_inner,
        mixed((BlackAlpha, 1), (BlackAlpha, 2)), mixed((BlackAlpha, 1), (BlackAlpha, 2));

    // Dim
    DimBlackNormal => "dimBlackNormal", dim_black_normal,
        mixed((BlackAlpha, 6), (BlackAlpha, 7)), mixed((BlackAlpha, 6), (BlackAlpha, 7));
    DimBlackLight => "dimBlackLight", dim_black_light,
        mixed((BlackAlpha, 4), (BlackAlpha, 5)), mixed((BlackAlpha, 4), (BlackAlpha, 5));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appearance::Appearance;
    use crate::color::HexColor;
    use std::collections::HashSet;

    fn digit_count(hex: &str) -> usize {
        hex.trim_start_matches('#').len()
    }

    #[test]
    fn registry_names_are_unique_and_round_trip() {
        let names = FunctionalColorToken::ALL
            .iter()
            .map(|token| token.name())
            .collect::<HashSet<_>>();
        assert_eq!(names.len(), FunctionalColorToken::ALL.len());

        for token in FunctionalColorToken::ALL {
            assert_eq!(FunctionalColorToken::from_name(token.name()), Some(*token));
        }
        assert_eq!(FunctionalColorToken::from_name("FgBlueNormal"), None);
        assert_eq!(FunctionalColorToken::from_name("fg_blue_normal"), None);
    }

    #[test]
    fn every_token_hex_is_well_formed() {
        for token in FunctionalColorToken::ALL {
            for pair in [token.base(), token.pressed()] {
                let (light, dark) = (pair.light_hex(), pair.dark_hex());
                assert!(HexColor::parse(light).is_ok(), "{} {light}", token.name());
                assert!(HexColor::parse(dark).is_ok(), "{} {dark}", token.name());
                assert!(
                    matches!(digit_count(light), 6 | 8),
                    "{} {light}",
                    token.name()
                );
                assert_eq!(
                    digit_count(light),
                    digit_count(dark),
                    "{} pairs {light} with {dark}",
                    token.name()
                );
            }
        }
    }

    #[test]
    fn absolute_tokens_are_plain_and_others_adapt() {
        for token in FunctionalColorToken::ALL {
            let absolute = token.name().contains("Absolute");
            assert_eq!(token.base().is_adaptive(), !absolute, "{}", token.name());
            assert_eq!(token.pressed().is_adaptive(), !absolute, "{}", token.name());
        }
    }

    #[test]
    fn adaptive_tokens_change_with_appearance() {
        for token in FunctionalColorToken::ALL {
            let base = token.base();
            if base.is_adaptive() {
                assert_ne!(
                    base.hex(Appearance::Light),
                    base.hex(Appearance::Dark),
                    "{}",
                    token.name()
                );
            }
        }
    }

    #[test]
    fn transparent_tokens_are_translucent() {
        for token in FunctionalColorToken::ALL
            .iter()
            .filter(|token| token.name().ends_with("Transparent"))
        {
            for appearance in [Appearance::Light, Appearance::Dark] {
                let color = HexColor::decode(token.base().hex(appearance));
                assert!(color.alpha < u8::MAX / 2, "{}", token.name());
            }
        }
    }

    #[test]
    fn accessors_match_registry_entries() {
        assert_eq!(
            BezierColor::fg_blue_normal(),
            BezierColor::functional(FunctionalColorToken::FgBlueNormal)
        );
        assert_eq!(BezierColor::bg_grey_lightest().light_hex(), "#F7F7F8");
        assert_eq!(BezierColor::bg_white_normal().light_hex(), WHITE);
        assert_eq!(BezierColor::bg_white_normal().dark_hex(), "#1C1C1F");
        assert_eq!(BezierColor::shadow_xlarge().dark_hex(), "#000000CC");
        assert_eq!(BezierColor::fg_black_pure().light_hex(), "#000000FF");
    }
}
