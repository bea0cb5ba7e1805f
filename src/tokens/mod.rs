use std::collections::BTreeMap;

pub const COLOR_STOPS: usize = 10;
pub type ColorScale = [&'static str; COLOR_STOPS];

pub const TRANSLUCENT_STOPS: usize = 4;
/// `[light, light pressed, dark, dark pressed]` tints of a palette key.
pub type TranslucentScale = [&'static str; TRANSLUCENT_STOPS];

pub const WHITE: &str = "#FFFFFF";
pub const BLACK: &str = "#000000";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum PaletteKey {
    Blue,
    Cobalt,
    Red,
    Orange,
    Green,
    Teal,
    Olive,
    Yellow,
    Pink,
    Purple,
    Navy,
    Grey,
    GreyAlpha,
    BlackAlpha,
    WhiteAlpha,
}

impl PaletteKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Cobalt => "cobalt",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Teal => "teal",
            Self::Olive => "olive",
            Self::Yellow => "yellow",
            Self::Pink => "pink",
            Self::Purple => "purple",
            Self::Navy => "navy",
            Self::Grey => "grey",
            Self::GreyAlpha => "grey-alpha",
            Self::BlackAlpha => "black-alpha",
            Self::WhiteAlpha => "white-alpha",
        }
    }

    pub const fn is_alpha(self) -> bool {
        matches!(self, Self::GreyAlpha | Self::BlackAlpha | Self::WhiteAlpha)
    }
}

pub const PALETTE_KEYS: [PaletteKey; 15] = [
    PaletteKey::Blue,
    PaletteKey::Cobalt,
    PaletteKey::Red,
    PaletteKey::Orange,
    PaletteKey::Green,
    PaletteKey::Teal,
    PaletteKey::Olive,
    PaletteKey::Yellow,
    PaletteKey::Pink,
    PaletteKey::Purple,
    PaletteKey::Navy,
    PaletteKey::Grey,
    PaletteKey::GreyAlpha,
    PaletteKey::BlackAlpha,
    PaletteKey::WhiteAlpha,
];

pub struct PaletteCatalog;

impl PaletteCatalog {
    pub const fn scale(key: PaletteKey) -> ColorScale {
        match key {
            PaletteKey::Blue => [
                "#F0F5FF", "#DDE8FE", "#BCD2FD", "#8EB4FC", "#6B9CFF", "#4D8BFF", "#3176F8",
                "#1B64F2", "#1451CC", "#0E3D99",
            ],
            PaletteKey::Cobalt => [
                "#F1F3FF", "#E0E4FE", "#C3CBFD", "#9AA8FB", "#7C8BF9", "#6072F8", "#4B5BE6",
                "#3E4BD0", "#3039A8", "#222A7D",
            ],
            PaletteKey::Red => [
                "#FFF1F1", "#FFDFDF", "#FFC1C1", "#FF9595", "#FF7171", "#FF5B5B", "#F04343",
                "#E0302D", "#B72424", "#8A1A1A",
            ],
            PaletteKey::Orange => [
                "#FFF5EB", "#FFE7D1", "#FFD0A3", "#FFB56B", "#FF9F42", "#FF8E26", "#F2790F",
                "#E06A00", "#B55500", "#873F00",
            ],
            PaletteKey::Green => [
                "#EEFBF3", "#D5F5E2", "#A9EAC5", "#72DB9F", "#4CCD83", "#33C26E", "#20AC5A",
                "#13994C", "#0F7A3D", "#0A5A2D",
            ],
            PaletteKey::Teal => [
                "#ECFAF9", "#D0F3F1", "#A1E6E2", "#66D3CE", "#3EC3BD", "#22B5AF", "#149E99",
                "#0B8B86", "#086F6B", "#055250",
            ],
            PaletteKey::Olive => [
                "#F6F8EA", "#EAF0CC", "#D6E29C", "#BCCF62", "#A6BE3B", "#97B12A", "#849C1E",
                "#728816", "#5B6D11", "#43500C",
            ],
            PaletteKey::Yellow => [
                "#FFFBEA", "#FFF4C7", "#FFE98E", "#FFDB4D", "#FFD024", "#FFC70B", "#F2B600",
                "#E0A400", "#B38300", "#856100",
            ],
            PaletteKey::Pink => [
                "#FFF0F6", "#FFDCEB", "#FFB9D6", "#FF8CBB", "#FF6BA8", "#F95A9B", "#E84586",
                "#D43574", "#AA295D", "#7D1E44",
            ],
            PaletteKey::Purple => [
                "#F7F1FF", "#ECDFFF", "#D9C0FF", "#BE96FF", "#A877FB", "#9A63F5", "#8650E3",
                "#7342CC", "#5B34A3", "#442678",
            ],
            PaletteKey::Navy => [
                "#F0F3F8", "#DDE3EE", "#BCC7DC", "#8FA0C2", "#6C80AC", "#56699C", "#44578A",
                "#364777", "#293760", "#1C2746",
            ],
            PaletteKey::Grey => [
                "#F7F7F8", "#EFEFF0", "#E3E3E5", "#D1D1D4", "#B3B3B8", "#8E8E94", "#66666D",
                "#46464C", "#2C2C30", "#1C1C1F",
            ],
            PaletteKey::GreyAlpha => [
                "#1C1C1F00", "#1C1C1F0D", "#1C1C1F14", "#1C1C1F1F", "#1C1C1F33", "#1C1C1F66",
                "#1C1C1F99", "#1C1C1FCC", "#1C1C1FE6", "#1C1C1FFF",
            ],
            PaletteKey::BlackAlpha => [
                "#00000000", "#0000000D", "#00000014", "#0000001F", "#00000033", "#00000066",
                "#00000099", "#000000CC", "#000000E6", "#000000FF",
            ],
            PaletteKey::WhiteAlpha => [
                "#FFFFFF00", "#FFFFFF0D", "#FFFFFF14", "#FFFFFF1F", "#FFFFFF33", "#FFFFFF66",
                "#FFFFFF99", "#FFFFFFCC", "#FFFFFFE6", "#FFFFFFFF",
            ],
        }
    }

    pub const fn swatch(key: PaletteKey, stop: usize) -> &'static str {
        Self::scale(key)[stop]
    }

    pub const fn translucent(key: PaletteKey) -> TranslucentScale {
        match key {
            PaletteKey::Blue => ["#1B64F21A", "#1B64F233", "#4D8BFF26", "#4D8BFF40"],
            PaletteKey::Cobalt => ["#3E4BD01A", "#3E4BD033", "#6072F826", "#6072F840"],
            PaletteKey::Red => ["#E0302D1A", "#E0302D33", "#FF5B5B26", "#FF5B5B40"],
            PaletteKey::Orange => ["#E06A001A", "#E06A0033", "#FF8E2626", "#FF8E2640"],
            PaletteKey::Green => ["#13994C1A", "#13994C33", "#33C26E26", "#33C26E40"],
            PaletteKey::Teal => ["#0B8B861A", "#0B8B8633", "#22B5AF26", "#22B5AF40"],
            PaletteKey::Olive => ["#7288161A", "#72881633", "#97B12A26", "#97B12A40"],
            PaletteKey::Yellow => ["#E0A4001A", "#E0A40033", "#FFC70B26", "#FFC70B40"],
            PaletteKey::Pink => ["#D435741A", "#D4357433", "#F95A9B26", "#F95A9B40"],
            PaletteKey::Purple => ["#7342CC1A", "#7342CC33", "#9A63F526", "#9A63F540"],
            PaletteKey::Navy => ["#3647771A", "#36477733", "#56699C26", "#56699C40"],
            PaletteKey::Grey => ["#46464C1A", "#46464C33", "#8E8E9426", "#8E8E9440"],
            PaletteKey::GreyAlpha => ["#1C1C1F1A", "#1C1C1F33", "#F7F7F826", "#F7F7F840"],
            PaletteKey::BlackAlpha => ["#0000001A", "#00000033", "#FFFFFF26", "#FFFFFF40"],
            PaletteKey::WhiteAlpha => ["#FFFFFF1A", "#FFFFFF33", "#1C1C1F26", "#1C1C1F40"],
        }
    }

    pub fn store() -> BTreeMap<PaletteKey, ColorScale> {
        let mut palette_store = BTreeMap::new();
        for key in PALETTE_KEYS {
            palette_store.insert(key, Self::scale(key));
        }
        palette_store
    }
}
