pub use crate::BezierProvider;
pub use crate::appearance::{Appearance, AppearanceFn, AppearancePreference, AppearanceSource};
pub use crate::color::{
    BezierColor, ColorToken, FunctionalColorToken, HexColor, InteractionState, SemanticColorToken,
};
