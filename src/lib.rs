pub mod appearance;
pub mod color;
pub mod foundation;
pub mod prelude;
pub mod provider;
pub mod tokens;

#[cfg(test)]
mod test_public_api;

pub use appearance::{Appearance, AppearancePreference, AppearanceSource};
pub use color::BezierColor;
pub use provider::BezierProvider;
