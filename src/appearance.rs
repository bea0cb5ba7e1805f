#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Appearance {
    Light,
    Dark,
    /// The host has not reported a style. Resolves like [`Appearance::Light`].
    #[default]
    Unspecified,
}

impl Appearance {
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl From<gpui::WindowAppearance> for Appearance {
    fn from(appearance: gpui::WindowAppearance) -> Self {
        match appearance {
            gpui::WindowAppearance::Light | gpui::WindowAppearance::VibrantLight => Self::Light,
            gpui::WindowAppearance::Dark | gpui::WindowAppearance::VibrantDark => Self::Dark,
        }
    }
}

/// Sampled on every color resolution; implementors must not cache.
pub trait AppearanceSource {
    fn appearance(&self) -> Appearance;
}

impl AppearanceSource for Appearance {
    fn appearance(&self) -> Appearance {
        *self
    }
}

impl AppearanceSource for gpui::WindowAppearance {
    fn appearance(&self) -> Appearance {
        (*self).into()
    }
}

impl AppearanceSource for gpui::Window {
    fn appearance(&self) -> Appearance {
        gpui::Window::appearance(self).into()
    }
}

impl<T: AppearanceSource + ?Sized> AppearanceSource for &T {
    fn appearance(&self) -> Appearance {
        (**self).appearance()
    }
}

/// Adapts a closure into an [`AppearanceSource`].
#[derive(Clone, Copy)]
pub struct AppearanceFn<F>(pub F);

impl<F> AppearanceSource for AppearanceFn<F>
where
    F: Fn() -> Appearance,
{
    fn appearance(&self) -> Appearance {
        (self.0)()
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum AppearancePreference {
    #[default]
    System,
    Light,
    Dark,
}

impl AppearancePreference {
    pub const fn apply(self, system: Appearance) -> Appearance {
        match self {
            Self::System => system,
            Self::Light => Appearance::Light,
            Self::Dark => Appearance::Dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn window_appearance_maps_vibrant_variants() {
        assert_eq!(
            Appearance::from(gpui::WindowAppearance::Light),
            Appearance::Light
        );
        assert_eq!(
            Appearance::from(gpui::WindowAppearance::VibrantLight),
            Appearance::Light
        );
        assert_eq!(
            Appearance::from(gpui::WindowAppearance::Dark),
            Appearance::Dark
        );
        assert_eq!(
            Appearance::from(gpui::WindowAppearance::VibrantDark),
            Appearance::Dark
        );
    }

    #[test]
    fn default_appearance_is_unspecified() {
        assert_eq!(Appearance::default(), Appearance::Unspecified);
        assert!(!Appearance::Unspecified.is_dark());
    }

    fn sample<S: AppearanceSource>(source: S) -> Appearance {
        source.appearance()
    }

    #[test]
    fn closure_source_is_sampled_on_every_call() {
        let dark = Cell::new(false);
        let source = AppearanceFn(|| {
            if dark.get() {
                Appearance::Dark
            } else {
                Appearance::Light
            }
        });

        assert_eq!(source.appearance(), Appearance::Light);
        dark.set(true);
        assert_eq!(source.appearance(), Appearance::Dark);
        assert_eq!(sample(&source), Appearance::Dark);
    }

    #[test]
    fn preference_overrides_system_appearance() {
        for system in [Appearance::Light, Appearance::Dark, Appearance::Unspecified] {
            assert_eq!(AppearancePreference::System.apply(system), system);
            assert_eq!(AppearancePreference::Light.apply(system), Appearance::Light);
            assert_eq!(AppearancePreference::Dark.apply(system), Appearance::Dark);
        }
        assert_eq!(AppearancePreference::default(), AppearancePreference::System);
    }
}
