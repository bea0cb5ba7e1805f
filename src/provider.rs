use crate::appearance::{Appearance, AppearancePreference, AppearanceSource};

#[derive(Default)]
pub struct BezierProvider {
    preference: Option<AppearancePreference>,
}

#[derive(Clone, Copy)]
struct ProviderGlobal {
    preference: AppearancePreference,
}

impl gpui::Global for ProviderGlobal {}

impl BezierProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_appearance(mut self, preference: AppearancePreference) -> Self {
        self.preference = Some(preference);
        self
    }

    pub fn init(self, cx: &mut gpui::App) {
        if cx.has_global::<ProviderGlobal>() {
            let global = cx.global_mut::<ProviderGlobal>();
            if let Some(preference) = self.preference {
                global.preference = preference;
            }
            tracing::debug!(preference = ?global.preference, "updated bezier provider");
            return;
        }

        let preference = self.preference.unwrap_or_default();
        tracing::debug!(?preference, "installed bezier provider");
        cx.set_global(ProviderGlobal { preference });
    }

    pub fn preference(cx: &gpui::App) -> AppearancePreference {
        cx.try_global::<ProviderGlobal>()
            .map(|global| global.preference)
            .unwrap_or_default()
    }

    pub fn appearance(window: &gpui::Window, cx: &gpui::App) -> Appearance {
        Self::preference(cx).apply(window.appearance().into())
    }
}

/// The app-wide appearance, with any provider preference applied.
impl AppearanceSource for gpui::App {
    fn appearance(&self) -> Appearance {
        BezierProvider::preference(self).apply(self.window_appearance().into())
    }
}

/// The window's appearance, with any provider preference applied.
impl AppearanceSource for (&gpui::Window, &gpui::App) {
    fn appearance(&self) -> Appearance {
        BezierProvider::appearance(self.0, self.1)
    }
}
