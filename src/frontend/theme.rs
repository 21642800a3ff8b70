use std::cell::RefCell;

use tracing::{debug, warn};
use yew::prelude::*;

use super::env;
use crate::motion::{ScrollValue, ZoneMap, ZoneTracker};
use crate::palette::PaletteKey;

/// Active palette plus the way to change it.
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub palette: PaletteKey,
    set: Callback<PaletteKey>,
}

impl ThemeHandle {
    pub fn set(&self, palette: PaletteKey) {
        self.set.emit(palette);
    }
}

fn apply_palette(key: PaletteKey) {
    env::set_root_attribute("data-palette", key.as_str());
    for (name, value) in key.palette().custom_properties() {
        env::set_root_style_property(name, value);
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub initial: PaletteKey,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let palette = use_state_eq(|| props.initial);

    use_effect_with(*palette, |key| {
        debug!(palette = key.as_str(), "palette applied");
        apply_palette(*key);
        || ()
    });

    let handle = ThemeHandle {
        palette: *palette,
        set: {
            let palette = palette.clone();
            Callback::from(move |key| palette.set(key))
        },
    };

    html! {
        <ContextProvider<ThemeHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<ThemeHandle>>
    }
}

#[hook]
pub fn use_theme() -> Option<ThemeHandle> {
    use_context::<ThemeHandle>()
}

/// Switches to `palette` when the calling page mounts.
#[hook]
pub fn use_page_palette(palette: PaletteKey) {
    let theme = use_theme();
    use_effect_with(palette, move |palette| {
        if let Some(theme) = theme {
            theme.set(*palette);
        }
        || ()
    });
}

/// Commits palette zones as `progress` crosses `boundaries`. The palette is
/// only written when the zone actually changes.
#[hook]
pub fn use_theme_zones(progress: ScrollValue, boundaries: &'static [f64], zones: &'static [PaletteKey]) {
    let theme = use_theme();
    use_effect_with(progress, move |progress| {
        let watch = match (theme, ZoneMap::new(boundaries, zones)) {
            (Some(theme), Some(map)) => {
                let tracker = RefCell::new(ZoneTracker::new(map));
                let initial = {
                    let mut tracker = tracker.borrow_mut();
                    tracker.update(progress.get());
                    tracker.current()
                };
                theme.set(initial);

                Some(progress.watch(move |value| {
                    let committed = tracker.borrow_mut().update(value);
                    if let Some(zone) = committed {
                        theme.set(zone);
                    }
                }))
            }
            (None, _) => None,
            (Some(_), None) => {
                warn!(?boundaries, "theme zones ignored");
                None
            }
        };
        move || drop(watch)
    });
}
