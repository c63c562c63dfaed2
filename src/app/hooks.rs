use std::time::Duration;

use leptos::{ev, html, prelude::*};
use leptos_use::use_event_listener;

use crate::behavior::{
    Bounds, Cancel, PreferenceStore, StorageError, Theme, ThemeSink, ThemeState, Tick, Tilt,
    TiltTracker, TimerSlot, Typewriter,
};

impl Cancel for IntervalHandle {
    fn cancel(self) {
        self.clear();
    }
}

/// Reveals `source` one character per `interval`.
///
/// Changing either input restarts from an empty string. The interval is
/// cleared when typing finishes, on restart, and when the owner is disposed.
pub fn use_typewriter(source: Signal<String>, interval: Signal<Duration>) -> ReadSignal<String> {
    let (typed, set_typed) = signal(String::new());
    let machine = StoredValue::new(Typewriter::new(""));
    let timer = StoredValue::new_local(TimerSlot::<IntervalHandle>::new());

    Effect::new(move |_| {
        let text = source.get();
        let every = interval.get();

        timer.update_value(|t| {
            t.disarm();
        });
        machine.update_value(|m| m.reset(text.clone()));
        set_typed(String::new());
        if machine.with_value(Typewriter::is_done) {
            return;
        }

        let tick = move || {
            let step = machine.try_update_value(|m| {
                let outcome = m.tick();
                (outcome, m.displayed().to_string())
            });
            let Some((outcome, shown)) = step else {
                return;
            };
            set_typed(shown);
            if outcome == Tick::Finished {
                timer.update_value(|t| {
                    t.disarm();
                });
            }
        };
        match set_interval_with_handle(tick, every) {
            Ok(handle) => timer.update_value(|t| t.arm(handle)),
            Err(e) => {
                log::warn!("typing timer unavailable, showing full text: {e:?}");
                set_typed(text);
            }
        }
    });

    on_cleanup(move || {
        timer.try_update_value(|t| t.disarm());
    });

    typed
}

fn bounds_of(el: &web_sys::Element) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

/// Tilts `target` towards the pointer while it hovers and levels it on leave.
///
/// Both listeners live exactly as long as the calling component.
pub fn use_tilt(target: NodeRef<html::Div>) -> ReadSignal<Tilt> {
    let (tilt, set_tilt) = signal(Tilt::LEVEL);
    let tracker = StoredValue::new(TiltTracker::new());

    let _ = use_event_listener(target, ev::mousemove, move |e| {
        let Some(el) = target.get_untracked() else {
            return;
        };
        let bounds = bounds_of(&el);
        let (x, y) = (f64::from(e.client_x()), f64::from(e.client_y()));
        if let Some(next) = tracker.try_update_value(|t| t.on_move(bounds, x, y)) {
            set_tilt(next);
        }
    });
    let _ = use_event_listener(target, ev::mouseleave, move |_| {
        if let Some(next) = tracker.try_update_value(TiltTracker::on_leave) {
            set_tilt(next);
        }
    });

    tilt
}

/// `window.localStorage`, or an error when the browser refuses access.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        window()
            .local_storage()
            .ok()
            .flatten()
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStore for BrowserStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{e:?}")))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{e:?}")))
    }
}

/// Mirrors the theme onto `<html>`: the `dark` class drives Tailwind's
/// `dark:` variant, `data-theme` is for plain CSS.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentTheme;

impl ThemeSink for DocumentTheme {
    fn apply(&self, theme: Theme) {
        let Some(root) = document().document_element() else {
            return;
        };
        let classes = root.class_list();
        let res = if theme.is_dark() {
            classes.add_1("dark")
        } else {
            classes.remove_1("dark")
        }
        .and_then(|_| root.set_attribute("data-theme", theme.as_str()));
        if let Err(e) = res {
            log::warn!("couldn't apply theme to document: {e:?}");
        }
    }
}

/// Page-wide theme, provided as context by `App`.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
    state: StoredValue<Option<ThemeState<BrowserStorage, DocumentTheme>>>,
}

impl ThemeContext {
    fn new() -> Self {
        let (theme, set_theme) = signal(Theme::default());
        Self {
            theme,
            set_theme,
            state: StoredValue::new(None),
        }
    }

    fn load(&self) {
        let state = ThemeState::load(BrowserStorage, DocumentTheme);
        log::debug!("theme loaded: {}", state.current());
        self.set_theme.set(state.current());
        self.state.set_value(Some(state));
    }

    pub fn theme(&self) -> ReadSignal<Theme> {
        self.theme
    }

    pub fn toggle(&self) {
        let next = self
            .state
            .try_update_value(|s| s.as_mut().map(ThemeState::toggle))
            .flatten();
        if let Some(theme) = next {
            self.set_theme.set(theme);
        }
    }
}

/// Provides [`ThemeContext`] and syncs it with storage once mounted in the browser.
pub fn provide_theme() -> ThemeContext {
    let ctx = ThemeContext::new();
    Effect::new(move |_| ctx.load());
    provide_context(ctx);
    ctx
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
