//! Host-independent state behind the page's interactive pieces.
//!
//! Nothing in here touches the DOM; `app::hooks` binds these types to
//! browser timers, listeners and storage.

pub mod fallback;
pub mod lightbox;
pub mod storage;
pub mod tilt;
pub mod toggles;
pub mod typewriter;

pub use fallback::{placeholder_data_uri, FallbackImage, GENERIC_THUMBNAIL};
pub use lightbox::Lightbox;
pub use storage::{MemoryStore, PreferenceStore, StorageError};
pub use tilt::{Bounds, Tilt, TiltTracker};
pub use toggles::{MenuState, Theme, ThemeSink, ThemeState, THEME_KEY};
pub use typewriter::{Cancel, Tick, TimerSlot, Typewriter, TYPING_INTERVAL};
