pub mod fallback;
pub mod key;
pub mod locale;
pub mod matcher;

pub use fallback::{TRACK_PATH_DEPTH, TrackPath, fallback_chain, path_distance, track_path};
pub use key::{LanguageKey, LocaleKey, RegionKey, ScriptKey};
pub use locale::{LocaleError, LocaleInfo, Subtag};
pub use matcher::{best_match, best_match_tag, compare, is_match, negotiate};
