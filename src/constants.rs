//! Application constants and configuration

pub const DOA_API_URL: &str = "https://doa-doa-api-ahmadramadhan.fly.dev/api";
pub const APP_NAME: &str = "Doa Favorites";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Display policy: the favorites screen shows the first N records of the
/// collection endpoint, in response order. There is no favorite-marking
/// mechanism behind this, only positional truncation.
pub const FAVORITES_LIMIT: usize = 10;
