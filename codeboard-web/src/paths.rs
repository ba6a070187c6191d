//! URLs for the code-listing endpoint, respecting the deployment base path.
//!
//! When `PUBLIC_URL` is set at compile time (e.g., `/codes` when served from
//! a subdirectory), generated URLs are prefixed accordingly. When
//! `CODEBOARD_API_BASE` is set, API calls go to that origin instead.
//! Local builds without either fall back to root-anchored paths.

use codeboard_core::GameType;

/// Absolute or root-anchored URL of the listing for `game`.
#[must_use]
pub fn codes_url(game: GameType) -> String {
    with_base(&game.api_path(), api_base())
}

/// Base prefix for API calls.
#[must_use]
pub fn api_base() -> &'static str {
    option_env!("CODEBOARD_API_BASE")
        .filter(|base| !base.trim().is_empty())
        .or(option_env!("PUBLIC_URL"))
        .unwrap_or("")
}

fn with_base(relative: &str, base: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}
