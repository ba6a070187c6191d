use crate::code::RedemptionCode;
use crate::game::GameType;
use crate::listing::{Listing, build_listing};
use chrono::{DateTime, TimeZone};
use std::future::Future;
use thiserror::Error;

/// Failures of one fetch cycle. Each one ends in the error placeholder.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected HTTP status {0}")]
    Status(u16),
    #[error("malformed code list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Abstract provider of code snapshots.
/// The browser implementation issues `GET /api/codes/{game}`.
pub trait CodeSource {
    /// Fetch the current snapshot for `game`.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] when the request, the status or the body is bad.
    fn fetch_codes(
        &self,
        game: GameType,
    ) -> impl Future<Output = Result<Vec<RedemptionCode>, LoadError>>;
}

/// Fetch a snapshot and turn it into a listing.
///
/// `now` is read after the response arrives so statuses reflect render time.
///
/// # Errors
///
/// Propagates the source's [`LoadError`].
pub async fn load_listing<S, Tz, F>(
    source: &S,
    game: GameType,
    now: F,
) -> Result<Listing, LoadError>
where
    S: CodeSource,
    Tz: TimeZone,
    F: FnOnce() -> DateTime<Tz>,
{
    let codes = source.fetch_codes(game).await?;
    Ok(build_listing(codes, &now()))
}
