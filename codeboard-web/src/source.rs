//! Browser implementation of the code source.

use crate::dom;
use crate::paths;
use codeboard_core::{CodeSource, GameType, LoadError, RedemptionCode, decode_codes};
use wasm_bindgen::JsValue;

/// Fetches listings from `GET {base}/api/codes/{game}` with `window.fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpCodeSource;

fn network(err: &JsValue) -> LoadError {
    LoadError::Network(dom::js_error_message(err))
}

impl CodeSource for HttpCodeSource {
    #[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
    async fn fetch_codes(&self, game: GameType) -> Result<Vec<RedemptionCode>, LoadError> {
        let url = paths::codes_url(game);
        log::debug!("fetching {url}");
        let response = dom::fetch_response(&url).await.map_err(|e| network(&e))?;
        if !response.ok() {
            return Err(LoadError::Status(response.status()));
        }
        let body = dom::response_text(&response)
            .await
            .map_err(|e| network(&e))?;
        decode_codes(&body)
    }
}
