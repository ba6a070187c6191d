use js_sys::{Function, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Response, Storage, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

fn require_window() -> Result<Window, JsValue> {
    window().ok_or_else(|| JsValue::from_str("window unavailable"))
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = require_window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

/// Repeating timer that is cleared when dropped.
pub struct Interval {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    /// Call `tick` every `period_ms` milliseconds until the handle is dropped.
    ///
    /// # Errors
    /// Returns an error if no window is available or the timer cannot be registered.
    pub fn start(period_ms: i32, tick: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
        let id = require_window()?.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms,
        )?;
        Ok(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(self.id);
        }
    }
}

/// Perform a fetch request and return the browser `Response`.
///
/// # Errors
/// Returns an error if the fetch request fails or the response cannot be converted to `Response`.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_response(url: &str) -> Result<Response, JsValue> {
    let resp_value = JsFuture::from(require_window()?.fetch_with_str(url)).await?;
    resp_value.dyn_into::<Response>()
}

/// Read a response body as text.
///
/// # Errors
/// Returns an error if the body cannot be read or is not a string.
#[allow(clippy::future_not_send)]
pub async fn response_text(response: &Response) -> Result<String, JsValue> {
    JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable")]
    Unavailable,
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

/// Write `text` to the system clipboard.
///
/// # Errors
/// Returns [`ClipboardError::Rejected`] when the browser refuses the write
/// (for example, permission denied or an insecure context).
#[allow(clippy::future_not_send)]
pub async fn write_clipboard(text: &str) -> Result<(), ClipboardError> {
    let win = window().ok_or(ClipboardError::Unavailable)?;
    let promise = win.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| ClipboardError::Rejected(js_error_message(&err)))
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    require_window()?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}
