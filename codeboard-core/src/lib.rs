//! Codeboard core
//!
//! Platform-agnostic logic for the redemption-code viewer: the wire model,
//! date handling, status classification, listing construction and the view
//! state machine. Nothing in this crate touches the browser; the web crate
//! provides the fetch, clipboard and timer glue.

pub mod code;
pub mod datetime;
pub mod game;
pub mod listing;
pub mod source;
pub mod status;
pub mod toast;
pub mod view_state;

pub use code::{RedemptionCode, decode_codes};
pub use datetime::{format_clock, format_published, parse_datetime};
pub use game::GameType;
pub use listing::{CodeEntry, Listing, build_listing, sort_by_date_desc};
pub use source::{CodeSource, LoadError, load_listing};
pub use status::CodeStatus;
pub use toast::{TOAST_DURATION_MS, ToastState};
pub use view_state::{LoadRequest, LoadTicket, ViewAction, ViewPhase, ViewState};
