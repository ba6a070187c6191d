use crate::dom::Interval;
use chrono::Local;
use codeboard_core::format_clock;
use yew::prelude::*;

const TICK_MS: i32 = 1000;

/// Current local time as `YYYY-M-D HH:MM:SS`.
#[must_use]
pub fn now_string() -> String {
    format_clock(&Local::now())
}

/// Refresh `clock` every second while the component is mounted.
#[hook]
pub fn use_clock_ticker(clock: &UseStateHandle<String>) {
    let clock = clock.clone();
    use_effect_with((), move |()| {
        let interval = match Interval::start(TICK_MS, move || clock.set(now_string())) {
            Ok(interval) => Some(interval),
            Err(err) => {
                log::warn!("clock timer unavailable: {}", crate::dom::js_error_message(&err));
                None
            }
        };
        move || drop(interval)
    });
}

#[cfg(test)]
mod tests {
    use super::now_string;

    #[test]
    fn clock_string_has_padded_time_fields() {
        let clock = now_string();
        let (date, time) = clock.split_once(' ').expect("date and time halves");
        let date_parts: Vec<&str> = date.split('-').collect();
        assert_eq!(date_parts.len(), 3);
        assert_eq!(date_parts[0].len(), 4);
        assert!(!date_parts[1].starts_with('0'));
        assert!(!date_parts[2].starts_with('0'));
        let time_parts: Vec<&str> = time.split(':').collect();
        assert_eq!(time_parts.len(), 3);
        assert!(time_parts.iter().all(|p| p.len() == 2));
    }
}
