//! View-model construction for one fetched snapshot.

use crate::code::RedemptionCode;
use crate::datetime::{format_published, parse_datetime};
use crate::status::CodeStatus;
use chrono::{DateTime, TimeZone};
use std::cmp::Ordering;

/// One rendered row of the code list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    /// 1-based position after sorting.
    pub index: usize,
    pub code: String,
    pub reward: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub url: Option<String>,
    pub published: String,
    pub status: CodeStatus,
}

/// What the list container shows once a fetch has resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Empty,
    Entries(Vec<CodeEntry>),
}

impl Listing {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Entries(entries) => entries.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn entries(&self) -> &[CodeEntry] {
        match self {
            Self::Empty => &[],
            Self::Entries(entries) => entries,
        }
    }
}

/// Sort newest first by `date`.
///
/// The sort is stable: records with equal dates keep response order.
/// Records whose date cannot be read go last, also in response order.
pub fn sort_by_date_desc<Tz: TimeZone>(codes: &mut Vec<RedemptionCode>, tz: &Tz) {
    let mut keyed: Vec<(Option<DateTime<Tz>>, RedemptionCode)> = codes
        .drain(..)
        .map(|code| (parse_datetime(&code.date, tz), code))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    codes.extend(keyed.into_iter().map(|(_, code)| code));
}

/// Sort, classify and format a snapshot for display at `now`.
#[must_use]
pub fn build_listing<Tz: TimeZone>(
    mut codes: Vec<RedemptionCode>,
    now: &DateTime<Tz>,
) -> Listing {
    if codes.is_empty() {
        return Listing::Empty;
    }
    let tz = now.timezone();
    sort_by_date_desc(&mut codes, &tz);
    let entries = codes
        .into_iter()
        .enumerate()
        .map(|(i, record)| CodeEntry {
            index: i + 1,
            status: CodeStatus::classify(record.end.as_deref(), now),
            published: format_published(&record.date, &tz),
            code: record.code,
            reward: record.reward,
            start: record.start,
            end: record.end,
            url: record.url,
        })
        .collect();
    Listing::Entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn empty_snapshot_is_empty_listing() {
        assert_eq!(build_listing(Vec::new(), &now()), Listing::Empty);
        assert!(Listing::Empty.entries().is_empty());
    }

    #[test]
    fn entries_are_newest_first_and_numbered() {
        let codes = vec![
            RedemptionCode::new("OLD", "2024-01-01 00:00:00"),
            RedemptionCode::new("NEW", "2024-05-01 00:00:00"),
            RedemptionCode::new("MID", "2024-03-01T00:00:00Z"),
        ];
        let listing = build_listing(codes, &now());
        let order: Vec<(usize, &str)> = listing
            .entries()
            .iter()
            .map(|e| (e.index, e.code.as_str()))
            .collect();
        assert_eq!(order, vec![(1, "NEW"), (2, "MID"), (3, "OLD")]);
    }

    #[test]
    fn equal_dates_keep_response_order() {
        let mut codes = vec![
            RedemptionCode::new("A", "2024-01-01 00:00:00"),
            RedemptionCode::new("B", "2024-01-01 00:00:00"),
            RedemptionCode::new("C", "2024-02-01 00:00:00"),
            RedemptionCode::new("D", "2024-01-01 00:00:00"),
        ];
        sort_by_date_desc(&mut codes, &Utc);
        let order: Vec<&str> = codes.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B", "D"]);
    }

    #[test]
    fn unreadable_dates_sort_last() {
        let mut codes = vec![
            RedemptionCode::new("BAD1", "yesterday"),
            RedemptionCode::new("GOOD", "2020-01-01"),
            RedemptionCode::new("BAD2", ""),
        ];
        sort_by_date_desc(&mut codes, &Utc);
        let order: Vec<&str> = codes.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(order, vec!["GOOD", "BAD1", "BAD2"]);
    }

    #[test]
    fn entries_carry_status_and_formatted_dates() {
        let codes = vec![
            RedemptionCode::new("ABC123", "2024-01-01T00:00:00Z")
                .with_window(None, Some("2023-01-01T00:00:00Z"))
                .with_reward("钻石*100")
                .with_url("https://weibo.com/1"),
        ];
        let listing = build_listing(codes, &now());
        let entry = &listing.entries()[0];
        assert_eq!(entry.status, CodeStatus::Expired);
        assert_eq!(entry.published, "2024-01-01 00:00");
        assert_eq!(entry.reward.as_deref(), Some("钻石*100"));
        assert_eq!(entry.start, None);
        assert_eq!(entry.url.as_deref(), Some("https://weibo.com/1"));
    }
}
