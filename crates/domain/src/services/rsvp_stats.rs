//! RSVP aggregation and dashboard list pipeline.
//!
//! The dashboard never stores derived numbers; both the summary and the
//! filtered list are recomputed from the raw response collection on every
//! input change. Collections are per-invitation guest lists, so a full pass
//! is always cheap and can never drift from its source.

use serde::{Deserialize, Serialize};

use crate::models::rsvp::{Attendance, GuestSide, RsvpResponse};
use shared::collation::{compare_guest_names, fold_for_search};

/// Headline numbers shown above the RSVP list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RsvpSummary {
    /// All responses, regardless of attendance answer.
    pub total: i64,
    pub attending: i64,
    pub not_attending: i64,
    pub pending: i64,
    /// Sum of party sizes over attending responses.
    pub total_guests: i64,
    pub groom_side: i64,
    pub bride_side: i64,
    pub groom_side_guests: i64,
    pub bride_side_guests: i64,
}

/// Folds the response collection into its summary.
///
/// Side splits only count attending responses; a response that did not
/// specify a party size counts as one guest.
pub fn summarize(responses: &[RsvpResponse]) -> RsvpSummary {
    let mut summary = RsvpSummary {
        total: responses.len() as i64,
        ..RsvpSummary::default()
    };

    for response in responses {
        match response.attendance {
            Attendance::Attending => summary.attending += 1,
            Attendance::NotAttending => summary.not_attending += 1,
            Attendance::Pending => summary.pending += 1,
        }

        if response.attendance != Attendance::Attending {
            continue;
        }

        let guests = response.effective_guest_count();
        summary.total_guests += guests;
        match response.side {
            Some(GuestSide::Groom) => {
                summary.groom_side += 1;
                summary.groom_side_guests += guests;
            }
            Some(GuestSide::Bride) => {
                summary.bride_side += 1;
                summary.bride_side_guests += guests;
            }
            None => {}
        }
    }

    summary
}

/// Row filter for the dashboard list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpFilter {
    #[default]
    All,
    Attending,
    NotAttending,
    Pending,
    GroomSide,
    BrideSide,
}

impl RsvpFilter {
    fn matches(&self, response: &RsvpResponse) -> bool {
        match self {
            Self::All => true,
            Self::Attending => response.attendance == Attendance::Attending,
            Self::NotAttending => response.attendance == Attendance::NotAttending,
            Self::Pending => response.attendance == Attendance::Pending,
            Self::GroomSide => response.side == Some(GuestSide::Groom),
            Self::BrideSide => response.side == Some(GuestSide::Bride),
        }
    }
}

/// Sort order for the dashboard list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpSort {
    /// Most recent first.
    #[default]
    Date,
    /// Guest name ascending, 가나다 order for Hangul.
    Name,
    /// Largest party first.
    Count,
}

/// Dashboard list query: filter, then search, then sort.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RsvpQuery {
    #[serde(default)]
    pub filter: RsvpFilter,
    /// Case-insensitive substring match on the guest name.
    pub search: Option<String>,
    #[serde(default)]
    pub sort: RsvpSort,
}

/// Runs the full filter → search → sort pipeline over a snapshot.
///
/// Sorting is stable, so responses that compare equal keep their input
/// order.
pub fn filter_sort_search(responses: &[RsvpResponse], query: &RsvpQuery) -> Vec<RsvpResponse> {
    let needle = query
        .search
        .as_deref()
        .map(fold_for_search)
        .filter(|s| !s.is_empty());

    let mut rows: Vec<RsvpResponse> = responses
        .iter()
        .filter(|r| query.filter.matches(r))
        .filter(|r| match &needle {
            Some(needle) => fold_for_search(&r.guest_name).contains(needle.as_str()),
            None => true,
        })
        .cloned()
        .collect();

    match query.sort {
        RsvpSort::Date => rows.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        RsvpSort::Name => rows.sort_by(|a, b| compare_guest_names(&a.guest_name, &b.guest_name)),
        RsvpSort::Count => {
            rows.sort_by(|a, b| b.effective_guest_count().cmp(&a.effective_guest_count()))
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use fake::faker::name::raw::Name;
    use fake::locales::EN;
    use fake::Fake;
    use uuid::Uuid;

    fn response(
        name: &str,
        attendance: Attendance,
        guest_count: i64,
        side: Option<GuestSide>,
        minutes_ago: i64,
    ) -> RsvpResponse {
        RsvpResponse {
            id: Uuid::new_v4(),
            guest_name: name.to_string(),
            guest_phone: None,
            attendance,
            guest_count,
            message: None,
            side,
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
                - Duration::minutes(minutes_ago),
        }
    }

    fn sample() -> Vec<RsvpResponse> {
        vec![
            response("김철수", Attendance::Attending, 2, Some(GuestSide::Groom), 50),
            response("박영희", Attendance::Attending, 0, Some(GuestSide::Bride), 40),
            response("이민준", Attendance::NotAttending, 3, Some(GuestSide::Groom), 30),
            response("최수진", Attendance::Pending, 1, None, 20),
            response("Alice Kim", Attendance::Attending, 4, None, 10),
        ]
    }

    #[test]
    fn test_summarize_counts_and_sides() {
        let summary = summarize(&sample());
        assert_eq!(summary.total, 5);
        assert_eq!(summary.attending, 3);
        assert_eq!(summary.not_attending, 1);
        assert_eq!(summary.pending, 1);
        // 2 + default-1 + 4, attending only
        assert_eq!(summary.total_guests, 7);
        assert_eq!(summary.groom_side, 1);
        assert_eq!(summary.bride_side, 1);
        assert_eq!(summary.groom_side_guests, 2);
        assert_eq!(summary.bride_side_guests, 1);
    }

    #[test]
    fn test_summarize_empty_collection() {
        assert_eq!(summarize(&[]), RsvpSummary::default());
    }

    #[test]
    fn test_unspecified_party_size_counts_as_one() {
        let rows = vec![response("김철수", Attendance::Attending, 0, None, 0)];
        assert_eq!(summarize(&rows).total_guests, 1);
    }

    #[test]
    fn test_declines_never_add_guests() {
        let rows = vec![
            response("김철수", Attendance::NotAttending, 5, Some(GuestSide::Groom), 0),
            response("박영희", Attendance::Pending, 5, Some(GuestSide::Bride), 0),
        ];
        let summary = summarize(&rows);
        assert_eq!(summary.total_guests, 0);
        assert_eq!(summary.groom_side, 0);
        assert_eq!(summary.bride_side_guests, 0);
    }

    #[test]
    fn test_summary_invariant_over_generated_data() {
        let attendances = [
            Attendance::Attending,
            Attendance::NotAttending,
            Attendance::Pending,
        ];
        let sides = [Some(GuestSide::Groom), Some(GuestSide::Bride), None];
        let rows: Vec<RsvpResponse> = (0..200)
            .map(|i| {
                let name: String = Name(EN).fake();
                response(
                    &name,
                    attendances[i % 3],
                    (0..6).fake(),
                    sides[i % 3],
                    i as i64,
                )
            })
            .collect();

        let summary = summarize(&rows);
        assert_eq!(
            summary.attending + summary.not_attending + summary.pending,
            summary.total
        );
        assert!(summary.total_guests >= summary.attending);
        assert!(summary.groom_side + summary.bride_side <= summary.attending);
    }

    #[test]
    fn test_filter_by_attendance_and_side() {
        let rows = sample();

        let attending = filter_sort_search(
            &rows,
            &RsvpQuery {
                filter: RsvpFilter::Attending,
                ..RsvpQuery::default()
            },
        );
        assert_eq!(attending.len(), 3);

        let groom = filter_sort_search(
            &rows,
            &RsvpQuery {
                filter: RsvpFilter::GroomSide,
                ..RsvpQuery::default()
            },
        );
        // Side filter is independent of attendance.
        assert_eq!(groom.len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive_and_after_filter() {
        let rows = sample();

        let hits = filter_sort_search(
            &rows,
            &RsvpQuery {
                search: Some("alice".to_string()),
                ..RsvpQuery::default()
            },
        );
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].guest_name, "Alice Kim");

        let hangul = filter_sort_search(
            &rows,
            &RsvpQuery {
                filter: RsvpFilter::Attending,
                search: Some("철수".to_string()),
                ..RsvpQuery::default()
            },
        );
        assert_eq!(hangul.len(), 1);

        let filtered_out = filter_sort_search(
            &rows,
            &RsvpQuery {
                filter: RsvpFilter::Pending,
                search: Some("철수".to_string()),
                ..RsvpQuery::default()
            },
        );
        assert!(filtered_out.is_empty());
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let rows = sample();
        let all = filter_sort_search(
            &rows,
            &RsvpQuery {
                search: Some("   ".to_string()),
                ..RsvpQuery::default()
            },
        );
        assert_eq!(all.len(), rows.len());
    }

    #[test]
    fn test_sort_by_date_most_recent_first() {
        let sorted = filter_sort_search(&sample(), &RsvpQuery::default());
        assert_eq!(sorted[0].guest_name, "Alice Kim");
        assert_eq!(sorted.last().unwrap().guest_name, "김철수");
    }

    #[test]
    fn test_sort_by_date_is_stable_for_ties() {
        let mut rows = sample();
        let shared_instant = rows[0].created_at;
        for row in &mut rows {
            row.created_at = shared_instant;
        }
        let names_in: Vec<String> = rows.iter().map(|r| r.guest_name.clone()).collect();
        let sorted = filter_sort_search(&rows, &RsvpQuery::default());
        let names_out: Vec<String> = sorted.iter().map(|r| r.guest_name.clone()).collect();
        assert_eq!(names_in, names_out);
    }

    #[test]
    fn test_sort_by_name_uses_ganada_order() {
        let sorted = filter_sort_search(
            &sample(),
            &RsvpQuery {
                sort: RsvpSort::Name,
                ..RsvpQuery::default()
            },
        );
        let names: Vec<&str> = sorted.iter().map(|r| r.guest_name.as_str()).collect();
        assert_eq!(
            names,
            ["Alice Kim", "김철수", "박영희", "이민준", "최수진"]
        );
    }

    #[test]
    fn test_sort_by_count_normalizes_unspecified() {
        let sorted = filter_sort_search(
            &sample(),
            &RsvpQuery {
                sort: RsvpSort::Count,
                ..RsvpQuery::default()
            },
        );
        let counts: Vec<i64> = sorted.iter().map(|r| r.effective_guest_count()).collect();
        assert_eq!(counts, [4, 3, 2, 1, 1]);
    }

    #[test]
    fn test_pipeline_leaves_input_untouched() {
        let rows = sample();
        let before: Vec<String> = rows.iter().map(|r| r.guest_name.clone()).collect();
        let _ = filter_sort_search(
            &rows,
            &RsvpQuery {
                filter: RsvpFilter::Attending,
                search: Some("kim".to_string()),
                sort: RsvpSort::Name,
            },
        );
        let after: Vec<String> = rows.iter().map(|r| r.guest_name.clone()).collect();
        assert_eq!(before, after);
    }
}
