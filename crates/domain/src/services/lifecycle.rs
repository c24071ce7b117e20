//! Scheduled-deletion policy for invitation rows.
//!
//! Unpaid invitations get a short grace window from creation; paid ones are
//! retained for a fixed window past the wedding itself so guests can still
//! open the page after the event. This module only reports the schedule; the
//! deletion job and the banner rendering live elsewhere.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::models::invitation::InvitationRecord;

/// Retention past the wedding date for paid invitations.
const PAID_RETENTION_DAYS: i64 = 30;

/// Grace window from creation for unpaid invitations.
const UNPAID_GRACE_DAYS: i64 = 7;

/// Which date the deletion schedule was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeletionBasis {
    Wedding,
    Created,
}

/// One invitation's deletion schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct DeletionNotice {
    /// Whole days until deletion, rounded up; negative once the date passed.
    pub days: i64,
    pub basis: DeletionBasis,
    pub delete_at: DateTime<Utc>,
}

/// Computes the deletion schedule as of `now`.
///
/// A paid invitation without a wedding date has no computable schedule and
/// yields `None` rather than a guess.
pub fn deletion_notice_at(invitation: &InvitationRecord, now: DateTime<Utc>) -> Option<DeletionNotice> {
    let (basis, delete_at) = if invitation.is_paid {
        let wedding = invitation.wedding_date?;
        let delete_on = wedding + chrono::Duration::days(PAID_RETENTION_DAYS);
        let delete_at = Utc
            .with_ymd_and_hms(delete_on.year(), delete_on.month(), delete_on.day(), 0, 0, 0)
            .single()?;
        (DeletionBasis::Wedding, delete_at)
    } else {
        (
            DeletionBasis::Created,
            invitation.created_at + chrono::Duration::days(UNPAID_GRACE_DAYS),
        )
    };

    Some(DeletionNotice {
        days: days_until(delete_at, now),
        basis,
        delete_at,
    })
}

/// Convenience wrapper over [`deletion_notice_at`] for the current instant.
pub fn deletion_notice(invitation: &InvitationRecord) -> Option<DeletionNotice> {
    deletion_notice_at(invitation, Utc::now())
}

/// Whole days from `now` to `until`, rounded up.
fn days_until(until: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    const DAY_SECONDS: i64 = 24 * 60 * 60;
    let seconds = (until - now).num_seconds();
    seconds.div_euclid(DAY_SECONDS) + i64::from(seconds.rem_euclid(DAY_SECONDS) > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn invitation(is_paid: bool, wedding_date: Option<NaiveDate>, created_at: DateTime<Utc>) -> InvitationRecord {
        InvitationRecord {
            id: Uuid::new_v4(),
            slug: "minjun-sora".to_string(),
            template_id: "our".to_string(),
            groom_name: "민준".to_string(),
            bride_name: "소라".to_string(),
            wedding_date,
            wedding_time: None,
            venue_name: None,
            is_published: true,
            is_paid,
            created_at,
            updated_at: created_at,
            content: None,
        }
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_paid_uses_wedding_basis() {
        let inv = invitation(
            true,
            NaiveDate::from_ymd_opt(2025, 1, 1),
            at(2024, 12, 1),
        );
        let notice = deletion_notice_at(&inv, at(2025, 1, 20)).unwrap();
        assert_eq!(notice.basis, DeletionBasis::Wedding);
        assert_eq!(notice.delete_at, at(2025, 1, 31));
        assert_eq!(notice.days, 11);
    }

    #[test]
    fn test_paid_without_wedding_date_is_not_computable() {
        let inv = invitation(true, None, at(2025, 1, 1));
        assert!(deletion_notice_at(&inv, at(2025, 1, 2)).is_none());
    }

    #[test]
    fn test_unpaid_uses_created_basis() {
        let inv = invitation(false, None, at(2025, 1, 1));
        let notice = deletion_notice_at(&inv, at(2025, 1, 5)).unwrap();
        assert_eq!(notice.basis, DeletionBasis::Created);
        assert_eq!(notice.delete_at, at(2025, 1, 8));
        assert_eq!(notice.days, 3);
    }

    #[test]
    fn test_unpaid_ignores_wedding_date() {
        let inv = invitation(
            false,
            NaiveDate::from_ymd_opt(2026, 6, 1),
            at(2025, 1, 1),
        );
        let notice = deletion_notice_at(&inv, at(2025, 1, 5)).unwrap();
        assert_eq!(notice.basis, DeletionBasis::Created);
        assert_eq!(notice.days, 3);
    }

    #[test]
    fn test_partial_day_rounds_up() {
        let inv = invitation(false, None, at(2025, 1, 1));
        let now = Utc.with_ymd_and_hms(2025, 1, 5, 18, 30, 0).unwrap();
        // 2d5h30m remaining reports as 3 days.
        assert_eq!(deletion_notice_at(&inv, now).unwrap().days, 3);
    }

    #[test]
    fn test_past_deadline_reports_negative_days() {
        let inv = invitation(false, None, at(2025, 1, 1));
        let notice = deletion_notice_at(&inv, at(2025, 1, 15)).unwrap();
        assert_eq!(notice.days, -7);
    }

    #[test]
    fn test_deletion_instant_reports_zero() {
        let inv = invitation(false, None, at(2025, 1, 1));
        let notice = deletion_notice_at(&inv, at(2025, 1, 8)).unwrap();
        assert_eq!(notice.days, 0);
    }
}
