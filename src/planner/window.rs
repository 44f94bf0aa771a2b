use crate::domain::{GoalWindow, InputError};
use crate::extensions::date_time_ext::StartOfDay;
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

const WEEK_DAYS: i64 = 7;
const MONTH_DAYS: i64 = 30;

/// A concrete half-open interval `[start, end)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TimeBound {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl GoalWindow {
    /// Resolves the window against `now`. "Today" ends at the next midnight in `time_zone`.
    pub fn resolve(&self, now: DateTime<Utc>, time_zone: Tz) -> Result<TimeBound, InputError> {
        let end = match self {
            GoalWindow::Today => {
                let today = now.with_timezone(&time_zone).date_naive();
                let tomorrow = today.succ_opt().ok_or(InputError::DateOutOfRange(today))?;
                tomorrow.start_of_day_in(&time_zone).ok_or(InputError::DateOutOfRange(tomorrow))?
            }
            GoalWindow::NextHours(0) => return Err(InputError::InvalidHours(0)),
            GoalWindow::NextHours(hours) => now
                .checked_add_signed(Duration::hours(*hours as i64))
                .ok_or(InputError::InvalidHours(*hours))?,
            GoalWindow::ThisWeek => after_days(now, WEEK_DAYS)?,
            GoalWindow::ThisMonth => after_days(now, MONTH_DAYS)?,
            GoalWindow::Custom { start, end } => {
                if start >= end {
                    return Err(InputError::InvalidWindow { start: *start, end: *end });
                }
                return Ok(TimeBound { start: *start, end: *end });
            }
        };

        Ok(TimeBound { start: now, end })
    }
}

fn after_days(now: DateTime<Utc>, days: i64) -> Result<DateTime<Utc>, InputError> {
    now.checked_add_signed(Duration::days(days))
        .ok_or(InputError::DateOutOfRange(now.date_naive()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::America::New_York;
    use chrono_tz::Asia::Kolkata;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 5, 10, 0, 0).unwrap()
    }

    #[rstest]
    #[case::today_in_india(GoalWindow::Today, Kolkata, Utc.with_ymd_and_hms(2026, 2, 5, 18, 30, 0).unwrap())]
    #[case::today_in_new_york(GoalWindow::Today, New_York, Utc.with_ymd_and_hms(2026, 2, 6, 5, 0, 0).unwrap())]
    #[case::next_three_hours(GoalWindow::NextHours(3), Kolkata, Utc.with_ymd_and_hms(2026, 2, 5, 13, 0, 0).unwrap())]
    #[case::this_week(GoalWindow::ThisWeek, Kolkata, Utc.with_ymd_and_hms(2026, 2, 12, 10, 0, 0).unwrap())]
    #[case::this_month(GoalWindow::ThisMonth, Kolkata, Utc.with_ymd_and_hms(2026, 3, 7, 10, 0, 0).unwrap())]
    fn resolves_windows_starting_now(#[case] window: GoalWindow, #[case] time_zone: Tz, #[case] expected_end: DateTime<Utc>) {
        assert_eq!(window.resolve(now(), time_zone), Ok(TimeBound { start: now(), end: expected_end }));
    }

    #[test]
    fn today_after_local_midnight_ends_at_the_following_midnight() {
        // 20:00 UTC is already 01:30 on the 6th in India
        let now = Utc.with_ymd_and_hms(2026, 2, 5, 20, 0, 0).unwrap();

        let bound = GoalWindow::Today.resolve(now, Kolkata).unwrap();

        assert_eq!(bound.end, Utc.with_ymd_and_hms(2026, 2, 6, 18, 30, 0).unwrap());
    }

    #[test]
    fn custom_windows_keep_the_caller_bound() {
        let start = Utc.with_ymd_and_hms(2026, 2, 7, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 2, 8, 0, 0, 0).unwrap();

        assert_eq!(GoalWindow::Custom { start, end }.resolve(now(), Kolkata), Ok(TimeBound { start, end }));
    }

    #[rstest]
    #[case::equal_bounds(now(), now())]
    #[case::reversed_bounds(now(), now() - Duration::hours(1))]
    fn rejects_empty_custom_windows(#[case] start: DateTime<Utc>, #[case] end: DateTime<Utc>) {
        assert_eq!(GoalWindow::Custom { start, end }.resolve(now(), Kolkata), Err(InputError::InvalidWindow { start, end }));
    }

    #[test]
    fn rejects_zero_hours() {
        assert_eq!(GoalWindow::NextHours(0).resolve(now(), Kolkata), Err(InputError::InvalidHours(0)));
    }

    #[test]
    fn rejects_hours_beyond_the_calendar() {
        assert_eq!(GoalWindow::NextHours(u32::MAX).resolve(now(), Kolkata), Err(InputError::InvalidHours(u32::MAX)));
    }

    #[rstest]
    #[case::this_week(GoalWindow::ThisWeek)]
    #[case::this_month(GoalWindow::ThisMonth)]
    fn rejects_windows_ending_beyond_the_calendar(#[case] window: GoalWindow) {
        let now = DateTime::<Utc>::MAX_UTC - Duration::days(1);

        assert_eq!(window.resolve(now, Kolkata), Err(InputError::DateOutOfRange(now.date_naive())));
    }
}
