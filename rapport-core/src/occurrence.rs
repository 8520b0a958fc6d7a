//! Next-occurrence calculation for recurring events.

use chrono::NaiveDate;
use log::warn;

use crate::event::{Event, RecurringType};

/// The next date on or after `today` on which `event` falls.
///
/// One-off events (including recurring events without a recognised unit)
/// return `event_date` unchanged, even when it is already in the past.
/// Recurring events step forward one unit at a time from `event_date`
/// until the date is no longer before `today`.
pub fn next_occurrence(event: &Event, today: NaiveDate) -> NaiveDate {
    let Some(unit) = event.recurrence() else {
        return event.event_date;
    };

    advance_until(event, unit, today, step_budget(unit, event.event_date, today))
}

/// Steps needed to cover `start..today`, plus slack. Each step moves at
/// least `unit.min_days()`, so a correct answer is always within budget.
fn step_budget(unit: RecurringType, start: NaiveDate, today: NaiveDate) -> u64 {
    let span = (today - start).num_days().max(0).unsigned_abs();
    let min_days = unit.min_days().unwrap_or(1);
    span / min_days + 2
}

fn advance_until(event: &Event, unit: RecurringType, today: NaiveDate, max_steps: u64) -> NaiveDate {
    let mut date = event.event_date;
    let mut steps = 0;

    while date < today {
        if steps == max_steps {
            warn!(
                "Gave up advancing '{}' after {} {} steps (reached {})",
                event.title, steps, unit, date
            );
            break;
        }

        match unit.advance(date) {
            Some(next) if next > date => date = next,
            _ => {
                warn!("Could not advance '{}' past {}", event.title, date);
                break;
            }
        }
        steps += 1;
    }

    date
}

/// Whole days from `today` to `date`; negative when `date` is in the past.
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::RecurringType;
    use chrono::Datelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn recurring(start: NaiveDate, unit: RecurringType) -> Event {
        let mut event = Event::new("Recurring", start);
        event.is_recurring = true;
        event.recurring_type = Some(unit);
        event
    }

    #[test]
    fn test_one_off_event_never_moves() {
        let event = Event::new("Concert", date(2024, 6, 1));

        assert_eq!(next_occurrence(&event, date(2025, 6, 1)), date(2024, 6, 1));
        assert_eq!(next_occurrence(&event, date(2020, 1, 1)), date(2024, 6, 1));
    }

    #[test]
    fn test_yearly_event_lands_in_current_year() {
        let event = recurring(date(2024, 1, 10), RecurringType::Yearly);

        assert_eq!(next_occurrence(&event, date(2025, 1, 5)), date(2025, 1, 10));
        assert_eq!(next_occurrence(&event, date(2025, 1, 20)), date(2026, 1, 10));
    }

    #[test]
    fn test_occurrence_on_today_is_kept() {
        let event = recurring(date(2024, 1, 10), RecurringType::Yearly);

        assert_eq!(next_occurrence(&event, date(2025, 1, 10)), date(2025, 1, 10));
    }

    #[test]
    fn test_future_start_is_returned_unchanged() {
        let event = recurring(date(2030, 5, 5), RecurringType::Weekly);

        assert_eq!(next_occurrence(&event, date(2025, 1, 1)), date(2030, 5, 5));
    }

    #[test]
    fn test_weekly_event_keeps_weekday() {
        // 2025-01-06 is a Monday
        let event = recurring(date(2025, 1, 6), RecurringType::Weekly);
        let next = next_occurrence(&event, date(2025, 3, 12));

        assert_eq!(next, date(2025, 3, 17));
        assert_eq!(next.weekday(), chrono::Weekday::Mon);
    }

    #[test]
    fn test_monthly_event_drifts_after_clamping() {
        let event = recurring(date(2025, 1, 31), RecurringType::Monthly);

        // Jan 31 -> Feb 28 -> Mar 28
        assert_eq!(next_occurrence(&event, date(2025, 3, 1)), date(2025, 3, 28));
    }

    #[test]
    fn test_malformed_recurrence_falls_back_to_event_date() {
        let mut event = recurring(date(2024, 1, 10), RecurringType::Unknown);
        assert_eq!(next_occurrence(&event, date(2025, 1, 5)), date(2024, 1, 10));

        event.recurring_type = None;
        assert_eq!(next_occurrence(&event, date(2025, 1, 5)), date(2024, 1, 10));
    }

    #[test]
    fn test_result_is_reachable_and_not_before_today() {
        let today = date(2025, 7, 19);
        for unit in [
            RecurringType::Weekly,
            RecurringType::Monthly,
            RecurringType::Yearly,
        ] {
            let event = recurring(date(1990, 8, 31), unit);
            let next = next_occurrence(&event, today);
            assert!(next >= today);

            let mut walked = event.event_date;
            while walked < next {
                walked = unit.advance(walked).unwrap();
            }
            assert_eq!(walked, next, "{unit} result not reachable from start");
            assert_eq!(next_occurrence(&event, today), next);
        }
    }

    #[test]
    fn test_search_stops_at_end_of_date_range() {
        let event = recurring(NaiveDate::MAX - chrono::Days::new(3), RecurringType::Weekly);

        assert_eq!(next_occurrence(&event, NaiveDate::MAX), event.event_date);
    }

    #[test]
    fn test_far_past_weekly_event_still_reaches_today() {
        let today = date(2025, 1, 1);
        let event = recurring(date(1, 1, 1), RecurringType::Weekly);

        let next = next_occurrence(&event, today);

        assert!(next >= today);
        assert!(days_until(next, today) < 7);
        assert_eq!(crate::upcoming_reminders(std::slice::from_ref(&event), today).len(), 1);
    }

    #[test]
    fn test_step_budget_covers_span_for_every_unit() {
        let start = date(1, 1, 1);
        let today = date(2025, 1, 1);

        for unit in [
            RecurringType::Weekly,
            RecurringType::Monthly,
            RecurringType::Yearly,
        ] {
            let budget = step_budget(unit, start, today);
            let event = recurring(start, unit);
            assert!(advance_until(&event, unit, today, budget) >= today, "{unit}");
        }
        assert_eq!(step_budget(RecurringType::Weekly, today, start), 2);
    }

    #[test]
    fn test_exhausted_budget_stops_before_today() {
        let today = date(2025, 1, 1);
        let event = recurring(date(1, 1, 1), RecurringType::Weekly);

        let stopped = advance_until(&event, RecurringType::Weekly, today, 3);

        assert_eq!(stopped, date(1, 1, 22));
        assert!(days_until(stopped, today) < 0);
    }

    #[test]
    fn test_days_until_sign() {
        assert_eq!(days_until(date(2025, 1, 10), date(2025, 1, 5)), 5);
        assert_eq!(days_until(date(2025, 1, 5), date(2025, 1, 5)), 0);
        assert_eq!(days_until(date(2024, 6, 1), date(2025, 6, 1)), -365);
    }
}
