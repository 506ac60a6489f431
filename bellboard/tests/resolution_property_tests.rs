//! Property tests over the resolution logic: interval coverage, countdown
//! bounds, and letter-cycle closure.

use bellboard::config::SchoolConfig;
use bellboard::models::DayOffset;
use bellboard::services::{letter_for, resolve, LetterDay};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use proptest::prelude::*;

fn is_school_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

fn six_school_weekdays_after(mut date: NaiveDate) -> NaiveDate {
    let mut stepped = 0;
    while stepped < 6 {
        date = date.succ_opt().unwrap();
        if is_school_weekday(date) {
            stepped += 1;
        }
    }
    date
}

proptest! {
    #[test]
    fn resolution_is_total_over_the_day(ms in 0i64..86_400_000) {
        let config = SchoolConfig::standard().unwrap();
        let table = &config.weekday_table;
        let at = DayOffset::new(ms);
        let resolved = resolve(table, at);

        if at < table.first().start {
            // Before opening: nothing active, the opening entry is next.
            prop_assert!(resolved.current.is_none());
            prop_assert_eq!(resolved.next.unwrap().label.as_str(), "Period 1");
        } else {
            // From first bell to midnight exactly one entry is active.
            let current = resolved.current.unwrap();
            prop_assert!(current.contains(at));
            let containing = table.entries().iter().filter(|entry| entry.contains(at)).count();
            prop_assert_eq!(containing, 1);
        }
    }

    #[test]
    fn countdown_is_positive_and_bounded_by_slot_length(ms in 0i64..86_400_000) {
        let config = SchoolConfig::standard().unwrap();
        let at = DayOffset::new(ms);
        if let Some(current) = resolve(&config.weekday_table, at).current {
            let remaining = current.end.value() - at.value();
            let length = current.end.value() - current.start.value();
            prop_assert!(remaining > 0);
            prop_assert!(remaining <= length);
        }
    }

    #[test]
    fn next_is_the_successor_of_current(ms in 0i64..86_400_000) {
        let config = SchoolConfig::standard().unwrap();
        let table = &config.weekday_table;
        let at = DayOffset::new(ms);
        let resolved = resolve(table, at);
        if let (Some(current), Some(next)) = (resolved.current, resolved.next) {
            // Contiguous tables: the next slot starts the instant this one ends.
            prop_assert_eq!(next.start, current.end);
        }
    }

    #[test]
    fn letter_cycle_closes_after_six_school_weekdays(offset_days in 0u64..30) {
        let config = SchoolConfig::standard().unwrap();
        let date = config
            .cycle
            .anchor_date
            .checked_add_days(Days::new(offset_days))
            .unwrap();
        prop_assume!(is_school_weekday(date));

        let later = six_school_weekdays_after(date);
        prop_assume!(config.terms.contains(date) && config.terms.contains(later));

        let here = letter_for(&config.cycle, &config.terms, date).unwrap();
        let again = letter_for(&config.cycle, &config.terms, later).unwrap();
        prop_assert!(matches!(here, LetterDay::Letter(_)));
        prop_assert_eq!(here, again);
    }
}
