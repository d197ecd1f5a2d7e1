//! Property-based tests for holiday calendars and business day arithmetic.

use almanac_core::calendars::{
    add_business_days, adjust, advance, is_business_day, BusinessDayConvention, ExplicitDateRule,
    FixedDateRule, HolidayCalendar, HolidayRule, NthWeekdayRule, Occurrence,
};
use almanac_core::error::AlmanacError;
use almanac_core::types::{Date, Period, TimeUnit, WeekendDays, Weekday};
use proptest::prelude::*;

fn any_date() -> impl Strategy<Value = Date> {
    let base = Date::from_ymd(1900, 1, 1).unwrap();
    // 1900-01-01 through roughly 2099
    (0i64..73_000).prop_map(move |offset| base.checked_add_days(offset).unwrap())
}

fn any_rule() -> impl Strategy<Value = HolidayRule> {
    prop_oneof![
        (1u32..=12, 1u32..=31).prop_map(|(month, day)| -> HolidayRule {
            FixedDateRule::new("fixed", month, day).unwrap().into()
        }),
        (1u32..=12, 0u8..7, prop_oneof![1i32..=5, Just(-1)]).prop_map(
            |(month, weekday, occurrence)| -> HolidayRule {
                NthWeekdayRule::from_encoded("nth", month, weekday, occurrence)
                    .unwrap()
                    .into()
            }
        ),
        any_date().prop_map(|date| -> HolidayRule {
            ExplicitDateRule::new("explicit", date).into()
        }),
    ]
}

fn any_calendar() -> impl Strategy<Value = HolidayCalendar> {
    prop::collection::vec(any_rule(), 0..12)
        .prop_map(|rules| rules.into_iter().collect::<HolidayCalendar>())
}

/// Weekends that leave at least one business day per week.
fn any_weekend() -> impl Strategy<Value = WeekendDays> {
    (0u8..0b111_1111).prop_map(|mask| {
        WeekendDays::from_days(
            Weekday::ALL
                .into_iter()
                .filter(|day| mask & (1 << day.index()) != 0),
        )
    })
}

fn rolling_convention() -> impl Strategy<Value = BusinessDayConvention> {
    prop_oneof![
        Just(BusinessDayConvention::Following),
        Just(BusinessDayConvention::ModifiedFollowing),
        Just(BusinessDayConvention::Preceding),
        Just(BusinessDayConvention::ModifiedPreceding),
    ]
}

proptest! {
    #[test]
    fn empty_calendar_business_day_is_weekday_check(
        date in any_date(),
        weekend in any_weekend(),
    ) {
        let calendar = HolidayCalendar::new();
        prop_assert_eq!(
            is_business_day(date, &calendar, &weekend),
            !weekend.contains(date.weekday())
        );
    }

    #[test]
    fn holidays_are_strictly_ascending_and_holidays(
        calendar in any_calendar(),
        year in 1900i32..2100,
    ) {
        let holidays = calendar.holidays(year);
        for pair in holidays.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
        for date in &holidays {
            prop_assert_eq!(date.year(), year);
            prop_assert!(calendar.is_holiday(*date));
        }
    }

    #[test]
    fn unadjusted_is_identity(
        date in any_date(),
        calendar in any_calendar(),
        weekend in any_weekend(),
    ) {
        let adjusted = adjust(date, BusinessDayConvention::Unadjusted, &calendar, &weekend);
        prop_assert_eq!(adjusted.unwrap(), date);

        let all = WeekendDays::all();
        let adjusted = adjust(date, BusinessDayConvention::Unadjusted, &calendar, &all);
        prop_assert_eq!(adjusted.unwrap(), date);
    }

    #[test]
    fn adjust_lands_on_business_day_and_is_idempotent(
        date in any_date(),
        calendar in any_calendar(),
        weekend in any_weekend(),
        convention in rolling_convention(),
    ) {
        let once = adjust(date, convention, &calendar, &weekend).unwrap();
        prop_assert!(is_business_day(once, &calendar, &weekend));
        prop_assert_eq!(adjust(once, convention, &calendar, &weekend).unwrap(), once);
    }

    #[test]
    fn modified_conventions_stay_in_month_when_possible(
        date in any_date(),
        weekend in any_weekend(),
    ) {
        // Modified Following only falls back when Following leaves the month
        let calendar = HolidayCalendar::new();
        let roll = |convention| adjust(date, convention, &calendar, &weekend).unwrap();
        let following = roll(BusinessDayConvention::Following);
        let modified = roll(BusinessDayConvention::ModifiedFollowing);
        if following.month() == date.month() {
            prop_assert_eq!(modified, following);
        } else {
            prop_assert!(modified <= date);
        }
    }

    #[test]
    fn zero_period_is_identity(
        date in any_date(),
        calendar in any_calendar(),
        unit in prop_oneof![
            Just(TimeUnit::Days),
            Just(TimeUnit::Weeks),
            Just(TimeUnit::Months),
            Just(TimeUnit::Years),
        ],
    ) {
        let weekend = WeekendDays::default();
        let advanced = advance(
            date,
            Period::new(0, unit),
            BusinessDayConvention::Unadjusted,
            &calendar,
            &weekend,
        );
        prop_assert_eq!(advanced.unwrap(), date);
    }

    #[test]
    fn month_advance_clamps_to_month_end(date in any_date(), months in -240i32..240) {
        let advanced = date.add_months(months).unwrap();
        prop_assert!(advanced.day() <= date.day());
        if advanced.day() < date.day() {
            prop_assert_eq!(advanced, advanced.end_of_month());
        }
    }

    #[test]
    fn business_day_steps_round_trip(
        date in any_date(),
        calendar in any_calendar(),
        weekend in any_weekend(),
        days in 1i32..30,
    ) {
        let forward = add_business_days(date, days, &calendar, &weekend).unwrap();
        prop_assert!(forward > date);
        prop_assert!(is_business_day(forward, &calendar, &weekend));

        let back = add_business_days(forward, -days, &calendar, &weekend).unwrap();
        if is_business_day(date, &calendar, &weekend) {
            prop_assert_eq!(back, date);
        } else {
            prop_assert!(back < date);
        }
    }

    #[test]
    fn fifth_occurrence_exists_only_past_day_28(
        year in 1900i32..2100,
        month in 1u32..=12,
        weekday in 0u8..7,
    ) {
        let rule = NthWeekdayRule::from_encoded("fifth", month, weekday, 5).unwrap();
        match rule.calculate_date(year) {
            Ok(date) => {
                prop_assert!(date.day() >= 29);
                prop_assert_eq!(date.month(), month);
                prop_assert!(rule.applies_to(year));
            }
            Err(err) => {
                let is_not_applicable = matches!(err, AlmanacError::RuleNotApplicable { .. });
                prop_assert!(is_not_applicable);
                prop_assert!(!rule.applies_to(year));
            }
        }
    }

    #[test]
    fn last_occurrence_is_in_final_week(
        year in 1900i32..2100,
        month in 1u32..=12,
        weekday in 0u8..7,
    ) {
        let rule = NthWeekdayRule::from_encoded("last", month, weekday, -1).unwrap();
        let date = rule.calculate_date(year).unwrap();
        prop_assert_eq!(rule.occurrence(), Occurrence::Last);
        prop_assert_eq!(date.weekday().index(), weekday);
        prop_assert!(date.end_of_month().day() - date.day() < 7);
    }
}
