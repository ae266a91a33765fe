//! End-to-end validation against QuantLib-derived reference values.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

use cadence_core::calendars::{BusinessDayConvention, Calendar};
use cadence_core::daycounts::DayCountConvention;
use cadence_core::types::Date;
use cadence_schedule::{DateGenerationRule, Schedule, ScheduleConfig};

fn date(token: &str) -> Date {
    Date::parse(token).unwrap()
}

/// Semi-annual swap schedule over US government securities holidays,
/// fixing in arrears with a one-day offset and paying two days after
/// each period end.
#[test]
fn usgs_backward_six_month_schedule() {
    let calendar: Calendar = "USGS".parse().unwrap();
    let config = ScheduleConfig::new(date("25-05-2025"), date("30-01-2027"), "6M".parse().unwrap())
        .with_accrual_calendar(calendar.clone())
        .with_accrual_convention(BusinessDayConvention::Following)
        .with_day_count(DayCountConvention::Act360)
        .with_rule(DateGenerationRule::Backward)
        .with_end_of_month(false)
        .with_fix_in_arrear(true)
        .with_fixing_offset("1D".parse().unwrap())
        .with_payment_offset("2D".parse().unwrap())
        .with_payment_convention(BusinessDayConvention::Following)
        .with_payment_calendar(calendar);

    let schedule = Schedule::generate(&config).unwrap();
    assert_eq!(schedule.len(), 4);

    let expected = [
        ("27-05-2025", "30-07-2025", "31-07-2025", "01-08-2025", dec!(64)),
        ("30-07-2025", "30-01-2026", "02-02-2026", "03-02-2026", dec!(184)),
        ("30-01-2026", "30-07-2026", "31-07-2026", "03-08-2026", dec!(181)),
        ("30-07-2026", "01-02-2027", "02-02-2027", "03-02-2027", dec!(186)),
    ];

    for (row, (start, end, fixing, payment, days)) in schedule.rows().iter().zip(expected) {
        assert_eq!(row.accrual_start, date(start));
        assert_eq!(row.accrual_end, date(end));
        assert_eq!(row.fixing_date, date(fixing));
        assert_eq!(row.payment_date, date(payment));
        assert_eq!(row.year_fraction, days / dec!(360));
    }
}

/// Negative offsets advance backward from their anchors.
#[test]
fn negative_offsets_advance_backward() {
    let calendar: Calendar = "USGS".parse().unwrap();
    let config = ScheduleConfig::new(date("25-05-2025"), date("30-01-2027"), "6M".parse().unwrap())
        .with_accrual_calendar(calendar.clone())
        .with_accrual_convention(BusinessDayConvention::Following)
        .with_day_count(DayCountConvention::Act360)
        .with_fixing_offset("-2D".parse().unwrap())
        .with_payment_offset("-1D".parse().unwrap())
        .with_payment_calendar(calendar.clone());

    let schedule = Schedule::generate(&config).unwrap();
    assert_eq!(schedule.len(), 4);

    for row in &schedule {
        // Fixing anchors on the accrual start (not in arrears here) and
        // steps back two business days; payment steps back one from the
        // period end.
        assert_eq!(
            row.fixing_date,
            calendar.add_business_days(row.accrual_start, -2)
        );
        assert_eq!(
            row.payment_date,
            calendar.add_business_days(row.accrual_end, -1)
        );
        assert!(row.fixing_date < row.accrual_start);
        assert!(row.payment_date < row.accrual_end);
    }

    // First period start is Tuesday 27-05-2025; two business days back
    // crosses the weekend and Memorial Day to Thursday 22-05-2025
    assert_eq!(schedule.rows()[0].fixing_date, date("22-05-2025"));
}

#[test]
fn act_act_isda_reference_fraction() {
    let dc = DayCountConvention::ActActIsda.to_day_count(&Calendar::Null);
    let yf = dc
        .year_fraction(date("25-05-2025"), date("25-08-2025"))
        .to_f64()
        .unwrap();
    assert!((yf - 0.252055).abs() < 1e-6);
}

#[test]
fn adjust_sunday_following() {
    let calendar: Calendar = "USGS".parse().unwrap();
    // 21-12-2025 is a Sunday
    assert_eq!(
        calendar.adjust(date("21-12-2025"), BusinessDayConvention::Following),
        date("22-12-2025")
    );
}

#[test]
fn new_years_day_is_closed() {
    let calendar: Calendar = "USGS".parse().unwrap();
    assert!(calendar.is_holiday(date("01-01-2026")));
}

#[test]
fn advance_zero_days_equals_adjust() {
    let calendar: Calendar = "USGS".parse().unwrap();
    let zero = "0D".parse().unwrap();
    for token in ["21-12-2025", "25-05-2025", "30-07-2025", "04-07-2026"] {
        let d = date(token);
        for convention in [
            BusinessDayConvention::Following,
            BusinessDayConvention::ModifiedFollowing,
            BusinessDayConvention::Preceding,
            BusinessDayConvention::ModifiedPreceding,
            BusinessDayConvention::Unadjusted,
        ] {
            assert_eq!(
                calendar.advance(d, zero, convention, false),
                calendar.adjust(d, convention)
            );
        }
    }
}

/// The joint EUR calendar can only be more closed than its members.
#[test]
fn joint_eur_calendar_is_conservative() {
    let target: Calendar = "TARGET".parse().unwrap();
    let Calendar::Joint(members, _) = &target else {
        panic!("TARGET should resolve to a joint calendar");
    };

    let mut d = date("01-01-2025");
    let end = date("01-01-2026");
    while d < end {
        if target.is_business_day(d) {
            for member in members {
                assert!(member.is_business_day(d), "{} closed on {}", member, d);
            }
        }
        d = d.add_days(1);
    }
}
