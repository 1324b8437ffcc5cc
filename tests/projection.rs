//! 비용 비교 계산 회귀 테스트. 계산기 화면의 기본 예시(월 500 / 일회성 12,000 / 5년)를 기준으로 한다.
use cost_projection_toolbox::projection::{project, InvalidAssumptions, PricingAssumptions};
use rust_decimal::Decimal;

fn dec(v: i64) -> Decimal {
    Decimal::from(v)
}

fn scenario() -> PricingAssumptions {
    PricingAssumptions::new(dec(500), dec(12_000), 12, 5)
}

#[test]
fn five_year_cloud_vs_local_example() {
    let (points, cmp) = project(&scenario()).expect("projection").into_parts();
    assert_eq!(points.len(), 5);
    assert_eq!(points[0].cumulative_recurring_cost, dec(6_000));
    assert_eq!(points[4].cumulative_recurring_cost, dec(30_000));
    assert_eq!(cmp.total_recurring, dec(30_000));
    assert_eq!(cmp.total_one_time, dec(12_000));
    assert_eq!(cmp.savings, dec(18_000));
    assert_eq!(cmp.savings_ratio, Some(Decimal::new(6, 1)));
}

#[test]
fn points_are_consecutive_years() {
    let projection = project(&PricingAssumptions::new(dec(40), dec(900), 4, 9)).expect("projection");
    for (i, p) in projection.points.iter().enumerate() {
        assert_eq!(p.year as usize, i + 1);
        assert_eq!(p.cumulative_one_time_cost, dec(900));
        assert_eq!(p.cumulative_recurring_cost, dec(40 * 4) * Decimal::from(p.year));
    }
    assert_eq!(projection.final_point().map(|p| p.year), Some(9));
}

#[test]
fn fractional_costs_stay_exact() {
    // 0.1 * 12 * 3 = 3.6 exactly; binary floats would drift here
    let a = PricingAssumptions::new(Decimal::new(1, 1), Decimal::new(35, 1), 12, 3);
    let projection = project(&a).expect("projection");
    assert_eq!(projection.points[2].cumulative_recurring_cost, Decimal::new(36, 1));
    assert_eq!(projection.comparison.savings, Decimal::new(1, 1));
}

#[test]
fn single_year_horizon() {
    let projection = project(&PricingAssumptions::new(dec(500), dec(12_000), 12, 1)).expect("projection");
    assert_eq!(projection.points.len(), 1);
    assert_eq!(projection.points[0].year, 1);
    assert_eq!(projection.comparison.total_recurring, dec(6_000));
}

#[test]
fn savings_can_be_negative() {
    let projection = project(&PricingAssumptions::new(dec(100), dec(5_000), 12, 2)).expect("projection");
    assert_eq!(projection.comparison.savings, dec(-2_600));
    assert!(projection.comparison.savings_ratio.expect("ratio") < Decimal::ZERO);
    assert_eq!(projection.points[0].running_savings(), dec(-3_800));
}

#[test]
fn zero_recurring_cost_is_flat_and_has_no_ratio() {
    let projection = project(&PricingAssumptions::new(Decimal::ZERO, dec(1_000), 12, 3)).expect("projection");
    assert!(projection
        .points
        .iter()
        .all(|p| p.cumulative_recurring_cost.is_zero()));
    assert_eq!(projection.comparison.savings, dec(-1_000));
    assert_eq!(projection.comparison.savings_ratio, None);
}

#[test]
fn repeated_calls_are_identical() {
    let a = scenario();
    assert_eq!(project(&a).expect("first"), project(&a).expect("second"));
}

#[test]
fn invalid_assumptions_are_rejected() {
    let cases = [
        (PricingAssumptions::new(dec(-1), dec(10), 12, 5), InvalidAssumptions::NegativeRecurringCost),
        (PricingAssumptions::new(dec(1), dec(-10), 12, 5), InvalidAssumptions::NegativeOneTimeCost),
        (PricingAssumptions::new(dec(1), dec(10), 0, 5), InvalidAssumptions::ZeroPeriodsPerYear),
        (PricingAssumptions::new(dec(1), dec(10), 12, 0), InvalidAssumptions::ZeroHorizonYears),
    ];
    for (a, expected) in cases {
        assert_eq!(project(&a), Err(expected), "{a:?}");
    }
}

#[test]
fn overflow_is_reported_not_panicked() {
    let a = PricingAssumptions::new(Decimal::MAX, Decimal::ZERO, 12, 5);
    assert_eq!(project(&a), Err(InvalidAssumptions::OutOfRange));
}

#[test]
fn ratio_overflow_is_reported_not_hidden() {
    let a = PricingAssumptions::new(
        Decimal::new(1, 7),
        Decimal::from_i128_with_scale(10i128.pow(24), 0),
        1,
        1,
    );
    assert_eq!(project(&a), Err(InvalidAssumptions::OutOfRange));
}
