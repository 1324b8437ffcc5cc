//! 임의의 유효 가정값에 대해 계산 불변식을 확인한다.
use cost_projection_toolbox::projection::{break_even, project, BreakEvenStatus, PricingAssumptions};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn money() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000, 0u32..=4).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
}

fn assumptions() -> impl Strategy<Value = PricingAssumptions> {
    (money(), money(), 1u32..=52, 1u32..=50)
        .prop_map(|(r, o, p, y)| PricingAssumptions::new(r, o, p, y))
}

proptest! {
    #[test]
    fn points_follow_closed_form(a in assumptions()) {
        let projection = project(&a).expect("valid assumptions");
        prop_assert_eq!(projection.points.len(), a.horizon_years as usize);
        for (i, p) in projection.points.iter().enumerate() {
            prop_assert_eq!(p.year as usize, i + 1);
            prop_assert_eq!(p.cumulative_one_time_cost, a.one_time_cost);
            let expected = a.recurring_cost * Decimal::from(a.periods_per_year) * Decimal::from(p.year);
            prop_assert_eq!(p.cumulative_recurring_cost, expected);
        }
    }

    #[test]
    fn recurring_total_is_monotonic(a in assumptions()) {
        let projection = project(&a).expect("valid assumptions");
        for w in projection.points.windows(2) {
            if a.recurring_cost.is_zero() {
                prop_assert!(w[1].cumulative_recurring_cost.is_zero());
            } else {
                prop_assert!(w[1].cumulative_recurring_cost > w[0].cumulative_recurring_cost);
            }
        }
    }

    #[test]
    fn comparison_matches_final_point(a in assumptions()) {
        let projection = project(&a).expect("valid assumptions");
        let last = projection.points.last().expect("at least one point");
        let cmp = projection.comparison;
        prop_assert_eq!(cmp.total_recurring, last.cumulative_recurring_cost);
        prop_assert_eq!(cmp.total_one_time, a.one_time_cost);
        prop_assert_eq!(cmp.savings, cmp.total_recurring - cmp.total_one_time);
        prop_assert_eq!(cmp.savings_ratio.is_none(), cmp.total_recurring.is_zero());
        prop_assert_eq!(project(&a).expect("again"), projection.clone());
    }

    #[test]
    fn break_even_is_first_covering_period(a in assumptions()) {
        match break_even(&a).expect("valid assumptions") {
            BreakEvenStatus::Reached(be) if be.period.is_zero() => {
                prop_assert!(a.one_time_cost.is_zero());
            }
            BreakEvenStatus::Reached(be) => {
                let covered = a.recurring_cost * be.period;
                let before = a.recurring_cost * (be.period - Decimal::ONE);
                prop_assert!(covered >= a.one_time_cost);
                prop_assert!(before < a.one_time_cost);
                let per_year = Decimal::from(a.periods_per_year);
                prop_assert!(be.year * per_year >= be.period);
                prop_assert!((be.year - Decimal::ONE) * per_year < be.period);
            }
            BreakEvenStatus::Never => {
                prop_assert!(a.recurring_cost.is_zero() && !a.one_time_cost.is_zero());
            }
            BreakEvenStatus::Unavailable => prop_assert!(false, "unexpected overflow for {:?}", a),
        }
    }
}
