use rust_decimal::Decimal;
use serde::Serialize;

use super::engine::{ComparisonResult, ProjectionPoint};

/// 두 전략 총액의 막대 비율 (가장 큰 값 = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonBars {
    pub recurring: Decimal,
    pub one_time: Decimal,
}

/// 연도별 막대 비율.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointBars {
    pub year: u32,
    pub recurring: Decimal,
    pub one_time: Decimal,
}

fn fraction(value: Decimal, max: Decimal) -> Decimal {
    if max.is_zero() {
        Decimal::ZERO
    } else {
        value.checked_div(max).unwrap_or(Decimal::ZERO)
    }
}

pub fn comparison_bars(comparison: &ComparisonResult) -> ComparisonBars {
    let max = comparison.total_recurring.max(comparison.total_one_time);
    ComparisonBars {
        recurring: fraction(comparison.total_recurring, max),
        one_time: fraction(comparison.total_one_time, max),
    }
}

/// 전체 포인트 중 최댓값 기준으로 각 연도의 막대 비율을 구한다.
pub fn point_bars(points: &[ProjectionPoint]) -> Vec<PointBars> {
    let max = points
        .iter()
        .flat_map(|p| [p.cumulative_recurring_cost, p.cumulative_one_time_cost])
        .max()
        .unwrap_or(Decimal::ZERO);
    points
        .iter()
        .map(|p| PointBars {
            year: p.year,
            recurring: fraction(p.cumulative_recurring_cost, max),
            one_time: fraction(p.cumulative_one_time_cost, max),
        })
        .collect()
}

/// 비율을 `width` 칸의 텍스트 막대로 그린다. 0이 아닌 값은 최소 한 칸.
pub fn text_bar(fraction: Decimal, width: usize) -> String {
    use rust_decimal::prelude::ToPrimitive;
    let cells = (fraction * Decimal::from(width as u64))
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(width);
    let cells = if cells == 0 && fraction > Decimal::ZERO { 1 } else { cells };
    "█".repeat(cells)
}
