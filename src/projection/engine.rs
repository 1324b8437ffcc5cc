use rust_decimal::Decimal;
use serde::Serialize;

use super::assumptions::{InvalidAssumptions, PricingAssumptions};

/// 연도별 누적 비용.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectionPoint {
    /// 1부터 시작하는 연도
    pub year: u32,
    /// 해당 연도 말까지의 구독 비용 누계
    pub cumulative_recurring_cost: Decimal,
    /// 일회성 비용 (0년차에 한 번만 지불하므로 모든 연도에서 동일)
    pub cumulative_one_time_cost: Decimal,
}

impl ProjectionPoint {
    /// 해당 연도까지 로컬 전략을 택했을 때의 누적 절감액. 음수일 수 있다.
    pub fn running_savings(&self) -> Decimal {
        self.cumulative_recurring_cost - self.cumulative_one_time_cost
    }
}

/// 분석 기간 마지막 해 기준의 비교 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub total_recurring: Decimal,
    pub total_one_time: Decimal,
    /// `total_recurring - total_one_time`. 일회성 비용이 더 크면 음수.
    pub savings: Decimal,
    /// `savings / total_recurring`. 구독 비용 총계가 0이면 정의되지 않으므로 None.
    pub savings_ratio: Option<Decimal>,
}

/// `project`의 결과: 연도별 포인트와 최종 비교.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Projection {
    pub points: Vec<ProjectionPoint>,
    pub comparison: ComparisonResult,
}

impl Projection {
    pub fn into_parts(self) -> (Vec<ProjectionPoint>, ComparisonResult) {
        (self.points, self.comparison)
    }

    /// 마지막 연도 포인트. `project`가 만든 값은 항상 1개 이상의 포인트를 가진다.
    pub fn final_point(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }
}

/// 가정값으로 연도별 누적 비용과 최종 비교 결과를 계산한다.
///
/// 각 연도의 구독 비용 누계는 `recurring_cost * periods_per_year * year`의
/// 닫힌 식으로 직접 계산하므로 반복 누적에 의한 오차가 없다. 입력이 잘못되면
/// 포인트를 하나도 만들지 않고 즉시 오류를 반환한다.
pub fn project(assumptions: &PricingAssumptions) -> Result<Projection, InvalidAssumptions> {
    assumptions.validate()?;
    let annual = assumptions.annual_recurring_cost()?;

    let points = (1..=assumptions.horizon_years)
        .map(|year| {
            let cumulative_recurring_cost = annual
                .checked_mul(Decimal::from(year))
                .ok_or(InvalidAssumptions::OutOfRange)?;
            Ok(ProjectionPoint {
                year,
                cumulative_recurring_cost,
                cumulative_one_time_cost: assumptions.one_time_cost,
            })
        })
        .collect::<Result<Vec<_>, InvalidAssumptions>>()?;

    let last = points.last().ok_or(InvalidAssumptions::ZeroHorizonYears)?;
    let comparison = compare(last)?;
    Ok(Projection { points, comparison })
}

fn compare(last: &ProjectionPoint) -> Result<ComparisonResult, InvalidAssumptions> {
    let total_recurring = last.cumulative_recurring_cost;
    let total_one_time = last.cumulative_one_time_cost;
    let savings = total_recurring
        .checked_sub(total_one_time)
        .ok_or(InvalidAssumptions::OutOfRange)?;
    let savings_ratio = if total_recurring.is_zero() {
        None
    } else {
        Some(
            savings
                .checked_div(total_recurring)
                .ok_or(InvalidAssumptions::OutOfRange)?,
        )
    };
    Ok(ComparisonResult {
        total_recurring,
        total_one_time,
        savings,
        savings_ratio,
    })
}
