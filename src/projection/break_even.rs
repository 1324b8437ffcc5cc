use rust_decimal::Decimal;
use serde::Serialize;

use super::assumptions::{InvalidAssumptions, PricingAssumptions};

/// 손익분기 시점.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BreakEven {
    /// 구독 누계가 일회성 비용 이상이 되는 첫 청구 회차 (일회성 비용이 0이면 0)
    pub period: Decimal,
    /// 해당 회차가 속한 연도 (1부터, period가 0이면 0)
    pub year: Decimal,
}

/// 손익분기 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BreakEvenStatus {
    Reached(BreakEven),
    /// 구독 비용이 0이라 일회성 비용을 따라잡지 못함
    Never,
    /// 회차 수가 Decimal 범위를 넘어 표시할 수 없음
    Unavailable,
}

impl BreakEvenStatus {
    pub fn reached(self) -> Option<BreakEven> {
        match self {
            BreakEvenStatus::Reached(be) => Some(be),
            _ => None,
        }
    }
}

/// 구독 누계가 일회성 비용을 따라잡는 시점을 계산한다.
///
/// 분석 기간과 무관하게 계산하므로 결과가 기간 밖일 수 있다. 잘못된 가정값만
/// 오류로 돌려주며, 회차 수가 너무 커서 계산할 수 없으면 `Unavailable`이다.
pub fn break_even(assumptions: &PricingAssumptions) -> Result<BreakEvenStatus, InvalidAssumptions> {
    assumptions.validate()?;
    if assumptions.one_time_cost.is_zero() {
        return Ok(BreakEvenStatus::Reached(BreakEven {
            period: Decimal::ZERO,
            year: Decimal::ZERO,
        }));
    }
    if assumptions.recurring_cost.is_zero() {
        return Ok(BreakEvenStatus::Never);
    }

    let reached = assumptions
        .one_time_cost
        .checked_div(assumptions.recurring_cost)
        .map(|p| p.ceil())
        .and_then(|period| {
            let year = period
                .checked_div(Decimal::from(assumptions.periods_per_year))?
                .ceil();
            Some(BreakEven { period, year })
        });
    Ok(reached.map_or(BreakEvenStatus::Unavailable, BreakEvenStatus::Reached))
}
