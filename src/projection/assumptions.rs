use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 가정값이 제약 조건을 벗어났을 때의 오류. 위반한 조건을 변형으로 구분한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidAssumptions {
    /// 기간당 구독 비용이 음수
    NegativeRecurringCost,
    /// 일회성 비용이 음수
    NegativeOneTimeCost,
    /// 연간 청구 횟수가 0
    ZeroPeriodsPerYear,
    /// 분석 기간이 0년
    ZeroHorizonYears,
    /// 누적 비용이 Decimal 표현 범위를 넘는 경우
    OutOfRange,
}

impl std::fmt::Display for InvalidAssumptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            InvalidAssumptions::NegativeRecurringCost => "구독 비용은 0 이상이어야 합니다.",
            InvalidAssumptions::NegativeOneTimeCost => "일회성 비용은 0 이상이어야 합니다.",
            InvalidAssumptions::ZeroPeriodsPerYear => "연간 청구 횟수는 1 이상이어야 합니다.",
            InvalidAssumptions::ZeroHorizonYears => "분석 기간은 1년 이상이어야 합니다.",
            InvalidAssumptions::OutOfRange => "누적 비용이 표현 범위를 벗어났습니다.",
        };
        write!(f, "잘못된 가정값: {msg}")
    }
}

impl std::error::Error for InvalidAssumptions {}

/// 비용 비교 계산 입력.
///
/// 계산 요청마다 새로 만들어지며 계산 중에 변경되지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingAssumptions {
    /// 구독형 전략의 기간당 비용 [통화 단위 / 기간]
    pub recurring_cost: Decimal,
    /// 로컬 설비 전략의 일회성 비용 [통화 단위]
    pub one_time_cost: Decimal,
    /// 연간 청구 횟수 (월 단위면 12)
    pub periods_per_year: u32,
    /// 분석 기간 [년]
    pub horizon_years: u32,
}

impl PricingAssumptions {
    pub fn new(
        recurring_cost: Decimal,
        one_time_cost: Decimal,
        periods_per_year: u32,
        horizon_years: u32,
    ) -> Self {
        Self {
            recurring_cost,
            one_time_cost,
            periods_per_year,
            horizon_years,
        }
    }

    /// 입력 제약을 검사한다. 비용은 0 이상, 청구 횟수와 기간은 1 이상이어야 한다.
    pub fn validate(&self) -> Result<(), InvalidAssumptions> {
        if self.recurring_cost < Decimal::ZERO {
            return Err(InvalidAssumptions::NegativeRecurringCost);
        }
        if self.one_time_cost < Decimal::ZERO {
            return Err(InvalidAssumptions::NegativeOneTimeCost);
        }
        if self.periods_per_year == 0 {
            return Err(InvalidAssumptions::ZeroPeriodsPerYear);
        }
        if self.horizon_years == 0 {
            return Err(InvalidAssumptions::ZeroHorizonYears);
        }
        Ok(())
    }

    /// 1년치 구독 비용 (`recurring_cost * periods_per_year`).
    pub fn annual_recurring_cost(&self) -> Result<Decimal, InvalidAssumptions> {
        self.recurring_cost
            .checked_mul(Decimal::from(self.periods_per_year))
            .ok_or(InvalidAssumptions::OutOfRange)
    }
}

impl Default for PricingAssumptions {
    /// 클라우드 월 500, 로컬 설비 12,000, 5년 비교.
    fn default() -> Self {
        Self::new(Decimal::from(500), Decimal::from(12_000), 12, 5)
    }
}
