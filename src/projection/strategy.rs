use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::assumptions::PricingAssumptions;
use super::engine::ComparisonResult;
use crate::i18n::keys;

/// 비교 대상 배포 전략. 계산기의 클라우드/로컬 전환 버튼에 해당한다.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// 기간마다 요금을 내는 구독형 (클라우드)
    #[default]
    Recurring,
    /// 한 번 구매하는 로컬 설비
    OneTime,
}

/// 선택한 전략 기준으로 보여줄 대표 비용.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrategySummary {
    pub strategy: Strategy,
    /// 구독형이면 기간당 비용, 로컬이면 일회성 비용
    pub headline_cost: Decimal,
    /// 분석 기간 전체 비용
    pub horizon_total: Decimal,
}

impl Strategy {
    pub fn toggle(self) -> Self {
        match self {
            Strategy::Recurring => Strategy::OneTime,
            Strategy::OneTime => Strategy::Recurring,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Strategy::Recurring => keys::STRATEGY_RECURRING,
            Strategy::OneTime => keys::STRATEGY_ONE_TIME,
        }
    }

    /// 대표 비용 항목의 라벨 키 ("월 비용" / "일회성 비용").
    pub fn headline_key(self) -> &'static str {
        match self {
            Strategy::Recurring => keys::HEADLINE_RECURRING,
            Strategy::OneTime => keys::HEADLINE_ONE_TIME,
        }
    }

    pub fn summarize(
        self,
        assumptions: &PricingAssumptions,
        comparison: &ComparisonResult,
    ) -> StrategySummary {
        let (headline_cost, horizon_total) = match self {
            Strategy::Recurring => (assumptions.recurring_cost, comparison.total_recurring),
            Strategy::OneTime => (assumptions.one_time_cost, comparison.total_one_time),
        };
        StrategySummary {
            strategy: self,
            headline_cost,
            horizon_total,
        }
    }
}
