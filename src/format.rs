//! 표시 단계의 금액/비율 포맷. 반올림은 여기서만 일어나며 계산값에는 영향을 주지 않는다.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// 통화 표시 형식.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// 금액 앞에 붙는 기호 (예: "$", "₩")
    pub symbol: String,
    /// 천 단위 구분 문자
    pub thousands_separator: char,
    /// 소수 자릿수 (0이면 정수 단위로 반올림)
    pub decimals: u32,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            thousands_separator: ',',
            decimals: 0,
        }
    }
}

/// 금액을 `-$12,345` 형태로 포맷한다. 중간값은 0에서 먼 쪽으로 반올림한다.
pub fn format_currency(amount: Decimal, fmt: &CurrencyFormat) -> String {
    let rounded = amount.round_dp_with_strategy(fmt.decimals, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let digits = format!("{:.prec$}", rounded.abs(), prec = fmt.decimals as usize);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };
    let grouped = group_thousands(int_part, fmt.thousands_separator);
    match frac_part {
        Some(f) => format!("{sign}{}{grouped}.{f}", fmt.symbol),
        None => format!("{sign}{}{grouped}", fmt.symbol),
    }
}

/// 비율(0.6)을 백분율 문자열(60%)로 포맷한다. 100배 한 값이 범위를 넘으면 None.
pub fn format_percent(ratio: Decimal, decimals: u32) -> Option<String> {
    let pct = ratio
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    Some(format!("{:.prec$}%", pct, prec = decimals as usize))
}

fn group_thousands(int_part: &str, sep: char) -> String {
    let len = int_part.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::group_thousands;

    #[test]
    fn groups_by_three() {
        assert_eq!(group_thousands("0", ','), "0");
        assert_eq!(group_thousands("999", ','), "999");
        assert_eq!(group_thousands("1000", ','), "1,000");
        assert_eq!(group_thousands("1234567", '.'), "1.234.567");
    }
}
