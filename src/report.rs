//! 계산 결과를 텍스트 표나 JSON 문서로 만든다.

use std::fmt::Write;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::format::{format_currency, format_percent, CurrencyFormat};
use crate::i18n::{keys, Translator};
use crate::projection::chart::{self, ComparisonBars};
use crate::projection::{BreakEvenStatus, ComparisonResult, PricingAssumptions, Projection, ProjectionPoint};

const BAR_WIDTH: usize = 24;

/// 연도별 표와 요약을 텍스트로 렌더링한다.
pub fn render_text(
    assumptions: &PricingAssumptions,
    projection: &Projection,
    break_even: BreakEvenStatus,
    fmt: &CurrencyFormat,
    tr: &Translator,
) -> String {
    let mut out = String::new();
    // String에 대한 쓰기는 실패하지 않는다.
    let _ = write_table(&mut out, projection, fmt, tr);
    let _ = write_summary(&mut out, assumptions, &projection.comparison, break_even, fmt, tr);
    out
}

fn write_table(
    out: &mut String,
    projection: &Projection,
    fmt: &CurrencyFormat,
    tr: &Translator,
) -> std::fmt::Result {
    writeln!(
        out,
        "{:>6} {:>14} {:>14} {:>14}",
        tr.t(keys::REPORT_YEAR),
        tr.t(keys::REPORT_RECURRING),
        tr.t(keys::REPORT_ONE_TIME),
        tr.t(keys::REPORT_RUNNING_SAVINGS)
    )?;
    let bars = chart::point_bars(&projection.points);
    for (p, bar) in projection.points.iter().zip(bars) {
        writeln!(
            out,
            "{:>6} {:>14} {:>14} {:>14}  {}",
            p.year,
            format_currency(p.cumulative_recurring_cost, fmt),
            format_currency(p.cumulative_one_time_cost, fmt),
            format_currency(p.running_savings(), fmt),
            chart::text_bar(bar.recurring, BAR_WIDTH)
        )?;
    }
    Ok(())
}

fn write_summary(
    out: &mut String,
    assumptions: &PricingAssumptions,
    comparison: &ComparisonResult,
    break_even: BreakEvenStatus,
    fmt: &CurrencyFormat,
    tr: &Translator,
) -> std::fmt::Result {
    let bars = chart::comparison_bars(comparison);
    writeln!(out)?;
    writeln!(
        out,
        "{} {:>14}  {}",
        tr.t(keys::LABEL_TOTAL_RECURRING),
        format_currency(comparison.total_recurring, fmt),
        chart::text_bar(bars.recurring, BAR_WIDTH)
    )?;
    writeln!(
        out,
        "{} {:>14}  {}",
        tr.t(keys::LABEL_TOTAL_ONE_TIME),
        format_currency(comparison.total_one_time, fmt),
        chart::text_bar(bars.one_time, BAR_WIDTH)
    )?;
    writeln!(
        out,
        "{} {}",
        tr.t(keys::LABEL_SAVINGS),
        format_currency(comparison.savings, fmt)
    )?;
    writeln!(
        out,
        "{} {}",
        tr.t(keys::LABEL_SAVINGS_RATIO),
        ratio_text(comparison, tr)
    )?;
    writeln!(
        out,
        "{} {}",
        tr.t(keys::LABEL_BREAK_EVEN),
        break_even_text(assumptions, break_even, tr)
    )
}

/// 절감 비율 문자열. 구독 총액이 0이거나 백분율로 나타낼 수 없으면 "정의되지 않음".
pub fn ratio_text(comparison: &ComparisonResult, tr: &Translator) -> String {
    comparison
        .savings_ratio
        .and_then(|r| format_percent(r, 0))
        .unwrap_or_else(|| tr.t(keys::RATIO_UNDEFINED).to_string())
}

/// 손익분기 문자열 (`24 회차 / 2 년차`).
pub fn break_even_text(
    assumptions: &PricingAssumptions,
    break_even: BreakEvenStatus,
    tr: &Translator,
) -> String {
    match break_even {
        BreakEvenStatus::Never => tr.t(keys::BREAK_EVEN_NEVER).to_string(),
        BreakEvenStatus::Unavailable => tr.t(keys::BREAK_EVEN_UNAVAILABLE).to_string(),
        BreakEvenStatus::Reached(be) if be.period.is_zero() => {
            tr.t(keys::BREAK_EVEN_IMMEDIATE).to_string()
        }
        BreakEvenStatus::Reached(be) => {
            let mut s = format!(
                "{} {} / {} {}",
                be.period,
                tr.t(keys::BREAK_EVEN_PERIOD),
                be.year,
                tr.t(keys::BREAK_EVEN_YEAR)
            );
            if be.year > Decimal::from(assumptions.horizon_years) {
                s.push(' ');
                s.push_str(tr.t(keys::BREAK_EVEN_AFTER_HORIZON));
            }
            s
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    assumptions: &'a PricingAssumptions,
    points: &'a [ProjectionPoint],
    comparison: &'a ComparisonResult,
    break_even: BreakEvenStatus,
    bars: ComparisonBars,
}

/// 정확한 Decimal 값을 문자열로 담은 JSON 보고서.
pub fn render_json(
    assumptions: &PricingAssumptions,
    projection: &Projection,
    break_even: BreakEvenStatus,
) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        assumptions,
        points: &projection.points,
        comparison: &projection.comparison,
        break_even,
        bars: chart::comparison_bars(&projection.comparison),
    };
    serde_json::to_string_pretty(&report)
}
