use std::io::{self, BufRead, Write};

use rust_decimal::Decimal;

use crate::app::AppError;
use crate::config::Config;
use crate::format::format_currency;
use crate::i18n::{self, keys, Translator};
use crate::projection::{
    self, BreakEvenStatus, InvalidAssumptions, PricingAssumptions, Projection, Strategy,
};
use crate::report;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    RoiCalculator,
    CustomProjection,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_ROI));
    println!("{}", tr.t(keys::MAIN_MENU_CUSTOM));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::RoiCalculator),
            "2" => return Ok(MenuChoice::CustomProjection),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 설정된 기본 가정값으로 ROI 계산기를 보여준다. 엔터로 전략을 전환한다.
pub fn handle_roi_calculator(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::ROI_HEADING));
    let assumptions = cfg.assumptions;
    let Some((projection, break_even)) = compute_or_report(tr, &assumptions) else {
        return Ok(());
    };
    print!(
        "{}",
        report::render_text(&assumptions, &projection, break_even, &cfg.currency, tr)
    );

    let mut strategy = Strategy::default();
    loop {
        print_strategy_view(tr, cfg, &assumptions, &projection, strategy);
        let sel = read_line(&format!("{} > ", tr.t(keys::ROI_TOGGLE_HINT)))?;
        match sel.trim() {
            "" => strategy = strategy.toggle(),
            "0" => return Ok(()),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

fn print_strategy_view(
    tr: &Translator,
    cfg: &Config,
    assumptions: &PricingAssumptions,
    projection: &Projection,
    strategy: Strategy,
) {
    let comparison = &projection.comparison;
    let summary = strategy.summarize(assumptions, comparison);
    println!();
    println!("{} {}", tr.t(keys::ROI_SELECTED), tr.t(strategy.label_key()));
    println!(
        "  {} {}",
        tr.t(strategy.headline_key()),
        format_currency(summary.headline_cost, &cfg.currency)
    );
    println!(
        "  {} {}",
        tr.t(keys::LABEL_HORIZON_TOTAL),
        format_currency(summary.horizon_total, &cfg.currency)
    );
    println!(
        "  {} {}",
        tr.t(keys::LABEL_YOU_SAVE),
        format_currency(comparison.savings, &cfg.currency)
    );
    println!(
        "  {} {}",
        tr.t(keys::LABEL_SWITCH_AND_SAVE),
        report::ratio_text(comparison, tr)
    );
}

/// 가정값을 직접 입력받아 비교한다. 기본값으로 저장했으면 true.
pub fn handle_custom_projection(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::CUSTOM_HEADING));
    let assumptions = PricingAssumptions::new(
        read_decimal(tr, tr.t(keys::PROMPT_RECURRING_COST))?,
        read_decimal(tr, tr.t(keys::PROMPT_ONE_TIME_COST))?,
        read_u32(tr, tr.t(keys::PROMPT_PERIODS_PER_YEAR))?,
        read_u32(tr, tr.t(keys::PROMPT_HORIZON_YEARS))?,
    );
    let Some((projection, break_even)) = compute_or_report(tr, &assumptions) else {
        return Ok(false);
    };
    print!(
        "{}",
        report::render_text(&assumptions, &projection, break_even, &cfg.currency, tr)
    );

    let answer = read_line(tr.t(keys::PROMPT_SAVE_AS_DEFAULT))?;
    if answer.trim().eq_ignore_ascii_case("y") {
        cfg.assumptions = assumptions;
        return Ok(true);
    }
    Ok(false)
}

/// 계산에 실패하면 사용자에게 알리고 None을 돌려준다.
fn compute_or_report(
    tr: &Translator,
    assumptions: &PricingAssumptions,
) -> Option<(Projection, BreakEvenStatus)> {
    let computed = projection::project(assumptions)
        .and_then(|p| projection::break_even(assumptions).map(|be| (p, be)));
    match computed {
        Ok(v) => Some(v),
        Err(err) => {
            report_invalid(tr, err);
            None
        }
    }
}

fn report_invalid(tr: &Translator, err: InvalidAssumptions) {
    tracing::warn!(error = %err, "rejected assumptions");
    println!(
        "{}: {}",
        tr.t(keys::ERROR_PREFIX),
        tr.t(i18n::assumption_error_key(err))
    );
}

/// 설정 메뉴를 처리한다. 언어가 바뀌었으면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{} {}", tr.t(keys::SETTINGS_CURRENT_LANGUAGE), cfg.language);
    println!(
        "{} {} ({})",
        tr.t(keys::SETTINGS_CURRENT_CURRENCY),
        cfg.currency.symbol,
        format_currency(Decimal::from(1_234_567), &cfg.currency)
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "" => Ok(false),
        "1" => {
            let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            let lang = lang.trim();
            if lang.is_empty() {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                return Ok(false);
            }
            cfg.language = lang.to_string();
            Ok(true)
        }
        "2" => {
            let symbol = read_line(tr.t(keys::SETTINGS_PROMPT_SYMBOL))?;
            cfg.currency.symbol = symbol.trim().to_string();
            Ok(false)
        }
        "3" => {
            let input = read_line(tr.t(keys::SETTINGS_PROMPT_DECIMALS))?;
            match input.trim().parse::<u32>() {
                Ok(d) if d <= 4 => cfg.currency.decimals = d,
                _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
            }
            Ok(false)
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            Ok(false)
        }
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    read_line_from(&mut io::stdin().lock())
}

/// 한 줄을 읽는다. 입력이 끝났으면(EOF) `AppError::InputClosed`.
pub(crate) fn read_line_from<R: BufRead>(reader: &mut R) -> Result<String, AppError> {
    let mut buf = String::new();
    if reader.read_line(&mut buf).map_err(AppError::Io)? == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

/// 천 단위 구분자(`,` `_`)를 허용하는 금액 입력.
fn read_decimal(tr: &Translator, prompt: &str) -> Result<Decimal, AppError> {
    loop {
        let s = read_line(prompt)?;
        match parse_amount(&s) {
            Some(v) => return Ok(v),
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32(tr: &Translator, prompt: &str) -> Result<u32, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

pub(crate) fn parse_amount(s: &str) -> Option<Decimal> {
    s.trim().replace([',', '_'], "").parse::<Decimal>().ok()
}

#[cfg(test)]
mod tests {
    use super::{parse_amount, read_line_from};
    use crate::app::AppError;
    use rust_decimal::Decimal;

    #[test]
    fn end_of_input_is_reported() {
        let mut input = "1\n".as_bytes();
        assert_eq!(read_line_from(&mut input).expect("first line"), "1\n");
        assert!(matches!(read_line_from(&mut input), Err(AppError::InputClosed)));
        assert!(matches!(read_line_from(&mut "".as_bytes()), Err(AppError::InputClosed)));
    }

    #[test]
    fn blank_line_is_not_end_of_input() {
        let mut input = "\n".as_bytes();
        assert_eq!(read_line_from(&mut input).expect("blank line"), "\n");
    }

    #[test]
    fn amount_accepts_separators() {
        assert_eq!(parse_amount("12,000\n"), Some(Decimal::from(12_000)));
        assert_eq!(parse_amount(" 1_500.25 "), Decimal::from_str_exact("1500.25").ok());
        assert_eq!(parse_amount("abc"), None);
    }
}
