use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

use crate::projection::InvalidAssumptions;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_ROI: &str = "main_menu.roi";
    pub const MAIN_MENU_CUSTOM: &str = "main_menu.custom";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const ROI_HEADING: &str = "roi.heading";
    pub const ROI_TOGGLE_HINT: &str = "roi.toggle_hint";
    pub const ROI_SELECTED: &str = "roi.selected";
    pub const STRATEGY_RECURRING: &str = "strategy.recurring";
    pub const STRATEGY_ONE_TIME: &str = "strategy.one_time";
    pub const HEADLINE_RECURRING: &str = "headline.recurring";
    pub const HEADLINE_ONE_TIME: &str = "headline.one_time";
    pub const LABEL_HORIZON_TOTAL: &str = "label.horizon_total";
    pub const LABEL_YOU_SAVE: &str = "label.you_save";
    pub const LABEL_SWITCH_AND_SAVE: &str = "label.switch_and_save";

    pub const CUSTOM_HEADING: &str = "custom.heading";
    pub const PROMPT_RECURRING_COST: &str = "prompt.recurring_cost";
    pub const PROMPT_ONE_TIME_COST: &str = "prompt.one_time_cost";
    pub const PROMPT_PERIODS_PER_YEAR: &str = "prompt.periods_per_year";
    pub const PROMPT_HORIZON_YEARS: &str = "prompt.horizon_years";
    pub const PROMPT_SAVE_AS_DEFAULT: &str = "prompt.save_as_default";

    pub const REPORT_YEAR: &str = "report.year";
    pub const REPORT_RECURRING: &str = "report.recurring";
    pub const REPORT_ONE_TIME: &str = "report.one_time";
    pub const REPORT_RUNNING_SAVINGS: &str = "report.running_savings";
    pub const LABEL_TOTAL_RECURRING: &str = "label.total_recurring";
    pub const LABEL_TOTAL_ONE_TIME: &str = "label.total_one_time";
    pub const LABEL_SAVINGS: &str = "label.savings";
    pub const LABEL_SAVINGS_RATIO: &str = "label.savings_ratio";
    pub const RATIO_UNDEFINED: &str = "label.ratio_undefined";
    pub const LABEL_BREAK_EVEN: &str = "label.break_even";
    pub const BREAK_EVEN_NEVER: &str = "break_even.never";
    pub const BREAK_EVEN_IMMEDIATE: &str = "break_even.immediate";
    pub const BREAK_EVEN_PERIOD: &str = "break_even.period";
    pub const BREAK_EVEN_YEAR: &str = "break_even.year";
    pub const BREAK_EVEN_AFTER_HORIZON: &str = "break_even.after_horizon";
    pub const BREAK_EVEN_UNAVAILABLE: &str = "break_even.unavailable";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_CURRENT_CURRENCY: &str = "settings.current_currency";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_SYMBOL: &str = "settings.prompt_symbol";
    pub const SETTINGS_PROMPT_DECIMALS: &str = "settings.prompt_decimals";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const ERROR_NEGATIVE_RECURRING: &str = "error.negative_recurring";
    pub const ERROR_NEGATIVE_ONE_TIME: &str = "error.negative_one_time";
    pub const ERROR_ZERO_PERIODS: &str = "error.zero_periods";
    pub const ERROR_ZERO_HORIZON: &str = "error.zero_horizon";
    pub const ERROR_OUT_OF_RANGE: &str = "error.out_of_range";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 locales/, 그다음 내장 문자열을 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        if overrides.is_some() {
            tracing::debug!(lang = lang_code, "language pack loaded");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.overrides
            .as_ref()
            .and_then(|m| m.get(key))
            .map(String::as_str)
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 → 다른 언어 순으로 찾고, 없으면 키를 그대로 돌려준다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let builtin = match self.lang {
            Language::En => en(key).or_else(|| ko(key)),
            Language::Ko => ko(key).or_else(|| en(key)),
        };
        builtin.unwrap_or(key)
    }
}

/// 가정값 오류를 표시할 문자열 키.
pub fn assumption_error_key(err: InvalidAssumptions) -> &'static str {
    match err {
        InvalidAssumptions::NegativeRecurringCost => keys::ERROR_NEGATIVE_RECURRING,
        InvalidAssumptions::NegativeOneTimeCost => keys::ERROR_NEGATIVE_ONE_TIME,
        InvalidAssumptions::ZeroPeriodsPerYear => keys::ERROR_ZERO_PERIODS,
        InvalidAssumptions::ZeroHorizonYears => keys::ERROR_ZERO_HORIZON,
        InvalidAssumptions::OutOfRange => keys::ERROR_OUT_OF_RANGE,
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    let resolved = normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string());
    tracing::debug!(cli = cli_arg, config = ?config_lang, resolved = %resolved, "language resolved");
    resolved
}

/// `ko_KR.UTF-8`, `en-GB` 같은 태그에서 지원하는 기본 언어 코드를 뽑는다.
fn base_language(tag: &str) -> Option<&'static str> {
    let base = tag
        .trim()
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match base.as_str() {
        "ko" => Some("ko"),
        "en" => Some("en"),
        _ => None,
    }
}

/// 사용자가 준 코드를 언어팩 파일 이름으로 쓸 코드로 바꾼다. `auto`나 빈 값은 None.
fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "" | "auto" => None,
        "ko-kr" | "en-us" => Some(c),
        other => base_language(other).map(str::to_string),
    }
}

/// 시스템 로케일, 그다음 LANG / LC_ALL 환경 변수에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    get_locale()
        .into_iter()
        .chain(["LANG", "LC_ALL"].into_iter().filter_map(|v| std::env::var(v).ok()))
        .find_map(|tag| base_language(&tag))
        .map(str::to_string)
}

/// `<dir>/<code>.toml`을 읽는다. `en-us.toml`이 없으면 `en.toml`을 찾는다.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let base = lang.split_once(['-', '_']).map(|(b, _)| b);
    std::iter::once(lang).chain(base).find_map(|code| {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    })
}

/// 언어팩 TOML을 `label.savings` 같은 점 표기 키의 맵으로 펼친다. 문자열이 없으면 None.
pub fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let table: toml::Table = toml::from_str(src).ok()?;
    let mut map = HashMap::new();
    flatten_strings("", &table, &mut map);
    (!map.is_empty()).then_some(map)
}

fn flatten_strings(prefix: &str, table: &toml::Table, out: &mut HashMap<String, String>) {
    for (k, v) in table {
        let key = if prefix.is_empty() {
            k.clone()
        } else {
            format!("{prefix}.{k}")
        };
        match v {
            toml::Value::String(s) => {
                out.insert(key, s.clone());
            }
            toml::Value::Table(t) => flatten_strings(&key, t, out),
            _ => {}
        }
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Cost Projection Toolbox ===",
        MAIN_MENU_ROI => "1) ROI 계산기 (기본 가정값)",
        MAIN_MENU_CUSTOM => "2) 직접 입력한 가정값으로 비교",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ROI_HEADING => "\n-- ROI 계산기 --",
        ROI_TOGGLE_HINT => "엔터=전략 전환, 0=돌아가기",
        ROI_SELECTED => "선택한 전략:",
        STRATEGY_RECURRING => "클라우드 구독",
        STRATEGY_ONE_TIME => "로컬 하드웨어",
        HEADLINE_RECURRING => "기간당 비용:",
        HEADLINE_ONE_TIME => "일회성 비용:",
        LABEL_HORIZON_TOTAL => "기간 총액:",
        LABEL_YOU_SAVE => "절감액:",
        LABEL_SWITCH_AND_SAVE => "로컬로 전환 시 절감 비율:",
        CUSTOM_HEADING => "\n-- 가정값 직접 입력 --",
        PROMPT_RECURRING_COST => "기간당 구독 비용: ",
        PROMPT_ONE_TIME_COST => "일회성 비용: ",
        PROMPT_PERIODS_PER_YEAR => "연간 청구 횟수 (월 단위면 12): ",
        PROMPT_HORIZON_YEARS => "분석 기간 [년]: ",
        PROMPT_SAVE_AS_DEFAULT => "이 값을 기본 가정값으로 저장할까요? (y/N): ",
        REPORT_YEAR => "연도",
        REPORT_RECURRING => "구독 누계",
        REPORT_ONE_TIME => "일회성",
        REPORT_RUNNING_SAVINGS => "누적 절감",
        LABEL_TOTAL_RECURRING => "구독 총액:",
        LABEL_TOTAL_ONE_TIME => "일회성 총액:",
        LABEL_SAVINGS => "절감액:",
        LABEL_SAVINGS_RATIO => "절감 비율:",
        RATIO_UNDEFINED => "정의되지 않음",
        LABEL_BREAK_EVEN => "손익분기:",
        BREAK_EVEN_NEVER => "도달하지 않음",
        BREAK_EVEN_IMMEDIATE => "즉시",
        BREAK_EVEN_PERIOD => "회차",
        BREAK_EVEN_YEAR => "년차",
        BREAK_EVEN_AFTER_HORIZON => "(분석 기간 이후)",
        BREAK_EVEN_UNAVAILABLE => "계산 범위를 벗어남",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_CURRENT_CURRENCY => "현재 통화 기호:",
        SETTINGS_OPTIONS => "1) 언어  2) 통화 기호  3) 소수 자릿수",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드 (auto/ko/en): ",
        SETTINGS_PROMPT_SYMBOL => "통화 기호: ",
        SETTINGS_PROMPT_DECIMALS => "소수 자릿수 (0~4): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        ERROR_NEGATIVE_RECURRING => "구독 비용은 0 이상이어야 합니다.",
        ERROR_NEGATIVE_ONE_TIME => "일회성 비용은 0 이상이어야 합니다.",
        ERROR_ZERO_PERIODS => "연간 청구 횟수는 1 이상이어야 합니다.",
        ERROR_ZERO_HORIZON => "분석 기간은 1년 이상이어야 합니다.",
        ERROR_OUT_OF_RANGE => "누적 비용이 표현 범위를 벗어났습니다.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting.",
        MAIN_MENU_TITLE => "\n=== Cost Projection Toolbox ===",
        MAIN_MENU_ROI => "1) ROI calculator (default assumptions)",
        MAIN_MENU_CUSTOM => "2) Compare with custom assumptions",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please choose again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ROI_HEADING => "\n-- ROI Calculator --",
        ROI_TOGGLE_HINT => "Enter=toggle strategy, 0=back",
        ROI_SELECTED => "Selected strategy:",
        STRATEGY_RECURRING => "Cloud Subscription",
        STRATEGY_ONE_TIME => "Local Hardware",
        HEADLINE_RECURRING => "Cost per period:",
        HEADLINE_ONE_TIME => "One-time cost:",
        LABEL_HORIZON_TOTAL => "Horizon total:",
        LABEL_YOU_SAVE => "You save:",
        LABEL_SWITCH_AND_SAVE => "Switch to local and save:",
        CUSTOM_HEADING => "\n-- Custom Assumptions --",
        PROMPT_RECURRING_COST => "Recurring cost per period: ",
        PROMPT_ONE_TIME_COST => "One-time cost: ",
        PROMPT_PERIODS_PER_YEAR => "Periods per year (12 for monthly): ",
        PROMPT_HORIZON_YEARS => "Horizon [years]: ",
        PROMPT_SAVE_AS_DEFAULT => "Save these as the default assumptions? (y/N): ",
        REPORT_YEAR => "Year",
        REPORT_RECURRING => "Recurring",
        REPORT_ONE_TIME => "One-time",
        REPORT_RUNNING_SAVINGS => "Savings",
        LABEL_TOTAL_RECURRING => "Total recurring:",
        LABEL_TOTAL_ONE_TIME => "Total one-time:",
        LABEL_SAVINGS => "Savings:",
        LABEL_SAVINGS_RATIO => "Savings ratio:",
        RATIO_UNDEFINED => "undefined",
        LABEL_BREAK_EVEN => "Break-even:",
        BREAK_EVEN_NEVER => "never",
        BREAK_EVEN_IMMEDIATE => "immediately",
        BREAK_EVEN_PERIOD => "period",
        BREAK_EVEN_YEAR => "year",
        BREAK_EVEN_AFTER_HORIZON => "(after horizon)",
        BREAK_EVEN_UNAVAILABLE => "unavailable (out of range)",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_CURRENT_CURRENCY => "Current currency symbol:",
        SETTINGS_OPTIONS => "1) Language  2) Currency symbol  3) Decimal places",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/ko/en): ",
        SETTINGS_PROMPT_SYMBOL => "Currency symbol: ",
        SETTINGS_PROMPT_DECIMALS => "Decimal places (0-4): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        ERROR_NEGATIVE_RECURRING => "Recurring cost must not be negative.",
        ERROR_NEGATIVE_ONE_TIME => "One-time cost must not be negative.",
        ERROR_ZERO_PERIODS => "Periods per year must be at least 1.",
        ERROR_ZERO_HORIZON => "Horizon must be at least 1 year.",
        ERROR_OUT_OF_RANGE => "Cumulative cost is out of range.",
        _ => return None,
    })
}
