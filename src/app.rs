use std::path::Path;

use crate::config::{Config, ConfigError};
use crate::i18n::{self, Translator};
use crate::projection::{self, InvalidAssumptions, PricingAssumptions};
use crate::report;
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum AppError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// 설정 저장/로드 오류
    Config(ConfigError),
    /// 비용 계산 입력 오류
    Projection(InvalidAssumptions),
    /// JSON 보고서 직렬화 오류
    Json(serde_json::Error),
    /// 표준 입력이 닫힘 (EOF)
    InputClosed,
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => write!(f, "입출력 오류: {e}"),
            AppError::Config(e) => write!(f, "설정 오류: {e}"),
            AppError::Projection(e) => write!(f, "비용 계산 오류: {e}"),
            AppError::Json(e) => write!(f, "보고서 직렬화 오류: {e}"),
            AppError::InputClosed => write!(f, "입력이 끝났습니다."),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        AppError::Config(value)
    }
}

impl From<InvalidAssumptions> for AppError {
    fn from(value: InvalidAssumptions) -> Self {
        AppError::Projection(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        AppError::Json(value)
    }
}

/// 일회성 계산 결과의 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// 가정값 하나로 계산하고 요청한 형식으로 렌더링한다.
pub fn run_projection(
    assumptions: &PricingAssumptions,
    config: &Config,
    tr: &Translator,
    format: OutputFormat,
) -> Result<String, AppError> {
    let projection = projection::project(assumptions)?;
    let break_even = projection::break_even(assumptions)?;
    tracing::debug!(
        horizon = assumptions.horizon_years,
        savings = %projection.comparison.savings,
        "projection computed"
    );
    let out = match format {
        OutputFormat::Text => {
            report::render_text(assumptions, &projection, break_even, &config.currency, tr)
        }
        OutputFormat::Json => report::render_json(assumptions, &projection, break_even)?,
    };
    Ok(out)
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 설정이 바뀌면 즉시 저장한다.
/// 입력이 끝나면(EOF) 종료 메뉴를 고른 것처럼 설정을 저장하고 끝낸다.
pub fn run(config: &mut Config, config_path: &Path, tr: &mut Translator) -> Result<(), AppError> {
    match menu_loop(config, config_path, tr) {
        Err(AppError::InputClosed) => {
            tracing::debug!("stdin closed, exiting");
            config.save(config_path)?;
            println!();
            println!("{}", tr.t(i18n::keys::APP_EXIT));
            Ok(())
        }
        other => other,
    }
}

fn menu_loop(config: &mut Config, config_path: &Path, tr: &mut Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::RoiCalculator => ui_cli::handle_roi_calculator(tr, config)?,
            MenuChoice::CustomProjection => {
                if ui_cli::handle_custom_projection(tr, config)? {
                    config.save(config_path)?;
                }
            }
            MenuChoice::Settings => {
                if ui_cli::handle_settings(tr, config)? {
                    let lang = i18n::resolve_language(&config.language, None);
                    *tr = Translator::new_with_pack(&lang, config.language_pack_dir.as_deref());
                }
                config.save(config_path)?;
                println!("{}", tr.t(i18n::keys::SETTINGS_SAVED));
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}
