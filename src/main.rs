use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use cost_projection_toolbox::app::{self, AppError, OutputFormat};
use cost_projection_toolbox::config::{self, DEFAULT_CONFIG_PATH};
use cost_projection_toolbox::i18n::{self, keys, Translator};
use cost_projection_toolbox::projection::PricingAssumptions;

/// 구독형과 일회성 비용을 비교하는 ROI 계산기.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 언어 (auto/ko/en)
    #[arg(long, short = 'L', global = true, default_value = "auto")]
    lang: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 메뉴 방식으로 실행 (기본)
    Interactive,
    /// 가정값 하나로 계산하고 결과를 출력
    Project(ProjectArgs),
}

/// 지정하지 않은 값은 설정 파일의 기본 가정값을 쓴다.
#[derive(Debug, Args)]
struct ProjectArgs {
    /// 기간당 구독 비용
    #[arg(long)]
    recurring: Option<Decimal>,
    /// 일회성 비용
    #[arg(long)]
    one_time: Option<Decimal>,
    /// 연간 청구 횟수
    #[arg(long)]
    periods: Option<u32>,
    /// 분석 기간 [년]
    #[arg(long)]
    years: Option<u32>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl ProjectArgs {
    fn apply(&self, defaults: PricingAssumptions) -> PricingAssumptions {
        PricingAssumptions::new(
            self.recurring.unwrap_or(defaults.recurring_cost),
            self.one_time.unwrap_or(defaults.one_time_cost),
            self.periods.unwrap_or(defaults.periods_per_year),
            self.years.unwrap_or(defaults.horizon_years),
        )
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err((tr, err)) => {
            let msg = match &err {
                AppError::Projection(e) => tr.t(i18n::assumption_error_key(*e)).to_string(),
                other => other.to_string(),
            };
            tracing::error!(error = %err, "run failed");
            eprintln!("{}: {msg}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), (Translator, AppError)> {
    let fallback = || Translator::new(&i18n::resolve_language(&cli.lang, None));
    let mut cfg = config::load_or_default(&cli.config).map_err(|e| (fallback(), AppError::from(e)))?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let mut tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());

    let result = match &cli.command {
        Some(Command::Project(args)) => {
            let assumptions = args.apply(cfg.assumptions);
            app::run_projection(&assumptions, &cfg, &tr, args.format).map(|out| print!("{out}"))
        }
        Some(Command::Interactive) | None => app::run(&mut cfg, &cli.config, &mut tr),
    };
    result.map_err(|e| (tr, e))
}
