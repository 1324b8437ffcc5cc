use std::fs;
use std::path::PathBuf;

use cost_projection_toolbox::app::{run_projection, OutputFormat};
use cost_projection_toolbox::config::{self, Config};
use cost_projection_toolbox::i18n::{keys, parse_toml_to_map, Translator};
use cost_projection_toolbox::projection::{self, PricingAssumptions};
use cost_projection_toolbox::report;
use rust_decimal::Decimal;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("cost_projection_{name}_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn empty_config_uses_defaults() {
    let cfg = config::parse("").expect("parse");
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.assumptions, PricingAssumptions::default());
    assert_eq!(cfg.currency.symbol, "$");
}

#[test]
fn partial_assumptions_table_keeps_other_defaults() {
    let cfg = config::parse(
        r#"
language = "ko"

[assumptions]
recurring_cost = "750.50"
horizon_years = 3
"#,
    )
    .expect("parse");
    assert_eq!(cfg.language, "ko");
    assert_eq!(cfg.assumptions.recurring_cost, Decimal::new(75_050, 2));
    assert_eq!(cfg.assumptions.one_time_cost, Decimal::from(12_000));
    assert_eq!(cfg.assumptions.periods_per_year, 12);
    assert_eq!(cfg.assumptions.horizon_years, 3);
}

#[test]
fn config_file_is_created_then_reloaded() {
    let dir = scratch_dir("config");
    let path = dir.join("config.toml");
    let _ = fs::remove_file(&path);

    let mut cfg = config::load_or_default(&path).expect("create default");
    assert!(path.exists());
    cfg.assumptions = PricingAssumptions::new(Decimal::from(99), Decimal::from(2_500), 4, 7);
    cfg.currency.decimals = 2;
    cfg.save(&path).expect("save");

    let reloaded = config::load_or_default(&path).expect("reload");
    assert_eq!(reloaded, cfg);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn language_pack_flattens_and_overrides() {
    let map = parse_toml_to_map("[label]\nsavings = \"Net:\"\n").expect("map");
    assert_eq!(map.get("label.savings").map(String::as_str), Some("Net:"));
    assert!(parse_toml_to_map("answer = 42").is_none());

    let dir = scratch_dir("locales");
    fs::write(dir.join("en.toml"), "[label]\nsavings = \"Net:\"\n").expect("write pack");
    let tr = Translator::new_with_pack("en-us", dir.to_str());
    assert_eq!(tr.t(keys::LABEL_SAVINGS), "Net:");
    assert_eq!(tr.t(keys::LABEL_BREAK_EVEN), "Break-even:");
    assert_eq!(tr.t("no.such.key"), "no.such.key");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn text_report_shows_example_figures() {
    let a = PricingAssumptions::default();
    let projection = projection::project(&a).expect("projection");
    let be = projection::break_even(&a).expect("break even");
    let tr = Translator::new("en");
    let text = report::render_text(&a, &projection, be, &Config::default().currency, &tr);
    assert!(text.contains("$6,000"), "{text}");
    assert!(text.contains("$30,000"), "{text}");
    assert!(text.contains("Savings: $18,000"), "{text}");
    assert!(text.contains("Savings ratio: 60%"), "{text}");
    assert!(text.contains("24 period / 2 year"), "{text}");
}

#[test]
fn json_report_keeps_exact_values() {
    let cfg = Config::default();
    let tr = Translator::new("en");
    let json = run_projection(&cfg.assumptions, &cfg, &tr, OutputFormat::Json).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["points"].as_array().map(Vec::len), Some(5));
    assert_eq!(value["comparison"]["savings"], "18000");
    assert_eq!(value["break_even"]["status"], "reached");
    assert_eq!(value["break_even"]["period"], "24");
}

#[test]
fn huge_valid_inputs_still_render() {
    let cfg = Config::default();
    let tr = Translator::new("en");
    let big = PricingAssumptions::new(Decimal::new(1, 6), Decimal::from(100_000_000_000_000i64), 12, 5);
    let text = run_projection(&big, &cfg, &tr, OutputFormat::Text).expect("text report");
    assert!(text.contains("Break-even: 100000000000000000000 period"), "{text}");
    run_projection(&big, &cfg, &tr, OutputFormat::Json).expect("json report");
}

#[test]
fn unreachable_break_even_is_shown_as_unavailable() {
    let cfg = Config::default();
    let tr = Translator::new("en");
    let a = PricingAssumptions::new(Decimal::new(1, 28), Decimal::from(10), 1_000_000_000, 1);
    let text = run_projection(&a, &cfg, &tr, OutputFormat::Text).expect("text report");
    assert!(text.contains("Break-even: unavailable"), "{text}");

    let json = run_projection(&a, &cfg, &tr, OutputFormat::Json).expect("json report");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["break_even"]["status"], "unavailable");
}

#[test]
fn invalid_assumptions_surface_as_app_error() {
    let cfg = Config::default();
    let tr = Translator::new("en");
    let bad = PricingAssumptions::new(Decimal::from(1), Decimal::from(1), 12, 0);
    let err = run_projection(&bad, &cfg, &tr, OutputFormat::Text).expect_err("must fail");
    assert!(matches!(
        err,
        cost_projection_toolbox::app::AppError::Projection(projection::InvalidAssumptions::ZeroHorizonYears)
    ));
}
