use chrono::Local;
use tracing::error;

use kakeibo::budget::categories::TOTAL_BUDGET_KEY;
use kakeibo::budget::{daily_limit_for_date, derive_last_month_budget, plan_rebalance};
use kakeibo::config::Config;
use kakeibo::features::{build_ratio_window, build_total_window};
use kakeibo::forecast::{ForecastEngine, PlaceholderInferenceService};
use kakeibo::ledger::LedgerStore;
use kakeibo::models::ForecastReport;
use kakeibo::report::build_report;

fn main() {
    dotenvy::dotenv().ok();
    kakeibo::logging::init_logging();

    let config = Config::from_env();
    let as_json = std::env::args().any(|arg| arg == "--json");

    // One action per run; any failure renders as a single message.
    if let Err(e) = run(&config, as_json) {
        error!(error = %e, "forecast action failed");
        eprintln!("⚠️ 予測エラー: {e}");
        std::process::exit(1);
    }
}

fn run(config: &Config, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = LedgerStore::load(&config.ledger_path)?;
    let ratio_window = build_ratio_window(&store)?;
    let total_window = build_total_window(&store)?;

    // The inference backend is opened once and reused for every call.
    let inference = PlaceholderInferenceService;
    let engine = ForecastEngine::new(&inference);
    let result = engine.forecast(&ratio_window, &total_window, config.horizon_days)?;

    let today = Local::now().date_naive();
    let budget = derive_last_month_budget(&store, today);
    let report = build_report(&result, &budget);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);

    let plan = plan_rebalance(&report.predicted_by_category(), &budget);
    println!();
    if plan.all_within_budget() {
        println!("✅ すべてのカテゴリが予算内です");
    } else {
        println!("🔁 予算の再配分案");
        for (category, top_up) in &plan.top_ups {
            println!("  {category}: +{top_up:.0} 円");
        }
    }

    let total_budget = budget.get(TOTAL_BUDGET_KEY).copied().unwrap_or(0.0);
    println!();
    println!(
        "📆 本日の支出目安: {:.0} 円",
        daily_limit_for_date(total_budget, today)
    );

    Ok(())
}

fn print_report(report: &ForecastReport) {
    println!(
        "📅 {}日後までの予測支出合計: {:.0} 円",
        report.horizon_days, report.total_amount
    );
    println!();
    for category in &report.categories {
        println!("  {}: {:.0} 円", category.category, category.projected);
    }
    println!();
    println!("⚠️ リスク評価");
    for category in &report.categories {
        println!(
            "  {}（予算: {:.0} 円）→ {}",
            category.category,
            category.budget,
            category.risk.marker()
        );
    }
}
