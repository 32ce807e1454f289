// ==========================================
// SRV Planner - CLI entry point
// ==========================================
// Prints the objective summary and scorecard for one
// (area, year) scope.
// Usage: srv-planner <area_id> <year>
// Database path: SRV_DB_PATH (default: srv_planner.db)
// ==========================================

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Context, Result};

use srv_planner::config::ConfigManager;
use srv_planner::engine::aggregate::clamp_for_display;
use srv_planner::repository::ObjectiveRepository;
use srv_planner::{db, logging, SummaryApi};

fn main() -> Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} v{}", srv_planner::APP_NAME, srv_planner::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);
    let area_id = args
        .next()
        .ok_or_else(|| anyhow!("usage: srv-planner <area_id> <year>"))?;
    let year: i32 = args
        .next()
        .ok_or_else(|| anyhow!("usage: srv-planner <area_id> <year>"))?
        .parse()
        .context("year must be an integer")?;

    let db_path = std::env::var("SRV_DB_PATH").unwrap_or_else(|_| "srv_planner.db".to_string());
    tracing::info!("using database: {}", db_path);

    let conn = db::open_sqlite_connection(&db_path)
        .with_context(|| format!("cannot open database at {}", db_path))?;
    db::init_schema(&conn).context("schema initialization failed")?;
    match db::read_schema_version(&conn).context("cannot read schema version")? {
        Some(v) if v == db::CURRENT_SCHEMA_VERSION => {}
        Some(v) => tracing::warn!(
            found = v,
            expected = db::CURRENT_SCHEMA_VERSION,
            "schema version mismatch, database may predate this build"
        ),
        None => tracing::warn!("schema_version table missing"),
    }
    let conn = Arc::new(Mutex::new(conn));

    let config = ConfigManager::from_connection(conn.clone())
        .map_err(|e| anyhow!("config manager init failed: {}", e))?;
    let settings = config
        .get_engine_settings()
        .map_err(|e| anyhow!("cannot load engine settings: {}", e))?;
    tracing::info!(
        policy = %settings.policy,
        green_at = settings.thresholds.green_at,
        yellow_at = settings.thresholds.yellow_at,
        "engine settings loaded"
    );

    let api = SummaryApi::new(Arc::new(ObjectiveRepository::new(conn)), settings);

    let summary = api.get_summary(&area_id, year)?;
    if summary.is_empty() {
        println!("no objectives registered for {} / {}", area_id, year);
        return Ok(());
    }

    println!("objectives for {} / {}:", area_id, year);
    for obj in &summary.objectives {
        println!(
            "  [{}] {:<48} weight {:>5.1}%  compliance {:>6.1}%",
            obj.status, obj.name, obj.annual_weight, obj.compliance
        );
    }

    let scorecard = api.get_scorecard(&area_id, year)?;
    println!(
        "area score {:.1}% (bar {:.0}%) | weights {:.1}% | {} of {} green | avg {:.1}%",
        scorecard.area_score,
        clamp_for_display(scorecard.area_score),
        scorecard.total_weight,
        scorecard.green_count,
        scorecard.objective_count,
        scorecard.average_compliance,
    );

    Ok(())
}
