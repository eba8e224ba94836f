//! whatif — run every disruption scenario against a small rail network.
//!
//! Usage: `whatif [config.json]`
//!
//! The config file is optional; any field it omits keeps its default
//! (`seed` 42, `processing_delay_ms` 2500, `kpi_refresh_interval_ms` 10000).
//! Results are exported to `output/whatif/` as CSV and JSON.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use ops_core::{SessionConfig, SimRng};
use ops_fleet::{TrainStatus, delay_label, load_fleet_reader};
use ops_kpi::{KpiFeed, KpiSnapshot, TimeRange, delay_status, punctuality_status};
use ops_output::{CsvWriter, JsonWriter, SessionOutputObserver};
use ops_scenario::{ScenarioKind, SimulationResult};
use ops_session::{LogObserver, SessionBuilder, Tee};

// ── Fleet fixture ─────────────────────────────────────────────────────────────

const FLEET_CSV: &str = "\
id,category,speed_kmh,delay_min\n\
T1,Express,110,0\n\
T2,Express,120,5\n\
T3,Local,60,10\n\
T4,Local,55,0\n\
T5,Local,65,2\n\
T6,Freight,45,20\n\
T7,Freight,50,15\n\
";

const OUTPUT_DIR: &str = "output/whatif";

// ── Helpers ───────────────────────────────────────────────────────────────────

fn load_config(path: Option<String>) -> Result<SessionConfig> {
    let Some(path) = path else {
        return Ok(SessionConfig::default());
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading config {path}"))?;
    let config: SessionConfig =
        serde_json::from_str(&text).with_context(|| format!("parsing config {path}"))?;
    config.validate()?;
    Ok(config)
}

fn print_result(result: &SimulationResult) {
    println!("── {} ──", result.scenario_title);
    for delta in result.deltas() {
        println!(
            "  {:<12} {:>4} → {:<4} {:>8}  ({:?})",
            delta.metric.label(),
            delta.before,
            delta.after,
            delta.formatted_change(),
            delta.trend(),
        );
    }
    for d in &result.delays_by_category {
        println!("  {:<12} delay {:>3} → {:<3} min", d.category, d.before, d.after);
    }
    println!("  Recommended actions:");
    for (i, rec) in result.recommendations.iter().enumerate() {
        println!("    {}. {rec}", i + 1);
    }
    println!();
}

fn print_kpis(snapshot: &KpiSnapshot) {
    let h = &snapshot.headline;
    println!("KPIs ({})", snapshot.range.label());
    println!("  Punctuality   {:>3}%   [{}]", h.punctuality, punctuality_status(h.punctuality));
    println!("  Avg delay     {:>3} min [{}]", h.average_delay, delay_status(h.average_delay));
    println!("  Throughput    {:>3} trains/h", h.throughput);
    println!("  Utilization   {:>3}%", h.utilization);
    if let Some(mean) = snapshot.mean_trend_punctuality() {
        println!("  Trend mean    {:>3}% over {} points", mean, snapshot.punctuality_trend.len());
    }
    for d in &snapshot.delays_by_type {
        println!("  {:<8} {:>3} delayed, avg {:>2} min [{}]", d.category, d.count, d.delay, delay_status(d.delay));
    }
    println!();
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config(std::env::args().nth(1))?;
    println!("=== whatif — rail operations scenario runner ===");
    println!(
        "Seed: {}  |  Processing delay: {} ms  |  KPI refresh: {} ms",
        config.seed, config.processing_delay_ms, config.kpi_refresh_interval_ms
    );
    println!();

    // 1. Fleet.
    let fleet = load_fleet_reader(Cursor::new(FLEET_CSV))?;
    println!("{:<6} {:<8} {:>6} {:<8} {:<8}", "Train", "Category", "km/h", "Delay", "Status");
    println!("{}", "-".repeat(40));
    for m in &fleet {
        println!(
            "{:<6} {:<8} {:>6} {:<8} {:<8}",
            m.id,
            m.category,
            m.speed_kmh,
            delay_label(m.delay_min),
            format!("{:?}", TrainStatus::of(m)),
        );
    }
    println!();

    // 2. Session and exporters.
    let mut session = SessionBuilder::new(config.clone()).fleet(fleet).build()?;
    println!("Baseline throughput: {}%", session.evaluator().baseline().throughput_percentage);
    println!();

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let csv = SessionOutputObserver::new(CsvWriter::new(Path::new(OUTPUT_DIR))?);
    let json = SessionOutputObserver::new(JsonWriter::new(Path::new(OUTPUT_DIR))?);
    let mut obs = Tee(LogObserver, Tee(csv, json));

    // 3. A run superseded before it completes is never exported.
    session.run("signal", &mut obs)?;
    session.advance_by(config.processing_delay_ms / 2, &mut obs);

    // 4. Every scenario, each run to completion.
    for kind in ScenarioKind::ALL {
        session.run_kind(kind, &mut obs);
        session.advance_by(config.processing_delay_ms, &mut obs);
        if let Some(result) = session.current_result() {
            print_result(result);
        }
    }

    // 5. Unknown ids are rejected without touching the current result.
    if let Err(e) = session.run("tsunami", &mut obs) {
        println!("Rejected: {e}");
        println!();
    }

    // 6. KPI dashboard.
    let mut master = SimRng::new(config.seed);
    let mut feed = KpiFeed::from_config(&config, TimeRange::Today, &mut master, session.now())?;
    print_kpis(feed.snapshot());

    session.advance_to(feed.next_refresh(), &mut obs);
    if feed.poll(session.now()) {
        info!("KPI snapshot refreshed at {}", session.now());
        print_kpis(feed.snapshot());
    }
    if feed.set_range(TimeRange::Week, session.now()) {
        print_kpis(feed.snapshot());
    }

    // 7. Flush exports.
    let Tee(_, Tee(mut csv, mut json)) = obs;
    csv.finish();
    json.finish();
    if let Some(e) = csv.take_error() {
        eprintln!("CSV output error: {e}");
    }
    if let Some(e) = json.take_error() {
        eprintln!("JSON output error: {e}");
    }
    println!("Exported {} runs to {OUTPUT_DIR}/", csv.written());

    Ok(())
}
