//! Floor-plan Headless Layout Harness
//!
//! Runs the layout engine against a JSON floor plan without an editor,
//! database or broadcast layer.
//!
//! Usage:
//!   cargo run -p floorplan-simtest
//!   cargo run -p floorplan-simtest -- path/to/plan.json --verbose
//!
//! `RUST_LOG` overrides the log level; `--verbose` defaults it to `debug`.

use floorplan_logic::bounds::{bounding_box, Rect, TableId};
use floorplan_logic::collision::colliding_ids;
use floorplan_logic::config::{validate_config, LayoutConfig};
use floorplan_logic::drag::resolve_drag;
use floorplan_logic::group::{groups, TableRecord};
use floorplan_logic::seating::seats_for_group;
use floorplan_logic::validation::{validate_all, Severity};
use serde::Deserialize;

// ── Default fixture ─────────────────────────────────────────────────────
const FLOOR_PLAN_JSON: &str = include_str!("../data/floor_plan.json");

#[derive(Debug, Deserialize)]
struct Fixture {
    #[serde(default)]
    config: LayoutConfig,
    tables: Vec<TableRecord>,
    #[serde(default)]
    drags: Vec<DragCase>,
    #[serde(default)]
    seatings: Vec<SeatingCase>,
}

#[derive(Debug, Deserialize)]
struct DragCase {
    name: String,
    table_id: TableId,
    x: Option<f32>,
    y: Option<f32>,
    expect_x: f32,
    expect_y: f32,
    #[serde(default)]
    expect_horizontal: bool,
    #[serde(default)]
    expect_vertical: bool,
    #[serde(default = "default_true")]
    expect_accepted: bool,
}

#[derive(Debug, Deserialize)]
struct SeatingCase {
    name: String,
    anchor_id: TableId,
    seats: usize,
    #[serde(default)]
    min_distinct_y: usize,
}

fn default_true() -> bool {
    true
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let verbose = args.iter().any(|a| a == "--verbose");
    let path = args.iter().find(|a| !a.starts_with("--"));

    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    println!("=== Floor-plan Layout Harness ===\n");

    let mut results = Vec::new();

    // 1. Fixture & config
    let fixture = match load_fixture(path.map(String::as_str)) {
        Ok(f) => f,
        Err(detail) => {
            results.push(TestResult {
                name: "fixture_parse".into(),
                passed: false,
                detail,
            });
            report(&results, verbose);
            std::process::exit(1);
        }
    };
    results.extend(validate_fixture(&fixture));

    // 2. Floor-plan consistency
    results.extend(validate_floor_plan(&fixture, verbose));

    // 3. Drag resolution
    results.extend(validate_drags(&fixture, verbose));

    // 4. Seat distribution
    results.extend(validate_seatings(&fixture, verbose));

    // 5. Group outlines
    results.extend(validate_group_outlines(&fixture, verbose));

    if !report(&results, verbose) {
        std::process::exit(1);
    }
}

fn load_fixture(path: Option<&str>) -> Result<Fixture, String> {
    let json = match path {
        Some(p) => {
            log::info!("loading floor plan from {}", p);
            std::fs::read_to_string(p).map_err(|e| format!("cannot read {}: {}", p, e))?
        }
        None => FLOOR_PLAN_JSON.to_string(),
    };
    serde_json::from_str(&json).map_err(|e| format!("JSON parse error: {}", e))
}

/// Print the summary; returns true when everything passed.
fn report(results: &[TestResult], verbose: bool) -> bool {
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.len() - passed;

    for r in results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed,
        results.len(),
        failed
    );
    failed == 0
}

fn rects_of(fixture: &Fixture) -> Vec<Rect> {
    fixture.tables.iter().map(|t| t.rect).collect()
}

// ── 1. Fixture ──────────────────────────────────────────────────────────

fn validate_fixture(fixture: &Fixture) -> Vec<TestResult> {
    println!("--- Fixture ---");
    let mut results = Vec::new();

    results.push(TestResult {
        name: "fixture_not_empty".into(),
        passed: !fixture.tables.is_empty(),
        detail: format!(
            "{} tables, {} drags, {} seatings",
            fixture.tables.len(),
            fixture.drags.len(),
            fixture.seatings.len()
        ),
    });

    let errors = validate_config(&fixture.config);
    results.push(TestResult {
        name: "config_valid".into(),
        passed: errors.is_empty(),
        detail: if errors.is_empty() {
            format!(
                "grid={} snap={} search={}",
                fixture.config.grid_size,
                fixture.config.snap_distance,
                fixture.config.search_distance()
            )
        } else {
            errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        },
    });

    results
}

// ── 2. Floor plan ───────────────────────────────────────────────────────

fn validate_floor_plan(fixture: &Fixture, verbose: bool) -> Vec<TestResult> {
    println!("--- Floor Plan ---");
    let mut results = Vec::new();

    let issues = validate_all(&fixture.tables);
    let errors: Vec<_> = issues
        .iter()
        .filter(|e| e.severity == Severity::Error)
        .collect();
    let warnings = issues.len() - errors.len();
    results.push(TestResult {
        name: "plan_consistent".into(),
        passed: errors.is_empty(),
        detail: if errors.is_empty() {
            format!("no errors, {} warnings", warnings)
        } else {
            errors
                .iter()
                .map(|e| format!("[{}] {}", e.category, e.message))
                .collect::<Vec<_>>()
                .join("; ")
        },
    });
    if verbose {
        for w in issues.iter().filter(|e| e.severity == Severity::Warning) {
            println!("  warning [{}] {}", w.category, w.message);
        }
    }

    // Every table must be placeable where it already stands.
    let rects = rects_of(fixture);
    let blocked: Vec<String> = rects
        .iter()
        .filter_map(|r| {
            let hits = colliding_ids(r, r.pos_x, r.pos_y, &rects);
            (!hits.is_empty()).then(|| format!("#{} hits {:?}", r.id, hits))
        })
        .collect();
    results.push(TestResult {
        name: "plan_current_positions_placeable".into(),
        passed: blocked.is_empty(),
        detail: if blocked.is_empty() {
            "all tables placeable in place".into()
        } else {
            blocked.join(", ")
        },
    });

    results
}

// ── 3. Drags ────────────────────────────────────────────────────────────

fn validate_drags(fixture: &Fixture, verbose: bool) -> Vec<TestResult> {
    println!("--- Drags ---");
    let mut results = Vec::new();
    let rects = rects_of(fixture);

    for case in &fixture.drags {
        let Some(table) = rects.iter().find(|r| r.id == case.table_id) else {
            results.push(TestResult {
                name: format!("drag_{}", case.name),
                passed: false,
                detail: format!("table #{} not in plan", case.table_id),
            });
            continue;
        };

        let out = resolve_drag(table, case.x, case.y, &rects, &fixture.config);
        let passed = out.position.x == case.expect_x
            && out.position.y == case.expect_y
            && out.snap.snapped_horizontally == case.expect_horizontal
            && out.snap.snapped_vertically == case.expect_vertical
            && out.accepted == case.expect_accepted;

        if verbose {
            println!(
                "  {}: ({:?},{:?}) → ({},{}) h={} v={} targets={:?} accepted={}",
                case.name,
                case.x,
                case.y,
                out.position.x,
                out.position.y,
                out.snap.snapped_horizontally,
                out.snap.snapped_vertically,
                out.snap.target_ids(),
                out.accepted
            );
        }

        results.push(TestResult {
            name: format!("drag_{}", case.name),
            passed,
            detail: format!(
                "got ({},{}) h={} v={} accepted={}, expected ({},{}) h={} v={} accepted={}",
                out.position.x,
                out.position.y,
                out.snap.snapped_horizontally,
                out.snap.snapped_vertically,
                out.accepted,
                case.expect_x,
                case.expect_y,
                case.expect_horizontal,
                case.expect_vertical,
                case.expect_accepted
            ),
        });
    }

    results
}

// ── 4. Seating ──────────────────────────────────────────────────────────

fn validate_seatings(fixture: &Fixture, verbose: bool) -> Vec<TestResult> {
    println!("--- Seating ---");
    let mut results = Vec::new();

    for case in &fixture.seatings {
        let seats = seats_for_group(case.anchor_id, &fixture.tables, case.seats);

        results.push(TestResult {
            name: format!("seats_{}_count", case.name),
            passed: seats.len() == case.seats,
            detail: format!("{} of {} seats placed", seats.len(), case.seats),
        });

        let mut ys: Vec<f32> = seats.iter().map(|s| s.y).collect();
        ys.sort_by(f32::total_cmp);
        ys.dedup();
        results.push(TestResult {
            name: format!("seats_{}_rows", case.name),
            passed: ys.len() >= case.min_distinct_y,
            detail: format!(
                "{} distinct y values (need {})",
                ys.len(),
                case.min_distinct_y
            ),
        });

        let mut duplicates = 0;
        for (i, a) in seats.iter().enumerate() {
            for b in &seats[i + 1..] {
                if a.x == b.x && a.y == b.y {
                    duplicates += 1;
                }
            }
        }
        results.push(TestResult {
            name: format!("seats_{}_distinct", case.name),
            passed: duplicates == 0,
            detail: format!("{} coincident seat pairs", duplicates),
        });

        if verbose {
            for s in &seats {
                println!("    {} seat {}: ({:.1},{:.1})", case.name, s.index, s.x, s.y);
            }
        }
    }

    results
}

// ── 5. Group outlines ───────────────────────────────────────────────────

fn validate_group_outlines(fixture: &Fixture, verbose: bool) -> Vec<TestResult> {
    println!("--- Group Outlines ---");
    let mut results = Vec::new();

    let all = groups(&fixture.tables);
    let mut escaping = Vec::new();
    for group in &all {
        let Some(bb) = bounding_box(group) else {
            continue;
        };
        for r in group {
            let inside = r.left() >= bb.min_x
                && r.top() >= bb.min_y
                && r.right() <= bb.max_x
                && r.bottom() <= bb.max_y;
            if !inside {
                escaping.push(r.id);
            }
        }
        if verbose {
            let ids: Vec<TableId> = group.iter().map(|r| r.id).collect();
            println!(
                "  group {:?}: ({},{})→({},{}) {}×{}",
                ids, bb.min_x, bb.min_y, bb.max_x, bb.max_y, bb.width, bb.height
            );
        }
    }
    results.push(TestResult {
        name: "groups_enclosed".into(),
        passed: escaping.is_empty(),
        detail: format!("{} groups, {} tables outside their box", all.len(), escaping.len()),
    });

    results
}
