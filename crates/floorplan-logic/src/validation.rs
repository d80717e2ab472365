//! Consistency checks for a whole floor plan.
//!
//! Pure functions that take table records and return validation errors.
//! The editor runs them before saving; nothing here rejects or repairs.

use std::collections::HashSet;

use crate::bounds::{Rect, TableId};
use crate::group::TableRecord;

/// A floor-plan validation error.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub category: &'static str,
    pub severity: Severity,
    pub message: String,
}

/// Error severity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Severity {
    Error,
    Warning,
}

// ── A. Per-table ────────────────────────────────────────────────────────

/// Check that no table has zero, negative or non-finite geometry.
pub fn check_table_dimensions(rects: &[Rect]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for r in rects {
        if !r.is_valid() {
            errors.push(ValidationError {
                category: "table_geometry",
                severity: Severity::Error,
                message: format!(
                    "Table #{} has invalid geometry: ({},{}) {}×{}",
                    r.id, r.pos_x, r.pos_y, r.width, r.height
                ),
            });
        }
    }
    errors
}

/// Check that every id appears once.
pub fn check_duplicate_ids(rects: &[Rect]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen: HashSet<TableId> = HashSet::new();
    let mut reported: HashSet<TableId> = HashSet::new();

    for r in rects {
        if !seen.insert(r.id) && reported.insert(r.id) {
            errors.push(ValidationError {
                category: "table_identity",
                severity: Severity::Error,
                message: format!("Table id #{} is used more than once", r.id),
            });
        }
    }
    errors
}

// ── B. Table-to-table (pairwise) ────────────────────────────────────────

/// AABB overlap test over every pair. Flush edges are clean.
pub fn check_table_overlaps(rects: &[Rect]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            let a = &rects[i];
            let b = &rects[j];
            if !a.is_valid() || !b.is_valid() {
                continue; // caught by dimension check
            }
            if a.overlaps(b) {
                errors.push(ValidationError {
                    category: "table_overlap",
                    severity: Severity::Error,
                    message: format!("Tables #{} and #{} overlap", a.id, b.id),
                });
            }
        }
    }
    errors
}

// ── C. Group links ──────────────────────────────────────────────────────

/// Check that every `combined_with_id` names an existing, different table.
pub fn check_group_links(tables: &[TableRecord]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let ids: HashSet<TableId> = tables.iter().map(|t| t.rect.id).collect();

    for t in tables {
        let Some(other) = t.combined_with_id else {
            continue;
        };
        if other == t.rect.id {
            errors.push(ValidationError {
                category: "group_link",
                severity: Severity::Warning,
                message: format!("Table #{} is combined with itself", t.rect.id),
            });
        } else if !ids.contains(&other) {
            errors.push(ValidationError {
                category: "group_link",
                severity: Severity::Warning,
                message: format!(
                    "Table #{} is combined with non-existent table #{}",
                    t.rect.id, other
                ),
            });
        }
    }
    errors
}

// ── Master validation ───────────────────────────────────────────────────

/// Run all floor-plan validations and return combined results.
pub fn validate_all(tables: &[TableRecord]) -> Vec<ValidationError> {
    let rects: Vec<Rect> = tables.iter().map(|t| t.rect).collect();
    let mut all = Vec::new();
    all.extend(check_table_dimensions(&rects));
    all.extend(check_duplicate_ids(&rects));
    all.extend(check_table_overlaps(&rects));
    all.extend(check_group_links(tables));
    all
}
