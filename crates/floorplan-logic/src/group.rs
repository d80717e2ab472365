//! Combined-table groups.
//!
//! Tables are combined by pointing `combined_with_id` at another table.
//! A group is everything reachable over those links in either direction,
//! so chains (`3 → 2 → 1`) and stars (`2 → 1`, `3 → 1`) both resolve to
//! one group. Group membership is input data here, never owned state.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::bounds::{Rect, TableId};

/// A table as stored by the host: footprint plus its combine link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRecord {
    #[serde(flatten)]
    pub rect: Rect,
    #[serde(default)]
    pub combined_with_id: Option<TableId>,
}

impl TableRecord {
    pub fn standalone(rect: Rect) -> Self {
        Self {
            rect,
            combined_with_id: None,
        }
    }

    pub fn combined_with(rect: Rect, other: TableId) -> Self {
        Self {
            rect,
            combined_with_id: Some(other),
        }
    }
}

fn adjacency(tables: &[TableRecord]) -> HashMap<TableId, Vec<TableId>> {
    let mut adj: HashMap<TableId, Vec<TableId>> = HashMap::new();
    for t in tables {
        if let Some(other) = t.combined_with_id {
            if other == t.rect.id {
                continue;
            }
            adj.entry(t.rect.id).or_default().push(other);
            adj.entry(other).or_default().push(t.rect.id);
        }
    }
    adj
}

fn reachable(start: TableId, adj: &HashMap<TableId, Vec<TableId>>) -> HashSet<TableId> {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if let Some(neighbors) = adj.get(&current) {
            for &next in neighbors {
                if visited.insert(next) {
                    queue.push_back(next);
                }
            }
        }
    }
    visited
}

/// Footprints of every table in `anchor`'s group, in input order.
///
/// An unknown anchor yields an empty group. Links to ids missing from
/// `tables` are followed but contribute no footprint.
pub fn resolve_group(anchor: TableId, tables: &[TableRecord]) -> Vec<Rect> {
    if !tables.iter().any(|t| t.rect.id == anchor) {
        return Vec::new();
    }
    let members = reachable(anchor, &adjacency(tables));
    tables
        .iter()
        .filter(|t| members.contains(&t.rect.id))
        .map(|t| t.rect)
        .collect()
}

/// Partition a floor plan into groups. Groups are ordered by their first
/// member's position in `tables`; standalone tables form singleton groups.
pub fn groups(tables: &[TableRecord]) -> Vec<Vec<Rect>> {
    let adj = adjacency(tables);
    let mut assigned: HashSet<TableId> = HashSet::new();
    let mut out = Vec::new();

    for t in tables {
        if assigned.contains(&t.rect.id) {
            continue;
        }
        let members = reachable(t.rect.id, &adj);
        assigned.extend(members.iter().copied());
        out.push(
            tables
                .iter()
                .filter(|m| members.contains(&m.rect.id))
                .map(|m| m.rect)
                .collect(),
        );
    }
    out
}
