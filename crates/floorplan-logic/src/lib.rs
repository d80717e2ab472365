//! Pure floor-plan layout logic.
//!
//! This crate contains the geometric reasoning behind the table editor,
//! independent of any renderer, database or broadcast layer. Functions take
//! plain data and return new values; nothing here mutates its inputs or
//! keeps state between calls.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`bounds`] | `Rect`/`Point` types and aggregate bounding boxes |
//! | [`collision`] | Flush-tolerant AABB placement checks |
//! | [`config`] | Engine tunables and their validation |
//! | [`constants`] | Default grid, snap and scoring constants |
//! | [`drag`] | Snap → quantize → validate pipeline for a live drag |
//! | [`group`] | Combined-table group resolution |
//! | [`normalize`] | Grid quantization and invalid-coordinate fallback |
//! | [`seating`] | Clockwise seat distribution around a group outline |
//! | [`snap`] | Magnetic docking with corner (two-axis) preference |
//! | [`validation`] | Whole-floor-plan consistency checks |

pub mod bounds;
pub mod collision;
pub mod config;
pub mod constants;
pub mod drag;
pub mod group;
pub mod normalize;
pub mod seating;
pub mod snap;
pub mod validation;

pub use bounds::{bounding_box, BoundingBox, Point, Rect, TableId};
pub use collision::can_place;
pub use config::LayoutConfig;
pub use normalize::normalize;
pub use seating::distribute_seats_on_perimeter;
pub use snap::{snap, SnapResult};
