//! ThemeSheet — client-side data layer for a spreadsheet-backed blog theme planner.
//!
//! The dataset lives in a remote spreadsheet reachable only through a
//! user-supplied HTTP endpoint (an Apps-Script-style web app). This crate
//! provides the durable configuration/URL-history store and the CRUD
//! transport; presentation is left to callers.

pub mod database;
pub mod platform;
pub mod services;
pub mod storage;
pub mod types;
