//! Common types for all aggregates

pub mod aggregate_id;
