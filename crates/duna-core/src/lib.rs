//! # duna-core
//!
//! Core types and error types for the Duna task client.
//!
//! This crate provides the foundational types shared across all Duna crates:
//! - Entity structs mirroring the backend's JSON representations (tasks,
//!   subtasks, time logs, notes, goals, themes, filter presets)
//! - Status, priority, and recurrence enums with the task toggle state machine
//! - Request payloads sent to the API and typed response contracts
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod identity;
pub mod requests;
pub mod responses;

pub use errors::CoreError;
