//! Peace Bridge - Rule-based conflict coaching
//!
//! This crate implements a deterministic dialogue engine that classifies a
//! user's situation, infers the underlying issue from conversation history
//! and composes a short structured reply: summary, steps, a ready-to-send
//! script and one follow-up question.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
