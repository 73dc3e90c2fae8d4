//! setlearn-core: Set notation, answer checking, and the quiz engine.
//!
//! This crate holds everything the `setlearn` CLI needs that is not
//! presentation: parsing `{a, b, c}` notation, comparing sets for the Venn
//! calculator, normalizing quiz answers, the question bank, and the quiz
//! session state machine.

pub mod answer;
pub mod bank;
pub mod config;
pub mod error;
pub mod likes;
pub mod model;
pub mod notation;
pub mod particles;
pub mod quiz;
pub mod summary;
