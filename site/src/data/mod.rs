//! Compiled-in site data.
//!
//! `projects` holds the case study records consumed by the portfolio and
//! detail views; `content` holds section copy for everything else.

pub mod content;
pub mod projects;
