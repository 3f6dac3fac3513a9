//! Top-level views. Exactly one is mounted at a time by the app shell.

pub mod contact;
pub mod expertise;
pub mod home;
pub mod project_detail;
pub mod work;
