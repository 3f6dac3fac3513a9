//! Client-side state modules.
//!
//! DESIGN
//! ======
//! `nav` is the only state shared across views and lives in the root
//! component. `contact` and `reviews` are view-local: each view creates its
//! own signal on mount, so nothing carries over between navigations.

pub mod contact;
pub mod nav;
pub mod reviews;
