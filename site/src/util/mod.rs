//! Browser helpers. Pure math lives in `motion` and `clock` so it can be
//! tested off-wasm; `scroll_fx` binds it to the DOM.

pub mod clock;
pub mod motion;
pub mod scroll_fx;
