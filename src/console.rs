//! Line-oriented console front end.
//!
//! `view` renders the board to any `Write` sink; `controller` runs the
//! blocking prompt/read/validate/apply loop over any `BufRead` source, so
//! the same code drives interactive stdin play and scripted games in
//! tests.

pub mod controller;
pub mod view;

pub use controller::run;
pub use view::RenderOptions;
