//! Terminal output for the command line front end.
//!
//! - [`display`]: summary line printed after a successful shred
//! - [`progress`]: progress bar and the handle decorator that drives it

pub mod display;
pub mod progress;
