//! Application state module

mod controller;
mod forms;
mod submission;

pub use controller::*;
pub use forms::*;
pub use submission::*;
