//! Form rendering

mod application_form;
mod field_renderer;

pub use application_form::draw;
