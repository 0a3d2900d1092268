mod questions;
mod reading;
mod scripts;
mod submit;
mod view;
mod writing;

pub use view::ExamView;
