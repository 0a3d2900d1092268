pub mod answers;
pub mod autosave;
pub mod error;
pub mod highlight;
pub mod model;
pub mod navigator;
pub mod progress;
pub mod time;
pub mod timer;

pub use answers::AnswerStore;
pub use error::Error;
pub use time::Clock;
