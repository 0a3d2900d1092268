mod content_manager;
mod exam;
mod history;
mod home;
mod login;
mod not_found;
mod register;
mod results;
mod state;
mod test_list;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use content_manager::ContentManagerView;
pub use exam::ExamView;
pub use history::HistoryView;
pub use home::HomeView;
pub use login::LoginView;
pub use not_found::NotFoundView;
pub use register::RegisterView;
pub use results::ResultsView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use test_list::TestListView;
