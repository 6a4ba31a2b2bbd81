pub mod deck_detail;
pub mod deck_list;
pub mod history;
pub mod home;
pub mod login;
pub mod not_found;
pub mod register;
pub mod study;
pub mod usage;

pub use deck_detail::DeckDetail;
pub use deck_list::DeckList;
pub use history::History;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use register::Register;
pub use study::Study;
pub use usage::Usage;
