pub mod category_picker;
pub mod header;
pub mod layout;
pub mod modal;
pub mod page;
pub mod pagination;
pub mod protected_layout;

pub use category_picker::{use_categories, CategoryPicker};
pub use header::Header;
pub use layout::Layout;
pub use modal::{ConfirmationModal, Modal};
pub use page::Page;
pub use pagination::Pagination;
pub use protected_layout::{ProtectedLayout, RequiresLoggedIn};
