//! Legal chat UI Module (MVVM Standard)
//!
//! Structure:
//! - view_model.rs: ChatVm wrapping the ChatSession core
//! - view.rs: Main component ChatPage
//! - sidebar.rs: New chat button, recent chats, navigation

mod sidebar;
mod view;
mod view_model;

pub use view::ChatPage;
pub use view_model::ChatVm;
