//! UI Components
//!
//! Leptos components for the vault screen.

mod category_modal;
mod delete_confirm_button;
mod detail_panel;
mod entry_grid;
mod entry_modal;
mod generator_modal;
mod sidebar;
mod strength_meter;
mod toast_stack;
mod top_bar;

pub use category_modal::CategoryModal;
pub use delete_confirm_button::DeleteConfirmButton;
pub use detail_panel::DetailPanel;
pub use entry_grid::EntryGrid;
pub use entry_modal::EntryModal;
pub use generator_modal::GeneratorModal;
pub use sidebar::Sidebar;
pub use strength_meter::StrengthMeter;
pub use toast_stack::ToastStack;
pub use top_bar::TopBar;
