pub mod form_view;
pub mod help_bar;

// Re-export core Component trait
pub use tui_select::Component;

pub use form_view::{FormView, FormViewProps, FORM_WIDTH};
pub use help_bar::{HelpBar, HelpBarProps};
