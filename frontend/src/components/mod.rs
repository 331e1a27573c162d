pub mod fields;
pub mod form_message;
pub mod sidebar;
pub mod stat_card;

pub use form_message::{FormMessage, LoadingState};
pub use sidebar::Sidebar;
pub use stat_card::StatCard;
