pub mod use_access_guard;
pub mod use_pharmacy_history;

pub use use_access_guard::use_access_guard;
pub use use_pharmacy_history::use_pharmacy_history;
