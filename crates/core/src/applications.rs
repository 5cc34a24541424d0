pub mod filter;
pub mod selection;

pub use filter::{filter_applications, ApplicationFilter, FilterForm};
pub use selection::SelectionSet;
