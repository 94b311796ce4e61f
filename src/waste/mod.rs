pub mod category;
pub mod disposal_policy;


pub use category::Category;
pub use disposal_policy::{lookup, BinColor, DisposalAction, DisposalPolicy};
