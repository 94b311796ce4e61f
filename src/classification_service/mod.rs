pub mod classify;
pub mod decode;
pub mod main;
pub mod result;


pub use main::ClassificationService;
pub use result::ClassificationResult;
