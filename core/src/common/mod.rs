pub mod errors;

pub use errors::SearchError;
