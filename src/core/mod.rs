pub mod errors;
pub mod http;
pub mod models;

pub use errors::TangoError;
pub use models::{ CardDirection, Category, Outcome, TargetLanguage, Word };
