pub mod error;
pub mod manifest;
pub mod template;

pub use error::AppError;
pub use manifest::ManifestKind;
pub use template::{SubstitutionMap, Template};
