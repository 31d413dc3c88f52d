//! Domain models with validation at construction
//!
//! Request bodies deserialize into plain shapes; everything a store accepts
//! goes through `IdeaDraft`, so invalid input returns `ValidationError`
//! before any persistence happens.

pub mod draft;
pub mod idea;
pub mod validation;

pub use draft::{IdeaDescription, IdeaDraft, IdeaTitle, MAX_TITLE_LEN};
pub use idea::{CreateIdeaRequest, Idea, UpdateIdeaRequest};
pub use validation::ValidationError;
