//! Pure data structures; [`Project`] implements [`StoredEntity`](crate::framework::StoredEntity).

pub mod analysis;
pub mod ingredient;
pub mod project;
pub mod user;

pub use analysis::*;
pub use ingredient::*;
pub use project::*;
pub use user::*;
