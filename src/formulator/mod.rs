//! # Formulator
//!
//! Everything behind the formulator page:
//!
//! - [`editor`] - [`IngredientListEditor`], the draft's ingredient rows
//! - [`analysis`] - [`AnalysisRequestor`], prompt, reply parsing and the fallback policy
//! - [`persistence`] - [`ProjectPersistenceAdapter`], best-effort saving
//! - [`session`] - [`FormulatorSession`], which ties the three together for one draft
//!
//! Data flows one way: editor rows go to the requestor, and the resulting record is
//! embedded verbatim in the project handed to the persistence adapter.

pub mod analysis;
pub mod editor;
pub mod error;
pub mod persistence;
pub mod session;

pub use analysis::{
    build_prompt, fallback_analysis, parse_reply, Analysis, AnalysisFailure, AnalysisRequestor,
    AnalysisSource,
};
pub use editor::{IngredientListEditor, IngredientUpdate};
pub use error::FormulatorError;
pub use persistence::{ProjectPersistenceAdapter, SaveOutcome};
pub use session::{FormulatorSession, SaveReport};
