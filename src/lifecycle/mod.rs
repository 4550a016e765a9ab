//! Runtime orchestration: starting, wiring and stopping the workbench, plus logging setup.
//!
//! - [`WorkbenchSystem`] - Owns the project collection and hands out pages
//! - [`setup_tracing`] - Installs the log subscriber

pub mod system;
pub mod tracing;

pub use self::system::*;
pub use self::tracing::*;
