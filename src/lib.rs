//! # Tyce
//!
//! > **The core of a product-formulation workbench for cosmetics and cleaning products.**
//!
//! A formulator builds an ingredient list, asks a hosted text-generation service for an
//! analysis (physical properties, visual preview, cost breakdown, suggestions, safety
//! notes), and saves the draft as a project. A dashboard lists the user's latest projects.
//!
//! ## Design Notes
//!
//! ### 1. Collaborators behind traits
//! The structured store, the identity service and the text-generation service are
//! reached through [`ProjectStore`](clients::ProjectStore),
//! [`IdentityProvider`](clients::IdentityProvider) and
//! [`TextGenerator`](clients::TextGenerator). The crate ships in-process implementations
//! of all three.
//!
//! ### 2. Failures degrade, they don't propagate
//! A failed or malformed analysis is replaced by placeholder data of the same shape; a
//! failed save is reported as [`SaveOutcome::LocalOnly`](formulator::SaveOutcome); a failed
//! dashboard listing shows demo projects. Only input problems (empty name, no ingredients,
//! nobody signed in) stop an action, as a [`FormulatorError`](formulator::FormulatorError).
//!
//! ### 3. Concurrency Model
//! The project collection is a [`RecordActor`](framework::RecordActor) in its own Tokio
//! task, processing requests sequentially. Formulator sessions take `&mut self` for
//! `analyze` and `save`, so one session never has two of them in flight.
//!
//! ### 4. Observability
//! `tracing` everywhere, with structured fields. See [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`], [`project_store`])
//! Generic actor-backed record collection, and its instantiation for projects.
//!
//! ### 2. The Data ([`model`])
//! Ingredients, analysis records, projects, users.
//!
//! ### 3. The Interface ([`clients`], [`session`])
//! Collaborator traits and clients; the owned authentication state.
//!
//! ### 4. The Pages ([`formulator`], [`dashboard`], [`navigation`])
//! Ingredient editing, analysis, saving; the project overview; role-based navigation.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! [`WorkbenchSystem`](lifecycle::WorkbenchSystem) starts everything and shuts it down.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod dashboard;
pub mod formulator;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod navigation;
pub mod project_store;
pub mod session;
