//! # graha-engine
//!
//! Session-scoped resolution of context-dependent graha attributes.
//!
//! A [`ResolutionSession`] borrows one [`PositionSnapshot`](graha_core::PositionSnapshot)
//! and one [`DescriptorCatalog`], and owns an [`ObjectRegistry`] that hands out
//! at most one [`ResolvableObject`] per key. Resolving an object runs its
//! character rule, which may resolve the grahas sharing its house through the
//! same registry. Results are cached for the lifetime of the session.
//!
//! Sessions are single-threaded (`Rc`/`RefCell` inside). Run independent
//! charts on independent sessions.
//!
//! ```no_run
//! use graha_core::{ObjectKey, PositionSnapshot};
//! use graha_engine::{DescriptorCatalog, ResolutionSession};
//!
//! let snapshot = PositionSnapshot::new()
//!     .with(ObjectKey::Bu, 5, 12.0)?
//!     .with(ObjectKey::Sa, 5, 2.0)?;
//! let catalog = DescriptorCatalog::builtin();
//! let session = ResolutionSession::new(&snapshot, &catalog);
//!
//! let budha = session.resolve(ObjectKey::Bu)?;
//! println!("Budha is {}", budha.character);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod catalog;
pub mod error;
pub mod object;
pub mod registry;
pub mod rules;
pub mod session;

pub use catalog::{CharacterRule, DescriptorCatalog};
pub use error::EngineError;
pub use object::{ResolvableObject, ResolvedAttributes};
pub use registry::ObjectRegistry;
pub use rules::RuleContext;
pub use session::ResolutionSession;
