//! Service layer between the query engines and the presentation adapter.
//!
//! The presentation layer talks to [`session::DatasetSession`], which owns
//! the session-scoped copy of the canonical table and exposes the
//! dashboard's queries over it.

pub mod session;

pub use session::DatasetSession;
