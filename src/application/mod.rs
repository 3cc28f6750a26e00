// Application layer - the ledger use cases and their error taxonomy.
// Clients (CLI, tests, a future API) go through LedgerService; nothing
// here talks to SQLite directly.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
