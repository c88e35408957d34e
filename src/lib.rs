//! voxdial - Voice command dispatcher
//!
//! voxdial takes transcripts from a speech-recognition capability, matches
//! them against a small registry of command phrases and contact names, and
//! hands the resulting action (open a URL, launch an app link, dial a number)
//! to a host executor.
//!
//! ## Pieces
//!
//! 1. **Registry**: immutable phrase -> action list plus a contact book,
//!    built once from config.
//! 2. **Resolver**: pure transcript -> action classification with special
//!    cases (`call`, `whatsapp`, `instagram`, `contact`) and fuzzy matching.
//! 3. **Dispatcher**: resolve -> act -> clear per utterance, including the
//!    timed web fallback for app links.

pub mod config;
pub mod dispatch;
pub mod executor;
pub mod registry;
pub mod resolver;
pub mod session;

pub use config::Config;
pub use dispatch::{DispatchOutcome, Dispatcher};
pub use executor::ActionExecutor;
pub use registry::{ActionSpec, CommandRegistry};
pub use resolver::{CommandResolver, PlatformProfile, Resolution, Unresolved};
