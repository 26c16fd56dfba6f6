//! # Article Module
//!
//! The authoritative article collection and its file-backed persistence.
//!
//! - `codec` - JSON round-trip of the collection to a single data file
//! - `store` - in-memory collection behind one lock, load-on-first-use,
//!   persist-on-write
//! - `auth` - writer token gate for create/delete

pub mod auth;
pub mod clock;
pub mod codec;
pub mod errors;
pub mod model;
pub mod store;

pub use auth::WriterAuth;
pub use clock::{Clock, SystemClock};
pub use codec::{CodecError, CodecResult};
pub use errors::{ArticleError, ArticleResult};
pub use model::{Article, ArticleDraft};
pub use store::{ArticleStore, RefreshPolicy};
