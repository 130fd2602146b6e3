//! # IterComb - Cursor Combinator Library
//!
//! A lazy-iteration library built around a single three-method cursor
//! protocol: peek the current element, test for more, advance.
//!
//! IterComb provides composable combinators over any [`Cursor`], either
//! producing a derived value (`find`, `reduce`, `min`, `max`, `minmax`,
//! `counter`, `group_by`) or a new cursor that lazily wraps the source
//! (`map`, `filter`, `keep_while`). The library emphasizes:
//!
//! - **Zero panics**: all fallible operations are handled through `Result`
//!   types
//! - **Peekable iteration**: `current()` observes the pending element
//!   without advancing, which is what lets `filter` and `keep_while` decide
//!   before consuming
//! - **Composability**: lazy combinators take ownership of their source, so
//!   derived cursors stack into pipelines with a single legitimate handle
//! - **Single-pass semantics**: cursors are single-use and advancing a
//!   derived cursor advances its source by exactly the same amount
//!
//! Everything runs synchronously on the calling thread; there is no I/O,
//! no locking, and no suspension point anywhere.

pub mod counter;
pub mod cursor;
pub mod cursors;
pub mod drop_while;
pub mod error;
pub mod filter;
pub mod find;
pub mod group_by;
pub mod keep_while;
pub mod map;
pub mod minmax;
pub mod reduce;

pub use counter::{Histogram, counter};
pub use cursor::Cursor;
pub use cursors::VecCursor;
pub use drop_while::drop_while;
pub use error::CursorError;
pub use filter::{Filter, FilterExt, filter};
pub use find::find;
pub use group_by::{Grouping, group_by};
pub use keep_while::{KeepWhile, KeepWhileExt, keep_while};
pub use map::{Map, MapExt, map};
pub use minmax::{max, min, minmax};
pub use reduce::reduce;
