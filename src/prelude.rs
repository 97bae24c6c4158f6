//! Single module with all `rawseq` exports.
//!
//! # Examples
//!
//! Import all into current scope:
//!
//! ```
//! use rawseq::prelude::*;
//! ```

pub use crate::raw::RawStorage;
pub use crate::seq::Seq;
pub use crate::{CloneOf, Fill, FillWith, FillWithDefault};
