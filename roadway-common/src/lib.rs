//! Roadway Common
//!
//! Sequence adapters a roadway cursor can read from: text, ordered lists and
//! integer-keyed array-likes, all behind the [`Subject`] trait.

pub mod array_like;
pub mod list;
pub mod subject;
pub mod text;
pub mod text_slice;

pub use array_like::ArrayLike;
pub use list::List;
pub use subject::{clamp_range, copy_range, Subject};
pub use text::Text;
pub use text_slice::TextSlice;
