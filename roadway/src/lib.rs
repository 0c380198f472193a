//! Roadway
//!
//! A minimal cursor for hand-written lexers and parsers. It reads an ordered
//! subject forward, looks ahead without consuming, and can cut out frames
//! between a recorded mark and the current position.
//!
//! ```
//! use roadway::{Cursor, Text};
//!
//! let mut cursor = Cursor::framed(Text::new("riders on the storm")).unwrap();
//! cursor.record().unwrap();
//! cursor.next(5);
//! assert_eq!(cursor.flush().unwrap(), "riders");
//! ```

pub mod config;
pub mod cursor;
pub mod error;

pub use config::CursorConfig;
pub use cursor::Cursor;
pub use error::{ErrorKind, Result, RoadwayError};
pub use roadway_common::{copy_range, ArrayLike, List, Subject, Text, TextSlice};
