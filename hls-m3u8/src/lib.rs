//! # hls-m3u8
//! A library for decoding and re-encoding HLS (m3u8) playlists.
//!
//! Every tag the library knows becomes a typed item; attributes it does not
//! know are kept next to the typed fields and written back unchanged. Lines
//! it cannot read are kept verbatim as [`UnknownItem`](format::UnknownItem)s.
//!
//! # Example
//! ```rust
//! use hls_m3u8::{Parser, format::Item};
//! use std::io::Cursor;
//!
//! // 1. Parse
//! let mut parser = Parser::new(Cursor::new(r#"
//! #EXTM3U
//! #EXT-X-TARGETDURATION:10
//! #EXT-X-KEY:METHOD=AES-128,URI="https://keys/1",X-VENDOR="a,b"
//! #EXTINF:9.009,
//! first.ts
//! #EXT-X-ENDLIST"#));
//! parser.parse().unwrap();
//! let mut result = parser.get_result();
//!
//! // 2. Edit
//! if let Item::Key(key) = &mut result.items[0] {
//!     key.encryptable.uri = Some("https://keys/2".into());
//! }
//!
//! // 3. Generate
//! let text = result.encode().unwrap();
//! assert!(text.contains(r#"URI="https://keys/2",X-VENDOR="a,b""#));
//! ```

pub mod attributes;
mod builder;
pub mod codecs;
pub mod error;
pub mod format;
mod parser;
mod registry;

pub use error::{PlaylistError, TagError, ValidationError};
pub use parser::*;
