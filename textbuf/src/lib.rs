#![no_std]

//! `TextBuf`: a bounded text buffer with capacity invariants enforced at
//! every mutation point.
//!
//! The buffer owns storage of exactly `capacity` elements, fixed at
//! construction, and tracks the occupied prefix with an explicit length
//! field. There is no terminator value and no scanning for one: the
//! length is the only source of truth for where the text ends, so bounds
//! never depend on the data itself.
//!
//! Construction validates the requested capacity against a lower bound
//! and the platform allocation ceiling before any allocation happens,
//! and allocation itself is fallible. Capacity can also be derived from
//! measured data instead of a caller-supplied integer:
//!
//! ```
//! use textbuf::ByteBuf;
//!
//! let buf = ByteBuf::from_text(b"hello").unwrap();
//! assert_eq!(buf.as_text(), b"hello");
//! assert_eq!(buf.capacity(), 6);
//!
//! assert!(ByteBuf::new(0).is_err());
//! assert!(ByteBuf::new(usize::MAX).is_err());
//! ```
//!
//! # Overflow policies
//!
//! A source longer than the usable space is never copied silently. The
//! policy is chosen at construction and the outcome is always explicit:
//!
//! ```
//! use textbuf::{ByteBuf, OverflowPolicy, Written};
//!
//! let mut reject = ByteBuf::new(10).unwrap();
//! assert!(reject.write(b"way too long for ten slots").is_err());
//! assert!(reject.is_empty());
//!
//! let mut cut = ByteBuf::new_with_policy(10, OverflowPolicy::Truncate).unwrap();
//! let outcome = cut.write(b"way too long for ten slots").unwrap();
//! assert_eq!(outcome, Written::Truncated { copied: 9 });
//! assert_eq!(cut.as_text(), b"way too l");
//! ```
//!
//! # Element widths
//!
//! The same invariants apply to narrow and wide text. `ByteBuf` stores
//! 8-bit code units, `WideBuf` stores fixed-width code points:
//!
//! ```
//! use textbuf::WideBuf;
//!
//! let mut wide = WideBuf::new(10).unwrap();
//! wide.write(&['a', 'b', 'c']).unwrap();
//! assert_eq!(wide.as_text(), &['a', 'b', 'c']);
//! ```
//!
//! # `no_std` compatibility
//!
//! The crate is `no_std` and depends only on `alloc` for the owned
//! storage. Enable the `std` feature in std environments:
//! ```toml
//! [dependencies]
//! textbuf = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod core;
mod error;
mod unit;

// Re-export public types and traits
pub use crate::core::{max_capacity, ByteBuf, OverflowPolicy, TextBuf, WideBuf, Written};
pub use crate::error::TextBufError;
pub use crate::unit::Unit;
