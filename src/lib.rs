#![doc(html_root_url = "https://docs.rs/sms_udh/latest")]
//! Public API for the `sms_udh` library.
//!
//! Some SMSCs hand over `short_message` content with a raw User Data Header
//! still attached, or segment concatenated messages inconsistently. This
//! crate parses hex-encoded `short_message` payloads defensively, decodes
//! their text under the legacy SMS encodings, and regroups the parts of
//! concatenated messages by reference number.
//!
//! ```
//! use sms_udh::{Encoding, FragmentStore};
//! let store = FragmentStore::new();
//! store
//!     .add_raw("050003A50201486920", Encoding::Gsm7)
//!     .expect("well-formed part");
//! store
//!     .add_raw("050003A50202746865726521", Encoding::Gsm7)
//!     .expect("well-formed part");
//! let mut set = store.get(&[0xa5]).expect("reference is tracked");
//! assert!(set.is_complete());
//! assert_eq!(set.concatenate(), "Hi there!");
//! ```

pub mod config;
pub mod encoding;
pub mod error;
pub mod fragment;
pub mod header;
pub mod metrics;
pub mod part;

pub use config::InterchangeFormat;
pub use encoding::{Encoding, decode_text};
pub use error::{InterchangeError, UdhError};
pub use fragment::{FragmentSet, FragmentStatus, FragmentStore};
pub use header::{ParsedHeader, decode_hex, parse_hex, parse_octets};
pub use part::{MessagePart, Reference};
