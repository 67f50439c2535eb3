//! Collection of parts sharing one concatenation reference.
//!
//! `FragmentSet` keeps parts in insertion order. Ordering is an explicit step
//! performed by [`sort`](FragmentSet::sort) or, for strict part-index
//! ordering, [`sort_by_part`](FragmentSet::sort_by_part).

use serde::{Deserialize, Serialize};

use crate::{
    config::InterchangeFormat,
    encoding::Encoding,
    error::{InterchangeError, UdhError},
    part::{MessagePart, Reference},
};

/// Completion state of a [`FragmentSet`] after an insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FragmentStatus {
    /// The message still expects more parts.
    Incomplete,
    /// The set holds as many parts as the message declares.
    Complete,
}

/// Parts of one concatenated message, grouped by reference number.
///
/// # Examples
///
/// ```
/// use sms_udh::{Encoding, FragmentSet};
/// let mut set = FragmentSet::new();
/// set.add_raw("050003A50201486920", Encoding::Gsm7)
///     .expect("first part accepted");
/// assert!(!set.is_complete());
/// set.add_raw("050003A50202746865726521", Encoding::Gsm7)
///     .expect("second part accepted");
/// assert!(set.is_complete());
/// assert_eq!(set.concatenate(), "Hi there!");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FragmentSet {
    parts: Vec<MessagePart>,
}

impl FragmentSet {
    /// Create an empty set.
    #[must_use]
    pub const fn new() -> Self { Self { parts: Vec::new() } }

    /// Append `part`.
    ///
    /// The first part fixes the set's reference; later parts must match it
    /// byte for byte.
    ///
    /// # Errors
    ///
    /// Returns [`UdhError::ReferenceMismatch`] and leaves the set unchanged
    /// when `part` belongs to another message.
    pub fn add(&mut self, part: MessagePart) -> Result<(), UdhError> {
        match self.reference() {
            Some(expected) if expected != part.reference() => {
                return Err(UdhError::ReferenceMismatch {
                    expected: expected.clone(),
                    found: part.reference().clone(),
                });
            }
            _ => {}
        }
        self.parts.push(part);
        Ok(())
    }

    /// Parse, decode, and append a hex-encoded `short_message`.
    ///
    /// # Errors
    ///
    /// Returns any error from [`MessagePart::parse`] or [`add`](Self::add).
    pub fn add_raw(&mut self, input: &str, encoding: Encoding) -> Result<(), UdhError> {
        self.add(MessagePart::parse(input, encoding)?)
    }

    /// Stable sort by information-element identifier.
    ///
    /// Parts of one message usually share an identifier, in which case
    /// insertion order is kept. Use [`sort_by_part`](Self::sort_by_part) to
    /// order by part index.
    pub fn sort(&mut self) { self.parts.sort_by_key(MessagePart::element); }

    /// Stable sort by current-part index.
    pub fn sort_by_part(&mut self) { self.parts.sort_by_key(MessagePart::current_part); }

    /// Report whether the set holds every part of its message.
    ///
    /// Only the count is checked against the first part's declared total;
    /// duplicate or missing indices are not detected.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let Some(first) = self.parts.first() else {
            return false;
        };
        if first.is_standalone() {
            return true;
        }
        if first.total_parts() == 0 && first.current_part() == 0 && !first.message().is_empty() {
            return true;
        }
        self.parts.len() == usize::from(first.total_parts())
    }

    /// Completion state as a [`FragmentStatus`].
    #[must_use]
    pub fn status(&self) -> FragmentStatus {
        if self.is_complete() {
            FragmentStatus::Complete
        } else {
            FragmentStatus::Incomplete
        }
    }

    /// Sort with [`sort`](Self::sort) and join the decoded texts.
    pub fn concatenate(&mut self) -> String {
        self.sort();
        self.joined()
    }

    /// Sort with [`sort_by_part`](Self::sort_by_part) and join the decoded
    /// texts.
    pub fn concatenate_by_part(&mut self) -> String {
        self.sort_by_part();
        self.joined()
    }

    fn joined(&self) -> String { self.parts.iter().map(MessagePart::message).collect() }

    /// Reference shared by every part, or `None` while empty.
    #[must_use]
    pub fn reference(&self) -> Option<&Reference> { self.parts.first().map(MessagePart::reference) }

    #[must_use]
    pub fn len(&self) -> usize { self.parts.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.parts.is_empty() }

    /// Borrow the parts in their current order.
    #[must_use]
    pub fn parts(&self) -> &[MessagePart] { &self.parts }

    /// Render the set as a JSON array of parts.
    ///
    /// # Errors
    ///
    /// Returns [`InterchangeError::Json`] if serialisation fails.
    pub fn to_json(&self) -> Result<String, InterchangeError> {
        InterchangeFormat::Json.serialize(self)
    }

    /// Load a set from a JSON array of parts.
    ///
    /// Parts are taken as stored; reference consistency is not re-checked.
    ///
    /// # Errors
    ///
    /// Returns [`InterchangeError::Json`] for malformed documents.
    pub fn from_json(input: &str) -> Result<Self, InterchangeError> {
        InterchangeFormat::Json.deserialize(input)
    }
}

impl From<MessagePart> for FragmentSet {
    fn from(part: MessagePart) -> Self { Self { parts: vec![part] } }
}

impl<'a> IntoIterator for &'a FragmentSet {
    type Item = &'a MessagePart;
    type IntoIter = std::slice::Iter<'a, MessagePart>;

    fn into_iter(self) -> Self::IntoIter { self.parts.iter() }
}
