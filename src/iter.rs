//! Lazy iteration over repeated sub-messages.
//!
//! The iterators here yield borrowed sub-slices one at a time and never look
//! past the last element handed out. A decode error ends the iteration the
//! same way exhaustion does; it is parked in a [`DeferredError`] and only
//! becomes visible through [`FieldIter::error`] / [`FieldIter::finish`]
//! (or the same methods on [`Messages`]) once the caller stops pulling.
//!
//! ```
//! # use otlp_wire::ExportLogsServiceRequest;
//! # fn route(_: &[u8]) {}
//! # fn run(bytes: &[u8]) -> otlp_wire::Result<()> {
//! let batch = ExportLogsServiceRequest::new(bytes);
//! let mut resources = batch.resource_logs();
//! for resource in &mut resources {
//!     route(resource.as_bytes());
//! }
//! resources.finish()?;
//! # Ok(())
//! # }
//! ```
//!
//! Skipping the final check is allowed, but then a corrupt tail looks exactly
//! like the end of the batch.

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ops::ControlFlow;

use tracing::debug;

use crate::descent::FieldCursor;
use crate::error::{MessageKind, WireError};
use crate::views::WireView;
use crate::Result;

/// Holds the first error a lazy traversal ran into.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use = "a deferred error is lost unless it is checked"]
pub struct DeferredError {
    error: Option<WireError>,
}

impl DeferredError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep `error` unless one is already held.
    pub(crate) fn record(&mut self, error: WireError) {
        if self.error.is_none() {
            self.error = Some(error);
        }
    }

    pub fn get(&self) -> Option<&WireError> {
        self.error.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.error.is_some()
    }

    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Active,
    Done,
}

/// Yields the payload of every occurrence of one field, in encoding order.
#[derive(Clone)]
pub struct FieldIter<'a> {
    cursor: FieldCursor<'a>,
    field: u32,
    state: State,
    deferred: DeferredError,
}

impl<'a> FieldIter<'a> {
    pub fn new(data: &'a [u8], message: MessageKind, field: u32) -> Self {
        Self {
            cursor: FieldCursor::new(data, message),
            field,
            state: State::Active,
            deferred: DeferredError::new(),
        }
    }

    /// True once the iteration has ended, by exhaustion or by error.
    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    /// The error that ended the iteration, if any.
    pub fn error(&self) -> Option<&WireError> {
        self.deferred.get()
    }

    /// Stop iterating and report whether the walk so far was clean.
    pub fn finish(self) -> Result<()> {
        self.deferred.into_result()
    }

    pub(crate) fn into_deferred(self) -> DeferredError {
        self.deferred
    }

    /// Feed elements to `visit` until it breaks or the iteration ends.
    pub fn drive<F>(&mut self, mut visit: F)
    where
        F: FnMut(&'a [u8]) -> ControlFlow<()>,
    {
        for bytes in self.by_ref() {
            if visit(bytes).is_break() {
                break;
            }
        }
    }
}

impl<'a> Iterator for FieldIter<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.state == State::Done {
            return None;
        }

        match self.cursor.next_match(&[self.field]) {
            Ok(Some((_, bytes))) => Some(bytes),
            Ok(None) => {
                self.state = State::Done;
                None
            }
            Err(error) => {
                debug!(
                    message = %self.cursor.message(),
                    field = self.field,
                    %error,
                    "wire iteration stopped on decode error"
                );
                self.deferred.record(error);
                self.state = State::Done;
                None
            }
        }
    }
}

impl FusedIterator for FieldIter<'_> {}

impl fmt::Debug for FieldIter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldIter")
            .field("message", &self.cursor.message())
            .field("field", &self.field)
            .field("state", &self.state)
            .field("error", &self.deferred.get())
            .finish()
    }
}

/// [`FieldIter`] that wraps each payload in a typed view.
pub struct Messages<'a, V> {
    fields: FieldIter<'a>,
    _view: PhantomData<fn() -> V>,
}

impl<'a, V: WireView<'a>> Messages<'a, V> {
    pub(crate) fn new(data: &'a [u8], parent: MessageKind, field: u32) -> Self {
        Self {
            fields: FieldIter::new(data, parent, field),
            _view: PhantomData,
        }
    }

    pub fn is_done(&self) -> bool {
        self.fields.is_done()
    }

    /// The error that ended the iteration, if any.
    pub fn error(&self) -> Option<&WireError> {
        self.fields.error()
    }

    /// Stop iterating and report whether the walk so far was clean.
    pub fn finish(self) -> Result<()> {
        self.fields.finish()
    }

    /// Drain the remaining elements into a vector, failing if the walk hit
    /// an error at any point.
    pub fn collect_all(mut self) -> Result<Vec<V>> {
        let views: Vec<V> = self.by_ref().collect();
        self.finish()?;
        Ok(views)
    }
}

impl<'a, V: WireView<'a>> Iterator for Messages<'a, V> {
    type Item = V;

    #[inline]
    fn next(&mut self) -> Option<V> {
        self.fields.next().map(V::from_bytes)
    }
}

impl<'a, V: WireView<'a>> FusedIterator for Messages<'a, V> {}

impl<V> Clone for Messages<'_, V> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            _view: PhantomData,
        }
    }
}

impl<V> fmt::Debug for Messages<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Messages").field(&self.fields).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::wire::encode_length_delimited;

    const KIND: MessageKind = MessageKind::ExportLogsServiceRequest;

    fn three_then_garbage() -> Vec<u8> {
        let mut buf = Vec::new();
        encode_length_delimited(1, b"one", &mut buf);
        encode_length_delimited(2, b"skip me", &mut buf);
        encode_length_delimited(1, b"two", &mut buf);
        encode_length_delimited(1, b"three", &mut buf);
        buf.extend_from_slice(&[0x0A, 0x7F, 0x00]); // claims 127 bytes
        buf
    }

    #[test]
    fn test_yields_in_order_then_records_error() {
        let data = three_then_garbage();
        let mut iter = FieldIter::new(&data, KIND, 1);
        let items: Vec<_> = iter.by_ref().collect();
        assert_eq!(items, vec![&b"one"[..], &b"two"[..], &b"three"[..]]);
        assert_eq!(iter.finish().map_err(|e| e.kind()), Err(ErrorKind::TruncatedPayload));
    }

    #[test]
    fn test_no_error_when_stopped_before_corruption() {
        let data = three_then_garbage();
        let mut iter = FieldIter::new(&data, KIND, 1);
        let seen: Vec<_> = iter.by_ref().take(3).collect();
        assert_eq!(seen.len(), 3);
        assert!(iter.error().is_none());
        assert!(!iter.is_done());
        assert!(iter.finish().is_ok());
    }

    #[test]
    fn test_done_state_is_sticky() {
        let data = three_then_garbage();
        let mut iter = FieldIter::new(&data, KIND, 1);
        for _ in iter.by_ref() {}
        assert!(iter.is_done());
        assert!(iter.error().is_some());
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.error().map(WireError::kind), Some(ErrorKind::TruncatedPayload));
    }

    #[test]
    fn test_empty_input() {
        let mut iter = FieldIter::new(&[], KIND, 1);
        assert_eq!(iter.next(), None);
        assert!(iter.is_done());
        assert!(iter.finish().is_ok());
    }

    #[test]
    fn test_error_never_checked_is_harmless() {
        let data = three_then_garbage();
        let count = FieldIter::new(&data, KIND, 1).count();
        assert_eq!(count, 3);
    }

    #[test]
    fn test_deferred_error_keeps_first() {
        let mut deferred = DeferredError::new();
        deferred.record(WireError::FieldNotFound { message: KIND, field: 1 });
        deferred.record(WireError::MalformedTag { message: KIND, offset: 0 });
        assert_eq!(deferred.get().map(WireError::kind), Some(ErrorKind::FieldNotFound));
        assert!(deferred.is_set());
    }
}
