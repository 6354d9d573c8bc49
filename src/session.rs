//! Decoration session
//!
//! A session owns the handles of the decorations it last applied to one
//! editor. Every call to [`DecorationSession::apply`] swaps that whole set
//! for a new one in a single host call and remembers the new handles.

use log::{debug, trace};
use serde::Deserialize;

use crate::descriptor::DecorationDescriptor;
use crate::error::{DecorationError, Result};
use crate::host::DecorationHost;
use crate::request::HighlightRequest;

/// What to do with ranges that are zero-based or inverted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RangeCheck {
    /// Hand every range to the host as given
    #[default]
    Defer,
    /// Fail before calling the host
    Reject,
}

/// Handles of the decorations currently owned for one editor
#[derive(Debug, Clone)]
pub struct DecorationSession<K> {
    current: Vec<K>,
    range_check: RangeCheck,
}

impl<K: Clone> DecorationSession<K> {
    /// Create a session that owns no decorations
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
            range_check: RangeCheck::Defer,
        }
    }

    /// Builder: set the range policy
    pub fn with_range_check(mut self, range_check: RangeCheck) -> Self {
        self.range_check = range_check;
        self
    }

    /// Handles returned by the most recent successful replacement
    pub fn handles(&self) -> &[K] {
        &self.current
    }

    /// Replace all decorations owned by this session with `requests`.
    ///
    /// Without an editor this is a no-op. Host errors propagate and leave
    /// the recorded handles untouched.
    pub fn apply<H>(&mut self, editor: Option<&mut H>, requests: &[HighlightRequest]) -> Result<()>
    where
        H: DecorationHost<Handle = K>,
    {
        let Some(editor) = editor else {
            trace!("no editor attached, skipping {} highlight(s)", requests.len());
            return Ok(());
        };

        if self.range_check == RangeCheck::Reject {
            check_ranges(requests)?;
        }

        let descriptors: Vec<DecorationDescriptor> =
            requests.iter().map(DecorationDescriptor::from).collect();

        debug!(
            "replacing {} decoration(s) with {}",
            self.current.len(),
            descriptors.len()
        );

        let handles = editor
            .replace_decorations(&self.current, descriptors)
            .map_err(DecorationError::host)?;
        self.current = handles;

        Ok(())
    }

    /// Remove every decoration owned by this session
    pub fn clear<H>(&mut self, editor: Option<&mut H>) -> Result<()>
    where
        H: DecorationHost<Handle = K>,
    {
        self.apply(editor, &[])
    }
}

impl<K: Clone> Default for DecorationSession<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject the first malformed range
fn check_ranges(requests: &[HighlightRequest]) -> Result<()> {
    match requests.iter().position(|r| !r.is_well_formed()) {
        Some(index) => {
            let r = &requests[index];
            Err(DecorationError::InvalidRange {
                index,
                start_line: r.start_line,
                start_col: r.start_col,
                end_line: r.end_line,
                end_col: r.end_col,
            })
        }
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::HoverMessage;
    use crate::request::Position;

    #[derive(Debug, thiserror::Error)]
    #[error("widget disposed")]
    struct Disposed;

    /// Host that records every call and hands out sequential handles
    #[derive(Default)]
    struct RecordingHost {
        calls: Vec<(Vec<u32>, Vec<DecorationDescriptor>)>,
        next: u32,
        fail: bool,
    }

    impl DecorationHost for RecordingHost {
        type Handle = u32;
        type Error = Disposed;

        fn replace_decorations(
            &mut self,
            old: &[u32],
            new: Vec<DecorationDescriptor>,
        ) -> std::result::Result<Vec<u32>, Disposed> {
            self.calls.push((old.to_vec(), new.clone()));
            if self.fail {
                return Err(Disposed);
            }
            let handles = (0..new.len() as u32).map(|i| self.next + i).collect();
            self.next += new.len() as u32;
            Ok(handles)
        }
    }

    fn req(line: usize, class: &str) -> HighlightRequest {
        HighlightRequest::new(Position::new(line, 1), Position::new(line, 5), class)
    }

    #[test]
    fn test_no_editor_is_noop() {
        let mut session: DecorationSession<u32> = DecorationSession::new();
        session.apply::<RecordingHost>(None, &[req(1, "a")]).unwrap();
        assert!(session.handles().is_empty());
    }

    #[test]
    fn test_no_editor_keeps_handles() {
        let mut host = RecordingHost::default();
        let mut session = DecorationSession::new();
        session.apply(Some(&mut host), &[req(1, "a")]).unwrap();

        session.apply::<RecordingHost>(None, &[]).unwrap();
        assert_eq!(session.handles(), &[0]);
        assert_eq!(host.calls.len(), 1);
    }

    #[test]
    fn test_empty_apply_still_calls_host() {
        let mut host = RecordingHost::default();
        let mut session = DecorationSession::new();

        session.apply(Some(&mut host), &[]).unwrap();

        assert_eq!(host.calls, vec![(Vec::new(), Vec::new())]);
        assert!(session.handles().is_empty());
    }

    #[test]
    fn test_single_call_in_order() {
        let mut host = RecordingHost::default();
        let mut session = DecorationSession::new();
        let requests = [req(1, "a"), req(2, "b"), req(3, "c")];

        session.apply(Some(&mut host), &requests).unwrap();

        assert_eq!(host.calls.len(), 1);
        let (old, new) = &host.calls[0];
        assert!(old.is_empty());
        let classes: Vec<_> = new.iter().map(|d| d.options.inline_class_name.as_str()).collect();
        assert_eq!(classes, ["a", "b", "c"]);
        assert_eq!(session.handles(), &[0, 1, 2]);
    }

    #[test]
    fn test_second_call_removes_first_handles() {
        let mut host = RecordingHost::default();
        let mut session = DecorationSession::new();
        let requests = [req(1, "a"), req(2, "b")];

        session.apply(Some(&mut host), &requests).unwrap();
        session.apply(Some(&mut host), &requests).unwrap();

        assert_eq!(host.calls[1].0, vec![0, 1]);
        assert_eq!(session.handles(), &[2, 3]);
    }

    #[test]
    fn test_hover_presence() {
        let mut host = RecordingHost::default();
        let mut session = DecorationSession::new();
        let requests = [req(1, "a").with_text("hint"), req(2, "b")];

        session.apply(Some(&mut host), &requests).unwrap();

        let new = &host.calls[0].1;
        assert_eq!(
            new[0].options.hover_message,
            Some(vec![HoverMessage { value: "hint".to_string() }])
        );
        assert_eq!(new[1].options.hover_message, None);
    }

    #[test]
    fn test_clear() {
        let mut host = RecordingHost::default();
        let mut session = DecorationSession::new();
        session.apply(Some(&mut host), &[req(1, "a")]).unwrap();

        session.clear(Some(&mut host)).unwrap();

        assert_eq!(host.calls[1], (vec![0], Vec::new()));
        assert!(session.handles().is_empty());
    }

    #[test]
    fn test_host_error_propagates() {
        let mut host = RecordingHost::default();
        let mut session = DecorationSession::new();
        session.apply(Some(&mut host), &[req(1, "a")]).unwrap();

        host.fail = true;
        let err = session.apply(Some(&mut host), &[req(2, "b")]).unwrap_err();

        assert!(matches!(err, DecorationError::Host(_)));
        assert_eq!(session.handles(), &[0]);
    }

    #[test]
    fn test_defer_passes_bad_ranges() {
        let mut host = RecordingHost::default();
        let mut session = DecorationSession::new();
        let inverted = HighlightRequest::new(Position::new(5, 1), Position::new(2, 1), "x");

        session.apply(Some(&mut host), &[inverted]).unwrap();

        assert_eq!(host.calls[0].1[0].range.start_line_number, 5);
    }

    #[test]
    fn test_reject_stops_before_host() {
        let mut host = RecordingHost::default();
        let mut session = DecorationSession::new().with_range_check(RangeCheck::Reject);
        let zero = HighlightRequest::new(Position::new(0, 0), Position::new(1, 1), "x");

        let err = session.apply(Some(&mut host), &[req(1, "a"), zero]).unwrap_err();

        assert!(matches!(err, DecorationError::InvalidRange { index: 1, .. }));
        assert!(host.calls.is_empty());
        assert!(session.handles().is_empty());
    }
}
