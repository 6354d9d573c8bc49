//! Host editor collaborator

use crate::descriptor::DecorationDescriptor;

/// An editor widget that can swap one set of decorations for another
pub trait DecorationHost {
    /// Opaque token identifying a registered decoration
    type Handle: Clone;
    /// Failure raised by the widget
    type Error: std::error::Error + Send + Sync + 'static;

    /// Remove every decoration in `old` and add every entry of `new` in one step.
    ///
    /// Returns the handles of the added decorations, in the order of `new`.
    fn replace_decorations(
        &mut self,
        old: &[Self::Handle],
        new: Vec<DecorationDescriptor>,
    ) -> std::result::Result<Vec<Self::Handle>, Self::Error>;
}
