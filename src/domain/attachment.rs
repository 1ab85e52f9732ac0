// SPDX-License-Identifier: MPL-2.0
//! Draft attachments and their temporary preview resources.
//!
//! Each attachment owns a preview resource allocated from a [`PreviewRegistry`].
//! The resource must be released exactly once, on whichever exit path fires
//! first: explicit removal, submit-clear, or composer teardown. Explicit
//! release paths call [`PreviewResource::release`]; the `Drop` impl covers
//! teardown, so a resource can never leak and can never be released twice.

use iced::widget::image::Handle;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Unique identifier for an attachment within a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttachmentId(u64);

impl AttachmentId {
    /// Creates a new unique attachment ID.
    pub fn new() -> Self {
        use std::sync::atomic::AtomicU64;
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for AttachmentId {
    fn default() -> Self {
        Self::new()
    }
}

/// Allocates preview resources and tracks how many are still live.
///
/// The live count exists so tests (and debug assertions) can prove the
/// exactly-once release property: after a draft is cleared, the count for its
/// registry must be back to zero.
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    live: Arc<AtomicUsize>,
}

impl PreviewRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a preview resource for the given encoded image bytes.
    #[must_use]
    pub fn allocate(&self, bytes: Vec<u8>) -> PreviewResource {
        self.live.fetch_add(1, Ordering::Relaxed);
        PreviewResource {
            handle: Some(Handle::from_bytes(bytes)),
            live: Arc::clone(&self.live),
        }
    }

    /// Number of resources allocated from this registry and not yet released.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.load(Ordering::Relaxed)
    }
}

/// A temporary preview handle tied to one attachment.
#[derive(Debug)]
pub struct PreviewResource {
    handle: Option<Handle>,
    live: Arc<AtomicUsize>,
}

impl PreviewResource {
    /// Releases the underlying handle.
    ///
    /// Returns `true` on the first call; later calls are no-ops.
    pub fn release(&mut self) -> bool {
        if self.handle.take().is_some() {
            self.live.fetch_sub(1, Ordering::Relaxed);
            true
        } else {
            false
        }
    }

    /// Returns the preview handle, or `None` once released.
    #[must_use]
    pub fn handle(&self) -> Option<&Handle> {
        self.handle.as_ref()
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.handle.is_none()
    }
}

impl Drop for PreviewResource {
    fn drop(&mut self) {
        self.release();
    }
}

/// A user-selected media file held temporarily in a draft.
#[derive(Debug)]
pub struct Attachment {
    id: AttachmentId,
    file_name: String,
    width: u32,
    height: u32,
    resource: PreviewResource,
}

impl Attachment {
    /// Creates an attachment around decoded image metadata and its raw bytes.
    #[must_use]
    pub fn new(
        registry: &PreviewRegistry,
        file_name: String,
        bytes: Vec<u8>,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            id: AttachmentId::new(),
            file_name,
            width,
            height,
            resource: registry.allocate(bytes),
        }
    }

    #[must_use]
    pub fn id(&self) -> AttachmentId {
        self.id
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Preview handle for rendering, `None` once the resource was released.
    #[must_use]
    pub fn preview(&self) -> Option<&Handle> {
        self.resource.handle()
    }

    /// Releases the preview resource. Returns `true` on the first release.
    pub fn release(&mut self) -> bool {
        self.resource.release()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_like_bytes() -> Vec<u8> {
        vec![0x89, 0x50, 0x4E, 0x47]
    }

    #[test]
    fn allocate_increments_live_count() {
        let registry = PreviewRegistry::new();
        assert_eq!(registry.live_count(), 0);

        let _a = registry.allocate(png_like_bytes());
        let _b = registry.allocate(png_like_bytes());
        assert_eq!(registry.live_count(), 2);
    }

    #[test]
    fn release_is_exactly_once() {
        let registry = PreviewRegistry::new();
        let mut resource = registry.allocate(png_like_bytes());

        assert!(resource.release());
        assert_eq!(registry.live_count(), 0);

        // Second release is a no-op, count does not underflow.
        assert!(!resource.release());
        assert_eq!(registry.live_count(), 0);
        assert!(resource.is_released());
    }

    #[test]
    fn drop_releases_unreleased_resource() {
        let registry = PreviewRegistry::new();
        {
            let _resource = registry.allocate(png_like_bytes());
            assert_eq!(registry.live_count(), 1);
        }
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn drop_after_explicit_release_does_not_double_release() {
        let registry = PreviewRegistry::new();
        {
            let mut resource = registry.allocate(png_like_bytes());
            resource.release();
        }
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn attachment_exposes_preview_until_released() {
        let registry = PreviewRegistry::new();
        let mut attachment =
            Attachment::new(&registry, "chart.png".to_string(), png_like_bytes(), 64, 48);

        assert!(attachment.preview().is_some());
        assert_eq!(attachment.dimensions(), (64, 48));

        assert!(attachment.release());
        assert!(attachment.preview().is_none());
    }

    #[test]
    fn attachment_ids_are_unique() {
        let registry = PreviewRegistry::new();
        let a = Attachment::new(&registry, "a.png".into(), png_like_bytes(), 1, 1);
        let b = Attachment::new(&registry, "b.png".into(), png_like_bytes(), 1, 1);
        assert_ne!(a.id(), b.id());
    }
}
