use crate::scene::LayerTree;

/// External display surface hooked to the scene.
///
/// The scene calls [`adjust_offset`](Self::adjust_offset) after every image
/// change so the view can recompute whatever fit or centering it performs.
/// The default implementation does nothing.
pub trait ViewHost {
    /// Invoked with the new image dimensions (both 0 when the image was
    /// cleared).
    fn adjust_offset(&mut self, width: u32, height: u32) {
        let _ = (width, height);
    }
}

/// A host that performs no fitting; useful for offscreen bindings.
#[derive(Debug, Default)]
pub struct NullHost;

impl ViewHost for NullHost {}

/// One display surface bound to the scene.
///
/// Each binding owns its own copy of the rendered layer tree; all bindings
/// of a scene reflect the same spot store, image and parameters. Dropping a
/// binding is the only teardown there is — no explicit detach call exists.
pub struct ViewBinding {
    host: Box<dyn ViewHost>,
    content: LayerTree,
}

impl ViewBinding {
    pub(crate) fn new(host: Box<dyn ViewHost>, content: LayerTree) -> Self {
        Self { host, content }
    }

    /// The binding's rendered layer tree.
    #[inline]
    pub fn content(&self) -> &LayerTree {
        &self.content
    }

    #[inline]
    pub(crate) fn content_mut(&mut self) -> &mut LayerTree {
        &mut self.content
    }

    #[inline]
    pub(crate) fn host_mut(&mut self) -> &mut dyn ViewHost {
        self.host.as_mut()
    }
}
