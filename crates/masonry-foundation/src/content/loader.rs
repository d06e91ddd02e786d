use super::LoadError;
use masonry_core::CancelToken;
use std::marker::PhantomData;

/// External collaborator that acquires an item's visual content.
///
/// `load` runs on a worker thread, once per acquisition. It should check the
/// token between expensive steps; a result returned after cancellation is
/// discarded.
pub trait ContentLoader: Send + Sync + 'static {
    type Content: Send + 'static;

    fn load(&self, source: &str, token: &CancelToken) -> Result<Self::Content, LoadError>;
}

/// [`ContentLoader`] backed by a closure. Built with [`loader_fn`].
pub struct FnLoader<F, C> {
    load: F,
    _content: PhantomData<fn() -> C>,
}

/// Wraps a closure as a [`ContentLoader`].
pub fn loader_fn<C, F>(load: F) -> FnLoader<F, C>
where
    C: Send + 'static,
    F: Fn(&str, &CancelToken) -> Result<C, LoadError> + Send + Sync + 'static,
{
    FnLoader {
        load,
        _content: PhantomData,
    }
}

impl<C, F> ContentLoader for FnLoader<F, C>
where
    C: Send + 'static,
    F: Fn(&str, &CancelToken) -> Result<C, LoadError> + Send + Sync + 'static,
{
    type Content = C;

    fn load(&self, source: &str, token: &CancelToken) -> Result<C, LoadError> {
        (self.load)(source, token)
    }
}
