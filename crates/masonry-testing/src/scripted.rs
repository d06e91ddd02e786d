use crate::lock;
use masonry_core::CancelToken;
use masonry_foundation::{ContentLoader, LoadError};
use masonry_ui_graphics::Size;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct Script {
    failing: HashSet<String>,
    sizes: HashMap<String, Size>,
    calls: HashMap<String, usize>,
}

/// Loader that answers immediately: `Err` for sources marked failing, the
/// scripted (or default 300×300) size otherwise.
///
/// Clones share one script, so a test can keep a clone after handing the
/// loader to a registry.
#[derive(Clone, Default)]
pub struct ScriptedLoader {
    script: Arc<Mutex<Script>>,
}

impl ScriptedLoader {
    pub const DEFAULT_SIZE: Size = Size::new(300.0, 300.0);

    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(self, source: impl Into<String>) -> Self {
        self.set_failing(source, true);
        self
    }

    pub fn with_size(self, source: impl Into<String>, size: Size) -> Self {
        lock(&self.script).sizes.insert(source.into(), size);
        self
    }

    pub fn set_failing(&self, source: impl Into<String>, failing: bool) {
        let source = source.into();
        let mut script = lock(&self.script);
        if failing {
            script.failing.insert(source);
        } else {
            script.failing.remove(&source);
        }
    }

    /// How many acquisitions of `source` ran so far.
    pub fn calls(&self, source: &str) -> usize {
        lock(&self.script).calls.get(source).copied().unwrap_or(0)
    }
}

impl ContentLoader for ScriptedLoader {
    type Content = Size;

    fn load(&self, source: &str, _token: &CancelToken) -> Result<Size, LoadError> {
        let mut script = lock(&self.script);
        *script.calls.entry(source.to_owned()).or_insert(0) += 1;
        if script.failing.contains(source) {
            return Err(LoadError::unavailable(source, "scripted failure"));
        }
        Ok(script
            .sizes
            .get(source)
            .copied()
            .unwrap_or(Self::DEFAULT_SIZE))
    }
}
