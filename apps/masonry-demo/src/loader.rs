use masonry_core::CancelToken;
use masonry_ui::{ContentLoader, LoadError, LoadErrorKind, Size};
use std::collections::HashSet;
use std::time::Duration;

const CANCEL_POLL: Duration = Duration::from_millis(5);

/// Stands in for an image service: decodes the image size from a picsum
/// style URL (`.../id/{id}/{width}/{height}`) after a simulated delay.
///
/// The delay varies per image so completions arrive out of display order.
#[derive(Clone, Debug)]
pub struct SimulatedLoader {
    latency: Duration,
    failing: HashSet<u32>,
}

impl SimulatedLoader {
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            failing: HashSet::new(),
        }
    }

    pub fn failing(mut self, ids: impl IntoIterator<Item = u32>) -> Self {
        self.failing.extend(ids);
        self
    }

    fn delay_for(&self, id: u32) -> Duration {
        self.latency * (3 - id % 3)
    }
}

/// Extracts `(id, size)` from `.../id/{id}/{width}/{height}`.
pub fn parse_image_url(url: &str) -> Option<(u32, Size)> {
    let mut segments = url.rsplit('/');
    let height: f32 = segments.next()?.parse().ok()?;
    let width: f32 = segments.next()?.parse().ok()?;
    let id: u32 = segments.next()?.parse().ok()?;
    if segments.next()? != "id" {
        return None;
    }
    Some((id, Size::new(width, height)))
}

impl ContentLoader for SimulatedLoader {
    type Content = Size;

    fn load(&self, source: &str, token: &CancelToken) -> Result<Size, LoadError> {
        let (id, size) = parse_image_url(source)
            .ok_or_else(|| LoadError::new(source, LoadErrorKind::InvalidSource))?;

        let mut remaining = self.delay_for(id);
        while !remaining.is_zero() {
            if token.is_cancelled() {
                return Err(LoadError::unavailable(source, "cancelled"));
            }
            let step = remaining.min(CANCEL_POLL);
            std::thread::sleep(step);
            remaining -= step;
        }

        if self.failing.contains(&id) {
            return Err(LoadError::unavailable(source, "simulated outage"));
        }
        if size.is_empty() {
            return Err(LoadError::new(
                source,
                LoadErrorKind::Corrupt("empty image".into()),
            ));
        }
        Ok(size)
    }
}

#[cfg(test)]
#[path = "tests/loader_tests.rs"]
mod tests;
