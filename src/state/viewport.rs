//! Intersection checks for lazy images and reveal-on-scroll elements

/// Share of an element that must be visible before it is revealed
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Vertical extent of something on the page, in document coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub top: u32,
    pub height: u32,
}

impl Bounds {
    pub fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> u32 {
        self.top.saturating_add(self.height)
    }

    /// Rows of `self` that fall inside `other`
    fn overlap(&self, other: &Bounds) -> u32 {
        let top = self.top.max(other.top);
        let bottom = self.bottom().min(other.bottom());
        bottom.saturating_sub(top)
    }

    /// Whether any part of `self` is inside `viewport`
    pub fn intersects(&self, viewport: &Bounds) -> bool {
        if self.height == 0 {
            return self.top >= viewport.top && self.top <= viewport.bottom();
        }
        self.overlap(viewport) > 0
    }

    /// Visible fraction of `self` within `viewport`
    pub fn intersection_ratio(&self, viewport: &Bounds) -> f32 {
        if self.height == 0 {
            return if self.intersects(viewport) { 1.0 } else { 0.0 };
        }
        self.overlap(viewport) as f32 / self.height as f32
    }
}

/// Image whose source is deferred until it scrolls into view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LazyImage {
    pub alt: String,
    pub bounds: Bounds,
    /// Source waiting to be applied. Cleared once loaded.
    pub deferred_src: Option<String>,
    pub src: Option<String>,
    observed: bool,
}

impl LazyImage {
    pub fn new(alt: &str, deferred_src: &str, bounds: Bounds) -> Self {
        Self {
            alt: alt.to_string(),
            bounds,
            deferred_src: Some(deferred_src.to_string()),
            src: None,
            observed: true,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.src.is_some()
    }

    #[cfg(test)]
    pub fn is_observed(&self) -> bool {
        self.observed
    }
}

/// Element that animates in once it has been seen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealTarget {
    pub bounds: Bounds,
    revealed: bool,
}

impl RevealTarget {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

/// Load every observed image that intersects the viewport and stop
/// observing it. Returns how many loaded.
pub fn observe_lazy_images(images: &mut [LazyImage], viewport: &Bounds) -> usize {
    let mut loaded = 0;
    for image in images.iter_mut().filter(|i| i.observed) {
        if !image.bounds.intersects(viewport) {
            continue;
        }
        if let Some(src) = image.deferred_src.take() {
            tracing::debug!(src = %src, "Loading deferred image");
            image.src = Some(src);
            loaded += 1;
        }
        image.observed = false;
    }
    loaded
}

/// Mark targets that are at least [`REVEAL_THRESHOLD`] visible. Marks are never removed.
pub fn observe_reveals(targets: &mut [RevealTarget], viewport: &Bounds) {
    for target in targets.iter_mut() {
        if target.bounds.intersection_ratio(viewport) >= REVEAL_THRESHOLD {
            target.revealed = true;
        }
    }
}
