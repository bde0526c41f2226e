use crate::foundation::time::parse_time;
use crate::tree::node::{ComputedStyle, ComputedStyleReader, ElementNode, StyleReader};

/// How many levels below the root a scan may descend.
///
/// The root (depth 0) is always visited; the limit only stops descending further.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum DepthLimit {
    /// Visit the whole subtree.
    #[default]
    Unbounded,
    /// Visit at most this many levels of descendants (`0` = root only).
    Levels(u32),
}

impl DepthLimit {
    /// Map a signed depth to a limit; negative values mean unbounded.
    pub fn from_signed(depth: i64) -> Self {
        if depth < 0 {
            return Self::Unbounded;
        }
        Self::Levels(u32::try_from(depth).unwrap_or(u32::MAX))
    }

    /// Return `true` when children of a node at `depth` should be visited.
    pub fn descends_from(self, depth: u32) -> bool {
        match self {
            Self::Unbounded => true,
            Self::Levels(max) => depth < max,
        }
    }
}

impl From<u32> for DepthLimit {
    fn from(levels: u32) -> Self {
        Self::Levels(levels)
    }
}

impl From<Option<u32>> for DepthLimit {
    fn from(levels: Option<u32>) -> Self {
        levels.map_or(Self::Unbounded, Self::Levels)
    }
}

/// Outcome of a scan with traversal counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct ScanReport {
    /// Largest `duration + delay` of any visited element, in milliseconds.
    pub time_ms: f64,
    /// Number of visited nodes, elements or not.
    pub visited: usize,
    /// Number of visited nodes that reported a transition style.
    pub elements: usize,
    /// Deepest level reached (root = 0).
    pub deepest: u32,
}

/// Computes how long the transitions of a tree take to finish.
///
/// Each element contributes its own `duration + delay`; the result is the largest contribution
/// among all visited nodes. Traversal is pre-order, children in document order.
#[derive(Clone, Debug, Default)]
pub struct DurationScanner<R = ComputedStyleReader> {
    reader: R,
    depth: DepthLimit,
}

impl<R> DurationScanner<R> {
    /// Scanner reading styles through `reader`, with no depth limit.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            depth: DepthLimit::Unbounded,
        }
    }

    /// Replace the depth limit.
    pub fn with_depth(mut self, depth: DepthLimit) -> Self {
        self.depth = depth;
        self
    }

    /// Configured depth limit.
    pub fn depth(&self) -> DepthLimit {
        self.depth
    }

    /// Style reader used by this scanner.
    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Total transition time of `root` in milliseconds; always finite and `>= 0`.
    pub fn scan<N>(&self, root: &N) -> f64
    where
        N: ElementNode,
        R: StyleReader<N>,
    {
        self.scan_report(root).time_ms
    }

    /// Like [`Self::scan`], also returning traversal counters.
    pub fn scan_report<N>(&self, root: &N) -> ScanReport
    where
        N: ElementNode,
        R: StyleReader<N>,
    {
        scan_tree(root, &self.reader, self.depth)
    }
}

/// Total transition time of `root` and its descendants, in milliseconds.
///
/// Styles come from the nodes themselves via [`ComputedStyle`].
pub fn detect_animation_end_time<N>(root: &N, depth: DepthLimit) -> f64
where
    N: ElementNode + ComputedStyle,
{
    scan_tree(root, &ComputedStyleReader, depth).time_ms
}

/// Like [`detect_animation_end_time`], reading styles through `reader`.
pub fn detect_animation_end_time_with<N, R>(
    root: &N,
    reader: &R,
    depth: DepthLimit,
) -> f64
where
    N: ElementNode,
    R: StyleReader<N> + ?Sized,
{
    scan_tree(root, reader, depth).time_ms
}

#[tracing::instrument(level = "debug", skip(root, reader))]
pub(crate) fn scan_tree<N, R>(root: &N, reader: &R, depth: DepthLimit) -> ScanReport
where
    N: ElementNode,
    R: StyleReader<N> + ?Sized,
{
    let mut report = ScanReport::default();
    let mut fulltime = 0.0_f64;

    let mut stack: Vec<(&N, u32)> = vec![(root, 0)];
    let mut kids: Vec<&N> = Vec::new();

    while let Some((node, level)) = stack.pop() {
        report.visited += 1;
        report.deepest = report.deepest.max(level);

        if let Some(style) = reader.transition_style(node) {
            report.elements += 1;
            let duration = style_time_ms(&style.duration, "transition-duration");
            let delay = style_time_ms(&style.delay, "transition-delay");
            tracing::trace!(level, duration, delay, "element transition");
            if duration + delay > fulltime {
                fulltime = duration + delay;
            }
        }

        if depth.descends_from(level) {
            // Reverse push keeps the pop order equal to document order.
            kids.extend(node.child_nodes());
            let next = level.saturating_add(1);
            stack.extend(kids.drain(..).rev().map(|c| (c, next)));
        }
    }

    if !fulltime.is_finite() || fulltime < 0.0 {
        fulltime = 0.0;
    }
    report.time_ms = fulltime;

    tracing::debug!(
        time_ms = report.time_ms,
        visited = report.visited,
        elements = report.elements,
        "transition scan complete"
    );
    report
}

fn style_time_ms(raw: &str, property: &'static str) -> f64 {
    match parse_time(raw).map(|tv| tv.to_millis()) {
        Some(ms) if ms.is_finite() => ms,
        Some(_) => {
            tracing::debug!(property, raw, "time value out of range, using 0");
            0.0
        }
        None => {
            if !raw.trim().is_empty() {
                tracing::debug!(property, raw, "unparseable time value, using 0");
            }
            0.0
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scan/scanner.rs"]
mod tests;
