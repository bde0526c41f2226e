use crate::foundation::time::parse_time_ms;

/// Effective `transition-duration` / `transition-delay` of one element, as style strings.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TransitionStyle {
    /// Raw `transition-duration` value.
    pub duration: String,
    /// Raw `transition-delay` value.
    pub delay: String,
}

impl Default for TransitionStyle {
    fn default() -> Self {
        Self {
            duration: "0s".to_owned(),
            delay: "0s".to_owned(),
        }
    }
}

impl TransitionStyle {
    /// Build a style from duration and delay strings.
    pub fn new(duration: impl Into<String>, delay: impl Into<String>) -> Self {
        Self {
            duration: duration.into(),
            delay: delay.into(),
        }
    }

    /// Parsed duration in milliseconds (`0.0` when unparseable).
    pub fn duration_ms(&self) -> f64 {
        parse_time_ms(&self.duration)
    }

    /// Parsed delay in milliseconds (`0.0` when unparseable).
    pub fn delay_ms(&self) -> f64 {
        parse_time_ms(&self.delay)
    }

    /// `duration + delay` in milliseconds.
    pub fn total_ms(&self) -> f64 {
        self.duration_ms() + self.delay_ms()
    }
}

/// A node of a caller-owned element tree.
///
/// Only ordered child access is required. Non-element nodes (text, comments) are regular nodes
/// too; whether a node carries style is decided by the [`StyleReader`].
pub trait ElementNode {
    /// Iterator over the direct children, in document order.
    type Children<'a>: Iterator<Item = &'a Self>
    where
        Self: 'a;

    /// Direct children of this node, in document order.
    fn child_nodes(&self) -> Self::Children<'_>;
}

/// Looks up the effective transition style of a node.
///
/// Returning `None` marks the node as a non-element: it contributes no time but its children are
/// still visited.
pub trait StyleReader<N: ?Sized> {
    /// Effective transition style of `node`, or `None` for non-element nodes.
    fn transition_style(&self, node: &N) -> Option<TransitionStyle>;
}

impl<N, F> StyleReader<N> for F
where
    N: ?Sized,
    F: Fn(&N) -> Option<TransitionStyle>,
{
    fn transition_style(&self, node: &N) -> Option<TransitionStyle> {
        self(node)
    }
}

/// Nodes that can report their own computed transition style.
pub trait ComputedStyle {
    /// Computed transition style, or `None` for non-element nodes.
    fn computed_transition(&self) -> Option<TransitionStyle>;
}

/// [`StyleReader`] that asks the node itself via [`ComputedStyle`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ComputedStyleReader;

impl<N: ComputedStyle + ?Sized> StyleReader<N> for ComputedStyleReader {
    fn transition_style(&self, node: &N) -> Option<TransitionStyle> {
        node.computed_transition()
    }
}
