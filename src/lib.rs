//! settle estimates when the CSS transitions of an element tree are over.
//!
//! It does not observe animations. It reads the declared `transition-duration` and
//! `transition-delay` of every visited element and derives a deterministic wait time from them.
//!
//! # Overview
//!
//! 1. **Scan**: [`detect_animation_end_time`] walks a root element and, optionally depth-limited,
//!    its descendants, and returns the largest `duration + delay` of any single element, in
//!    milliseconds.
//! 2. **Notify**: [`add_end_event_listener`] scans synchronously, then runs an [`EndListener`] once
//!    after that many milliseconds and resolves a [`PendingCompletion`] with the listener's map plus
//!    a `time` field.
//!
//! Trees are supplied by the caller through [`ElementNode`]; styles come from a pluggable
//! [`StyleReader`]. [`StyleNode`] is a ready-made owned tree that can be loaded from JSON.
//!
//! Unparseable time values count as zero, so scanning never fails.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod notify;
mod scan;
mod tree;

pub use foundation::error::{SettleError, SettleResult};
pub use foundation::time::{TimeUnit, TimeValue, parse_time, parse_time_ms, try_parse_time_ms};
pub use notify::listener::{
    CancelHandle, Completion, EndListener, PendingCompletion, TIME_KEY, add_end_event_listener,
    add_end_event_listener_with, schedule_completion,
};
pub use scan::scanner::{
    DepthLimit, DurationScanner, ScanReport, detect_animation_end_time,
    detect_animation_end_time_with,
};
pub use tree::node::{
    ComputedStyle, ComputedStyleReader, ElementNode, StyleReader, TransitionStyle,
};
pub use tree::style_node::{NodeKind, StyleNode};
