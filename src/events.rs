//! Series event system.
//!
//! Interactive series report what happened (a point was clicked, a selection
//! changed, a line got highlighted, ...) through an [`EventController`].
//! View-models and embedding code subscribe with an [`EventFilter`] and drain
//! the returned receiver once per frame.
//!
//! Each event carries a set of [`EventKind`] flags so a single occurrence can
//! match multiple categories (ending a rectangle drag is both
//! `RECT_SELECTION_ENDED` and `SELECTION_CHANGED`). An event is delivered when
//! `(event.kinds & filter) != 0`.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex};

use crate::data::geometry::{DataPoint, DataRect, ScreenPoint};

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Bitflags describing the *categories* an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u32);

impl EventKind {
    // ── Clickable scatter ───────────────────────────────────────────────
    /// An existing point was clicked and is now the active point.
    pub const POINT_CLICKED: Self = Self(1 << 0);
    /// A click on empty space appended a new point.
    pub const POINT_ADDED: Self = Self(1 << 1);
    /// A point was removed programmatically.
    pub const POINT_REMOVED: Self = Self(1 << 2);

    // ── Rectangle selection ─────────────────────────────────────────────
    /// The set of selected point indices changed.
    pub const SELECTION_CHANGED: Self = Self(1 << 3);
    /// A rectangle drag started.
    pub const RECT_SELECTION_STARTED: Self = Self(1 << 4);
    /// A rectangle drag completed and was applied.
    pub const RECT_SELECTION_ENDED: Self = Self(1 << 5);

    // ── Parallel coordinates ────────────────────────────────────────────
    /// The highlighted (hovered) line changed.
    pub const LINE_HIGHLIGHTED: Self = Self(1 << 6);
    /// A line was selected or deselected by a click.
    pub const LINE_SELECTED: Self = Self(1 << 7);
    /// Highlight and selection were reset.
    pub const HIGHLIGHT_RESET: Self = Self(1 << 8);

    /// Wildcard: matches *every* event kind.
    pub const ALL: Self = Self(u32::MAX);

    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether `self` contains all bits in `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether `self` intersects with `other` (at least one bit in common).
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for EventKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for EventKind {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

const KIND_NAMES: &[(EventKind, &str)] = &[
    (EventKind::POINT_CLICKED, "POINT_CLICKED"),
    (EventKind::POINT_ADDED, "POINT_ADDED"),
    (EventKind::POINT_REMOVED, "POINT_REMOVED"),
    (EventKind::SELECTION_CHANGED, "SELECTION_CHANGED"),
    (EventKind::RECT_SELECTION_STARTED, "RECT_SELECTION_STARTED"),
    (EventKind::RECT_SELECTION_ENDED, "RECT_SELECTION_ENDED"),
    (EventKind::LINE_HIGHLIGHTED, "LINE_HIGHLIGHTED"),
    (EventKind::LINE_SELECTED, "LINE_SELECTED"),
    (EventKind::HIGHLIGHT_RESET, "HIGHLIGHT_RESET"),
];

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == EventKind::ALL {
            return write!(f, "ALL");
        }

        let mut names = Vec::new();
        let mut known_bits = 0u32;
        for (kind, name) in KIND_NAMES {
            known_bits |= kind.0;
            if self.contains(*kind) {
                names.push((*name).to_string());
            }
        }
        let extra = self.0 & !known_bits;
        if extra != 0 {
            names.push(format!("0x{:x}", extra));
        }
        write!(f, "{}", names.join("|"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SeriesEvent
// ─────────────────────────────────────────────────────────────────────────────

/// Snapshot of the selection carried by `SELECTION_CHANGED` events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionMeta {
    /// Selected indices, ascending.
    pub indices: Vec<usize>,
    /// Data-space rectangle that produced the selection, if any.
    pub rect: Option<DataRect>,
}

/// An event emitted by one of the interactive series.
///
/// `kinds` is a bitflag set; the optional fields carry the payload relevant
/// to the kinds that are set.
#[derive(Debug, Clone)]
pub struct SeriesEvent {
    pub kinds: EventKind,
    /// Seconds since the controller was created.
    pub timestamp: f64,

    /// Index and data position of the point involved (clickable scatter).
    pub point: Option<(usize, DataPoint)>,
    pub selection: Option<SelectionMeta>,
    /// Line index for parallel-coordinates events; `None` means "no line".
    pub line: Option<usize>,
    /// Pointer position that triggered the event.
    pub screen_pos: Option<ScreenPoint>,
}

impl SeriesEvent {
    pub fn new(kinds: EventKind) -> Self {
        Self {
            kinds,
            timestamp: 0.0, // set by controller
            point: None,
            selection: None,
            line: None,
            screen_pos: None,
        }
    }

    pub fn with_point(mut self, index: usize, point: DataPoint) -> Self {
        self.point = Some((index, point));
        self
    }

    pub fn with_selection(mut self, indices: Vec<usize>, rect: Option<DataRect>) -> Self {
        self.selection = Some(SelectionMeta { indices, rect });
        self
    }

    pub fn with_line(mut self, line: Option<usize>) -> Self {
        self.line = line;
        self
    }

    pub fn at(mut self, pos: ScreenPoint) -> Self {
        self.screen_pos = Some(pos);
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventFilter
// ─────────────────────────────────────────────────────────────────────────────

/// OR-mask selecting which event categories a subscriber receives.
#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    pub const fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    pub const fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    #[inline]
    pub fn matches(&self, event: &SeriesEvent) -> bool {
        event.kinds.intersects(self.mask)
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::all()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventController
// ─────────────────────────────────────────────────────────────────────────────

struct Subscriber {
    filter: EventFilter,
    sender: Sender<SeriesEvent>,
}

/// Collects series events and distributes them to subscribers.
///
/// Cloning is cheap; clones share the subscriber list, so a view-model can
/// hand a clone to each series it owns.
#[derive(Clone)]
pub struct EventController {
    inner: Arc<Mutex<EventCtrlInner>>,
}

struct EventCtrlInner {
    subscribers: Vec<Subscriber>,
    start_instant: std::time::Instant,
}

impl EventController {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventCtrlInner {
                subscribers: Vec::new(),
                start_instant: std::time::Instant::now(),
            })),
        }
    }

    /// Subscribe to events matching the given filter.
    pub fn subscribe(&self, filter: EventFilter) -> Receiver<SeriesEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        if let Ok(mut inner) = self.inner.lock() {
            inner.subscribers.push(Subscriber { filter, sender: tx });
        }
        rx
    }

    pub fn subscribe_all(&self) -> Receiver<SeriesEvent> {
        self.subscribe(EventFilter::all())
    }

    /// Deliver an event to every matching subscriber.
    ///
    /// Subscribers whose receiver was dropped are pruned the next time an
    /// event matches them.
    pub fn emit(&self, mut event: SeriesEvent) {
        let Ok(mut inner) = self.inner.lock() else {
            return;
        };
        event.timestamp = inner.start_instant.elapsed().as_secs_f64();
        tracing::trace!(kinds = %event.kinds, "series event");
        inner.subscribers.retain(|sub| {
            if sub.filter.matches(&event) {
                sub.sender.send(event.clone()).is_ok()
            } else {
                true
            }
        });
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().map(|i| i.subscribers.len()).unwrap_or(0)
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventController")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
