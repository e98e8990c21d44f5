//! Modal stacking and the modal frame widget.
//!
//! A [`ModalRegistry`] is shared by everything that can open a dialog. Each
//! open dialog holds a [`ModalLease`]; leases hand out increasing z-index
//! values so overlays draw in mount order, and the registry reports a scroll
//! lock while any lease is alive. Dropping the lease releases the slot.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};
use roster_core::style::SURFACE_0;

use crate::borders::RoundedBorder;
use crate::key_hints::KeyHintsBar;

/// z-index of the first modal.
pub const BASE_Z_INDEX: u32 = 1000;

/// Gap between consecutive modals.
pub const Z_INDEX_STEP: u32 = 10;

#[derive(Debug, Default)]
struct RegistryInner {
    next_id: u64,
    /// Lease id -> z-index.
    active: BTreeMap<u64, u32>,
}

impl RegistryInner {
    fn next_z_index(&self) -> u32 {
        self.active
            .values()
            .max()
            .map_or(BASE_Z_INDEX, |top| top + Z_INDEX_STEP)
    }
}

/// Shared registry of mounted modals.
///
/// Cloning yields another handle to the same registry.
#[derive(Debug, Clone, Default)]
pub struct ModalRegistry {
    inner: Arc<Mutex<RegistryInner>>,
}

impl ModalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a newly mounted modal.
    pub fn acquire(&self) -> ModalLease {
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        let z_index = inner.next_z_index();
        inner.active.insert(id, z_index);
        tracing::debug!(id, z_index, open = inner.active.len(), "modal acquired");

        ModalLease {
            registry: self.clone(),
            id,
            z_index,
            released: false,
        }
    }

    fn release_id(&self, id: u64) -> bool {
        let mut inner = self.inner.lock();
        let removed = inner.active.remove(&id).is_some();
        if removed {
            tracing::debug!(id, open = inner.active.len(), "modal released");
        }
        removed
    }

    /// Number of mounted modals.
    pub fn len(&self) -> usize {
        self.inner.lock().active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether background scrolling is locked, i.e. any modal is mounted.
    pub fn scroll_locked(&self) -> bool {
        !self.is_empty()
    }

    /// z-index of the top-most modal.
    pub fn top_z_index(&self) -> Option<u32> {
        self.inner.lock().active.values().max().copied()
    }
}

/// Proof that a modal is mounted. Releases its slot when dropped.
#[derive(Debug)]
pub struct ModalLease {
    registry: ModalRegistry,
    id: u64,
    z_index: u32,
    released: bool,
}

impl ModalLease {
    pub fn z_index(&self) -> u32 {
        self.z_index
    }

    /// Whether this lease belongs to the top-most modal.
    pub fn is_top(&self) -> bool {
        !self.released && self.registry.top_z_index() == Some(self.z_index)
    }

    /// Release the slot now. Calling it again does nothing.
    pub fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.registry.release_id(self.id);
        }
    }
}

impl Drop for ModalLease {
    fn drop(&mut self) {
        self.release();
    }
}

/// A centered dialog frame with a title and optional key hints.
pub struct Modal<'a> {
    title: &'a str,
    width_percent: u16,
    height: u16,
    key_hints: Vec<(&'static str, &'static str)>,
}

impl<'a> Modal<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            width_percent: 60,
            height: 10,
            key_hints: Vec::new(),
        }
    }

    /// Width as a percentage of the screen.
    pub fn width_percent(mut self, percent: u16) -> Self {
        self.width_percent = percent.clamp(20, 100);
        self
    }

    /// Height in lines, border included.
    pub fn height(mut self, height: u16) -> Self {
        self.height = height;
        self
    }

    pub fn key_hints(mut self, hints: Vec<(&'static str, &'static str)>) -> Self {
        self.key_hints = hints;
        self
    }

    /// The dialog rectangle centered in `area`.
    pub fn centered_area(&self, area: Rect) -> Rect {
        let width = (area.width as u32 * self.width_percent as u32 / 100) as u16;
        let width = width.max(20).min(area.width);
        let height = self.height.min(area.height);

        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;

        Rect::new(x, y, width, height)
    }

    /// Content area inside the border, above the key hints row.
    pub fn inner(&self, area: Rect) -> Rect {
        let mut inner = RoundedBorder::new().inner(self.centered_area(area));
        if !self.key_hints.is_empty() && inner.height > 1 {
            inner.height -= 1;
        }
        inner
    }
}

impl Widget for Modal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = self.centered_area(area);
        if modal_area.height < 3 || modal_area.width < 10 {
            return;
        }

        Clear.render(modal_area, buf);
        buf.set_style(modal_area, Style::default().bg(SURFACE_0));
        RoundedBorder::new()
            .title(self.title)
            .focused(true)
            .render(modal_area, buf);

        if !self.key_hints.is_empty() {
            let inner = RoundedBorder::new().inner(modal_area);
            let hints_area = Rect::new(inner.x, inner.bottom().saturating_sub(1), inner.width, 1);
            KeyHintsBar::from_tuples(&self.key_hints).render(hints_area, buf);
        }
    }
}
