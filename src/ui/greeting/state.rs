//! State for the greeting list.

use crate::ui::animation::{AnimatedExtent, SpringSpec};
use crate::ui::mvi::UiState;
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Range;
use std::sync::{Arc, LazyLock};
use std::time::Duration;

/// Rows of a collapsed item: border, label, subject, border.
pub const ITEM_BASE_ROWS: u16 = 4;

/// Rows of the detail block when it is shown without an extent.
const DEFAULT_DETAIL_ROWS: u16 = 3;

/// Extent, in rows, of a fully expanded item.
const DEFAULT_EXPANDED_EXTENT: f32 = 3.0;

/// Display name rendered by one greeting item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GreetingSubject(String);

impl GreetingSubject {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The two-item list of the first revision.
    pub fn defaults() -> Vec<GreetingSubject> {
        vec![Self::new("World"), Self::new("Compose")]
    }

    /// `"0"` through `"{count - 1}"`.
    pub fn generated(count: usize) -> Vec<GreetingSubject> {
        (0..count).map(|i| Self::new(i.to_string())).collect()
    }
}

impl fmt::Display for GreetingSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GreetingSubject {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// How items are materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStrategy {
    /// Every subject is mounted.
    Eager,
    /// Only the visible window plus `prefetch` items on each side.
    Lazy { prefetch: usize },
}

/// How an expanded item reveals its detail block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailReveal {
    /// Detail rows appear only while expanded.
    Conditional,
    /// Extent jumps between 0 and the expanded extent.
    Step,
    /// Extent follows a spring between 0 and the expanded extent.
    Spring(SpringSpec),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListSettings {
    pub strategy: ListStrategy,
    pub reveal: DetailReveal,
    /// Target extent of an expanded item, in rows.
    pub expanded_extent: f32,
    /// Detail rows used by [`DetailReveal::Conditional`].
    pub detail_rows: u16,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            strategy: ListStrategy::Eager,
            reveal: DetailReveal::Conditional,
            expanded_extent: DEFAULT_EXPANDED_EXTENT,
            detail_rows: DEFAULT_DETAIL_ROWS,
        }
    }
}

/// Per-item state: the expansion flag and the extent derived from it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemState {
    expanded: bool,
    extent: AnimatedExtent,
}

impl ItemState {
    /// A collapsed item.
    pub fn new(reveal: DetailReveal) -> Self {
        let extent = match reveal {
            DetailReveal::Spring(spec) => AnimatedExtent::spring(spec),
            DetailReveal::Conditional | DetailReveal::Step => AnimatedExtent::default(),
        };
        Self {
            expanded: false,
            extent,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn extent(&self) -> &AnimatedExtent {
        &self.extent
    }

    /// Rows added below the subject line.
    pub fn extra_rows(&self, settings: &ListSettings) -> u16 {
        match settings.reveal {
            DetailReveal::Conditional => {
                if self.expanded {
                    settings.detail_rows
                } else {
                    0
                }
            }
            DetailReveal::Step | DetailReveal::Spring(_) => {
                self.extent.offset().round().min(f32::from(u16::MAX - ITEM_BASE_ROWS)) as u16
            }
        }
    }

    pub fn height(&self, settings: &ListSettings) -> u16 {
        ITEM_BASE_ROWS + self.extra_rows(settings)
    }

    pub(super) fn toggle(&mut self, expanded_extent: f32) {
        self.expanded = !self.expanded;
        let target = if self.expanded { expanded_extent } else { 0.0 };
        self.extent.set_target(target);
    }

    pub(super) fn tick(&mut self, dt: Duration) {
        self.extent.tick(dt);
    }
}

/// Greeting list state.
///
/// Item state is keyed by the subject's index in the (immutable) subject
/// sequence and exists only for mounted items.
#[derive(Debug, Clone, PartialEq)]
pub struct GreetingListState {
    subjects: Arc<[GreetingSubject]>,
    settings: ListSettings,
    selected: usize,
    first_visible: usize,
    viewport_rows: u16,
    items: BTreeMap<usize, ItemState>,
}

/// Shared backing for empty lists, so `Default` does not allocate.
static NO_SUBJECTS: LazyLock<Arc<[GreetingSubject]>> =
    LazyLock::new(|| Arc::from(Vec::<GreetingSubject>::new()));

/// An empty list. `App` swaps this in while a reducer owns the real state.
impl Default for GreetingListState {
    fn default() -> Self {
        Self {
            subjects: Arc::clone(&NO_SUBJECTS),
            settings: ListSettings::default(),
            selected: 0,
            first_visible: 0,
            viewport_rows: 0,
            items: BTreeMap::new(),
        }
    }
}

impl UiState for GreetingListState {}

impl GreetingListState {
    pub fn new(subjects: Vec<GreetingSubject>, settings: ListSettings) -> Self {
        let mut state = Self {
            subjects: subjects.into(),
            settings,
            selected: 0,
            first_visible: 0,
            viewport_rows: 0,
            items: BTreeMap::new(),
        };
        state.settle();
        state
    }

    pub fn subjects(&self) -> &[GreetingSubject] {
        &self.subjects
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    pub fn settings(&self) -> &ListSettings {
        &self.settings
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    pub fn viewport_rows(&self) -> u16 {
        self.viewport_rows
    }

    /// State of a mounted item.
    pub fn item(&self, index: usize) -> Option<&ItemState> {
        self.items.get(&index)
    }

    /// Mounted items in subject order.
    pub fn mounted(&self) -> impl Iterator<Item = (usize, &ItemState)> {
        self.items.iter().map(|(index, item)| (*index, item))
    }

    pub fn mounted_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_animating(&self) -> bool {
        self.items.values().any(|item| item.extent().is_animating())
    }

    /// Items at least partly inside the viewport, starting at `first_visible`.
    pub fn visible_range(&self) -> Range<usize> {
        let len = self.len();
        let viewport = u32::from(self.viewport_rows);
        let mut used = 0u32;
        let mut end = self.first_visible;
        while end < len {
            if end > self.first_visible && used >= viewport {
                break;
            }
            used += u32::from(self.item_height(end));
            end += 1;
        }
        self.first_visible.min(len)..end
    }

    /// Items whose state currently exists.
    pub fn mounted_range(&self) -> Range<usize> {
        let len = self.len();
        match self.settings.strategy {
            ListStrategy::Eager => 0..len,
            ListStrategy::Lazy { prefetch } => {
                let visible = self.visible_range();
                let start = visible.start.saturating_sub(prefetch);
                let end = visible.end.saturating_add(prefetch).min(len);
                start..end
            }
        }
    }

    /// Items from `first_visible` that fit entirely in the viewport (at least 1).
    pub fn page_size(&self) -> usize {
        let viewport = u32::from(self.viewport_rows);
        let mut used = 0u32;
        let mut count = 0usize;
        for index in self.first_visible..self.len() {
            used += u32::from(self.item_height(index));
            if used > viewport {
                break;
            }
            count += 1;
        }
        count.max(1)
    }

    /// Height of an item; unmounted items count as collapsed.
    pub fn item_height(&self, index: usize) -> u16 {
        self.items
            .get(&index)
            .map(|item| item.height(&self.settings))
            .unwrap_or(ITEM_BASE_ROWS)
    }

    pub(super) fn select(&mut self, index: usize) {
        self.selected = index.min(self.len().saturating_sub(1));
    }

    pub(super) fn set_viewport_rows(&mut self, rows: u16) {
        self.viewport_rows = rows;
    }

    pub(super) fn toggle(&mut self, index: usize) -> Option<bool> {
        let extent = self.settings.expanded_extent;
        let item = self.items.get_mut(&index)?;
        item.toggle(extent);
        Some(item.is_expanded())
    }

    pub(super) fn tick(&mut self, dt: Duration) {
        for item in self.items.values_mut() {
            item.tick(dt);
        }
    }

    /// Scroll the selection into view, then mount/evict to match the window.
    pub(super) fn settle(&mut self) {
        self.scroll_to_selection();
        self.mount_window();
    }

    fn rows_between(&self, range: Range<usize>) -> u32 {
        range.map(|index| u32::from(self.item_height(index))).sum()
    }

    fn scroll_to_selection(&mut self) {
        let len = self.len();
        if len == 0 {
            self.selected = 0;
            self.first_visible = 0;
            return;
        }

        self.selected = self.selected.min(len - 1);
        self.first_visible = self.first_visible.min(len - 1);

        let viewport = u32::from(self.viewport_rows);
        if self.selected < self.first_visible {
            self.first_visible = self.selected;
        } else {
            let mut rows = self.rows_between(self.first_visible..self.selected + 1);
            while self.first_visible < self.selected && rows > viewport {
                rows -= u32::from(self.item_height(self.first_visible));
                self.first_visible += 1;
            }
        }

        // Pull the window back when the tail leaves empty rows below it.
        let mut tail = 0u32;
        for index in self.first_visible..len {
            tail += u32::from(self.item_height(index));
            if tail >= viewport {
                break;
            }
        }
        while self.first_visible > 0 {
            let above = u32::from(self.item_height(self.first_visible - 1));
            if tail + above > viewport {
                break;
            }
            self.first_visible -= 1;
            tail += above;
        }
    }

    fn mount_window(&mut self) {
        let range = self.mounted_range();
        let before = self.items.len();
        self.items.retain(|index, _| range.contains(index));
        let evicted = before - self.items.len();

        let reveal = self.settings.reveal;
        for index in range.clone() {
            self.items
                .entry(index)
                .or_insert_with(|| ItemState::new(reveal));
        }

        if evicted > 0 {
            tracing::debug!(
                evicted,
                start = range.start,
                end = range.end,
                "Greeting window moved"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lazy(count: usize, rows: u16) -> GreetingListState {
        let mut state = GreetingListState::new(
            GreetingSubject::generated(count),
            ListSettings {
                strategy: ListStrategy::Lazy { prefetch: 1 },
                reveal: DetailReveal::Step,
                ..ListSettings::default()
            },
        );
        state.set_viewport_rows(rows);
        state.settle();
        state
    }

    #[test]
    fn default_is_empty_and_shares_its_backing() {
        let state = GreetingListState::default();
        assert!(state.is_empty());
        assert_eq!(state.mounted_count(), 0);
        assert!(Arc::ptr_eq(&state.subjects, &GreetingListState::default().subjects));
    }

    #[test]
    fn default_subjects_start_collapsed() {
        let state = GreetingListState::new(GreetingSubject::defaults(), ListSettings::default());
        assert_eq!(state.len(), 2);
        assert_eq!(state.subjects()[0].as_str(), "World");
        assert_eq!(state.subjects()[1].as_str(), "Compose");
        assert!(state.mounted().all(|(_, item)| !item.is_expanded()));
    }

    #[test]
    fn generated_subjects_are_indices() {
        let subjects = GreetingSubject::generated(3);
        let names: Vec<_> = subjects.iter().map(GreetingSubject::as_str).collect();
        assert_eq!(names, vec!["0", "1", "2"]);
    }

    #[test]
    fn lazy_window_mounts_visible_plus_prefetch() {
        // 20 rows fit 5 collapsed items, plus one prefetched below.
        let state = lazy(1000, 20);
        assert_eq!(state.visible_range(), 0..5);
        assert_eq!(state.mounted_range(), 0..6);
        assert_eq!(state.mounted_count(), 6);
    }

    #[test]
    fn partial_item_counts_as_visible() {
        let state = lazy(1000, 18);
        assert_eq!(state.visible_range(), 0..5);
        assert_eq!(state.page_size(), 4);
    }

    #[test]
    fn zero_viewport_still_shows_one_item() {
        let state = lazy(10, 0);
        assert_eq!(state.visible_range(), 0..1);
        assert_eq!(state.page_size(), 1);
    }

    #[test]
    fn conditional_height_follows_flag() {
        let settings = ListSettings::default();
        let mut item = ItemState::new(settings.reveal);
        assert_eq!(item.height(&settings), ITEM_BASE_ROWS);
        item.toggle(settings.expanded_extent);
        assert_eq!(item.height(&settings), ITEM_BASE_ROWS + settings.detail_rows);
    }

    #[test]
    fn tail_pulls_window_back() {
        let mut state = lazy(10, 20);
        state.select(9);
        state.settle();
        assert_eq!(state.first_visible(), 5);

        state.set_viewport_rows(40);
        state.settle();
        assert_eq!(state.first_visible(), 0);
    }
}
