//! Generic editing of an ordered collection of id-carrying records.
//!
//! The task list, the schedule and the quick-links bar all share this:
//! a draft lifecycle (Idle ⇄ Adding) plus update/remove by id. All
//! mutating operations hand back a fresh `Vec` so the owning board can
//! be rebuilt as a value and persisted whole.

use crate::model::{EntryKind, QuickLink, ScheduleItem, Task};

/// A record that lives in one of the card's collections.
pub trait Record: Clone {
    /// The id-less, in-progress shape held while an add form is open.
    type Draft: Clone + Default;

    fn id(&self) -> u64;

    /// Promote a draft to a real record with the given id.
    fn from_draft(id: u64, draft: Self::Draft) -> Self;

    /// Presence check run by `confirm_add`. A failing draft is
    /// silently refused; the form stays open.
    fn draft_is_valid(draft: &Self::Draft) -> bool;
}

/// True when the string has content beyond whitespace.
pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Next id for a collection: one above the current maximum. Monotonic
/// per collection, unique by construction.
pub fn next_id<R: Record>(items: &[R]) -> u64 {
    items.iter().map(Record::id).max().unwrap_or(0) + 1
}

/// Return a copy of `items` with `patch` applied to the record whose
/// id matches. Order and every other record are untouched; no match
/// is a no-op copy.
pub fn update_item<R, F>(items: &[R], id: u64, patch: F) -> Vec<R>
where
    R: Record,
    F: FnOnce(&mut R),
{
    let mut next = items.to_vec();
    if let Some(item) = next.iter_mut().find(|item| item.id() == id) {
        patch(item);
    }
    next
}

/// Return a copy of `items` without the record whose id matches.
pub fn remove_item<R: Record>(items: &[R], id: u64) -> Vec<R> {
    items.iter().filter(|item| item.id() != id).cloned().collect()
}

/// Draft lifecycle for one collection: Idle ⇄ Adding.
#[derive(Clone, Default)]
pub struct ItemManager<R: Record> {
    draft: Option<R::Draft>,
}

impl<R: Record> ItemManager<R> {
    pub fn new() -> Self {
        ItemManager { draft: None }
    }

    pub fn is_adding(&self) -> bool {
        self.draft.is_some()
    }

    /// Idle → Adding with the kind's empty draft.
    pub fn start_adding(&mut self) {
        self.draft = Some(R::Draft::default());
    }

    /// Adding → Idle, draft discarded unvalidated.
    pub fn cancel_adding(&mut self) {
        self.draft = None;
    }

    pub fn draft(&self) -> Option<&R::Draft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut R::Draft> {
        self.draft.as_mut()
    }

    /// Replace the whole draft value (Adding state only).
    pub fn set_draft(&mut self, draft: R::Draft) {
        if self.draft.is_some() {
            self.draft = Some(draft);
        }
    }

    /// Validate the draft and, on success, append it with a fresh id
    /// and return the new collection, resetting to Idle. An invalid
    /// draft (or Idle state) returns `None` and changes nothing.
    pub fn confirm_add(&mut self, items: &[R]) -> Option<Vec<R>> {
        let draft = self.draft.as_ref()?;
        if !R::draft_is_valid(draft) {
            return None;
        }
        let draft = self.draft.take().unwrap_or_default();
        let mut next = items.to_vec();
        next.push(R::from_draft(next_id(items), draft));
        Some(next)
    }
}

// ---------------------------------------------------------------------------
// Record impls for the three collection kinds
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub text: String,
}

impl Record for Task {
    type Draft = TaskDraft;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(id: u64, draft: TaskDraft) -> Self {
        Task {
            id,
            text: draft.text,
            completed: false,
        }
    }

    fn draft_is_valid(draft: &TaskDraft) -> bool {
        is_non_empty(&draft.text)
    }
}

#[derive(Debug, Clone)]
pub struct EntryDraft {
    pub time: String,
    pub title: String,
    pub kind: EntryKind,
}

impl Default for EntryDraft {
    fn default() -> Self {
        EntryDraft {
            time: String::new(),
            title: String::new(),
            kind: EntryKind::Focus,
        }
    }
}

impl Record for ScheduleItem {
    type Draft = EntryDraft;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(id: u64, draft: EntryDraft) -> Self {
        ScheduleItem {
            id,
            time: draft.time,
            title: draft.title,
            kind: draft.kind,
        }
    }

    fn draft_is_valid(draft: &EntryDraft) -> bool {
        is_non_empty(&draft.time) && is_non_empty(&draft.title)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LinkDraft {
    pub title: String,
    pub url: String,
}

impl Record for QuickLink {
    type Draft = LinkDraft;

    fn id(&self) -> u64 {
        self.id
    }

    fn from_draft(id: u64, draft: LinkDraft) -> Self {
        QuickLink {
            id,
            title: draft.title,
            url: draft.url,
        }
    }

    fn draft_is_valid(draft: &LinkDraft) -> bool {
        is_non_empty(&draft.title) && is_non_empty(&draft.url)
    }
}
