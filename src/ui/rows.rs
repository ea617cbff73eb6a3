use crate::domain::{StoreEvent, TaskHandle, Treatment};

/// Presentation state for one task row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub handle: TaskHandle,
    pub treatment: Treatment,
    pub editable: bool,
}

impl RowView {
    pub fn new(handle: TaskHandle) -> Self {
        Self {
            handle,
            treatment: Treatment::Default,
            editable: true,
        }
    }
}

/// Rows on screen, kept index-aligned with the task store by replaying its
/// change notifications
#[derive(Debug, Default)]
pub struct RowList {
    rows: Vec<RowView>,
}

impl RowList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one store notification
    pub fn apply(&mut self, event: &StoreEvent) {
        match event {
            StoreEvent::Added(handle) => self.rows.push(RowView::new(*handle)),
            StoreEvent::Removed(handles) => self.rows.retain(|row| !handles.contains(&row.handle)),
            StoreEvent::Replaced(handles) => {
                self.rows = handles.iter().copied().map(RowView::new).collect();
            }
            // Text and checkbox are read from the store at render time
            StoreEvent::Updated(_) => {}
        }
    }

    pub fn apply_all(&mut self, events: &[StoreEvent]) {
        for event in events {
            self.apply(event);
        }
    }

    pub fn get(&self, index: usize) -> Option<&RowView> {
        self.rows.get(index)
    }

    pub fn find_mut(&mut self, handle: TaskHandle) -> Option<&mut RowView> {
        self.rows.iter_mut().find(|row| row.handle == handle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RowView> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
