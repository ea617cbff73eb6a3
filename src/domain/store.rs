use super::task::{Task, TaskHandle};

/// Change notification emitted by the store after every mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A task was appended at the end of the list
    Added(TaskHandle),
    /// Tasks were removed; survivors keep their relative order
    Removed(Vec<TaskHandle>),
    /// A task's text or done flag changed in place
    Updated(TaskHandle),
    /// The whole list was swapped out (load)
    Replaced(Vec<TaskHandle>),
}

#[derive(Debug, Clone)]
struct Entry {
    handle: TaskHandle,
    task: Task,
}

/// Ordered in-memory collection of tasks.
///
/// The store knows nothing about rendering. Observers drain queued
/// [`StoreEvent`]s with [`TaskStore::take_events`] and update their own
/// view of the list.
#[derive(Debug, Default)]
pub struct TaskStore {
    entries: Vec<Entry>,
    events: Vec<StoreEvent>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task; an empty `created_at` is stamped with today's date
    pub fn add(&mut self, text: impl Into<String>, created_at: impl Into<String>, done: bool) -> TaskHandle {
        self.push(Task::new(text, created_at, done))
    }

    /// Append an already-built task
    pub fn push(&mut self, task: Task) -> TaskHandle {
        let handle = TaskHandle::new();
        self.entries.push(Entry { handle, task });
        self.events.push(StoreEvent::Added(handle));
        handle
    }

    /// Remove every task matching `predicate`, keeping the order of the rest.
    /// Returns the handles that were removed.
    pub fn remove_if<P>(&mut self, mut predicate: P) -> Vec<TaskHandle>
    where
        P: FnMut(&Task) -> bool,
    {
        let mut removed = Vec::new();
        self.entries.retain(|entry| {
            if predicate(&entry.task) {
                removed.push(entry.handle);
                false
            } else {
                true
            }
        });

        if !removed.is_empty() {
            self.events.push(StoreEvent::Removed(removed.clone()));
        }
        removed
    }

    /// Apply `action` to every task matching `predicate`.
    /// Returns the handles that were visited.
    pub fn for_each_matching<P, A>(&mut self, mut predicate: P, mut action: A) -> Vec<TaskHandle>
    where
        P: FnMut(&Task) -> bool,
        A: FnMut(&mut Task),
    {
        let mut touched = Vec::new();
        for entry in self.entries.iter_mut() {
            if predicate(&entry.task) {
                action(&mut entry.task);
                touched.push(entry.handle);
            }
        }

        self.events
            .extend(touched.iter().copied().map(StoreEvent::Updated));
        touched
    }

    /// Discard current contents and install `tasks` in order
    pub fn replace_all(&mut self, tasks: Vec<Task>) -> Vec<TaskHandle> {
        self.entries = tasks
            .into_iter()
            .map(|task| Entry {
                handle: TaskHandle::new(),
                task,
            })
            .collect();

        let handles = self.handles();
        self.events.push(StoreEvent::Replaced(handles.clone()));
        handles
    }

    /// Replace a task's text. Unknown handles are ignored.
    pub fn set_text(&mut self, handle: TaskHandle, text: impl Into<String>) {
        if let Some(entry) = self.entry_mut(handle) {
            entry.task.text = text.into();
            self.events.push(StoreEvent::Updated(handle));
        }
    }

    /// Set a task's done flag. Unknown handles are ignored.
    pub fn set_done(&mut self, handle: TaskHandle, done: bool) {
        if let Some(entry) = self.entry_mut(handle) {
            entry.task.done = done;
            self.events.push(StoreEvent::Updated(handle));
        }
    }

    /// Flip a task's checkbox, returning the new state
    pub fn toggle_done(&mut self, handle: TaskHandle) -> Option<bool> {
        let done = !self.get(handle)?.done;
        self.set_done(handle, done);
        Some(done)
    }

    pub fn get(&self, handle: TaskHandle) -> Option<&Task> {
        self.entries
            .iter()
            .find(|entry| entry.handle == handle)
            .map(|entry| &entry.task)
    }

    /// Current position of a task in display order
    pub fn position(&self, handle: TaskHandle) -> Option<usize> {
        self.entries.iter().position(|entry| entry.handle == handle)
    }

    pub fn handles(&self) -> Vec<TaskHandle> {
        self.entries.iter().map(|entry| entry.handle).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TaskHandle, &Task)> {
        self.entries.iter().map(|entry| (entry.handle, &entry.task))
    }

    /// Copy of every task in display order
    pub fn snapshot(&self) -> Vec<Task> {
        self.entries.iter().map(|entry| entry.task.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drain queued change notifications
    pub fn take_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }

    fn entry_mut(&mut self, handle: TaskHandle) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.handle == handle)
    }
}
