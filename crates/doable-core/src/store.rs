// ── State container ──
//
// One list, one observer. The list is only ever replaced wholesale
// through `set_todos`, which notifies the subscriber after the swap, so
// the callback always observes the new list and never an intermediate
// state. "At most one subscriber" is a contract, not an accident:
// `subscribe` replaces any earlier registration.

use std::fmt;

use doable_api::Todo;

type ChangeCallback = Box<dyn FnMut(&[Todo]) + Send>;

/// Owns the current todo list plus at most one change callback.
///
/// Created once at startup and lives for the process lifetime. There is
/// no way to mutate the list in place through this type; callers build a
/// new `Vec` and hand it to [`set_todos`](Self::set_todos).
#[derive(Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
    on_change: Option<ChangeCallback>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current list.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Replace the list wholesale, then synchronously invoke the
    /// subscribed callback (if any) with the already-updated list.
    ///
    /// No validation is performed here; integrity is the caller's job.
    pub fn set_todos(&mut self, new: Vec<Todo>) {
        self.todos = new;
        if let Some(cb) = self.on_change.as_mut() {
            cb(&self.todos);
        }
    }

    /// Register the change callback, replacing any previous registration.
    pub fn subscribe(&mut self, callback: impl FnMut(&[Todo]) + Send + 'static) {
        self.on_change = Some(Box::new(callback));
    }
}

impl fmt::Debug for TodoStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TodoStore")
            .field("todos", &self.todos)
            .field("subscribed", &self.on_change.is_some())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::{Arc, Mutex};

    use doable_api::TodoId;

    use super::*;

    fn todo(id: i64, title: &str) -> Todo {
        Todo {
            id: TodoId::new(id),
            title: title.to_owned(),
        }
    }

    #[test]
    fn set_without_subscriber_is_fine() {
        let mut store = TodoStore::new();
        store.set_todos(vec![todo(1, "a")]);
        assert_eq!(store.todos().len(), 1);
    }

    #[test]
    fn callback_observes_the_already_updated_list() {
        let seen: Arc<Mutex<Vec<Vec<Todo>>>> = Arc::default();
        let seen_by_cb = Arc::clone(&seen);

        let mut store = TodoStore::new();
        store.subscribe(move |todos| {
            seen_by_cb.lock().unwrap().push(todos.to_vec());
        });

        store.set_todos(vec![todo(1, "a"), todo(2, "b")]);

        let observed = seen.lock().unwrap();
        assert_eq!(observed.len(), 1);
        assert_eq!(observed[0].len(), 2);
        assert_eq!(observed[0][0].title, "a");
    }

    #[test]
    fn every_assignment_notifies() {
        let count = Arc::new(Mutex::new(0usize));
        let count_by_cb = Arc::clone(&count);

        let mut store = TodoStore::new();
        store.subscribe(move |_| *count_by_cb.lock().unwrap() += 1);

        store.set_todos(vec![todo(1, "a")]);
        store.set_todos(Vec::new());
        store.set_todos(vec![todo(2, "b")]);

        assert_eq!(*count.lock().unwrap(), 3);
    }

    #[test]
    fn subscribe_replaces_the_previous_callback() {
        let first = Arc::new(Mutex::new(0usize));
        let second = Arc::new(Mutex::new(0usize));

        let mut store = TodoStore::new();
        let first_cb = Arc::clone(&first);
        store.subscribe(move |_| *first_cb.lock().unwrap() += 1);
        let second_cb = Arc::clone(&second);
        store.subscribe(move |_| *second_cb.lock().unwrap() += 1);

        store.set_todos(vec![todo(1, "a")]);

        assert_eq!(*first.lock().unwrap(), 0, "replaced callback must not fire");
        assert_eq!(*second.lock().unwrap(), 1);
    }
}
