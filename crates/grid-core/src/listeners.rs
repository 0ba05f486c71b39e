#![warn(missing_docs)]

/// Handle returned by [`Grid::subscribe`](crate::Grid::subscribe), used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

type Listener<T> = Box<dyn FnMut(i32, i32, &T)>;

/// Ordered list of change listeners.
///
/// Listeners run synchronously, on the caller's thread, in the order they
/// were subscribed.
pub(crate) struct Listeners<T> {
    next_id: u64,
    entries: Vec<(ListenerId, Listener<T>)>,
}

impl<T> Listeners<T> {
    pub(crate) fn new() -> Self {
        Listeners {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn subscribe(&mut self, listener: impl FnMut(i32, i32, &T) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        match self.entries.iter().position(|(entry_id, _)| *entry_id == id) {
            Some(pos) => {
                // remove, not swap_remove: order is observable
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn notify(&mut self, x: i32, y: i32, value: &T) {
        for (_, listener) in self.entries.iter_mut() {
            listener(x, y, value);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
