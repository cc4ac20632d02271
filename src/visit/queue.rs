use std::collections::VecDeque;

/// First-in-first-out queue capability used by breadth-first traversal.
///
/// Breadth-first search is generic over this trait so that an alternative
/// implementation (for instance an instrumented queue) can be injected in
/// place of [`VecDeque`]. Implementations must hand items back in exactly
/// the order they were enqueued.
pub trait FifoQueue<T>: Default {
    fn enqueue(&mut self, item: T);

    fn dequeue(&mut self) -> Option<T>;

    fn is_empty(&self) -> bool;

    /// Removes all items. Traversals call this before reusing a queue, so a
    /// dirty injected queue cannot leak items into a new run.
    fn clear(&mut self);
}

impl<T> FifoQueue<T> for VecDeque<T> {
    fn enqueue(&mut self, item: T) {
        self.push_back(item);
    }

    fn dequeue(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }
}
