use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry<V, P> {
    priority: P,
    vertex: V,
}

// Reversed so the std max-heap yields the smallest priority, then the smallest vertex
impl<V: Ord, P: Ord> Ord for Entry<V, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl<V: Ord, P: Ord> PartialOrd for Entry<V, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of `(vertex, priority)` pairs without decrease-key
///
/// A vertex whose priority improves is simply pushed again. The outdated
/// copies are dropped by [`MinQueue::pop_current`].
#[derive(Debug)]
pub struct MinQueue<V, P> {
    heap: BinaryHeap<Entry<V, P>>,
}

impl<V, P> MinQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of queued entries, outdated ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Entry { priority, vertex });
    }

    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|entry| (entry.vertex, entry.priority))
    }

    /// Pops until an entry passes `is_current`. Also returns how many
    /// entries were discarded along the way.
    pub fn pop_current<F>(&mut self, mut is_current: F) -> (Option<(V, P)>, usize)
    where
        F: FnMut(V, P) -> bool,
    {
        let mut discarded = 0;
        while let Some((vertex, priority)) = self.pop() {
            if is_current(vertex, priority) {
                return (Some((vertex, priority)), discarded);
            }
            discarded += 1;
        }
        (None, discarded)
    }
}

impl<V, P> Default for MinQueue<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
