use thiserror::Error;

/// Anything the queue can order: the weight is the primary key.
pub trait Weighted {
    fn weight(&self) -> u64;
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HeapErr {
    #[error("extract_min called on an empty priority queue")]
    HeapUnderflow,
    #[error("insert called on a drained priority queue")]
    InsertAfterDrain,
}

/// Lifecycle of the queue while a tree is being built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueState {
    /// Initial load, only inserts have happened.
    Loading,
    /// At least one element has been extracted.
    Building,
    /// The queue was closed by [`MinHeap::finish`].
    Drained,
}

#[derive(Debug, Clone)]
struct HeapEntry<T> {
    weight: u64,
    seq: u64,
    item: T,
}

impl<T> HeapEntry<T> {
    /// Ordering key: weight first, then insertion sequence so that the
    /// earlier-inserted node wins a tie.
    #[inline(always)]
    fn key(&self) -> (u64, u64) {
        (self.weight, self.seq)
    }
}

/// Array-backed min-on-top binary heap.
///
/// The children of index `i` live at `2i + 1` and `2i + 2`, its parent at
/// `(i - 1) / 2`. Sequence numbers are unique, so two entries never compare
/// equal and the extraction order is fully deterministic.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    elements: Vec<HeapEntry<T>>,
    next_seq: u64,
    state: QueueState,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MinHeap<T> {
    pub fn new() -> Self {
        MinHeap { elements: Vec::new(), next_seq: 0, state: QueueState::Loading }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline(always)]
    pub fn state(&self) -> QueueState {
        self.state
    }

    pub fn peek(&self) -> Option<&T> {
        self.elements.first().map(|e| &e.item)
    }

    #[inline(always)]
    fn parent(i: usize) -> usize {
        (i - 1) / 2
    }

    #[inline(always)]
    fn left(i: usize) -> usize {
        2 * i + 1
    }

    #[inline(always)]
    fn right(i: usize) -> usize {
        2 * i + 2
    }

    /// Weights in array order, mostly useful to inspect the heap layout.
    pub fn weights(&self) -> Vec<u64> {
        self.elements.iter().map(|e| e.weight).collect()
    }

    /// Checks that every parent orders before its children. This implies
    /// `heap[parent].weight <= heap[child].weight`.
    pub fn is_valid(&self) -> bool {
        (1..self.len()).all(|i| self.elements[Self::parent(i)].key() < self.elements[i].key())
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let p = Self::parent(i);
            if self.elements[p].key() <= self.elements[i].key() {
                break;
            }
            self.elements.swap(p, i);
            i = p;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.len();
        loop {
            let l = Self::left(i);
            if l >= n {
                break;
            }
            let r = Self::right(i);
            let child = if r < n && self.elements[r].key() <= self.elements[l].key() { r } else { l };

            if self.elements[child].key() >= self.elements[i].key() {
                break;
            }
            self.elements.swap(i, child);
            i = child;
        }
    }
}

impl<T: Weighted> MinHeap<T> {
    /// Bulk load in O(n): sequence numbers follow the iteration order, then the
    /// array is heapified bottom-up.
    pub fn build<I: IntoIterator<Item = T>>(source: I) -> Self {
        let mut heap = MinHeap::new();
        for item in source {
            let entry = HeapEntry { weight: item.weight(), seq: heap.next_seq, item };
            heap.next_seq += 1;
            heap.elements.push(entry);
        }

        let n = heap.len();
        for i in (0..n / 2).rev() {
            heap.sift_down(i);
        }

        debug_assert!(heap.is_valid());
        heap
    }

    pub fn insert(&mut self, item: T) -> Result<(), HeapErr> {
        if self.state == QueueState::Drained {
            return Err(HeapErr::InsertAfterDrain);
        }

        let entry = HeapEntry { weight: item.weight(), seq: self.next_seq, item };
        self.next_seq += 1;
        self.elements.push(entry);
        self.sift_up(self.len() - 1);

        debug_assert!(self.is_valid());
        Ok(())
    }

    pub fn extract_min(&mut self) -> Result<T, HeapErr> {
        if self.is_empty() {
            return Err(HeapErr::HeapUnderflow);
        }

        let n = self.len() - 1;
        self.elements.swap(0, n);
        let result = self.elements.pop().ok_or(HeapErr::HeapUnderflow)?;
        self.sift_down(0);
        self.state = QueueState::Building;

        debug_assert!(self.is_valid());
        Ok(result.item)
    }

    /// Final extraction: takes the minimum and closes the queue to inserts.
    pub fn finish(&mut self) -> Result<T, HeapErr> {
        let item = self.extract_min()?;
        self.state = QueueState::Drained;
        Ok(item)
    }
}
