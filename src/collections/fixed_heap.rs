/// Anything a [FixedHeap] can order.
pub trait Weighted {
    fn weight(&self) -> f64;
}

/// A binary min-heap, ordered by weights, whose capacity is fixed on construction.
///
/// Nodes are numbered from 1, so that the parent of node $i$ is $\lfloor i/2 \rfloor$
/// and its children are $2i$ and $2i+1$.
/// Node $i$ lives in slot $i-1$ of the backing vector.
///
/// Callers are expected to size the heap for the maximum number of elements
/// it will ever hold.
/// Pushing into a full heap, or popping from an empty one, panics.
pub struct FixedHeap<T> {
    arr: Vec<T>,
    cap: usize,
}

impl<T> FixedHeap<T>
where
    T: Weighted,
{
    pub fn new(capacity: usize) -> Self {
        Self {
            arr: Vec::with_capacity(capacity),
            cap: capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.arr.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arr.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// The element with the least weight, if any.
    pub fn peek(&self) -> Option<&T> {
        self.arr.first()
    }

    /// Inserts an element.
    ///
    /// # Panics
    ///
    /// If the heap is already full.
    pub fn push(&mut self, item: T) {
        assert!(
            self.arr.len() < self.cap,
            "heap overflow: all {} slots are occupied",
            self.cap
        );
        self.arr.push(item);
        self.swim(self.arr.len());
    }

    /// Removes and returns the element with the least weight.
    ///
    /// # Panics
    ///
    /// If the heap is empty.
    pub fn pop(&mut self) -> T {
        assert!(!self.arr.is_empty(), "no value to pop from an empty heap");
        // the last node takes over the root
        let front = self.arr.swap_remove(0);
        self.sink(1);
        front
    }

    fn less(&self, i: usize, j: usize) -> bool {
        self.arr[i - 1].weight() < self.arr[j - 1].weight()
    }

    fn swap(&mut self, i: usize, j: usize) {
        self.arr.swap(i - 1, j - 1);
    }

    fn swim(&mut self, mut i: usize) {
        while i > 1 && self.less(i, i / 2) {
            self.swap(i, i / 2);
            i /= 2;
        }
    }

    fn sink(&mut self, mut i: usize) {
        let n = self.arr.len();
        loop {
            let left = i * 2;
            if left > n {
                break;
            }
            let right = left + 1;
            let min = if right <= n && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(min, i) {
                break;
            }
            self.swap(min, i);
            i = min;
        }
    }
}

impl<T> std::fmt::Debug for FixedHeap<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FixedHeap({}/{}) ", self.arr.len(), self.cap)?;
        f.debug_list().entries(self.arr.iter()).finish()
    }
}
