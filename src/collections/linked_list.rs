/// An ordered, duplicate-tolerant, singly-linked sequence of neighbors.
///
/// Nodes live in a slab so that links are plain indices.
/// Slots freed by [AdjacencyList::remove] are recycled by later appends.
///
/// |          | Complexity |
/// | -------- | ---------- |
/// | `append` | $O(1)$     |
/// | `remove` | $O(n)$     |
/// | `len`    | $O(1)$     |
/// | `iter`   | $O(1)$ on each call to `.next` |
#[derive(Clone)]
pub struct AdjacencyList<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

#[derive(Clone)]
struct Node<T> {
    val: T,
    next: Option<usize>,
}

impl<T> Default for AdjacencyList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AdjacencyList<T> {
    pub fn new() -> Self {
        Self {
            slots: vec![],
            free: vec![],
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn head(&self) -> Option<&T> {
        self.head.map(|i| &self.node(i).val)
    }

    pub fn tail(&self) -> Option<&T> {
        self.tail.map(|i| &self.node(i).val)
    }

    /// Adds `val` behind the current tail.
    pub fn append(&mut self, val: T) {
        let node = Node { val, next: None };
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        };
        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
    }

    /// Iterates from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    fn node(&self, idx: usize) -> &Node<T> {
        self.slots[idx]
            .as_ref()
            .expect("links only point at occupied slots")
    }

    fn node_mut(&mut self, idx: usize) -> &mut Node<T> {
        self.slots[idx]
            .as_mut()
            .expect("links only point at occupied slots")
    }
}

impl<T> AdjacencyList<T>
where
    T: PartialEq,
{
    /// Removes the first element equal to `val`.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, val: &T) -> bool {
        let mut prev: Option<usize> = None;
        let mut cursor = self.head;
        while let Some(cur) = cursor {
            let next = self.node(cur).next;
            if self.node(cur).val == *val {
                match prev {
                    Some(prev) => self.node_mut(prev).next = next,
                    None => self.head = next,
                }
                if self.tail == Some(cur) {
                    self.tail = prev;
                }
                self.slots[cur] = None;
                self.free.push(cur);
                self.len -= 1;
                return true;
            }
            prev = Some(cur);
            cursor = next;
        }
        false
    }

    pub fn contains(&self, val: &T) -> bool {
        self.iter().any(|x| x == val)
    }
}

impl<T> std::fmt::Debug for AdjacencyList<T>
where
    T: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a AdjacencyList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over an [AdjacencyList], in insertion order.
pub struct Iter<'a, T> {
    list: &'a AdjacencyList<T>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let cur = self.cursor?;
        let node = self.list.node(cur);
        self.cursor = node.next;
        Some(&node.val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn mock(names: &[&'static str]) -> AdjacencyList<&'static str> {
        let mut ll = AdjacencyList::new();
        for n in names {
            ll.append(*n);
        }
        ll
    }

    #[test]
    fn append_keeps_order() {
        let names = ["A", "B", "C", "D", "E", "F"];
        let mut ll = mock(&names);
        assert_eq!(ll.iter().copied().collect::<Vec<_>>(), names.to_vec());
        assert_eq!(ll.tail(), Some(&"F"));

        while let Some(tail) = ll.tail().copied() {
            assert!(ll.remove(&tail));
        }
        assert!(ll.is_empty());
        assert_eq!(ll.head(), None);

        ll.append("head");
        assert_eq!(ll.head(), Some(&"head"));
        assert_eq!(ll.tail(), Some(&"head"));
        assert_eq!(ll.len(), 1);
    }

    #[test]
    fn remove_sole_element() {
        let mut ll = mock(&["TEST"]);
        assert!(ll.remove(&"TEST"));
        assert_eq!(ll.head(), None);
        assert_eq!(ll.tail(), None);
        ll.append("A");
        assert_eq!(ll.head(), Some(&"A"));
        assert_eq!(ll.tail(), Some(&"A"));
    }

    #[test]
    fn remove_head_tail_and_middle() {
        let mut ll = mock(&["A", "B", "C", "D", "E", "F"]);
        assert!(ll.remove(&"F"));
        assert_eq!(ll.tail(), Some(&"E"));
        assert!(ll.remove(&"A"));
        assert_eq!(ll.head(), Some(&"B"));
        assert!(ll.remove(&"D"));
        assert!(!ll.remove(&"D"));
        assert_eq!(ll.iter().copied().collect::<Vec<_>>(), vec!["B", "C", "E"]);
        ll.append("G");
        assert_eq!(ll.iter().copied().collect::<Vec<_>>(), vec!["B", "C", "E", "G"]);
    }

    #[test]
    fn remove_only_the_first_duplicate() {
        let mut ll = mock(&["A", "B", "A", "C", "A"]);
        assert!(ll.remove(&"A"));
        assert_eq!(
            ll.iter().copied().collect::<Vec<_>>(),
            vec!["B", "A", "C", "A"]
        );
        assert!(ll.contains(&"A"));
    }

    #[test]
    fn iteration_is_restartable() {
        let mut ll = AdjacencyList::new();
        for i in 0..100 {
            ll.append(i);
        }
        for _ in 0..2 {
            let trial: Vec<_> = ll.iter().copied().collect();
            assert_eq!(trial, (0..100).collect::<Vec<_>>());
        }
    }

    #[quickcheck]
    fn behaves_like_vec(appended: Vec<u8>, removed: Vec<u8>) {
        let mut trial = AdjacencyList::new();
        let mut oracle = vec![];
        for x in appended.iter() {
            trial.append(*x);
            oracle.push(*x);
        }
        for x in removed.iter() {
            let pos = oracle.iter().position(|y| y == x);
            if let Some(pos) = pos {
                oracle.remove(pos);
            }
            assert_eq!(trial.remove(x), pos.is_some());
            trial.append(x.wrapping_add(1));
            oracle.push(x.wrapping_add(1));
        }
        assert_eq!(trial.iter().copied().collect::<Vec<_>>(), oracle);
        assert_eq!(trial.len(), oracle.len());
        assert_eq!(trial.tail(), oracle.last());
    }
}
