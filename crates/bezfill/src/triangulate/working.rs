//! Shrinking vertex ring used by the ear scan.
//!
//! Indices point into an immutable backing array. Live vertices form a
//! circular doubly linked list; `head` is the first live vertex in backing
//! order, so walking from `head` visits vertices in the same order as the
//! equivalent shrinking array would, and "restart the scan at 0" means
//! "restart at `head`". Removal is O(1).

#[derive(Clone, Debug)]
pub(crate) struct WorkingList {
    next: Vec<usize>,
    prev: Vec<usize>,
    head: usize,
    len: usize,
}

impl WorkingList {
    /// Ring over `0..n`. `n` must be non-zero.
    pub(crate) fn new(n: usize) -> Self {
        debug_assert!(n > 0);
        Self {
            next: (0..n).map(|i| (i + 1) % n).collect(),
            prev: (0..n).map(|i| (i + n - 1) % n).collect(),
            head: 0,
            len: n,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn head(&self) -> usize {
        self.head
    }

    #[inline]
    pub(crate) fn next(&self, i: usize) -> usize {
        self.next[i]
    }

    #[inline]
    pub(crate) fn prev(&self, i: usize) -> usize {
        self.prev[i]
    }

    /// Unlink live vertex `i`.
    pub(crate) fn remove(&mut self, i: usize) {
        debug_assert!(self.len > 1, "cannot empty the ring");
        let (p, n) = (self.prev[i], self.next[i]);
        self.next[p] = n;
        self.prev[n] = p;
        if self.head == i {
            self.head = n;
        }
        self.len -= 1;
    }

    /// Live vertices, starting at `head`.
    pub(crate) fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cur: self.head,
            left: self.len,
        }
    }
}

pub(crate) struct Iter<'a> {
    list: &'a WorkingList,
    cur: usize,
    left: usize,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.left == 0 {
            return None;
        }
        let out = self.cur;
        self.cur = self.list.next(out);
        self.left -= 1;
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ring_wraps() {
        let w = WorkingList::new(4);
        assert_eq!(w.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(w.prev(0), 3);
        assert_eq!(w.next(3), 0);
    }

    #[test]
    fn removal_matches_array_order() {
        let mut w = WorkingList::new(6);
        let mut arr: Vec<usize> = (0..6).collect();
        for victim in [2, 0, 5, 3] {
            w.remove(victim);
            arr.retain(|&k| k != victim);
            assert_eq!(w.iter().collect::<Vec<_>>(), arr);
            assert_eq!(w.len(), arr.len());
        }
        // head moved past the removed 0
        assert_eq!(w.head(), 1);
        assert_eq!(w.prev(1), 4);
        assert_eq!(w.next(4), 1);
    }
}
