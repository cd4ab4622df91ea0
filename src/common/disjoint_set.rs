use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Disjoint-set forest (union-find) with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    elements: Vec<T>,
    indices: FxHashMap<T, usize>,
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl<T> DisjointSet<T>
where
    T: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            indices: FxHashMap::default(),
            parent: Vec::new(),
            rank: Vec::new(),
            sets: 0,
        }
    }

    /// Number of elements in all sets.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.sets
    }

    pub fn contains(&self, element: &T) -> bool {
        self.indices.contains_key(element)
    }

    /// Puts the element into a new singleton set. Returns `false` if the
    /// element is already present.
    pub fn make_set(&mut self, element: T) -> bool {
        if self.indices.contains_key(&element) {
            return false;
        }

        let index = self.elements.len();
        self.indices.insert(element.clone(), index);
        self.elements.push(element);
        self.parent.push(index);
        self.rank.push(0);
        self.sets += 1;

        true
    }

    /// Returns the representative of the set containing the element, or
    /// `None` if the element is not present.
    pub fn find(&mut self, element: &T) -> Option<&T> {
        let index = *self.indices.get(element)?;
        let root = self.find_root(index);
        Some(&self.elements[root])
    }

    /// Unites the sets containing the two elements.
    ///
    /// Returns `Some(true)` if two different sets were united, `Some(false)`
    /// if the elements were already in the same set, and `None` if any of
    /// the elements is not present.
    pub fn union(&mut self, lhs: &T, rhs: &T) -> Option<bool> {
        let lhs = *self.indices.get(lhs)?;
        let rhs = *self.indices.get(rhs)?;

        let lhs = self.find_root(lhs);
        let rhs = self.find_root(rhs);

        if lhs == rhs {
            return Some(false);
        }

        match self.rank[lhs].cmp(&self.rank[rhs]) {
            std::cmp::Ordering::Less => self.parent[lhs] = rhs,
            std::cmp::Ordering::Greater => self.parent[rhs] = lhs,
            std::cmp::Ordering::Equal => {
                self.parent[rhs] = lhs;
                self.rank[lhs] += 1;
            }
        }

        self.sets -= 1;
        Some(true)
    }

    /// Returns whether the two elements are in the same set, or `None` if any
    /// of the elements is not present.
    pub fn same_set(&mut self, lhs: &T, rhs: &T) -> Option<bool> {
        let lhs = *self.indices.get(lhs)?;
        let rhs = *self.indices.get(rhs)?;

        Some(self.find_root(lhs) == self.find_root(rhs))
    }

    fn find_root(&mut self, index: usize) -> usize {
        let mut root = index;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Path compression.
        let mut current = index;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }
}

impl<T> Default for DisjointSet<T>
where
    T: Clone + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DisjointSet<T>
where
    T: Clone + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();

        for element in iter {
            set.make_set(element);
        }

        set
    }
}
