//! Equivalence table between provisional labels
//!
//! A union-find over label ids where every link also records how many
//! periods apart the two labels sit. Following the links from a label to its
//! representative therefore gives the periodic shift needed to place the
//! label's cells next to the representative's cells.
//!
//! Joining two labels that are already equivalent with a shift that does not
//! match the recorded one means the component closes on itself around the
//! domain. The mismatch is kept as a per-class "wraps" flag for each axis.

/// Shift between two labels in whole periods, in x, y, z order
pub(crate) type Shift = [i32; 3];

#[derive(Debug, Clone, Default)]
pub(crate) struct Equivalence {
    /// Parent of each id, roots point at themselves
    parent: Vec<u32>,
    /// Shift of each id relative to its parent
    shift: Vec<Shift>,
    /// Axes around which the class wraps, only meaningful on roots
    wraps: Vec<[bool; 3]>,
}

impl Equivalence {
    /// Forget everything and start from ids `0..=count`, each on its own
    ///
    /// Id 0 is the background and is never joined to anything.
    pub fn reset(&mut self, count: u32) {
        self.parent.clear();
        self.shift.clear();
        self.wraps.clear();
        for id in 0..=count {
            self.push_id(id);
        }
    }

    /// Add a new singleton class, returning its id
    pub fn push(&mut self) -> u32 {
        if self.parent.is_empty() {
            self.push_id(0);
        }
        let id = self.parent.len() as u32;
        self.push_id(id);
        id
    }

    fn push_id(&mut self, id: u32) {
        self.parent.push(id);
        self.shift.push([0; 3]);
        self.wraps.push([false; 3]);
    }

    /// Number of ids in the table, excluding the background
    pub fn len(&self) -> u32 {
        self.parent.len().saturating_sub(1) as u32
    }

    /// Representative of `id` and the shift of `id` relative to it
    ///
    /// Compresses the path so every visited id links straight to the root.
    pub fn find(&mut self, id: u32) -> (u32, Shift) {
        let mut root = id;
        let mut total = [0; 3];
        while self.parent[root as usize] != root {
            total = add(total, self.shift[root as usize]);
            root = self.parent[root as usize];
        }

        let mut node = id;
        let mut remaining = total;
        while self.parent[node as usize] != node {
            let next = self.parent[node as usize];
            let step = self.shift[node as usize];
            self.parent[node as usize] = root;
            self.shift[node as usize] = remaining;
            remaining = sub(remaining, step);
            node = next;
        }

        (root, total)
    }

    /// Declare `a` and `b` to be the same component, with `a` sitting
    /// `displacement` periods above `b`
    ///
    /// The smaller representative always survives, so every class is
    /// represented by its minimal id. Returns true if two distinct classes
    /// were merged.
    pub fn union(&mut self, a: u32, b: u32, displacement: Shift) -> bool {
        let (root_a, shift_a) = self.find(a);
        let (root_b, shift_b) = self.find(b);

        // shift of root_b relative to root_a
        let gap = sub(sub(shift_a, shift_b), displacement);

        if root_a == root_b {
            let wraps = &mut self.wraps[root_a as usize];
            for (flag, g) in wraps.iter_mut().zip(gap) {
                *flag |= g != 0;
            }
            return false;
        }

        let (keep, fold, fold_shift) = if root_a < root_b {
            (root_a, root_b, gap)
        } else {
            (root_b, root_a, gap.map(|g| -g))
        };

        self.parent[fold as usize] = keep;
        self.shift[fold as usize] = fold_shift;
        let folded = self.wraps[fold as usize];
        for (flag, f) in self.wraps[keep as usize].iter_mut().zip(folded) {
            *flag |= f;
        }
        true
    }

    /// Axes around which the class of `id` wraps
    pub fn wraps(&mut self, id: u32) -> [bool; 3] {
        let (root, _) = self.find(id);
        self.wraps[root as usize]
    }

    /// True if `id` represents its class
    #[inline]
    pub fn is_root(&self, id: u32) -> bool {
        self.parent[id as usize] == id
    }

    /// Number of distinct classes, excluding the background
    pub fn classes(&self) -> usize {
        (1..=self.len()).filter(|id| self.is_root(*id)).count()
    }
}

#[inline]
fn add(a: Shift, b: Shift) -> Shift {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
fn sub(a: Shift, b: Shift) -> Shift {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}
