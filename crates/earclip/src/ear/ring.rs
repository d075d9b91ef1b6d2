//! Circular clipped mask over the polygon's vertex indices.

/// One flag per vertex (closing point excluded); `true` once clipped.
#[derive(Clone, Debug)]
pub struct ClipMask {
    clipped: Vec<bool>,
    remaining: usize,
}

impl ClipMask {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            clipped: vec![false; vertex_count],
            remaining: vertex_count,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.clipped.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.clipped.is_empty()
    }

    /// Unclipped vertex count.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    #[inline]
    pub fn is_clipped(&self, idx: usize) -> bool {
        self.clipped[idx]
    }

    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.clipped
    }

    /// Idempotent.
    pub fn clip(&mut self, idx: usize) {
        if !self.clipped[idx] {
            self.clipped[idx] = true;
            self.remaining -= 1;
        }
    }

    /// First unclipped index at or after `offset`, wrapping around.
    pub fn next_unclipped(&self, offset: usize) -> Option<usize> {
        let n = self.clipped.len();
        if n == 0 {
            return None;
        }
        (0..n)
            .map(|k| (offset + k) % n)
            .find(|&i| !self.clipped[i])
    }

    /// Three consecutive unclipped indices, the first at or after `offset`.
    pub fn three_from(&self, offset: usize) -> Option<(usize, usize, usize)> {
        if self.remaining < 3 {
            return None;
        }
        let a = self.next_unclipped(offset)?;
        let b = self.next_unclipped(a + 1)?;
        let c = self.next_unclipped(b + 1)?;
        Some((a, b, c))
    }

    /// Unclipped indices in ascending order.
    pub fn unclipped(&self) -> impl Iterator<Item = usize> + '_ {
        self.clipped
            .iter()
            .enumerate()
            .filter(|&(_, &c)| !c)
            .map(|(i, _)| i)
    }

    /// Edges `(i, j)` of the remaining ring, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let first = self.unclipped().next();
        self.unclipped()
            .zip(self.unclipped().skip(1).chain(first))
    }
}
