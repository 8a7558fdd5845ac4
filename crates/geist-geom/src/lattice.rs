use crate::Vec3;

/// Integer block coordinates on the world lattice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    pub const ORIGIN: BlockPos = BlockPos { x: 0, y: 0, z: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn min(self, o: BlockPos) -> BlockPos {
        BlockPos::new(self.x.min(o.x), self.y.min(o.y), self.z.min(o.z))
    }

    #[inline]
    pub fn max(self, o: BlockPos) -> BlockPos {
        BlockPos::new(self.x.max(o.x), self.y.max(o.y), self.z.max(o.z))
    }

    /// Centre of the unit cell whose minimum corner is this position.
    #[inline]
    pub fn center(self) -> Vec3 {
        Vec3::from(self) + Vec3::splat(0.5)
    }
}

impl From<(i32, i32, i32)> for BlockPos {
    fn from(v: (i32, i32, i32)) -> Self {
        Self::new(v.0, v.1, v.2)
    }
}

impl From<[i32; 3]> for BlockPos {
    fn from(v: [i32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

/// Inclusive, normalized box of lattice points (`min <= max` on every axis).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BlockBox {
    pub min: BlockPos,
    pub max: BlockPos,
}

impl BlockBox {
    /// Box spanned by two corners given in any order.
    #[inline]
    pub fn from_corners(a: BlockPos, b: BlockPos) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Per-axis `max - min` (width, height, depth). Widened so full-range boxes don't overflow.
    #[inline]
    pub fn extent(self) -> (i64, i64, i64) {
        (
            i64::from(self.max.x) - i64::from(self.min.x),
            i64::from(self.max.y) - i64::from(self.min.y),
            i64::from(self.max.z) - i64::from(self.min.z),
        )
    }

    /// True when all three extents are zero.
    #[inline]
    pub fn is_point(self) -> bool {
        self.min == self.max
    }

    /// Number of lattice points contained.
    pub fn volume(self) -> u128 {
        let (w, h, d) = self.extent();
        (w as u128 + 1) * (h as u128 + 1) * (d as u128 + 1)
    }

    #[inline]
    pub fn contains(self, p: BlockPos) -> bool {
        (self.min.x..=self.max.x).contains(&p.x)
            && (self.min.y..=self.max.y).contains(&p.y)
            && (self.min.z..=self.max.z).contains(&p.z)
    }

    /// Midpoint of `min` and `max`; may be fractional.
    pub fn center(self) -> Vec3 {
        let mid = |a: i32, b: i32| ((f64::from(a) + f64::from(b)) / 2.0) as f32;
        Vec3::new(
            mid(self.min.x, self.max.x),
            mid(self.min.y, self.max.y),
            mid(self.min.z, self.max.z),
        )
    }

    /// Restrict the Y span to `[lo, hi]`; `None` when nothing is left.
    pub fn clamp_y(self, lo: i32, hi: i32) -> Option<BlockBox> {
        let min_y = self.min.y.max(lo);
        let max_y = self.max.y.min(hi);
        if min_y > max_y {
            return None;
        }
        Some(BlockBox {
            min: BlockPos { y: min_y, ..self.min },
            max: BlockPos { y: max_y, ..self.max },
        })
    }

    /// Every contained lattice point, X outer, Y middle, Z inner.
    #[inline]
    pub fn iter(self) -> BlockIter {
        BlockIter {
            bbox: self,
            next: Some(self.min),
            remaining: self.volume(),
        }
    }
}

impl IntoIterator for BlockBox {
    type Item = BlockPos;
    type IntoIter = BlockIter;

    fn into_iter(self) -> BlockIter {
        self.iter()
    }
}

/// Lazy walk over a [`BlockBox`].
#[derive(Clone, Debug)]
pub struct BlockIter {
    bbox: BlockBox,
    next: Option<BlockPos>,
    remaining: u128,
}

impl BlockIter {
    fn step(&self, p: BlockPos) -> Option<BlockPos> {
        let (min, max) = (self.bbox.min, self.bbox.max);
        if p.z < max.z {
            Some(BlockPos { z: p.z + 1, ..p })
        } else if p.y < max.y {
            Some(BlockPos::new(p.x, p.y + 1, min.z))
        } else if p.x < max.x {
            Some(BlockPos::new(p.x + 1, min.y, min.z))
        } else {
            None
        }
    }
}

impl Iterator for BlockIter {
    type Item = BlockPos;

    fn next(&mut self) -> Option<BlockPos> {
        let cur = self.next?;
        self.next = self.step(cur);
        self.remaining = self.remaining.saturating_sub(1);
        Some(cur)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}
