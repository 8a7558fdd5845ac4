use geist_geom::BlockPos;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    pub cx: i32,
    pub cy: i32,
    pub cz: i32,
}

impl ChunkCoord {
    #[inline]
    pub const fn new(cx: i32, cy: i32, cz: i32) -> Self {
        Self { cx, cy, cz }
    }

    /// Chunk holding `p` for cubic chunks of edge `size`.
    #[inline]
    pub fn containing(p: BlockPos, size: i32) -> Self {
        Self {
            cx: p.x.div_euclid(size),
            cy: p.y.div_euclid(size),
            cz: p.z.div_euclid(size),
        }
    }
}

impl From<(i32, i32, i32)> for ChunkCoord {
    fn from(value: (i32, i32, i32)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}
