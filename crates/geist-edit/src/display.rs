//! Selection outline rendering with particle markers.

use std::iter;
use std::sync::atomic::{AtomicBool, Ordering};

use geist_geom::{BlockBox, BlockPos};
use geist_world::read_world;

use crate::{Particle, ParticleKind, RegionSelector};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayOutcome {
    /// Outlines are switched off for the session.
    Hidden,
    /// Forced refresh while periodic rendering is on; the next tick draws it.
    Deferred,
    /// Another pass holds the render guard; this call was dropped.
    Busy,
    /// Nothing to draw: a single-point selection or no visible rows.
    Empty,
    Rendered(usize),
    /// The emitter failed part way; the error was logged.
    Failed { emitted: usize },
}

impl DisplayOutcome {
    #[inline]
    pub fn emitted(self) -> usize {
        match self {
            DisplayOutcome::Rendered(n) | DisplayOutcome::Failed { emitted: n } => n,
            _ => 0,
        }
    }
}

/// Held while an outline pass runs; released on drop, including unwinding.
#[derive(Debug)]
pub struct RenderGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for RenderGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

fn ends(lo: i32, hi: i32) -> impl Iterator<Item = i32> + Clone {
    iter::once(lo).chain((hi != lo).then_some(hi))
}

/// Lattice points on the six faces of `b`: the x/y grids at both Z ends,
/// then x/z at both Y ends, then y/z at both X ends.
///
/// Edge points shared by two grids appear once per grid.
pub fn outline(b: BlockBox) -> impl Iterator<Item = BlockPos> {
    let (min, max) = (b.min, b.max);
    let xy = (min.x..=max.x).flat_map(move |x| {
        (min.y..=max.y).flat_map(move |y| ends(min.z, max.z).map(move |z| BlockPos::new(x, y, z)))
    });
    let xz = (min.x..=max.x).flat_map(move |x| {
        ends(min.y, max.y).flat_map(move |y| (min.z..=max.z).map(move |z| BlockPos::new(x, y, z)))
    });
    let yz = ends(min.x, max.x).flat_map(move |x| {
        (min.y..=max.y).flat_map(move |y| (min.z..=max.z).map(move |z| BlockPos::new(x, y, z)))
    });
    xy.chain(xz).chain(yz)
}

impl RegionSelector {
    /// Try to take the render guard without blocking.
    pub fn try_begin_render(&self) -> Option<RenderGuard<'_>> {
        self.rendering
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| RenderGuard {
                flag: &self.rendering,
            })
    }

    #[inline]
    pub fn is_rendering(&self) -> bool {
        self.rendering.load(Ordering::Acquire)
    }

    /// Draw the selection outline with the session's marker.
    ///
    /// `force` is for callers outside the periodic refresh: it only draws when
    /// periodic rendering is off, since otherwise the next tick covers it.
    pub fn display_selection(&self, force: bool) -> DisplayOutcome {
        self.display_selection_with(force, self.marker)
    }

    pub fn display_selection_with(&self, force: bool, kind: ParticleKind) -> DisplayOutcome {
        if !force && !self.show_selection {
            return DisplayOutcome::Hidden;
        }
        if force && self.show_selection {
            return DisplayOutcome::Deferred;
        }
        let Some(_guard) = self.try_begin_render() else {
            log::trace!("session {} outline already in progress", self.session.id());
            return DisplayOutcome::Busy;
        };
        let bbox = self.selection();
        if bbox.is_point() {
            return DisplayOutcome::Empty;
        }
        log::debug!("session {} has selection {:?}", self.session.id(), bbox);
        self.render_outline(bbox, kind)
    }

    fn render_outline(&self, bbox: BlockBox, kind: ParticleKind) -> DisplayOutcome {
        let world = self.session.world();
        let world = read_world(&world);
        let range = world.build_range();
        let Some(visible) = bbox.clamp_y(range.min_y, range.max_y) else {
            return DisplayOutcome::Empty;
        };
        let audience = [self.session.id()];
        let mut emitted = 0;
        for pos in outline(visible) {
            if !world.is_air(pos) {
                continue;
            }
            let particle = Particle::new(kind, pos.center());
            if let Err(e) = self.emitter.spawn(&particle, &audience) {
                log::error!("display selection for session {}: {}", audience[0], e);
                return DisplayOutcome::Failed { emitted };
            }
            emitted += 1;
        }
        DisplayOutcome::Rendered(emitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_of_flat_square() {
        let b = BlockBox::from_corners(BlockPos::new(0, 0, 0), BlockPos::new(1, 0, 1));
        let pts: Vec<_> = outline(b).collect();
        // x/y at z=0,1; x/z at the single y; y/z at x=0,1
        assert_eq!(pts.len(), 4 + 4 + 4);
        assert_eq!(&pts[..4], &[
            BlockPos::new(0, 0, 0),
            BlockPos::new(0, 0, 1),
            BlockPos::new(1, 0, 0),
            BlockPos::new(1, 0, 1),
        ]);
    }

    #[test]
    fn outline_stays_on_faces() {
        let b = BlockBox::from_corners(BlockPos::new(-2, 3, 5), BlockPos::new(2, 6, 9));
        let on_face = |p: BlockPos| {
            p.x == b.min.x || p.x == b.max.x || p.y == b.min.y || p.y == b.max.y || p.z == b.min.z || p.z == b.max.z
        };
        let pts: Vec<_> = outline(b).collect();
        assert!(pts.iter().all(|p| b.contains(*p) && on_face(*p)));
        // 5x4 at two z, 5x5 at two y, 4x5 at two x
        assert_eq!(pts.len(), 2 * 20 + 2 * 25 + 2 * 20);
        // Interior (0, 4, 7) is never touched
        assert!(!pts.contains(&BlockPos::new(0, 4, 7)));
    }

    #[test]
    fn outcome_emitted_counts() {
        assert_eq!(DisplayOutcome::Rendered(7).emitted(), 7);
        assert_eq!(DisplayOutcome::Failed { emitted: 2 }.emitted(), 2);
        assert_eq!(DisplayOutcome::Busy.emitted(), 0);
    }
}
