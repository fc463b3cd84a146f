use crate::{
    block::{Block, BlockKind, Corner, Edge, fingerprint_of},
    color::{Color, Rotation},
    geometry::{Orientation, face_at},
};
use itertools::Itertools;
use log::{debug, error, trace};
use std::fmt;
use thiserror::Error;

pub const FACE_COUNT: usize = Color::ALL.len();
pub const EDGES_PER_FACE: usize = SLOTS_PER_FACE;
pub const CORNERS_PER_FACE: usize = SLOTS_PER_FACE;
pub const TOTAL_EDGES: usize = 12;
pub const TOTAL_CORNERS: usize = 8;

// Every face of a 3x3 is touched by four edges and four corners
const SLOTS_PER_FACE: usize = 4;

/// A stable handle to one of the blocks owned by a `CubeState`. Blocks never
/// move in storage, only the per-face lists referring to them change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockId<const N: usize>(usize);

pub type EdgeId = BlockId<2>;
pub type CornerId = BlockId<3>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Expected {expected} {kind}s in the solved layout but only {actual} could be built")]
    MissingBlocks {
        kind: BlockKind,
        expected: usize,
        actual: usize,
    },
    #[error("Face {face} has {actual} {kind}s registered, expected {expected}")]
    UnfilledFace {
        kind: BlockKind,
        face: Color,
        expected: usize,
        actual: usize,
    },
}

/// Which way a block crosses the border of a face adjacent to a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    Leaving,
    Arriving,
}

/// A broken invariant detected while planning a turn. The state is never
/// modified when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RotationError {
    #[error("The {kind} sticker on face {face} cannot be carried around face {turned}")]
    UnreachableFace {
        kind: BlockKind,
        turned: Color,
        face: Color,
    },
    #[error(
        "Turning face {turned} should move exactly one {kind} {transfer} face {face}, found {count}"
    )]
    AmbiguousTransfer {
        kind: BlockKind,
        turned: Color,
        face: Color,
        transfer: Transfer,
        count: usize,
    },
    #[error("The {kind} #{block} leaving face {face} is not registered on it")]
    MissingBlock {
        kind: BlockKind,
        block: usize,
        face: Color,
    },
    #[error("The {kind} #{block} arriving on face {face} is already registered on it")]
    DuplicateBlock {
        kind: BlockKind,
        block: usize,
        face: Color,
    },
}

/// All the blocks of one kind along with, for every face, the blocks
/// currently touching it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Orbit<const N: usize, const B: usize> {
    blocks: [Block<N>; B],
    faces: [[BlockId<N>; SLOTS_PER_FACE]; FACE_COUNT],
}

/// The result of planning a quarter turn on one orbit, ready to be written
/// back into it.
struct OrbitTurn<const N: usize> {
    moved: [(BlockId<N>, Block<N>); SLOTS_PER_FACE],
    faces: [(Color, [BlockId<N>; SLOTS_PER_FACE]); 4],
}

/// Accumulates the blocks of one orbit while laying out a solved cube.
struct OrbitBuilder<const N: usize, const B: usize> {
    blocks: Vec<Block<N>>,
    faces: [[Option<BlockId<N>>; SLOTS_PER_FACE]; FACE_COUNT],
    filled: [usize; FACE_COUNT],
}

/// The configuration of every moving block of a 3x3 cube.
///
/// The state is made of the placement of the 12 edges and 8 corners, and for
/// each face the 4 edges and 4 corners touching it. A block appears in the
/// lists of exactly the faces its stickers lie on, so every edge is listed
/// twice and every corner three times.
///
/// Equality compares the representation, including the order of the blocks
/// in each face list. Two states holding the blocks in the same places may
/// still differ; use `is_sorted` to check for a solved cube.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeState {
    edges: Orbit<2, TOTAL_EDGES>,
    corners: Orbit<3, TOTAL_CORNERS>,
}

impl<const N: usize> BlockId<N> {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl<const N: usize, const B: usize> Orbit<N, B> {
    fn find(&self, face: Color, fingerprint: &[Color; N]) -> Option<BlockId<N>> {
        self.faces[face.index()]
            .iter()
            .copied()
            .find(|id| self.blocks[id.0].fingerprint() == fingerprint)
    }

    /// Work out where the blocks touching `turned` end up after a quarter
    /// turn and how the lists of the four surrounding faces change, without
    /// touching `self`.
    ///
    /// A block on the turned face keeps the sticker lying on that face; every
    /// other sticker moves to the next face around it in the direction of the
    /// turn. Each surrounding face then loses exactly one block and gains
    /// exactly one. For edges that is the only one touching the face before
    /// and after; corners additionally have one block staying on the face,
    /// so the pair is found as the difference of the before and after sets.
    fn plan_turn(
        &self,
        turned: Color,
        rotation: Rotation,
    ) -> Result<OrbitTurn<N>, RotationError> {
        let kind = Block::<N>::KIND;
        let direction = rotation.adjacent_pose();
        let on_face = self.faces[turned.index()];

        let mut moved = on_face.map(|id| (id, self.blocks[id.0].clone()));
        for (_, block) in &mut moved {
            block
                .relocate(|placement| {
                    if placement == turned {
                        Some(placement)
                    } else {
                        face_at(turned, placement, direction)
                    }
                })
                .map_err(|face| RotationError::UnreachableFace { kind, turned, face })?;
        }

        let orientation = Orientation::default_for(turned);
        let next = orientation.face(direction);
        let ring = [
            orientation.top(),
            next,
            orientation.top().opposite(),
            next.opposite(),
        ];

        let mut faces = ring.map(|face| (face, self.faces[face.index()]));
        for (face, slots) in &mut faces {
            let face = *face;
            let crossing = |transfer: Transfer| {
                moved
                    .iter()
                    .filter(move |(id, after)| {
                        let before = &self.blocks[id.0];
                        match transfer {
                            Transfer::Leaving => before.touches(face) && !after.touches(face),
                            Transfer::Arriving => !before.touches(face) && after.touches(face),
                        }
                    })
                    .map(|&(id, _)| id)
                    .exactly_one()
                    .map_err(|found| RotationError::AmbiguousTransfer {
                        kind,
                        turned,
                        face,
                        transfer,
                        count: found.count(),
                    })
            };
            let leaving = crossing(Transfer::Leaving)?;
            let arriving = crossing(Transfer::Arriving)?;

            if slots.contains(&arriving) {
                return Err(RotationError::DuplicateBlock {
                    kind,
                    block: arriving.0,
                    face,
                });
            }
            let slot = slots
                .iter_mut()
                .find(|id| **id == leaving)
                .ok_or(RotationError::MissingBlock {
                    kind,
                    block: leaving.0,
                    face,
                })?;
            trace!("{kind} #{} leaves face {face}, #{} arrives", leaving.0, arriving.0);
            *slot = arriving;
        }

        Ok(OrbitTurn { moved, faces })
    }

    fn commit(&mut self, turn: OrbitTurn<N>) {
        for (id, block) in turn.moved {
            self.blocks[id.0] = block;
        }
        for (face, slots) in turn.faces {
            self.faces[face.index()] = slots;
        }
    }
}

impl<const N: usize, const B: usize> OrbitBuilder<N, B> {
    fn new() -> Self {
        OrbitBuilder {
            blocks: Vec::with_capacity(B),
            faces: [[None; SLOTS_PER_FACE]; FACE_COUNT],
            filled: [0; FACE_COUNT],
        }
    }

    /// Add a solved block touching the faces `colors`. Layout mistakes are
    /// logged and the block is skipped; `build` then reports the gap.
    fn register(&mut self, colors: [Color; N]) {
        let kind = Block::<N>::KIND;
        let id = BlockId(self.blocks.len());

        if id.0 >= B {
            error!(
                "Attempt to initialize {kind} #{} {colors:?} outside of the {B} available slots, ignoring it",
                id.0
            );
            return;
        }

        if let Some(face) = colors
            .iter()
            .find(|color| self.filled[color.index()] >= SLOTS_PER_FACE)
        {
            error!(
                "Attempt to register {kind} {colors:?} on face {face} which already has {SLOTS_PER_FACE} {kind}s, ignoring it"
            );
            return;
        }

        let block = match Block::solved(colors) {
            Ok(block) => block,
            Err(e) => {
                error!("Cannot initialize {kind} {colors:?}: {e}, ignoring it");
                return;
            }
        };

        for color in colors {
            let filled = &mut self.filled[color.index()];
            self.faces[color.index()][*filled] = Some(id);
            *filled += 1;
        }
        self.blocks.push(block);
    }

    fn build(self) -> Result<Orbit<N, B>, LayoutError> {
        let kind = Block::<N>::KIND;
        let OrbitBuilder {
            blocks,
            faces: maybe_faces,
            filled,
        } = self;

        let actual = blocks.len();
        let blocks: [Block<N>; B] = blocks.try_into().map_err(|_| LayoutError::MissingBlocks {
            kind,
            expected: B,
            actual,
        })?;

        let mut faces = [[BlockId(0); SLOTS_PER_FACE]; FACE_COUNT];
        for color in Color::ALL {
            let i = color.index();
            for (slot, maybe_id) in faces[i].iter_mut().zip(maybe_faces[i]) {
                *slot = maybe_id.ok_or(LayoutError::UnfilledFace {
                    kind,
                    face: color,
                    expected: SLOTS_PER_FACE,
                    actual: filled[i],
                })?;
            }
        }

        Ok(Orbit { blocks, faces })
    }
}

impl CubeState {
    /// Create a solved cube.
    ///
    /// # Errors
    ///
    /// If the solved layout cannot be built, which means the geometry tables
    /// are wrong
    pub fn new() -> Result<Self, LayoutError> {
        Self::solved_layout()
    }

    /// Put every block back in its solved position. On error the state is
    /// left as it was.
    ///
    /// # Errors
    ///
    /// If the solved layout cannot be built, which means the geometry tables
    /// are wrong
    pub fn reset_blocks(&mut self) -> Result<(), LayoutError> {
        *self = Self::solved_layout()?;
        debug!("Reset cube to its solved state");
        Ok(())
    }

    fn solved_layout() -> Result<Self, LayoutError> {
        let orientation = Orientation::default_for(Color::Red);
        let front = orientation.front();
        let back = front.opposite();
        let lateral = orientation.ring();
        // The same ring, clockwise as seen from the back
        let back_lateral = [lateral[0], lateral[3], lateral[2], lateral[1]];

        let mut edges = OrbitBuilder::<2, TOTAL_EDGES>::new();
        let mut corners = OrbitBuilder::<3, TOTAL_CORNERS>::new();

        for (frontal, ring) in [(front, lateral), (back, back_lateral)] {
            for (a, b) in ring.into_iter().circular_tuple_windows() {
                edges.register([frontal, a]);
                corners.register([frontal, a, b]);
            }
        }

        // The equator, touching neither front nor back
        for (a, b) in lateral.into_iter().circular_tuple_windows() {
            edges.register([a, b]);
        }

        Ok(CubeState {
            edges: edges.build()?,
            corners: corners.build()?,
        })
    }

    /// Turn the face `face` a quarter turn in the direction `rotation`.
    ///
    /// The whole transition is planned before anything is written, so the
    /// state is either fully turned or left untouched.
    ///
    /// # Errors
    ///
    /// If the membership lists disagree with the block placements. This
    /// cannot happen through the public API and indicates a bug.
    pub fn rotate_face(&mut self, face: Color, rotation: Rotation) -> Result<(), RotationError> {
        let edges = self.edges.plan_turn(face, rotation)?;
        let corners = self.corners.plan_turn(face, rotation)?;

        self.edges.commit(edges);
        self.corners.commit(corners);
        debug!("Turned face {face} {rotation}");
        Ok(())
    }

    /// Whether every block is in its solved position and orientation.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.edges.blocks.iter().all(Edge::is_well_placed)
            && self.corners.blocks.iter().all(Corner::is_well_placed)
    }

    /// How many blocks are not well placed.
    #[must_use]
    pub fn misplaced_count(&self) -> usize {
        self.edges
            .blocks
            .iter()
            .filter(|edge| !edge.is_well_placed())
            .count()
            + self
                .corners
                .blocks
                .iter()
                .filter(|corner| !corner.is_well_placed())
                .count()
    }

    /// The edges currently touching `face`.
    #[must_use]
    pub fn face_edges(&self, face: Color) -> &[EdgeId; EDGES_PER_FACE] {
        &self.edges.faces[face.index()]
    }

    /// The corners currently touching `face`.
    #[must_use]
    pub fn face_corners(&self, face: Color) -> &[CornerId; CORNERS_PER_FACE] {
        &self.corners.faces[face.index()]
    }

    #[must_use]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges.blocks[id.0]
    }

    #[must_use]
    pub fn corner(&self, id: CornerId) -> &Corner {
        &self.corners.blocks[id.0]
    }

    #[must_use]
    pub fn edges(&self) -> &[Edge; TOTAL_EDGES] {
        &self.edges.blocks
    }

    #[must_use]
    pub fn corners(&self) -> &[Corner; TOTAL_CORNERS] {
        &self.corners.blocks
    }

    /// The edge sitting between `face` and `neighbour`.
    #[must_use]
    pub fn find_edge(&self, face: Color, neighbour: Color) -> Option<EdgeId> {
        self.edges.find(face, &fingerprint_of([face, neighbour]))
    }

    /// The corner sitting between `face`, `a` and `b`.
    #[must_use]
    pub fn find_corner(&self, face: Color, a: Color, b: Color) -> Option<CornerId> {
        self.corners.find(face, &fingerprint_of([face, a, b]))
    }
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Transfer::Leaving => "off",
            Transfer::Arriving => "onto",
        })
    }
}

impl<const N: usize> fmt::Display for BlockId<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", Block::<N>::KIND, self.0)
    }
}
