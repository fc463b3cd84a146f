use crate::color::Color;
use std::fmt;
use thiserror::Error;

/// The two shapes of blocks a 3x3 cube is made of (ignoring centers, which
/// never move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Edge,
    Corner,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockError {
    #[error("A block cannot have the face identity {0} twice")]
    DuplicateIdentity(Color),
    #[error("{identity} is not a face identity of the block {identities:?}")]
    UnknownIdentity {
        identity: Color,
        identities: Vec<Color>,
    },
}

/// One physical piece of the cube with `N` visible stickers.
///
/// A block's face identities are the colors of its stickers. They never
/// change and act as the block's name. Each identity is mapped to the cube
/// face the sticker currently lies on, its placement. Both are stored as
/// parallel arrays since `N` is at most three.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Block<const N: usize> {
    identities: [Color; N],
    placements: [Color; N],
    fingerprint: [Color; N],
}

pub type Edge = Block<2>;
pub type Corner = Block<3>;

impl<const N: usize> Block<N> {
    pub const KIND: BlockKind = match N {
        2 => BlockKind::Edge,
        3 => BlockKind::Corner,
        _ => panic!("Blocks have either two or three faces"),
    };

    /// Create a block in its solved position, every sticker on the face of its
    /// own color.
    ///
    /// # Errors
    ///
    /// If `identities` contains the same color twice
    pub fn solved(identities: [Color; N]) -> Result<Self, BlockError> {
        Self::new(identities, identities)
    }

    /// Create a block whose sticker `identities[i]` lies on the cube face
    /// `placements[i]`.
    ///
    /// # Errors
    ///
    /// If `identities` contains the same color twice
    pub fn new(identities: [Color; N], placements: [Color; N]) -> Result<Self, BlockError> {
        for (i, identity) in identities.iter().enumerate() {
            if identities[..i].contains(identity) {
                return Err(BlockError::DuplicateIdentity(*identity));
            }
        }

        Ok(Block {
            identities,
            placements,
            fingerprint: fingerprint_of(placements),
        })
    }

    /// Move the sticker `identity` onto the cube face `placement`.
    ///
    /// # Errors
    ///
    /// If `identity` is not one of the block's stickers
    pub fn set_placement(&mut self, identity: Color, placement: Color) -> Result<(), BlockError> {
        let Some(i) = self.identities.iter().position(|&c| c == identity) else {
            return Err(BlockError::UnknownIdentity {
                identity,
                identities: self.identities.to_vec(),
            });
        };
        self.placements[i] = placement;
        self.fingerprint = fingerprint_of(self.placements);
        Ok(())
    }

    /// Move every sticker at once, `relocate` being given each current
    /// placement. Stops at the first sticker `relocate` rejects and returns
    /// its placement, leaving the block unchanged.
    pub(crate) fn relocate(
        &mut self,
        mut relocate: impl FnMut(Color) -> Option<Color>,
    ) -> Result<(), Color> {
        let mut placements = self.placements;
        for placement in &mut placements {
            *placement = relocate(*placement).ok_or(*placement)?;
        }
        self.placements = placements;
        self.fingerprint = fingerprint_of(placements);
        Ok(())
    }

    #[must_use]
    pub fn identities(&self) -> &[Color; N] {
        &self.identities
    }

    #[must_use]
    pub fn placements(&self) -> &[Color; N] {
        &self.placements
    }

    /// Pairs of (face identity, placement).
    pub fn faces(&self) -> impl Iterator<Item = (Color, Color)> + '_ {
        self.identities
            .iter()
            .copied()
            .zip(self.placements.iter().copied())
    }

    /// The cube face the sticker `identity` lies on.
    #[must_use]
    pub fn placement(&self, identity: Color) -> Option<Color> {
        self.faces()
            .find(|&(i, _)| i == identity)
            .map(|(_, placement)| placement)
    }

    /// The sticker lying on the cube face `face`.
    #[must_use]
    pub fn identity_on(&self, face: Color) -> Option<Color> {
        self.faces()
            .find(|&(_, placement)| placement == face)
            .map(|(identity, _)| identity)
    }

    #[must_use]
    pub fn touches(&self, face: Color) -> bool {
        self.placements.contains(&face)
    }

    /// The sorted placements of the block. Two blocks of the same kind have
    /// the same fingerprint exactly when they sit in the same slot of the
    /// cube, so this identifies a slot by the faces surrounding it.
    #[must_use]
    pub fn fingerprint(&self) -> &[Color; N] {
        &self.fingerprint
    }

    /// Whether every sticker lies on the face of its own color.
    #[must_use]
    pub fn is_well_placed(&self) -> bool {
        self.identities == self.placements
    }
}

/// Sort colors so that they can be compared as an unordered set.
#[must_use]
pub fn fingerprint_of<const N: usize>(mut colors: [Color; N]) -> [Color; N] {
    colors.sort_unstable();
    colors
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BlockKind::Edge => "edge",
            BlockKind::Corner => "corner",
        })
    }
}

impl<const N: usize> fmt::Display for Block<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (identity, placement) in self.faces() {
            write!(f, "{identity}{placement}")?;
        }
        Ok(())
    }
}
