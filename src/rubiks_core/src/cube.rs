use crate::{
    color::{Color, FacePose, Rotation},
    cube_state::{CubeState, LayoutError, RotationError},
    geometry::Orientation,
    random::RandomGenerator,
};
use fastrand::Rng;
use log::{error, info};
use std::fmt;
use thiserror::Error;

/// The stickers of one face, row by row from the top left as seen when
/// looking at that face.
pub type FaceGrid = [[Color; 3]; 3];

pub const DEFAULT_SHUFFLES: usize = 20;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Rotation(#[from] RotationError),
    #[error("No block of face {face} touches the faces {neighbours:?}")]
    MissingSticker { face: Color, neighbours: Vec<Color> },
}

/// A cube held in a fixed orientation, which can be turned, shuffled and
/// printed.
#[derive(Debug, Clone)]
pub struct Cube {
    orientation: Orientation,
    state: CubeState,
    faces: RandomGenerator<FacePose, 6>,
    rotations: RandomGenerator<Rotation, 2>,
}

impl Cube {
    /// Create a solved cube held with `front` facing the viewer. When `top`
    /// is `None`, or is not adjacent to `front`, the default top is used.
    ///
    /// # Errors
    ///
    /// If the solved layout cannot be built
    pub fn new(front: Color, top: Option<Color>) -> Result<Self, CubeError> {
        let orientation = match top {
            None => Orientation::default_for(front),
            Some(top) => Orientation::new(front, top).unwrap_or_else(|| {
                let fallback = Orientation::default_for(front);
                error!(
                    "Tried to hold the cube with front color {front} and top color {top} whereas those colors must be adjacent, using default top color {} instead",
                    fallback.top()
                );
                fallback
            }),
        };

        Ok(Cube {
            orientation,
            state: CubeState::new()?,
            faces: RandomGenerator::new(FacePose::ALL),
            rotations: RandomGenerator::new(Rotation::ALL),
        })
    }

    /// Make shuffles reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        let mut rng = Rng::with_seed(seed);
        self.faces = RandomGenerator::with_rng(FacePose::ALL, rng.fork());
        self.rotations = RandomGenerator::with_rng(Rotation::ALL, rng);
        self
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.state.is_sorted()
    }

    /// Put the cube back in its solved state.
    ///
    /// # Errors
    ///
    /// If the solved layout cannot be built
    pub fn reset(&mut self) -> Result<(), CubeError> {
        Ok(self.state.reset_blocks()?)
    }

    /// Turn the face whose center is `face`.
    ///
    /// # Errors
    ///
    /// If the cube state is inconsistent, see `CubeState::rotate_face`
    pub fn rotate(&mut self, face: Color, rotation: Rotation) -> Result<(), CubeError> {
        info!("Rotating face of color {face} {rotation}");
        Ok(self.state.rotate_face(face, rotation)?)
    }

    /// Turn the face at `pose` in the current orientation.
    ///
    /// # Errors
    ///
    /// If the cube state is inconsistent, see `CubeState::rotate_face`
    pub fn rotate_pose(&mut self, pose: FacePose, rotation: Rotation) -> Result<(), CubeError> {
        self.rotate(self.orientation.face(pose), rotation)
    }

    /// Apply `count` random quarter turns.
    ///
    /// # Errors
    ///
    /// If the cube state is inconsistent, see `CubeState::rotate_face`
    pub fn shuffle(&mut self, count: usize) -> Result<(), CubeError> {
        for _ in 0..count {
            let pose = self.faces.draw();
            let rotation = self.rotations.draw();
            self.rotate_pose(pose, rotation)?;
        }
        Ok(())
    }

    /// The stickers visible on the face at `pose`, oriented as in the cube
    /// net printed by `Display`.
    ///
    /// # Errors
    ///
    /// If a sticker cannot be found, which means the state is inconsistent
    pub fn face(&self, pose: FacePose) -> Result<FaceGrid, CubeError> {
        let view = self.orientation.view(pose);
        let face = view.front();
        let [top, right, bottom, left] = view.ring();

        let edge = |neighbour: Color| {
            self.state
                .find_edge(face, neighbour)
                .and_then(|id| self.state.edge(id).identity_on(face))
                .ok_or_else(|| CubeError::MissingSticker {
                    face,
                    neighbours: vec![neighbour],
                })
        };
        let corner = |a: Color, b: Color| {
            self.state
                .find_corner(face, a, b)
                .and_then(|id| self.state.corner(id).identity_on(face))
                .ok_or_else(|| CubeError::MissingSticker {
                    face,
                    neighbours: vec![a, b],
                })
        };

        Ok([
            [corner(top, left)?, edge(top)?, corner(top, right)?],
            [edge(left)?, face, edge(right)?],
            [corner(bottom, left)?, edge(bottom)?, corner(bottom, right)?],
        ])
    }

    /// Every face, laid out as a cube net: top, then left, front and right
    /// side by side, then bottom and back.
    ///
    /// # Errors
    ///
    /// If a sticker cannot be found, which means the state is inconsistent
    pub fn net(&self) -> Result<CubeNet, CubeError> {
        Ok(CubeNet {
            top: self.face(FacePose::Top)?,
            left: self.face(FacePose::Left)?,
            front: self.face(FacePose::Front)?,
            right: self.face(FacePose::Right)?,
            bottom: self.face(FacePose::Bottom)?,
            back: self.face(FacePose::Back)?,
        })
    }
}

/// The six faces of a cube as displayed in a net.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeNet {
    pub top: FaceGrid,
    pub left: FaceGrid,
    pub front: FaceGrid,
    pub right: FaceGrid,
    pub bottom: FaceGrid,
    pub back: FaceGrid,
}

impl CubeNet {
    /// Write the net using `sticker` to print each color.
    ///
    /// # Errors
    ///
    /// If writing to `f` fails
    pub fn write_with(
        &self,
        f: &mut impl fmt::Write,
        mut sticker: impl FnMut(&mut dyn fmt::Write, Color) -> fmt::Result,
    ) -> fmt::Result {
        let mut row = |f: &mut dyn fmt::Write, row: &[Color; 3]| -> fmt::Result {
            for &color in row {
                sticker(f, color)?;
            }
            Ok(())
        };

        for line in &self.top {
            f.write_str("    ")?;
            row(f, line)?;
            writeln!(f)?;
        }
        writeln!(f)?;

        for ((left, front), right) in self.left.iter().zip(&self.front).zip(&self.right) {
            row(f, left)?;
            f.write_char(' ')?;
            row(f, front)?;
            f.write_char(' ')?;
            row(f, right)?;
            writeln!(f)?;
        }
        writeln!(f)?;

        for face in [&self.bottom, &self.back] {
            for line in face {
                f.write_str("    ")?;
                row(f, line)?;
                writeln!(f)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for CubeNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_with(f, |f, color| write!(f, "{color}"))
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let net = self.net().map_err(|_| fmt::Error)?;
        write!(f, "{net}")?;
        writeln!(
            f,
            "Cube is {}sorted",
            if self.is_sorted() { "" } else { "not " }
        )
    }
}
