#![warn(clippy::pedantic)]
#![allow(clippy::similar_names, clippy::missing_panics_doc)]

//! A 3x3x3 Rubik's cube modelled as the placement of its 12 edges and 8
//! corners. `CubeState` is the state machine, `Cube` wraps it with an
//! orientation, random shuffles and printing.

pub mod block;
pub mod color;
pub mod cube;
pub mod cube_state;
pub mod geometry;
pub mod random;

pub use block::{Block, BlockError, BlockKind, Corner, Edge};
pub use color::{Color, FacePose, ParseError, Rotation};
pub use cube::{Cube, CubeError, CubeNet, DEFAULT_SHUFFLES, FaceGrid};
pub use cube_state::{CornerId, CubeState, EdgeId, LayoutError, RotationError};
pub use geometry::{Orientation, default_top, face_at, right_of};
pub use random::RandomGenerator;
