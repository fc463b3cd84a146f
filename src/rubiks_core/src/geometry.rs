//! Pure lookups relating face colors to each other and to viewer relative
//! poses. Both tables are computed at compile time.

use crate::color::{Color, FacePose};

const OPPOSITES: [Color; 6] = {
    let mut table = [Color::Red; 6];
    let pairs = [
        (Color::Red, Color::Orange),
        (Color::Blue, Color::Green),
        (Color::Yellow, Color::White),
    ];

    let mut i = 0;
    while i < pairs.len() {
        let (a, b) = pairs[i];
        table[a.index()] = b;
        table[b.index()] = a;
        i += 1;
    }

    table
};

/// `RIGHT_OF[front][top]` is the color on the right when `front` faces the
/// viewer with `top` on top, or `None` when the two colors are not adjacent.
///
/// Starting from one known orientation, the table is filled by walking all
/// 24 rotations of the cube: each step records the four quarter turns
/// around the front axis, then moves a new color to the front. The first
/// three steps cycle the colors around the seed corner, the last three do
/// the same around the diagonally opposite corner.
const RIGHT_OF: [[Option<Color>; 6]; 6] = {
    let mut table = [[None; 6]; 6];

    let mut front = Color::Red;
    let mut top = Color::Blue;
    let mut right = Color::Yellow;

    let mut i = 0;
    while i < 6 {
        let f = front.index();
        table[f][top.index()] = Some(right);
        table[f][right.index()] = Some(top.opposite());
        table[f][top.opposite().index()] = Some(right.opposite());
        table[f][right.opposite().index()] = Some(top);

        if i == 2 {
            let old_top = top;
            top = right.opposite();
            right = old_top.opposite();
            front = front.opposite();
        } else {
            let old_front = front;
            front = top;
            top = right;
            right = old_front;
        }
        i += 1;
    }

    // Every adjacent pair must have been reached
    let mut f = 0;
    while f < 6 {
        let mut t = 0;
        while t < 6 {
            let adjacent = f != t && OPPOSITES[f].index() != t;
            assert!(adjacent == table[f][t].is_some());
            t += 1;
        }
        f += 1;
    }

    table
};

const DEFAULT_ORIENTATIONS: [Orientation; 6] = {
    let mut table = [Orientation {
        front: Color::Red,
        top: Color::Red,
        right: Color::Red,
    }; 6];

    let mut i = 0;
    while i < Color::ALL.len() {
        let front = Color::ALL[i];
        table[i] = match Orientation::new(front, default_top(front)) {
            Some(orientation) => orientation,
            None => panic!("default top must be adjacent to front"),
        };
        i += 1;
    }

    table
};

impl Color {
    /// The color of the face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Color {
        OPPOSITES[self.index()]
    }

    /// Whether the two faces share an edge.
    #[must_use]
    pub const fn is_adjacent(self, other: Color) -> bool {
        RIGHT_OF[self.index()][other.index()].is_some()
    }
}

/// The color on the right of `front` when `top` is on top.
#[must_use]
pub const fn right_of(front: Color, top: Color) -> Option<Color> {
    RIGHT_OF[front.index()][top.index()]
}

/// A canonical top color for each front color, used whenever an orientation
/// has to be picked without user input.
#[must_use]
pub const fn default_top(front: Color) -> Color {
    match front {
        Color::White => Color::Blue,
        Color::Yellow | Color::Blue | Color::Green => Color::Red,
        Color::Red => Color::White,
        Color::Orange => Color::Green,
    }
}

/// The color found at `pose` when `front` faces the viewer and `top` is on
/// top. `None` if the pair does not describe a way to hold the cube.
#[must_use]
pub fn face_at(front: Color, top: Color, pose: FacePose) -> Option<Color> {
    Orientation::new(front, top).map(|orientation| orientation.face(pose))
}

/// A way of holding the cube, given by the front and top colors. The pair is
/// validated on construction so every pose resolves to a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orientation {
    front: Color,
    top: Color,
    right: Color,
}

impl Orientation {
    #[must_use]
    pub const fn new(front: Color, top: Color) -> Option<Self> {
        match right_of(front, top) {
            Some(right) => Some(Orientation { front, top, right }),
            None => None,
        }
    }

    /// Hold the cube with `front` facing the viewer and its default top.
    #[must_use]
    pub const fn default_for(front: Color) -> Self {
        DEFAULT_ORIENTATIONS[front.index()]
    }

    #[must_use]
    pub const fn front(&self) -> Color {
        self.front
    }

    #[must_use]
    pub const fn top(&self) -> Color {
        self.top
    }

    #[must_use]
    pub const fn face(&self, pose: FacePose) -> Color {
        match pose {
            FacePose::Front => self.front,
            FacePose::Back => self.front.opposite(),
            FacePose::Top => self.top,
            FacePose::Bottom => self.top.opposite(),
            FacePose::Right => self.right,
            FacePose::Left => self.right.opposite(),
        }
    }

    /// The orientation that brings the face at `pose` to the front, as laid
    /// out in a cube net centered on the front face: side faces keep the top,
    /// the top and bottom faces fold over the front edge and the back face
    /// hangs under the bottom face.
    #[must_use]
    pub const fn view(&self, pose: FacePose) -> Orientation {
        let (front, top, right) = match pose {
            FacePose::Front => (self.front, self.top, self.right),
            FacePose::Left => (self.right.opposite(), self.top, self.front),
            FacePose::Right => (self.right, self.top, self.front.opposite()),
            FacePose::Back => (self.front.opposite(), self.top.opposite(), self.right),
            FacePose::Top => (self.top, self.front.opposite(), self.right),
            FacePose::Bottom => (self.top.opposite(), self.front, self.right),
        };
        Orientation { front, top, right }
    }

    /// The four faces around the front, clockwise from the top.
    #[must_use]
    pub const fn ring(&self) -> [Color; 4] {
        [
            self.top,
            self.right,
            self.top.opposite(),
            self.right.opposite(),
        ]
    }
}
