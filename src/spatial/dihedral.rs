//! The eight symmetries of the square and a shared orientation search
//!
//! Tiles and rasters both expose a clockwise quarter turn and a horizontal
//! mirror. Walking "rotate, rotate, rotate, mirror, rotate, rotate, rotate"
//! visits every element of the dihedral group exactly once, so the same
//! search serves tile placement and motif scanning.

use ndarray::{Array2, s};
use std::fmt;

/// Objects that can be turned and mirrored in place
pub trait Transformable {
    /// Rotate a quarter turn clockwise
    fn rotate_cw(&mut self);

    /// Mirror left to right
    fn mirror_horizontal(&mut self);
}

/// A single move along the orientation walk
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Quarter turn clockwise
    Rotate,
    /// Left-right mirror
    Mirror,
}

/// Moves visiting all eight orientations when applied one at a time
pub const ORIENTATION_WALK: [Step; 7] = [
    Step::Rotate,
    Step::Rotate,
    Step::Rotate,
    Step::Mirror,
    Step::Rotate,
    Step::Rotate,
    Step::Rotate,
];

/// An element of the dihedral group of the square
///
/// Read as "rotate `quarter_turns` times clockwise, then mirror if
/// `mirrored`", relative to whatever state the object started in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Orientation {
    /// Clockwise quarter turns (0-3)
    pub quarter_turns: u8,
    /// Left-right mirror applied after the turns
    pub mirrored: bool,
}

impl Orientation {
    /// No transformation
    pub const IDENTITY: Self = Self {
        quarter_turns: 0,
        mirrored: false,
    };

    /// Every orientation, rotations first
    pub const ALL: [Self; 8] = [
        Self::new(0, false),
        Self::new(1, false),
        Self::new(2, false),
        Self::new(3, false),
        Self::new(0, true),
        Self::new(1, true),
        Self::new(2, true),
        Self::new(3, true),
    ];

    /// Build an orientation, reducing turns modulo four
    pub const fn new(quarter_turns: u8, mirrored: bool) -> Self {
        Self {
            quarter_turns: quarter_turns & 3,
            mirrored,
        }
    }

    /// Orientation after one more step
    ///
    /// A turn after a mirror equals a mirror after the opposite turn, which
    /// keeps the "turns then mirror" normal form.
    #[must_use]
    pub const fn then(self, step: Step) -> Self {
        match step {
            Step::Rotate if self.mirrored => Self::new(self.quarter_turns.wrapping_sub(1), true),
            Step::Rotate => Self::new(self.quarter_turns + 1, false),
            Step::Mirror => Self::new(self.quarter_turns, !self.mirrored),
        }
    }

    /// Apply this orientation to an object
    pub fn apply<T: Transformable + ?Sized>(self, subject: &mut T) {
        for _ in 0..self.quarter_turns {
            subject.rotate_cw();
        }
        if self.mirrored {
            subject.mirror_horizontal();
        }
    }

    /// Apply this orientation to a pixel array, returning a new array
    pub fn apply_to_array<T: Clone>(self, array: &Array2<T>) -> Array2<T> {
        let mut result = array.clone();
        for _ in 0..self.quarter_turns {
            result = rotate_array_cw(&result);
        }
        if self.mirrored {
            result = mirror_array(&result);
        }
        result
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", u16::from(self.quarter_turns) * 90)?;
        if self.mirrored {
            f.write_str(" mirrored")?;
        }
        Ok(())
    }
}

/// Walk the eight orientations until `accept` holds
///
/// The predicate is tested before the first move and after each of the seven
/// moves. On success the subject is left in the accepted orientation and that
/// orientation (relative to the starting state) is returned. On failure the
/// subject is left in the last visited orientation.
pub fn find_orientation<T, F>(subject: &mut T, mut accept: F) -> Option<Orientation>
where
    T: Transformable + ?Sized,
    F: FnMut(&T) -> bool,
{
    let mut orientation = Orientation::IDENTITY;
    if accept(&*subject) {
        return Some(orientation);
    }

    for step in ORIENTATION_WALK {
        match step {
            Step::Rotate => subject.rotate_cw(),
            Step::Mirror => subject.mirror_horizontal(),
        }
        orientation = orientation.then(step);
        if accept(&*subject) {
            return Some(orientation);
        }
    }

    None
}

/// Rotate a 2-D array a quarter turn clockwise
///
/// `new[y][x] = old[rows - 1 - x][y]`
pub fn rotate_array_cw<T: Clone>(array: &Array2<T>) -> Array2<T> {
    array.t().slice(s![.., ..;-1]).to_owned()
}

/// Mirror a 2-D array left to right
pub fn mirror_array<T: Clone>(array: &Array2<T>) -> Array2<T> {
    array.slice(s![.., ..;-1]).to_owned()
}
