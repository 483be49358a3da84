//! Point-mass robot with a 2D pose.

use nalgebra::{Rotation2, Vector2};

use super::{Angle, Distance, Position};

/// A robot reduced to its pose: a position in the plane and a heading.
///
/// Both operations are pure and return the successor robot; no operation can fail. Non-finite
/// inputs are not rejected and propagate into the pose. The type carries no synchronization:
/// callers sharing a robot across threads must guard it externally.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Robot {
    position: Position,
    heading: Angle,
}

impl Robot {
    pub const fn new(position: Position, heading: Angle) -> Self {
        Self { position, heading }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Angle {
        self.heading
    }

    /// Travels `distance` along the current heading. The heading is unchanged.
    pub fn moved(&self, distance: Distance) -> Robot {
        let step = Rotation2::new(Into::<f64>::into(self.heading))
            * Vector2::new(Into::<f64>::into(distance), 0.0);

        Robot {
            position: self.position + Position::new(step.x, step.y),
            heading: self.heading,
        }
    }

    /// Adds `change` to the heading. The position is unchanged.
    ///
    /// The heading is not wrapped into [0, 2π); repeated rotations accumulate without bound.
    pub fn rotated(&self, change: Angle) -> Robot {
        Robot {
            position: self.position,
            heading: self.heading + change,
        }
    }
}
