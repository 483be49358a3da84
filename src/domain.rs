//! The domain module encapsulates the core business logic. It defines the `Robot` entity and the
//! kinematic rules governing its pose.
//!
//! The module performs no I/O; reporting a state change is the caller's concern. This keeps the
//! kinematics testable without capturing output streams.

mod basis;
mod robot;

pub use basis::{Angle, Distance, Position};
pub use robot::Robot;
