//! Scripted demonstration drive.
//!
//! Runs a fixed sequence of steps against a robot starting at the origin and reports every state
//! change. This is the illustrative driver, not part of the reusable core.

use std::io::Write;

use crate::{
    domain::{Angle, Distance, Position, Robot},
    reporter::{ReportError, Reporter},
};

const BANNER: &str = "Point robot example";

const SCRIPT: [Step; 2] = [
    Step::Move(Distance::new(1.0)),
    Step::Rotate(Angle::new(0.5)),
];

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
enum Step {
    Move(Distance),
    Rotate(Angle),
}

pub fn run<W: Write>(out: W) -> Result<(), ReportError> {
    let mut reporter = Reporter::new(out);
    reporter.banner(BANNER)?;

    let mut robot = Robot::new(Position::new(0.0, 0.0), Angle::new(0.0));
    for step in SCRIPT {
        robot = match step {
            Step::Move(distance) => {
                let robot = robot.moved(distance);
                reporter.moved(&robot)?;
                robot
            }
            Step::Rotate(change) => {
                let robot = robot.rotated(change);
                reporter.rotated(&robot)?;
                robot
            }
        };
    }

    Ok(())
}
