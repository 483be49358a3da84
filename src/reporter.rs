//! Console reporting of robot state changes.
//!
//! The domain operations are pure; this module is the side-effecting half. Each state change is
//! reported as one plain-text line using the default decimal formatting of `f64` (no fixed width,
//! no explicit precision).

use std::io::Write;

use thiserror::Error;

use crate::domain::Robot;

pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn banner(&mut self, text: &str) -> Result<(), ReportError> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    pub fn moved(&mut self, robot: &Robot) -> Result<(), ReportError> {
        writeln!(
            self.out,
            "Robot moved to ({}, {})",
            robot.position().x(),
            robot.position().y()
        )?;
        Ok(())
    }

    pub fn rotated(&mut self, robot: &Robot) -> Result<(), ReportError> {
        writeln!(
            self.out,
            "Robot rotated to {} radians",
            Into::<f64>::into(robot.heading())
        )?;
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to write status line: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::{Angle, Distance, Robot};

    fn report<F>(emit: F) -> String
    where
        F: FnOnce(&mut Reporter<&mut Vec<u8>>) -> Result<(), ReportError>,
    {
        let mut buffer = Vec::new();
        let mut reporter = Reporter::new(&mut buffer);
        emit(&mut reporter).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_reporter_banner() {
        let output = report(|r| r.banner("Point robot example"));
        assert_eq!(output, "Point robot example\n");
    }

    #[test]
    fn test_reporter_moved() {
        let robot = Robot::default().moved(Distance::new(1.0));
        let output = report(|r| r.moved(&robot));
        assert_eq!(output, "Robot moved to (1, 0)\n");
    }

    #[test]
    fn test_reporter_rotated() {
        let robot = Robot::default().rotated(Angle::new(0.5));
        let output = report(|r| r.rotated(&robot));
        assert_eq!(output, "Robot rotated to 0.5 radians\n");
    }

    #[test]
    fn test_reporter_rotated_negative() {
        let robot = Robot::default().rotated(Angle::new(-0.25));
        let output = report(|r| r.rotated(&robot));
        assert_eq!(output, "Robot rotated to -0.25 radians\n");
    }
}
