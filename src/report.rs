use std::{error::Error, io::Write};

use log::debug;

use crate::math::circle::Circle;

pub const BANNER: [&str; 3] = [
    "--- Python Build Script ---",
    "--- This is v.3 ---",
    "--- Auto building SCM Pooling  ---",
];

/// Radius of the circle reported by the binary.
pub const RADIUS: f64 = 5.0;

/// The console report for one circle: the banner, then the radius and the area.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    circle: &'a Circle,
}

impl<'a> Report<'a> {
    pub fn new(circle: &'a Circle) -> Report<'a> {
        Report { circle }
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = BANNER.iter().map(|s| s.to_string()).collect();
        lines.push(format!("Radius: {}", self.circle.radius()));
        lines.push(format!(
            "The area of the circle is: {:.2}",
            self.circle.area()
        ));
        lines
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

/// Compute the circle of radius [`RADIUS`] and write its report to `out`.
pub fn run<W: Write>(out: &mut W) -> Result<(), Box<dyn Error>> {
    let circle = Circle::new(RADIUS)?;
    debug!("Computed circle {}", circle);
    Report::new(&circle).write_to(out)?;
    out.flush()?;
    Ok(())
}
