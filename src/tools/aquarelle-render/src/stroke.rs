// SPDX-License-Identifier: GPL-3.0-or-later
use anyhow::{anyhow, bail, Context, Result};
use aqcore::brush::Brush;
use aqcore::paint::{Point, Surface};
use tracing::debug;

/// A polyline given on the command line as `x,y;x,y;...`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stroke {
    pub points: Vec<Point>,
}

fn parse_point(s: &str) -> Result<Point> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("point '{s}' must be given as X,Y"))?;
    let x = x.trim().parse().with_context(|| format!("bad x coordinate in '{s}'"))?;
    let y = y.trim().parse().with_context(|| format!("bad y coordinate in '{s}'"))?;
    Ok(Point::new(x, y))
}

impl Stroke {
    pub fn parse(s: &str) -> Result<Stroke> {
        let points = s
            .split(';')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(parse_point)
            .collect::<Result<Vec<_>>>()
            .with_context(|| format!("invalid stroke '{s}'"))?;
        if points.is_empty() {
            bail!("stroke '{s}' has no points");
        }
        Ok(Stroke { points })
    }

    /// Paint this stroke. The first point starts the stroke.
    pub fn paint(&self, brush: &mut dyn Brush, surface: &mut Surface) {
        let (first, rest) = match self.points.split_first() {
            Some(split) => split,
            None => return,
        };
        debug!("Painting stroke of {} points", self.points.len());
        brush.draw_point(surface, *first, 1.0);
        for p in rest {
            brush.draw_line_to(surface, *p, 1.0);
        }
        brush.end_stroke();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let s = Stroke::parse("10,10; 10,110;-5, 3;").unwrap();
        assert_eq!(
            s.points,
            vec![Point::new(10, 10), Point::new(10, 110), Point::new(-5, 3)]
        );
        assert!(Stroke::parse("").is_err());
        assert!(Stroke::parse("10").is_err());
        assert!(Stroke::parse("1,a").is_err());
    }
}
