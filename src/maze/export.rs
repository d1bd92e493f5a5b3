//! Maze serialisation: plain text, SVG, and scene walls.
//!
//! All three emit the same wall set: the South and East wall of every cell
//! that still has it, plus the top and left borders, which no cell owns.

use std::fmt::{self, Write as _};
use std::{fs, io, path::Path};

use thiserror::Error;
use tracing::debug;

use super::grid::{Direction, MazeGrid};
use crate::world::WallSegment;

/// Drawing height of an SVG export; the width follows the grid's aspect.
pub const DEFAULT_SVG_HEIGHT: u32 = 500;

/// Blank margin around the SVG drawing.
const SVG_PADDING: u32 = 10;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl MazeGrid {
    /// Every standing wall as a scene segment, with the grid stretched over
    /// `width`×`height`.
    pub fn to_wall_segments(&self, width: f32, height: f32) -> Vec<WallSegment> {
        let sx = width / self.cols() as f32;
        let sy = height / self.rows() as f32;
        let mut walls = Vec::new();
        self.for_each_wall(sx, sy, |x1, y1, x2, y2| {
            walls.push(WallSegment::from_coords(x1, y1, x2, y2));
        });
        walls.push(WallSegment::from_coords(0.0, 0.0, width, 0.0));
        walls.push(WallSegment::from_coords(0.0, 0.0, 0.0, height));
        walls
    }

    /// South and East walls in column-major order, scaled by `sx`/`sy`.
    fn for_each_wall(&self, sx: f32, sy: f32, mut emit: impl FnMut(f32, f32, f32, f32)) {
        for col in 0..self.cols() {
            for row in 0..self.rows() {
                let Some(cell) = self.cell(col, row) else {
                    continue;
                };
                let (x, y) = (col as f32, row as f32);
                if cell.has_wall(Direction::South) {
                    emit(x * sx, (y + 1.0) * sy, (x + 1.0) * sx, (y + 1.0) * sy);
                }
                if cell.has_wall(Direction::East) {
                    emit((x + 1.0) * sx, y * sy, (x + 1.0) * sx, (y + 1.0) * sy);
                }
            }
        }
    }

    /// Text diagram, `2·rows + 1` lines of `2·cols + 1` characters.
    ///
    /// ```text
    /// +-+-+
    /// |   |
    /// + +-+
    /// | | |
    /// +-+-+
    /// ```
    pub fn to_text(&self) -> String {
        let width = 2 * self.cols() + 1;
        let mut out = String::with_capacity((width + 1) * (2 * self.rows() + 1));

        out.push('+');
        for _ in 0..self.cols() {
            out.push_str("-+");
        }
        out.push('\n');

        for row in 0..self.rows() {
            out.push('|');
            for col in 0..self.cols() {
                let east = self.cell(col, row).is_some_and(|c| c.has_wall(Direction::East));
                out.push(' ');
                out.push(if east { '|' } else { ' ' });
            }
            out.push('\n');

            out.push('+');
            for col in 0..self.cols() {
                let south = self.cell(col, row).is_some_and(|c| c.has_wall(Direction::South));
                out.push_str(if south { "-+" } else { " +" });
            }
            out.push('\n');
        }
        out
    }

    /// SVG drawing `height` units tall (plus padding).
    pub fn to_svg(&self, height: u32) -> String {
        let h = height as f32;
        let w = (h * self.cols() as f32 / self.rows() as f32).floor();
        let (sx, sy) = (w / self.cols() as f32, h / self.rows() as f32);
        let pad = SVG_PADDING as f32;

        let mut svg = String::new();
        // writing into a String cannot fail
        let _ = writeln!(svg, r#"<?xml version="1.0" encoding="utf-8"?>"#);
        let _ = writeln!(svg, r#"<svg xmlns="http://www.w3.org/2000/svg""#);
        let _ = writeln!(svg, r#"    xmlns:xlink="http://www.w3.org/1999/xlink""#);
        let _ = writeln!(
            svg,
            r#"    width="{}" height="{}" viewBox="{} {} {} {}">"#,
            w + 2.0 * pad,
            h + 2.0 * pad,
            -pad,
            -pad,
            w + 2.0 * pad,
            h + 2.0 * pad
        );
        svg.push_str("<defs>\n<style type=\"text/css\"><![CDATA[\n");
        svg.push_str("line {\n    stroke: #000000;\n    stroke-linecap: square;\n");
        svg.push_str("    stroke-width: 5;\n}\n");
        svg.push_str("]]></style>\n</defs>\n");

        self.for_each_wall(sx, sy, |x1, y1, x2, y2| {
            let _ = writeln!(svg, r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}"/>"#);
        });
        let _ = writeln!(svg, r#"<line x1="0" y1="0" x2="{w}" y2="0"/>"#);
        let _ = writeln!(svg, r#"<line x1="0" y1="0" x2="0" y2="{h}"/>"#);
        svg.push_str("</svg>\n");
        svg
    }

    /// Write [`to_svg`](Self::to_svg) with the default height to `path`.
    pub fn write_svg<P: AsRef<Path>>(&self, path: P) -> Result<(), ExportError> {
        let path = path.as_ref();
        fs::write(path, self.to_svg(DEFAULT_SVG_HEIGHT))?;
        debug!(path = %path.display(), "maze svg written");
        Ok(())
    }
}

impl fmt::Display for MazeGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn maze(cols: usize, rows: usize, seed: u64) -> MazeGrid {
        MazeGrid::generated(cols, rows, (0, 0), &mut StdRng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn corridor_text_is_exact() {
        // one row of two cells has exactly one possible maze
        assert_eq!(maze(2, 1, 0).to_text(), "+-+-+\n|   |\n+-+-+\n");
        // one column of two cells
        assert_eq!(maze(1, 2, 0).to_text(), "+-+\n| |\n+ +\n| |\n+-+\n");
    }

    #[test]
    fn two_by_two_text_is_five_by_five() {
        for seed in 0..10 {
            let m = maze(2, 2, seed);
            let text = m.to_text();
            let lines: Vec<&str> = text.lines().collect();
            assert_eq!(lines.len(), 5);
            assert!(lines.iter().all(|l| l.chars().count() == 5));
            assert_eq!(lines[0], "+-+-+");
            assert_eq!(lines[4], "+-+-+");
            for wall_line in [lines[1], lines[3]] {
                assert!(wall_line.starts_with('|') && wall_line.ends_with('|'));
            }
            for floor_line in [lines[2], lines[4]] {
                assert!(floor_line.starts_with('+') && floor_line.ends_with('+'));
            }
            // openings: interior east walls (col 3) + interior south wall gaps (row 2)
            let openings = [lines[1], lines[3]]
                .iter()
                .filter(|l| l.as_bytes()[2] == b' ')
                .count()
                + lines[2].bytes().filter(|&b| b == b' ').count();
            assert_eq!(openings, 3, "seed {seed}: {text}");
            assert_eq!(m.to_string(), text);
        }
    }

    #[test]
    fn wall_segments_cover_what_is_standing() {
        let m = maze(6, 5, 9);
        let walls = m.to_wall_segments(600.0, 500.0);
        // 2 walls per cell, minus carved passages, plus 2 borders
        assert_eq!(walls.len(), 2 * 30 - 29 + 2);
        // the outer right border is always present
        assert!(walls.contains(&WallSegment::from_coords(600.0, 0.0, 600.0, 100.0)));
        assert!(walls.contains(&WallSegment::from_coords(0.0, 0.0, 600.0, 0.0)));
    }

    #[test]
    fn svg_has_one_line_per_wall() {
        let m = maze(4, 4, 5);
        let svg = m.to_svg(DEFAULT_SVG_HEIGHT);
        assert!(svg.starts_with("<?xml"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("stroke-width: 5;"));
        assert!(svg.contains(r#"width="520" height="520" viewBox="-10 -10 520 520""#));
        let lines = svg.matches("<line ").count();
        assert_eq!(lines, m.to_wall_segments(500.0, 500.0).len());
        assert!(svg.contains(r#"<line x1="0" y1="0" x2="500" y2="0"/>"#));
    }

    #[test]
    fn svg_width_follows_aspect() {
        let svg = maze(3, 2, 1).to_svg(500);
        assert!(svg.contains(r#"width="770" height="520""#));
    }

    #[test]
    fn writes_svg_to_disk() {
        let m = maze(5, 3, 2);
        let tmp = tempfile::NamedTempFile::new().expect("tempfile");
        m.write_svg(tmp.path()).unwrap();
        let written = std::fs::read_to_string(tmp.path()).unwrap();
        assert_eq!(written, m.to_svg(DEFAULT_SVG_HEIGHT));
    }

    #[test]
    fn write_to_missing_dir_is_an_error() {
        let m = maze(2, 2, 0);
        let dir = tempfile::tempdir().unwrap();
        let err = m.write_svg(dir.path().join("nope").join("maze.svg")).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
