//! OBJ reader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use glam::{DVec2, DVec3};
use tracing::{debug, info, warn};

use super::{ObjImport, ObjWarning, ObjWarningKind};
use crate::error::ImportError;
use crate::mesh::{face_defect, FaceDefect, Mesh};

/// Statements that are valid OBJ but carry nothing the mesh stores.
const IGNORED_KEYWORDS: &[&str] = &["o", "g", "s", "mtllib", "usemtl", "l", "p"];

/// Opens and imports an OBJ file.
///
/// # Errors
///
/// [`ImportError::Open`] if the file cannot be opened and
/// [`ImportError::Read`] if reading fails midway. Malformed lines are not
/// errors; see [`ObjImport::diagnostics`].
pub fn import_obj(path: impl AsRef<Path>) -> Result<ObjImport, ImportError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ImportError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let import = read_obj(BufReader::new(file))?;
    info!(
        path = %path.display(),
        vertices = import.mesh.vertex_count(),
        faces = import.mesh.face_count(),
        skipped = import.diagnostics.len(),
        "Imported OBJ file"
    );
    Ok(import)
}

/// Imports OBJ records from a buffered stream.
///
/// Lines are read as bytes so that one line of invalid UTF-8 is reported
/// and skipped instead of failing the whole read.
pub fn read_obj<R: BufRead>(mut reader: R) -> Result<ObjImport, ImportError> {
    let mut parser = ObjParser::default();
    let mut buf = Vec::new();
    let mut line_number = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;
        match std::str::from_utf8(&buf) {
            Ok(line) => parser.parse_line(line_number, line),
            Err(_) => {
                let lossy = String::from_utf8_lossy(&buf);
                parser.skip(line_number, strip_terminator(&lossy), ObjWarningKind::InvalidUtf8);
            }
        }
    }
    Ok(parser.finish())
}

/// Imports OBJ records from text already in memory.
pub fn parse_obj(source: &str) -> ObjImport {
    let mut parser = ObjParser::default();
    for (index, line) in source.lines().enumerate() {
        parser.parse_line(index + 1, line);
    }
    parser.finish()
}

/// Fan-triangulates a polygon from its first corner:
/// `(c0, ck, ck+1)` for `k` in `1..n-1`.
///
/// A triangle comes through unchanged and a quad splits into
/// `(c0, c1, c2)` and `(c0, c2, c3)`. Fewer than three corners yield
/// nothing.
pub fn triangulate_polygon(corners: &[u32]) -> impl Iterator<Item = [u32; 3]> + '_ {
    let first = corners.first().copied().unwrap_or_default();
    corners
        .windows(2)
        .skip(1)
        .map(move |pair| [first, pair[0], pair[1]])
}

// =============================================================================
// FACE CORNERS
// =============================================================================

/// One corner of an `f` record, with indices converted to 0-based.
///
/// Accepts `v`, `v/vt`, `v/vt/vn` and `v//vn`. Index `0`, negative
/// (relative) indices and more than three fields are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceCorner {
    pub position: u32,
    pub texcoord: Option<u32>,
    pub normal: Option<u32>,
}

impl FromStr for FaceCorner {
    type Err = ObjWarningKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ObjWarningKind::InvalidCorner {
            token: s.to_string(),
        };

        let mut fields = s.split('/');
        let position = fields.next().and_then(parse_index).ok_or_else(invalid)?;
        let texcoord = optional_index(fields.next()).ok_or_else(invalid)?;
        let normal = optional_index(fields.next()).ok_or_else(invalid)?;
        if fields.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            position,
            texcoord,
            normal,
        })
    }
}

/// 1-based index text to a 0-based index.
fn parse_index(token: &str) -> Option<u32> {
    match token.parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(index) => Some(index - 1),
    }
}

/// `None` on a malformed index; `Some(None)` for an absent or empty field.
fn optional_index(field: Option<&str>) -> Option<Option<u32>> {
    match field {
        None | Some("") => Some(None),
        Some(token) => parse_index(token).map(Some),
    }
}

// =============================================================================
// PARSER STATE
// =============================================================================

/// A triangle that referenced a vertex not yet declared when its line was
/// read. Checked again once the whole file is in.
struct ForwardFace {
    position: usize,
    line: usize,
    text: String,
}

#[derive(Default)]
struct ObjParser {
    vertices: Vec<DVec3>,
    texture_coords: Vec<DVec2>,
    normals: Vec<DVec3>,
    faces: Vec<[u32; 3]>,
    forward: Vec<ForwardFace>,
    diagnostics: Vec<ObjWarning>,
}

impl ObjParser {
    fn parse_line(&mut self, number: usize, line: &str) {
        let line = strip_terminator(line);
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return;
        }

        let mut fields = trimmed.split_whitespace();
        let Some(keyword) = fields.next() else {
            return;
        };
        let values: Vec<&str> = fields.collect();

        let outcome = match keyword {
            "v" => self.parse_vertex(&values),
            "vt" => self.parse_texture_coord(&values),
            "vn" => self.parse_normal(&values),
            "f" => self.parse_face(number, line, &values),
            _ if IGNORED_KEYWORDS.contains(&keyword) => {
                debug!(line = number, keyword, "ignoring OBJ statement");
                Ok(())
            }
            _ => Err(ObjWarningKind::UnknownKeyword {
                keyword: keyword.to_string(),
            }),
        };

        if let Err(kind) = outcome {
            self.skip(number, line, kind);
        }
    }

    /// `v x y z [w]`. Anything longer, including the six-value
    /// `v x y z r g b` colour extension, is skipped with a diagnostic.
    /// Later faces keep their file indices, so they may then point one
    /// vertex past the intended one or fall out of range.
    fn parse_vertex(&mut self, values: &[&str]) -> Result<(), ObjWarningKind> {
        let [x, y, z] = parse_floats::<3>("v", values, 3..=4, "3 or 4")?;
        self.vertices.push(DVec3::new(x, y, z));
        Ok(())
    }

    fn parse_texture_coord(&mut self, values: &[&str]) -> Result<(), ObjWarningKind> {
        let [u, v] = parse_floats::<2>("vt", values, 2..=3, "2 or 3")?;
        self.texture_coords.push(DVec2::new(u, v));
        Ok(())
    }

    fn parse_normal(&mut self, values: &[&str]) -> Result<(), ObjWarningKind> {
        let [i, j, k] = parse_floats::<3>("vn", values, 3..=3, "3")?;
        self.normals.push(DVec3::new(i, j, k));
        Ok(())
    }

    fn parse_face(&mut self, number: usize, line: &str, values: &[&str]) -> Result<(), ObjWarningKind> {
        if values.len() < 3 {
            return Err(ObjWarningKind::FieldCount {
                keyword: "f".to_string(),
                expected: "at least 3".to_string(),
                found: values.len(),
            });
        }

        let corners = values
            .iter()
            .map(|token| token.parse::<FaceCorner>().map(|corner| corner.position))
            .collect::<Result<Vec<u32>, _>>()?;

        let declared = self.vertices.len();
        for triangle in triangulate_polygon(&corners) {
            if let Some(FaceDefect::Degenerate) = face_defect(triangle, usize::MAX) {
                self.skip(
                    number,
                    line,
                    ObjWarningKind::DegenerateFace {
                        corners: triangle.map(|index| index + 1),
                    },
                );
                continue;
            }
            if triangle.iter().any(|&index| index as usize >= declared) {
                self.forward.push(ForwardFace {
                    position: self.faces.len(),
                    line: number,
                    text: line.to_string(),
                });
            }
            self.faces.push(triangle);
        }
        Ok(())
    }

    fn skip(&mut self, line: usize, text: &str, kind: ObjWarningKind) {
        warn!(line, text, reason = %kind, "skipping OBJ line");
        self.diagnostics.push(ObjWarning {
            line,
            text: text.to_string(),
            kind,
        });
    }

    fn finish(mut self) -> ObjImport {
        let vertex_count = self.vertices.len();
        let mut dropped = Vec::new();
        for forward in std::mem::take(&mut self.forward) {
            let triangle = self.faces[forward.position];
            if let Some(FaceDefect::OutOfRange(index)) = face_defect(triangle, vertex_count) {
                dropped.push(forward.position);
                self.skip(
                    forward.line,
                    &forward.text,
                    ObjWarningKind::IndexOutOfRange {
                        index: index + 1,
                        vertex_count,
                    },
                );
            }
        }

        if !dropped.is_empty() {
            let mut position = 0;
            let mut next_drop = dropped.iter().peekable();
            self.faces.retain(|_| {
                let keep = next_drop.peek() != Some(&&position);
                if !keep {
                    next_drop.next();
                }
                position += 1;
                keep
            });
        }
        self.diagnostics.sort_by_key(|warning| warning.line);

        debug!(
            vertices = vertex_count,
            faces = self.faces.len(),
            texture_coords = self.texture_coords.len(),
            normals = self.normals.len(),
            skipped = self.diagnostics.len(),
            "parsed OBJ records"
        );

        ObjImport {
            mesh: Mesh::from_trusted_parts(self.vertices, self.faces),
            texture_coords: self.texture_coords,
            normals: self.normals,
            diagnostics: self.diagnostics,
        }
    }
}

/// Parses `values` as floats, keeping the first `N`.
fn parse_floats<const N: usize>(
    keyword: &str,
    values: &[&str],
    accepted: std::ops::RangeInclusive<usize>,
    expected: &str,
) -> Result<[f64; N], ObjWarningKind> {
    if !accepted.contains(&values.len()) {
        return Err(ObjWarningKind::FieldCount {
            keyword: keyword.to_string(),
            expected: expected.to_string(),
            found: values.len(),
        });
    }

    let mut out = [0.0; N];
    for (slot, token) in out.iter_mut().zip(values) {
        *slot = parse_float(token)?;
    }
    // Trailing optional values (w) must still be numbers.
    for token in &values[N..] {
        parse_float(token)?;
    }
    Ok(out)
}

fn parse_float(token: &str) -> Result<f64, ObjWarningKind> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ObjWarningKind::InvalidNumber {
            token: token.to_string(),
        }),
    }
}

fn strip_terminator(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}
