//! Static SVG export of a frame.
//!
//! The document's viewBox is the domain bounds, so world coordinates are
//! written unchanged. Layers, bottom to top: background rectangle,
//! trails, agent glyphs, beacon markers. The parameters in effect are
//! embedded as a JSON comment so an exported image records how it was
//! made.

use std::error::Error;
use std::fmt::{self, Write as _};
use std::io;
use std::path::{Path, PathBuf};

use flock_core::angle::to_degrees;
use flock_core::Bounds;
use flock_engine::Snapshot;
use serde_json::Value;
use tracing::info;

use crate::settings::params_object;
use crate::trail::TrailBook;

/// Outline of an agent glyph, pointing along +x, before scaling.
pub const AGENT_GLYPH: &str = "M 1 0 L -2 -1 L -1 0 L -2 1 z";

/// Stroke width of trail lines, in world units.
pub const TRAIL_WIDTH: f64 = 0.2;

// ── ExportError ────────────────────────────────────────────────────

/// Errors from rendering or writing an export.
#[derive(Debug)]
pub enum ExportError {
    /// Writing the file failed.
    Io {
        /// Destination file.
        path: PathBuf,
        /// Underlying error.
        source: io::Error,
    },
    /// Formatting the document failed.
    Format(fmt::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Format(e) => write!(f, "formatting SVG: {e}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Format(e) => Some(e),
        }
    }
}

impl From<fmt::Error> for ExportError {
    fn from(e: fmt::Error) -> Self {
        Self::Format(e)
    }
}

// ── SvgExporter ────────────────────────────────────────────────────

/// Renders snapshots to SVG text.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgExporter {
    /// Region shown; becomes the viewBox.
    pub bounds: Bounds,
    /// Physical document width, e.g. `"841mm"`.
    pub width: String,
    /// Physical document height, e.g. `"1189mm"`.
    pub height: String,
    /// Background fill.
    pub background: String,
    /// Radius of beacon markers. Zero hides them.
    pub beacon_radius: f64,
    /// Decimal places for every coordinate.
    pub precision: usize,
}

impl Default for SvgExporter {
    fn default() -> Self {
        Self::new(Bounds::default())
    }
}

impl SvgExporter {
    /// Exporter for `bounds` at A0 size with five-decimal coordinates.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            width: "841mm".to_string(),
            height: "1189mm".to_string(),
            background: "#111".to_string(),
            beacon_radius: 1.0,
            precision: 5,
        }
    }

    /// Suggested file name for an export made at `timestamp_ms`.
    pub fn file_name(timestamp_ms: u128) -> String {
        format!("flock-path-{timestamp_ms}.svg")
    }

    fn num(&self, v: f64) -> String {
        format!("{v:.prec$}", prec = self.precision)
    }

    /// Render `snapshot` with `trails` to an SVG document.
    pub fn render(&self, snapshot: &Snapshot, trails: &TrailBook) -> Result<String, ExportError> {
        let b = &self.bounds;
        let mut out = String::new();
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}" width="{}" height="{}">"#,
            self.num(b.min.x),
            self.num(b.min.y),
            self.num(b.width()),
            self.num(b.height()),
            self.width,
            self.height,
        )?;
        writeln!(
            out,
            r#"<rect id="bg" x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            self.num(b.min.x),
            self.num(b.min.y),
            self.num(b.width()),
            self.num(b.height()),
            self.background,
        )?;

        writeln!(out, r#"<g id="trails">"#)?;
        for agent in &snapshot.agents {
            let Some(points) = trails.get(agent.id) else {
                continue;
            };
            let mut points = points.iter();
            let Some(first) = points.next() else {
                continue;
            };
            write!(out, r#"<path class="trail" d="M {} {}"#, self.num(first.x), self.num(first.y))?;
            for p in points {
                write!(out, " L {} {}", self.num(p.x), self.num(p.y))?;
            }
            writeln!(
                out,
                r#"" stroke="{}" fill="none" stroke-width="{TRAIL_WIDTH}"/>"#,
                agent.tint
            )?;
        }
        writeln!(out, "</g>")?;

        writeln!(out, r#"<g id="world">"#)?;
        for agent in &snapshot.agents {
            writeln!(
                out,
                r#"<g class="agent" transform="translate({} {}) rotate({}) scale({})"><path class="body" d="{AGENT_GLYPH}" fill="{}" stroke="black" stroke-width="0"/></g>"#,
                self.num(agent.position.x),
                self.num(agent.position.y),
                self.num(to_degrees(agent.heading)),
                self.num(agent.size),
                agent.tint,
            )?;
        }
        for beacon in &snapshot.beacons {
            writeln!(
                out,
                r#"<circle class="beacon" cx="{}" cy="{}" r="{}"/>"#,
                self.num(beacon.position.x),
                self.num(beacon.position.y),
                self.num(self.beacon_radius),
            )?;
        }
        writeln!(out, "</g>")?;

        let params = Value::Object(params_object(snapshot.params.iter()));
        writeln!(out, "<!--{params}-->")?;
        writeln!(out, "</svg>")?;
        Ok(out)
    }

    /// Render and write to `path`.
    pub fn write(
        &self,
        path: impl AsRef<Path>,
        snapshot: &Snapshot,
        trails: &TrailBook,
    ) -> Result<(), ExportError> {
        let path = path.as_ref();
        let svg = self.render(snapshot, trails)?;
        std::fs::write(path, &svg).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            path = %path.display(),
            agents = snapshot.agents.len(),
            bytes = svg.len(),
            "svg exported"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flock_core::{AgentId, BeaconId, DVec2, FlockParams, Hsl, TickId};
    use flock_engine::{AgentView, BeaconView};
    use std::f64::consts::PI;

    fn snapshot() -> Snapshot {
        Snapshot {
            ticks: 1,
            time: TickId(2),
            params: FlockParams::default(),
            agents: vec![AgentView {
                id: AgentId::new(0, 0),
                position: DVec2::new(1.5, -2.0),
                heading: PI / 2.0,
                size: 0.75,
                beacon: BeaconId(0),
                tint: Hsl {
                    hue: 120.0,
                    saturation: 50.0,
                    lightness: 80.0,
                },
            }],
            beacons: vec![BeaconView {
                id: BeaconId(0),
                position: DVec2::new(10.0, 20.0),
                hue: 0.0,
            }],
        }
    }

    #[test]
    fn header_uses_bounds_and_physical_size() {
        let svg = SvgExporter::default()
            .render(&snapshot(), &TrailBook::new())
            .unwrap();
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"viewBox="-148.50000 -105.00000 297.00000 210.00000""#));
        assert!(svg.contains(r#"width="841mm" height="1189mm""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn agent_glyph_is_transformed() {
        let svg = SvgExporter::default()
            .render(&snapshot(), &TrailBook::new())
            .unwrap();
        assert!(svg.contains(
            "translate(1.50000 -2.00000) rotate(90.00000) scale(0.75000)"
        ));
        assert!(svg.contains(AGENT_GLYPH));
        assert!(svg.contains(r#"fill="hsl(120.00000,50.00000%,80.00000%)""#));
    }

    #[test]
    fn trails_and_beacons_are_drawn() {
        let mut snap = snapshot();
        let mut trails = TrailBook::new();
        trails.record(&snap);
        snap.agents[0].position = DVec2::new(2.5, -2.0);
        trails.record(&snap);
        let svg = SvgExporter::default().render(&snap, &trails).unwrap();
        assert!(svg.contains(r#"d="M 1.50000 -2.00000 L 2.50000 -2.00000""#));
        assert!(svg.contains(r#"stroke-width="0.2""#));
        assert!(svg.contains(r#"<circle class="beacon" cx="10.00000" cy="20.00000""#));
    }

    #[test]
    fn configuration_is_embedded_as_comment() {
        let svg = SvgExporter::default()
            .render(&snapshot(), &TrailBook::new())
            .unwrap();
        let start = svg.find("<!--").unwrap() + 4;
        let end = svg.find("-->").unwrap();
        let value: Value = serde_json::from_str(&svg[start..end]).unwrap();
        assert_eq!(value["LOOK_RADIUS"], Value::from(20.0));
        assert_eq!(value.as_object().unwrap().len(), 12);
    }

    #[test]
    fn precision_is_configurable() {
        let exporter = SvgExporter {
            precision: 1,
            ..SvgExporter::default()
        };
        let svg = exporter.render(&snapshot(), &TrailBook::new()).unwrap();
        assert!(svg.contains("translate(1.5 -2.0)"));
    }

    #[test]
    fn file_name_embeds_timestamp() {
        assert_eq!(SvgExporter::file_name(1700), "flock-path-1700.svg");
    }
}
