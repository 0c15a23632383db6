//! Leaflet HTML marker map.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use super::MapRenderer;
use crate::error::{Result, TourError};
use crate::models::{validate_points, Point};

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const DEFAULT_ZOOM: u8 = 2;

/// Writes a self-contained HTML page with one marker per point.
///
/// Markers only: the route between points is not drawn.
///
/// # Examples
///
/// ```
/// use nn_tour::models::Point;
/// use nn_tour::render::HtmlMapRenderer;
///
/// let renderer = HtmlMapRenderer::new("map.html");
/// let html = renderer
///     .to_html(&[Point::new("A", 1.0, 2.0), Point::new("B", 3.0, 4.0)])
///     .unwrap();
/// assert_eq!(html.matches("L.marker(").count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct HtmlMapRenderer {
    path: PathBuf,
    title: String,
    zoom: u8,
}

impl HtmlMapRenderer {
    /// Creates a renderer that writes to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            title: "Nearest-neighbor tour".to_string(),
            zoom: DEFAULT_ZOOM,
        }
    }

    /// Sets the page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial zoom level.
    pub fn with_zoom(mut self, zoom: u8) -> Self {
        self.zoom = zoom;
        self
    }

    /// Output file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Builds the HTML document without touching the filesystem.
    pub fn to_html(&self, points: &[Point]) -> Result<String> {
        if points.is_empty() {
            return Err(TourError::EmptyInput);
        }
        validate_points(points)?;
        let n = points.len() as f64;
        let center_lat = points.iter().map(Point::lat).sum::<f64>() / n;
        let center_lon = points.iter().map(Point::lon).sum::<f64>() / n;

        let markers: String = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                format!(
                    "      L.marker([{lat}, {lon}]).addTo(map).bindPopup(\"{step}. {name}<br>{lat}, {lon}\");\n",
                    lat = p.lat(),
                    lon = p.lon(),
                    step = i + 1,
                    name = escape(p.name()),
                )
            })
            .collect();

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <title>{title}</title>
    <link rel="stylesheet" href="{css}">
    <script src="{js}"></script>
    <style>html, body, #map {{ height: 100%; margin: 0; }}</style>
  </head>
  <body>
    <div id="map"></div>
    <script>
      var map = L.map('map').setView([{center_lat}, {center_lon}], {zoom});
      L.tileLayer('{tiles}', {{ maxZoom: 19 }}).addTo(map);
{markers}    </script>
  </body>
</html>
"#,
            title = escape(&self.title),
            css = LEAFLET_CSS,
            js = LEAFLET_JS,
            zoom = self.zoom,
            tiles = TILE_URL,
        ))
    }
}

impl MapRenderer for HtmlMapRenderer {
    fn render(&self, points: &[Point]) -> Result<()> {
        let html = self.to_html(points)?;
        fs::write(&self.path, html)?;
        info!(
            "wrote map with {} markers to {}",
            points.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Escapes text for use inside both HTML and a double-quoted JS string.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '\\' => out.push_str("\\\\"),
            '\n' | '\r' => out.push(' '),
            _ => out.push(c),
        }
    }
    out
}
