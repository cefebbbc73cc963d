//! Map Renderer Module
//! Generates a standalone HTML page with the dataset, filters and legend embedded.

use super::filter::FilterOptions;
use super::gradient::{RentRange, LEGEND};
use super::template::MAP_PAGE_HTML;
use crate::data::RentRecord;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Paris center (Hôtel de Ville).
pub const PARIS_CENTER: (f64, f64) = (48.8566, 2.3522);
pub const INITIAL_ZOOM: u8 = 12;
pub const DEFAULT_OUTPUT: &str = "carte_loyers_2024.html";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to serialize map data: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("Cannot write map to {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// View settings for the generated page.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    pub title: String,
    pub center: (f64, f64),
    pub zoom: u8,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            title: "Encadrement des loyers - Paris 2024".to_string(),
            center: PARIS_CENTER,
            zoom: INITIAL_ZOOM,
        }
    }
}

/// Renders the interactive rent map.
pub struct MapRenderer;

impl MapRenderer {
    /// Build the full HTML page for `dataset`.
    pub fn render_html(
        dataset: &[RentRecord],
        settings: &MapSettings,
    ) -> Result<String, RenderError> {
        let options = FilterOptions::from_dataset(dataset);
        let range = RentRange::from_dataset(dataset);
        let legend: Vec<(String, &str)> = LEGEND
            .iter()
            .map(|(swatch, label)| (swatch.to_string(), *label))
            .collect();

        let html = fill_template(
            MAP_PAGE_HTML,
            &[
                ("__TITLE__", escape_html(&settings.title)),
                ("__CENTER_LAT__", settings.center.0.to_string()),
                ("__CENTER_LON__", settings.center.1.to_string()),
                ("__ZOOM__", settings.zoom.to_string()),
                ("__DATA__", script_json(dataset)?),
                ("__OPTIONS__", script_json(&options)?),
                ("__RANGE__", script_json(&range)?),
                ("__LEGEND__", script_json(&legend)?),
            ],
        );

        Ok(html)
    }

    /// Render and write the page to `output_path`.
    pub fn render_to_file(
        dataset: &[RentRecord],
        output_path: &Path,
        settings: &MapSettings,
    ) -> Result<PathBuf, RenderError> {
        let html = Self::render_html(dataset, settings)?;
        fs::write(output_path, html).map_err(|source| RenderError::OutputWrite {
            path: output_path.to_path_buf(),
            source,
        })?;

        log::info!(
            "Map generated: {} ({} records)",
            output_path.display(),
            dataset.len()
        );
        Ok(output_path.to_path_buf())
    }
}

/// Write the interactive map for `dataset` with the default view.
pub fn render_map(
    dataset: &[RentRecord],
    output_path: impl AsRef<Path>,
) -> Result<PathBuf, RenderError> {
    MapRenderer::render_to_file(dataset, output_path.as_ref(), &MapSettings::default())
}

/// Substitute `__TOKEN__`s in one pass; inserted values are never rescanned.
fn fill_template(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find("__") {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match values.iter().find(|(token, _)| tail.starts_with(token)) {
            Some((token, value)) => {
                out.push_str(value);
                rest = &tail[token.len()..];
            }
            None => {
                out.push_str("__");
                rest = &tail[2..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// JSON safe to inline in a `<script>` element.
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
