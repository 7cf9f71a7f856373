use std::fmt;

use crate::error::{AppError, Result};

const IMAGE_CDN: &str = "https://cdn.sanity.io/images";

/// Display URL for a stored image asset.
///
/// Asset references look like `image-<id>-<W>x<H>-<ext>`; the URL is
/// `https://cdn.sanity.io/images/<project>/<dataset>/<id>-<W>x<H>.<ext>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrl {
    project_id: String,
    dataset: String,
    asset_id: String,
    dimensions: String,
    format: String,
    width: Option<u32>,
    height: Option<u32>,
}

impl ImageUrl {
    pub fn parse(project_id: &str, dataset: &str, reference: &str) -> Result<Self> {
        let invalid = || AppError::InvalidAsset(reference.to_string());

        let rest = reference.strip_prefix("image-").ok_or_else(invalid)?;
        let mut parts = rest.rsplitn(3, '-');
        let format = parts.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;
        let dimensions = parts.next().ok_or_else(invalid)?;
        let asset_id = parts.next().filter(|s| !s.is_empty()).ok_or_else(invalid)?;

        let (w, h) = dimensions.split_once('x').ok_or_else(invalid)?;
        if w.parse::<u32>().is_err() || h.parse::<u32>().is_err() {
            return Err(invalid());
        }

        Ok(Self {
            project_id: project_id.to_string(),
            dataset: dataset.to_string(),
            asset_id: asset_id.to_string(),
            dimensions: dimensions.to_string(),
            format: format.to_string(),
            width: None,
            height: None,
        })
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn url(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ImageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}-{}.{}",
            IMAGE_CDN, self.project_id, self.dataset, self.asset_id, self.dimensions, self.format
        )?;

        let params: Vec<String> = [("w", self.width), ("h", self.height)]
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| format!("{key}={v}")))
            .collect();
        if !params.is_empty() {
            write!(f, "?{}", params.join("&"))?;
        }
        Ok(())
    }
}
