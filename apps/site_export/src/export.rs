//! Static snapshots: one HTML document per declared route.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use shared::domain::{PageId, Route};
use site_core::{router::href_for, view, SiteSettings, ViewModel};

pub const MANIFEST_FILE: &str = "routes.json";

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ManifestEntry {
    pub path: &'static str,
    pub href: String,
    pub page: PageId,
    pub file: String,
}

pub fn snapshot_file(route: &Route) -> String {
    match route.page {
        PageId::Home => "index.html".to_string(),
        page => format!("{}.html", page.slug()),
    }
}

pub async fn export_site(settings: &SiteSettings, out_dir: &Path) -> Result<Vec<ManifestEntry>> {
    tokio::fs::create_dir_all(out_dir)
        .await
        .with_context(|| format!("failed to create output directory '{}'", out_dir.display()))?;

    let mut manifest = Vec::new();
    for route in shared::domain::ROUTES.iter() {
        let href = href_for(route.path);
        let view = ViewModel::from_inputs(&href, 0.0, false, 0, settings);
        let file = snapshot_file(route);
        let target = out_dir.join(&file);
        let html = view::render_document(&view)
            .with_context(|| format!("failed to render route '{}'", route.path))?;
        tokio::fs::write(&target, html)
            .await
            .with_context(|| format!("failed to write snapshot '{}'", target.display()))?;
        tracing::info!(path = route.path, file = %target.display(), "wrote route snapshot");

        manifest.push(ManifestEntry {
            path: route.path,
            href,
            page: route.page,
            file,
        });
    }

    let manifest_path = out_dir.join(MANIFEST_FILE);
    tokio::fs::write(&manifest_path, serde_json::to_vec_pretty(&manifest)?)
        .await
        .with_context(|| format!("failed to write manifest '{}'", manifest_path.display()))?;

    Ok(manifest)
}
