use std::path::Path;

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::generator::TypeManifest;

pub struct ManifestLoader {
  file: AsyncMmapFile,
}

impl ManifestLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("failed to open manifest {}", path.display()))?;
    Ok(Self { file })
  }

  pub fn parse(&self) -> anyhow::Result<TypeManifest> {
    let content = std::str::from_utf8(self.file.as_slice())?;
    TypeManifest::from_json(content)
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  #[tokio::test]
  async fn test_load_manifest_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
      file,
      r#"{{"type_name":"Point","fields":[{{"name":"x","type":"int"}}],"options":{{"format_source":false}}}}"#
    )
    .unwrap();

    let manifest = ManifestLoader::open(file.path()).await.unwrap().parse().unwrap();
    assert_eq!(manifest.type_name, "Point");
    assert_eq!(manifest.fields.len(), 1);
    assert_eq!(manifest.options.map(|o| o.format_source), Some(false));
  }

  #[tokio::test]
  async fn test_missing_manifest_names_path() {
    let err = ManifestLoader::open(Path::new("/nonexistent/point.json"))
      .await
      .err()
      .unwrap();
    assert!(err.to_string().contains("/nonexistent/point.json"));
  }
}
