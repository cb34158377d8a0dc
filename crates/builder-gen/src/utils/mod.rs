pub mod manifest;

pub(crate) use manifest::ManifestLoader;
