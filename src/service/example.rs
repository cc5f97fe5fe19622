// SPDX-License-Identifier: MIT OR Apache-2.0

//! `.env` template generation.

use crate::domain::errors::Result;
use crate::service::loader::ConfigLoader;
use std::fs;
use std::path::Path;

/// Writes an `.env` example file covering every given loader.
///
/// Each loader contributes one section, rendered by
/// [`ConfigLoader::env_example`], and sections are separated by a blank
/// line. The file is created or truncated; I/O failures surface as
/// `ConfigError::Io`.
///
/// # Examples
///
/// ```no_run
/// use envschema::prelude::*;
/// use envschema::service::example::write_env_example;
/// use envschema::service::presets;
///
/// let redis = ConfigLoader::new(presets::redis());
/// let web = ConfigLoader::new(presets::web());
/// write_env_example(".env.example", &[&redis, &web]).unwrap();
/// ```
pub fn write_env_example(path: impl AsRef<Path>, loaders: &[&ConfigLoader]) -> Result<()> {
    fs::write(path, render_env_example(loaders))?;
    Ok(())
}

/// Renders the combined template without touching the filesystem.
pub fn render_env_example(loaders: &[&ConfigLoader]) -> String {
    loaders
        .iter()
        .map(|loader| loader.env_example())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticEnvSource;
    use crate::domain::field::FieldSpec;
    use crate::domain::schema::ConfigSchema;
    use crate::domain::value::ValueKind;

    fn loader(name: &str, fields: &[&str]) -> ConfigLoader {
        let mut builder = ConfigSchema::builder(name);
        for field in fields {
            builder = builder.field(*field, FieldSpec::new(ValueKind::Str));
        }
        ConfigLoader::builder(builder.build())
            .source(StaticEnvSource::new())
            .build()
    }

    #[test]
    fn test_render_joins_sections_with_blank_line() {
        let a = loader("alpha", &["A_KEY"]);
        let b = loader("beta", &["B_KEY"]);

        assert_eq!(
            render_env_example(&[&a, &b]),
            "# alpha\nA_KEY=\n\n# beta\nB_KEY=\n"
        );
    }

    #[test]
    fn test_render_empty_loader_list() {
        assert_eq!(render_env_example(&[]), "");
    }

    #[test]
    fn test_write_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env.example");
        let a = loader("alpha", &["A_KEY"]);

        write_env_example(&path, &[&a]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "# alpha\nA_KEY=\n");
    }
}
