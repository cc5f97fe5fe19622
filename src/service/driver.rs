// SPDX-License-Identifier: MIT OR Apache-2.0

//! Translates a resolved database configuration into the flat string map
//! database drivers conventionally consume.

use crate::domain::errors::Result;
use crate::domain::resolved::ResolvedConfig;
use std::collections::BTreeMap;

/// The database engines the settings adapter knows how to describe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DatabaseKind {
    /// MySQL / MariaDB.
    MySql,
    /// PostgreSQL.
    PostgreSql,
    /// SQLite3 file databases.
    Sqlite3,
}

impl DatabaseKind {
    /// The engine identifier written into the settings map.
    pub fn engine(&self) -> &'static str {
        match self {
            DatabaseKind::MySql => "mysql",
            DatabaseKind::PostgreSql => "postgresql",
            DatabaseKind::Sqlite3 => "sqlite3",
        }
    }
}

/// Produces driver-ready settings from a resolved configuration.
pub trait DriverSettingsProvider {
    /// Builds the flat `key -> string` settings map.
    fn driver_settings(&self) -> Result<BTreeMap<String, String>>;
}

/// Couples a [`DatabaseKind`] with a loaded configuration, typically one
/// produced from the matching preset schema.
///
/// # Examples
///
/// ```
/// use envschema::prelude::*;
/// use envschema::service::driver::{DatabaseKind, DatabaseSettings, DriverSettingsProvider};
/// use envschema::service::presets;
///
/// let loader = ConfigLoader::builder(presets::sqlite3())
///     .source(StaticEnvSource::new())
///     .build();
/// let config = loader.load().unwrap();
///
/// let settings = DatabaseSettings::new(DatabaseKind::Sqlite3, &config)
///     .driver_settings()
///     .unwrap();
/// assert_eq!(settings["engine"], "sqlite3");
/// assert_eq!(settings["name"], "db.sqlite3");
/// ```
pub struct DatabaseSettings<'a> {
    kind: DatabaseKind,
    config: &'a ResolvedConfig,
}

impl<'a> DatabaseSettings<'a> {
    /// Wraps a resolved configuration for the given engine.
    pub fn new(kind: DatabaseKind, config: &'a ResolvedConfig) -> Self {
        Self { kind, config }
    }
}

impl DriverSettingsProvider for DatabaseSettings<'_> {
    fn driver_settings(&self) -> Result<BTreeMap<String, String>> {
        let mut settings = BTreeMap::new();
        settings.insert("engine".to_string(), self.kind.engine().to_string());

        if self.kind == DatabaseKind::Sqlite3 {
            settings.insert(
                "name".to_string(),
                self.config.str_value("path")?.to_string(),
            );
            return Ok(settings);
        }

        settings.insert(
            "user".to_string(),
            self.config.str_value("username")?.to_string(),
        );
        settings.insert(
            "password".to_string(),
            self.config.str_value("password")?.to_string(),
        );
        settings.insert(
            "host".to_string(),
            self.config.str_value("host")?.to_string(),
        );
        settings.insert(
            "port".to_string(),
            self.config.int_value("port")?.to_string(),
        );
        settings.insert(
            "name".to_string(),
            self.config.str_value("name")?.to_string(),
        );
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::StaticEnvSource;
    use crate::domain::errors::ConfigError;
    use crate::service::loader::ConfigLoader;
    use crate::service::presets;

    fn load(schema: crate::domain::schema::ConfigSchema, vars: &[(&str, &str)]) -> ResolvedConfig {
        ConfigLoader::builder(schema)
            .source(StaticEnvSource::from_pairs(vars.iter().copied()))
            .build()
            .load()
            .unwrap()
    }

    #[test]
    fn test_mysql_settings() {
        let config = load(
            presets::mysql(),
            &[("MYSQL_URL", "mysql://app:pw@db.local:3307/orders")],
        );
        let settings = DatabaseSettings::new(DatabaseKind::MySql, &config)
            .driver_settings()
            .unwrap();

        assert_eq!(settings["engine"], "mysql");
        assert_eq!(settings["user"], "app");
        assert_eq!(settings["password"], "pw");
        assert_eq!(settings["host"], "db.local");
        assert_eq!(settings["port"], "3307");
        assert_eq!(settings["name"], "orders");
    }

    #[test]
    fn test_postgresql_settings_from_defaults() {
        let config = load(presets::postgresql(), &[]);
        let settings = DatabaseSettings::new(DatabaseKind::PostgreSql, &config)
            .driver_settings()
            .unwrap();

        assert_eq!(settings["engine"], "postgresql");
        assert_eq!(settings["host"], "localhost");
        assert_eq!(settings["port"], "5432");
    }

    #[test]
    fn test_sqlite3_settings() {
        let config = load(presets::sqlite3(), &[("SQLITE3_PATH", "/data/app.db")]);
        let settings = DatabaseSettings::new(DatabaseKind::Sqlite3, &config)
            .driver_settings()
            .unwrap();

        assert_eq!(settings.len(), 2);
        assert_eq!(settings["engine"], "sqlite3");
        assert_eq!(settings["name"], "/data/app.db");
    }

    #[test]
    fn test_missing_field_surfaces_as_error() {
        let config = load(presets::sqlite3(), &[]);
        let result = DatabaseSettings::new(DatabaseKind::MySql, &config).driver_settings();
        assert!(matches!(result, Err(ConfigError::FieldNotFound { .. })));
    }
}
