use std::fs::File;
use std::path::Path;

use anyhow::Context;
use log::{debug, info};

use crate::catalog::Catalog;
use crate::input::toml_input::{CatalogFile, PreferencesFile};
use crate::preferences::Preferences;
use crate::schedule::AssemblyMode;
use crate::utils;
use crate::verifier::ReportMode;

/// Controls how a schedule is put together and how conflicts are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    assembly: AssemblyMode,
    report: ReportMode,
}

impl Options {
    #[must_use]
    pub const fn new(assembly: AssemblyMode, report: ReportMode) -> Self {
        Self { assembly, report }
    }

    #[must_use]
    pub const fn assembly(&self) -> AssemblyMode {
        self.assembly
    }

    #[must_use]
    pub const fn report(&self) -> ReportMode {
        self.report
    }
}

/// Everything that is needed for a single run.
#[derive(Debug, Clone)]
pub struct Session {
    preferences: Preferences,
    catalog: Catalog,
    options: Options,
}

impl Session {
    #[must_use]
    pub fn new(preferences: Preferences, catalog: Catalog) -> Self {
        Self {
            preferences,
            catalog,
            options: Options::default(),
        }
    }

    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn options(&self) -> Options {
        self.options
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionBuilder {
    catalog: Option<Catalog>,
    preferences: Option<Preferences>,
    options: Options,
}

impl SessionBuilder {
    pub fn catalog(&mut self, catalog: Catalog) -> &mut Self {
        self.catalog = Some(catalog);
        self
    }

    /// Reads the catalog from a toml file or a json file, if it has the
    /// `.json` extension.
    pub fn catalog_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<&mut Self> {
        let path = path.as_ref();

        let catalog = CatalogFile::from_path(path)
            .and_then(|file| file.to_catalog())
            .with_context(|| format!("failed to read catalog `{}`", path.display()))?;

        debug!("read {} courses from `{}`", catalog.len(), path.display());

        Ok(self.catalog(catalog))
    }

    pub fn preferences(&mut self, preferences: Preferences) -> &mut Self {
        self.preferences = Some(preferences);
        self
    }

    pub fn preferences_file(&mut self, path: impl AsRef<Path>) -> anyhow::Result<&mut Self> {
        let path = path.as_ref();

        let file: PreferencesFile = File::open(path)
            .map_err(anyhow::Error::from)
            .and_then(utils::toml_from_reader)
            .with_context(|| format!("failed to parse `{}`", path.display()))?;
        let preferences = file
            .to_preferences()
            .with_context(|| format!("invalid preferences in `{}`", path.display()))?;

        Ok(self.preferences(preferences))
    }

    pub fn assembly(&mut self, assembly: AssemblyMode) -> &mut Self {
        self.options.assembly = assembly;
        self
    }

    pub fn report(&mut self, report: ReportMode) -> &mut Self {
        self.options.report = report;
        self
    }

    /// Builds the session, falling back to the built-in catalog and to no
    /// preferences at all.
    pub fn build(self) -> anyhow::Result<Session> {
        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => {
                info!("no catalog given, using the built-in catalog");
                CatalogFile::builtin()
                    .and_then(|file| file.to_catalog())
                    .context("the built-in catalog is invalid")?
            }
        };

        Ok(Session {
            preferences: self.preferences.unwrap_or_default(),
            catalog,
            options: self.options,
        })
    }
}
