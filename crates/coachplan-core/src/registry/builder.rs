//! Builder for creating and configuring TemplateRegistry instances.

use std::path::{Path, PathBuf};

use log::{debug, info};
use tokio::task;

use super::{builtin, TemplateRegistry};
use crate::{
    error::{Result, TemplateError},
    models::PlanTemplate,
};

/// Builder for creating and configuring TemplateRegistry instances.
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    template_dir: Option<PathBuf>,
    include_builtins: bool,
}

impl RegistryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            template_dir: None,
            include_builtins: true,
        }
    }

    /// Sets a custom directory to load `*.json` templates from.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/coachplan/templates` or
    /// `~/.local/share/coachplan/templates`
    pub fn with_template_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.template_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Skip the workout and nutrition templates shipped with the crate.
    pub fn without_builtins(mut self) -> Self {
        self.include_builtins = false;
        self
    }

    /// Builds the configured registry.
    ///
    /// A template directory that does not exist is treated as empty.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::FileSystem` if the directory cannot be read
    /// Returns `TemplateError::Parse` if a template file is not valid JSON
    /// Returns the schema error of the first template that fails its check
    pub async fn build(self) -> Result<TemplateRegistry> {
        let template_dir = if let Some(path) = self.template_dir {
            path
        } else {
            Self::default_template_dir()?
        };

        let mut registry = TemplateRegistry::new();
        if self.include_builtins {
            for template in builtin::templates()? {
                registry.register(template)?;
            }
        }

        let loaded = task::spawn_blocking(move || load_dir(&template_dir))
            .await
            .map_err(|e| TemplateError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        for template in loaded {
            registry.register(template)?;
        }

        info!("Template registry ready with {} template version(s)", registry.len());
        Ok(registry)
    }

    /// Returns the default template directory following XDG Base Directory
    /// specification.
    fn default_template_dir() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("coachplan")
            .place_data_file("templates")
            .map_err(|e| TemplateError::XdgDirectory(e.to_string()))
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Read and check every `*.json` template in `dir`, sorted by file name.
pub fn load_dir(dir: &Path) -> Result<Vec<PlanTemplate>> {
    if !dir.is_dir() {
        debug!("Template directory {} not present, skipping", dir.display());
        return Ok(Vec::new());
    }

    let entries = std::fs::read_dir(dir).map_err(|e| TemplateError::FileSystem {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| TemplateError::FileSystem {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        } else {
            debug!("Ignoring non-template file {}", path.display());
        }
    }
    paths.sort();

    paths.iter().map(|path| load_file(path)).collect()
}

/// Read a single template file, parse it and check its schema.
pub fn load_file(path: &Path) -> Result<PlanTemplate> {
    let json = std::fs::read_to_string(path).map_err(|e| TemplateError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })?;
    let template: PlanTemplate =
        serde_json::from_str(&json).map_err(|e| TemplateError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
    template.check()?;

    debug!("Loaded template '{}' v{} from {}", template.id, template.version, path.display());
    Ok(template)
}
