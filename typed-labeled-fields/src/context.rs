//! On-disk registry of typed labeled field definitions.
//!
//! Every definition lives in `definitions/<name>.yaml` under the registry
//! root, display settings included. Lookups by name and by ULID are served
//! from memory.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, warn};
use ulid::Ulid;

use crate::error::{FieldsError, Result};
use crate::types::{FieldDef, FormatterSettings};

const DEFINITIONS_DIR: &str = "definitions";

/// Field definitions a host application ships with.
///
/// Seeded when a registry is opened; a definition whose ULID is already on
/// disk is left alone, whatever its current name.
#[derive(Default)]
pub struct FieldDefaults {
    fields: Vec<FieldDef>,
}

impl FieldDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, def: FieldDef) -> Self {
        self.fields.push(def);
        self
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }
}

/// Returned by [`FieldsContext::open`].
pub struct FieldsContextBuilder {
    root: PathBuf,
    defaults: Option<FieldDefaults>,
}

impl FieldsContextBuilder {
    pub fn with_defaults(mut self, defaults: FieldDefaults) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Create the definitions directory, seed defaults and load everything
    /// found on disk.
    pub async fn build(self) -> Result<FieldsContext> {
        let definitions = self.root.join(DEFINITIONS_DIR);
        fs::create_dir_all(&definitions).await?;

        if let Some(defaults) = &self.defaults {
            seed_defaults(&definitions, defaults).await?;
        }

        let fields = read_definitions(&definitions)
            .await?
            .into_iter()
            .filter_map(|(path, parsed)| match parsed {
                Ok(def) => Some(def),
                Err(e) => {
                    warn!(?path, %e, "skipping invalid field definition");
                    None
                }
            })
            .collect();

        let mut ctx = FieldsContext {
            root: self.root,
            fields,
            by_name: HashMap::new(),
            by_id: HashMap::new(),
        };
        ctx.reindex();
        debug!(root = ?ctx.root, fields = ctx.fields.len(), "opened field registry");
        Ok(ctx)
    }
}

async fn seed_defaults(definitions: &Path, defaults: &FieldDefaults) -> Result<()> {
    let on_disk = read_definitions(definitions).await?;
    let present: HashSet<Ulid> = on_disk
        .iter()
        .filter_map(|(_, parsed)| parsed.as_ref().ok().map(|def| def.id))
        .collect();
    let taken: HashSet<&Path> = on_disk.iter().map(|(path, _)| path.as_path()).collect();

    for def in defaults.fields.iter().filter(|d| !present.contains(&d.id)) {
        let path = definitions.join(format!("{}.yaml", def.name));
        if taken.contains(path.as_path()) {
            warn!(name = %def.name, id = %def.id, "default field name already taken, not seeding");
            continue;
        }
        atomic_write(&path, serde_yaml_ng::to_string(def)?.as_bytes()).await?;
        debug!(name = %def.name, id = %def.id, kind = %def.kind, "seeded default field");
    }
    Ok(())
}

/// Parse every `.yaml` file in `definitions`, keeping parse failures so the
/// caller decides how loud to be about them.
async fn read_definitions(
    definitions: &Path,
) -> Result<Vec<(PathBuf, std::result::Result<FieldDef, serde_yaml_ng::Error>)>> {
    let mut found = Vec::new();
    let mut entries = fs::read_dir(definitions).await?;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
            continue;
        }
        let content = fs::read_to_string(&path).await?;
        let parsed = serde_yaml_ng::from_str::<FieldDef>(&content);
        found.push((path, parsed));
    }
    Ok(found)
}

/// The field registry.
///
/// ```text
/// <root>/
///   definitions/
///     subject.yaml
///     related.yaml
/// ```
pub struct FieldsContext {
    root: PathBuf,
    fields: Vec<FieldDef>,
    by_name: HashMap<String, usize>,
    by_id: HashMap<Ulid, usize>,
}

impl FieldsContext {
    /// Start opening the registry rooted at `root`.
    ///
    /// ```rust,ignore
    /// let ctx = FieldsContext::open(path)
    ///     .with_defaults(FieldDefaults::new().field(subject))
    ///     .build()
    ///     .await?;
    /// ```
    pub fn open(root: impl Into<PathBuf>) -> FieldsContextBuilder {
        FieldsContextBuilder {
            root: root.into(),
            defaults: None,
        }
    }

    pub fn get_field_by_name(&self, name: &str) -> Option<&FieldDef> {
        self.by_name.get(name).map(|&i| &self.fields[i])
    }

    pub fn get_field_by_id(&self, id: &Ulid) -> Option<&FieldDef> {
        self.by_id.get(id).map(|&i| &self.fields[i])
    }

    pub fn all_fields(&self) -> &[FieldDef] {
        &self.fields
    }

    /// Create or replace a definition and persist it.
    ///
    /// A definition keeps its ULID across renames; the file under the old
    /// name is removed. Taking a name owned by another definition fails.
    pub async fn write_field(&mut self, def: &FieldDef) -> Result<()> {
        if let Some(owner) = self.get_field_by_name(&def.name) {
            if owner.id != def.id {
                return Err(FieldsError::DuplicateFieldName {
                    name: def.name.clone(),
                });
            }
        }

        let yaml = serde_yaml_ng::to_string(def)?;
        atomic_write(&self.definition_path(&def.name), yaml.as_bytes()).await?;

        match self.by_id.get(&def.id).copied() {
            Some(idx) => {
                let previous = std::mem::replace(&mut self.fields[idx], def.clone());
                if previous.name != def.name {
                    let stale = self.definition_path(&previous.name);
                    if let Err(e) = fs::remove_file(&stale).await {
                        warn!(?stale, %e, "could not remove definition of renamed field");
                    }
                    debug!(from = %previous.name, to = %def.name, "renamed field");
                }
            }
            None => self.fields.push(def.clone()),
        }
        self.reindex();

        debug!(name = %def.name, id = %def.id, "wrote field definition");
        Ok(())
    }

    /// Replace the formatter settings stored on the field called `name`.
    pub async fn set_display_settings(
        &mut self,
        name: &str,
        settings: FormatterSettings,
    ) -> Result<()> {
        let mut def = self
            .get_field_by_name(name)
            .cloned()
            .ok_or_else(|| FieldsError::FieldNotFound {
                name: name.to_string(),
            })?;
        def.display = settings;
        self.write_field(&def).await
    }

    pub async fn delete_field(&mut self, id: &Ulid) -> Result<()> {
        let idx = self
            .by_id
            .get(id)
            .copied()
            .ok_or_else(|| FieldsError::FieldNotFoundById { id: id.to_string() })?;

        let path = self.definition_path(&self.fields[idx].name);
        match fs::remove_file(&path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(?path, "definition file already gone");
            }
            Err(e) => return Err(e.into()),
        }
        let def = self.fields.remove(idx);
        self.reindex();

        debug!(name = %def.name, %id, "deleted field definition");
        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn definition_path(&self, name: &str) -> PathBuf {
        self.root.join(DEFINITIONS_DIR).join(format!("{name}.yaml"))
    }

    fn reindex(&mut self) {
        self.by_name = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, def)| (def.name.clone(), i))
            .collect();
        self.by_id = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, def)| (def.id, i))
            .collect();
    }
}

/// Write beside the target and rename over it, so readers never see a
/// partial file.
async fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let Some(dir) = path.parent() else {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "definition path has no parent directory",
        )
        .into());
    };
    let staging = dir.join(format!(".tmp_{}", Ulid::new()));
    fs::write(&staging, data).await?;
    fs::rename(&staging, path).await?;
    Ok(())
}
