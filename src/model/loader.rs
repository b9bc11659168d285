//! Class model loader
//!
//! Reads declared classes from `*.json` files in a model directory.
//! Each file holds either one class object or an array of classes:
//!
//! ```json
//! {
//!   "name": "com.example.Person",
//!   "fields": [
//!     { "name": "id", "type": "long", "primary_key": true },
//!     { "name": "tags", "type": "io.realm.RealmList", "element_type": "java.lang.String" }
//!   ]
//! }
//! ```
//!
//! Files are read in file-name order so the batch order is stable.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::errors::{ModelError, ModelResult};
use super::grammar;
use crate::schema::DeclaredClass;

#[derive(Deserialize)]
#[serde(untagged)]
enum ModelFile {
    Many(Vec<DeclaredClass>),
    One(DeclaredClass),
}

/// Loads and checks declared classes from disk.
pub struct ModelLoader {
    model_dir: PathBuf,
    classes: Vec<DeclaredClass>,
}

impl ModelLoader {
    pub fn new(model_dir: &Path) -> Self {
        Self {
            model_dir: model_dir.to_path_buf(),
            classes: Vec::new(),
        }
    }

    pub fn model_dir(&self) -> &Path {
        &self.model_dir
    }

    /// Loads every `*.json` file in the model directory.
    pub fn load_all(&mut self) -> ModelResult<()> {
        let entries = fs::read_dir(&self.model_dir).map_err(|source| ModelError::Io {
            path: self.model_dir.clone(),
            source,
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| ModelError::Io {
                path: self.model_dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        for path in paths {
            self.load_file(&path)?;
        }

        Ok(())
    }

    /// Loads one model file.
    pub fn load_file(&mut self, path: &Path) -> ModelResult<()> {
        let content = fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed: ModelFile = serde_json::from_str(&content).map_err(|source| ModelError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let classes = match parsed {
            ModelFile::Many(classes) => classes,
            ModelFile::One(class) => vec![class],
        };

        for class in classes {
            self.register(class)?;
        }

        Ok(())
    }

    /// Registers a class directly after checking its names.
    pub fn register(&mut self, class: DeclaredClass) -> ModelResult<()> {
        check_names(&class)?;

        if self.classes.iter().any(|c| c.name == class.name) {
            return Err(ModelError::DuplicateClass(class.name));
        }

        self.classes.push(class);
        Ok(())
    }

    pub fn classes(&self) -> &[DeclaredClass] {
        &self.classes
    }

    pub fn into_classes(self) -> Vec<DeclaredClass> {
        self.classes
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}

/// Checks class, field and type names against the declared-name grammar.
///
/// Duplicate field names are not a model error; the validator reports them.
pub fn check_names(class: &DeclaredClass) -> ModelResult<()> {
    if !grammar::is_qualified_name(&class.name) {
        return Err(ModelError::InvalidClassName(class.name.clone()));
    }

    for field in &class.fields {
        if !grammar::is_identifier(&field.name) {
            return Err(ModelError::InvalidFieldName {
                class: class.name.clone(),
                field: field.name.clone(),
            });
        }

        let mut type_names = vec![field.declared_type.as_str()];
        type_names.extend(field.element_type.as_deref());
        if let Some(target) = &field.backlink {
            type_names.push(target.source_class.as_str());
        }

        for type_name in type_names {
            if !grammar::is_type_name(type_name) {
                return Err(ModelError::InvalidTypeName {
                    class: class.name.clone(),
                    field: field.name.clone(),
                    type_name: type_name.to_string(),
                });
            }
        }

        if let Some(target) = &field.backlink {
            if !grammar::is_identifier(&target.source_field) {
                return Err(ModelError::InvalidFieldName {
                    class: target.source_class.clone(),
                    field: target.source_field.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::DeclaredField;
    use serde_json::json;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, value: serde_json::Value) {
        fs::write(dir.join(name), serde_json::to_string_pretty(&value).unwrap()).unwrap();
    }

    #[test]
    fn test_load_single_and_array_files() {
        let temp_dir = TempDir::new().unwrap();
        write(
            temp_dir.path(),
            "b_person.json",
            json!({
                "name": "com.example.Person",
                "fields": [
                    { "name": "id", "type": "long", "primary_key": true },
                    { "name": "tags", "type": "io.realm.RealmList", "element_type": "java.lang.String" }
                ]
            }),
        );
        write(
            temp_dir.path(),
            "a_pets.json",
            json!([
                { "name": "com.example.Dog", "fields": [] },
                { "name": "com.example.Cat", "fields": [
                    { "name": "owners", "type": "io.realm.RealmResults", "element_type": "com.example.Person",
                      "backlink": { "source_class": "com.example.Person", "source_field": "cats" } }
                ]}
            ]),
        );
        fs::write(temp_dir.path().join("notes.txt"), "ignored").unwrap();

        let mut loader = ModelLoader::new(temp_dir.path());
        loader.load_all().unwrap();

        let names: Vec<_> = loader.classes().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["com.example.Dog", "com.example.Cat", "com.example.Person"]);

        let person = &loader.classes()[2];
        assert!(person.fields[0].primary_key);
        assert_eq!(person.fields[1].element_type.as_deref(), Some("java.lang.String"));
        assert!(loader.classes()[1].fields[0].backlink.is_some());
    }

    #[test]
    fn test_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut loader = ModelLoader::new(&temp_dir.path().join("missing"));
        let err = loader.load_all().unwrap_err();
        assert_eq!(err.code(), "OBJSCHEMA_MODEL_IO");
    }

    #[test]
    fn test_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("bad.json"), "{ not json").unwrap();

        let mut loader = ModelLoader::new(temp_dir.path());
        assert!(matches!(loader.load_all(), Err(ModelError::Parse { .. })));
    }

    #[test]
    fn test_duplicate_class_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut loader = ModelLoader::new(temp_dir.path());
        loader.register(DeclaredClass::new("A", vec![])).unwrap();
        let err = loader.register(DeclaredClass::new("A", vec![])).unwrap_err();
        assert!(matches!(err, ModelError::DuplicateClass(name) if name == "A"));
    }

    #[test]
    fn test_malformed_names() {
        let bad_class = DeclaredClass::new("com..A", vec![]);
        assert!(matches!(check_names(&bad_class), Err(ModelError::InvalidClassName(_))));

        let bad_field = DeclaredClass::new("A", vec![DeclaredField::new("my field", "int")]);
        assert!(matches!(check_names(&bad_field), Err(ModelError::InvalidFieldName { .. })));

        let bad_type = DeclaredClass::new("A", vec![DeclaredField::list("xs", "List<int>")]);
        assert!(matches!(check_names(&bad_type), Err(ModelError::InvalidTypeName { .. })));

        // Unknown but well-formed types are the classifier's concern.
        let unknown = DeclaredClass::new("A", vec![DeclaredField::new("c", "char")]);
        assert!(check_names(&unknown).is_ok());
    }
}
