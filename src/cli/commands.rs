//! CLI command implementations

use std::path::Path;

use serde_json::{json, Value};

use crate::model::ModelLoader;
use crate::observability::{log_event_with_fields, Event, Logger};
use crate::schema::{
    BatchReport, ClassOutcome, EntityCatalog, FieldKind, SchemaCompiler, TypeMappingTable,
};

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response, write_value};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Check { config } => check(&config),
        Command::Kinds => kinds(),
        Command::Resolve {
            type_name,
            list_element,
        } => resolve(&type_name, list_element),
    }
}

/// Load the model, compile every class and print the report
///
/// Fails with `OBJSCHEMA_CLI_SCHEMA_REJECTED` after printing the report if
/// any class was rejected.
pub fn check(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    Logger::set_min_severity(config.severity()?);
    let config_display = config_path.display().to_string();
    log_event_with_fields(Event::ConfigLoaded, &[("path", config_display.as_str())]);

    compile_model(&config)
}

/// Compiles the configured model directory and prints the report.
///
/// Leaves the process-wide log level alone; `check` applies it.
pub fn compile_model(config: &Config) -> CliResult<()> {
    let model_dir = config.model_path();
    let mut loader = ModelLoader::new(&model_dir);
    if let Err(e) = loader.load_all() {
        let reason = e.to_string();
        log_event_with_fields(Event::StartupFailed, &[("reason", reason.as_str())]);
        write_error(e.code(), &reason)?;
        return Err(e.into());
    }
    let class_count = loader.class_count().to_string();
    log_event_with_fields(Event::ModelLoaded, &[("classes", class_count.as_str())]);

    let classes = loader.into_classes();
    let mut catalog = EntityCatalog::from_classes(&classes);
    config.apply_to_catalog(&mut catalog);

    let compiler = SchemaCompiler::with_options(catalog, config.compiler_options());
    let report = compiler.compile_batch(&classes);

    let rejected = report.rejected().count();
    write_value(&report_json(&report, &compiler))?;

    if rejected > 0 {
        return Err(CliError::schema_rejected(rejected));
    }
    Ok(())
}

/// Print every registered field kind and the type names that map to them
pub fn kinds() -> CliResult<()> {
    write_response(registry_json())
}

fn registry_json() -> Value {
    let table = TypeMappingTable::global();
    let kinds: Vec<Value> = FieldKind::all().iter().map(|k| kind_json(*k)).collect();
    json!({
        "kinds": kinds,
        "scalar_types": table.scalar_type_names(),
        "list_element_types": table.list_element_type_names(),
    })
}

/// Resolve one type name against the mapping table
pub fn resolve(type_name: &str, list_element: bool) -> CliResult<()> {
    let table = TypeMappingTable::global();
    let kind = if list_element {
        table.resolve_list_element(type_name)
    } else {
        table.resolve_scalar(type_name)
    };

    match kind {
        Some(kind) => write_response(json!({
            "type": type_name,
            "kind": kind_json(kind),
        })),
        None => {
            let err = CliError::unresolved(type_name);
            write_error(err.code_str(), err.message())?;
            Err(err)
        }
    }
}

fn kind_json(kind: FieldKind) -> Value {
    json!({
        "name": kind.name(),
        "storage_tag": kind.storage_tag(),
        "binding": kind.binding_name(),
        "representation": kind.representation().map(|r| r.binding_type_name()),
        "is_list": kind.is_list(),
        "is_backlink": kind.is_backlink(),
        "primary_key_eligible": kind.is_primary_key_eligible(),
    })
}

fn outcome_json(outcome: &ClassOutcome) -> Value {
    match outcome {
        Ok(compiled) => {
            let fields: Vec<Value> = compiled
                .fields
                .iter()
                .map(|f| {
                    let mut value = json!(f);
                    value["storage_tag"] = json!(f.kind.storage_tag());
                    value["binding"] = json!(f.kind.binding_name());
                    value
                })
                .collect();
            json!({
                "class": compiled.class_name,
                "status": "compiled",
                "proxy_class": compiled.proxy_class_name,
                "proxy_interface": compiled.proxy_interface_name,
                "fields": fields,
            })
        }
        Err(rejection) => {
            let violations: Vec<Value> = rejection
                .violations
                .iter()
                .map(|v| {
                    json!({
                        "code": v.kind.code(),
                        "stage": v.kind.stage(),
                        "field": v.field_name,
                        "type": v.type_name,
                    })
                })
                .collect();
            json!({
                "class": rejection.class_name,
                "status": "rejected",
                "violations": violations,
            })
        }
    }
}

/// Builds the `check` report
pub fn report_json(report: &BatchReport, compiler: &SchemaCompiler) -> Value {
    let classes: Vec<Value> = report.outcomes().iter().map(outcome_json).collect();
    json!({
        "status": if report.is_clean() { "ok" } else { "rejected" },
        "classes": classes,
        "metrics": compiler.metrics().snapshot(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{CompilerOptions, DeclaredClass, DeclaredField};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_report_json() {
        let classes = vec![
            DeclaredClass::new(
                "com.example.Person",
                vec![
                    DeclaredField::new("id", "long").primary_key(),
                    DeclaredField::list("tags", "java.lang.String"),
                ],
            ),
            DeclaredClass::new("com.example.Bad", vec![DeclaredField::new("c", "char")]),
        ];
        let compiler = SchemaCompiler::for_classes(&classes, CompilerOptions::sequential());
        let report = compiler.compile_batch(&classes);

        let value = report_json(&report, &compiler);
        assert_eq!(value["status"], "rejected");
        assert_eq!(value["classes"][0]["status"], "compiled");
        assert_eq!(value["classes"][0]["proxy_class"], "com_example_PersonRealmProxy");
        assert_eq!(value["classes"][0]["fields"][1]["kind"], "STRING_LIST");
        assert_eq!(value["classes"][0]["fields"][1]["binding"], "RealmFieldType.STRING_LIST");
        assert_eq!(value["classes"][1]["violations"][0]["code"], "OBJSCHEMA_UNSUPPORTED_SCALAR_TYPE");
        assert_eq!(value["classes"][1]["violations"][0]["stage"], "classification");
        assert_eq!(value["metrics"]["classes_rejected"], 1);
        assert_eq!(value["metrics"]["batches"], 1);
    }

    #[test]
    fn test_registry_lists_type_names() {
        let value = registry_json();
        assert_eq!(value["kinds"].as_array().unwrap().len(), 18);

        let scalars = value["scalar_types"].as_array().unwrap();
        assert!(scalars.contains(&json!("java.lang.String")));
        assert!(scalars.contains(&json!("byte")));
        assert!(!scalars.contains(&json!("String")));

        let elements = value["list_element_types"].as_array().unwrap();
        assert!(elements.contains(&json!("java.util.Date")));
        assert!(!elements.contains(&json!("long")));
    }

    #[test]
    fn test_kind_json_backlink_has_no_representation() {
        let value = kind_json(FieldKind::Backlink);
        assert_eq!(value["storage_tag"], "LINKING_OBJECTS");
        assert!(value["representation"].is_null());
    }

    #[test]
    fn test_compile_model_rejects_bad_model() {
        let temp_dir = TempDir::new().unwrap();
        let model_dir = temp_dir.path().join("model");
        fs::create_dir_all(&model_dir).unwrap();
        fs::write(
            model_dir.join("bad.json"),
            r#"{"name": "Bad", "fields": [{"name": "b", "type": "byte", "nullable": true}]}"#,
        )
        .unwrap();
        let config_path = temp_dir.path().join("objschema.json");
        fs::write(&config_path, r#"{"model_dir": "model", "log_level": "fatal"}"#).unwrap();

        let level_before = Logger::min_severity();
        let config = Config::load(&config_path).unwrap();
        let err = compile_model(&config).unwrap_err();

        assert_eq!(err.code_str(), "OBJSCHEMA_CLI_SCHEMA_REJECTED");
        assert_eq!(Logger::min_severity(), level_before);
    }

    #[test]
    fn test_compile_model_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("objschema.json");
        fs::write(&config_path, r#"{"model_dir": "absent"}"#).unwrap();

        let config = Config::load(&config_path).unwrap();
        let err = compile_model(&config).unwrap_err();
        assert_eq!(err.code_str(), "OBJSCHEMA_CLI_MODEL_ERROR");
    }

    #[test]
    fn test_resolve_unknown_type() {
        let err = resolve("char", false).unwrap_err();
        assert_eq!(err.code_str(), "OBJSCHEMA_CLI_UNRESOLVED");
        assert!(resolve("java.lang.Long", true).is_ok());
    }
}
