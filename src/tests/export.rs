//! Writing the interaction model to disk.

use crate::{ConversionConfig, ConvertError, InteractionModel, ModelConverter};
use std::fs;
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

fn config_with(training: PathBuf, output: PathBuf) -> ConversionConfig {
    ConversionConfig::default()
        .with_invocation_name("test")
        .with_documents(fixture("domain.yml"), training, fixture("echo_domain.yml"))
        .with_output(output)
}

#[test]
fn test_export_writes_readable_model() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("echoSkillConfiguration.json");

    let written = ModelConverter::new(config_with(fixture("nlu.md"), output.clone()))
        .export()
        .unwrap();
    assert_eq!(written, output);

    let content = fs::read_to_string(&output).unwrap();
    assert!(!content.contains('\n'));
    let model: InteractionModel = serde_json::from_str(&content).unwrap();
    assert_eq!(model.language_model().invocation_name, "test");
    assert!(model.intent("request_restaurant").is_some());
}

#[test]
fn test_pretty_export() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("model.json");

    ModelConverter::new(config_with(fixture("nlu.md"), output.clone()).with_pretty(true))
        .export()
        .unwrap();
    let content = fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("{\n  \"interactionModel\""));
}

#[test]
fn test_repeated_export_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    ModelConverter::new(config_with(fixture("nlu.md"), first.clone()))
        .export()
        .unwrap();
    ModelConverter::new(config_with(fixture("nlu.md"), second.clone()))
        .export()
        .unwrap();
    assert_eq!(
        fs::read_to_string(first).unwrap(),
        fs::read_to_string(second).unwrap()
    );
}

#[test]
fn test_unknown_slot_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let training = dir.path().join("nlu.md");
    fs::write(
        &training,
        "## intent:request_restaurant\n- something [cheap](price)\n",
    )
    .unwrap();
    let output = dir.path().join("model.json");

    let err = ModelConverter::new(config_with(training, output.clone()))
        .export()
        .unwrap_err();
    assert!(matches!(err, ConvertError::Reference { ref name, .. } if name == "price"));
    assert!(!output.exists());
}

#[test]
fn test_missing_training_document() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("model.json");

    let err = ModelConverter::new(config_with(dir.path().join("absent.md"), output.clone()))
        .export()
        .unwrap_err();
    assert!(matches!(err, ConvertError::DocumentAccess { .. }));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("missing-dir").join("model.json");

    let err = ModelConverter::new(config_with(fixture("nlu.md"), output))
        .export()
        .unwrap_err();
    assert!(matches!(err, ConvertError::DocumentAccess { .. }));
}
