use serde_json::json;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn minimal_dump() -> serde_json::Value {
    json!({
        "schemas": [
            {
                "name": "CloudV3",
                "superclass": "RequestSchemaV3",
                "fields": [
                    { "name": "version", "type": "string", "help": "Server version." }
                ]
            }
        ],
        "enums": {},
        "endpoints": [
            {
                "api_name": "cloudStatus",
                "class_name": "Cloud",
                "http_method": "GET",
                "url_pattern": "/3/Cloud",
                "input_params": [],
                "input_schema": "CloudV3",
                "output_schema": "CloudV3",
                "handler_method": "status",
                "summary": "Determine the status of the nodes in the cloud."
            }
        ]
    })
}

#[test]
fn test_cli_generate_writes_library() {
    let dir = TempDir::new().expect("tempdir");
    let dump_path = dir.path().join("introspection.json");
    fs::write(&dump_path, minimal_dump().to_string()).expect("write dump");
    let out = dir.path().join("build");

    let exe = env!("CARGO_BIN_EXE_restbind-gen");
    let status = Command::new(exe)
        .arg("generate")
        .arg("--source")
        .arg(&dump_path)
        .arg("--output")
        .arg(&out)
        .status()
        .expect("run cli");
    assert!(status.success());

    let base = out.join("water").join("bindings");
    assert!(base.join("pojos").join("CloudV3.java").exists());
    assert!(base.join("proxies").join("retrofit").join("Cloud.java").exists());
    assert!(base.join("H2oApi.java").exists());
}

#[test]
fn test_cli_generate_custom_package_and_facade() {
    let dir = TempDir::new().expect("tempdir");
    let dump_path = dir.path().join("introspection.json");
    fs::write(&dump_path, minimal_dump().to_string()).expect("write dump");
    let out = dir.path().join("build");

    let exe = env!("CARGO_BIN_EXE_restbind-gen");
    let status = Command::new(exe)
        .arg("generate")
        .arg("--source")
        .arg(&dump_path)
        .arg("--output")
        .arg(&out)
        .arg("--package")
        .arg("com.example.client")
        .arg("--facade-class")
        .arg("ExampleApi")
        .status()
        .expect("run cli");
    assert!(status.success());

    let base = out.join("com").join("example").join("client");
    assert!(base.join("ExampleApi.java").exists());
    let facade = fs::read_to_string(base.join("ExampleApi.java")).expect("read facade");
    assert!(facade.contains("package com.example.client;"));
    assert!(facade.contains("public class ExampleApi {"));
}

#[test]
fn test_cli_check_fails_on_bad_dump() {
    let mut dump = minimal_dump();
    dump["schemas"].as_array_mut().expect("schemas").push(json!({
        "name": "BrokenV3",
        "superclass": "Schema",
        "fields": [
            { "name": "x", "type": "mystery", "help": "Unmappable." }
        ]
    }));

    let dir = TempDir::new().expect("tempdir");
    let dump_path = dir.path().join("introspection.json");
    fs::write(&dump_path, dump.to_string()).expect("write dump");

    let exe = env!("CARGO_BIN_EXE_restbind-gen");
    let status = Command::new(exe)
        .arg("check")
        .arg("--source")
        .arg(&dump_path)
        .status()
        .expect("run cli");
    assert!(!status.success());
}

#[test]
fn test_cli_check_passes_on_clean_dump() {
    let dir = TempDir::new().expect("tempdir");
    let dump_path = dir.path().join("introspection.json");
    fs::write(&dump_path, minimal_dump().to_string()).expect("write dump");

    let exe = env!("CARGO_BIN_EXE_restbind-gen");
    let status = Command::new(exe)
        .arg("check")
        .arg("--source")
        .arg(&dump_path)
        .status()
        .expect("run cli");
    assert!(status.success());
}
