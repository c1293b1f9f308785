//! Unit tests for the `attractions` and `seed` commands.

use super::helpers::{Workspace, output_json};
use super::*;
use crate::attractions::{AttractionsArgs, list_attractions};
use crate::seed::{SeedArgs, seed_catalog};
use itinera_catalog::JsonCatalogError;
use rstest::rstest;

fn list(args: AttractionsArgs) -> Result<serde_json::Value, CliError> {
    let mut buffer = Vec::new();
    list_attractions(args, &mut buffer)?;
    Ok(output_json(&buffer))
}

#[rstest]
fn attractions_lists_whole_catalog_in_order() {
    let workspace = Workspace::new();
    let args = AttractionsArgs {
        catalog: Some(workspace.seeded_catalog()),
        id: None,
    };

    let listed = list(args).expect("listing should succeed");
    let ids: Vec<&str> = listed
        .as_array()
        .expect("catalog listing is an array")
        .iter()
        .filter_map(|entry| entry.get("id").and_then(serde_json::Value::as_str))
        .collect();

    assert_eq!(ids, vec!["a1", "a2", "a3", "a4"]);
}

#[rstest]
fn attractions_shows_single_entry_with_flat_coordinates() {
    let workspace = Workspace::new();
    let args = AttractionsArgs {
        catalog: Some(workspace.seeded_catalog()),
        id: Some("a4".to_owned()),
    };

    let listed = list(args).expect("lookup should succeed");

    assert_eq!(listed.get("name").and_then(serde_json::Value::as_str), Some("Hillview Fort"));
    assert_eq!(listed.get("lat").and_then(serde_json::Value::as_f64), Some(23.52));
    assert_eq!(listed.get("lon").and_then(serde_json::Value::as_f64), Some(85.45));
}

#[rstest]
fn attractions_rejects_unknown_id() {
    let workspace = Workspace::new();
    let catalog = workspace.seeded_catalog();
    let args = AttractionsArgs {
        catalog: Some(catalog.clone()),
        id: Some("zz".to_owned()),
    };

    let err = list(args).expect_err("unknown id should error");
    match err {
        CliError::UnknownAttraction { id, path } => {
            assert_eq!(id, "zz");
            assert_eq!(path, catalog);
        }
        other => panic!("expected UnknownAttraction, found {other:?}"),
    }
}

#[rstest]
fn seed_writes_catalog_and_reports_path() {
    let workspace = Workspace::new();
    let path = workspace.root().join("nested/catalog.json");
    let mut buffer = Vec::new();

    seed_catalog(
        SeedArgs {
            catalog: Some(path.clone()),
        },
        &mut buffer,
    )
    .expect("seeding should succeed");

    let message = String::from_utf8(buffer).expect("utf-8 output");
    assert_eq!(message, format!("seeded catalog at {path}\n"));
    assert!(path.is_file());
}

#[rstest]
fn seed_refuses_existing_catalog() {
    let workspace = Workspace::new();
    let path = workspace.write("catalog.json", "[]");
    let mut buffer = Vec::new();

    let err = seed_catalog(
        SeedArgs {
            catalog: Some(path),
        },
        &mut buffer,
    )
    .expect_err("existing catalog should be kept");

    assert!(
        matches!(err, CliError::Catalog(JsonCatalogError::AlreadyExists { .. })),
        "expected AlreadyExists, found {err:?}"
    );
    assert!(buffer.is_empty());
}

#[rstest]
fn write_json_terminates_with_newline() {
    let mut buffer = Vec::new();
    write_json(&mut buffer, &serde_json::json!({"ok": true})).expect("write json");
    assert_eq!(buffer, b"{\n  \"ok\": true\n}\n");
}

#[rstest]
fn error_messages_name_their_fields() {
    let missing = CliError::MissingArgument {
        field: ARG_PLAN_REQUEST,
        env: ENV_PLAN_REQUEST,
    };
    assert_eq!(
        missing.to_string(),
        "missing request (set --request or ITINERA_CMDS_PLAN_REQUEST_PATH)"
    );

    let unknown = CliError::UnknownAttraction {
        id: "zz".to_owned(),
        path: camino::Utf8PathBuf::from("catalog.json"),
    };
    assert_eq!(
        unknown.to_string(),
        "no attraction with id \"zz\" in \"catalog.json\""
    );
}
