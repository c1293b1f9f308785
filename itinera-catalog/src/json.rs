//! JSON document catalog.

use std::io::BufReader;

use camino::{Utf8Path, Utf8PathBuf};
use itinera_core::{Attraction, CatalogProvider};
use serde::{Deserialize, Serialize};

use crate::{JsonCatalogError, fs};

/// Accepted document layouts.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Bare(Vec<Attraction>),
    Wrapped { attractions: Vec<Attraction> },
}

impl From<CatalogDocument> for Vec<Attraction> {
    fn from(document: CatalogDocument) -> Self {
        match document {
            CatalogDocument::Bare(attractions) | CatalogDocument::Wrapped { attractions } => {
                attractions
            }
        }
    }
}

/// Layout written by [`JsonCatalog::write_new`].
#[derive(Debug, Serialize)]
struct CatalogDocumentRef<'a> {
    attractions: &'a [Attraction],
}

/// Catalog backed by a JSON file.
///
/// The file is read afresh on every call, so edits made between plans are
/// picked up without reopening the catalog.
///
/// # Examples
/// ```no_run
/// use itinera_catalog::JsonCatalog;
/// use itinera_core::CatalogProvider;
///
/// # fn main() -> Result<(), itinera_catalog::JsonCatalogError> {
/// let catalog = JsonCatalog::new("catalog.json");
/// for attraction in catalog.attractions()? {
///     println!("{}: {}", attraction.id, attraction.name);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonCatalog {
    path: Utf8PathBuf,
}

impl JsonCatalog {
    /// Point a catalog at `path`. Nothing is read until the first lookup.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing document.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Write `attractions` to a new document at the catalog path.
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    /// Returns [`JsonCatalogError::AlreadyExists`] when the file is already
    /// present, and the matching IO or serialisation variant otherwise.
    pub fn write_new(&self, attractions: &[Attraction]) -> Result<(), JsonCatalogError> {
        let payload = serde_json::to_vec_pretty(&CatalogDocumentRef { attractions }).map_err(
            |source| JsonCatalogError::Serialise {
                path: self.path.clone(),
                source,
            },
        )?;
        fs::ensure_parent_dir(&self.path).map_err(|source| JsonCatalogError::CreateParent {
            path: self.path.clone(),
            source,
        })?;
        let mut file = fs::create_new_file(&self.path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::AlreadyExists {
                JsonCatalogError::AlreadyExists {
                    path: self.path.clone(),
                }
            } else {
                JsonCatalogError::Write {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;
        std::io::Write::write_all(&mut file, &payload).map_err(|source| {
            JsonCatalogError::Write {
                path: self.path.clone(),
                source,
            }
        })?;
        log::debug!(
            "wrote {} attractions to {}",
            attractions.len(),
            self.path
        );
        Ok(())
    }
}

impl CatalogProvider for JsonCatalog {
    type Error = JsonCatalogError;

    fn attractions(&self) -> Result<Vec<Attraction>, Self::Error> {
        let file = fs::open_catalog_file(&self.path).map_err(|source| JsonCatalogError::Open {
            path: self.path.clone(),
            source,
        })?;
        let document: CatalogDocument = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| JsonCatalogError::Parse {
                path: self.path.clone(),
                source,
            })?;
        let attractions = Vec::from(document);
        log::debug!(
            "loaded {} attractions from {}",
            attractions.len(),
            self.path
        );
        Ok(attractions)
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::expect_used, reason = "tests should fail fast")]
    #![expect(clippy::panic, reason = "tests surface unexpected error variants")]

    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    struct Workspace {
        _dir: TempDir,
        root: Utf8PathBuf,
    }

    impl Workspace {
        fn write(&self, name: &str, contents: &str) -> JsonCatalog {
            let path = self.root.join(name);
            std::fs::write(&path, contents).expect("write catalog");
            JsonCatalog::new(path)
        }
    }

    #[fixture]
    fn workspace() -> Workspace {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 tempdir");
        Workspace { _dir: dir, root }
    }

    #[rstest]
    fn reads_bare_array(workspace: Workspace) {
        let catalog = workspace.write(
            "bare.json",
            r#"[{"id":"a1","name":"Sun Temple","category":"heritage","lat":23.4,"lon":85.5}]"#,
        );

        let attractions = catalog.attractions().expect("catalog should load");

        assert_eq!(attractions.len(), 1);
        let first = attractions.first().expect("one attraction");
        assert_eq!(first.name, "Sun Temple");
        assert_eq!(first.latitude(), Some(23.4));
    }

    #[rstest]
    fn reads_wrapped_document_and_ignores_other_collections(workspace: Workspace) {
        let catalog = workspace.write(
            "db.json",
            r#"{
                "attractions": [
                    {"id": "a2", "name": "Dassam Falls", "category": "nature"},
                    {"id": "a3", "name": "Patratu Valley", "category": "nature"}
                ],
                "listings": [{"id": "l1", "title": "Candle"}],
                "users": []
            }"#,
        );

        let ids: Vec<String> = catalog
            .attractions()
            .expect("catalog should load")
            .into_iter()
            .map(|attraction| attraction.id)
            .collect();

        assert_eq!(ids, vec!["a2", "a3"]);
    }

    #[rstest]
    fn rereads_file_on_each_call(workspace: Workspace) {
        let catalog = workspace.write("live.json", r#"[{"id":"a1","name":"Sun Temple"}]"#);
        assert_eq!(catalog.attractions().expect("first read").len(), 1);

        std::fs::write(
            catalog.path(),
            r#"[{"id":"a1","name":"Sun Temple"},{"id":"a2","name":"Dassam Falls"}]"#,
        )
        .expect("rewrite catalog");

        assert_eq!(catalog.attractions().expect("second read").len(), 2);
    }

    #[rstest]
    fn lookup_by_id_scans_snapshot(workspace: Workspace) {
        let catalog = workspace.write(
            "lookup.json",
            r#"[{"id":"a1","name":"Sun Temple"},{"id":"a2","name":"Dassam Falls"}]"#,
        );

        let found = catalog.attraction("a2").expect("catalog should load");

        assert_eq!(found.map(|attraction| attraction.name).as_deref(), Some("Dassam Falls"));
        assert_eq!(catalog.attraction("zz").expect("catalog should load"), None);
    }

    #[rstest]
    fn missing_file_reports_open_error(workspace: Workspace) {
        let path = workspace.root.join("absent.json");
        let err = JsonCatalog::new(path.clone())
            .attractions()
            .expect_err("missing catalog");
        match err {
            JsonCatalogError::Open { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected Open, found {other:?}"),
        }
    }

    #[rstest]
    #[case::not_json("not json")]
    #[case::wrong_shape(r#"{"listings": []}"#)]
    #[case::nameless_record(r#"[{"id": "a1"}]"#)]
    fn malformed_documents_report_parse_error(workspace: Workspace, #[case] contents: &str) {
        let catalog = workspace.write("broken.json", contents);
        let err = catalog.attractions().expect_err("malformed catalog");
        assert!(
            matches!(err, JsonCatalogError::Parse { .. }),
            "expected Parse, found {err:?}"
        );
    }

    #[rstest]
    fn write_new_round_trips_through_reader(workspace: Workspace) {
        let catalog = JsonCatalog::new(workspace.root.join("nested/dir/catalog.json"));
        let attractions = vec![
            Attraction::new("a1", "Sun Temple")
                .with_category("heritage")
                .at(23.4, 85.5),
        ];

        catalog.write_new(&attractions).expect("write catalog");

        assert_eq!(catalog.attractions().expect("read back"), attractions);
    }

    #[rstest]
    fn write_new_refuses_to_overwrite(workspace: Workspace) {
        let catalog = workspace.write("existing.json", "[]");

        let err = catalog
            .write_new(&[Attraction::new("a1", "Sun Temple")])
            .expect_err("existing catalog");

        assert!(
            matches!(err, JsonCatalogError::AlreadyExists { .. }),
            "expected AlreadyExists, found {err:?}"
        );
        let contents = std::fs::read_to_string(catalog.path()).expect("read catalog");
        assert_eq!(contents, "[]");
    }
}
