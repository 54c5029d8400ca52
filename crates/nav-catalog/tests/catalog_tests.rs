use nav_catalog::{CatalogError, RouteCatalog, EMBEDDED_ROUTES};
use nav_model::walk;
use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::io::Write;

#[test]
fn test_embedded_ids_unique() {
    let catalog = RouteCatalog::embedded();
    let mut seen = HashSet::new();
    for (_, node) in walk(catalog.nodes()) {
        assert!(seen.insert(node.id.clone()), "duplicate id {}", node.id);
    }
}

#[test]
fn test_embedded_module_order() {
    let catalog = RouteCatalog::embedded();
    assert_eq!(
        catalog.module_ids(),
        vec![
            "dashboard",
            "projects",
            "people",
            "programming",
            "pipeline",
            "procurement",
            "jobs",
            "companies",
            "finance",
            "analytics",
            "resources",
            "opendeck",
            "ghxstship",
            "settings",
            "profile",
        ]
    );
}

#[test]
fn test_projects_overview_is_not_first() {
    // The projector is responsible for the Overview-first order; the catalog
    // keeps authoring order.
    let projects = RouteCatalog::embedded().module("projects").unwrap();
    assert_eq!(projects.children[0].id, "projects-schedule");
    assert_eq!(projects.children[1].id, "projects-overview");
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(EMBEDDED_ROUTES.as_bytes()).unwrap();

    let loaded = RouteCatalog::from_path(file.path()).unwrap();
    assert_eq!(&loaded, RouteCatalog::embedded());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = RouteCatalog::from_path(dir.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn test_load_invalid_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"- id: a\n  label: A\n  path: /x\n- id: b\n  label: B\n  path: /x\n")
        .unwrap();

    let err = RouteCatalog::from_path(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicatePath { .. }));
}

#[test]
fn test_misspelled_key_rejected() {
    let source = concat!(
        "- id: vip\n  label: VIP\n  feature_flag: ghxstship\n",
        "- id: settings\n  label: Settings\n",
    );
    let err = RouteCatalog::from_yaml_str(source).unwrap_err();
    assert!(matches!(err, CatalogError::Syntax(_)));

    let nested = concat!(
        "- id: vip\n  label: VIP\n  children:\n",
        "    - id: vip-a\n      label: A\n      href: /a\n",
    );
    assert!(matches!(
        RouteCatalog::from_yaml_str(nested),
        Err(CatalogError::Syntax(_))
    ));
}
