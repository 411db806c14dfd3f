//! Import resolution against real files

use busy::{resolve_imports, FsWorkspace, ImportError, ImportResolver};

use super::helpers::{document_text, load, temp_workspace, write_file};

#[test]
fn test_resolves_nested_imports_relative_to_importer() {
    let temp = temp_workspace();
    let root = temp.path();

    let main = write_file(
        root,
        "main.busy.md",
        &document_text("Main", "[Operation]", "[Lead]: ./concepts/lead.busy.md\n"),
    );
    write_file(
        root,
        "concepts/lead.busy.md",
        &document_text("Lead", "[Concept]", "[Score]: ../shared/score.busy.md\n"),
    );
    write_file(
        root,
        "shared/score.busy.md",
        &document_text("Score", "[Concept]", ""),
    );

    let resolved = resolve_imports(&load(&main), root).unwrap();

    let names: Vec<(&str, &str)> = resolved
        .iter()
        .map(|(concept, doc)| (concept.as_str(), doc.name()))
        .collect();
    assert_eq!(names, vec![("Lead", "Lead"), ("Score", "Score")]);
}

#[test]
fn test_two_file_cycle() {
    let temp = temp_workspace();
    let root = temp.path();

    let a = write_file(
        root,
        "a.busy.md",
        &document_text("A", "[Document]", "[B]: ./b.busy.md\n"),
    );
    write_file(
        root,
        "b.busy.md",
        &document_text("B", "[Document]", "[A]: ./a.busy.md\n"),
    );

    let workspace = FsWorkspace::new(root);
    let err = ImportResolver::new(&workspace)
        .resolve(&load(&a), root)
        .unwrap_err();
    assert!(matches!(err, ImportError::Circular { .. }), "got {err:?}");
}

#[test]
fn test_diamond_imports_succeed() {
    let temp = temp_workspace();
    let root = temp.path();

    let a = write_file(
        root,
        "a.busy.md",
        &document_text("A", "[Document]", "[B]: ./b.busy.md\n[C]: ./c.busy.md\n"),
    );
    write_file(
        root,
        "b.busy.md",
        &document_text("B", "[Document]", "[D]: ./d.busy.md\n"),
    );
    write_file(
        root,
        "c.busy.md",
        &document_text("C", "[Document]", "[D]: ./d.busy.md\n"),
    );
    write_file(root, "d.busy.md", &document_text("D", "[Document]", ""));

    let workspace = FsWorkspace::new(root);
    let resolved = ImportResolver::new(&workspace)
        .resolve(&load(&a), root)
        .unwrap();

    assert_eq!(resolved.len(), 3);
    assert!(resolved.contains_key("B"));
    assert!(resolved.contains_key("C"));
    assert_eq!(resolved["D"].name(), "D");
}

#[test]
fn test_missing_file() {
    let temp = temp_workspace();
    let root = temp.path();
    let main = write_file(
        root,
        "main.busy.md",
        &document_text("Main", "[Document]", "[Gone]: ./gone.busy.md\n"),
    );

    let err = resolve_imports(&load(&main), root).unwrap_err();
    assert!(matches!(err, ImportError::NotFound { .. }));
    assert!(err.to_string().contains("./gone.busy.md"));
}

#[test]
fn test_unknown_anchor_names_anchor() {
    let temp = temp_workspace();
    let root = temp.path();
    let main = write_file(
        root,
        "main.busy.md",
        &document_text("Main", "[Document]", "[R]: ./review.busy.md#weekly-review\n"),
    );
    write_file(
        root,
        "review.busy.md",
        &document_text(
            "Review",
            "[Operation]",
            "# Operations\n## Daily Review\n### Steps\n1. Review\n",
        ),
    );

    let err = resolve_imports(&load(&main), root).unwrap_err();
    assert!(matches!(err, ImportError::AnchorNotFound { .. }));
    assert!(err.to_string().contains("weekly-review"));
}

#[test]
fn test_anchor_matches_local_definition() {
    let temp = temp_workspace();
    let root = temp.path();
    let main = write_file(
        root,
        "main.busy.md",
        &document_text("Main", "[Document]", "[Hot]: ./glossary.busy.md#hot-lead\n"),
    );
    write_file(
        root,
        "glossary.busy.md",
        &document_text(
            "Glossary",
            "[Document]",
            "# Local Definitions\n## Hot Lead\nReplied within a day.\n",
        ),
    );

    let resolved = resolve_imports(&load(&main), root).unwrap();
    assert_eq!(resolved["Hot"].name(), "Glossary");
}

#[test]
fn test_invalid_target_keeps_cause() {
    let temp = temp_workspace();
    let root = temp.path();
    let main = write_file(
        root,
        "main.busy.md",
        &document_text("Main", "[Document]", "[Tools]: ./tools.busy.md\n"),
    );
    write_file(
        root,
        "tools.busy.md",
        &document_text("Tools", "[Tool]", "# Setup\nNothing here.\n"),
    );

    let err = resolve_imports(&load(&main), root).unwrap_err();
    match &err {
        ImportError::Invalid { path, source } => {
            assert_eq!(path, "./tools.busy.md");
            assert!(source.is_validation());
        }
        other => panic!("expected invalid import, got {other:?}"),
    }
}
