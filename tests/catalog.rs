// Operation catalog, snippet lookup and export

use std::fs;
use std::path::PathBuf;

use dllviz::catalog::snippets::{export_file_name, export_snippet, BuiltinSnippets, Language, SnippetBank};
use dllviz::catalog::{Category, OperationKind};
use dllviz::engine::SimError;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("dllviz-{}-{}", name, std::process::id()));
    fs::create_dir_all(&dir).expect("scratch dir");
    dir
}

#[test]
fn test_operation_keys_parse_back() {
    for kind in OperationKind::ALL {
        let parsed: OperationKind = kind.key().parse().expect("key parses");
        assert_eq!(parsed, kind);
    }
    assert_eq!(
        "Delete_Value".parse::<OperationKind>().ok(),
        Some(OperationKind::DeleteByValue)
    );
}

#[test]
fn test_unknown_operation_is_an_error() {
    let err = "reverse".parse::<OperationKind>().unwrap_err();
    assert!(matches!(err, SimError::UnknownOperation(ref name) if name == "reverse"));
    assert_eq!(err.to_string(), "unknown operation 'reverse'");
}

#[test]
fn test_operation_cycle_wraps() {
    let mut kind = OperationKind::default();
    for _ in 0..OperationKind::ALL.len() {
        kind = kind.next();
    }
    assert_eq!(kind, OperationKind::default());
    assert_eq!(OperationKind::InsertHead.prev(), OperationKind::DeleteByValue);
}

#[test]
fn test_operation_metadata() {
    assert_eq!(OperationKind::InsertHead.info().time_complexity, "O(1)");
    assert_eq!(OperationKind::InsertTail.info().time_complexity, "O(n)");
    assert_eq!(OperationKind::DeleteHead.info().category, Category::Deletion);
    assert!(OperationKind::InsertPosition.needs_position());
    assert!(OperationKind::DeleteByValue.needs_value());
    assert!(!OperationKind::DeleteTail.needs_value());
}

#[test]
fn test_every_operation_has_a_snippet_in_every_language() {
    let bank = BuiltinSnippets;
    for kind in OperationKind::ALL {
        for language in Language::ALL {
            let text = bank.snippet(kind, language);
            assert!(
                text.is_some_and(|t| !t.trim().is_empty()),
                "missing {} snippet for {}",
                language,
                kind
            );
        }
    }
}

#[test]
fn test_language_parsing_and_cycle() {
    assert_eq!("c++".parse::<Language>().ok(), Some(Language::Cpp));
    assert_eq!("JS".parse::<Language>().ok(), Some(Language::JavaScript));
    assert!(matches!(
        "cobol".parse::<Language>(),
        Err(SimError::UnknownLanguage(_))
    ));
    assert_eq!(Language::JavaScript.next(), Language::Cpp);
}

#[test]
fn test_export_file_name_drops_spaces() {
    assert_eq!(
        export_file_name(OperationKind::InsertHead, Language::Cpp),
        "DLL_InsertatHead.cpp"
    );
    assert_eq!(
        export_file_name(OperationKind::DeleteByValue, Language::Python),
        "DLL_DeletebyValue.py"
    );
}

#[test]
fn test_export_writes_snippet_text() {
    let dir = scratch_dir("export");
    let bank = BuiltinSnippets;
    let path = export_snippet(&bank, OperationKind::DeleteTail, Language::Java, &dir)
        .expect("export succeeds");

    assert_eq!(path, dir.join("DLL_DeletefromTail.java"));
    let written = fs::read_to_string(&path).expect("exported file");
    assert_eq!(
        Some(written.as_str()),
        bank.snippet(OperationKind::DeleteTail, Language::Java)
    );
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_export_into_missing_directory_fails() {
    let dir = scratch_dir("missing").join("does-not-exist");
    let err = export_snippet(&BuiltinSnippets, OperationKind::InsertTail, Language::Cpp, &dir)
        .unwrap_err();
    assert!(matches!(err, SimError::Export { .. }));
}

struct EmptyBank;

impl SnippetBank for EmptyBank {
    fn snippet(&self, _kind: OperationKind, _language: Language) -> Option<&str> {
        None
    }
}

#[test]
fn test_export_without_snippet_fails() {
    let dir = scratch_dir("empty-bank");
    let err = export_snippet(&EmptyBank, OperationKind::InsertHead, Language::Python, &dir)
        .unwrap_err();
    assert!(matches!(err, SimError::MissingSnippet { .. }));
    assert!(!dir.join("DLL_InsertatHead.py").exists());
}
