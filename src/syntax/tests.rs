use super::*;
use std::path::Path;

#[test]
fn test_table_kind_policy() {
    assert!(is_table_kind("pipe_table"));
    assert!(is_table_kind("pipe_table_delimiter_row"));
    assert!(is_table_kind("TableCell"));
    assert!(is_table_kind("tableDelimiter"));
    assert!(!is_table_kind("paragraph"));
    assert!(!is_table_kind("list_item"));
}

#[test]
fn test_no_syntax_is_never_a_table() {
    assert!(!NoSyntax.is_within_table_construct(0));
    assert!(!NoSyntax.is_within_table_construct(usize::MAX));
}

#[test]
fn test_closure_probe() {
    let probe = |offset: usize| (10..20).contains(&offset);
    assert!(probe.is_within_table_construct(12));
    assert!(!probe.is_within_table_construct(25));
}

#[test]
fn test_loader_rejects_unknown_extension() {
    let loader = loader::LanguageLoader::new();
    let err = loader
        .load_language_for_file(Path::new("notes.txt"))
        .err()
        .unwrap();
    assert_eq!(err.code, "UNKNOWN_EXTENSION");

    let err = loader.load_language_for_file(Path::new("README")).err().unwrap();
    assert_eq!(err.code, "NO_EXTENSION");
}

#[test]
fn test_loader_unknown_language() {
    let err = loader::LanguageLoader::new()
        .load_language("cobol")
        .err()
        .unwrap();
    assert_eq!(err.kind, ErrorType::Syntax);
    assert_eq!(err.code, errors::LANGUAGE_ERROR);
}

#[cfg(feature = "treesitter")]
mod markdown {
    use super::*;

    const DOC: &str = "Intro text\n\n| Name | Qty |\n| ---- | --- |\n| pear | 3   |\n\nAfter\n";

    fn line_offset(line: usize) -> usize {
        DOC.split('\n').take(line).map(|l| l.len() + 1).sum()
    }

    #[test]
    fn test_loader_finds_markdown() {
        let loaded = loader::LanguageLoader::new()
            .load_language_for_file(Path::new("notes.md"))
            .unwrap();
        assert_eq!(loaded.name, "markdown");
    }

    #[test]
    fn test_for_file_checks_extension() {
        let syntax = MarkdownSyntax::for_file(Path::new("notes.markdown"), DOC).unwrap();
        assert!(syntax.is_within_table_construct(line_offset(2) + 2));

        let err = MarkdownSyntax::for_file(Path::new("notes.txt"), DOC)
            .err()
            .unwrap();
        assert_eq!(err.code, "UNKNOWN_EXTENSION");
    }

    #[test]
    fn test_table_rows_are_detected() {
        let syntax = MarkdownSyntax::for_text(DOC).unwrap();
        assert!(syntax.tree.is_some());

        for line in 2..=4 {
            assert!(
                syntax.is_within_table_construct(line_offset(line) + 2),
                "line {} should be in the table",
                line
            );
        }
    }

    #[test]
    fn test_text_outside_table() {
        let syntax = MarkdownSyntax::for_text(DOC).unwrap();
        assert!(!syntax.is_within_table_construct(line_offset(0) + 2));
        assert!(!syntax.is_within_table_construct(line_offset(6) + 2));
    }

    #[test]
    fn test_reparse_replaces_tree() {
        let mut syntax = MarkdownSyntax::for_text(DOC).unwrap();
        syntax.parse("just a paragraph\n").unwrap();
        assert!(!syntax.is_within_table_construct(2));
    }
}
