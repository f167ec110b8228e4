//! Integration tests for the full and copyable render passes

use pretty_assertions::assert_eq;

use prompt_tags::{
    render, render_copyable, render_full, Catalog, CopyablePolicy, FullPolicy, PlaceholderMode,
    RenderPass,
};

fn catalog(entries: &[(&str, &str, PlaceholderMode)]) -> Catalog {
    let mut catalog = Catalog::new();
    for (name, content, mode) in entries {
        catalog
            .add(name, content, *mode, "#ffffff".to_string())
            .expect("Should add");
    }
    catalog
}

#[test]
fn test_empty_placeholders_never_change_text() {
    let catalog = catalog(&[
        ("a", "", PlaceholderMode::Replace),
        ("b", "", PlaceholderMode::Tag),
    ]);
    let text = "<a> then <b>, <a> again";
    for pass in [RenderPass::Full, RenderPass::Copyable] {
        assert_eq!(render(text, catalog.iter(), &pass), text, "pass {}", pass);
    }
}

#[test]
fn test_tag_mode_full_vs_copyable() {
    let catalog = catalog(&[("spec", "be concise", PlaceholderMode::Tag)]);
    let text = "Follow <spec>.";

    assert_eq!(render(text, catalog.iter(), &FullPolicy), "Follow <spec>.");
    assert_eq!(
        render(text, catalog.iter(), &CopyablePolicy),
        "Follow <spec>\nbe concise\n</spec>."
    );
}

#[test]
fn test_replace_mode_inlined_verbatim() {
    let catalog = catalog(&[("topic", "ownership & borrowing", PlaceholderMode::Replace)]);
    let text = "Explain <topic>. Then quiz me on <topic>.";
    let expected = "Explain ownership & borrowing. Then quiz me on ownership & borrowing.";

    assert_eq!(render_full(text, catalog.iter()), expected);
    assert_eq!(render_copyable(text, catalog.iter()), expected);
}

#[test]
fn test_name_with_metacharacters_matches_literally() {
    let catalog = catalog(&[("a.b*c", "X", PlaceholderMode::Replace)]);
    let text = "<a.b*c> <a.bbbc> <abc> a.b*c";
    assert_eq!(render_full(text, catalog.iter()), "X <a.bbbc> <abc> a.b*c");
}

#[test]
fn test_mixed_prompt_snapshot() {
    let catalog = catalog(&[
        ("role", "a senior Rust reviewer", PlaceholderMode::Replace),
        ("diff", "- let x = 1;\n+ let x = 2;", PlaceholderMode::Tag),
        ("extra", "", PlaceholderMode::Replace),
    ]);
    let text = "You are <role>.\nReview the change below.\n<diff>\n<extra>";

    let preview = render_full(text, catalog.iter());
    insta::assert_snapshot!(preview, @r"
    You are a senior Rust reviewer.
    Review the change below.
    <diff>
    <extra>
    ");

    let copyable = render_copyable(text, catalog.iter());
    insta::assert_snapshot!(copyable, @r"
    You are a senior Rust reviewer.
    Review the change below.
    <diff>
    - let x = 1;
    + let x = 2;
    </diff>
    <extra>
    ");
}

#[test]
fn test_unknown_tags_left_alone() {
    let catalog = catalog(&[("known", "yes", PlaceholderMode::Tag)]);
    assert_eq!(
        render_copyable("<known> <unknown>", catalog.iter()),
        "<known>\nyes\n</known> <unknown>"
    );
}

#[test]
fn test_empty_text_renders_empty() {
    let catalog = catalog(&[("a", "content", PlaceholderMode::Replace)]);
    assert_eq!(render_full("", catalog.iter()), "");
    assert_eq!(render_copyable("", catalog.iter()), "");
}
