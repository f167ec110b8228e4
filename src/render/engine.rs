//! Substitution of placeholder tags in template text

use crate::grammar::{replace_tag, wrap_in_tag};
use crate::placeholder::Placeholder;

use super::policy::RenderPolicy;

/// Render `text` by expanding the placeholders the policy admits
///
/// Placeholders are applied one after another in the order given, each
/// replacing every occurrence of its tag. A placeholder with empty content
/// leaves its tag in place, as does one the policy filters out. Tags that
/// name no placeholder are left untouched.
pub fn render<'a, I, P>(text: &str, placeholders: I, policy: &P) -> String
where
    I: IntoIterator<Item = &'a Placeholder>,
    P: RenderPolicy + ?Sized,
{
    if text.is_empty() {
        return String::new();
    }

    placeholders
        .into_iter()
        .filter(|p| policy.includes(p))
        .fold(text.to_string(), |acc, p| expand(&acc, p, policy))
}

fn expand<P: RenderPolicy + ?Sized>(text: &str, placeholder: &Placeholder, policy: &P) -> String {
    if placeholder.content.is_empty() {
        return text.to_string();
    }

    let replacement = if policy.wraps(placeholder) {
        wrap_in_tag(&placeholder.name, &placeholder.content)
    } else {
        placeholder.content.clone()
    };
    replace_tag(text, &placeholder.name, &replacement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::{PlaceholderId, PlaceholderMode};
    use crate::render::{CopyablePolicy, FnPolicy, FullPolicy};

    fn p(id: u64, name: &str, content: &str, mode: PlaceholderMode) -> Placeholder {
        Placeholder::new(PlaceholderId(id), name, "#fff")
            .with_content(content)
            .with_mode(mode)
    }

    #[test]
    fn test_empty_text() {
        let catalog = vec![p(0, "x", "value", PlaceholderMode::Replace)];
        assert_eq!(render("", &catalog, &FullPolicy), "");
        assert_eq!(render("", &catalog, &CopyablePolicy), "");
    }

    #[test]
    fn test_replace_mode_inlined_by_both() {
        let catalog = vec![p(0, "lang", "Rust", PlaceholderMode::Replace)];
        let text = "Write it in <lang>, only <lang>.";
        assert_eq!(render(text, &catalog, &FullPolicy), "Write it in Rust, only Rust.");
        assert_eq!(render(text, &catalog, &CopyablePolicy), "Write it in Rust, only Rust.");
    }

    #[test]
    fn test_tag_mode_diverges() {
        let catalog = vec![p(0, "ctx", "some context", PlaceholderMode::Tag)];
        let text = "Use <ctx> here";
        assert_eq!(render(text, &catalog, &FullPolicy), "Use <ctx> here");
        assert_eq!(
            render(text, &catalog, &CopyablePolicy),
            "Use <ctx>\nsome context\n</ctx> here"
        );
    }

    #[test]
    fn test_empty_content_keeps_tag() {
        let catalog = vec![
            p(0, "a", "", PlaceholderMode::Replace),
            p(1, "b", "", PlaceholderMode::Tag),
        ];
        let text = "<a> and <b>";
        assert_eq!(render(text, &catalog, &FullPolicy), text);
        assert_eq!(render(text, &catalog, &CopyablePolicy), text);
    }

    #[test]
    fn test_unknown_tags_untouched() {
        let catalog = vec![p(0, "a", "A", PlaceholderMode::Replace)];
        assert_eq!(render("<a> <b>", &catalog, &CopyablePolicy), "A <b>");
    }

    #[test]
    fn test_escaped_name_matches_literally() {
        let catalog = vec![p(0, "a.b*c", "hit", PlaceholderMode::Replace)];
        let out = render("<a.b*c> <aXbbc> <ab>", &catalog, &FullPolicy);
        assert_eq!(out, "hit <aXbbc> <ab>");
    }

    #[test]
    fn test_fold_in_catalog_order() {
        // Content of an earlier placeholder is visible to later ones
        let catalog = vec![
            p(0, "outer", "[<inner>]", PlaceholderMode::Replace),
            p(1, "inner", "x", PlaceholderMode::Replace),
        ];
        assert_eq!(render("<outer>", &catalog, &FullPolicy), "[x]");

        let reversed: Vec<_> = catalog.iter().rev().cloned().collect();
        assert_eq!(render("<outer>", &reversed, &FullPolicy), "[<inner>]");
    }

    #[test]
    fn test_custom_policy() {
        let catalog = vec![
            p(0, "a", "A", PlaceholderMode::Replace),
            p(1, "b", "B", PlaceholderMode::Replace),
        ];
        let only_b = FnPolicy::new(|p: &Placeholder| p.name == "b", |_: &Placeholder| true);
        assert_eq!(render("<a><b>", &catalog, &only_b), "<a><b>\nB\n</b>");
    }
}
