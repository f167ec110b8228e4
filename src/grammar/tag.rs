//! Tag formatting and literal matching

use regex::{NoExpand, Regex};

/// Build the opening tag `<name>`
pub fn format_tag(name: &str) -> String {
    format!("<{}>", name)
}

/// Build the closing tag `</name>`
pub fn closing_tag(name: &str) -> String {
    format!("</{}>", name)
}

/// Wrap `content` between opening and closing tags, each on its own line
pub fn wrap_in_tag(name: &str, content: &str) -> String {
    format!("{}\n{}\n{}", format_tag(name), content, closing_tag(name))
}

/// Regex source that matches exactly the literal tag `<name>`
///
/// Metacharacters in `name` are escaped, so `a.b*c` only matches `<a.b*c>`.
pub fn tag_pattern(name: &str) -> String {
    regex::escape(&format_tag(name))
}

/// Replace every occurrence of the tag `<name>` in `text` with `replacement`
///
/// Matching is global and case-sensitive. `replacement` is inserted
/// verbatim: `$` sequences are not expanded as capture references.
pub fn replace_tag(text: &str, name: &str, replacement: &str) -> String {
    match Regex::new(&tag_pattern(name)) {
        Ok(re) => re.replace_all(text, NoExpand(replacement)).into_owned(),
        Err(e) => {
            // An escaped literal only fails to compile when it exceeds the size limit
            log::warn!("tag pattern for {:?} rejected ({}), using literal match", name, e);
            text.replace(&format_tag(name), replacement)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_and_close() {
        assert_eq!(format_tag("topic"), "<topic>");
        assert_eq!(closing_tag("topic"), "</topic>");
    }

    #[test]
    fn test_wrap_in_tag() {
        assert_eq!(wrap_in_tag("ctx", "body"), "<ctx>\nbody\n</ctx>");
    }

    #[test]
    fn test_pattern_escapes_metacharacters() {
        let re = Regex::new(&tag_pattern("a.b*c")).unwrap();
        assert!(re.is_match("<a.b*c>"));
        assert!(!re.is_match("<aXbbbc>"));
        assert!(!re.is_match("<ab>"));
    }

    #[test]
    fn test_pattern_escapes_every_special() {
        let name = r".*+?^${}()|[]\";
        let text = format!("x {} y", format_tag(name));
        assert_eq!(replace_tag(&text, name, "ok"), "x ok y");
    }

    #[test]
    fn test_replace_is_global_and_case_sensitive() {
        let out = replace_tag("<n> <N> <n>", "n", "v");
        assert_eq!(out, "v <N> v");
    }

    #[test]
    fn test_replacement_is_not_expanded() {
        let out = replace_tag("cost: <price>", "price", "$1.00 ${x}");
        assert_eq!(out, "cost: $1.00 ${x}");
    }
}
