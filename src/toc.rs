//! Markdown heading anchors for the procedure index.

/// GitHub-style anchor slug for a heading: lowercase, keep alphanumerics,
/// spaces and hyphens, drop everything else. NetLogo procedure names may
/// carry `?`, `!`, `=` and the like — all stripped.
pub fn slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}

/// Index list entry linking to a procedure heading.
pub fn index_item(name: &str) -> String {
    format!("* [{}](#{})", name, slug(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_plain() {
        assert_eq!(slug("setup"), "setup");
    }

    #[test]
    fn slug_keeps_hyphens() {
        assert_eq!(slug("setup-turtles"), "setup-turtles");
    }

    #[test]
    fn slug_strips_predicate_marks() {
        assert_eq!(slug("any-wolves?"), "any-wolves");
        assert_eq!(slug("grow!"), "grow");
    }

    #[test]
    fn slug_lowercases() {
        assert_eq!(slug("Setup-Patches"), "setup-patches");
    }

    #[test]
    fn index_item_links_to_slug() {
        assert_eq!(
            index_item("any-wolves?"),
            "* [any-wolves?](#any-wolves)"
        );
    }
}
