/// Derives a URL slug from a question title.
///
/// Lowercases the title, drops characters outside `[a-z0-9_\s-]`, and
/// collapses runs of whitespace, underscores, and hyphens into single
/// hyphens with no leading or trailing hyphen. Falls back to `"question"`
/// when nothing survives, so the unique-suffix probe always has a base.
///
/// # Arguments
/// - `title` - The question title to slugify
///
/// # Returns
/// - The slugified title, e.g. `"How to code?"` becomes `"how-to-code"`
pub fn generate_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.trim().chars() {
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch);
            pending_hyphen = false;
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_hyphen = true;
        }
        // every other character is dropped without separating words
    }

    if slug.is_empty() {
        return "question".to_string();
    }

    slug
}

/// Appends a numeric suffix to a base slug, used when probing for a free
/// slug after a collision.
pub fn slug_with_suffix(base: &str, counter: u32) -> String {
    format!("{}-{}", base, counter)
}
