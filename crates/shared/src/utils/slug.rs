/// Lowercase, hyphenated, url-safe derivative of a title or name. Runs of
/// non-alphanumeric characters collapse into a single hyphen.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_hyphen = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        slug.push_str("untitled");
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Aloe Vera"), "aloe-vera");
    }

    #[test]
    fn test_slugify_collapses_symbol_runs() {
        assert_eq!(slugify("  Fiddle--Leaf   Fig! "), "fiddle-leaf-fig");
        assert_eq!(slugify("Rose & Thorn"), "rose-thorn");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("...Cactus..."), "cactus");
    }

    #[test]
    fn test_slugify_empty_input_falls_back() {
        assert_eq!(slugify(""), "untitled");
        assert_eq!(slugify("!!!"), "untitled");
    }
}
