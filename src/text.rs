//! Pure text projections used by the testimonial cards.

/// Fixed-length star row: `rating` filled glyphs, the rest empty.
pub fn star_glyphs(rating: u8) -> String {
    (0..5u8).map(|i| if i < rating { '★' } else { '☆' }).collect()
}

/// Uppercased first character of every whitespace-separated token.
/// A blank name falls back to "User".
pub fn initials(name: &str) -> String {
    let name = if name.trim().is_empty() { "User" } else { name };
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_fill_then_empty() {
        for rating in 1..=5u8 {
            let row = star_glyphs(rating);
            assert_eq!(row.chars().count(), 5);
            assert_eq!(row.chars().take_while(|c| *c == '★').count(), rating as usize);
            assert!(row.chars().skip(rating as usize).all(|c| c == '☆'));
        }
    }

    #[test]
    fn stars_are_deterministic() {
        assert_eq!(star_glyphs(3), star_glyphs(3));
        assert_eq!(star_glyphs(3), "★★★☆☆");
    }

    #[test]
    fn initials_from_tokens() {
        assert_eq!(initials("Rahul Sharma"), "RS");
        assert_eq!(initials("priya"), "P");
        assert_eq!(initials("  spaced   out  name "), "SON");
    }

    #[test]
    fn blank_name_defaults_to_user() {
        assert_eq!(initials(""), "U");
        assert_eq!(initials("   "), "U");
    }
}
