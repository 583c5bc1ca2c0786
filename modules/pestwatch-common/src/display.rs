//! Display-only values derived from a hotel record.

use crate::types::HotelStatus;

pub const MAX_STARS: usize = 5;

/// Number of filled stars for a rating: `round(rating)`, half rounds up,
/// clamped to `0..=MAX_STARS`.
pub fn filled_stars(rating: f64) -> usize {
    if !rating.is_finite() {
        return 0;
    }
    rating.round().clamp(0.0, MAX_STARS as f64) as usize
}

/// Filled state of each of the five stars, filled ones first.
pub fn star_states(rating: f64) -> [bool; MAX_STARS] {
    let filled = filled_stars(rating);
    std::array::from_fn(|i| i < filled)
}

/// One decimal place, ties rounding up.
pub fn format_rating(rating: f64) -> String {
    format!("{:.1}", (rating * 10.0).round() / 10.0)
}

/// Description text split into display paragraphs.
pub fn paragraphs(description: &str) -> impl Iterator<Item = &str> {
    description.split('\n')
}

/// Characters `encodeURIComponent` leaves unescaped beyond `urlencoding`'s set.
const URI_COMPONENT_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encode a URI component the way browsers' `encodeURIComponent` does.
pub fn encode_uri_component(s: &str) -> String {
    // `%` itself encodes as `%25`, so these sequences only come from the marks
    URI_COMPONENT_MARKS
        .iter()
        .fold(urlencoding::encode(s).into_owned(), |acc, &(escaped, raw)| {
            acc.replace(escaped, raw)
        })
}

/// Google Maps embed for `"{name}, {city}"`.
pub fn map_embed_url(name: &str, city: &str) -> String {
    let query = encode_uri_component(&format!("{name}, {city}"));
    format!("https://maps.google.com/maps?q={query}&t=&z=13&ie=UTF8&iwloc=&output=embed")
}

/// Badge styling for a hotel status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub text_class: &'static str,
    pub bg_class: &'static str,
    pub icon: &'static str,
}

impl StatusStyle {
    pub fn for_status(status: HotelStatus) -> Self {
        match status {
            HotelStatus::Clean => StatusStyle {
                text_class: "text-emerald-600 dark:text-emerald-400",
                bg_class: "bg-emerald-100 dark:bg-emerald-900",
                icon: "\u{2705}",
            },
            HotelStatus::Affected => StatusStyle {
                text_class: "text-red-600 dark:text-red-400",
                bg_class: "bg-red-100 dark:bg-red-900",
                icon: "\u{26a0}\u{fe0f}",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_stars_rounds_half_up() {
        assert_eq!(filled_stars(0.0), 0);
        assert_eq!(filled_stars(0.49), 0);
        assert_eq!(filled_stars(0.49999999999999994), 0);
        assert_eq!(filled_stars(0.5), 1);
        assert_eq!(filled_stars(2.5), 3);
        assert_eq!(filled_stars(3.4), 3);
        assert_eq!(filled_stars(4.6), 5);
        assert_eq!(filled_stars(5.0), 5);
    }

    #[test]
    fn filled_stars_clamps_out_of_range() {
        assert_eq!(filled_stars(-1.0), 0);
        assert_eq!(filled_stars(7.2), 5);
        assert_eq!(filled_stars(f64::NAN), 0);
    }

    #[test]
    fn star_states_fill_exactly_rounded_count_across_range() {
        for tenths in 0..=50 {
            let rating = tenths as f64 / 10.0;
            let states = star_states(rating);
            let filled = states.iter().filter(|s| **s).count();
            assert_eq!(filled, rating.round() as usize, "rating {rating}");
            // filled stars lead
            assert!(states.windows(2).all(|w| w[0] || !w[1]), "rating {rating}");
        }
    }

    #[test]
    fn format_rating_uses_one_decimal() {
        assert_eq!(format_rating(4.0), "4.0");
        assert_eq!(format_rating(3.66), "3.7");
    }

    #[test]
    fn format_rating_rounds_ties_up() {
        assert_eq!(format_rating(4.25), "4.3");
        assert_eq!(format_rating(0.25), "0.3");
        assert_eq!(format_rating(2.75), "2.8");
    }

    #[test]
    fn paragraphs_split_on_newlines() {
        let parts: Vec<_> = paragraphs("First.\nSecond.\n\nFourth.").collect();
        assert_eq!(parts, vec!["First.", "Second.", "", "Fourth."]);
    }

    #[test]
    fn map_url_encodes_name_and_city() {
        assert_eq!(
            map_embed_url("Harbor View Inn", "Boston"),
            "https://maps.google.com/maps?q=Harbor%20View%20Inn%2C%20Boston&t=&z=13&ie=UTF8&iwloc=&output=embed"
        );
    }

    #[test]
    fn map_url_escapes_query_delimiters() {
        let url = map_embed_url("B&B #1", "Zürich");
        assert!(url.contains("q=B%26B%20%231%2C%20Z%C3%BCrich&t="));
    }

    #[test]
    fn map_url_leaves_uri_component_marks_raw() {
        let url = map_embed_url("Caesar's (Strip)!*", "Las Vegas");
        assert!(url.contains("q=Caesar's%20(Strip)!*%2C%20Las%20Vegas&t="), "{url}");
    }

    #[test]
    fn encoded_percent_is_not_mistaken_for_a_mark() {
        assert_eq!(encode_uri_component("100%27"), "100%2527");
    }

    #[test]
    fn status_style_differs_by_status() {
        let clean = StatusStyle::for_status(HotelStatus::Clean);
        let affected = StatusStyle::for_status(HotelStatus::Affected);
        assert!(clean.text_class.contains("emerald"));
        assert!(affected.text_class.contains("red"));
        assert_ne!(clean.icon, affected.icon);
    }
}
