use pestwatch_common::display::MAX_STARS;
use pestwatch_common::Hotel;
use serde_json::json;

use crate::templates::script_safe;

/// schema.org `Hotel` structured data as a `<script type="application/ld+json">` element.
pub fn hotel_json_ld(hotel: &Hotel, page_url: &str) -> String {
    let data = json!({
        "@context": "https://schema.org",
        "@type": "Hotel",
        "name": hotel.name,
        "description": hotel.description,
        "image": hotel.image,
        "url": page_url,
        "priceRange": hotel.price_range,
        "address": {
            "@type": "PostalAddress",
            "addressLocality": hotel.city,
        },
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": hotel.avg_rating,
            "bestRating": MAX_STARS,
            "worstRating": 0,
        },
    });

    format!(
        r#"<script type="application/ld+json">{}</script>"#,
        script_safe(&data.to_string())
    )
}
