use pestwatch_common::display::{self, StatusStyle, MAX_STARS};
use pestwatch_common::Hotel;

pub mod hotel_detail;
pub mod hotels_list;
pub mod report;
pub mod seo;

pub use hotel_detail::{render_hotel_detail, render_hotel_not_found};
pub use hotels_list::render_hotels_list;
pub use report::render_report;

// --- View Models ---

#[derive(Clone, PartialEq)]
pub struct HotelView {
    pub id: String,
    pub name: String,
    pub city: String,
    pub image: String,
    pub status_label: String,
    pub status_style: StatusStyle,
    pub stars: [bool; MAX_STARS],
    pub rating_label: String,
    pub price_range: String,
    pub last_updated: String,
    pub paragraphs: Vec<String>,
    pub reports: Vec<ReportView>,
    pub map_url: String,
}

#[derive(Clone, PartialEq)]
pub struct ReportView {
    pub pest_type: String,
    pub date: String,
    pub notes: String,
}

pub fn hotel_to_view(hotel: &Hotel) -> HotelView {
    HotelView {
        id: hotel.id.clone(),
        name: hotel.name.clone(),
        city: hotel.city.clone(),
        image: hotel.image.clone(),
        status_label: hotel.status.to_string(),
        status_style: StatusStyle::for_status(hotel.status),
        stars: display::star_states(hotel.avg_rating),
        rating_label: display::format_rating(hotel.avg_rating),
        price_range: hotel.price_range.clone(),
        last_updated: hotel.last_updated.clone(),
        paragraphs: display::paragraphs(&hotel.description)
            .map(str::to_string)
            .collect(),
        reports: hotel
            .reports
            .iter()
            .map(|r| ReportView {
                pest_type: r.pest_type.clone(),
                date: r.date.clone(),
                notes: r.notes.clone(),
            })
            .collect(),
        map_url: display::map_embed_url(&hotel.name, &hotel.city),
    }
}

/// Five star icons followed by the numeric rating.
pub(crate) fn render_star_rating(view: &HotelView) -> String {
    let stars: String = view
        .stars
        .iter()
        .map(|filled| {
            if *filled {
                r#"<span class="star filled text-amber-400 text-2xl" aria-hidden="true">&#9733;</span>"#
            } else {
                r#"<span class="star text-slate-300 dark:text-slate-600 text-2xl" aria-hidden="true">&#9734;</span>"#
            }
        })
        .collect();

    format!(
        r#"<div class="flex items-center">{stars}<span class="ml-2 text-slate-600 dark:text-slate-300 font-semibold">{rating}</span><span class="ml-1 text-sm text-slate-500 dark:text-slate-400">/ 5</span></div>"#,
        rating = view.rating_label,
    )
}

pub(crate) fn render_status_badge(view: &HotelView, size_class: &str) -> String {
    format!(
        r#"<span class="status-badge inline-flex items-center rounded-full font-semibold {size_class} {text} {bg}">{icon}<span class="ml-2">{label}</span></span>"#,
        text = view.status_style.text_class,
        bg = view.status_style.bg_class,
        icon = view.status_style.icon,
        label = crate::templates::html_escape(&view.status_label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pestwatch_common::{HotelStatus, PestReport};

    fn hotel(rating: f64) -> Hotel {
        Hotel {
            id: "midtown".to_string(),
            name: "Midtown Suites".to_string(),
            city: "New York".to_string(),
            image: "https://img.example.org/m.jpg".to_string(),
            description: "Line one.\nLine two.".to_string(),
            avg_rating: rating,
            price_range: "$$".to_string(),
            status: HotelStatus::Affected,
            last_updated: "2024-05-28".to_string(),
            reports: vec![PestReport {
                pest_type: "Bed bugs".to_string(),
                date: "2024-05-20".to_string(),
                notes: "9th floor".to_string(),
            }],
        }
    }

    #[test]
    fn view_derives_display_values() {
        let view = hotel_to_view(&hotel(3.6));
        assert_eq!(view.status_label, "Affected");
        assert_eq!(view.rating_label, "3.6");
        assert_eq!(view.stars, [true, true, true, true, false]);
        assert_eq!(view.paragraphs, vec!["Line one.", "Line two."]);
        assert_eq!(view.reports.len(), 1);
        assert!(view.map_url.contains("q=Midtown%20Suites%2C%20New%20York"));
    }

    #[test]
    fn star_rating_renders_rounded_filled_count() {
        for (rating, filled) in [(0.0, 0), (1.4, 1), (2.5, 3), (4.9, 5)] {
            let html = render_star_rating(&hotel_to_view(&hotel(rating)));
            assert_eq!(html.matches("star filled").count(), filled, "rating {rating}");
            assert_eq!(html.matches(r#"class="star text-slate"#).count(), 5 - filled, "rating {rating}");
        }
    }
}
