use pestwatch_common::HotelStatus;

use super::{render_star_rating, render_status_badge, HotelView};
use crate::templates::{build_page, html_escape, PageMeta};

fn status_option(value: &str, label: &str, selected: Option<HotelStatus>) -> String {
    let is_selected = match selected {
        Some(status) => status.to_string() == label,
        None => value.is_empty(),
    };
    let attr = if is_selected { " selected" } else { "" };
    format!(r#"<option value="{value}"{attr}>{label}</option>"#)
}

/// Render the hotel listing with its search form.
pub fn render_hotels_list(hotels: &[HotelView], query: &str, status: Option<HotelStatus>) -> String {
    let mut cards = String::new();

    if hotels.is_empty() {
        cards.push_str(r#"<p class="text-center text-slate-500 py-10">No hotels match your search.</p>"#);
    }

    for hotel in hotels {
        cards.push_str(&format!(
            r#"<div class="hotel-card bg-white dark:bg-slate-800 rounded-lg shadow-md overflow-hidden">
    <img class="h-48 w-full object-cover" src="{image}" alt="{name}" loading="lazy">
    <div class="p-5">
        <div class="uppercase tracking-wide text-xs text-emerald-500 font-semibold">{city}</div>
        <h2 class="mt-1 text-xl font-bold"><a href="/hotels/{id}" class="hover:text-emerald-600">{name}</a></h2>
        <div class="mt-3">{badge}</div>
        <div class="mt-3">{stars}</div>
    </div>
</div>"#,
            image = html_escape(&hotel.image),
            name = html_escape(&hotel.name),
            city = html_escape(&hotel.city),
            id = urlencoding::encode(&hotel.id),
            badge = render_status_badge(hotel, "px-3 py-1 text-sm"),
            stars = render_star_rating(hotel),
        ));
    }

    let content = format!(
        r#"<main class="container mx-auto px-4 sm:px-6 lg:px-8 py-8">
    <h1 class="text-3xl font-extrabold mb-2">Hotel Pest Reports</h1>
    <p class="text-slate-600 dark:text-slate-400 mb-6">Community-sourced reports of bed bugs and other pests. Check before you book.</p>
    <form method="get" action="/" class="flex flex-col sm:flex-row gap-3 mb-8">
        <input type="search" name="q" value="{query}" placeholder="Search by hotel or city" class="flex-grow rounded-md border border-slate-300 px-4 py-2">
        <select name="status" class="rounded-md border border-slate-300 px-4 py-2">{any}{clean}{affected}</select>
        <button type="submit" class="bg-emerald-600 text-white font-semibold rounded-md px-6 py-2">Search</button>
    </form>
    <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">{cards}</div>
</main>"#,
        query = html_escape(query),
        any = status_option("", "Any status", status),
        clean = status_option("clean", "Clean", status),
        affected = status_option("affected", "Affected", status),
    );

    build_page(
        &PageMeta::new(
            "Hotel Pest Reports",
            "Browse community-sourced pest reports for hotels before you book.",
        ),
        &content,
    )
}
