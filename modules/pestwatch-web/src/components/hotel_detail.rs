use super::{render_star_rating, render_status_badge, HotelView, ReportView};
use crate::templates::{build_page, html_escape, PageMeta};

const BACK_LINK: &str = r#"<a href="/" class="back-link text-emerald-600 hover:underline mt-4 inline-block font-semibold">&larr; Back to all hotels</a>"#;

pub fn render_hotel_not_found() -> String {
    let content = format!(
        r#"<main class="text-center py-20">
    <h1 class="text-2xl font-bold">Hotel not found</h1>
    {BACK_LINK}
</main>"#
    );
    build_page(
        &PageMeta::new("Hotel not found", "The requested hotel is not in the directory."),
        &content,
    )
}

fn render_report_entry(report: &ReportView) -> String {
    format!(
        r#"<div class="report-entry p-4 border border-slate-200 dark:border-slate-700 rounded-lg bg-slate-50 dark:bg-slate-800/50">
    <div class="flex justify-between items-center mb-2">
        <p class="text-lg font-semibold text-red-700 dark:text-red-400">{pest_type}</p>
        <p class="text-sm text-slate-500 dark:text-slate-400">{date}</p>
    </div>
    <p class="text-slate-600 dark:text-slate-300"><strong>Notes:</strong> {notes}</p>
</div>"#,
        pest_type = html_escape(&report.pest_type),
        date = html_escape(&report.date),
        notes = html_escape(&report.notes),
    )
}

fn render_reports(reports: &[ReportView]) -> String {
    if reports.is_empty() {
        return r#"<div class="all-clear text-center py-8 px-4 border-2 border-dashed border-slate-300 dark:border-slate-600 rounded-lg">
    <p class="text-slate-600 dark:text-slate-400">No pest issues have been reported for this hotel. All clear!</p>
</div>"#
            .to_string();
    }

    let entries: String = reports.iter().map(render_report_entry).collect();
    format!(r#"<div class="space-y-6">{entries}</div>"#)
}

/// Render a hotel detail page. `structured_data` goes into `<head>`;
/// `comments` is the rendered comment embed, if enabled.
pub fn render_hotel_detail(hotel: &HotelView, structured_data: &str, comments: Option<&str>) -> String {
    let name = html_escape(&hotel.name);
    let city = html_escape(&hotel.city);

    let description_html: String = hotel
        .paragraphs
        .iter()
        .map(|p| format!("<p>{}</p>", html_escape(p)))
        .collect();

    let comments_html = match comments {
        Some(embed) => format!(
            r#"<div class="comments bg-white dark:bg-slate-800 rounded-lg shadow-xl p-8 mt-8">
    <h2 class="text-2xl font-bold mb-4">Community Discussion</h2>
    {embed}
</div>"#
        ),
        None => String::new(),
    };

    let content = format!(
        r#"<main class="container mx-auto px-4 sm:px-6 lg:px-8 py-8">
<div class="lg:grid lg:grid-cols-3 lg:gap-8 lg:items-start">
    <div class="lg:col-span-2">
        <div class="bg-white dark:bg-slate-800 rounded-lg shadow-xl overflow-hidden">
            <div class="md:flex">
                <div class="md:flex-shrink-0">
                    <img class="h-64 w-full object-cover md:w-80" src="{image}" alt="{name}">
                </div>
                <div class="p-8 flex-grow">
                    <div class="uppercase tracking-wide text-sm text-emerald-500 font-semibold">{city}</div>
                    <h1 class="block mt-1 text-3xl leading-tight font-extrabold text-black dark:text-white">{name}</h1>
                    <p class="mt-2 text-slate-500 dark:text-slate-400">Last updated: {last_updated}</p>
                    <div class="mt-4">{badge}</div>
                </div>
            </div>

            <div class="p-8 border-t border-slate-200 dark:border-slate-700 bg-slate-50 dark:bg-slate-800/50">
                <h2 class="text-xl font-bold mb-4 text-slate-800 dark:text-slate-100">Highlights</h2>
                <div class="flex flex-col sm:flex-row sm:items-center sm:space-x-8 space-y-4 sm:space-y-0">
                    {stars}
                    <div class="flex items-center">
                        <span class="text-emerald-500 text-xl mr-2">$</span>
                        <span class="text-lg font-semibold text-slate-700 dark:text-slate-200">{price}</span>
                        <span class="ml-2 text-sm text-slate-500 dark:text-slate-400">Price Range</span>
                    </div>
                </div>
            </div>

            <div class="p-8 border-t border-slate-200 dark:border-slate-700">
                <h2 class="text-2xl font-bold mb-4">Description &amp; Details</h2>
                <div class="text-slate-600 dark:text-slate-300 prose dark:prose-invert max-w-none">{description_html}</div>
            </div>

            <div class="p-8 border-t border-slate-200 dark:border-slate-700">
                <h2 class="text-2xl font-bold mb-4">Pest Report Details</h2>
                {reports}
                <div class="mt-8 text-center text-sm text-slate-500 dark:text-slate-400 italic">
                    <p>All reports are submitted by the community and are not independently verified.</p>
                    <p>Think this is incorrect? You can help by <a href="/report" class="text-emerald-600 hover:underline font-semibold">contributing a report</a>.</p>
                </div>
            </div>
        </div>
        {comments_html}
    </div>
    <div class="lg:col-span-1 mt-8 lg:mt-0">
        <div class="bg-white dark:bg-slate-800 rounded-lg shadow-xl p-6 sticky top-24">
            <h2 class="text-2xl font-bold mb-4 text-slate-800 dark:text-slate-100">Location</h2>
            <div class="relative w-full rounded-lg overflow-hidden border border-slate-200 dark:border-slate-700" style="padding-top:75%;">
                <iframe src="{map_url}" class="absolute top-0 left-0 w-full h-full" style="border:0;" allowfullscreen loading="lazy" referrerpolicy="no-referrer-when-downgrade" title="Map of {name}"></iframe>
            </div>
        </div>
    </div>
</div>
<div class="text-center mt-8">{BACK_LINK}</div>
</main>"#,
        image = html_escape(&hotel.image),
        last_updated = html_escape(&hotel.last_updated),
        badge = render_status_badge(hotel, "px-4 py-2 text-lg"),
        stars = render_star_rating(hotel),
        price = html_escape(&hotel.price_range),
        reports = render_reports(&hotel.reports),
        map_url = html_escape(&hotel.map_url),
    );

    let meta_description = format!(
        "Pest report details for {}, {}. Current status: {}.",
        hotel.name, hotel.city, hotel.status_label
    );
    build_page(
        &PageMeta::new(&hotel.name, &meta_description).with_head(structured_data),
        &content,
    )
}
