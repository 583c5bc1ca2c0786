use crate::templates::{build_page, html_escape, PageMeta};

/// Render the report-submission page around the external form.
pub fn render_report(form_url: &str) -> String {
    let content = format!(
        r#"<main class="container mx-auto px-4 sm:px-6 lg:px-8 py-12">
<div class="max-w-3xl mx-auto bg-white dark:bg-slate-800 p-8 rounded-lg shadow-md">
    <h1 class="text-3xl font-extrabold text-slate-900 dark:text-white mb-4">Contribute a Hotel Report</h1>
    <div class="prose prose-lg dark:prose-invert max-w-none text-slate-600 dark:text-slate-300 mb-8">
        <p>Thank you for helping keep our travel community safe! Please use the form below to report a new pest issue, confirm a hotel is clean, or update existing hotel details.</p>
        <p>All submissions are reviewed by our volunteer maintainers before being added to the public dataset on GitHub. This helps us ensure the data is as accurate and helpful as possible.</p>
    </div>
    <div class="relative h-[800px] overflow-hidden rounded-lg border border-slate-200 dark:border-slate-700">
        <iframe src="{src}" width="100%" height="100%" frameborder="0" marginheight="0" marginwidth="0" title="Hotel Report Form" class="absolute top-0 left-0 w-full h-full">Loading&hellip;</iframe>
    </div>
</div>
</main>"#,
        src = html_escape(form_url),
    );

    build_page(
        &PageMeta::new(
            "Contribute a Report",
            "Help the community by submitting a hotel pest report through our simple form. Your contribution helps travelers stay safe.",
        ),
        &content,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_the_configured_form() {
        let html = render_report("https://forms.example.org/r?a=1&b=2");
        assert!(html.contains("<title>Contribute a Report | Pestwatch</title>"));
        assert!(html.contains(r#"<iframe src="https://forms.example.org/r?a=1&amp;b=2""#));
        assert!(html.contains(r#"title="Hotel Report Form""#));
        assert_eq!(html.matches("<iframe").count(), 1);
    }
}
