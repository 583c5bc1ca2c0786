pub const SITE_NAME: &str = "Pestwatch";

/// Per-page `<head>` metadata.
pub struct PageMeta<'a> {
    pub title: &'a str,
    pub description: &'a str,
    /// Raw markup appended to `<head>` (structured data).
    pub head_extra: &'a str,
}

impl<'a> PageMeta<'a> {
    pub fn new(title: &'a str, description: &'a str) -> Self {
        Self {
            title,
            description,
            head_extra: "",
        }
    }

    pub fn with_head(mut self, head_extra: &'a str) -> Self {
        self.head_extra = head_extra;
        self
    }
}

pub fn build_page(meta: &PageMeta<'_>, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {SITE_NAME}</title>
<meta name="description" content="{description}">
<meta property="og:title" content="{title}">
<meta property="og:description" content="{description}">
<script src="https://cdn.tailwindcss.com"></script>
{head_extra}
</head>
<body class="bg-slate-100 dark:bg-slate-900 text-slate-800 dark:text-slate-200 font-sans min-h-screen">
<header class="bg-white dark:bg-slate-800 shadow-sm sticky top-0 z-10">
    <div class="container mx-auto px-4 sm:px-6 lg:px-8 py-4 flex items-center justify-between">
        <a href="/" class="text-xl font-extrabold text-emerald-600">{SITE_NAME}</a>
        <nav class="space-x-6 text-sm font-semibold">
            <a href="/" class="hover:text-emerald-600">Hotels</a>
            <a href="/report" class="hover:text-emerald-600">Contribute a Report</a>
        </nav>
    </div>
</header>
{content}
<footer class="text-center text-xs text-slate-500 py-8">Community-sourced pest reports. Data maintained on GitHub.</footer>
</body>
</html>"#,
        title = html_escape(meta.title),
        description = html_escape(meta.description),
        head_extra = meta.head_extra,
    )
}

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Make serialized JSON safe to inline inside a `<script>` element.
pub fn script_safe(json: &str) -> String {
    json.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom's & Co</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom&#39;s &amp; Co&lt;/a&gt;"
        );
    }

    #[test]
    fn page_carries_title_and_description() {
        let page = build_page(&PageMeta::new("Harbor <Inn>", "Details"), "<main></main>");
        assert!(page.contains("<title>Harbor &lt;Inn&gt; | Pestwatch</title>"));
        assert!(page.contains(r#"<meta name="description" content="Details">"#));
        assert!(page.contains("<main></main>"));
    }

    #[test]
    fn script_safe_breaks_closing_tags() {
        assert_eq!(script_safe(r#"{"a":"</script>"}"#), r#"{"a":"<\/script>"}"#);
    }
}
