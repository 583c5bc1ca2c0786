//! Disqus comment embed.
//!
//! A [`DisqusEmbed`] owns the embed's side effects on a [`Document`] for as
//! long as it is alive: the global `disqus_config` page identity and a single
//! `embed.js` script element. Changing the page identity tears the old embed
//! down before installing the new one, and dropping the guard removes
//! everything it installed, including whatever the script rendered into the
//! thread container.
//!
//! Server-rendered pages mount and drop an embed per render
//! ([`render_comments`]); [`DisqusEmbed::update`] serves long-lived
//! [`Document`] hosts whose page identity changes while mounted.

use std::collections::HashMap;

use tracing::debug;

use crate::templates::html_escape;

/// Element the Disqus script renders the thread into.
pub const THREAD_CONTAINER_ID: &str = "disqus_thread";

/// Identifies one comment thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisqusParams {
    pub shortname: String,
    pub url: String,
    pub identifier: String,
    pub title: String,
}

impl DisqusParams {
    pub fn embed_src(&self) -> String {
        format!("https://{}.disqus.com/embed.js", self.shortname)
    }

    /// Fragment matching any instance of this site's embed script.
    fn script_fragment(&self) -> String {
        format!("{}.disqus.com/embed.js", self.shortname)
    }

    fn page_identity(&self) -> PageIdentity {
        PageIdentity {
            url: self.url.clone(),
            identifier: self.identifier.clone(),
            title: self.title.clone(),
        }
    }
}

/// The `page.*` values the embed script reads from `disqus_config`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageIdentity {
    pub url: String,
    pub identifier: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptTag {
    pub src: String,
    /// Cache-buster, epoch millis.
    pub timestamp: i64,
    pub is_async: bool,
}

/// The page an embed attaches to.
pub trait Document {
    fn append_script(&mut self, script: ScriptTag);

    /// Remove every script whose `src` contains `fragment`. Returns how many were removed.
    fn remove_scripts(&mut self, fragment: &str) -> usize;

    fn set_page_identity(&mut self, identity: PageIdentity);

    fn clear_page_identity(&mut self);

    fn clear_children(&mut self, element_id: &str);
}

/// In-memory [`Document`], rendered to markup for server-side pages.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    scripts: Vec<ScriptTag>,
    page_identity: Option<PageIdentity>,
    children: HashMap<String, Vec<String>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scripts(&self) -> &[ScriptTag] {
        &self.scripts
    }

    pub fn scripts_matching(&self, fragment: &str) -> usize {
        self.scripts.iter().filter(|s| s.src.contains(fragment)).count()
    }

    pub fn page_identity(&self) -> Option<&PageIdentity> {
        self.page_identity.as_ref()
    }

    pub fn children(&self, element_id: &str) -> &[String] {
        self.children
            .get(element_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Insert raw markup under an element, as a loaded script would.
    pub fn append_child(&mut self, element_id: &str, markup: impl Into<String>) {
        self.children
            .entry(element_id.to_string())
            .or_default()
            .push(markup.into());
    }

    /// Thread container, config function and script tags.
    pub fn render_embed(&self) -> String {
        let mut out = format!(
            r#"<div id="{THREAD_CONTAINER_ID}" class="min-h-[300px]">{}</div>"#,
            self.children(THREAD_CONTAINER_ID).concat()
        );

        if let Some(identity) = &self.page_identity {
            out.push_str(&format!(
                r#"
<script>
var disqus_config = function () {{
    this.page.url = {url};
    this.page.identifier = {identifier};
    this.page.title = {title};
}};
</script>"#,
                url = js_string(&identity.url),
                identifier = js_string(&identity.identifier),
                title = js_string(&identity.title),
            ));
        }

        for script in &self.scripts {
            out.push_str(&format!(
                r#"
<script src="{src}" data-timestamp="{ts}"{async_attr}></script>"#,
                src = html_escape(&script.src),
                ts = script.timestamp,
                async_attr = if script.is_async { " async" } else { "" },
            ));
        }

        out
    }
}

impl Document for MemoryDocument {
    fn append_script(&mut self, script: ScriptTag) {
        self.scripts.push(script);
    }

    fn remove_scripts(&mut self, fragment: &str) -> usize {
        let before = self.scripts.len();
        self.scripts.retain(|s| !s.src.contains(fragment));
        before - self.scripts.len()
    }

    fn set_page_identity(&mut self, identity: PageIdentity) {
        self.page_identity = Some(identity);
    }

    fn clear_page_identity(&mut self) {
        self.page_identity = None;
    }

    fn clear_children(&mut self, element_id: &str) {
        if let Some(children) = self.children.get_mut(element_id) {
            children.clear();
        }
    }
}

/// A mounted Disqus embed. Dropping it tears the embed down.
pub struct DisqusEmbed<'d, D: Document> {
    doc: &'d mut D,
    params: DisqusParams,
}

impl<'d, D: Document> DisqusEmbed<'d, D> {
    pub fn mount(doc: &'d mut D, params: DisqusParams) -> Self {
        install(doc, &params);
        Self { doc, params }
    }

    pub fn params(&self) -> &DisqusParams {
        &self.params
    }

    pub fn document(&self) -> &D {
        &*self.doc
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut *self.doc
    }

    /// Re-install for new parameters. Returns false when nothing changed.
    pub fn update(&mut self, params: DisqusParams) -> bool {
        if params == self.params {
            return false;
        }
        teardown(self.doc, &self.params);
        install(self.doc, &params);
        self.params = params;
        true
    }
}

impl<D: Document> Drop for DisqusEmbed<'_, D> {
    fn drop(&mut self) {
        teardown(self.doc, &self.params);
    }
}

fn install<D: Document>(doc: &mut D, params: &DisqusParams) {
    doc.set_page_identity(params.page_identity());
    // never more than one instance attached
    doc.remove_scripts(&params.script_fragment());
    doc.append_script(ScriptTag {
        src: params.embed_src(),
        timestamp: chrono::Utc::now().timestamp_millis(),
        is_async: true,
    });
    debug!(
        shortname = %params.shortname,
        identifier = %params.identifier,
        "Disqus embed installed"
    );
}

fn teardown<D: Document>(doc: &mut D, params: &DisqusParams) {
    let removed = doc.remove_scripts(&params.script_fragment());
    doc.clear_page_identity();
    doc.clear_children(THREAD_CONTAINER_ID);
    debug!(
        shortname = %params.shortname,
        identifier = %params.identifier,
        removed,
        "Disqus embed torn down"
    );
}

/// Render the comments section for a page identity.
pub fn render_comments(params: DisqusParams) -> String {
    let mut doc = MemoryDocument::new();
    let embed = DisqusEmbed::mount(&mut doc, params);
    let html = embed.document().render_embed();
    html
}

fn js_string(s: &str) -> String {
    crate::templates::script_safe(&serde_json::Value::String(s.to_string()).to_string())
}
