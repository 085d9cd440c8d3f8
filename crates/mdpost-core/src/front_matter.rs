//! Front-matter rendering.

use serde::{Deserialize, Serialize};

/// Article metadata supplied by the caller, immutable during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontMatter {
    pub title: String,
    /// Publication date, `YYYY-MM-DD`.
    pub date: String,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
}

impl FrontMatter {
    /// Renders the delimited header block, fixed field order, sequence
    /// fields as bracketed comma-space-joined bare values:
    ///
    /// ```text
    /// ---
    /// title: T
    /// date: 2024-01-01
    /// categories: []
    /// tags: [a, b]
    /// ---
    ///
    /// ```
    pub fn render(&self) -> String {
        format!(
            "---\ntitle: {}\ndate: {}\ncategories: [{}]\ntags: [{}]\n---\n\n",
            self.title,
            self.date,
            self.categories.join(", "),
            self.tags.join(", "),
        )
    }

    /// Prepends the rendered block to the document body.
    pub fn prepend_to(&self, body: &str) -> String {
        let mut out = self.render();
        out.push_str(body);
        out
    }
}
