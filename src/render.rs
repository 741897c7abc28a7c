//! Wiki page rendering.
//!
//! A page is assembled as a flat list of sections joined with newlines, so
//! the output is byte-stable for a fixed input: no timestamps, no map
//! iteration order, nothing nondeterministic. Two independent options shape
//! the result — [`HeaderStyle`] picks between a structured front-matter
//! block and a plain markdown heading, [`FenceStyle`] picks between a
//! highlighter directive and a GFM code fence. That is all they control;
//! the body is identical across all four combinations.

use crate::paths;
use crate::record::BugPatternRecord;

/// How the page header is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStyle {
    /// `---`-delimited key/value metadata block for a static-site generator.
    FrontMatter,
    /// Plain markdown heading with the metadata inlined as prose.
    Heading,
}

/// How the example snippet is fenced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceStyle {
    /// `{% highlight java %}` / `{% endhighlight %}` highlighter directives.
    Pygments,
    /// GitHub-flavored-markdown ` ```java ` fence.
    Gfm,
}

/// Rendering options for one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub header: HeaderStyle,
    pub fence: FenceStyle,
}

impl RenderOptions {
    /// Builds options from the two user-facing flags.
    pub fn new(front_matter: bool, pygments: bool) -> RenderOptions {
        RenderOptions {
            header: if front_matter {
                HeaderStyle::FrontMatter
            } else {
                HeaderStyle::Heading
            },
            fence: if pygments {
                FenceStyle::Pygments
            } else {
                FenceStyle::Gfm
            },
        }
    }
}

/// Renders one record into a complete wiki page.
///
/// `explanation` is the already-resolved long-form text (inline field or
/// sidecar content) and `example_code` the full text of the example snippet.
/// The returned string ends with a single trailing newline.
pub fn render_page(
    record: &BugPatternRecord,
    explanation: &str,
    example_code: &str,
    opts: &RenderOptions,
) -> String {
    let mut sections = Vec::new();

    match opts.header {
        HeaderStyle::FrontMatter => {
            sections.push("---".to_string());
            sections.push(format!("title: {}", record.short_name));
            sections.push(format!("summary: \"{}\"", yaml_escape(&record.summary)));
            sections.push("layout: bugpattern".to_string());
            sections.push(format!("category: {}", record.provider_group));
            sections.push(format!("severity: {}", record.severity));
            sections.push(format!("maturity: {}", record.maturity));
            sections.push(format!("suppression: {}", record.suppression_annotation));
            sections.push("---".to_string());
            sections.push(String::new());
            sections.push(format!("# Bug pattern: {}", record.short_name));
        }
        HeaderStyle::Heading => {
            sections.push(format!("# {}", record.short_name));
            sections.push(String::new());
            sections.push(format!(
                "Category: {}, Severity: {}, Maturity: {}",
                record.provider_group, record.severity, record.maturity
            ));
        }
    }

    sections.push(String::new());
    sections.push(format!("__{}__", record.summary));

    if !record.alt_names.is_empty() {
        sections.push(String::new());
        sections.push(format!(
            "_Alternate names: {}_",
            record.alt_names.join(", ")
        ));
    }

    sections.push(String::new());
    sections.push("## The problem".to_string());
    sections.push(String::new());
    sections.push(explanation.to_string());

    sections.push(String::new());
    sections.push("## Suppression".to_string());
    sections.push(String::new());
    sections.push(suppression_text(record));

    sections.push(String::new());
    sections.push("## Examples".to_string());
    sections.push(String::new());
    sections.push(format!(
        "__{}__",
        paths::example_file_name(&record.qualified_name)
    ));
    sections.push(String::new());

    match opts.fence {
        FenceStyle::Pygments => {
            sections.push("{% highlight java %}".to_string());
            sections.push(example_code.trim_end().to_string());
            sections.push("{% endhighlight %}".to_string());
        }
        FenceStyle::Gfm => {
            sections.push("```java".to_string());
            sections.push(example_code.trim_end().to_string());
            sections.push("```".to_string());
        }
    }

    let mut page = sections.join("\n");
    page.push('\n');
    page
}

/// The suppression paragraph for a record.
fn suppression_text(record: &BugPatternRecord) -> String {
    if record.suppression_annotation.is_empty() {
        "This pattern cannot be suppressed.".to_string()
    } else if record.suppression_policy.is_empty() {
        format!(
            "Suppress false positives with the `{}` mechanism.",
            record.suppression_annotation
        )
    } else {
        format!(
            "Suppress false positives with the `{}` mechanism, governed by the `{}` policy.",
            record.suppression_annotation, record.suppression_policy
        )
    }
}

/// Escapes a string for use inside a double-quoted YAML scalar.
fn yaml_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
