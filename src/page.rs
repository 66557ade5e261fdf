//! Renders a standalone page's content inside the pdoc site chrome.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::IntegrateError;
use crate::parser::{ExtractedContent, TemplateRegions};

static SIDEBAR_HREF_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r##"href="#([^"]+)""##).unwrap());

const PDOC_CSS: &str = include_str!("assets/pdoc.css");
const PDOC_SCREEN_CSS: &str = include_str!("assets/pdoc_screen.css");
const PDOC_PRINT_CSS: &str = include_str!("assets/pdoc_print.css");

const GENERATOR: &str = "pdoc 0.11.6";
const FAVICON: &str = "adaptyv_logo.png?";

/// Point in-page sidebar anchors at the index page. Anchors that already name
/// a page are left alone.
pub fn rewrite_sidebar_links(sidebar: &str) -> String {
    SIDEBAR_HREF_RE
        .replace_all(sidebar, r##"href="index.html#${1}""##)
        .into_owned()
}

pub fn compose(content: &ExtractedContent, regions: &TemplateRegions) -> String {
    let sidebar = rewrite_sidebar_links(&regions.sidebar);
    format!(
        r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1, minimum-scale=1" />
  <meta name="generator" content="{generator}" />
  <title>{title}</title>
  <meta name="description" content="{title}" />
  <link rel="preload stylesheet" as="style" href="https://cdnjs.cloudflare.com/ajax/libs/10up-sanitize.css/11.0.1/sanitize.min.css" integrity="sha256-PK9q560IAAa6WVRRh76LtCaI8pjTJ2z11v0miyNNjrs=" crossorigin>
  <link rel="preload stylesheet" as="style" href="https://cdnjs.cloudflare.com/ajax/libs/10up-sanitize.css/11.0.1/typography.min.css" integrity="sha256-7l/o7C8jubJiy74VsKTidCy1yBkRtiUGbVkYBylBqUg=" crossorigin>
  <link rel="stylesheet preload" as="style" href="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/10.1.1/styles/github.min.css" crossorigin>

  <!-- Pdoc Styles -->
  <style>{pdoc_css}</style>
  <style media="screen and (min-width: 700px)">{pdoc_screen_css}</style>
  <style media="print">{pdoc_print_css}</style>

  <!-- Additional styles for custom content -->
  <style>
    .badges img {{
      margin-right: 0.5rem;
      margin-bottom: 0.25rem;
    }}
    .mermaid {{
      text-align: center;
      margin: 1rem 0;
    }}
    #section-intro .badges {{
      margin-bottom: 1rem;
    }}
    /* Custom styles from original HTML */
    {styles}
  </style>
  <script defer src="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/10.1.1/highlight.min.js" integrity="sha256-Uv3H6lx7dJmRfRvH8TH6kJD1TSK1aFcwgx+mdg3epi8=" crossorigin></script>
  <script>window.addEventListener('DOMContentLoaded', () => hljs.initHighlighting())</script>
  <link rel="shortcut icon" type="image/x-icon" href="{favicon}">
</head>
<body>
<main>
<article id="content">
<section id="section-intro">
{body}
</section>
</article>

{sidebar}
</main>

{footer}

{scripts}
"##,
        generator = GENERATOR,
        title = content.title,
        pdoc_css = PDOC_CSS,
        pdoc_screen_css = PDOC_SCREEN_CSS,
        pdoc_print_css = PDOC_PRINT_CSS,
        styles = content.styles,
        favicon = FAVICON,
        body = content.body,
        sidebar = sidebar,
        footer = regions.footer,
        scripts = content.scripts,
    )
}

/// Overwrite `path` with the wrapped page. No backup is kept.
pub fn write_page(
    path: &Path,
    content: &ExtractedContent,
    regions: &TemplateRegions,
) -> Result<usize, IntegrateError> {
    let html = compose(content, regions);
    std::fs::write(path, &html).map_err(|source| IntegrateError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(html.len())
}

// ── Tests ──
