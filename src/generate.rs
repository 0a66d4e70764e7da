//! HTML site generation.
//!
//! Takes the validated entry list and writes the site:
//!
//! ```text
//! dist/
//! ├── index.html      # One link per validated entry, in index order
//! ├── html.html       # One page per entry, named after its quiz file
//! └── css.html
//! ```
//!
//! Every page is rendered independently. Quiz pages re-load and re-validate
//! their document rather than reusing what the existence filter read, so this
//! stage can be tested on its own. A page that cannot be rendered or written
//! is reported in its [`PageOutcome`] and the rest of the batch carries on.

use crate::config::SiteConfig;
use crate::fs::{Filesystem, FsError};
use crate::render;
use crate::types::{QuizDocument, ValidatedEntry};
use crate::{loader, validate};
use rayon::prelude::*;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Everything the renderer needs besides the entries themselves.
pub struct RenderContext<'a> {
    pub config: &'a SiteConfig,
    pub data_root: &'a Path,
    pub output_root: &'a Path,
    css: String,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a SiteConfig, data_root: &'a Path, output_root: &'a Path) -> Self {
        Self {
            config,
            data_root,
            output_root,
            css: render::site_css(config),
        }
    }
}

/// Why a page was not rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The quiz file could not be read or parsed at render time.
    Unreadable,
    /// The quiz file loaded but no longer passes document validation.
    InvalidDocument,
    /// Every question in the document was malformed.
    NoValidQuestions,
    /// The entry's file would place the page outside the output directory.
    UnsafePath,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::Unreadable => "quiz file unreadable",
            SkipReason::InvalidDocument => "quiz file invalid",
            SkipReason::NoValidQuestions => "no valid questions to display",
            SkipReason::UnsafePath => "output path escapes the output directory",
        };
        f.write_str(reason)
    }
}

/// Result of rendering one page.
#[derive(Debug)]
pub enum PageOutcome {
    Written {
        title: String,
        path: PathBuf,
    },
    Skipped {
        title: String,
        reason: SkipReason,
    },
    Failed {
        title: String,
        path: PathBuf,
        error: FsError,
    },
}

impl PageOutcome {
    pub fn title(&self) -> &str {
        match self {
            PageOutcome::Written { title, .. }
            | PageOutcome::Skipped { title, .. }
            | PageOutcome::Failed { title, .. } => title,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, PageOutcome::Written { .. })
    }
}

/// Write `index.html` linking every entry, in the order given.
pub fn render_index(
    fs: &impl Filesystem,
    ctx: &RenderContext<'_>,
    entries: &[ValidatedEntry],
) -> PageOutcome {
    let html = render::render_index_page(ctx.config, &ctx.css, entries);
    let path = ctx.output_root.join("index.html");
    write_page(fs, ctx.config.site.title.clone(), path, &html.into_string())
}

/// Render one page per entry, in parallel.
///
/// Outcomes come back in entry order, though pages are written in whatever
/// order the workers finish.
pub fn render_pages(
    fs: &impl Filesystem,
    ctx: &RenderContext<'_>,
    entries: &[ValidatedEntry],
) -> Vec<PageOutcome> {
    entries
        .par_iter()
        .map(|entry| render_page(fs, ctx, entry))
        .collect()
}

/// Render a single quiz page.
pub fn render_page(
    fs: &impl Filesystem,
    ctx: &RenderContext<'_>,
    entry: &ValidatedEntry,
) -> PageOutcome {
    let title = entry.title().to_string();
    let skip = |reason: SkipReason| {
        warn!(title = %entry.title(), file = %entry.file(), %reason, "Skipping page");
        PageOutcome::Skipped {
            title: title.clone(),
            reason,
        }
    };

    let Some(path) = entry.entry().page_path(ctx.output_root) else {
        return skip(SkipReason::UnsafePath);
    };
    let quiz = match load_quiz(fs, &ctx.data_root.join(entry.file())) {
        Ok(quiz) => quiz,
        Err(reason) => return skip(reason),
    };

    if let Some(parent) = path.parent() {
        if let Err(err) = fs.ensure_dir(parent) {
            error!(title = %title, error = %err, "Error creating page directory");
            return PageOutcome::Failed {
                title,
                path,
                error: err,
            };
        }
    }

    let html = render::render_quiz_page(ctx.config, &ctx.css, entry, &quiz);
    write_page(fs, title, path, &html.into_string())
}

fn load_quiz(fs: &impl Filesystem, path: &Path) -> Result<QuizDocument, SkipReason> {
    let value = loader::load(fs, path).ok_or(SkipReason::Unreadable)?;
    let quiz = validate::quiz_document(&value).ok_or(SkipReason::InvalidDocument)?;
    if quiz.questions.is_empty() {
        return Err(SkipReason::NoValidQuestions);
    }
    Ok(quiz)
}

fn write_page(fs: &impl Filesystem, title: String, path: PathBuf, html: &str) -> PageOutcome {
    match fs.write_text(&path, html) {
        Ok(()) => {
            info!(title = %title, path = %path.display(), "Generated HTML");
            PageOutcome::Written { title, path }
        }
        Err(err) => {
            error!(title = %title, error = %err, "Error writing HTML");
            PageOutcome::Failed {
                title,
                path,
                error: err,
            }
        }
    }
}
