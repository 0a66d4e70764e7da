//! HTML markup for the index and quiz pages.
//!
//! Pure functions from validated data to [maud](https://maud.lambda.xyz/)
//! markup. No I/O happens here; [`crate::generate`] decides what gets
//! rendered and where it is written. All interpolated text is escaped by maud.
//!
//! Output depends only on the inputs (no timestamps, no generated ids), so
//! rebuilding unchanged data yields byte-identical pages.

use crate::config::{self, SiteConfig};
use crate::types::{Answer, Question, QuizDocument, ValidatedEntry};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS_STATIC: &str = include_str!("../static/style.css");

/// The inline stylesheet: color variables from config followed by the static rules.
pub fn site_css(config: &SiteConfig) -> String {
    format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    )
}

/// Renders the base HTML document structure
fn base_document(title: &str, lang: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                div.wrapper {
                    (content)
                }
            }
        }
    }
}

/// Renders the index page: one link per validated entry, in the given order.
pub fn render_index_page(config: &SiteConfig, css: &str, entries: &[ValidatedEntry]) -> Markup {
    let content = html! {
        header.header {
            h1 { (config.site.title) }
        }
        @if !config.site.intro.trim().is_empty() {
            div.intro {
                p { (config.site.intro) }
            }
        }
        ul.entry-options {
            @for entry in entries {
                li {
                    a href=(entry.entry().page_href()) { (entry.title()) }
                }
            }
        }
    };

    base_document(&config.site.title, &config.site.lang, css, content)
}

/// Renders one quiz page, headed by the title the index gives the entry.
///
/// `quiz.questions` is expected to hold only valid questions; the caller
/// skips documents where none survived.
pub fn render_quiz_page(
    config: &SiteConfig,
    css: &str,
    entry: &ValidatedEntry,
    quiz: &QuizDocument,
) -> Markup {
    let back_href = format!("{}index.html", "../".repeat(entry.entry().depth()));

    let content = html! {
        nav.breadcrumb {
            a href=(back_href) { (config.labels.back) }
        }
        h1 { (entry.title()) }
        @for question in &quiz.questions {
            (render_question(config, question))
        }
    };

    base_document(entry.title(), &config.site.lang, css, content)
}

fn render_question(config: &SiteConfig, question: &Question) -> Markup {
    html! {
        section.question {
            h2 { (question.question) }
            @if question.answers.is_empty() {
                p.no-answers { (config.labels.no_answers) }
            } @else {
                ul.answers {
                    @for answer in &question.answers {
                        (render_answer(config, answer))
                    }
                }
            }
        }
    }
}

fn render_answer(config: &SiteConfig, answer: &Answer) -> Markup {
    let mark = answer.correct && config.answers.mark_correct;
    html! {
        li class=[mark.then_some("correct")] {
            (answer.answer)
            @if mark {
                " "
                span.correct-label { (config.labels.correct) }
            }
        }
    }
}
