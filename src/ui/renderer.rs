//! Plain-text table renderer.
//!
//! Renders a [`CatalogView`] as a fixed-width table with a header row, the page
//! rows (or the error message in their place) and a page indicator. Output is
//! returned as a `String` so any frontend can place it.
//!
//! ```text
//! Product name                       Price ▲    Category            Rating
//! ---------------------------------------------------------------------------
//! perfume Oil                        13.00      fragrances          4.26
//! Brown Perfume                      40.00      fragrances          4.00
//!
//! Page 1 of 1 (2 products)
//! ```

use crate::domain::{Record, SortColumn};
use crate::ui::viewmodel::CatalogView;
use std::fmt::Write;

const TITLE_WIDTH: usize = 35;
const PRICE_WIDTH: usize = 10;
const CATEGORY_WIDTH: usize = 19;
const RULE_WIDTH: usize = 75;

/// Renders the view to a string.
///
/// # Example
///
/// ```rust
/// use catalogue::app::AppState;
/// use catalogue::ui::render_to_string;
/// use catalogue::Config;
///
/// let state = AppState::new(Config::default());
/// let text = render_to_string(&state.compute_view());
/// assert!(text.starts_with("Product name"));
/// ```
#[must_use]
pub fn render_to_string(view: &CatalogView) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{:<TITLE_WIDTH$}{:<PRICE_WIDTH$}{:<CATEGORY_WIDTH$}{}",
        header(view, SortColumn::Title),
        header(view, SortColumn::Price),
        header(view, SortColumn::Category),
        header(view, SortColumn::Rating),
    );
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

    if view.is_loading {
        let _ = writeln!(out, "Loading...");
        return out;
    }

    if let Some(message) = &view.error_message {
        let _ = writeln!(out, "{message}");
        return out;
    }

    for record in &view.page_items {
        let _ = writeln!(out, "{}", render_row(record));
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Page {} of {} ({} products)",
        view.current_page, view.total_pages, view.total_records
    );

    out
}

/// Prints the rendered view to stdout.
pub fn render(view: &CatalogView) {
    print!("{}", render_to_string(view));
}

fn header(view: &CatalogView, column: SortColumn) -> String {
    match view.sort {
        Some(key) if key.column == column => {
            format!("{} {}", column.label(), key.direction.marker())
        }
        _ => column.label().to_string(),
    }
}

fn render_row(record: &Record) -> String {
    format!(
        "{:<TITLE_WIDTH$}{:<PRICE_WIDTH$}{:<CATEGORY_WIDTH$}{:.2}",
        truncate(&record.title, TITLE_WIDTH - 1),
        format!("{:.2}", record.price),
        truncate(&record.category, CATEGORY_WIDTH - 1),
        record.rating,
    )
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        text.to_string()
    }
}
