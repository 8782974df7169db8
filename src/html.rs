//! Shared maud layout, style classes and small HTML building blocks.

use maud::{DOCTYPE, Markup, html};

// Link styles
pub const LINK_STYLE: &str = "link";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "button button-primary";

// Form styles
pub const FORM_CONTAINER_STYLE: &str = "form-container";
pub const FORM_GRID_STYLE: &str = "form-grid";
pub const FORM_LABEL_STYLE: &str = "form-label";
pub const FORM_TEXT_INPUT_STYLE: &str = "form-input";

// Table styles
pub const TABLE_STYLE: &str = "table";
pub const TABLE_HEADER_STYLE: &str = "table-header";
pub const TABLE_ROW_STYLE: &str = "table-row";
pub const TABLE_CELL_STYLE: &str = "table-cell";
pub const TABLE_NUMBER_CELL_STYLE: &str = "table-cell table-cell-number";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "page";

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Transport Records" }
                link href="/static/main.css" rel="stylesheet";
            }

            body
            {
                (content)
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class="error-page"
        {
            h1 class="error-code" { (header) }

            p class="error-description" { (description) }

            p class="error-fix" { (fix) }

            a href="/" class=(BUTTON_PRIMARY_STYLE) { "Back to Homepage" }
        }
    );

    base(title, &content)
}

/// A labelled text-like input for a form.
///
/// `input_type` is the HTML input type, e.g. "text", "date" or "number".
/// Number inputs accept any decimal value.
pub fn labelled_input(name: &str, label: &str, input_type: &str, required: bool) -> Markup {
    html! {
        div
        {
            label for=(name) class=(FORM_LABEL_STYLE) { (label) }

            @if input_type == "number" {
                input
                    id=(name)
                    name=(name)
                    type="number"
                    step="any"
                    class=(FORM_TEXT_INPUT_STYLE)
                    required[required];
            } @else {
                input
                    id=(name)
                    name=(name)
                    type=(input_type)
                    class=(FORM_TEXT_INPUT_STYLE)
                    required[required];
            }
        }
    }
}

/// A link with the standard link style.
pub fn link(url: &str, text: &str) -> Markup {
    html! (
        a href=(url) class=(LINK_STYLE) { (text) }
    )
}
