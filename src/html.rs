use maud::{DOCTYPE, Markup, html};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::endpoints;

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "container";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "button button--primary";

// Text styles
pub const PLACEHOLDER_STYLE: &str = "placeholder";

/// Dates are shown day first, e.g. "01/05/2020" for the 1st of May 2020.
pub const DISPLAY_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[day]/[month]/[year]");

const HTMX_SCRIPT_URL: &str = "https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js";

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Finanças" }
                link href={(endpoints::STATIC) "/main.css"} rel="stylesheet";

                script src=(HTMX_SCRIPT_URL) {}
            }

            body
            {
                (app_header())

                (content)
            }
        }
    }
}

fn app_header() -> Markup {
    html! {
        header class="app-header"
        {
            div class="app-header__inner"
            {
                a href=(endpoints::DASHBOARD_VIEW) class="app-header__logo" { "Finanças" }

                nav
                {
                    a
                        href=(endpoints::DASHBOARD_VIEW)
                        class="app-header__link app-header__link--active"
                    {
                        "Listagem"
                    }
                }
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="error-page"
            {
                h1 class="error-page__code" { (header) }

                p class="error-page__description" { (description) }

                p class="error-page__fix" { (fix) }

                a href=(endpoints::ROOT) class=(BUTTON_PRIMARY_STYLE)
                {
                    "Voltar ao início"
                }
            }
        }
    );

    base(title, &content)
}

pub fn loading_spinner() -> Markup {
    // Spinner SVG adapted from https://flowbite.com/docs/components/spinner/
    html! {
        svg
            aria-hidden="true"
            role="status"
            class="spinner htmx-indicator"
            viewBox="0 0 100 101"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        {
            path
                d="M100 50.5908C100 78.2051 77.6142 100.591 50 100.591C22.3858 100.591 0 78.2051 0 50.5908C0 22.9766 22.3858 0.59082 50 0.59082C77.6142 0.59082 100 22.9766 100 50.5908ZM9.08144 50.5908C9.08144 73.1895 27.4013 91.5094 50 91.5094C72.5987 91.5094 90.9186 73.1895 90.9186 50.5908C90.9186 27.9921 72.5987 9.67226 50 9.67226C27.4013 9.67226 9.08144 27.9921 9.08144 50.5908Z"
                fill="#E5E7EB" {}
            path
                d="M93.9676 39.0409C96.393 38.4038 97.8624 35.9116 97.0079 33.5539C95.2932 28.8227 92.871 24.3692 89.8167 20.348C85.8452 15.1192 80.8826 10.7238 75.2124 7.41289C69.5422 4.10194 63.2754 1.94025 56.7698 1.05124C51.7666 0.367541 46.6976 0.446843 41.7345 1.27873C39.2613 1.69328 37.813 4.19778 38.4501 6.62326C39.0873 9.04874 41.5694 10.4717 44.0505 10.1071C47.8511 9.54855 51.7191 9.52689 55.5402 10.0491C60.8642 10.7766 65.9928 12.5457 70.6331 15.2552C75.2735 17.9648 79.3347 21.5619 82.5849 25.841C84.9175 28.9121 86.7997 32.2913 88.1811 35.8758C89.083 38.2158 91.5421 39.6781 93.9676 39.0409Z"
                fill="currentColor" {}
        }
    }
}

/// Format `number` as Brazilian reais, e.g. "R$ 1.234,56" or "-R$ 20,00".
///
/// The amount is rounded to the nearest cent. Amounts that round to zero are
/// shown without a sign.
pub fn format_currency(number: f64) -> String {
    if !number.is_finite() {
        tracing::error!("Cannot format {number} as currency");
        return number.to_string();
    }

    let cents = (number.abs() * 100.0).round();
    // `{:.0}` never uses an exponent, so this is always plain digits.
    let digits = format!("{cents:.0}");
    let digits = format!("{digits:0>3}");
    let (whole, fraction) = digits.split_at(digits.len() - 2);

    let sign = if number < 0.0 && cents > 0.0 { "-" } else { "" };

    format!("{sign}R$ {},{fraction}", group_thousands(whole))
}

/// Separate every three digits of `digits` with '.', counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    grouped
}

/// Format `date` for display, e.g. "01/05/2020".
pub fn format_date(date: Date) -> String {
    date.format(DISPLAY_DATE_FORMAT).unwrap_or_else(|error| {
        tracing::error!("Could not format the date {date}: {error}");
        date.to_string()
    })
}
