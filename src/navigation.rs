//! This file defines the templates and a convenience function for creating the navigation bar.

use maud::{Markup, html};

use crate::endpoints;

/// Template for a link in the navigation bar.
///
/// It will change appearance if `is_current` is set to
/// `true`. Only one link should be set as active at any one time.
#[derive(Clone)]
struct Link<'a> {
    url: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self) -> Markup {
        let style = if self.is_current {
            "nav-link nav-link-current"
        } else {
            "nav-link"
        };

        html!(
            a
                href=(self.url)
                class=(style)
                aria-current=[self.is_current.then_some("page")]
            {
                (self.title)
            }
        )
    }
}

pub struct NavBar<'a> {
    links: Vec<Link<'a>>,
}

impl NavBar<'_> {
    /// Get the navigation bar.
    ///
    /// If a link matches `active_endpoint`, then that link will be
    /// marked as active and displayed differently in the HTML.
    pub fn new(active_endpoint: &str) -> NavBar<'_> {
        let links = vec![
            Link {
                url: endpoints::ROOT,
                title: "New Record",
                is_current: active_endpoint == endpoints::ROOT,
            },
            Link {
                url: endpoints::RECORDS_VIEW,
                title: "All Records",
                is_current: active_endpoint == endpoints::RECORDS_VIEW,
            },
            // The export is a download, never the current page.
            Link {
                url: endpoints::EXPORT,
                title: "Export CSV",
                is_current: false,
            },
        ];

        NavBar { links }
    }

    pub fn into_html(self) -> Markup {
        html!(
            nav class="nav"
            {
                a href=(endpoints::ROOT) class="nav-brand" { "Transport Records" }

                ul class="nav-links"
                {
                    @for link in self.links {
                        li { (link.into_html()) }
                    }
                }
            }
        )
    }
}
