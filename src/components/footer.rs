//! Footer Component
//!
//! Site blurb, quick links back into the two pages, and the copyright line.

use chrono::Datelike;
use leptos::prelude::*;

use crate::context::{use_app_context, Page};

fn copyright_line(year: i32) -> String {
    format!("© {} Job Listings. All rights reserved.", year)
}

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let year = chrono::Utc::now().year();

    view! {
        <footer class="site-footer">
            <div class="container footer-row">
                <div>
                    <h3>"Job Listings"</h3>
                    <p class="muted">"Find your dream job today"</p>
                </div>
                <div class="footer-links">
                    <h4>"Quick Links"</h4>
                    <ul>
                        <li><button class="link" on:click=move |_| ctx.navigate(Page::Listings)>"Home"</button></li>
                        <li><button class="link" on:click=move |_| ctx.navigate(Page::AddJob)>"Add Job"</button></li>
                    </ul>
                </div>
            </div>
            <p class="copyright">{copyright_line(year)}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line_carries_year() {
        assert_eq!(copyright_line(2026), "© 2026 Job Listings. All rights reserved.");
    }
}
