//! The five informational pages.
//!
//! Content is fixed; nothing here reads request data.

use axum::response::Html;

use super::{layout, Page};

pub fn home() -> Html<String> {
    layout(
        "Short-term rental management",
        Some(Page::Home),
        &[],
        r#"<section class="hero">
<h1>Earn more from your property, without the work</h1>
<p>HostUp manages your short-term rental end to end: listing, pricing, guests, cleaning and maintenance.</p>
<a class="btn btn-primary" href="/contact">Get a free consultation</a>
</section>
<section class="highlights">
<div class="card"><h3>Higher occupancy</h3><p>Dynamic pricing tuned to local demand in every season.</p></div>
<div class="card"><h3>Five-star guests</h3><p>Round-the-clock guest communication and careful screening.</p></div>
<div class="card"><h3>Hands-off hosting</h3><p>Professional cleaning, linen and upkeep after every stay.</p></div>
</section>"#,
    )
}

pub fn about() -> Html<String> {
    layout(
        "About us",
        Some(Page::About),
        &[],
        r#"<section>
<h1>About HostUp</h1>
<p>We are a team of hospitality and property professionals who help owners turn homes into well-run rental businesses.</p>
<p>We operate in Jaipur, Delhi and Mumbai, with local teams on the ground in every city.</p>
<h2>Our approach</h2>
<ul>
<li>Transparent monthly statements with no hidden fees.</li>
<li>Your property treated with the same care as our own.</li>
<li>Decisions driven by data, delivered with a personal touch.</li>
</ul>
</section>"#,
    )
}

pub fn services() -> Html<String> {
    layout(
        "Services",
        Some(Page::Services),
        &[],
        r#"<section>
<h1>Our services</h1>
<div class="services-grid">
<div class="card"><h3>Listing creation</h3><p>Professional photography and optimised listings across major booking platforms.</p></div>
<div class="card"><h3>Pricing and revenue</h3><p>Daily rate adjustments based on events, seasonality and competitor data.</p></div>
<div class="card"><h3>Guest management</h3><p>Enquiries, check-in, support during the stay and reviews afterwards.</p></div>
<div class="card"><h3>Cleaning and maintenance</h3><p>Hotel-grade housekeeping and a trusted network of repair partners.</p></div>
<div class="card"><h3>Interior setup</h3><p>Furnishing guidance to make your property stand out and photograph well.</p></div>
<div class="card"><h3>Owner reporting</h3><p>Clear monthly statements covering bookings, payouts and expenses.</p></div>
</div>
</section>"#,
    )
}

pub fn testimonials() -> Html<String> {
    layout(
        "Testimonials",
        Some(Page::Testimonials),
        &[],
        r#"<section>
<h1>What owners say</h1>
<blockquote class="testimonial"><p>"My occupancy went up within two months and I no longer take guest calls at midnight."</p><cite>Apartment owner, Jaipur</cite></blockquote>
<blockquote class="testimonial"><p>"The monthly reports are clear and payouts always arrive on time."</p><cite>Villa owner, Delhi</cite></blockquote>
<blockquote class="testimonial"><p>"They handled everything from furnishing to the first booking."</p><cite>Studio owner, Mumbai</cite></blockquote>
</section>"#,
    )
}

pub fn faqs() -> Html<String> {
    layout(
        "FAQs",
        Some(Page::Faqs),
        &[],
        r#"<section>
<h1>Frequently asked questions</h1>
<details class="faq"><summary>Which cities do you operate in?</summary><p>We currently manage properties in Jaipur, Delhi and Mumbai.</p></details>
<details class="faq"><summary>How are you paid?</summary><p>We charge a commission on booking revenue. There are no upfront fees.</p></details>
<details class="faq"><summary>Can I still use my property myself?</summary><p>Yes. Block any dates you need and we will keep them free.</p></details>
<details class="faq"><summary>Who handles damages?</summary><p>Guests are screened and deposits collected. We coordinate any repairs with you.</p></details>
<details class="faq"><summary>How do I get started?</summary><p>Send us a message from the <a href="/contact">contact page</a> and we will reply within 24 hours.</p></details>
</section>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_renders_its_heading() {
        let cases: [(Html<String>, &str); 5] = [
            (home(), "Earn more from your property"),
            (about(), "About HostUp"),
            (services(), "Our services"),
            (testimonials(), "What owners say"),
            (faqs(), "Frequently asked questions"),
        ];
        for (Html(html), heading) in cases {
            assert!(html.contains(heading), "missing {heading:?}");
            assert!(html.starts_with("<!DOCTYPE html>"));
        }
    }
}
