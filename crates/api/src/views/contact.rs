//! The contact page: form, sticky values, and inline field errors.

use std::fmt::Write;

use axum::response::Html;
use hostup_core::contact::{
    ContactForm, FieldErrors, FIELD_CSRF_TOKEN, FIELD_EMAIL, FIELD_MESSAGE, FIELD_NAME,
    FIELD_PHONE, FIELD_PROPERTY_LOCATION, LOCATION_CHOICES, location_label,
};

use super::{escape, layout, Page};
use crate::flash::Notice;

/// Render the contact page.
///
/// `form` supplies the values to redisplay; pass `ContactForm::default()` for
/// a blank form. `csrf_token` is embedded as a hidden field.
pub fn render(
    form: &ContactForm,
    errors: &FieldErrors,
    notices: &[Notice],
    csrf_token: &str,
) -> Html<String> {
    let mut body = String::from(
        "<section class=\"contact\">\n\
<h1>Contact us</h1>\n\
<p>Tell us about your property and we will get back to you within 24 hours.</p>\n\
<form method=\"post\" action=\"/contact\" class=\"contact-form\" novalidate>\n",
    );

    let _ = writeln!(
        body,
        "<input type=\"hidden\" name=\"{FIELD_CSRF_TOKEN}\" value=\"{}\">",
        escape(csrf_token)
    );
    body.push_str(&field_errors(errors, FIELD_CSRF_TOKEN));

    text_input(&mut body, errors, FIELD_NAME, "Full Name", "text", &form.name);
    text_input(&mut body, errors, FIELD_EMAIL, "Email Address", "email", &form.email);
    text_input(&mut body, errors, FIELD_PHONE, "Phone Number", "tel", &form.phone);
    location_select(&mut body, errors, &form.property_location);

    let _ = write!(
        body,
        "<div class=\"form-group{}\">\n\
<label for=\"{FIELD_MESSAGE}\">Message</label>\n\
<textarea id=\"{FIELD_MESSAGE}\" name=\"{FIELD_MESSAGE}\" rows=\"6\">{}</textarea>\n\
{}</div>\n",
        error_class(errors, FIELD_MESSAGE),
        escape(&form.message),
        field_errors(errors, FIELD_MESSAGE),
    );

    body.push_str(
        "<button type=\"submit\" class=\"btn btn-primary\">Send Message</button>\n\
</form>\n\
</section>",
    );

    layout("Contact", Some(Page::Contact), notices, &body)
}

fn text_input(
    body: &mut String,
    errors: &FieldErrors,
    field: &str,
    label: &str,
    input_type: &str,
    value: &str,
) {
    let _ = write!(
        body,
        "<div class=\"form-group{}\">\n\
<label for=\"{field}\">{label}</label>\n\
<input type=\"{input_type}\" id=\"{field}\" name=\"{field}\" value=\"{}\">\n\
{}</div>\n",
        error_class(errors, field),
        escape(value),
        field_errors(errors, field),
    );
}

fn location_select(body: &mut String, errors: &FieldErrors, selected: &str) {
    let selected = selected.trim();
    let mut options = String::new();
    for (value, label) in LOCATION_CHOICES {
        let attr = if *value == selected { " selected" } else { "" };
        let _ = write!(options, "<option value=\"{value}\"{attr}>{label}</option>");
    }
    // Accepted values outside the choices still show up as selected.
    if location_label(selected).is_none() {
        let value = escape(selected);
        let _ = write!(options, "<option value=\"{value}\" selected>{value}</option>");
    }

    let _ = write!(
        body,
        "<div class=\"form-group{}\">\n\
<label for=\"{FIELD_PROPERTY_LOCATION}\">Property Location</label>\n\
<select id=\"{FIELD_PROPERTY_LOCATION}\" name=\"{FIELD_PROPERTY_LOCATION}\">{options}</select>\n\
{}</div>\n",
        error_class(errors, FIELD_PROPERTY_LOCATION),
        field_errors(errors, FIELD_PROPERTY_LOCATION),
    );
}

fn error_class(errors: &FieldErrors, field: &str) -> &'static str {
    if errors.contains_key(field) {
        " has-error"
    } else {
        ""
    }
}

fn field_errors(errors: &FieldErrors, field: &str) -> String {
    let Some(messages) = errors.get(field) else {
        return String::new();
    };
    let mut html = String::from("<ul class=\"field-errors\">");
    for message in messages {
        let _ = write!(html, "<li>{}</li>", escape(message));
    }
    html.push_str("</ul>\n");
    html
}
