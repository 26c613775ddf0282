//! Housing Email Templates

use platform::mailer::OutgoingMail;

use crate::domain::entity::property::Property;

fn or_not_provided(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => "Not provided",
    }
}

/// Fan-out email: a new listing matched one of the recipient's bookmarks
pub fn new_listing_email(to: &str, property: &Property) -> OutgoingMail {
    OutgoingMail {
        to: to.to_string(),
        subject: format!("New property in {}", property.location),
        html_body: format!(
            "<h2>A new listing matches your bookmarks</h2>\
             <p><strong>{}</strong> in {} — {} / month</p>\
             <p>Log in to view details and contact the owner.</p>",
            property.title, property.location, property.price
        ),
    }
}

/// Disclosure email: the owner's contact channels, sent to the requester
///
/// Missing channels read "Not provided" rather than being omitted, so the
/// recipient sees the full shape of what the owner chose to share.
pub fn contact_details_email(
    to: &str,
    property_title: &str,
    owner_name: &str,
    phone: Option<&str>,
    whatsapp: Option<&str>,
    social: Option<&str>,
) -> OutgoingMail {
    OutgoingMail {
        to: to.to_string(),
        subject: format!("Contact details for \"{property_title}\""),
        html_body: format!(
            "<h2>Owner contact details</h2>\
             <p>You requested contact details for <strong>{property_title}</strong>.</p>\
             <ul>\
             <li>Owner: {owner_name}</li>\
             <li>Phone: {}</li>\
             <li>WhatsApp: {}</li>\
             <li>Social: {}</li>\
             </ul>",
            or_not_provided(phone),
            or_not_provided(whatsapp),
            or_not_provided(social),
        ),
    }
}
