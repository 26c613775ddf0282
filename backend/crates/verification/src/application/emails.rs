//! Review Outcome Email Templates

use platform::mailer::OutgoingMail;

/// Email sent when a verification request is approved
pub fn approval_email(to: &str, name: &str) -> OutgoingMail {
    OutgoingMail {
        to: to.to_string(),
        subject: "Your landowner account has been verified".to_string(),
        html_body: format!(
            "<h2>Congratulations, {name}!</h2>\
             <p>Your landowner verification has been approved. You can now log in \
             and publish property listings.</p>"
        ),
    }
}

/// Email sent when a verification request is rejected; carries the
/// reviewer's notes so the landowner knows what to fix
pub fn rejection_email(to: &str, name: &str, notes: &str) -> OutgoingMail {
    OutgoingMail {
        to: to.to_string(),
        subject: "Your landowner verification was not approved".to_string(),
        html_body: format!(
            "<h2>Hello {name},</h2>\
             <p>Unfortunately your verification request was rejected.</p>\
             <p><strong>Reviewer notes:</strong> {notes}</p>\
             <p>You can submit a new request with an updated ownership document \
             at any time.</p>"
        ),
    }
}
