use crate::client::{Backend, ClubApi};
use crate::forms::ContactForm;
use crate::logging::log_info;
use crate::status::Status;

/// Validate and send the contact form. The form is cleared only when the
/// message went through.
pub async fn submit_contact<B: Backend>(api: &ClubApi<B>, form: &mut ContactForm) -> Status {
    let message = match form.validate() {
        Ok(message) => message,
        Err(e) => return Status::error(e.to_string()),
    };

    match api.send_contact(&message).await {
        Ok(()) => {
            log_info(&format!("Contact message sent ({})", message.contact_type.as_str()));
            form.reset();
            Status::success("Thank you for contacting us! We will get back to you soon.")
        }
        Err(e) => Status::error(
            e.backend_error()
                .unwrap_or("Failed to send message. Please try again.")
                .to_string(),
        ),
    }
}
