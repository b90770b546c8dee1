//! Contact section - channels, trust badges and the message form

use serde::Serialize;

use super::ViewContext;
use crate::domain::contact::ContactField;
use crate::domain::content::{ContactItem, ServiceOption};
use crate::features::contact::StatusKind;

/// One input of the contact form with its current value and error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub field: ContactField,
    pub label: String,
    pub value: String,
    pub required: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusView {
    pub kind: StatusKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFormView {
    pub title: String,
    pub subtitle: String,
    pub fields: Vec<FieldView>,
    pub service_placeholder: String,
    pub service_options: Vec<ServiceOption>,
    pub message_placeholder: String,
    /// "Send Message", or "Sending..." while a submission is in flight
    pub submit_label: String,
    pub submitting: bool,
    pub status: Option<StatusView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactView {
    pub title: String,
    pub description: String,
    pub items: Vec<ContactItem>,
    pub trust_title: String,
    pub trust_badges: Vec<String>,
    pub form: ContactFormView,
}

impl ContactView {
    pub fn build(ctx: &ViewContext<'_>) -> Self {
        Self {
            title: ctx.text("contact.title"),
            description: ctx.text("contact.description"),
            items: ctx.list(|c| &c.contact_items),
            trust_title: ctx.text("contact.trust_title"),
            trust_badges: ctx
                .list(|c| &c.trust_badges)
                .into_iter()
                .map(|badge| badge.label)
                .collect(),
            form: form_view(ctx),
        }
    }
}

fn form_view(ctx: &ViewContext<'_>) -> ContactFormView {
    let controller = ctx.contact;
    let fields = ContactField::ALL
        .into_iter()
        .map(|field| FieldView {
            field,
            label: ctx.text(&format!("contact.field.{}", field.key())),
            value: controller.data().value(field).to_string(),
            required: field.is_required(),
            error: controller.field_error(field, ctx.language).map(str::to_string),
        })
        .collect();
    let submitting = controller.is_submitting();
    let status = controller.status().map(|status| StatusView {
        kind: status.kind,
        message: ctx.text(status.message_key),
    });

    ContactFormView {
        title: ctx.text("contact.form.title"),
        subtitle: ctx.text("contact.form.subtitle"),
        fields,
        service_placeholder: ctx.text("contact.form.select_placeholder"),
        service_options: ctx.list(|c| &c.service_options),
        message_placeholder: ctx.text("contact.form.message_placeholder"),
        submit_label: ctx.text(if submitting {
            "contact.form.submitting"
        } else {
            "contact.form.submit"
        }),
        submitting,
        status,
    }
}
