//! Notification rendering for accepted orders.

use tera::{Context, Tera};

use crate::validation::ValidatedOrder;

const TEMPLATE_NAME: &str = "order_notification.html";

/// Sender, recipients, and branding for order notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSettings {
    /// `From` header, e.g. `"Studio <orders@studio.test>"`.
    pub from: String,
    /// Inboxes that receive every inquiry.
    pub to: Vec<String>,
    /// Name shown in the notification header and footer.
    pub brand: String,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            from: "mal.aisolution <onboarding@resend.dev>".to_string(),
            to: vec!["mal.aisolution@gmail.com".to_string()],
            brand: "mal.aisolution".to_string(),
        }
    }
}

/// A rendered notification, not yet addressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub html: String,
}

/// Builds the notification subject for an inquiry.
pub fn subject_line(service: &str, name: &str) -> String {
    format!("New Project Inquiry: {service} - {name}")
}

/// Renders order notifications from an embedded HTML template.
///
/// All interpolated values are HTML-escaped. The project description block
/// is emitted only when the order carries details.
#[derive(Debug, Clone)]
pub struct NotificationRenderer {
    tera: Tera,
    brand: String,
}

impl NotificationRenderer {
    pub fn new(brand: impl Into<String>) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(
            TEMPLATE_NAME,
            include_str!("../templates/order_notification.html"),
        )?;
        Ok(Self {
            tera,
            brand: brand.into(),
        })
    }

    pub fn render(&self, order: &ValidatedOrder) -> Result<Notification, tera::Error> {
        let mut context = Context::new();
        context.insert("brand", &self.brand);
        context.insert("service", order.service());
        context.insert("budget", order.budget());
        context.insert("name", order.name());
        context.insert("email", order.email());
        context.insert("details", order.details());

        let html = self.tera.render(TEMPLATE_NAME, &context)?;

        Ok(Notification {
            subject: subject_line(order.service(), order.name()),
            html,
        })
    }
}
