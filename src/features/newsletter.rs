//! Newsletter signup in the footer

use tracing::info;

use crate::domain::contact::is_valid_email;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsletterOutcome {
    /// Empty input or a signup already in flight
    Ignored,
    InvalidEmail,
    Subscribed,
}

#[derive(Debug, Default)]
pub struct NewsletterForm {
    email: String,
    loading: bool,
}

impl NewsletterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Validate and enter the loading state
    pub fn begin_submit(&mut self) -> NewsletterOutcome {
        if self.email.trim().is_empty() || self.loading {
            return NewsletterOutcome::Ignored;
        }
        if !is_valid_email(self.email.trim()) {
            return NewsletterOutcome::InvalidEmail;
        }
        self.loading = true;
        NewsletterOutcome::Subscribed
    }

    /// Leave the loading state; a successful signup clears the input
    pub fn finish_submit(&mut self, success: bool) {
        if success {
            info!("Newsletter signup recorded");
            self.email.clear();
        }
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_cycle() {
        let mut form = NewsletterForm::new();
        assert_eq!(form.begin_submit(), NewsletterOutcome::Ignored);

        form.set_email("someone@");
        assert_eq!(form.begin_submit(), NewsletterOutcome::InvalidEmail);
        assert!(!form.is_loading());

        form.set_email(" news@avagh.media ");
        assert_eq!(form.begin_submit(), NewsletterOutcome::Subscribed);
        assert_eq!(form.begin_submit(), NewsletterOutcome::Ignored);

        form.finish_submit(true);
        assert!(form.email().is_empty());
        assert!(!form.is_loading());
    }
}
