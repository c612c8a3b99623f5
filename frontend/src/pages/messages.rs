use crate::components::layout::{ErrorMessage, SuccessMessage};
use leptos::*;

/// Outcome banner shared by the form screens; the last result wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.success = None;
    }

    /// Success text from the backend, or `fallback` when it sent none.
    pub fn set_result(&mut self, result: Result<String, String>, fallback: &str) {
        match result {
            Ok(message) if message.trim().is_empty() => self.set_success(fallback),
            Ok(message) => self.set_success(message),
            Err(error) => self.set_error(error),
        }
    }
}

#[component]
pub fn MessageBanner(#[prop(into)] messages: Signal<MessageState>) -> impl IntoView {
    view! {
        {move || messages.get().error.map(|message| view! { <ErrorMessage message=message /> })}
        {move || messages.get().success.map(|message| view! { <SuccessMessage message=message /> })}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_state_keeps_only_latest_outcome() {
        let mut state = MessageState::default();
        state.set_error("Operation failed");
        assert!(state.success.is_none());

        state.set_success("Department added");
        assert_eq!(state.success.as_deref(), Some("Department added"));
        assert!(state.error.is_none());

        state.clear();
        assert_eq!(state, MessageState::default());
    }

    #[test]
    fn set_result_falls_back_on_empty_message() {
        let mut state = MessageState::default();
        state.set_result(Ok(String::new()), "Leave type added");
        assert_eq!(state.success.as_deref(), Some("Leave type added"));
        state.set_result(Err("Error occurred".into()), "unused");
        assert_eq!(state.error.as_deref(), Some("Error occurred"));
    }
}
