//! Comment Form Component
//!
//! Comment textarea with empty-text validation, a busy guard against
//! double submission, and an inline failure message. The typed text is
//! kept on failure so a retry does not start from scratch.

use leptos::prelude::*;

/// Inline message under the form: a submission failure takes precedence
/// over local validation; empty strings mean nothing to show.
fn banner_message(submit_error: &str, validation_error: &str) -> Option<String> {
    if !submit_error.is_empty() {
        Some(submit_error.to_string())
    } else if !validation_error.is_empty() {
        Some(validation_error.to_string())
    } else {
        None
    }
}

#[component]
pub fn CommentForm(
    /// Called with the trimmed comment text once it passes validation.
    #[prop(into)] on_submit: Callback<String>,
    /// Outstanding-request flag owned by the detail view.
    submitting: ReadSignal<bool>,
    /// Failure message from the last submission; empty when none.
    error: ReadSignal<String>,
    /// Bumped by the detail view when a submission succeeds.
    clear: ReadSignal<u32>,
) -> impl IntoView {
    let (comment_text, set_comment_text) = signal(String::new());
    let (validation_error, set_validation_error) = signal(String::new());

    // Only a successful submission empties the textarea.
    Effect::new(move |prev: Option<u32>| {
        let gen = clear.get();
        if prev.is_some_and(|p| p != gen) {
            set_comment_text.set(String::new());
        }
        gen
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        set_validation_error.set(String::new());

        let trimmed = comment_text.get().trim().to_string();
        if trimmed.is_empty() {
            set_validation_error.set("Please type a comment.".to_string());
            return;
        }
        on_submit.run(trimmed);
    };

    view! {
        <form class="comment-form" on:submit=submit>
            <label for="comment-text">"Your comment"</label>
            <div class="comment-row">
                <textarea
                    id="comment-text"
                    rows="3"
                    placeholder="Write something sweet..."
                    prop:value=move || comment_text.get()
                    on:input=move |ev| set_comment_text.set(event_target_value(&ev))
                ></textarea>
                <button type="submit" prop:disabled=move || submitting.get()>
                    {move || if submitting.get() { "Submitting..." } else { "Submit" }}
                </button>
            </div>
            {move || {
                banner_message(&error.get(), &validation_error.get())
                    .map(|msg| view! { <p class="form-error">{msg}</p> })
            }}
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_prefers_submit_failure_over_validation() {
        let msg = banner_message("Comment failed to submit. Please try again.", "Please type a comment.");
        assert_eq!(
            msg.as_deref(),
            Some("Comment failed to submit. Please try again.")
        );
    }

    #[test]
    fn test_banner_falls_back_to_validation() {
        let msg = banner_message("", "Please type a comment.");
        assert_eq!(msg.as_deref(), Some("Please type a comment."));
    }

    #[test]
    fn test_banner_hidden_when_clean() {
        assert_eq!(banner_message("", ""), None);
    }
}
