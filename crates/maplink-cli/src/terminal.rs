//! Terminal rendering of the choice prompt.
//!
//! Both prompt styles use the same interactive select list: as an action
//! sheet the cancel entry is listed last, as a dialog every button fires its
//! own callback and escaping the list counts as dismissing the dialog.

use async_trait::async_trait;
use dialoguer::Select;
use maplink_launcher::{ActionSheetHost, DialogButton, DialogCallback, DialogHost};

#[derive(Debug, Clone, Copy, Default)]
pub struct Terminal;

/// Show `labels` as a select list and wait for the user.
///
/// Returns the picked index, or `None` when the list is escaped or the
/// terminal cannot be driven interactively.
fn ask(title: &str, message: &str, labels: &[String]) -> Option<usize> {
    let answer = Select::new()
        .with_prompt(prompt_text(title, message))
        .items(labels)
        .default(0)
        .interact_opt();
    selection(answer)
}

fn prompt_text(title: &str, message: &str) -> String {
    if message.is_empty() {
        title.to_string()
    } else {
        format!("{title}: {message}")
    }
}

fn selection(answer: dialoguer::Result<Option<usize>>) -> Option<usize> {
    match answer {
        Ok(picked) => picked,
        Err(e) => {
            tracing::warn!(error = %e, "choice prompt failed, treating as cancelled");
            None
        }
    }
}

#[async_trait]
impl ActionSheetHost for Terminal {
    async fn present_action_sheet(
        &self,
        title: &str,
        message: &str,
        options: &[String],
        cancel_index: usize,
    ) -> usize {
        let title = title.to_string();
        let message = message.to_string();
        let options = options.to_vec();

        tokio::task::spawn_blocking(move || ask(&title, &message, &options))
            .await
            .ok()
            .flatten()
            .unwrap_or(cancel_index)
    }
}

impl DialogHost for Terminal {
    fn present_choice_dialog(
        &self,
        title: &str,
        message: &str,
        buttons: Vec<DialogButton>,
        on_dismiss: DialogCallback,
    ) {
        let title = title.to_string();
        let message = message.to_string();

        tokio::task::spawn_blocking(move || {
            let labels: Vec<String> = buttons.iter().map(|b| b.label.clone()).collect();
            match ask(&title, &message, &labels) {
                Some(index) => {
                    if let Some(button) = buttons.into_iter().nth(index) {
                        (button.on_press)();
                    }
                }
                None => on_dismiss(),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_text_joins_title_and_message() {
        assert_eq!(
            prompt_text("Open in Maps", "What app would you like to use?"),
            "Open in Maps: What app would you like to use?"
        );
        assert_eq!(prompt_text("Open in Maps", ""), "Open in Maps");
    }

    #[test]
    fn selection_passes_through_pick_and_escape() {
        assert_eq!(selection(Ok(Some(2))), Some(2));
        assert_eq!(selection(Ok(None)), None);
    }

    #[test]
    fn selection_error_is_cancel() {
        let err = dialoguer::Error::IO(std::io::Error::other("not a terminal"));
        assert_eq!(selection(Err(err)), None);
    }
}
