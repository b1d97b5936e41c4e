use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};

use crate::global_constants::LOG_TAG_FORM;

/// Line-oriented search form: every non-empty line is one submission.
pub struct TerminalSearchForm<R> {
    lines: Lines<BufReader<R>>,
}

impl TerminalSearchForm<tokio::io::Stdin> {
    pub fn attach_to_stdin() -> Self {
        log::debug!("{} Reading submissions from stdin", LOG_TAG_FORM);
        Self::from_reader(tokio::io::stdin())
    }
}

impl<R: AsyncRead + Unpin> TerminalSearchForm<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
        }
    }

    /// Returns `None` at end of input or on an empty line.
    pub async fn next_submission(&mut self) -> Result<Option<String>> {
        let Some(line) = self.lines.next_line().await? else {
            log::debug!("{} End of input", LOG_TAG_FORM);
            return Ok(None);
        };

        if line.trim().is_empty() {
            log::debug!("{} Empty submission, closing form", LOG_TAG_FORM);
            return Ok(None);
        }

        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_next_submission_yields_lines_until_blank() {
        let input: &[u8] = b"cats\nnight sky\n\nignored\n";
        let mut form = TerminalSearchForm::from_reader(input);

        assert_eq!(form.next_submission().await.unwrap().as_deref(), Some("cats"));
        assert_eq!(
            form.next_submission().await.unwrap().as_deref(),
            Some("night sky")
        );
        assert_eq!(form.next_submission().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_next_submission_returns_none_at_end_of_input() {
        let input: &[u8] = b"";
        let mut form = TerminalSearchForm::from_reader(input);

        assert_eq!(form.next_submission().await.unwrap(), None);
    }
}
