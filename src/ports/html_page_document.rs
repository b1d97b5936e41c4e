use anyhow::Result;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::core::interfaces::ports::{PageSection, ResponseContainer};
use crate::core::models::InsertPosition;
use crate::global_constants::LOG_TAG_PAGE;
use crate::presentation::{render_page, PageLayout};

/// In-memory stand-in for a browser page. The dynamic element's children are
/// kept as HTML fragments and the full document is rewritten to
/// `output_path` after every change.
pub struct HtmlPageDocument {
    title: String,
    layout: PageLayout,
    output_path: Option<PathBuf>,
    fragments: Mutex<VecDeque<String>>,
}

impl HtmlPageDocument {
    pub fn build(title: &str, layout: PageLayout, output_path: Option<PathBuf>) -> Self {
        log::debug!(
            "{} Creating {:?} page, output={:?}",
            LOG_TAG_PAGE,
            layout,
            output_path
        );

        Self {
            title: title.to_string(),
            layout,
            output_path,
            fragments: Mutex::new(VecDeque::new()),
        }
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    pub fn inner_html(&self) -> Result<String> {
        let fragments = self.lock_fragments()?;
        Ok(fragments.iter().cloned().collect::<Vec<_>>().join("\n"))
    }

    pub fn publish(&self) -> Result<()> {
        let Some(output_path) = &self.output_path else {
            return Ok(());
        };

        let page = render_page(&self.title, self.layout, &self.inner_html()?);
        std::fs::write(output_path, page)?;

        log::debug!("{} Wrote page to {:?}", LOG_TAG_PAGE, output_path);
        Ok(())
    }

    fn lock_fragments(&self) -> Result<MutexGuard<'_, VecDeque<String>>> {
        self.fragments
            .lock()
            .map_err(|_| anyhow::anyhow!("page fragments lock poisoned"))
    }
}

impl ResponseContainer for HtmlPageDocument {
    fn clear(&self) -> Result<()> {
        self.lock_fragments()?.clear();
        self.publish()
    }

    fn insert_adjacent_html(&self, position: InsertPosition, html: &str) -> Result<()> {
        {
            let mut fragments = self.lock_fragments()?;
            match position {
                InsertPosition::AfterBegin => fragments.push_front(html.to_string()),
                InsertPosition::BeforeEnd => fragments.push_back(html.to_string()),
            }
        }
        self.publish()
    }
}

impl PageSection for HtmlPageDocument {
    fn set_inner_html(&self, html: &str) -> Result<()> {
        {
            let mut fragments = self.lock_fragments()?;
            fragments.clear();
            fragments.push_back(html.to_string());
        }
        self.publish()
    }
}
