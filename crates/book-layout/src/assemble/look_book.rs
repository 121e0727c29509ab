use super::{ensure_unique_ids, title_block};
use crate::card::CardLayout;
use crate::document::{Document, FlowBlock, Page, PageContent, TextSection};
use crate::entry::{DocumentHeader, Role};
use crate::types::{BookKind, Result};

/// LookBook: one continuous flow of role cards, no pagination decisions
pub struct LookBookDocument;

impl LookBookDocument {
    /// Header block followed by one card per role, in input order
    pub fn assemble(header: &DocumentHeader, roles: &[Role]) -> Result<Document> {
        ensure_unique_ids(roles)?;

        let kind = BookKind::LookBook;
        let mut blocks = Vec::with_capacity(roles.len() + 1);
        blocks.push(FlowBlock::Header(title_block(kind.title(), header)));
        blocks.extend(roles.iter().map(|role| FlowBlock::Card(role.layout())));

        log::debug!("Assembled look book flow with {} roles", roles.len());

        let document = Document {
            kind,
            pages: vec![Page {
                orientation: kind.orientation(),
                content: PageContent::Flow(blocks),
            }],
        };
        document.check_image_ids()?;
        Ok(document)
    }

    /// Minimal variant: a single page holding two free-text sections
    pub fn assemble_sections(sections: &[TextSection; 2]) -> Document {
        let kind = BookKind::LookBook;
        Document {
            kind,
            pages: vec![Page {
                orientation: kind.orientation(),
                content: PageContent::Sections(sections.to_vec()),
            }],
        }
    }
}
