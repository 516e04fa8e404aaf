use lol_html::html_content::ContentType;
use lol_html::{rewrite_str, ElementContentHandlers, RewriteStrSettings};
use scraper::{Html, Selector};
use std::borrow::Cow;

use crate::errors::GalleryError;

pub const DEFAULT_CONTAINER_ID: &str = "nft-gallery";
pub const DEFAULT_TITLE: &str = "NFT Gallery";

/// Page served when no template file is configured. `{{title}}` is filled in
/// by [`default_template`].
pub const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{{title}}</title>
    <style>
        #nft-gallery { display: flex; flex-wrap: wrap; gap: 16px; }
        .nft-card { width: 220px; border: 1px solid #ddd; border-radius: 8px; padding: 8px; }
        .nft-card img { width: 100%; border-radius: 4px; }
        .nft-card h2 { font-size: 1rem; margin: 8px 0 0; }
    </style>
</head>
<body>
    <h1>{{title}}</h1>
    <div id="nft-gallery"></div>
</body>
</html>
"#;

// Appended once at parse time to prove the container accepts children.
const END_MARKER: &str = "<!--nft-gallery:end-->";

pub fn default_template(title: &str) -> String {
    DEFAULT_TEMPLATE.replace("{{title}}", &escape_html(title))
}

/// A rendered gallery card: image plus heading, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub image: String,
    pub name: String,
}

impl Card {
    pub fn new(image: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            image: image.into(),
            name: name.into(),
        }
    }

    pub fn to_html(&self) -> String {
        format!(
            "<div class=\"nft-card\"><img src=\"{}\" alt=\"{}\"><h2>{}</h2></div>",
            escape_html(&self.image),
            escape_html(&self.name),
            escape_html(&self.name)
        )
    }
}

/// The single element that receives cards. Cards are only ever appended.
#[derive(Debug, Clone)]
pub struct GalleryContainer {
    id: String,
    cards: Vec<Card>,
}

impl GalleryContainer {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Append as last child.
    pub fn append(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The hosting document, checked once so the container is known to exist.
#[derive(Debug, Clone)]
pub struct GalleryPage {
    html: String,
    selector: String,
    container: GalleryContainer,
}

impl GalleryPage {
    /// Require exactly one element with `id="<container_id>"` in `html`, and
    /// that the element can take children.
    pub fn parse(html: impl Into<String>, container_id: &str) -> Result<Self, GalleryError> {
        let html = html.into();
        if container_id.contains(|c: char| c == '"' || c == '\\') {
            return Err(GalleryError::Template(format!(
                "invalid container id '{}'",
                container_id
            )));
        }
        let selector = format!("[id=\"{}\"]", container_id);

        let css = Selector::parse(&selector)
            .map_err(|e| GalleryError::Template(format!("{}: {}", selector, e)))?;
        let count = Html::parse_document(&html).select(&css).count();
        match count {
            0 => return Err(GalleryError::MissingContainer(container_id.to_string())),
            1 => {}
            n => {
                return Err(GalleryError::Template(format!(
                    "{} elements with id '{}'",
                    n, container_id
                )))
            }
        }

        let marked = append_to(&html, &selector, END_MARKER)?;
        if marked.matches(END_MARKER).count() <= html.matches(END_MARKER).count() {
            return Err(GalleryError::Template(format!(
                "container '#{}' cannot hold children or is never closed",
                container_id
            )));
        }

        Ok(Self {
            html,
            selector,
            container: GalleryContainer {
                id: container_id.to_string(),
                cards: Vec::new(),
            },
        })
    }

    pub fn container(&self) -> &GalleryContainer {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut GalleryContainer {
        &mut self.container
    }

    /// Serialize the document with every appended card inside the container,
    /// after any children it already had.
    pub fn render(&self) -> Result<String, GalleryError> {
        if self.container.is_empty() {
            return Ok(self.html.clone());
        }

        let cards: String = self
            .container
            .cards
            .iter()
            .map(|card| card.to_html())
            .collect();
        append_to(&self.html, &self.selector, &cards)
    }
}

fn append_to(html: &str, selector: &str, content: &str) -> Result<String, GalleryError> {
    let target: lol_html::Selector = selector
        .parse()
        .map_err(|e| GalleryError::Template(format!("{}: {}", selector, e)))?;
    let element_content_handlers = vec![(
        Cow::Owned(target),
        ElementContentHandlers::default().element(|el| {
            el.append(content, ContentType::Html);
            Ok(())
        }),
    )];

    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers,
            ..RewriteStrSettings::default()
        },
    )
    .map_err(|e| GalleryError::Template(e.to_string()))
}

fn escape_html(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}
