//! # dockguide-markup
//!
//! Lightweight-markup conversion for tutorial bodies.
//!
//! - **Block**: the structured output (headings, paragraphs, lists, code
//!   blocks, rules) with styled inline [`Span`](block::Span)s.
//! - **Renderer**: the [`MarkupRenderer`](renderer::MarkupRenderer) seam
//!   and its CommonMark implementation built on `pulldown-cmark`.
//!
//! # Example
//!
//! ```rust
//! use dockguide_markup::block::Block;
//! use dockguide_markup::renderer::{CommonMarkRenderer, MarkupRenderer};
//!
//! let blocks = CommonMarkRenderer::new().render("## Setup\n\n- **Fast**: yes");
//! assert!(matches!(blocks[0], Block::Heading { level: 2, .. }));
//! assert!(matches!(blocks[1], Block::List { .. }));
//! ```

pub mod block;
pub mod renderer;
