/// User interface module
///
/// This module holds everything the pages are drawn with:
/// - The page frame: navbar, footer, page header and layout
/// - Shared widgets and the visual style
/// - Canvas drawings (orbit, bars, evolution, pipeline, diagrams)

pub mod bars;
pub mod diagram;
pub mod evolution;
pub mod footer;
pub mod layout;
pub mod navbar;
pub mod orbit;
pub mod page_header;
pub mod paint;
pub mod pipeline;
pub mod style;
pub mod widgets;

pub use page_header::page_header;
