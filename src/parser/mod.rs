pub mod content;
pub mod template;

pub use content::ExtractedContent;
pub use template::TemplateRegions;
