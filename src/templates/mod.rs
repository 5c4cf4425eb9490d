mod context;
mod renderer;
mod selector;

pub use context::RenderContext;
pub use renderer::{template_name, TemplateRenderer};
pub use selector::{TemplateMap, TemplateSelector};
