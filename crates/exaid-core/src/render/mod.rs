mod renderer;
pub mod templates;

pub use renderer::TemplateRenderer;

#[cfg(test)]
mod tests;
