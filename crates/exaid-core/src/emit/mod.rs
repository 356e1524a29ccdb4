mod emitter;
mod formatter;

pub use emitter::{EmitReport, Emitter, OutputLayout};
pub use formatter::{DEFAULT_FORMATTER, FormatError, Formatter, Passthrough, PrettierFormatter, SourceSyntax};

#[cfg(test)]
mod tests;
