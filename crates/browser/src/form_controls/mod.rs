mod props;
mod textarea_autosize;

pub use props::AutosizeProps;
pub use textarea_autosize::{HeightCallback, TextareaAutosize, measured_text};

#[cfg(test)]
mod tests;
