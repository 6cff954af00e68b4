use console::Style;
use once_cell::sync::Lazy;

pub static INDEX: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static NAME: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static DETAIL: Lazy<Style> = Lazy::new(|| Style::new().color256(246));
pub static EDITING: Lazy<Style> = Lazy::new(|| Style::new().cyan().italic());
pub static PROMPT: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static CURRENT_VALUE: Lazy<Style> = Lazy::new(|| Style::new().dim());
