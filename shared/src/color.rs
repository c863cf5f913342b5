use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{BACKGROUND_COLOR, DEFAULT_COLOR};

const MAX_COLOR_LEN: usize = 32;

/// A CSS color value as handed to the 2D context.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(sanitize_color(value.into()))
    }

    pub fn background() -> Self {
        Self(BACKGROUND_COLOR.to_string())
    }

    pub fn as_css(&self) -> &str {
        &self.0
    }

    /// Resolves the value to straight RGBA, or `None` when it is not a color
    /// the browser would accept either.
    pub fn to_rgba8(&self) -> Option<[u8; 4]> {
        csscolorparser::parse(&self.0)
            .ok()
            .map(|color| color.to_rgba8())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self(DEFAULT_COLOR.to_string())
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn sanitize_color(color: String) -> String {
    let color = color.trim();
    if color.is_empty() {
        return DEFAULT_COLOR.to_string();
    }
    let mut color = color.to_string();
    if color.len() > MAX_COLOR_LEN {
        // Last char boundary at or below the byte limit.
        let end = color
            .char_indices()
            .map(|(index, _)| index)
            .take_while(|index| *index <= MAX_COLOR_LEN)
            .last()
            .unwrap_or(0);
        color.truncate(end);
    }
    color
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToolMode {
    #[default]
    Brush,
    Eraser,
}

impl ToolMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ToolMode::Brush => "brush",
            ToolMode::Eraser => "eraser",
        }
    }
}

impl fmt::Display for ToolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown tool: {0:?}")]
pub struct UnknownTool(pub String);

impl FromStr for ToolMode {
    type Err = UnknownTool;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "brush" => Ok(ToolMode::Brush),
            "eraser" => Ok(ToolMode::Eraser),
            _ => Err(UnknownTool(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_color_falls_back_to_default() {
        assert_eq!(Color::new("   ").as_css(), DEFAULT_COLOR);
        assert_eq!(Color::default().as_css(), "black");
    }

    #[test]
    fn overlong_color_is_truncated() {
        let color = Color::new("x".repeat(80));
        assert_eq!(color.as_css().len(), MAX_COLOR_LEN);
    }

    #[test]
    fn overlong_multibyte_color_is_truncated_by_bytes() {
        let color = Color::new("é".repeat(40));
        assert_eq!(color.as_css().len(), MAX_COLOR_LEN);
        assert_eq!(color.as_css().chars().count(), 16);

        // The 32nd byte falls inside a two-byte char, so the cut lands before it.
        let color = Color::new(format!("a{}", "é".repeat(40)));
        assert_eq!(color.as_css().len(), 31);
        assert!(color.as_css().starts_with('a'));
    }

    #[test]
    fn css_colors_resolve_to_rgba() {
        assert_eq!(Color::new("red").to_rgba8(), Some([255, 0, 0, 255]));
        assert_eq!(Color::new("#00ff00").to_rgba8(), Some([0, 255, 0, 255]));
        assert_eq!(Color::background().to_rgba8(), Some([255, 255, 255, 255]));
        assert_eq!(Color::new("not-a-color").to_rgba8(), None);
    }

    #[test]
    fn color_serializes_as_plain_string() {
        let json = serde_json::to_string(&Color::new("#123456")).unwrap();
        assert_eq!(json, "\"#123456\"");
        let color: Color = serde_json::from_str("\"\"").unwrap();
        assert_eq!(color, Color::default());
    }

    #[test]
    fn tool_names_parse() {
        assert_eq!("brush".parse::<ToolMode>(), Ok(ToolMode::Brush));
        assert_eq!(" Eraser ".parse::<ToolMode>(), Ok(ToolMode::Eraser));
        assert_eq!(
            "lasso".parse::<ToolMode>(),
            Err(UnknownTool("lasso".to_string()))
        );
        assert_eq!(ToolMode::default(), ToolMode::Brush);
    }
}
