use crate::app::domain::{Alignment, EditorSettings, FormattingState, ListType, ParagraphStyleSnapshot};
use crate::app::infrastructure::error::{AppError, Result};

/// Mutates a [`FormattingState`] in response to toolbar actions
#[derive(Debug, Default)]
pub struct FormattingController {
    state: FormattingState,
}

impl FormattingController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed font and colour from settings, ignoring invalid values
    pub fn from_settings(settings: &EditorSettings) -> Self {
        let mut controller = Self::new();
        if controller.set_font_family(&settings.font_family).is_err() {
            tracing::warn!("Ignoring empty font family from settings");
        }
        if controller.set_font_size(settings.font_size).is_err() {
            tracing::warn!("Ignoring invalid font size {} from settings", settings.font_size);
        }
        controller.set_foreground(&settings.foreground);
        controller
    }

    /// Copy of the current state
    pub fn state(&self) -> FormattingState {
        self.state.clone()
    }

    pub fn paragraph_snapshot(&self) -> ParagraphStyleSnapshot {
        self.state.paragraph_snapshot()
    }

    pub fn toggle_bold(&mut self) -> bool {
        self.state.bold = !self.state.bold;
        self.state.bold
    }

    pub fn toggle_italic(&mut self) -> bool {
        self.state.italic = !self.state.italic;
        self.state.italic
    }

    pub fn toggle_underline(&mut self) -> bool {
        self.state.underline = !self.state.underline;
        self.state.underline
    }

    pub fn set_font_family(&mut self, family: &str) -> Result<()> {
        let family = family.trim();
        if family.is_empty() {
            return Err(AppError::Settings("font family must not be empty".to_string()));
        }
        self.state.font_family = family.to_string();
        Ok(())
    }

    pub fn set_font_size(&mut self, size: u32) -> Result<()> {
        if size == 0 {
            return Err(AppError::Settings("font size must be positive".to_string()));
        }
        self.state.font_size = size;
        Ok(())
    }

    pub fn set_foreground(&mut self, colour: &str) {
        self.state.foreground = colour.to_string();
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.state.alignment = alignment;
    }

    pub fn increase_indent(&mut self) -> u32 {
        self.state.indent = self.state.indent.saturating_add(1);
        self.state.indent
    }

    /// Never goes below zero
    pub fn decrease_indent(&mut self) -> u32 {
        self.state.indent = self.state.indent.saturating_sub(1);
        self.state.indent
    }

    pub fn set_list_type(&mut self, list_type: ListType) {
        self.state.list_type = list_type;
    }

    pub fn clear_list_type(&mut self) {
        self.state.list_type = ListType::None;
    }

    /// Clear every toggle and restore default font, colour and paragraph fields
    pub fn reset(&mut self) {
        self.state = FormattingState::default();
    }

    /// Status bar text, e.g. "Formatting: B U"
    pub fn status_label(&self) -> String {
        let flags: Vec<&str> = [("B", self.state.bold), ("I", self.state.italic), ("U", self.state.underline)]
            .into_iter()
            .filter_map(|(name, active)| active.then_some(name))
            .collect();

        if flags.is_empty() {
            "Formatting: None".to_string()
        } else {
            format!("Formatting: {}", flags.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_sequence() {
        let mut controller = FormattingController::new();
        assert_eq!(controller.state(), FormattingState::default());

        assert!(controller.toggle_bold());
        assert!(controller.toggle_italic());
        assert!(controller.toggle_underline());

        let state = controller.state();
        assert!(state.bold && state.italic && state.underline);
        assert_eq!(controller.status_label(), "Formatting: B I U");

        assert!(!controller.toggle_italic());
        assert_eq!(controller.status_label(), "Formatting: B U");

        controller.reset();
        assert_eq!(controller.state(), FormattingState::default());
        assert_eq!(controller.status_label(), "Formatting: None");
    }

    #[test]
    fn test_font_and_colour() {
        let mut controller = FormattingController::new();
        controller.set_font_family("Courier New").unwrap();
        controller.set_font_size(18).unwrap();
        controller.set_foreground("#123456");

        let state = controller.state();
        assert_eq!(state.font_family, "Courier New");
        assert_eq!(state.font_size, 18);
        assert_eq!(state.foreground, "#123456");
    }

    #[test]
    fn test_invalid_font_values_rejected() {
        let mut controller = FormattingController::new();
        assert!(controller.set_font_family("   ").is_err());
        assert!(controller.set_font_size(0).is_err());
        assert_eq!(controller.state().font_family, "Arial");
        assert_eq!(controller.state().font_size, 12);
    }

    #[test]
    fn test_paragraph_controls() {
        let mut controller = FormattingController::new();
        controller.set_alignment(Alignment::Center);
        controller.increase_indent();
        controller.increase_indent();
        assert_eq!(controller.decrease_indent(), 1);

        let state = controller.state();
        assert_eq!(state.alignment, Alignment::Center);
        assert_eq!(state.indent, 1);

        controller.set_list_type(ListType::Bullet);
        assert_eq!(controller.state().list_type, ListType::Bullet);
        assert_eq!(
            controller.paragraph_snapshot(),
            ParagraphStyleSnapshot::new(Alignment::Center, 1, ListType::Bullet)
        );

        controller.clear_list_type();
        assert_eq!(controller.state().list_type, ListType::None);
    }

    #[test]
    fn test_decrease_indent_saturates() {
        let mut controller = FormattingController::new();
        assert_eq!(controller.decrease_indent(), 0);
    }

    #[test]
    fn test_state_is_a_copy() {
        let controller = FormattingController::new();
        let mut state = controller.state();
        state.bold = true;
        assert!(!controller.state().bold);
    }

    #[test]
    fn test_from_settings() {
        let settings = EditorSettings {
            font_family: "Georgia".to_string(),
            font_size: 0,
            foreground: "#ff0000".to_string(),
            ..Default::default()
        };
        let state = FormattingController::from_settings(&settings).state();
        assert_eq!(state.font_family, "Georgia");
        assert_eq!(state.font_size, 12);
        assert_eq!(state.foreground, "#ff0000");
    }
}
