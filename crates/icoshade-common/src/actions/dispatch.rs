use super::Action;

impl Action {
    /// Human-readable label for logs and keybind listings.
    pub fn label(&self) -> &'static str {
        match self {
            Action::IncreaseDetail => "Increase Detail",
            Action::DecreaseDetail => "Decrease Detail",
            Action::ReloadScene => "Reload Scene",
            Action::CycleVertexShader => "Cycle Vertex Shader",
            Action::CycleFragmentShader => "Cycle Fragment Shader",
            Action::ResetPattern => "Reset Pattern",
            Action::ToggleFullscreen => "Toggle Fullscreen",
            Action::Quit => "Quit",
            Action::ReloadConfig => "Reload Config",
            Action::None => "None",
        }
    }

    /// Whether the action edits the control values stored in the config.
    pub fn mutates_controls(&self) -> bool {
        matches!(
            self,
            Action::IncreaseDetail
                | Action::DecreaseDetail
                | Action::CycleVertexShader
                | Action::CycleFragmentShader
                | Action::ResetPattern
        )
    }

    /// All actions that can be bound to a key.
    pub fn bindable_actions() -> Vec<Action> {
        vec![
            Action::IncreaseDetail,
            Action::DecreaseDetail,
            Action::ReloadScene,
            Action::CycleVertexShader,
            Action::CycleFragmentShader,
            Action::ResetPattern,
            Action::ToggleFullscreen,
            Action::Quit,
            Action::ReloadConfig,
        ]
    }
}
