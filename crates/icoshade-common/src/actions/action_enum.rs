use serde::{Deserialize, Serialize};

/// Every user-triggerable action in the application.
///
/// Keybinds resolve to an `Action`; the app dispatcher matches on this
/// enum to route to the control state, the renderer, or the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    // -- Mesh --
    IncreaseDetail,
    DecreaseDetail,
    ReloadScene,

    // -- Shading --
    CycleVertexShader,
    CycleFragmentShader,
    ResetPattern,

    // -- Window --
    ToggleFullscreen,
    Quit,

    // -- Config --
    ReloadConfig,

    // -- Noop --
    None,
}
