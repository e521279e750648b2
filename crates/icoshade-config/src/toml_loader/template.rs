//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# icoshade configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# Edits are picked up while the scene is running.

[controls]
tessellations = 5          # 0-8 subdivision passes
# radius = 1.0
color = "#ff0000"
vertex_shader = "lambert"  # lambert, custom, fireball
fragment_shader = "lambert"

[controls.pattern]
strength = 2.0             # 0.0-5.0
octaves = 4                # 1-8
alpha = 1.0                # 0.6-1.0

[camera]
# eye = [0.0, 0.0, 5.0]
# target = [0.0, 0.0, 0.0]
# up = [0.0, 1.0, 0.0]
# fov_degrees = 45.0       # 1-179
# near = 0.1
# far = 1000.0
# orbit_speed = 0.0        # radians per second

[window]
# title = "icoshade"
# width = 1280
# height = 800
# startup_mode = "windowed"  # windowed, maximized, fullscreen
# background = "#333333"

[shaders]
# directory = ""           # empty = built-in shaders; else <variant>-<vert|frag>.wgsl files

[performance]
# present_mode = "vsync"   # vsync, immediate
# stats_interval_secs = 5.0

[logging]
# level = "INFO"           # TRACE, DEBUG, INFO, WARN, ERROR

[keybinds]
# increase_detail = "="
# decrease_detail = "-"
# reload_scene = "L"
# cycle_vertex_shader = "V"
# cycle_fragment_shader = "F"
# reset_pattern = "R"
# toggle_fullscreen = "F11"
# reload_config = "Ctrl+R"
# quit = "Escape"
"##
    .to_string()
}
