use icoshade_common::Color;

/// Log the first frame presentation (once only).
pub(crate) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}

/// Opaque clear color from a hex string. Invalid strings give `#333333`.
pub(crate) fn clear_color_from_hex(hex: &str) -> wgpu::Color {
    let [r, g, b, _] = Color::from_hex(hex)
        .unwrap_or(Color::from_rgba(0x33, 0x33, 0x33, 0xff))
        .to_normalized();
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: 1.0,
    }
}
