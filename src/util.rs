// Small shared helpers.

/// Milliseconds since the Unix epoch, per the browser clock.
pub fn now_ms() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

/// Filename for an exported composite, e.g. `avatar-frame-1722470400000.png`.
pub fn export_filename(epoch_ms: u64) -> String {
    format!("avatar-frame-{}.png", epoch_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_embeds_timestamp() {
        assert_eq!(
            export_filename(1722470400000),
            "avatar-frame-1722470400000.png"
        );
    }
}
