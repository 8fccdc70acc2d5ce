// src/views/scripts.rs

use std::time::Duration;

/// Stopwatch: redraws the `MM:SS` label from a fixed start instant.
const CLOCK_SCRIPT_TEMPLATE: &str = r#"
(function () {
    const startMs = {start_ms};
    const label = document.getElementById({element_id});
    if (!label) { return; }
    function pad(n) { return String(n).padStart(2, "0"); }
    function render() {
        const elapsed = Math.max(0, Math.floor((Date.now() - startMs) / 1000));
        label.textContent = pad(Math.floor(elapsed / 60)) + ":" + pad(elapsed % 60);
    }
    render();
    setInterval(render, {tick_ms});
})();
"#;

/// Inactivity reset: one pending timer, re-armed by any pointer, key or touch event.
const IDLE_RESET_SCRIPT_TEMPLATE: &str = r#"
(function () {
    let timer = null;
    function resetApp() { window.location.replace({reset_url}); }
    function rearm() {
        clearTimeout(timer);
        timer = setTimeout(resetApp, {timeout_ms});
    }
    ["mousemove", "keydown", "click", "touchstart"].forEach(function (name) {
        document.addEventListener(name, rearm, { passive: true });
    });
    rearm();
})();
"#;

pub fn clock_script(element_id: &str, start_ms: i64, tick: Duration) -> String {
    CLOCK_SCRIPT_TEMPLATE
        .replace("{start_ms}", &start_ms.to_string())
        .replace("{element_id}", &js_string_literal(element_id))
        .replace("{tick_ms}", &tick.as_millis().to_string())
}

pub fn idle_reset_script(reset_url: &str, timeout: Duration) -> String {
    IDLE_RESET_SCRIPT_TEMPLATE
        .replace("{reset_url}", &js_string_literal(reset_url))
        .replace("{timeout_ms}", &timeout.as_millis().to_string())
}

fn js_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '<' => out.push_str("\\u003c"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}
