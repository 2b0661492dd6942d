use bubble_menu_core::MenuConfig;
use web_sys::UrlSearchParams;

pub const CONFIG_SCRIPT_ID: &str = "bubble-menu-config";
const EASE_PARAM: &str = "menu.ease";
const DURATION_PARAM: &str = "menu.duration";
const STAGGER_PARAM: &str = "menu.stagger";

/// Reads the inline JSON config block, applies query-string overrides and
/// repairs invalid fields back to their defaults.
pub fn load_menu_config() -> MenuConfig {
    let mut config = read_config_script().unwrap_or_default();
    if let Some(search) = web_sys::window().and_then(|window| window.location().search().ok()) {
        apply_query_overrides(&mut config, &search);
    }
    let (config, repaired) = config.sanitized();
    for err in repaired {
        gloo::console::warn!("bubble menu config", err.to_string());
    }
    config
}

fn read_config_script() -> Option<MenuConfig> {
    let document = web_sys::window()?.document()?;
    let raw = document.get_element_by_id(CONFIG_SCRIPT_ID)?.text_content()?;
    match MenuConfig::from_json(&raw) {
        Ok(config) => Some(config),
        Err(err) => {
            gloo::console::warn!("bubble menu config", err.to_string());
            None
        }
    }
}

pub(crate) fn apply_query_overrides(config: &mut MenuConfig, search: &str) {
    let Ok(params) = UrlSearchParams::new_with_str(search) else {
        return;
    };
    if let Some(ease) = params.get(EASE_PARAM) {
        config.animation_ease = ease;
    }
    if let Some(value) = parse_seconds(&params, DURATION_PARAM) {
        config.animation_duration = value;
    }
    if let Some(value) = parse_seconds(&params, STAGGER_PARAM) {
        config.stagger_delay = value;
    }
}

fn parse_seconds(params: &UrlSearchParams, key: &str) -> Option<f64> {
    let raw = params.get(key)?;
    match raw.trim().parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            gloo::console::warn!("ignoring query param", key.to_string(), raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn query_overrides_tuning_fields() {
        let mut config = MenuConfig::default();
        apply_query_overrides(
            &mut config,
            "?menu.ease=sine.inOut&menu.duration=0.3&menu.stagger=0.02",
        );
        assert_eq!(config.animation_ease, "sine.inOut");
        assert_eq!(config.animation_duration, 0.3);
        assert_eq!(config.stagger_delay, 0.02);
    }

    #[wasm_bindgen_test]
    fn unparseable_numbers_are_ignored() {
        let mut config = MenuConfig::default();
        apply_query_overrides(&mut config, "?menu.duration=slow");
        assert_eq!(config, MenuConfig::default());
    }
}
