use desk_config::DeskConfig;

/// Sections and an example key using the correct `__` separator.
const SECTIONS: &[(&str, &str)] = &[
    ("API", "FRONTDESK_API__BASE_URL"),
    ("ENDPOINTS", "FRONTDESK_ENDPOINTS__ROOMS"),
    ("REFRESH", "FRONTDESK_REFRESH__INTERVAL_SECS"),
    ("RECONCILE", "FRONTDESK_RECONCILE__TIE_POLICY"),
    ("SESSION", "FRONTDESK_SESSION__HOTEL_ID"),
];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &DeskConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &DeskConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.api.is_configured() && has_env_prefix(&env_keys, "FRONTDESK_API") {
        warnings.push(
            "API config appears default while FRONTDESK_API* env vars exist. Use double underscores (example: FRONTDESK_API__BASE_URL)."
                .to_string(),
        );
    }

    for (section, example) in SECTIONS {
        let single = format!("FRONTDESK_{section}_");
        let double = format!("FRONTDESK_{section}__");
        if env_keys
            .iter()
            .any(|key| key.starts_with(&single) && !key.starts_with(&double))
        {
            warnings.push(format!(
                "Ignoring FRONTDESK_{section}_* env vars with a single underscore. Use double underscores (example: {example})."
            ));
        }
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
