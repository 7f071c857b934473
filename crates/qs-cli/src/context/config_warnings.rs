/// Config sections and an example key for each, as `QUICKSHARE_<SECTION>__<FIELD>`.
const SECTIONS: [(&str, &str); 3] = [
    ("SHARE", "QUICKSHARE_SHARE__BUCKET"),
    ("TOOLS", "QUICKSHARE_TOOLS__AWS_PROFILE"),
    ("PREVIEW", "QUICKSHARE_PREVIEW__SCRATCH_DIR"),
];

/// Emit warnings for env var keys that figment ignores because they use a
/// single underscore between section and field.
pub fn warn_unconfigured() {
    for warning in collect_unconfigured_warnings(std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    SECTIONS
        .iter()
        .filter(|(section, _)| {
            let single = format!("QUICKSHARE_{section}_");
            let double = format!("QUICKSHARE_{section}__");
            env_keys
                .iter()
                .any(|key| key.starts_with(&single) && !key.starts_with(&double))
        })
        .map(|(section, example)| {
            format!(
                "QUICKSHARE_{section}_* env vars are ignored. Use double underscores (example: {example})."
            )
        })
        .collect()
}
