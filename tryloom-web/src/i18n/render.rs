use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

pub type Args<'a> = BTreeMap<&'a str, &'a str>;

fn lookup<'a>(root: &'a Value, dotted: &str) -> Option<&'a Value> {
    dotted.split('.').try_fold(root, |node, segment| node.get(segment))
}

/// Plural form for the bundled locales. English and Spanish both use
/// `one` for exactly one and `other` for everything else.
fn plural_form(count: &str) -> &'static str {
    match count.trim().parse::<f64>() {
        Ok(n) if (n - 1.0).abs() < f64::EPSILON => "one",
        _ => "other",
    }
}

fn pick_template<'a>(entry: &'a Value, args: Option<&Args<'_>>) -> Option<&'a str> {
    match entry {
        Value::String(text) => Some(text),
        Value::Object(forms) => {
            let form = args
                .and_then(|a| a.get("count"))
                .map_or("other", |count| plural_form(count));
            forms
                .get(form)
                .or_else(|| forms.get("other"))
                .and_then(Value::as_str)
        }
        _ => None,
    }
}

fn interpolate(template: &str, args: Option<&Args<'_>>) -> String {
    let Some(args) = args else {
        return template.to_string();
    };
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let filled = tail
            .find('}')
            .and_then(|close| args.get(&tail[1..close]).map(|value| (close, value)));
        if let Some((close, value)) = filled {
            out.push_str(value);
            rest = &tail[close + 1..];
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

fn resolve(key: &str, args: Option<&Args<'_>>) -> Option<String> {
    with_bundle(|bundle| {
        [&bundle.translations, &bundle.fallback]
            .into_iter()
            .find_map(|root| lookup(root, key).and_then(|entry| pick_template(entry, args)))
            .map(|template| interpolate(template, args))
    })
}

/// Translate `key` into the active language. Missing keys fall back to
/// English, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate with `{name}` placeholders filled from `args`; a `count`
/// argument chooses between `one` and `other` forms.
#[must_use]
pub fn tr(key: &str, args: Option<&Args<'_>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

#[must_use]
pub fn t_or(key: &str, fallback: &str) -> String {
    resolve(key, None).unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plural_forms_follow_count() {
        let entry = json!({ "one": "{count} item", "other": "{count} items" });
        let mut args = Args::new();
        args.insert("count", "1");
        assert_eq!(pick_template(&entry, Some(&args)), Some("{count} item"));
        args.insert("count", "6");
        assert_eq!(pick_template(&entry, Some(&args)), Some("{count} items"));
        assert_eq!(pick_template(&entry, None), Some("{count} items"));
        assert_eq!(pick_template(&json!(3), None), None);
    }

    #[test]
    fn placeholders_are_filled() {
        let mut args = Args::new();
        args.insert("name", "Aviator Gold");
        assert_eq!(
            interpolate("Trying on: {name} ({name})", Some(&args)),
            "Trying on: Aviator Gold (Aviator Gold)"
        );
        assert_eq!(interpolate("{name}", None), "{name}");
    }

    #[test]
    fn inserted_values_are_not_substituted_again() {
        let mut args = Args::new();
        args.insert("count", "{name}");
        args.insert("name", "Gafas");
        assert_eq!(interpolate("{count} / {name}", Some(&args)), "{name} / Gafas");
        assert_eq!(interpolate("{other} {name", Some(&args)), "{other} {name");
    }

    #[test]
    fn lookups_fall_back_to_key_and_default() {
        crate::i18n::set_lang("en");
        assert_eq!(t("home.start_camera"), "Start Camera");
        assert_eq!(t("missing.key"), "missing.key");
        assert_eq!(t_or("missing.key", "Default"), "Default");
    }

    #[test]
    fn spanish_bundle_translates() {
        crate::i18n::set_lang("es");
        assert_eq!(t("nav.back"), "Volver");
        let mut args = Args::new();
        args.insert("name", "Gafas");
        assert_eq!(tr("gallery.collection", Some(&args)), "Colección de Gafas");
        crate::i18n::set_lang("en");
    }
}
