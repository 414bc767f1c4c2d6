use anyhow::{Context, Result, anyhow};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "templates"]
struct Templates;

pub fn get_string(path: &str) -> Result<String> {
    let file =
        Templates::get(path).ok_or_else(|| anyhow!("embedded template `{}` missing", path))?;
    std::str::from_utf8(file.data.as_ref())
        .with_context(|| format!("decoding embedded template `{}`", path))
        .map(|value| value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_templates_are_present() {
        for path in ["python/gitignore", "python/requirements.txt", "python/license.tmpl"] {
            assert!(get_string(path).is_ok(), "missing template `{path}`");
        }
    }

    #[test]
    fn missing_template_is_an_error() {
        assert!(get_string("python/nope").is_err());
    }
}
