use crate::error::{AppError, AppResult};
use crate::theme::types::{ThemeColors, ThemeRole};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

/// Global style variables mirroring the structured theme.
///
/// Consumers that never see a [`ThemeHandle`](crate::theme::ThemeHandle)
/// read colors by variable name (`--color-accent`), the same way a
/// stylesheet reads custom properties. The store keeps this map in step
/// with every update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleProperties {
    values: BTreeMap<String, String>,
}

impl StyleProperties {
    pub fn from_colors(colors: &ThemeColors) -> Self {
        let mut properties = Self::default();
        for (role, value) in colors.iter() {
            properties.set(role, value);
        }
        properties
    }

    pub fn set(&mut self, role: ThemeRole, value: &str) {
        self.values.insert(role.css_variable(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Render as a `:root` stylesheet block
    pub fn to_css(&self) -> String {
        let mut css = String::from(":root {\n");
        for (name, value) in self.iter() {
            let _ = writeln!(css, "  {name}: {value};");
        }
        css.push_str("}\n");
        css
    }
}

/// Destination that receives the style variables after every theme change.
pub trait StyleSink {
    fn name(&self) -> &str;

    fn publish(&mut self, properties: &StyleProperties) -> AppResult<()>;
}

/// Writes the variables to a stylesheet on disk
pub struct CssFileSink {
    path: PathBuf,
}

impl CssFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StyleSink for CssFileSink {
    fn name(&self) -> &str {
        "css-file"
    }

    fn publish(&mut self, properties: &StyleProperties) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.path, properties.to_css()).map_err(|e| {
            AppError::Io(format!(
                "Failed to write style variables to '{}': {e}",
                self.path.display()
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::assert_ok;

    #[test]
    fn test_properties_cover_every_role() {
        let properties = StyleProperties::from_colors(&ThemeColors::default());

        assert_eq!(properties.len(), ThemeRole::ALL.len());
        assert_eq!(properties.get("--color-primary"), Some("#9c8b7a"));
        assert_eq!(properties.get("--color-accent"), Some("#c5b8ac"));
        assert_eq!(properties.get("--color-unknown"), None);
    }

    #[test]
    fn test_to_css_is_sorted_root_block() {
        let properties = StyleProperties::from_colors(&ThemeColors::default());

        let css = properties.to_css();

        assert!(css.starts_with(":root {\n"));
        assert!(css.ends_with("}\n"));
        let accent = css.find("--color-accent: #c5b8ac;");
        let secondary = css.find("--color-secondary: #e0c9b8;");
        assert!(accent.is_some() && secondary.is_some());
        assert!(accent < secondary);
    }

    #[test]
    fn test_css_file_sink_writes_stylesheet() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("styles").join("theme.css");
        let mut sink = CssFileSink::new(&path);

        assert_ok!(sink.publish(&StyleProperties::from_colors(&ThemeColors::default())));

        let written = fs::read_to_string(&path).expect("stylesheet written");
        assert!(written.contains("--color-background: #faf9f7;"));
    }
}
