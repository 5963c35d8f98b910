//! Configuration summary
//!
//! [`Headers`] is an ordered report: family display name → list of
//! (key, value) pairs. It is filled by [`Parameters::get_headers`] and can
//! fold a whole pipeline of parameter objects with [`Headers::collect`].
//!
//! Rendering:
//!
//! ```text
//! # * Encoder BCH ---------------------------------------------
//! #    ** Type                   = BCH
//! #    ** Code rate              = 0.944882
//! ```

use std::fmt;

use super::Parameters;

type Section = Vec<(String, String)>;

/// Ordered key/value report per family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    sections: Vec<(String, Section)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold the headers of several parameter objects, in order.
    pub fn collect(params: &[&dyn Parameters], full: bool) -> Self {
        let mut headers = Self::new();
        for p in params {
            p.get_headers(&mut headers, full);
        }
        headers
    }

    /// Section of a family, created at the end if missing.
    pub fn section_mut(&mut self, family: &str) -> &mut Section {
        let index = match self.sections.iter().position(|(f, _)| f == family) {
            Some(i) => i,
            None => {
                self.sections.push((family.to_string(), Vec::new()));
                self.sections.len() - 1
            }
        };
        &mut self.sections[index].1
    }

    pub fn push(&mut self, family: &str, key: impl Into<String>, value: impl ToString) {
        self.section_mut(family).push((key.into(), value.to_string()));
    }

    pub fn get(&self, family: &str) -> Option<&[(String, String)]> {
        self.sections
            .iter()
            .find(|(f, _)| f == family)
            .map(|(_, s)| s.as_slice())
    }

    /// Value of `key` in a family section.
    pub fn value(&self, family: &str, key: &str) -> Option<&str> {
        self.get(family)?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|(f, _)| f.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[(String, String)])> {
        self.sections.iter().map(|(f, s)| (f.as_str(), s.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl fmt::Display for Headers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .sections
            .iter()
            .flat_map(|(_, s)| s.iter().map(|(k, _)| k.len()))
            .max()
            .unwrap_or(0);
        for (family, section) in &self.sections {
            writeln!(f, "# * {:-<56}", format!("{family} "))?;
            for (key, value) in section {
                writeln!(f, "#    ** {key:<width$} = {value}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_keep_insertion_order() {
        let mut headers = Headers::new();
        headers.push("Encoder", "Type", "BCH");
        headers.push("Frozen bits", "Type", "FILE");
        headers.push("Encoder", "Code rate", 0.5);
        assert_eq!(headers.families().collect::<Vec<_>>(), ["Encoder", "Frozen bits"]);
        let keys: Vec<_> = headers.get("Encoder").unwrap().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["Type", "Code rate"]);
        assert_eq!(headers.value("Encoder", "Code rate"), Some("0.5"));
        assert_eq!(headers.value("Decoder", "Type"), None);
    }

    #[test]
    fn test_render() {
        let mut headers = Headers::new();
        headers.push("Encoder", "Type", "NO");
        headers.push("Encoder", "Systematic", "yes");
        let text = headers.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("# * Encoder ---"));
        assert_eq!(lines[1], "#    ** Type       = NO");
        assert_eq!(lines[2], "#    ** Systematic = yes");
    }

    #[test]
    fn test_empty() {
        let headers = Headers::new();
        assert!(headers.is_empty());
        assert_eq!(headers.to_string(), "");
    }
}
