//! Template library: one canonical renderer per file role.
//!
//! Each renderer takes only the option axes that change its output. Nothing
//! here builds an import specifier by hand; every cross-file reference goes
//! through [`imports::import_path`].

pub mod config;
pub mod connector;
pub mod entry;
pub mod imports;
pub mod mvc;
pub mod package;

/// Line-oriented text builder for generated source files.
#[derive(Debug, Default)]
pub(crate) struct Source {
    buf: String,
}

impl Source {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.buf.push_str(text.as_ref());
        self.buf.push('\n');
        self
    }

    pub(crate) fn lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for l in lines {
            self.line(l);
        }
        self
    }

    pub(crate) fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    pub(crate) fn finish(&mut self) -> String {
        std::mem::take(&mut self.buf)
    }
}
