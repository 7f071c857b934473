//! Document converter boundary.

use std::path::{Path, PathBuf};

use qs_core::process::{Runner, SystemRunner};

use crate::ConvertError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Html => "html",
        }
    }

    /// File extension of the rendered output, without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Html => "html",
        }
    }
}

/// Converts a local document, writing output next to it.
pub trait Converter {
    /// Returns the path of the rendered file.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError`] if conversion fails or produces nothing.
    fn convert(&self, input: &Path, format: OutputFormat) -> Result<PathBuf, ConvertError>;
}

impl<C: Converter + ?Sized> Converter for &C {
    fn convert(&self, input: &Path, format: OutputFormat) -> Result<PathBuf, ConvertError> {
        (**self).convert(input, format)
    }
}

/// `jupyter nbconvert --to <format> <input> --template <template>`.
#[derive(Debug, Clone)]
pub struct NbConvert<R = SystemRunner> {
    program: String,
    template: String,
    runner: R,
}

impl NbConvert {
    #[must_use]
    pub fn new(program: impl Into<String>, template: impl Into<String>) -> Self {
        Self::with_runner(program, template, SystemRunner)
    }
}

impl<R: Runner> NbConvert<R> {
    #[must_use]
    pub fn with_runner(program: impl Into<String>, template: impl Into<String>, runner: R) -> Self {
        Self {
            program: program.into(),
            template: template.into(),
            runner,
        }
    }
}

impl<R: Runner> Converter for NbConvert<R> {
    fn convert(&self, input: &Path, format: OutputFormat) -> Result<PathBuf, ConvertError> {
        // An earlier render left in place would hide a run that writes nothing.
        let output = input.with_extension(format.extension());
        match std::fs::remove_file(&output) {
            Ok(()) => {}
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
            Err(source) => {
                return Err(ConvertError::StaleOutput {
                    path: output,
                    source,
                });
            }
        }

        let args = vec![
            "nbconvert".to_string(),
            "--to".to_string(),
            format.as_str().to_string(),
            input.display().to_string(),
            "--template".to_string(),
            self.template.clone(),
        ];
        self.runner.run(&self.program, &args)?;

        if !output.is_file() {
            return Err(ConvertError::NoOutput(output));
        }
        Ok(output)
    }
}
