//! AWS CLI adapter.

use qs_core::ObjectUri;
use qs_core::process::{Runner, SystemRunner};

use crate::{ListedObject, Location, ObjectStore, StoreError, parse_listing};

/// [`ObjectStore`] backed by the `aws` command line tool.
#[derive(Debug, Clone)]
pub struct AwsCli<R = SystemRunner> {
    program: String,
    profile: Option<String>,
    runner: R,
}

impl AwsCli {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self::with_runner(program, SystemRunner)
    }
}

impl<R: Runner> AwsCli<R> {
    #[must_use]
    pub fn with_runner(program: impl Into<String>, runner: R) -> Self {
        Self {
            program: program.into(),
            profile: None,
            runner,
        }
    }

    #[must_use]
    pub fn with_profile(mut self, profile: Option<&str>) -> Self {
        self.profile = profile.map(ToString::to_string);
        self
    }

    fn invoke(&self, mut args: Vec<String>) -> Result<String, StoreError> {
        if let Some(profile) = &self.profile {
            args.push("--profile".to_string());
            args.push(profile.clone());
        }
        Ok(self.runner.run(&self.program, &args)?)
    }
}

impl<R: Runner> ObjectStore for AwsCli<R> {
    fn list_objects(&self, bucket: &str, prefix: &str) -> Result<Vec<ListedObject>, StoreError> {
        let raw = self.invoke(vec![
            "s3api".into(),
            "list-objects".into(),
            "--bucket".into(),
            bucket.into(),
            "--prefix".into(),
            prefix.into(),
            "--output".into(),
            "json".into(),
        ])?;
        parse_listing(&raw)
    }

    fn copy(&self, source: &Location, destination: &Location) -> Result<(), StoreError> {
        self.invoke(vec![
            "s3".into(),
            "cp".into(),
            source.to_string(),
            destination.to_string(),
        ])?;
        Ok(())
    }

    fn move_object(&self, source: &ObjectUri, destination: &ObjectUri) -> Result<(), StoreError> {
        self.invoke(vec![
            "s3".into(),
            "mv".into(),
            source.to_string(),
            destination.to_string(),
        ])?;
        Ok(())
    }
}
