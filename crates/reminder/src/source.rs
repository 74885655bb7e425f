use std::path::{Path, PathBuf};

use async_trait::async_trait;
use classplan_core::{
    errors::{PlanError, PlanResult},
    models::subject::SubjectSchedule,
};
use tracing::debug;

#[cfg(test)]
use mockall::automock;

/// Provides a consistent snapshot of every subject's schedule.
///
/// The reminder task calls [`SubjectSource::snapshot`] once per tick and
/// parses only what that call returned, so implementations must not hand out
/// a half-updated list.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SubjectSource: Send + Sync {
    async fn snapshot(&self) -> PlanResult<Vec<SubjectSchedule>>;
}

/// Reads subjects from a JSON file holding an array of `{label, schedule}`.
///
/// The file is read whole on every snapshot, so edits made by the planner
/// are picked up on the next tick.
#[derive(Debug, Clone)]
pub struct FileSubjectSource {
    path: PathBuf,
}

impl FileSubjectSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SubjectSource for FileSubjectSource {
    async fn snapshot(&self) -> PlanResult<Vec<SubjectSchedule>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(PlanError::NotFound(format!(
                    "Subjects file {} does not exist",
                    self.path.display()
                )));
            }
            Err(err) => return Err(err.into()),
        };

        let subjects: Vec<SubjectSchedule> = serde_json::from_str(&contents).map_err(|err| {
            PlanError::Validation(format!(
                "Subjects file {} is not a subject list: {}",
                self.path.display(),
                err
            ))
        })?;

        debug!(path = %self.path.display(), subjects = subjects.len(), "Loaded subject snapshot");
        Ok(subjects)
    }
}
