/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use log::debug;

use crate::StatsdGlobalConfig;
use crate::bucket::{BucketPath, branch_path};

/// Settings passed to the statsd notifier of a single job.
///
/// The default value means statsd is disabled, and all fields are empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StatsdNotifierSettings {
    job_folder_path: BucketPath,
    host: String,
    port: String,
    bucket: String,
    max_size: String,
}

impl StatsdNotifierSettings {
    pub fn from_global_config(config: &StatsdGlobalConfig, full_job_path: &str) -> Self {
        let job_folder_path = branch_path(full_job_path);
        debug!("statsd bucket path for job {full_job_path}: {job_folder_path}");

        if !config.enabled() {
            return StatsdNotifierSettings::default();
        }

        StatsdNotifierSettings {
            job_folder_path,
            host: config.host().to_string(),
            port: config.port().to_string(),
            bucket: config.bucket().to_string(),
            max_size: config.max_size().to_string(),
        }
    }

    /// A job path always maps to a non-empty bucket path, so an empty one
    /// can only come from the disabled default.
    #[inline]
    pub fn is_enabled(&self) -> bool {
        !self.job_folder_path.is_empty()
    }

    #[inline]
    pub fn job_folder_path(&self) -> &BucketPath {
        &self.job_folder_path
    }

    #[inline]
    pub fn host(&self) -> &str {
        &self.host
    }

    #[inline]
    pub fn port(&self) -> &str {
        &self.port
    }

    #[inline]
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    #[inline]
    pub fn max_size(&self) -> &str {
        &self.max_size
    }
}
