/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

pub mod bucket;
pub use bucket::{BRANCH_PREFIX, BucketPath, ParseError};

mod config;
pub use config::StatsdGlobalConfig;

mod settings;
pub use settings::StatsdNotifierSettings;
