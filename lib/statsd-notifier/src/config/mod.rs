/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

#[cfg(feature = "yaml")]
mod yaml;

/// Snapshot of the global statsd settings.
///
/// The values are kept verbatim, checking them is left to the metrics emitter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatsdGlobalConfig {
    enable_statsd: bool,
    host: String,
    port: String,
    bucket: String,
    max_size: String,
}

impl StatsdGlobalConfig {
    pub fn set_enabled(&mut self, enable: bool) {
        self.enable_statsd = enable;
    }

    pub fn set_host<T: Into<String>>(&mut self, host: T) {
        self.host = host.into();
    }

    pub fn set_port<T: Into<String>>(&mut self, port: T) {
        self.port = port.into();
    }

    pub fn set_bucket<T: Into<String>>(&mut self, bucket: T) {
        self.bucket = bucket.into();
    }

    pub fn set_max_size<T: Into<String>>(&mut self, max_size: T) {
        self.max_size = max_size.into();
    }

    #[inline]
    pub fn enabled(&self) -> bool {
        self.enable_statsd
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
