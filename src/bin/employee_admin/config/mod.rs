// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! Stored by `confy` in the platform configuration directory. A missing file
//! is created with the defaults on first run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "mediate-admin";

const LOG_FILE_NAME: &str = "mediate-admin.log";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AdminConfig {
    pub version: u32,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
    pub seed_demo_data: bool,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            version: 1,
            log_file: None,
            log_level: "info".to_owned(),
            seed_demo_data: true,
        }
    }
}

impl AdminConfig {
    /// Where log output goes, the temporary directory unless configured.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(LOG_FILE_NAME))
    }
}

pub fn load_config() -> AdminConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}
