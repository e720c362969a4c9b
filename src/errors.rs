// Copyright 2025 Fondazione LINKS

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use thiserror::Error;

/// Failures surfaced by the library. A proof or signature that does not
/// verify is reported as a `false` result, never through this enum.
#[derive(Error, Clone, Debug)]
pub enum Error {
    #[error("Invalid group parameters: {0}")]
    InvalidParameter(String),
    #[error("Key outside its valid range: {0}")]
    InvalidKey(String),
    #[error("Protocol operation out of sequence: {0}")]
    ProtocolState(String),
    #[error("Error during deserialization: {0}")]
    Deserialization(String),
}
