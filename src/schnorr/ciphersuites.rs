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

use serde::{Deserialize, Serialize};
use sha2::Sha256;
use sha3::Sha3_256;

use crate::schemes::algorithms::Ciphersuite;

pub trait SchnorrCiphersuite: Eq + 'static + Ciphersuite {
    /// Domain-separation tag mixed into every Fiat-Shamir challenge.
    const ID: &'static [u8];
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SchnorrSha256 {}

impl SchnorrCiphersuite for SchnorrSha256 {
    const ID: &'static [u8] = b"SCHNORR_MODP_XMD:SHA-256_FS_";
}

impl Ciphersuite for SchnorrSha256 {
    type HashAlg = Sha256;
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SchnorrSha3 {}

impl SchnorrCiphersuite for SchnorrSha3 {
    const ID: &'static [u8] = b"SCHNORR_MODP_XMD:SHA3-256_FS_";
}

impl Ciphersuite for SchnorrSha3 {
    type HashAlg = Sha3_256;
}
