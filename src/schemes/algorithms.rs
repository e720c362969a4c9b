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

use core::marker::PhantomData;

use digest::Digest;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::keys::traits::{PrivateKey, PublicKey};
use crate::schnorr::ciphersuites::{SchnorrSha256, SchnorrSha3};
use crate::schnorr::keys::{SchnorrPublicKey, SchnorrSecretKey};

pub trait Ciphersuite: Eq + 'static + Serialize + DeserializeOwned {
    type HashAlg: Digest;
}

pub trait Scheme: Eq + 'static + Sized + Serialize + DeserializeOwned {
    type Ciphersuite: Ciphersuite;
    type PrivKey: PrivateKey;
    type PubKey: PublicKey;
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Schnorr<CS: Ciphersuite> {
    _suite: PhantomData<CS>,
}

impl<CS: Ciphersuite> Scheme for Schnorr<CS> {
    type Ciphersuite = CS;
    type PrivKey = SchnorrSecretKey;
    type PubKey = SchnorrPublicKey;
}

#[allow(non_camel_case_types)]
pub type SCHNORR_SHA256 = Schnorr<SchnorrSha256>;
#[allow(non_camel_case_types)]
pub type SCHNORR_SHA3_256 = Schnorr<SchnorrSha3>;
