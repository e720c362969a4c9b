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

use rand::{CryptoRng, RngCore};
use rug::Integer;
use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::schemes::algorithms::{Ciphersuite, Scheme, Schnorr};
use crate::schnorr::group::GroupParams;
use crate::schnorr::keys::SchnorrSecretKey;
use crate::utils::random::random_exponent;

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct KeyPair<S: Scheme> {
    pub(crate) public: S::PubKey,
    pub(crate) private: S::PrivKey,
}

impl<S> KeyPair<S>
where
    S: Scheme,
{
    pub fn public_key(&self) -> &S::PubKey {
        &self.public
    }

    pub fn private_key(&self) -> &S::PrivKey {
        &self.private
    }

    /// Returns the couple `(sk, pk)`.
    pub fn into_parts(self) -> (S::PrivKey, S::PubKey) {
        (self.private, self.public)
    }
}

impl<CS: Ciphersuite> KeyPair<Schnorr<CS>> {
    /// Draws a secret exponent uniformly from `[1, order-1]` and derives
    /// the public key `y = g^x mod p`.
    pub fn generate<R: RngCore + CryptoRng>(params: &GroupParams, rng: &mut R) -> Self {
        let private = SchnorrSecretKey::new(random_exponent(rng, params.order()));
        Self {
            public: private.public_key(params),
            private,
        }
    }

    /// Builds the pair from an externally supplied secret exponent.
    /// Exponents outside `[1, order-1]` are rejected.
    pub fn from_secret(params: &GroupParams, secret: Integer) -> Result<Self, Error> {
        let private = SchnorrSecretKey::new(secret);
        private.validate(params)?;
        Ok(Self {
            public: private.public_key(params),
            private,
        })
    }
}
