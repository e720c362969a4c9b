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

use digest::Digest;
use rand::{CryptoRng, RngCore};
use rug::{integer::Order, Integer};
use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::schemes::algorithms::Ciphersuite;
use crate::schnorr::ciphersuites::SchnorrCiphersuite;
use crate::schnorr::group::GroupParams;
use crate::schnorr::keys::{SchnorrPublicKey, SchnorrSecretKey};
use crate::utils::random::random_exponent;
use crate::utils::util::IntegerExt;

/// Schnorr signature `(s, e)` obtained from the identification protocol by
/// the Fiat-Shamir transform: the challenge `e` is the hash of the
/// commitment and the message instead of a verifier's coin toss.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SchnorrSignature {
    pub(crate) s: Integer,
    pub(crate) e: Integer,
}

impl SchnorrSignature {
    /// Signs `message`: draws the nonce `k` from `[1, order-1]`, computes
    /// `R = g^k mod p`, `e = H(R, message) mod order` and
    /// `s = (k + e*x) mod order`. The nonce never leaves this function;
    /// repeating one across two messages leaks the secret key.
    pub fn sign<CS, R>(
        params: &GroupParams,
        sk: &SchnorrSecretKey,
        message: &[u8],
        rng: &mut R,
    ) -> Result<Self, Error>
    where
        CS: SchnorrCiphersuite,
        R: RngCore + CryptoRng,
    {
        sk.validate(params)?;
        let k = random_exponent(rng, params.order());
        let commitment = params.modexp(params.generator(), &k);
        let e = fiat_shamir_challenge::<CS>(params, &commitment, message);
        let s = (k + Integer::from(&e * &sk.x)) % params.order();
        Ok(Self { s, e })
    }

    /// Verifies `message` against the public key: reconstructs
    /// `R' = g^s * y^(order-e) mod p` and accepts iff the recomputed
    /// challenge equals `e`. A malformed signature or key yields `false`,
    /// never an error; the result is a pure function of the inputs.
    pub fn verify<CS: SchnorrCiphersuite>(
        &self,
        params: &GroupParams,
        pk: &SchnorrPublicKey,
        message: &[u8],
    ) -> bool {
        if pk.validate(params).is_err() {
            return false;
        }
        if self.s < 0 || &self.s >= params.order() {
            return false;
        }
        if self.e < 0 || &self.e >= params.order() {
            return false;
        }
        let neg_e = Integer::from(params.order() - &self.e);
        let reconstructed = Integer::from(
            params.modexp(params.generator(), &self.s) * &params.modexp(&pk.y, &neg_e),
        ) % params.modulus();
        let expected = fiat_shamir_challenge::<CS>(params, &reconstructed, message);
        expected == self.e
    }

    pub fn s(&self) -> &Integer {
        &self.s
    }

    pub fn e(&self) -> &Integer {
        &self.e
    }

    /// Canonical encoding: `s` then `e`, each `order_len` bytes big-endian.
    pub fn to_bytes(&self, params: &GroupParams) -> Vec<u8> {
        let len = params.order_len();
        let mut bytes = Vec::with_capacity(2 * len);
        bytes.extend_from_slice(&self.s.to_bytes_be(len));
        bytes.extend_from_slice(&self.e.to_bytes_be(len));
        bytes
    }

    pub fn from_bytes(bytes: &[u8], params: &GroupParams) -> Result<Self, Error> {
        let len = params.order_len();
        if bytes.len() != 2 * len {
            return Err(Error::Deserialization(format!(
                "expected {} signature bytes, got {}",
                2 * len,
                bytes.len()
            )));
        }
        Ok(Self {
            s: Integer::from_bytes_be(&bytes[..len]),
            e: Integer::from_bytes_be(&bytes[len..]),
        })
    }

    pub fn to_hex(&self, params: &GroupParams) -> String {
        hex::encode(self.to_bytes(params))
    }

    pub fn from_hex(raw: &str, params: &GroupParams) -> Result<Self, Error> {
        let bytes = hex::decode(raw).map_err(|e| Error::Deserialization(e.to_string()))?;
        Self::from_bytes(&bytes, params)
    }
}

/// Challenge derivation shared by `sign` and `verify`:
/// `H(ID || I2OSP(R, modulus_len) || I2OSP(len(m), 8) || m) mod order`.
/// The commitment is hashed in its fixed-width encoding and the message is
/// length-prefixed, so distinct transcripts never collide as byte strings.
fn fiat_shamir_challenge<CS: SchnorrCiphersuite>(
    params: &GroupParams,
    commitment: &Integer,
    message: &[u8],
) -> Integer {
    let mut hasher = <CS as Ciphersuite>::HashAlg::new();
    hasher.update(CS::ID);
    hasher.update(commitment.to_bytes_be(params.modulus_len()));
    hasher.update((message.len() as u64).to_be_bytes());
    hasher.update(message);
    let hash = hasher.finalize();
    Integer::from_digits(hash.as_slice(), Order::MsfBe) % params.order()
}
