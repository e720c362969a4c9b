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

use rug::{integer::Order, Integer};
use serde::{Deserialize, Serialize};

use crate::errors::Error;
use crate::keys::traits::{PrivateKey, PublicKey};
use crate::schnorr::group::GroupParams;
use crate::utils::util::IntegerExt;

/// Public verification key `y = g^x mod p`. Shared freely; used only to
/// check proofs and signatures.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SchnorrPublicKey {
    pub y: Integer,
}

impl SchnorrPublicKey {
    pub fn new(y: Integer) -> Self {
        Self { y }
    }

    /// Rejects keys outside `[2, modulus-1]`. `y == 1` only arises from the
    /// invalid exponent `x == 0`.
    pub fn validate(&self, params: &GroupParams) -> Result<(), Error> {
        if self.y < 2 || &self.y >= params.modulus() {
            return Err(Error::InvalidKey(
                "public key outside [2, modulus-1]".into(),
            ));
        }
        Ok(())
    }

    /// Canonical fixed-width big-endian encoding, `modulus_len` bytes.
    pub fn to_padded_bytes(&self, params: &GroupParams) -> Vec<u8> {
        self.y.to_bytes_be(params.modulus_len())
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            y: Integer::from_bytes_be(bytes),
        }
    }
}

impl PublicKey for SchnorrPublicKey {
    fn to_bytes(&self) -> Vec<u8> {
        self.y.to_digits(Order::MsfBe)
    }

    fn encode(&self) -> String {
        hex::encode(PublicKey::to_bytes(self))
    }
}

/// Secret exponent `x` in `[1, order-1]`. Owned exclusively by the prover
/// or signer; never transmitted.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SchnorrSecretKey {
    pub(crate) x: Integer,
}

impl SchnorrSecretKey {
    pub fn new(x: Integer) -> Self {
        Self { x }
    }

    /// Rejects exponents outside `[1, order-1]`.
    pub fn validate(&self, params: &GroupParams) -> Result<(), Error> {
        if self.x < 1 || &self.x >= params.order() {
            return Err(Error::InvalidKey(
                "secret key outside [1, order-1]".into(),
            ));
        }
        Ok(())
    }

    /// Derives `y = g^x mod p`.
    pub fn public_key(&self, params: &GroupParams) -> SchnorrPublicKey {
        SchnorrPublicKey::new(params.modexp(params.generator(), &self.x))
    }
}

impl PrivateKey for SchnorrSecretKey {
    fn to_bytes(&self) -> Vec<u8> {
        self.x.to_digits(Order::MsfBe)
    }

    fn encode(&self) -> String {
        hex::encode(PrivateKey::to_bytes(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::pair::KeyPair;
    use crate::schemes::algorithms::SCHNORR_SHA256;

    fn toy_params() -> GroupParams {
        GroupParams::new(Integer::from(23), Integer::from(5), Integer::from(22)).unwrap()
    }

    #[test]
    fn derives_public_key_from_secret() {
        let params = toy_params();
        let keypair =
            KeyPair::<SCHNORR_SHA256>::from_secret(&params, Integer::from(6)).unwrap();
        assert_eq!(keypair.public_key().y, Integer::from(8));
    }

    #[test]
    fn rejects_out_of_range_secrets() {
        let params = toy_params();
        for x in [0i32, 22, -3] {
            let result = KeyPair::<SCHNORR_SHA256>::from_secret(&params, Integer::from(x));
            assert!(matches!(result, Err(Error::InvalidKey(_))));
        }
    }

    #[test]
    fn rejects_out_of_range_public_keys() {
        let params = toy_params();
        for y in [0i32, 1, 23] {
            let pk = SchnorrPublicKey::new(Integer::from(y));
            assert!(matches!(pk.validate(&params), Err(Error::InvalidKey(_))));
        }
        assert!(SchnorrPublicKey::new(Integer::from(8))
            .validate(&params)
            .is_ok());
    }

    #[test]
    fn padded_encoding_roundtrip() {
        let params = toy_params();
        let pk = SchnorrPublicKey::new(Integer::from(8));
        let bytes = pk.to_padded_bytes(&params);
        assert_eq!(bytes.len(), params.modulus_len());
        assert_eq!(SchnorrPublicKey::from_bytes(&bytes), pk);
        assert_eq!(pk.encode(), hex::encode(PublicKey::to_bytes(&pk)));

        let sk = SchnorrSecretKey::new(Integer::from(6));
        assert_eq!(sk.encode(), hex::encode(PrivateKey::to_bytes(&sk)));
    }
}
