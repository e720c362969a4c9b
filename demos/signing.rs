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

use rand::rngs::OsRng;
use rug::Integer;
use schnorrium::{
    keys::pair::KeyPair,
    schemes::algorithms::SCHNORR_SHA256,
    schnorr::{ciphersuites::SchnorrSha256, group::GroupParams, signature::SchnorrSignature},
};

fn main() {
    env_logger::init();

    let p = (Integer::from(1) << 127u32) - 1u32;
    let order = p.clone() - 1u32;
    let params = GroupParams::new(p, Integer::from(3), order).unwrap();

    log::info!("Keypair generation");
    let mut rng = OsRng;
    let keypair = KeyPair::<SCHNORR_SHA256>::generate(&params, &mut rng);

    let message = b"Hello, Crypto!";
    log::info!("Message: {:?}", core::str::from_utf8(message).unwrap());

    let signature =
        SchnorrSignature::sign::<SchnorrSha256, _>(&params, keypair.private_key(), message, &mut rng)
            .unwrap();
    log::info!("Signature: {}", signature.to_hex(&params));

    let valid = signature.verify::<SchnorrSha256>(&params, keypair.public_key(), message);
    assert!(valid, "Error! Signature should be VALID");
    log::info!("Signature is VALID!");

    let tampered =
        signature.verify::<SchnorrSha256>(&params, keypair.public_key(), b"Hello, World!");
    assert!(!tampered, "Error! Tampered message should be INVALID");
    log::info!("Tampered message correctly REJECTED");
}
