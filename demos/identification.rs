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
    schnorr::{
        group::GroupParams,
        identification::{Prover, Verifier},
    },
};

fn main() {
    env_logger::init();

    // Demo-only group: a Mersenne prime keeps the example self-contained.
    // Production parameters must come from vetted configuration.
    let p = (Integer::from(1) << 127u32) - 1u32;
    let order = p.clone() - 1u32;
    let params = GroupParams::new(p, Integer::from(3), order).unwrap();

    log::info!("Keypair generation");
    let mut rng = OsRng;
    let keypair = KeyPair::<SCHNORR_SHA256>::generate(&params, &mut rng);

    let mut prover = Prover::new(&params, keypair.private_key()).unwrap();
    let mut verifier = Verifier::new(&params, keypair.public_key()).unwrap();

    log::info!("Prover commits");
    let t = prover.commit(&mut rng).unwrap();
    log::info!("t = {}", t);

    log::info!("Verifier challenges");
    let c = verifier.challenge(&t, &mut rng).unwrap();
    log::info!("c = {}", c);

    log::info!("Prover responds");
    let s = prover.respond(&c).unwrap();
    log::info!("s = {}", s);

    let accepted = verifier.verify(&s).unwrap();
    assert!(accepted, "Error! The honest session should be ACCEPTED");
    log::info!("Identification ACCEPTED");
}
