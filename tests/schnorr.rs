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

#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

#[cfg(test)]
mod schnorr_tests {

    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use rug::Integer;
    use schnorrium::keys::pair::KeyPair;
    use schnorrium::schemes::algorithms::{Schnorr, Scheme, SCHNORR_SHA256, SCHNORR_SHA3_256};
    use schnorrium::schnorr::ciphersuites::{SchnorrCiphersuite, SchnorrSha256, SchnorrSha3};
    use schnorrium::schnorr::group::{GroupConfig, GroupParams};
    use schnorrium::schnorr::identification::{verify_transcript, Prover, Verifier};
    use schnorrium::schnorr::signature::SchnorrSignature;

    fn m127_params() -> GroupParams {
        let p = (Integer::from(1) << 127u32) - 1u32;
        let order = p.clone() - 1u32;
        GroupParams::new(p, Integer::from(3), order).unwrap()
    }

    fn identification_roundtrip<S: Scheme>()
    where
        S::Ciphersuite: SchnorrCiphersuite,
    {
        let params = m127_params();
        let mut rng = ChaCha20Rng::seed_from_u64(0xD15C0);
        let keypair = KeyPair::<Schnorr<S::Ciphersuite>>::generate(&params, &mut rng);

        let mut prover = Prover::new(&params, keypair.private_key()).unwrap();
        let mut verifier = Verifier::new(&params, keypair.public_key()).unwrap();

        let t = prover.commit(&mut rng).unwrap();
        let c = verifier.challenge(&t, &mut rng).unwrap();
        let s = prover.respond(&c).unwrap();

        assert!(verifier.verify(&s).unwrap(), "honest session must be accepted");
        assert!(verify_transcript(&params, keypair.public_key(), &t, &c, &s));
    }

    #[test]
    fn identification_sha256() {
        identification_roundtrip::<SCHNORR_SHA256>();
    }

    #[test]
    fn identification_sha3_256() {
        identification_roundtrip::<SCHNORR_SHA3_256>();
    }

    fn signature_roundtrip<S: Scheme>()
    where
        S::Ciphersuite: SchnorrCiphersuite,
    {
        let params = m127_params();
        let mut rng = ChaCha20Rng::seed_from_u64(0x51611);
        let keypair = KeyPair::<Schnorr<S::Ciphersuite>>::generate(&params, &mut rng);

        let message = b"integration roundtrip";
        let signature = SchnorrSignature::sign::<S::Ciphersuite, _>(
            &params,
            keypair.private_key(),
            message,
            &mut rng,
        )
        .unwrap();

        assert!(signature.verify::<S::Ciphersuite>(&params, keypair.public_key(), message));
        assert!(!signature.verify::<S::Ciphersuite>(&params, keypair.public_key(), b"tampered"));

        let restored =
            SchnorrSignature::from_bytes(&signature.to_bytes(&params), &params).unwrap();
        assert!(restored.verify::<S::Ciphersuite>(&params, keypair.public_key(), message));
    }

    #[test]
    fn signature_sha256() {
        signature_roundtrip::<SCHNORR_SHA256>();
    }

    #[test]
    fn signature_sha3_256() {
        signature_roundtrip::<SCHNORR_SHA3_256>();
    }

    #[test]
    fn suites_produce_incompatible_challenges() {
        let params = m127_params();
        let mut rng = ChaCha20Rng::seed_from_u64(0xABCD);
        let keypair = KeyPair::<SCHNORR_SHA256>::generate(&params, &mut rng);

        let message = b"suite separation";
        let signature = SchnorrSignature::sign::<SchnorrSha256, _>(
            &params,
            keypair.private_key(),
            message,
            &mut rng,
        )
        .unwrap();

        // Same group, same keys: a signature bound to SHA-256 must not
        // verify under the SHA3-256 challenge derivation.
        let cross =
            signature.verify::<SchnorrSha3>(&params, keypair.public_key(), message);
        assert!(!cross);
    }

    #[test]
    fn parameters_travel_through_configuration() {
        let params = m127_params();
        let raw = serde_json::to_string(&params).unwrap();
        let config = GroupConfig::from_json(&raw).unwrap();
        let restored = GroupParams::try_from(config).unwrap();
        assert_eq!(restored, params);

        let mut rng = ChaCha20Rng::seed_from_u64(0xC0FF);
        let keypair = KeyPair::<SCHNORR_SHA256>::generate(&restored, &mut rng);
        let mut prover = Prover::new(&restored, keypair.private_key()).unwrap();
        let mut verifier = Verifier::new(&restored, keypair.public_key()).unwrap();

        let t = prover.commit(&mut rng).unwrap();
        let c = verifier.challenge(&t, &mut rng).unwrap();
        let s = prover.respond(&c).unwrap();
        assert!(verifier.verify(&s).unwrap());
    }

    #[test]
    fn keypair_serde_roundtrip() {
        let params = m127_params();
        let mut rng = ChaCha20Rng::seed_from_u64(0x4B45);
        let keypair = KeyPair::<SCHNORR_SHA256>::generate(&params, &mut rng);

        let raw = serde_json::to_string(&keypair).unwrap();
        let restored: KeyPair<SCHNORR_SHA256> = serde_json::from_str(&raw).unwrap();
        assert_eq!(restored, keypair);

        let (private, public) = restored.into_parts();
        assert_eq!(&public, keypair.public_key());
        assert_eq!(&private, keypair.private_key());
    }
}
