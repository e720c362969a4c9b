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

use core::mem;

use rand::{CryptoRng, RngCore};
use rug::Integer;

use crate::errors::Error;
use crate::schnorr::group::GroupParams;
use crate::schnorr::keys::{SchnorrPublicKey, SchnorrSecretKey};
use crate::utils::random::random_exponent;

/// Session nonce `r`. Deliberately not `Clone`: created by `commit`,
/// destroyed by the single `respond` that consumes it. Answering two
/// different challenges with the same nonce reveals the secret exponent.
#[derive(Debug)]
struct Nonce(Integer);

#[derive(Debug)]
enum ProverState {
    Idle,
    Committed(Nonce),
}

/// Prover role of the three-move identification protocol. Holds the secret
/// exponent and, between `commit` and `respond`, the session nonce. The
/// verifier role shares nothing with this type.
#[derive(Debug)]
pub struct Prover<'a> {
    params: &'a GroupParams,
    secret: &'a SchnorrSecretKey,
    state: ProverState,
}

impl<'a> Prover<'a> {
    pub fn new(params: &'a GroupParams, secret: &'a SchnorrSecretKey) -> Result<Self, Error> {
        secret.validate(params)?;
        Ok(Self {
            params,
            secret,
            state: ProverState::Idle,
        })
    }

    /// Opens a session: draws the nonce `r` uniformly from `[1, order-1]`
    /// and returns the commitment `t = g^r mod p`. A pending session must
    /// be completed with `respond` or dropped with `abort` before
    /// committing again.
    pub fn commit<R: RngCore + CryptoRng>(&mut self, rng: &mut R) -> Result<Integer, Error> {
        if matches!(self.state, ProverState::Committed(_)) {
            return Err(Error::ProtocolState(
                "commit while a session nonce is pending".into(),
            ));
        }
        let r = random_exponent(rng, self.params.order());
        let commitment = self.params.modexp(self.params.generator(), &r);
        self.state = ProverState::Committed(Nonce(r));
        Ok(commitment)
    }

    /// Answers the challenge with `s = (r + c*x) mod order`, consuming the
    /// session nonce. Fails before `commit` and on a second call.
    pub fn respond(&mut self, challenge: &Integer) -> Result<Integer, Error> {
        if *challenge < 1 || challenge >= self.params.order() {
            return Err(Error::InvalidParameter(
                "challenge outside [1, order-1]".into(),
            ));
        }
        let Nonce(r) = match mem::replace(&mut self.state, ProverState::Idle) {
            ProverState::Committed(nonce) => nonce,
            ProverState::Idle => {
                return Err(Error::ProtocolState("respond before commit".into()));
            }
        };
        let s = (r + Integer::from(challenge * &self.secret.x)) % self.params.order();
        Ok(s)
    }

    /// Discards a pending session without producing a response.
    pub fn abort(&mut self) {
        self.state = ProverState::Idle;
    }
}

#[cfg(test)]
impl<'a> Prover<'a> {
    /// Test-only: installs a chosen nonce, bypassing the random draw.
    fn commit_with_nonce(&mut self, r: Integer) -> Integer {
        let commitment = self.params.modexp(self.params.generator(), &r);
        self.state = ProverState::Committed(Nonce(r));
        commitment
    }
}

#[derive(Debug)]
enum VerifierState {
    Idle,
    Challenged {
        commitment: Integer,
        challenge: Integer,
    },
    Decided {
        response: Integer,
        accepted: bool,
    },
}

/// Verifier role of the identification protocol. Holds only public data:
/// the group parameters, the claimed public key and the session transcript.
#[derive(Debug)]
pub struct Verifier<'a> {
    params: &'a GroupParams,
    public: &'a SchnorrPublicKey,
    state: VerifierState,
}

impl<'a> Verifier<'a> {
    pub fn new(params: &'a GroupParams, public: &'a SchnorrPublicKey) -> Result<Self, Error> {
        public.validate(params)?;
        Ok(Self {
            params,
            public,
            state: VerifierState::Idle,
        })
    }

    /// Issues a fresh uniform challenge in `[1, order-1]` for the received
    /// commitment and records the pair for the final check.
    pub fn challenge<R: RngCore + CryptoRng>(
        &mut self,
        commitment: &Integer,
        rng: &mut R,
    ) -> Result<Integer, Error> {
        if !matches!(self.state, VerifierState::Idle) {
            return Err(Error::ProtocolState(
                "challenge already issued for this session".into(),
            ));
        }
        if *commitment < 1 || commitment >= self.params.modulus() {
            return Err(Error::InvalidParameter(
                "commitment outside [1, modulus-1]".into(),
            ));
        }
        let challenge = random_exponent(rng, self.params.order());
        self.state = VerifierState::Challenged {
            commitment: commitment.clone(),
            challenge: challenge.clone(),
        };
        Ok(challenge)
    }

    /// Decides the session: accepts iff `g^s == t * y^c mod p`. Repeating
    /// the call with the identical response returns the recorded decision;
    /// a different response after the decision is a state error.
    pub fn verify(&mut self, response: &Integer) -> Result<bool, Error> {
        match mem::replace(&mut self.state, VerifierState::Idle) {
            VerifierState::Idle => Err(Error::ProtocolState("verify before challenge".into())),
            VerifierState::Challenged {
                commitment,
                challenge,
            } => {
                let accepted = verify_transcript(
                    self.params,
                    self.public,
                    &commitment,
                    &challenge,
                    response,
                );
                self.state = VerifierState::Decided {
                    response: response.clone(),
                    accepted,
                };
                Ok(accepted)
            }
            VerifierState::Decided { response: decided, accepted } => {
                let same = &decided == response;
                self.state = VerifierState::Decided {
                    response: decided,
                    accepted,
                };
                if same {
                    Ok(accepted)
                } else {
                    Err(Error::ProtocolState(
                        "session already decided on a different response".into(),
                    ))
                }
            }
        }
    }

    /// Outcome of the current session, once decided.
    pub fn accepted(&self) -> Option<bool> {
        match &self.state {
            VerifierState::Decided { accepted, .. } => Some(*accepted),
            _ => None,
        }
    }

    /// Clears the session so a new commitment can be processed.
    pub fn reset(&mut self) {
        self.state = VerifierState::Idle;
    }
}

/// The verification equation over a complete transcript: range-checks the
/// values and accepts iff `g^s == t * y^c mod p`. Pure and deterministic;
/// a failed proof is an outcome, not an error. Intended for transport
/// layers that collect `(t, c, s)` and check it in one place.
pub fn verify_transcript(
    params: &GroupParams,
    public: &SchnorrPublicKey,
    commitment: &Integer,
    challenge: &Integer,
    response: &Integer,
) -> bool {
    if public.validate(params).is_err() {
        return false;
    }
    if *commitment < 1 || commitment >= params.modulus() {
        return false;
    }
    if *challenge < 1 || challenge >= params.order() {
        return false;
    }
    if *response < 0 || response >= params.order() {
        return false;
    }
    let lhs = params.modexp(params.generator(), response);
    let rhs =
        Integer::from(commitment * &params.modexp(&public.y, challenge)) % params.modulus();
    lhs == rhs
}
