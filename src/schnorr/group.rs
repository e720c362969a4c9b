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

use rug::Integer;
use serde::{Deserialize, Serialize};

use crate::errors::Error;

/// Multiplicative-group domain parameters shared read-only by every role:
/// prime modulus `p`, generator `g` and the order of `g`.
///
/// Construction validates the ranges below; that `g` actually has the
/// declared order (and that `p` is prime) is the responsibility of whoever
/// produced the configuration. Immutable after construction.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "GroupConfig", into = "GroupConfig")]
pub struct GroupParams {
    modulus: Integer,
    generator: Integer,
    order: Integer,
}

/// Raw `{modulus, generator, order}` configuration as it arrives from disk
/// or the network. Turned into validated [`GroupParams`] via `TryFrom`, so
/// serde cannot hand out unchecked parameters.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GroupConfig {
    pub modulus: Integer,
    pub generator: Integer,
    pub order: Integer,
}

impl GroupConfig {
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        serde_json::from_str(raw).map_err(|e| Error::Deserialization(e.to_string()))
    }
}

impl GroupParams {
    pub fn new(modulus: Integer, generator: Integer, order: Integer) -> Result<Self, Error> {
        if modulus < 3 || modulus.is_even() {
            return Err(Error::InvalidParameter(
                "modulus must be an odd integer >= 3".into(),
            ));
        }
        if generator < 2 || generator > Integer::from(&modulus - 2u32) {
            return Err(Error::InvalidParameter(
                "generator outside [2, modulus-2]".into(),
            ));
        }
        if order < 2 || order >= modulus {
            return Err(Error::InvalidParameter(
                "order outside [2, modulus-1]".into(),
            ));
        }
        Ok(Self {
            modulus,
            generator,
            order,
        })
    }

    pub fn modulus(&self) -> &Integer {
        &self.modulus
    }

    pub fn generator(&self) -> &Integer {
        &self.generator
    }

    pub fn order(&self) -> &Integer {
        &self.order
    }

    /// Width in bytes of a canonically encoded group element.
    pub fn modulus_len(&self) -> usize {
        (self.modulus.significant_bits() as usize + 7) / 8
    }

    /// Width in bytes of a canonically encoded exponent.
    pub fn order_len(&self) -> usize {
        (self.order.significant_bits() as usize + 7) / 8
    }

    /// `base^exponent mod modulus` by fast exponentiation. The base is
    /// reduced internally; the exponent must be non-negative. Inverse
    /// powers are expressed as `base^(order - e)`, never as negative
    /// exponents.
    pub fn modexp(&self, base: &Integer, exponent: &Integer) -> Integer {
        debug_assert!(*exponent >= 0);
        Integer::from(base.pow_mod_ref(exponent, &self.modulus).unwrap())
    }
}

impl TryFrom<GroupConfig> for GroupParams {
    type Error = Error;

    fn try_from(config: GroupConfig) -> Result<Self, Self::Error> {
        Self::new(config.modulus, config.generator, config.order)
    }
}

impl From<GroupParams> for GroupConfig {
    fn from(params: GroupParams) -> Self {
        Self {
            modulus: params.modulus,
            generator: params.generator,
            order: params.order,
        }
    }
}
