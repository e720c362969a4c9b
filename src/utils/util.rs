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

pub trait IntegerExt {
    /// Fixed-width big-endian encoding; the value must fit in `len` bytes.
    fn to_bytes_be(&self, len: usize) -> Vec<u8>;
    fn from_bytes_be(bytes: &[u8]) -> Self;
}

impl IntegerExt for Integer {
    fn to_bytes_be(&self, len: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; len];
        self.write_digits(&mut bytes, Order::MsfBe);
        bytes
    }

    fn from_bytes_be(bytes: &[u8]) -> Self {
        Integer::from_digits(bytes, Order::MsfBe)
    }
}
