// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use packed_abi_util::Address;

use crate::value::{NamedFields, Value};

/// Record matching [`transfer_type`](super::transfer_type).
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRecord {
    pub to: Address,
    pub amount: u64,
    pub memo: String,
}

impl NamedFields for TransferRecord {
    fn field_names(&self) -> Vec<String> {
        vec!["to".into(), "amount".into(), "memo".into()]
    }

    fn field_value(&self, name: &str) -> Option<Value> {
        match name {
            "to" => Some(Value::Address(self.to)),
            "amount" => Some(Value::U64(self.amount)),
            "memo" => Some(Value::String(self.memo.clone())),
            _ => None,
        }
    }
}
