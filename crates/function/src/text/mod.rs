// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 OpalDB

pub mod lower;
pub mod substring;
pub mod upper;
