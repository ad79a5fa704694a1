// SPDX-FileCopyrightText: 2026 Concierge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared test doubles for the Concierge workspace.

pub mod mock_provider;

pub use mock_provider::MockProvider;
